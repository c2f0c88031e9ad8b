use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    Handled,
    NotHandled,
    Submit,
}

/// A single focusable widget bound to one wizard step. Widgets own their
/// edit state only; the collected value lives in the wizard's AnswerSet.
pub trait Input: Send {
    fn value(&self) -> String;
    fn set_value(&mut self, value: String);

    fn clear(&mut self) {
        self.set_value(String::new());
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult;

    fn render_content(&self) -> Vec<Span>;

    /// Masked widgets render and summarize as `***`.
    fn is_masked(&self) -> bool {
        false
    }
}
