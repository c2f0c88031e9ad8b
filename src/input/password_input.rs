use crate::input::text_input::TextInput;
use crate::input::{Input, KeyResult};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;

/// Masked text entry. Editing behaves exactly like [`TextInput`];
/// only rendering differs.
pub struct PasswordInput {
    inner: TextInput,
}

impl PasswordInput {
    pub fn new() -> Self {
        Self {
            inner: TextInput::new(),
        }
    }

    fn raw_len(&self) -> usize {
        self.inner.value().chars().count()
    }
}

impl Default for PasswordInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Input for PasswordInput {
    fn value(&self) -> String {
        self.inner.value()
    }

    fn set_value(&mut self, value: String) {
        self.inner.set_value(value);
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult {
        self.inner.handle_key(code, modifiers)
    }

    fn render_content(&self) -> Vec<Span> {
        vec![Span::new("*".repeat(self.raw_len()))]
    }

    fn is_masked(&self) -> bool {
        true
    }
}
