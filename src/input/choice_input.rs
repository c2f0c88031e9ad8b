use crate::input::{Input, KeyResult};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::style::{Color, Style};

/// Vertical single-choice list. There is always a highlighted option,
/// so committing the step can never produce an empty value.
pub struct ChoiceInput {
    options: Vec<String>,
    active_index: usize,
}

impl ChoiceInput {
    pub fn new(options: Vec<String>) -> Self {
        Self {
            options,
            active_index: 0,
        }
    }

    fn move_active(&mut self, delta: isize) -> bool {
        if self.options.is_empty() {
            return false;
        }

        let len = self.options.len() as isize;
        let next = ((self.active_index as isize + delta + len) % len) as usize;
        if next == self.active_index {
            return false;
        }

        self.active_index = next;
        true
    }
}

impl Input for ChoiceInput {
    fn value(&self) -> String {
        self.options
            .get(self.active_index)
            .cloned()
            .unwrap_or_default()
    }

    fn set_value(&mut self, value: String) {
        if let Some(pos) = self.options.iter().position(|opt| *opt == value) {
            self.active_index = pos;
        }
    }

    fn clear(&mut self) {
        // A choice list has no transient edit state to discard.
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult {
        if modifiers != KeyModifiers::NONE {
            return KeyResult::NotHandled;
        }

        match code {
            KeyCode::Up => {
                self.move_active(-1);
                KeyResult::Handled
            }
            KeyCode::Down => {
                self.move_active(1);
                KeyResult::Handled
            }
            KeyCode::Enter => KeyResult::Submit,
            _ => KeyResult::NotHandled,
        }
    }

    fn render_content(&self) -> Vec<Span> {
        self.options
            .iter()
            .enumerate()
            .map(|(idx, option)| {
                if idx == self.active_index {
                    Span::styled(format!("➤ {}", option), Style::new().color(Color::Cyan))
                } else {
                    Span::new(format!("  {}", option))
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["general".into(), "regression".into(), "security".into()]
    }

    #[test]
    fn starts_on_first_option() {
        let input = ChoiceInput::new(options());
        assert_eq!(input.value(), "general");
    }

    #[test]
    fn wraps_in_both_directions() {
        let mut input = ChoiceInput::new(options());
        input.handle_key(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(input.value(), "security");
        input.handle_key(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(input.value(), "general");
    }

    #[test]
    fn set_value_selects_matching_option() {
        let mut input = ChoiceInput::new(options());
        input.set_value("regression".to_string());
        assert_eq!(input.value(), "regression");
        input.set_value("nonexistent".to_string());
        assert_eq!(input.value(), "regression");
    }
}
