use crate::input::{Input, KeyResult};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;

pub struct TextInput {
    value: String,
    cursor_pos: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            cursor_pos: 0,
        }
    }

    fn byte_pos(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn handle_char(&mut self, ch: char) {
        let byte_pos = self.byte_pos(self.cursor_pos);
        self.value.insert(byte_pos, ch);
        self.cursor_pos += 1;
    }

    fn handle_backspace(&mut self) -> bool {
        if self.cursor_pos == 0 {
            return false;
        }
        let byte_pos = self.byte_pos(self.cursor_pos - 1);
        self.value.remove(byte_pos);
        self.cursor_pos -= 1;
        true
    }

    fn handle_delete(&mut self) {
        if self.cursor_pos < self.value.chars().count() {
            let byte_pos = self.byte_pos(self.cursor_pos);
            self.value.remove(byte_pos);
        }
    }

    fn move_left(&mut self) -> bool {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            true
        } else {
            false
        }
    }

    fn move_right(&mut self) -> bool {
        if self.cursor_pos < self.value.chars().count() {
            self.cursor_pos += 1;
            true
        } else {
            false
        }
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Input for TextInput {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: String) {
        self.cursor_pos = value.chars().count();
        self.value = value;
    }

    fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> KeyResult {
        match code {
            KeyCode::Char(ch) => {
                self.handle_char(ch);
                KeyResult::Handled
            }
            KeyCode::Backspace => {
                if self.handle_backspace() {
                    KeyResult::Handled
                } else {
                    KeyResult::NotHandled
                }
            }
            KeyCode::Delete => {
                self.handle_delete();
                KeyResult::Handled
            }
            // Left at the start of the line is released to the wizard,
            // which interprets it as back-navigation.
            KeyCode::Left => {
                if self.move_left() {
                    KeyResult::Handled
                } else {
                    KeyResult::NotHandled
                }
            }
            KeyCode::Right => {
                self.move_right();
                KeyResult::Handled
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                KeyResult::Handled
            }
            KeyCode::End => {
                self.cursor_pos = self.value.chars().count();
                KeyResult::Handled
            }
            KeyCode::Enter => KeyResult::Submit,
            _ => KeyResult::NotHandled,
        }
    }

    fn render_content(&self) -> Vec<Span> {
        vec![Span::new(&self.value)]
    }
}
