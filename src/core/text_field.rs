//! Single-line text editor used by the wizard's text steps.
//!
//! The cursor is a byte offset into `value` and always sits on a char
//! boundary, same as the multi-line input box it was modeled on.

use unicode_width::UnicodeWidthStr;

use crate::core::action::Key;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    cursor: usize,
}

impl TextField {
    /// Creates a field pre-filled with `value`, cursor at the end.
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Byte offset of the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display width of the text before the cursor, in terminal columns.
    pub fn cursor_column(&self) -> usize {
        self.value[..self.cursor].width()
    }

    /// Applies an editing key. Returns `true` if the key was consumed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Char(c) => {
                self.value.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                true
            }
            Key::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.value, self.cursor);
                    self.value.drain(prev..self.cursor);
                    self.cursor = prev;
                }
                true
            }
            Key::Delete => {
                if self.cursor < self.value.len() {
                    let next = next_char_boundary(&self.value, self.cursor);
                    self.value.drain(self.cursor..next);
                }
                true
            }
            Key::Left => {
                self.cursor = prev_char_boundary(&self.value, self.cursor);
                true
            }
            Key::Right => {
                self.cursor = next_char_boundary(&self.value, self.cursor);
                true
            }
            Key::Home => {
                self.cursor = 0;
                true
            }
            Key::End => {
                self.cursor = self.value.len();
                true
            }
            _ => false,
        }
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map(|(i, _)| i).unwrap_or(0)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(pos)
}
