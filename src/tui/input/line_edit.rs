use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::util::unicode;

/// Single-line text buffer with a byte-offset cursor on grapheme boundaries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEdit {
    pub text: String,
    pub cursor: usize,
}

impl LineEdit {
    /// Buffer holding `text` with the cursor at the end
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        LineEdit { text, cursor }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_str(&mut self, s: &str) {
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    /// Apply an editing key. Returns true if the text changed.
    pub fn apply(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('u') if ctrl => {
                // Kill to start of line
                let changed = self.cursor > 0;
                self.text.replace_range(..self.cursor, "");
                self.cursor = 0;
                changed
            }
            KeyCode::Char('a') if ctrl => {
                self.cursor = 0;
                false
            }
            KeyCode::Char('e') if ctrl => {
                self.cursor = self.text.len();
                false
            }
            KeyCode::Char(c)
                if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                self.text.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                true
            }
            KeyCode::Backspace => match unicode::prev_grapheme_boundary(&self.text, self.cursor) {
                Some(prev) => {
                    self.text.replace_range(prev..self.cursor, "");
                    self.cursor = prev;
                    true
                }
                None => false,
            },
            KeyCode::Delete => match unicode::next_grapheme_boundary(&self.text, self.cursor) {
                Some(next) => {
                    self.text.replace_range(self.cursor..next, "");
                    true
                }
                None => false,
            },
            KeyCode::Left => {
                if let Some(prev) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
                    self.cursor = prev;
                }
                false
            }
            KeyCode::Right => {
                if let Some(next) = unicode::next_grapheme_boundary(&self.text, self.cursor) {
                    self.cursor = next;
                }
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.text.len();
                false
            }
            _ => false,
        }
    }
}
