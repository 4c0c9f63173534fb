use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

/// Single-line editable text with a byte-offset cursor that always sits on
/// a UTF-8 boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    buffer: String,
    cursor: usize,
}

impl TextField {
    /// Pre-filled field with the cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let buffer = text.into();
        let cursor = buffer.len();
        Self { buffer, cursor }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn into_text(self) -> String {
        self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display columns between the start of the text and the cursor.
    pub fn cursor_column(&self) -> u16 {
        self.buffer[..self.cursor].width() as u16
    }

    pub fn insert(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let start = prev_char_boundary(&self.buffer, self.cursor);
            self.buffer.drain(start..self.cursor);
            self.cursor = start;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            let end = next_char_boundary(&self.buffer, self.cursor);
            self.buffer.drain(self.cursor..end);
        }
    }

    pub fn left(&mut self) {
        self.cursor = prev_char_boundary(&self.buffer, self.cursor);
    }

    pub fn right(&mut self) {
        self.cursor = next_char_boundary(&self.buffer, self.cursor);
    }

    pub fn word_left(&mut self) {
        self.cursor = prev_word_boundary(&self.buffer, self.cursor);
    }

    pub fn word_right(&mut self) {
        self.cursor = next_word_boundary(&self.buffer, self.cursor);
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Applies an editing key. Enter, Esc, function keys and Alt chords
    /// are left alone for the caller.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Left if ctrl => self.word_left(),
            KeyCode::Right if ctrl => self.word_right(),
            KeyCode::Left => self.left(),
            KeyCode::Right => self.right(),
            KeyCode::Home => self.home(),
            KeyCode::End => self.end(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.insert(c)
            }
            _ => {}
        }
    }
}

fn prev_char_boundary(s: &str, byte_index: usize) -> usize {
    s[..byte_index]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(s: &str, byte_index: usize) -> usize {
    s[byte_index..]
        .chars()
        .next()
        .map(|c| byte_index + c.len_utf8())
        .unwrap_or(s.len())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn prev_word_boundary(s: &str, byte_index: usize) -> usize {
    let before: Vec<(usize, char)> = s[..byte_index].char_indices().collect();
    let mut pos = before.len();
    while pos > 0 && !is_word_char(before[pos - 1].1) {
        pos -= 1;
    }
    while pos > 0 && is_word_char(before[pos - 1].1) {
        pos -= 1;
    }
    before.get(pos).map(|(i, _)| *i).unwrap_or(0)
}

fn next_word_boundary(s: &str, byte_index: usize) -> usize {
    let mut chars = s[byte_index..].char_indices().peekable();
    while chars.next_if(|(_, c)| is_word_char(*c)).is_some() {}
    while chars.next_if(|(_, c)| !is_word_char(*c)).is_some() {}
    chars
        .peek()
        .map(|(i, _)| byte_index + i)
        .unwrap_or(s.len())
}
