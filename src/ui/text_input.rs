//! Single-line editable text buffer. The cursor is a char index.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer pre-filled with `text`, cursor at the end.
    pub fn with_text(text: &str) -> Self {
        Self {
            value: text.to_string(),
            cursor: text.chars().count(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn insert(&mut self, ch: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, ch);
        self.cursor += 1;
    }

    pub fn insert_str(&mut self, text: &str) {
        // Single-line field: line breaks from pastes become spaces
        for ch in text.chars() {
            self.insert(if ch == '\n' || ch == '\r' { ' ' } else { ch });
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Suffix of the value to draw in a field `width` columns wide, and the
    /// cursor column within it. Leading chars are dropped until the cursor
    /// fits, measured in terminal cells.
    pub fn scrolled(&self, width: usize) -> (&str, usize) {
        if width == 0 {
            return ("", 0);
        }
        let before = &self.value[..self.byte_index(self.cursor)];
        let mut column = before.width();
        let mut start = 0;
        let mut chars = before.chars();
        while column >= width {
            let Some(ch) = chars.next() else {
                break;
            };
            column = column.saturating_sub(ch.width().unwrap_or(0));
            start += ch.len_utf8();
        }
        (&self.value[start..], column)
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(idx, _)| idx)
    }
}
