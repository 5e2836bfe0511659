//! Single-line text input state with cursor management
//!
//! The cursor is a character index, so multi-byte input is edited safely.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInputState {
    input: String,
    /// Cursor position in characters
    cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with initial value, cursor at end
    pub fn with_value(value: &str) -> Self {
        let mut state = Self::new();
        state.set(value);
        state
    }

    /// Set the input value and move cursor to end
    pub fn set(&mut self, value: &str) {
        self.input = value.to_string();
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    /// Return the current value and clear the input
    pub fn value(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Byte offset of a character index
    fn byte_index(&self, char_index: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    fn char_at(&self, char_index: usize) -> Option<char> {
        self.input.chars().nth(char_index)
    }

    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.input.insert(at, c);
        self.cursor += 1;
    }

    /// Insert pasted text; line breaks become spaces
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            match c {
                '\r' => {}
                '\n' | '\t' => self.insert_char(' '),
                c => self.insert_char(c),
            }
        }
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.input.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.input.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Delete from cursor to start of line (Ctrl+U)
    pub fn delete_to_start(&mut self) {
        let at = self.byte_index(self.cursor);
        self.input.drain(..at);
        self.cursor = 0;
    }

    /// Delete from cursor to end of line (Ctrl+K)
    pub fn delete_to_end(&mut self) {
        let at = self.byte_index(self.cursor);
        self.input.truncate(at);
    }

    fn word_start_before(&self, mut index: usize) -> usize {
        while index > 0 && self.char_at(index - 1).is_some_and(char::is_whitespace) {
            index -= 1;
        }
        while index > 0 && self.char_at(index - 1).is_some_and(|c| !c.is_whitespace()) {
            index -= 1;
        }
        index
    }

    /// Move cursor to previous word boundary (Alt+B)
    pub fn move_word_left(&mut self) {
        self.cursor = self.word_start_before(self.cursor);
    }

    /// Move cursor past the next word (Alt+F)
    pub fn move_word_right(&mut self) {
        let len = self.char_count();
        while self.cursor < len && self.char_at(self.cursor).is_some_and(|c| !c.is_whitespace()) {
            self.cursor += 1;
        }
        while self.cursor < len && self.char_at(self.cursor).is_some_and(char::is_whitespace) {
            self.cursor += 1;
        }
    }

    /// Delete word before cursor (Ctrl+W)
    pub fn delete_word_back(&mut self) {
        let start = self.word_start_before(self.cursor);
        let from = self.byte_index(start);
        let to = self.byte_index(self.cursor);
        self.input.drain(from..to);
        self.cursor = start;
    }

    /// First visible character so the cursor fits in `width` columns
    fn scroll_start(&self, width: usize) -> usize {
        if width == 0 {
            return self.cursor;
        }
        let chars: Vec<char> = self.input.chars().collect();
        let mut start = 0;
        let mut used: usize = chars[..self.cursor]
            .iter()
            .map(|c| c.width().unwrap_or(0))
            .sum();
        // Keep one column free for the cursor itself
        while used >= width && start < self.cursor {
            used -= chars[start].width().unwrap_or(0);
            start += 1;
        }
        start
    }

    /// Terminal position of the cursor when rendered into `area`
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let start = self.scroll_start(area.width as usize);
        let offset: usize = self
            .input
            .chars()
            .skip(start)
            .take(self.cursor - start)
            .map(|c| c.width().unwrap_or(0))
            .sum();
        let x = area.x + (offset as u16).min(area.width.saturating_sub(1));
        (x, area.y)
    }

    /// Render the visible slice of the text, or a placeholder when empty
    pub fn render(
        &self,
        area: Rect,
        buf: &mut Buffer,
        style: Style,
        placeholder: Option<(&str, Style)>,
    ) {
        if self.is_empty() {
            if let Some((text, placeholder_style)) = placeholder {
                Paragraph::new(text).style(placeholder_style).render(area, buf);
            }
            return;
        }
        let start = self.scroll_start(area.width as usize);
        let visible: String = self.input.chars().skip(start).collect();
        Paragraph::new(visible).style(style).render(area, buf);
    }
}
