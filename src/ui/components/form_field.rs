//! Labeled, bordered text field

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use super::text_input::TextInputState;
use super::theme::{ACCENT_PRIMARY, BORDER_DIM, TEXT_BRIGHT, TEXT_FAINT, TEXT_SECONDARY};

/// Rows a form field occupies (border, text, border)
pub const FORM_FIELD_HEIGHT: u16 = 3;

pub struct FormField<'a> {
    label: &'a str,
    input: &'a TextInputState,
    focused: bool,
    placeholder: Option<&'a str>,
}

impl<'a> FormField<'a> {
    pub fn new(label: &'a str, input: &'a TextInputState) -> Self {
        Self {
            label,
            input,
            focused: false,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    fn block(&self) -> Block<'a> {
        let (border, title) = if self.focused {
            (
                Style::default().fg(ACCENT_PRIMARY),
                Style::default()
                    .fg(ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                Style::default().fg(BORDER_DIM),
                Style::default().fg(TEXT_SECONDARY),
            )
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" {} ", self.label))
            .title_style(title)
    }

    /// Inner text area for a field rendered into `area`
    pub fn inner(&self, area: Rect) -> Rect {
        let inner = self.block().inner(area);
        Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        }
    }

    /// Where the terminal cursor belongs when this field has focus
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        self.input.cursor_position(self.inner(area))
    }
}

impl Widget for FormField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = self.inner(area);
        self.block().render(area, buf);

        let placeholder = self
            .placeholder
            .map(|text| (text, Style::default().fg(TEXT_FAINT)));
        self.input
            .render(inner, buf, Style::default().fg(TEXT_BRIGHT), placeholder);
    }
}
