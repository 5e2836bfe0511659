//! One-line `key action` hint bars

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::{ACCENT_PRIMARY, FOOTER_BG, KEY_HINT_BG, TEXT_MUTED, TEXT_SECONDARY};

/// Where a hint bar is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyHintBarStyle {
    /// Centered under dialog content
    Instruction,
    /// Bottom row of the screen, keys drawn as chips
    Footer,
}

impl KeyHintBarStyle {
    pub fn instruction_bar() -> Self {
        Self::Instruction
    }

    pub fn footer_bar() -> Self {
        Self::Footer
    }

    fn key_span(self, key: &str) -> Span<'static> {
        match self {
            Self::Instruction => Span::styled(key.to_string(), Style::default().fg(ACCENT_PRIMARY)),
            Self::Footer => Span::styled(
                format!(" {} ", key),
                Style::default().fg(TEXT_SECONDARY).bg(KEY_HINT_BG),
            ),
        }
    }

    fn action_span(self, action: &str) -> Span<'static> {
        let color = match self {
            Self::Instruction => TEXT_SECONDARY,
            Self::Footer => TEXT_MUTED,
        };
        Span::styled(format!(" {}", action), Style::default().fg(color))
    }

    fn gap(self) -> &'static str {
        match self {
            Self::Instruction => "  ",
            Self::Footer => "   ",
        }
    }
}

pub fn render_key_hints(
    area: Rect,
    buf: &mut Buffer,
    hints: &[(&str, &str)],
    style: KeyHintBarStyle,
) {
    let mut spans = Vec::with_capacity(hints.len() * 3 + 1);
    if style == KeyHintBarStyle::Footer {
        spans.push(Span::raw(" "));
    }

    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(style.gap()));
        }
        spans.push(style.key_span(key));
        spans.push(style.action_span(action));
    }

    let paragraph = Paragraph::new(Line::from(spans));
    match style {
        KeyHintBarStyle::Instruction => paragraph.alignment(Alignment::Center),
        KeyHintBarStyle::Footer => paragraph.style(Style::default().bg(FOOTER_BG)),
    }
    .render(area, buf);
}
