//! One-line feedback for the last form action

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::{ACCENT_ERROR, ACCENT_PRIMARY, ACCENT_SUCCESS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// Message shown under the form until the next action replaces it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

pub struct StatusLine<'a> {
    notice: Option<&'a Notice>,
}

impl<'a> StatusLine<'a> {
    pub fn new(notice: Option<&'a Notice>) -> Self {
        Self { notice }
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(notice) = self.notice else {
            return;
        };
        let (icon, color) = match notice.kind {
            NoticeKind::Info => ("•", ACCENT_PRIMARY),
            NoticeKind::Success => ("✓", ACCENT_SUCCESS),
            NoticeKind::Error => ("✗", ACCENT_ERROR),
        };
        let line = Line::from(Span::styled(
            format!("  {} {}", icon, notice.text),
            Style::default().fg(color),
        ));
        Paragraph::new(line).render(area, buf);
    }
}
