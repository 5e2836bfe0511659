//! Modal dialog for failures the status line cannot hold (export errors)

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::dialog::DialogFrame;
use crate::config::{KeyContext, KeybindingConfig};
use crate::ui::action::Action;
use super::key_hints::{render_key_hints, KeyHintBarStyle};
use super::theme::{ACCENT_ERROR, TEXT_FAINT};

const DIALOG_WIDTH: u16 = 56;

#[derive(Debug, Clone, Default)]
pub struct ErrorDialogState {
    visible: bool,
    pub title: String,
    pub message: String,
    pub details: Option<String>,
    details_expanded: bool,
}

impl ErrorDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.visible = true;
        self.title = title.into();
        self.message = message.into();
        self.details = None;
        self.details_expanded = false;
    }

    /// Show with a collapsible technical detail section
    pub fn show_with_details(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) {
        self.show(title, message);
        self.details = Some(details.into());
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.details_expanded = false;
    }

    pub fn toggle_details(&mut self) {
        if self.details.is_some() {
            self.details_expanded = !self.details_expanded;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn details_expanded(&self) -> bool {
        self.details_expanded
    }
}

/// Lines `text` occupies when wrapped at `width` columns
fn wrapped_lines(text: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    text.lines()
        .map(|line| line.width().div_ceil(width).max(1) as u16)
        .sum::<u16>()
        .max(1)
}

pub struct ErrorDialog<'a> {
    state: &'a ErrorDialogState,
    dismiss_key: Option<String>,
    details_key: Option<String>,
}

impl<'a> ErrorDialog<'a> {
    pub fn new(state: &'a ErrorDialogState, keys: &KeybindingConfig) -> Self {
        let key = |action| {
            keys.key_for(action, KeyContext::Dialog)
                .map(|k| k.to_string())
        };
        Self {
            state,
            dismiss_key: key(Action::DismissDialog),
            details_key: key(Action::ToggleDetails),
        }
    }

    fn content_width(&self) -> u16 {
        DIALOG_WIDTH.saturating_sub(6)
    }

    fn height(&self) -> u16 {
        let width = self.content_width();
        let message = wrapped_lines(&self.state.message, width);
        let toggle = u16::from(self.state.details.is_some());
        let details = match &self.state.details {
            Some(details) if self.state.details_expanded => wrapped_lines(details, width),
            _ => 0,
        };
        // borders, padding, button row, and instructions
        8 + message + toggle + details
    }
}

impl Widget for ErrorDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.state.visible {
            return;
        }

        let frame =
            DialogFrame::new(&self.state.title, DIALOG_WIDTH, self.height()).border_color(ACCENT_ERROR);
        let inner = frame.render(area, buf);
        if inner.height < 4 {
            return;
        }

        let content = Rect {
            x: inner.x + 2,
            width: inner.width.saturating_sub(4),
            ..inner
        };
        let bottom = inner.y + inner.height;
        let mut y = inner.y + 1;

        let message_height = wrapped_lines(&self.state.message, content.width)
            .min(bottom.saturating_sub(y + 3));
        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(Rect { y, height: message_height, ..content }, buf);
        y += message_height + 1;

        if let Some(details) = &self.state.details {
            let toggle = match &self.details_key {
                _ if self.state.details_expanded => "▼ Details".to_string(),
                Some(key) => format!("▶ Details (press '{}' to show)", key),
                None => "▶ Details".to_string(),
            };
            if y + 3 <= bottom {
                Paragraph::new(Line::from(Span::styled(toggle, Style::default().fg(TEXT_FAINT))))
                    .alignment(Alignment::Center)
                    .render(Rect { y, height: 1, ..content }, buf);
                y += 1;
            }

            if self.state.details_expanded {
                let height = wrapped_lines(details, content.width).min(bottom.saturating_sub(y + 2));
                Paragraph::new(details.as_str())
                    .style(Style::default().fg(TEXT_FAINT))
                    .wrap(Wrap { trim: false })
                    .render(Rect { y, height, ..content }, buf);
            }
        }

        let button_style = Style::default()
            .fg(Color::Black)
            .bg(ACCENT_ERROR)
            .add_modifier(Modifier::BOLD);
        Paragraph::new(Line::from(Span::styled("  OK  ", button_style)))
            .alignment(Alignment::Center)
            .render(Rect { y: bottom - 2, height: 1, ..inner }, buf);

        let mut hints = Vec::with_capacity(2);
        if let Some(key) = &self.dismiss_key {
            hints.push((key.as_str(), "dismiss"));
        }
        if let (Some(key), Some(_)) = (&self.details_key, &self.state.details) {
            hints.push((key.as_str(), "details"));
        }
        render_key_hints(
            Rect { y: bottom - 1, height: 1, ..inner },
            buf,
            &hints,
            KeyHintBarStyle::instruction_bar(),
        );
    }
}
