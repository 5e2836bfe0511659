//! Shared UI color constants.

use ratatui::style::Color;

pub const ACCENT_PRIMARY: Color = Color::Cyan;
pub const ACCENT_SUCCESS: Color = Color::Green;
pub const ACCENT_ERROR: Color = Color::Red;

pub const TEXT_BRIGHT: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Rgb(190, 190, 190);
pub const TEXT_MUTED: Color = Color::Rgb(130, 130, 130);
pub const TEXT_FAINT: Color = Color::DarkGray;

pub const BORDER_DIM: Color = Color::Rgb(70, 70, 70);
pub const SELECTED_BG: Color = Color::Rgb(40, 60, 80);

pub const TITLE_BAR_BG: Color = Color::Rgb(20, 20, 20);
pub const FOOTER_BG: Color = Color::Rgb(25, 25, 25);
pub const KEY_HINT_BG: Color = Color::Rgb(60, 60, 60);
