//! Default keybindings
//!
//! Used as the base layer; user bindings from config.toml merge on top.

use std::collections::HashMap;

use super::keys::{KeyCombo, KeyContext, KeybindingConfig};
use crate::ui::action::Action;

/// Helper to insert a keybinding
fn bind(map: &mut HashMap<KeyCombo, Action>, key: &str, action: Action) {
    if let Ok(combo) = key.parse() {
        map.insert(combo, action);
    }
}

/// Create the default keybindings configuration
pub fn default_keybindings() -> KeybindingConfig {
    let mut config = KeybindingConfig::new();

    // ========== Global Keybindings ==========
    bind(&mut config.global, "C-q", Action::Quit);
    bind(&mut config.global, "C-c", Action::Quit);
    bind(&mut config.global, "C-g", Action::GenerateInvoice);
    bind(&mut config.global, "<F5>", Action::GenerateInvoice);
    bind(&mut config.global, "<Tab>", Action::FocusNext);
    bind(&mut config.global, "S-<Tab>", Action::FocusPrev);

    // Readline shortcuts
    bind(&mut config.global, "C-a", Action::MoveCursorStart);
    bind(&mut config.global, "C-e", Action::MoveCursorEnd);
    bind(&mut config.global, "C-f", Action::MoveCursorRight);
    bind(&mut config.global, "C-b", Action::MoveCursorLeft);
    bind(&mut config.global, "C-u", Action::DeleteToStart);
    bind(&mut config.global, "C-k", Action::DeleteToEnd);
    bind(&mut config.global, "C-w", Action::DeleteWordBack);
    bind(&mut config.global, "C-h", Action::Backspace);
    bind(&mut config.global, "M-b", Action::MoveWordLeft);
    bind(&mut config.global, "M-f", Action::MoveWordRight);
    bind(&mut config.global, "M-<BS>", Action::DeleteWordBack);

    // ========== Form ==========
    let form = config.context.entry(KeyContext::Form).or_default();
    bind(form, "<CR>", Action::Submit);
    bind(form, "<BS>", Action::Backspace);
    bind(form, "<Del>", Action::Delete);
    bind(form, "<Left>", Action::MoveCursorLeft);
    bind(form, "<Right>", Action::MoveCursorRight);
    bind(form, "<Home>", Action::MoveCursorStart);
    bind(form, "<End>", Action::MoveCursorEnd);
    bind(form, "<Down>", Action::FocusNext);
    bind(form, "<Up>", Action::FocusPrev);
    bind(form, "C-l", Action::ClearForm);

    // ========== Table ==========
    let table = config.context.entry(KeyContext::Table).or_default();
    bind(table, "<Down>", Action::SelectNext);
    bind(table, "j", Action::SelectNext);
    bind(table, "<Up>", Action::SelectPrev);
    bind(table, "k", Action::SelectPrev);
    bind(table, "<Del>", Action::RemoveSelected);
    bind(table, "d", Action::RemoveSelected);
    bind(table, "<CR>", Action::GenerateInvoice);

    // ========== Dialog ==========
    let dialog = config.context.entry(KeyContext::Dialog).or_default();
    bind(dialog, "<CR>", Action::DismissDialog);
    bind(dialog, "<Esc>", Action::DismissDialog);
    bind(dialog, "d", Action::ToggleDetails);

    config
}
