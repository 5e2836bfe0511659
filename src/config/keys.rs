//! Keybinding configuration types and parsing
//!
//! Key notation is vim-style: `C-g` for Ctrl+G, `M-b` for Alt+B,
//! `S-<Tab>` for Shift+Tab, `<CR>` for Enter.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ui::action::Action;
use crate::ui::events::{Focus, InputMode};

/// A key combination (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a KeyCombo from a crossterm KeyEvent.
    ///
    /// Uppercase characters become lowercase + SHIFT so that `S-d` in the
    /// config matches a typed `D`. `BackTab` is folded into `S-<Tab>`.
    pub fn from_key_event(event: &KeyEvent) -> Self {
        match event.code {
            KeyCode::Char(c) if c.is_ascii_uppercase() => Self {
                code: KeyCode::Char(c.to_ascii_lowercase()),
                modifiers: event.modifiers | KeyModifiers::SHIFT,
            },
            KeyCode::BackTab => Self {
                code: KeyCode::Tab,
                modifiers: event.modifiers | KeyModifiers::SHIFT,
            },
            _ => Self {
                code: event.code,
                modifiers: event.modifiers,
            },
        }
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();

        if self.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("C".into());
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            parts.push("M".into());
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            parts.push("S".into());
        }

        parts.push(match self.code {
            KeyCode::Char(' ') => "<Space>".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "<CR>".to_string(),
            KeyCode::Esc => "<Esc>".to_string(),
            KeyCode::Tab => "<Tab>".to_string(),
            KeyCode::Backspace => "<BS>".to_string(),
            KeyCode::Delete => "<Del>".to_string(),
            KeyCode::Up => "<Up>".to_string(),
            KeyCode::Down => "<Down>".to_string(),
            KeyCode::Left => "<Left>".to_string(),
            KeyCode::Right => "<Right>".to_string(),
            KeyCode::Home => "<Home>".to_string(),
            KeyCode::End => "<End>".to_string(),
            KeyCode::F(n) => format!("<F{}>", n),
            other => format!("{:?}", other),
        });

        write!(f, "{}", parts.join("-"))
    }
}

/// Logical grouping of keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyContext {
    /// Keys that work everywhere unless overridden
    Global,
    /// Customer and product text fields
    Form,
    /// Product table navigation
    Table,
    /// Error dialog
    Dialog,
}

impl KeyContext {
    /// Resolve the active context. Modal states win over focus.
    pub fn from_state(mode: InputMode, focus: Focus) -> Self {
        match mode {
            InputMode::ShowingError => KeyContext::Dialog,
            InputMode::Normal | InputMode::Exporting => match focus {
                Focus::Table => KeyContext::Table,
                _ => KeyContext::Form,
            },
        }
    }
}

/// Configuration for all keybindings
#[derive(Debug, Clone, Default)]
pub struct KeybindingConfig {
    /// Global keybindings (apply to all contexts unless overridden)
    pub global: HashMap<KeyCombo, Action>,
    /// Context-specific keybindings
    pub context: HashMap<KeyContext, HashMap<KeyCombo, Action>>,
}

impl KeybindingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an action, preferring context bindings over global ones
    pub fn get_action(&self, key: &KeyCombo, context: KeyContext) -> Option<Action> {
        self.context
            .get(&context)
            .and_then(|bindings| bindings.get(key))
            .or_else(|| self.global.get(key))
            .copied()
    }

    /// Merge user configuration on top of defaults.
    ///
    /// An action bound by the user loses its default keys in the same map,
    /// so `generate_invoice = "C-p"` moves the action rather than adding a key.
    pub fn merge(&mut self, other: KeybindingConfig) {
        rebind(&mut self.global, other.global);
        for (ctx, bindings) in other.context {
            rebind(self.context.entry(ctx).or_default(), bindings);
        }
    }

    /// Key to advertise for `action` in `context`.
    ///
    /// Only keys that actually resolve to the action are considered. The
    /// shortest notation wins, ties broken alphabetically.
    pub fn key_for(&self, action: Action, context: KeyContext) -> Option<KeyCombo> {
        self.context
            .get(&context)
            .into_iter()
            .flat_map(|bindings| bindings.keys())
            .chain(self.global.keys())
            .filter(|key| self.get_action(key, context) == Some(action))
            .min_by_key(|key| {
                let notation = key.to_string();
                (notation.len(), notation)
            })
            .copied()
    }
}

fn rebind(target: &mut HashMap<KeyCombo, Action>, bindings: HashMap<KeyCombo, Action>) {
    target.retain(|_, action| !bindings.values().any(|bound| *bound == *action));
    target.extend(bindings);
}

/// Error type for key parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyParseError {
    #[error("empty key notation")]
    Empty,
    #[error("no key specified")]
    NoKey,
    #[error("invalid key: {0}")]
    InvalidKey(String),
    #[error("invalid modifier: {0}")]
    InvalidModifier(String),
    #[error("invalid special key: {0}")]
    InvalidSpecialKey(String),
}

/// Parse a vim-style key notation string into a KeyCombo
///
/// Supported notation:
/// - `C-x`, `M-x`, `S-x` and combinations like `C-S-x`
/// - `<CR>`, `<Esc>`, `<Tab>`, `<BS>`, `<Del>`, `<Space>`
/// - `<Up>`, `<Down>`, `<Left>`, `<Right>`, `<Home>`, `<End>`
/// - `<F1>` through `<F12>`
/// - modifiers inside brackets: `<C-CR>`, or before them: `S-<Tab>`
pub fn parse_key_notation(s: &str) -> Result<KeyCombo, KeyParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(KeyParseError::Empty);
    }

    if s.starts_with('<') && s.ends_with('>') {
        return parse_special_key(s);
    }

    let mut modifiers = KeyModifiers::NONE;
    let mut rest = s;

    // Peel "X-" modifier prefixes; whatever remains is the key itself
    while rest.len() > 2 && rest.as_bytes()[1] == b'-' {
        match &rest[..1] {
            "C" => modifiers |= KeyModifiers::CONTROL,
            "M" => modifiers |= KeyModifiers::ALT,
            "S" => modifiers |= KeyModifiers::SHIFT,
            _ => break,
        }
        rest = &rest[2..];
    }

    if rest.is_empty() {
        return Err(KeyParseError::NoKey);
    }

    let (code, needs_shift) = parse_key_code(rest)?;
    if needs_shift {
        modifiers |= KeyModifiers::SHIFT;
    }
    Ok(KeyCombo::new(code, modifiers))
}

/// Parse a bracketed key like `<CR>` or `<C-CR>`
fn parse_special_key(s: &str) -> Result<KeyCombo, KeyParseError> {
    let inner = &s[1..s.len() - 1];
    let parts: Vec<&str> = inner.split('-').collect();

    let mut modifiers = KeyModifiers::NONE;
    let (key_name, modifier_parts) = match parts.split_last() {
        Some((last, mods)) if !last.is_empty() => (*last, mods),
        _ => return Err(KeyParseError::NoKey),
    };

    for part in modifier_parts {
        match *part {
            "C" => modifiers |= KeyModifiers::CONTROL,
            "M" => modifiers |= KeyModifiers::ALT,
            "S" => modifiers |= KeyModifiers::SHIFT,
            other => return Err(KeyParseError::InvalidModifier(other.to_string())),
        }
    }

    let code = match key_name.to_uppercase().as_str() {
        "CR" | "ENTER" | "RETURN" => KeyCode::Enter,
        "ESC" | "ESCAPE" => KeyCode::Esc,
        "TAB" => KeyCode::Tab,
        "BS" | "BACKSPACE" => KeyCode::Backspace,
        "DEL" | "DELETE" => KeyCode::Delete,
        "UP" => KeyCode::Up,
        "DOWN" => KeyCode::Down,
        "LEFT" => KeyCode::Left,
        "RIGHT" => KeyCode::Right,
        "HOME" => KeyCode::Home,
        "END" => KeyCode::End,
        "SPACE" => KeyCode::Char(' '),
        name if name.starts_with('F') && name.len() > 1 => {
            let num: u8 = name[1..]
                .parse()
                .map_err(|_| KeyParseError::InvalidKey(key_name.to_string()))?;
            if num == 0 || num > 12 {
                return Err(KeyParseError::InvalidKey(key_name.to_string()));
            }
            KeyCode::F(num)
        }
        _ => return Err(KeyParseError::InvalidSpecialKey(key_name.to_string())),
    };

    Ok(KeyCombo::new(code, modifiers))
}

/// Parse a bare key. Returns the code and whether SHIFT is implied.
fn parse_key_code(s: &str) -> Result<(KeyCode, bool), KeyParseError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok((KeyCode::Char(c.to_ascii_lowercase()), c.is_ascii_uppercase())),
        _ if s.starts_with('<') && s.ends_with('>') => {
            let combo = parse_special_key(s)?;
            Ok((combo.code, combo.modifiers.contains(KeyModifiers::SHIFT)))
        }
        _ => Err(KeyParseError::InvalidKey(s.to_string())),
    }
}

impl FromStr for KeyCombo {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key_notation(s)
    }
}
