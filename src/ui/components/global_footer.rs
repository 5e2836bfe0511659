use ratatui::{buffer::Buffer, layout::Rect};

use crate::config::{KeyContext, KeybindingConfig};
use crate::ui::action::Action;
use crate::ui::components::{render_key_hints, KeyHintBarStyle};

const FORM_HINTS: &[(Action, &str)] = &[
    (Action::FocusNext, "next"),
    (Action::Submit, "submit"),
    (Action::ClearForm, "clear"),
    (Action::GenerateInvoice, "generate pdf"),
    (Action::Quit, "quit"),
];

const TABLE_HINTS: &[(Action, &str)] = &[
    (Action::SelectNext, "down"),
    (Action::SelectPrev, "up"),
    (Action::RemoveSelected, "remove"),
    (Action::GenerateInvoice, "generate pdf"),
    (Action::Quit, "quit"),
];

const DIALOG_HINTS: &[(Action, &str)] = &[
    (Action::DismissDialog, "dismiss"),
    (Action::ToggleDetails, "details"),
];

/// Footer showing the shortcuts of the active key context
pub struct GlobalFooter {
    hints: Vec<(String, &'static str)>,
}

impl GlobalFooter {
    /// Hints for `context`, using whatever keys the configuration binds.
    /// Actions with no reachable key are left out.
    pub fn for_context(context: KeyContext, keys: &KeybindingConfig) -> Self {
        let actions = match context {
            KeyContext::Global | KeyContext::Form => FORM_HINTS,
            KeyContext::Table => TABLE_HINTS,
            KeyContext::Dialog => DIALOG_HINTS,
        };
        let hints = actions
            .iter()
            .filter_map(|(action, label)| {
                keys.key_for(*action, context)
                    .map(|key| (key.to_string(), *label))
            })
            .collect();
        Self { hints }
    }

    pub fn hints(&self) -> Vec<(&str, &str)> {
        self.hints
            .iter()
            .map(|(key, label)| (key.as_str(), *label))
            .collect()
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        render_key_hints(area, buf, &self.hints(), KeyHintBarStyle::footer_bar());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{default_keybindings, parse_key_notation};

    #[test]
    fn test_form_hints_use_default_keys() {
        let footer = GlobalFooter::for_context(KeyContext::Form, &default_keybindings());
        assert_eq!(
            footer.hints(),
            vec![
                ("<Tab>", "next"),
                ("<CR>", "submit"),
                ("C-l", "clear"),
                ("C-g", "generate pdf"),
                ("C-c", "quit"),
            ]
        );
    }

    #[test]
    fn test_hints_follow_rebound_keys() {
        let mut keys = default_keybindings();
        let mut user = KeybindingConfig::new();
        user.global
            .insert(parse_key_notation("C-p").unwrap(), Action::GenerateInvoice);
        keys.merge(user);

        let footer = GlobalFooter::for_context(KeyContext::Form, &keys);
        assert!(footer.hints().contains(&("C-p", "generate pdf")));
        assert!(!footer.hints().iter().any(|(key, _)| *key == "C-g"));
    }

    #[test]
    fn test_unbound_actions_are_hidden() {
        let footer = GlobalFooter::for_context(KeyContext::Dialog, &KeybindingConfig::new());
        assert!(footer.hints().is_empty());
    }
}
