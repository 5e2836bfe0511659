use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::{KeyCombo, KeyContext};
use crate::ui::action::Action;
use crate::ui::app::App;
use crate::ui::effect::Effect;
use crate::ui::events::InputMode;

impl App {
    pub fn handle_input_event(&mut self, input: Event) -> Vec<Effect> {
        match input {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Paste(text) => {
                self.handle_paste_input(&text);
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) -> Vec<Effect> {
        let context = self.key_context();

        if self.should_handle_as_text_input(&key, context) {
            self.handle_text_input(key);
            return Vec::new();
        }

        let key_combo = KeyCombo::from_key_event(&key);
        match self.config.keybindings.get_action(&key_combo, context) {
            Some(action) => self.execute_action(action),
            None => {
                tracing::trace!(key = %key_combo, ?context, "Unbound key");
                Vec::new()
            }
        }
    }

    /// Dispatch an action. Modal states only accept the actions that can
    /// leave them.
    pub fn execute_action(&mut self, action: Action) -> Vec<Effect> {
        let allowed = match self.state.input_mode {
            InputMode::Normal => true,
            InputMode::Exporting => action == Action::Quit,
            InputMode::ShowingError => matches!(
                action,
                Action::DismissDialog | Action::ToggleDetails | Action::Quit
            ),
        };
        if !allowed {
            return Vec::new();
        }

        match action {
            Action::Quit => {
                self.state.should_quit = true;
                Vec::new()
            }
            Action::GenerateInvoice => self.generate_invoice(),
            Action::Submit => self.submit_focused(),
            Action::FocusNext | Action::FocusPrev | Action::ClearForm => {
                self.handle_form_action(action);
                Vec::new()
            }
            Action::Backspace
            | Action::Delete
            | Action::DeleteWordBack
            | Action::DeleteToStart
            | Action::DeleteToEnd
            | Action::MoveCursorLeft
            | Action::MoveCursorRight
            | Action::MoveCursorStart
            | Action::MoveCursorEnd
            | Action::MoveWordLeft
            | Action::MoveWordRight => {
                self.handle_input_edit_action(action);
                Vec::new()
            }
            Action::SelectNext | Action::SelectPrev | Action::RemoveSelected => {
                self.handle_table_action(action);
                Vec::new()
            }
            Action::DismissDialog | Action::ToggleDetails => {
                self.handle_dialog_action(action);
                Vec::new()
            }
        }
    }

    /// Printable characters without Control/Alt type into the focused field
    fn should_handle_as_text_input(&self, key: &KeyEvent, context: KeyContext) -> bool {
        let has_modifier = key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(KeyModifiers::ALT);

        !has_modifier
            && matches!(key.code, KeyCode::Char(_))
            && context == KeyContext::Form
            && self.state.input_mode == InputMode::Normal
    }

    fn handle_text_input(&mut self, key: KeyEvent) {
        let KeyCode::Char(c) = key.code else {
            return;
        };
        if let Some(input) = self.state.focused_input_mut() {
            input.insert_char(c);
        }
        self.state.sync_customer();
    }

    fn handle_paste_input(&mut self, pasted: &str) {
        if self.state.input_mode != InputMode::Normal {
            return;
        }
        if let Some(input) = self.state.focused_input_mut() {
            input.insert_str(pasted);
        }
        self.state.sync_customer();
    }
}
