use crate::ui::action::Action;
use crate::ui::app::App;

impl App {
    pub(super) fn handle_input_edit_action(&mut self, action: Action) {
        let Some(input) = self.state.focused_input_mut() else {
            return;
        };

        match action {
            Action::Backspace => input.backspace(),
            Action::Delete => input.delete(),
            Action::DeleteWordBack => input.delete_word_back(),
            Action::DeleteToStart => input.delete_to_start(),
            Action::DeleteToEnd => input.delete_to_end(),
            Action::MoveCursorLeft => input.move_left(),
            Action::MoveCursorRight => input.move_right(),
            Action::MoveCursorStart => input.move_start(),
            Action::MoveCursorEnd => input.move_end(),
            Action::MoveWordLeft => input.move_word_left(),
            Action::MoveWordRight => input.move_word_right(),
            _ => return,
        }

        self.state.sync_customer();
    }
}
