use crate::ui::action::Action;
use crate::ui::app::App;
use crate::ui::events::InputMode;

impl App {
    pub(super) fn handle_dialog_action(&mut self, action: Action) {
        match action {
            Action::DismissDialog => {
                self.state.error_dialog.hide();
                self.state.input_mode = InputMode::Normal;
            }
            Action::ToggleDetails => self.state.error_dialog.toggle_details(),
            _ => {}
        }
    }
}
