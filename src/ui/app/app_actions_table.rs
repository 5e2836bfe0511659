use crate::ui::action::Action;
use crate::ui::app::App;
use crate::ui::components::Notice;
use crate::ui::events::Focus;

impl App {
    pub(super) fn handle_table_action(&mut self, action: Action) {
        let len = self.state.session.len();
        match action {
            Action::SelectNext => {
                if len > 0 {
                    let next = self
                        .state
                        .table_state
                        .selected()
                        .map_or(0, |i| (i + 1).min(len - 1));
                    self.state.table_state.select(Some(next));
                }
            }
            Action::SelectPrev => {
                if len > 0 {
                    let prev = self
                        .state
                        .table_state
                        .selected()
                        .map_or(0, |i| i.saturating_sub(1));
                    self.state.table_state.select(Some(prev));
                }
            }
            Action::RemoveSelected => {
                let Some(index) = self.state.table_state.selected() else {
                    return;
                };
                if let Some(removed) = self.state.session.remove_product(index) {
                    self.state.notice =
                        Some(Notice::info(format!("Removed product: {}", removed.name)));
                }
                self.state.sync_table_selection();
                if self.state.session.is_empty() {
                    self.state.set_focus(Focus::ProductName);
                }
            }
            _ => {}
        }
    }
}
