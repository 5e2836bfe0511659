use crate::invoice::{InvoiceError, ProductError};
use crate::ui::action::Action;
use crate::ui::app::App;
use crate::ui::components::Notice;
use crate::ui::effect::Effect;
use crate::ui::events::{Focus, InputMode};

impl App {
    pub(super) fn handle_form_action(&mut self, action: Action) {
        match action {
            Action::FocusNext => self.state.set_focus(self.state.focus.next()),
            Action::FocusPrev => self.state.set_focus(self.state.focus.prev()),
            Action::ClearForm => {
                self.state.inputs.clear_product();
                if !self.state.focus.is_product_field() {
                    self.state.set_focus(Focus::ProductName);
                }
            }
            _ => {}
        }
    }

    /// Enter on the name field generates; Enter on a product field adds
    pub(super) fn submit_focused(&mut self) -> Vec<Effect> {
        match self.state.focus {
            Focus::Customer => self.generate_invoice(),
            focus if focus.is_product_field() => {
                self.submit_product();
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    /// Add the three product fields to the list. Fields are cleared only
    /// when the entry was accepted.
    pub(super) fn submit_product(&mut self) {
        let draft = self.state.inputs.product_draft();
        match self.state.session.add_product(&draft) {
            Ok(entry) => {
                let notice = Notice::success(format!("Added product: {}", entry.name));
                self.state.notice = Some(notice);
                self.state.inputs.clear_product();
                self.state.set_focus(Focus::ProductName);
                self.state.sync_table_selection();
            }
            Err(e) => {
                let focus = match e {
                    ProductError::MissingName => Focus::ProductName,
                    ProductError::MissingWeight => Focus::Weight,
                    ProductError::MissingPrice | ProductError::InvalidPrice(_) => Focus::Price,
                };
                tracing::debug!(error = %e, "Rejected product");
                self.state.notice = Some(Notice::error(e.to_string()));
                self.state.set_focus(focus);
            }
        }
    }

    pub(super) fn generate_invoice(&mut self) -> Vec<Effect> {
        self.state.sync_customer();
        match self.state.session.prepare_invoice() {
            Ok(invoice) => {
                tracing::info!(
                    customer = %invoice.customer,
                    products = invoice.products.len(),
                    grand_total = invoice.grand_total,
                    "Generating invoice"
                );
                self.state.input_mode = InputMode::Exporting;
                self.state.notice = Some(Notice::info("Generating invoice..."));
                vec![Effect::ExportInvoice(invoice)]
            }
            Err(e) => {
                let focus = match e {
                    InvoiceError::MissingCustomer => Focus::Customer,
                    _ => Focus::ProductName,
                };
                self.state.notice = Some(Notice::error(e.to_string()));
                self.state.set_focus(focus);
                Vec::new()
            }
        }
    }
}
