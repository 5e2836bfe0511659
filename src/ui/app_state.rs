use ratatui::widgets::TableState;

use crate::invoice::{InvoiceSession, ProductDraft};
use crate::ui::components::{clamp_selection, ErrorDialogState, Notice, TextInputState};
use crate::ui::events::{Focus, InputMode};

/// Text inputs on the form
#[derive(Debug, Clone, Default)]
pub struct FormInputs {
    pub customer: TextInputState,
    pub product_name: TextInputState,
    pub weight: TextInputState,
    pub price: TextInputState,
}

impl FormInputs {
    pub fn get_mut(&mut self, focus: Focus) -> Option<&mut TextInputState> {
        match focus {
            Focus::Customer => Some(&mut self.customer),
            Focus::ProductName => Some(&mut self.product_name),
            Focus::Weight => Some(&mut self.weight),
            Focus::Price => Some(&mut self.price),
            Focus::Table => None,
        }
    }

    /// Snapshot of the three product fields
    pub fn product_draft(&self) -> ProductDraft {
        ProductDraft::new(
            self.product_name.value(),
            self.weight.value(),
            self.price.value(),
        )
    }

    pub fn clear_product(&mut self) {
        self.product_name.clear();
        self.weight.clear();
        self.price.clear();
    }
}

/// Everything the screen shows, independent of the terminal
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub session: InvoiceSession,
    pub inputs: FormInputs,
    pub focus: Focus,
    pub input_mode: InputMode,
    pub table_state: TableState,
    /// Feedback from the last action
    pub notice: Option<Notice>,
    pub error_dialog: ErrorDialogState,
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill the customer name (from the command line)
    pub fn with_customer(mut self, customer: &str) -> Self {
        self.inputs.customer.set(customer);
        self.session.set_customer(customer);
        self
    }

    pub fn focused_input_mut(&mut self) -> Option<&mut TextInputState> {
        self.inputs.get_mut(self.focus)
    }

    /// Copy the customer field into the session after an edit
    pub fn sync_customer(&mut self) {
        self.session.set_customer(self.inputs.customer.value());
    }

    /// Re-clamp the table selection after the list changed
    pub fn sync_table_selection(&mut self) {
        clamp_selection(&mut self.table_state, self.session.len());
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        if focus == Focus::Table {
            self.sync_table_selection();
        }
    }
}
