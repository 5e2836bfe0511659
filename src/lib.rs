pub mod cli;
pub mod config;
pub mod invoice;
pub mod ui;
pub mod util;

pub use config::Config;
pub use invoice::{
    export_invoice, render_pdf, ExportOptions, Invoice, InvoiceError, InvoiceSession, PageSetup,
    Paper, ProductDraft, ProductEntry, ProductError,
};
pub use ui::App;
