//! Invoice domain: product entries, the session list, and the PDF document

pub mod export;
pub mod pdf;
pub mod product;
pub mod session;

pub use export::{export_invoice, ExportOptions, DEFAULT_FILE_NAME};
pub use pdf::{render_pdf, Cell, InvoiceLayout, PageSetup, Paper, PdfError, GRAND_TOTAL_LABEL};
pub use product::{format_amount, parse_price, ProductDraft, ProductEntry, ProductError};
pub use session::{Invoice, InvoiceError, InvoiceSession};
