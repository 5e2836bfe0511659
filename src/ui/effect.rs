use crate::invoice::Invoice;

/// Side effects that should be executed outside the key handlers.
#[derive(Debug)]
pub enum Effect {
    /// Render the invoice and write it to the configured output path
    ExportInvoice(Invoice),
}
