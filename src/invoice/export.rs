//! Writing rendered invoices to disk

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::pdf::{render_pdf, PageSetup};
use super::session::{Invoice, InvoiceError};

pub const DEFAULT_FILE_NAME: &str = "invoice.pdf";

/// Where and how the document is written
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub output_dir: PathBuf,
    pub file_name: String,
    pub page: PageSetup,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            file_name: DEFAULT_FILE_NAME.to_string(),
            page: PageSetup::default(),
        }
    }
}

impl ExportOptions {
    /// Use an explicit output file, splitting it into directory and name
    pub fn with_output_path(mut self, path: &Path) -> Self {
        if let Some(name) = path.file_name() {
            self.file_name = name.to_string_lossy().into_owned();
        }
        self.output_dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        self
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }
}

/// Render the invoice and write it to the configured output path.
///
/// An existing file at the destination is replaced. The bytes land in a
/// temporary file beside the target first so a failed write never leaves a
/// truncated document behind.
pub fn export_invoice(invoice: &Invoice, options: &ExportOptions) -> Result<PathBuf, InvoiceError> {
    let bytes = render_pdf(invoice, &options.page)?;
    let path = options.output_path();
    write_atomic(&path, &bytes)?;

    tracing::info!(
        path = %path.display(),
        bytes = bytes.len(),
        products = invoice.products.len(),
        "Exported invoice"
    );
    Ok(path)
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), InvoiceError> {
    let io_err = |source| InvoiceError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(io_err)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(bytes).map_err(io_err)?;
    tmp.flush().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}
