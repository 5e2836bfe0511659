//! In-memory invoice session: the customer and the product list

use std::path::PathBuf;

use thiserror::Error;

use super::pdf::PdfError;
use super::product::{ProductDraft, ProductEntry, ProductError};

#[derive(Error, Debug)]
pub enum InvoiceError {
    #[error("Please enter your name.")]
    MissingCustomer,
    #[error("Please add at least one product.")]
    NoProducts,
    #[error("Failed to render invoice: {0}")]
    Render(#[from] PdfError),
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Validated snapshot of a session, ready to be rendered
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub customer: String,
    pub products: Vec<ProductEntry>,
    pub grand_total: f64,
}

impl Invoice {
    /// Build an invoice from parts, computing the grand total
    pub fn new(customer: impl Into<String>, products: Vec<ProductEntry>) -> Self {
        let grand_total = sum_prices(&products);
        Self {
            customer: customer.into(),
            products,
            grand_total,
        }
    }
}

/// The customer name and the append-only list of products
#[derive(Debug, Clone, Default)]
pub struct InvoiceSession {
    pub customer: String,
    products: Vec<ProductEntry>,
}

impl InvoiceSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_customer(&mut self, customer: impl Into<String>) {
        self.customer = customer.into();
    }

    pub fn products(&self) -> &[ProductEntry] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Validate a draft and append it to the list
    pub fn add_product(&mut self, draft: &ProductDraft) -> Result<&ProductEntry, ProductError> {
        let entry = draft.validate()?;
        tracing::info!(
            product = %entry.name,
            weight = %entry.weight,
            price = entry.price,
            "Added product"
        );
        self.products.push(entry);
        Ok(&self.products[self.products.len() - 1])
    }

    /// Remove the entry at `index`, if it exists
    pub fn remove_product(&mut self, index: usize) -> Option<ProductEntry> {
        if index >= self.products.len() {
            return None;
        }
        let removed = self.products.remove(index);
        tracing::info!(product = %removed.name, index, "Removed product");
        Some(removed)
    }

    /// Sum of all prices in the list
    pub fn grand_total(&self) -> f64 {
        sum_prices(&self.products)
    }

    /// Check the session is complete and snapshot it as an invoice.
    ///
    /// The customer name is checked before the product list.
    pub fn prepare_invoice(&self) -> Result<Invoice, InvoiceError> {
        let customer = self.customer.trim();
        if customer.is_empty() {
            return Err(InvoiceError::MissingCustomer);
        }
        if self.products.is_empty() {
            return Err(InvoiceError::NoProducts);
        }
        Ok(Invoice::new(customer, self.products.clone()))
    }
}

fn sum_prices(products: &[ProductEntry]) -> f64 {
    products.iter().map(ProductEntry::line_total).sum()
}
