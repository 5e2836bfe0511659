//! Product entries and form validation

use serde::Serialize;
use thiserror::Error;

/// Validation failures for a submitted product form.
///
/// The display strings are shown verbatim in the status line.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProductError {
    #[error("Please enter a product name.")]
    MissingName,
    #[error("Please enter a weight.")]
    MissingWeight,
    #[error("Please enter a price.")]
    MissingPrice,
    #[error("Please enter a valid number for price.")]
    InvalidPrice(String),
}

/// A single line on the invoice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductEntry {
    pub name: String,
    /// Free-form weight text ("2 kg 300 g", "2.3 kg")
    pub weight: String,
    pub price: f64,
}

impl ProductEntry {
    /// Row total printed in the "Total" column. Equal to the price.
    pub fn line_total(&self) -> f64 {
        self.price
    }
}

/// Raw text of the three product fields as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub weight: String,
    pub price: String,
}

impl ProductDraft {
    pub fn new(
        name: impl Into<String>,
        weight: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            weight: weight.into(),
            price: price.into(),
        }
    }

    /// Validate the draft into a product entry.
    ///
    /// Fields are trimmed and checked in form order: name, weight, price.
    pub fn validate(&self) -> Result<ProductEntry, ProductError> {
        let name = self.name.trim();
        let weight = self.weight.trim();
        let price = self.price.trim();

        if name.is_empty() {
            return Err(ProductError::MissingName);
        }
        if weight.is_empty() {
            return Err(ProductError::MissingWeight);
        }
        if price.is_empty() {
            return Err(ProductError::MissingPrice);
        }

        Ok(ProductEntry {
            name: name.to_string(),
            weight: weight.to_string(),
            price: parse_price(price)?,
        })
    }
}

/// Parse a price string into a finite number
pub fn parse_price(input: &str) -> Result<f64, ProductError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ProductError::MissingPrice);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ProductError::InvalidPrice(trimmed.to_string())),
    }
}

/// Format an amount the way it is printed everywhere: two decimals
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}
