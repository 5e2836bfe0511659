use std::path::PathBuf;

/// Application-level events
#[derive(Debug)]
pub enum AppEvent {
    /// Invoice export finished on the blocking pool
    InvoiceExported { result: Result<PathBuf, String> },
}

/// Modal state of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Form and table accept input
    #[default]
    Normal,
    /// An export is running; input is ignored until it reports back
    Exporting,
    /// Error dialog is visible
    ShowingError,
}

/// Focusable regions of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    #[default]
    Customer,
    ProductName,
    Weight,
    Price,
    Table,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Customer,
        Focus::ProductName,
        Focus::Weight,
        Focus::Price,
        Focus::Table,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    /// Whether this focus is one of the three product fields
    pub fn is_product_field(self) -> bool {
        matches!(self, Focus::ProductName | Focus::Weight | Focus::Price)
    }
}
