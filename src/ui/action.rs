//! Actions that can be triggered by keybindings
//!
//! Each action represents a single, atomic operation in the UI.

use serde::{Deserialize, Serialize};

/// All mappable UI actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ========== Global Actions ==========
    /// Quit the application
    Quit,
    /// Validate the session and write the PDF invoice
    GenerateInvoice,
    /// Move focus to the next field
    FocusNext,
    /// Move focus to the previous field
    FocusPrev,

    // ========== Form ==========
    /// Submit the focused field (add product, or generate from the name field)
    Submit,
    /// Clear the three product fields
    ClearForm,

    // ========== Input Editing ==========
    /// Delete character before cursor
    Backspace,
    /// Delete character at cursor
    Delete,
    /// Delete word before cursor
    DeleteWordBack,
    /// Delete from cursor to start of line
    DeleteToStart,
    /// Delete from cursor to end of line
    DeleteToEnd,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorStart,
    MoveCursorEnd,
    MoveWordLeft,
    MoveWordRight,

    // ========== Product Table ==========
    SelectNext,
    SelectPrev,
    /// Remove the selected product from the list
    RemoveSelected,

    // ========== Dialog ==========
    /// Dismiss the error dialog
    DismissDialog,
    /// Toggle technical details in the error dialog
    ToggleDetails,
}
