mod dialog;
mod error_dialog;
mod form_field;
mod global_footer;
mod key_hints;
mod product_table;
mod status_line;
mod text_input;
pub mod theme;

pub use dialog::DialogFrame;
pub use error_dialog::{ErrorDialog, ErrorDialogState};
pub use form_field::{FormField, FORM_FIELD_HEIGHT};
pub use global_footer::GlobalFooter;
pub use key_hints::{render_key_hints, KeyHintBarStyle};
pub use product_table::{clamp_selection, ProductTable};
pub use status_line::{Notice, NoticeKind, StatusLine};
pub use text_input::TextInputState;
