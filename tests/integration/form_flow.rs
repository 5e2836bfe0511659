//! Integration tests for the form: typing, adding products, the table, and
//! validation feedback.

use super::common::input::{add_product, ctrl, key, press, type_text};
use super::common::terminal::{assert_screen_contains, render_app};
use crossterm::event::{Event, KeyCode};
use invoicer::ui::{AppEvent, Effect, Focus, InputMode};
use invoicer::{App, Config};

fn app_with_customer(name: &str) -> App {
    let mut app = App::new(Config::default());
    type_text(&mut app, name);
    press(&mut app, key(KeyCode::Tab));
    app
}

fn notice_text(app: &App) -> &str {
    app.state()
        .notice
        .as_ref()
        .map(|n| n.text.as_str())
        .unwrap_or_default()
}

#[test]
fn test_initial_screen_shows_form() {
    let mut app = App::new(Config::default());
    let screen = render_app(&mut app);

    assert_screen_contains(&screen, "Product Invoice Generator");
    assert_screen_contains(&screen, "Enter your name:");
    assert_screen_contains(&screen, "Add Product Details");
    assert_screen_contains(&screen, "Product Name");
    assert_screen_contains(&screen, "Products Added (0)");
    assert_screen_contains(&screen, "No products yet");
    assert_eq!(app.state().focus, Focus::Customer);
}

#[test]
fn test_typing_updates_customer() {
    let app = app_with_customer("Ada Lovelace");
    assert_eq!(app.state().session.customer, "Ada Lovelace");
    assert_eq!(app.state().focus, Focus::ProductName);
}

#[test]
fn test_add_product_appends_and_clears_fields() {
    let mut app = app_with_customer("Ada");
    add_product(&mut app, "Apples", "2 kg 300 g", "4.50");

    let state = app.state();
    assert_eq!(state.session.len(), 1);
    let entry = &state.session.products()[0];
    assert_eq!(entry.name, "Apples");
    assert_eq!(entry.weight, "2 kg 300 g");
    assert_eq!(entry.price, 4.5);

    assert!(state.inputs.product_name.is_empty());
    assert!(state.inputs.weight.is_empty());
    assert!(state.inputs.price.is_empty());
    assert_eq!(state.focus, Focus::ProductName);
    assert_eq!(notice_text(&app), "Added product: Apples");
}

#[test]
fn test_table_lists_products_in_order_with_total() {
    let mut app = app_with_customer("Ada");
    add_product(&mut app, "Apples", "2 kg", "4.50");
    add_product(&mut app, "Pears", "1.5 kg", "3.25");

    let screen = render_app(&mut app);
    assert_screen_contains(&screen, "Products Added (2)");
    assert_screen_contains(&screen, "Total 7.75");

    // The status line also names the last product, so match whole rows
    let lines: Vec<&str> = screen.lines().collect();
    let row = |name: &str, price: &str| {
        lines
            .iter()
            .position(|line| line.contains(name) && line.contains(price))
            .unwrap_or_else(|| panic!("no table row for {}:\n{}", name, screen))
    };
    assert!(
        row("Apples", "4.50") < row("Pears", "3.25"),
        "rows should keep insertion order"
    );
}

#[test]
fn test_weight_label_fits_at_80_columns() {
    let mut app = App::new(Config::default());
    let screen = render_app(&mut app);
    assert_screen_contains(&screen, "Weight (e.g., '2 kg 300 g' or '2.3 kg')");
    assert_screen_contains(&screen, "Product Name");
    assert_screen_contains(&screen, "Price");
}

#[test]
fn test_footer_shows_rebound_keys() {
    let config = Config::from_toml_str("[keys]\ngenerate_invoice = \"C-p\"\n").unwrap();
    let mut app = App::new(config);

    let screen = render_app(&mut app);
    assert_screen_contains(&screen, "C-p  generate pdf");
    assert!(!screen.contains("C-g"), "old key still advertised:\n{}", screen);

    // The advertised key is the one that works
    assert!(press(&mut app, ctrl('g')).is_empty());
    assert_eq!(notice_text(&app), "");
    press(&mut app, ctrl('p'));
    assert_eq!(notice_text(&app), "Please enter your name.");
}

#[test]
fn test_missing_weight_keeps_fields_and_focuses_weight() {
    let mut app = app_with_customer("Ada");
    type_text(&mut app, "Apples");
    press(&mut app, key(KeyCode::Enter));

    let state = app.state();
    assert!(state.session.is_empty());
    assert_eq!(notice_text(&app), "Please enter a weight.");
    assert_eq!(state.focus, Focus::Weight);
    assert_eq!(state.inputs.product_name.value(), "Apples");
}

#[test]
fn test_invalid_price_is_rejected() {
    let mut app = app_with_customer("Ada");
    type_text(&mut app, "Apples");
    press(&mut app, key(KeyCode::Tab));
    type_text(&mut app, "2 kg");
    press(&mut app, key(KeyCode::Tab));
    type_text(&mut app, "cheap");
    press(&mut app, key(KeyCode::Enter));

    assert!(app.state().session.is_empty());
    assert_eq!(notice_text(&app), "Please enter a valid number for price.");
    assert_eq!(app.state().focus, Focus::Price);
    assert_eq!(app.state().inputs.price.value(), "cheap");

    let screen = render_app(&mut app);
    assert_screen_contains(&screen, "Please enter a valid number for price.");
}

#[test]
fn test_missing_name_reported_before_weight() {
    let mut app = app_with_customer("Ada");
    press(&mut app, key(KeyCode::Tab));
    type_text(&mut app, "2 kg");
    press(&mut app, key(KeyCode::Enter));

    assert_eq!(notice_text(&app), "Please enter a product name.");
    assert_eq!(app.state().focus, Focus::ProductName);
}

#[test]
fn test_generate_requires_customer_then_products() {
    let mut app = App::new(Config::default());

    let effects = press(&mut app, ctrl('g'));
    assert!(effects.is_empty());
    assert_eq!(notice_text(&app), "Please enter your name.");
    assert_eq!(app.state().focus, Focus::Customer);

    type_text(&mut app, "   ");
    let effects = press(&mut app, key(KeyCode::Enter));
    assert!(effects.is_empty());
    assert_eq!(notice_text(&app), "Please enter your name.");

    press(&mut app, ctrl('u'));
    type_text(&mut app, "Ada");
    let effects = press(&mut app, ctrl('g'));
    assert!(effects.is_empty());
    assert_eq!(notice_text(&app), "Please add at least one product.");
    assert_eq!(app.state().focus, Focus::ProductName);
    assert_eq!(app.state().input_mode, InputMode::Normal);
}

#[test]
fn test_generate_emits_export_effect_and_blocks_input() {
    let mut app = app_with_customer("  Ada  ");
    add_product(&mut app, "Apples", "2 kg", "4.50");
    add_product(&mut app, "Pears", "1 kg", "2.00");

    let effects = press(&mut app, ctrl('g'));
    assert_eq!(effects.len(), 1);
    match &effects[0] {
        Effect::ExportInvoice(invoice) => {
            assert_eq!(invoice.customer, "Ada");
            assert_eq!(invoice.products.len(), 2);
            assert_eq!(invoice.grand_total, 6.5);
        }
    }
    assert_eq!(app.state().input_mode, InputMode::Exporting);
    assert_eq!(notice_text(&app), "Generating invoice...");

    // Input is ignored until the export reports back
    type_text(&mut app, "x");
    assert!(app.state().inputs.product_name.is_empty());
    assert!(press(&mut app, ctrl('g')).is_empty());
}

#[test]
fn test_table_selection_and_removal() {
    let mut app = app_with_customer("Ada");
    add_product(&mut app, "Apples", "2 kg", "4.50");
    add_product(&mut app, "Pears", "1 kg", "2.00");
    add_product(&mut app, "Plums", "500 g", "1.25");

    for _ in 0..3 {
        press(&mut app, key(KeyCode::Tab));
    }
    assert_eq!(app.state().focus, Focus::Table);
    assert_eq!(app.state().table_state.selected(), Some(0));

    press(&mut app, key(KeyCode::Down));
    press(&mut app, key(KeyCode::Char('j')));
    press(&mut app, key(KeyCode::Char('j')));
    assert_eq!(app.state().table_state.selected(), Some(2));

    press(&mut app, key(KeyCode::Up));
    assert_eq!(app.state().table_state.selected(), Some(1));

    press(&mut app, key(KeyCode::Char('d')));
    assert_eq!(notice_text(&app), "Removed product: Pears");
    let names: Vec<&str> = app
        .state()
        .session
        .products()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, ["Apples", "Plums"]);
    assert_eq!(app.state().session.grand_total(), 5.75);
}

#[test]
fn test_removing_last_product_returns_to_form() {
    let mut app = app_with_customer("Ada");
    add_product(&mut app, "Apples", "2 kg", "4.50");
    press(&mut app, key(KeyCode::BackTab));
    assert_eq!(app.state().focus, Focus::Customer);
    for _ in 0..4 {
        press(&mut app, key(KeyCode::Tab));
    }
    assert_eq!(app.state().focus, Focus::Table);

    press(&mut app, key(KeyCode::Delete));
    assert!(app.state().session.is_empty());
    assert_eq!(app.state().table_state.selected(), None);
    assert_eq!(app.state().focus, Focus::ProductName);
}

#[test]
fn test_clear_form_empties_product_fields() {
    let mut app = app_with_customer("Ada");
    type_text(&mut app, "Apples");
    press(&mut app, key(KeyCode::Tab));
    type_text(&mut app, "2 kg");

    press(&mut app, ctrl('l'));
    assert!(app.state().inputs.product_name.is_empty());
    assert!(app.state().inputs.weight.is_empty());
    assert_eq!(app.state().session.customer, "Ada");
}

#[test]
fn test_paste_flattens_line_breaks() {
    let mut app = App::new(Config::default());
    press(&mut app, Event::Paste("Ada\r\nLovelace".to_string()));
    assert_eq!(app.state().session.customer, "Ada Lovelace");
}

#[test]
fn test_editing_keys_apply_to_focused_field() {
    let mut app = App::new(Config::default());
    type_text(&mut app, "Ada Lovelace");
    press(&mut app, ctrl('w'));
    assert_eq!(app.state().session.customer, "Ada ");

    press(&mut app, key(KeyCode::Backspace));
    press(&mut app, key(KeyCode::Home));
    type_text(&mut app, "Countess ");
    assert_eq!(app.state().session.customer, "Countess Ada");
}

#[test]
fn test_export_failure_shows_dialog_until_dismissed() {
    let mut app = app_with_customer("Ada");
    app.handle_app_event(AppEvent::InvoiceExported {
        result: Err("Failed to write /nope/invoice.pdf: permission denied".to_string()),
    });

    assert_eq!(app.state().input_mode, InputMode::ShowingError);
    let screen = render_app(&mut app);
    assert_screen_contains(&screen, "Export Failed");
    assert_screen_contains(&screen, "Could not write the invoice.");

    // Form keys are swallowed while the dialog is open
    type_text(&mut app, "x");
    assert!(app.state().inputs.product_name.is_empty());

    press(&mut app, key(KeyCode::Char('d')));
    assert!(app.state().error_dialog.details_expanded());

    press(&mut app, key(KeyCode::Esc));
    assert!(!app.state().error_dialog.is_visible());
    assert_eq!(app.state().input_mode, InputMode::Normal);
}

#[test]
fn test_quit_sets_flag() {
    let mut app = App::new(Config::default());
    press(&mut app, ctrl('q'));
    assert!(app.state().should_quit);
}
