//! Integration tests for invoice generation: from the form to a file on disk

use std::path::Path;

use super::common::input::{add_product, ctrl, key, press, type_text};
use super::common::terminal::{assert_screen_contains, render_app};
use crossterm::event::KeyCode;
use invoicer::invoice::{InvoiceLayout, PageSetup, GRAND_TOTAL_LABEL};
use invoicer::ui::InputMode;
use invoicer::{App, Config, Invoice, ProductEntry};
use tempfile::TempDir;

fn app_in(dir: &Path) -> App {
    App::new(Config::default().with_output_dir(dir.to_path_buf()))
}

async fn generate(app: &mut App) {
    let effects = press(app, ctrl('g'));
    assert_eq!(effects.len(), 1, "expected an export effect");
    app.run_effects(effects);
    let event = app.next_app_event().await.expect("export result");
    app.handle_app_event(event);
}

#[tokio::test]
async fn test_generate_writes_invoice_pdf() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(dir.path());

    type_text(&mut app, "Ada");
    press(&mut app, key(KeyCode::Tab));
    add_product(&mut app, "Apples", "2 kg 300 g", "4.50");
    add_product(&mut app, "Pears", "1 kg", "3.25");

    generate(&mut app).await;

    let path = dir.path().join("invoice.pdf");
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));

    assert_eq!(app.state().input_mode, InputMode::Normal);
    let notice = app.state().notice.as_ref().unwrap();
    assert_eq!(notice.text, format!("Saved invoice to {}", path.display()));

    // The session survives so the invoice can be regenerated
    assert_eq!(app.state().session.len(), 2);
}

#[tokio::test]
async fn test_generate_replaces_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("invoice.pdf");
    std::fs::write(&path, b"old contents").unwrap();

    let mut app = app_in(dir.path());
    type_text(&mut app, "Ada");
    press(&mut app, key(KeyCode::Tab));
    add_product(&mut app, "Apples", "2 kg", "4.50");

    generate(&mut app).await;

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn test_export_failure_opens_error_dialog() {
    let dir = TempDir::new().unwrap();
    // A file where the output directory should be makes the write fail
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"").unwrap();

    let mut app = app_in(&blocker);
    type_text(&mut app, "Ada");
    press(&mut app, key(KeyCode::Tab));
    add_product(&mut app, "Apples", "2 kg", "4.50");

    generate(&mut app).await;

    assert_eq!(app.state().input_mode, InputMode::ShowingError);
    assert!(app.state().error_dialog.is_visible());
    let screen = render_app(&mut app);
    assert_screen_contains(&screen, "Export Failed");

    press(&mut app, key(KeyCode::Enter));
    assert_eq!(app.state().input_mode, InputMode::Normal);
}

#[tokio::test]
async fn test_unprintable_text_fails_without_writing() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(dir.path());

    type_text(&mut app, "Zoë 🍣");
    press(&mut app, key(KeyCode::Tab));
    add_product(&mut app, "Tea", "250 g", "5");

    generate(&mut app).await;

    assert_eq!(app.state().input_mode, InputMode::ShowingError);
    let details = app.state().error_dialog.details.as_deref().unwrap();
    assert!(details.contains("built-in PDF font cannot print"));
    assert!(!dir.path().join("invoice.pdf").exists());
}

#[test]
fn test_layout_matches_table_contents() {
    let invoice = Invoice::new(
        "Ada",
        vec![
            ProductEntry {
                name: "Apples".into(),
                weight: "2 kg 300 g".into(),
                price: 4.5,
            },
            ProductEntry {
                name: "Pears".into(),
                weight: "1 kg".into(),
                price: 3.25,
            },
        ],
    );

    let layout = InvoiceLayout::build(&invoice, &PageSetup::default());
    let texts: Vec<&str> = layout.cells().map(|c| c.text.as_str()).collect();

    assert!(texts.contains(&"Name: Ada"));
    assert!(texts.contains(&"Apples"));
    assert!(texts.contains(&"2 kg 300 g"));
    assert!(texts.contains(&GRAND_TOTAL_LABEL));
    assert_eq!(texts.last(), Some(&"7.75"));
}
