//! Integration tests for the `invoicer generate` command

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary command with an isolated data directory
fn invoicer(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("invoicer").unwrap();
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

#[test]
fn test_generate_writes_pdf() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let path = out.path().join("ada.pdf");

    invoicer(&data)
        .args(["generate", "--customer", "Ada"])
        .args(["--product", "Apples;2 kg 300 g;4.50"])
        .args(["--product", "Pears;1 kg;3.25"])
        .arg("--output")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved invoice to"))
        .stdout(predicate::str::contains("ada.pdf"));

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn test_generate_uses_output_dir_and_default_name() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    invoicer(&data)
        .arg("--output-dir")
        .arg(out.path())
        .args(["generate", "-c", "Ada", "-p", "Tea;250 g;5"])
        .assert()
        .success();

    assert!(out.path().join("invoice.pdf").exists());
    // First run creates the config file in the data directory
    assert!(data.path().join("config.toml").exists());
}

#[test]
fn test_generate_requires_customer() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    invoicer(&data)
        .arg("--output-dir")
        .arg(out.path())
        .args(["generate", "--product", "Tea;250 g;5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter your name."));

    assert!(!out.path().join("invoice.pdf").exists());
}

#[test]
fn test_generate_requires_products() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    invoicer(&data)
        .arg("--output-dir")
        .arg(out.path())
        .args(["generate", "--customer", "Ada"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please add at least one product."));
}

#[test]
fn test_generate_rejects_invalid_price() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    invoicer(&data)
        .arg("--output-dir")
        .arg(out.path())
        .args(["generate", "--customer", "Ada", "--product", "Tea;250 g;cheap"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid product #1 'Tea'"))
        .stderr(predicate::str::contains(
            "Please enter a valid number for price.",
        ));
}

#[test]
fn test_generate_rejects_malformed_product_argument() {
    let data = TempDir::new().unwrap();

    invoicer(&data)
        .args(["generate", "--customer", "Ada", "--product", "Tea"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected NAME;WEIGHT;PRICE"));
}

#[test]
fn test_generate_rejects_text_the_pdf_font_cannot_print() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    invoicer(&data)
        .arg("--output-dir")
        .arg(out.path())
        .args(["generate", "--customer", "Ada", "--product", "Sushi;寿司;12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'寿司' contains characters the built-in PDF font cannot print",
        ));

    assert!(!out.path().join("invoice.pdf").exists());
}
