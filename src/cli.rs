//! Command line surface: the TUI by default, `generate` for scripted use

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::invoice::{export_invoice, InvoiceSession, ProductDraft};

/// Product invoice generator
#[derive(Parser, Debug)]
#[command(name = "invoicer")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'invoicer' without a subcommand for the interactive form.")]
pub struct Cli {
    /// Config file (defaults to ~/.invoicer/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Data directory for config and logs (defaults to ~/.invoicer)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Directory generated invoices are written to
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Pre-fill the customer name on the form
    #[arg(long)]
    pub customer: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write an invoice without opening the form
    Generate {
        /// Customer name printed on the invoice
        #[arg(short, long)]
        customer: Option<String>,

        /// Product as "NAME;WEIGHT;PRICE" (repeatable)
        #[arg(short, long = "product", value_name = "NAME;WEIGHT;PRICE", value_parser = parse_product_arg)]
        products: Vec<ProductDraft>,

        /// Output file (overrides the configured directory and file name)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Split a `NAME;WEIGHT;PRICE` argument into draft fields. Validation of
/// the fields themselves happens when the draft is added to a session.
pub fn parse_product_arg(arg: &str) -> Result<ProductDraft, String> {
    let mut parts = arg.splitn(3, ';');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(weight), Some(price)) => Ok(ProductDraft::new(name, weight, price)),
        _ => Err(format!("expected NAME;WEIGHT;PRICE, got '{}'", arg)),
    }
}

impl Cli {
    /// Resolve the configuration the flags point at
    pub fn load_config(&self) -> Config {
        let config = match &self.config {
            Some(path) => Config::load_or_default(path),
            None => Config::load(),
        };
        match &self.output_dir {
            Some(dir) => config.with_output_dir(dir.clone()),
            None => config,
        }
    }
}

/// Validate the products the way the form does and write the invoice.
///
/// Returns the path of the written document.
pub fn run_generate(
    config: &Config,
    customer: Option<&str>,
    products: &[ProductDraft],
    output: Option<&Path>,
) -> Result<PathBuf> {
    let mut session = InvoiceSession::new();
    session.set_customer(customer.unwrap_or_default());

    for (i, draft) in products.iter().enumerate() {
        session
            .add_product(draft)
            .with_context(|| format!("Invalid product #{} '{}'", i + 1, draft.name))?;
    }

    let invoice = session.prepare_invoice()?;
    let options = match output {
        Some(path) => config.export_options().with_output_path(path),
        None => config.export_options(),
    };

    Ok(export_invoice(&invoice, &options)?)
}
