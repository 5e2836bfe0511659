use anyhow::Result;
use clap::Parser;
use invoicer::cli::{run_generate, Cli, Commands};
use invoicer::ui::{terminal_guard::install_panic_hook, AppState};
use invoicer::{util, App};
use std::fs::{self, OpenOptions};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    util::init_data_dir(cli.data_dir.clone());

    // Initialize logging to file (~/.invoicer/logs/invoicer.log)
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(util::env_filter())
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    let config = cli.load_config();

    match cli.command {
        Some(Commands::Generate {
            customer,
            products,
            output,
        }) => {
            let path = run_generate(&config, customer.as_deref(), &products, output.as_deref())?;
            println!("Saved invoice to {}", path.display());
            Ok(())
        }
        None => {
            install_panic_hook();

            let state = match cli.customer.as_deref() {
                Some(customer) => AppState::new().with_customer(customer),
                None => AppState::new(),
            };
            let mut app = App::with_state(config, state);
            app.run().await
        }
    }
}
