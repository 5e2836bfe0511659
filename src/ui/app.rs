use std::io;
use std::time::Duration;

use crossterm::event;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use unicode_width::UnicodeWidthStr;

use crate::config::{Config, KeyContext};
use crate::invoice::export_invoice;
use crate::ui::app_state::AppState;
use crate::ui::components::{
    theme::{ACCENT_PRIMARY, TEXT_BRIGHT, TITLE_BAR_BG},
    ErrorDialog, FormField, GlobalFooter, Notice, ProductTable, StatusLine, FORM_FIELD_HEIGHT,
};
use crate::ui::effect::Effect;
use crate::ui::events::{AppEvent, Focus, InputMode};
use crate::ui::terminal_guard::TerminalGuard;

mod app_actions_dialog;
mod app_actions_form;
mod app_actions_input_edit;
mod app_actions_table;
mod app_input;

pub const APP_TITLE: &str = "Product Invoice Generator";
pub const CUSTOMER_LABEL: &str = "Enter your name:";
pub const PRODUCT_NAME_LABEL: &str = "Product Name";
pub const WEIGHT_LABEL: &str = "Weight (e.g., '2 kg 300 g' or '2.3 kg')";
pub const PRICE_LABEL: &str = "Price";
/// Width of the price field; the name field takes what the weight field leaves
const PRICE_FIELD_WIDTH: u16 = 16;

/// Main application state
pub struct App {
    /// Application configuration
    config: Config,
    /// Form, session, and overlay state
    state: AppState,
    /// Event channel sender
    event_tx: mpsc::UnboundedSender<AppEvent>,
    /// Event channel receiver
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self::with_state(config, AppState::new())
    }

    pub fn with_state(config: Config, state: AppState) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            config,
            state,
            event_tx,
            event_rx,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut guard = TerminalGuard::enter()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = self.event_loop(&mut terminal).await;

        guard.cleanup()?;
        terminal.show_cursor()?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            tokio::select! {
                _ = tokio::time::sleep(Duration::from_millis(16)) => {
                    while event::poll(Duration::from_millis(0))? {
                        let effects = self.handle_input_event(event::read()?);
                        self.run_effects(effects);
                    }
                }

                Some(event) = self.event_rx.recv() => {
                    self.handle_app_event(event);
                }
            }

            if self.state.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Execute side effects off the UI thread; results come back as events
    pub fn run_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ExportInvoice(invoice) => {
                    let options = self.config.export_options();
                    let event_tx = self.event_tx.clone();
                    tokio::spawn(async move {
                        let joined = tokio::task::spawn_blocking(move || {
                            export_invoice(&invoice, &options)
                        })
                        .await;
                        let result = match joined {
                            Ok(Ok(path)) => Ok(path),
                            Ok(Err(e)) => Err(e.to_string()),
                            Err(e) => Err(format!("Export task failed: {}", e)),
                        };
                        let _ = event_tx.send(AppEvent::InvoiceExported { result });
                    });
                }
            }
        }
    }

    /// Wait for the next background event (used by tests and the CLI)
    pub async fn next_app_event(&mut self) -> Option<AppEvent> {
        self.event_rx.recv().await
    }

    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::InvoiceExported { result } => {
                self.state.input_mode = InputMode::Normal;
                match result {
                    Ok(path) => {
                        self.state.notice = Some(Notice::success(format!(
                            "Saved invoice to {}",
                            path.display()
                        )));
                    }
                    Err(message) => {
                        tracing::error!(error = %message, "Invoice export failed");
                        self.state.notice = Some(Notice::error("Could not write the invoice."));
                        self.state.error_dialog.show_with_details(
                            "Export Failed",
                            "Could not write the invoice.",
                            message,
                        );
                        self.state.input_mode = InputMode::ShowingError;
                    }
                }
            }
        }
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let size = f.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),                 // Title
                Constraint::Length(FORM_FIELD_HEIGHT), // Customer
                Constraint::Length(1),                 // Section heading
                Constraint::Length(FORM_FIELD_HEIGHT), // Product fields
                Constraint::Length(1),                 // Status line
                Constraint::Min(4),                    // Products table
                Constraint::Length(1),                 // Footer
            ])
            .split(size);

        let buf = f.buffer_mut();

        Paragraph::new(Line::from(Span::styled(
            format!(" {}", APP_TITLE),
            Style::default()
                .fg(TEXT_BRIGHT)
                .add_modifier(Modifier::BOLD),
        )))
        .style(Style::default().bg(TITLE_BAR_BG))
        .render(chunks[0], buf);

        let inputs = &self.state.inputs;
        let focus = self.state.focus;

        let customer = FormField::new(CUSTOMER_LABEL, &inputs.customer)
            .focused(focus == Focus::Customer)
            .placeholder("Customer name");
        let mut cursor =
            (focus == Focus::Customer).then(|| customer.cursor_position(chunks[1]));
        customer.render(chunks[1], buf);

        Paragraph::new(Line::from(Span::styled(
            " Add Product Details",
            Style::default()
                .fg(ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )))
        .render(chunks[2], buf);

        let product_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(WEIGHT_LABEL.width() as u16 + 4),
                Constraint::Length(PRICE_FIELD_WIDTH),
            ])
            .split(chunks[3]);

        let product_fields = [
            (Focus::ProductName, PRODUCT_NAME_LABEL, &inputs.product_name),
            (Focus::Weight, WEIGHT_LABEL, &inputs.weight),
            (Focus::Price, PRICE_LABEL, &inputs.price),
        ];
        for ((field_focus, label, input), area) in
            product_fields.into_iter().zip(product_areas.iter())
        {
            let field = FormField::new(label, input).focused(focus == field_focus);
            if focus == field_focus {
                cursor = Some(field.cursor_position(*area));
            }
            field.render(*area, buf);
        }

        StatusLine::new(self.state.notice.as_ref()).render(chunks[4], buf);

        let session = &self.state.session;
        ProductTable::new(session.products(), session.grand_total())
            .focused(focus == Focus::Table)
            .render(chunks[5], buf, &mut self.state.table_state);

        let keys = &self.config.keybindings;
        GlobalFooter::for_context(self.key_context(), keys).render(chunks[6], buf);

        if self.state.error_dialog.is_visible() {
            ErrorDialog::new(&self.state.error_dialog, keys).render(size, f.buffer_mut());
            cursor = None;
        }

        if self.state.input_mode == InputMode::Normal {
            if let Some(position) = cursor {
                f.set_cursor_position(position);
            }
        }
    }

    /// Keybinding context for the current mode and focus
    pub fn key_context(&self) -> KeyContext {
        KeyContext::from_state(self.state.input_mode, self.state.focus)
    }
}
