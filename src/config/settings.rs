use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::invoice::{ExportOptions, PageSetup, Paper, DEFAULT_FILE_NAME};
use crate::ui::action::Action;
use crate::util::paths::{config_path, default_output_dir};

use super::default_keys::default_keybindings;
use super::keys::{parse_key_notation, KeyContext, KeybindingConfig};

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory generated invoices are written to
    pub output_dir: PathBuf,
    /// File name of the generated invoice
    pub file_name: String,
    /// Paper size of the generated document
    pub paper: Paper,
    /// Keybinding configuration
    pub keybindings: KeybindingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            paper: Paper::default(),
            keybindings: default_keybindings(),
        }
    }
}

/// TOML representation of keybinding configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlKeybindings {
    /// Form field keybindings
    pub form: Option<HashMap<String, String>>,
    /// Product table keybindings
    pub table: Option<HashMap<String, String>>,
    /// Error dialog keybindings
    pub dialog: Option<HashMap<String, String>>,
    /// Global keybindings (apply to all contexts)
    #[serde(flatten)]
    pub global: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlInvoiceConfig {
    pub output_dir: Option<PathBuf>,
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlPdfConfig {
    pub paper: Option<Paper>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub invoice: Option<TomlInvoiceConfig>,
    pub pdf: Option<TomlPdfConfig>,
    pub keys: Option<TomlKeybindings>,
}

impl TomlKeybindings {
    /// Convert TOML keybindings to KeybindingConfig
    fn to_keybinding_config(&self) -> KeybindingConfig {
        let mut config = KeybindingConfig::new();

        for (action_name, key_str) in &self.global {
            if let Some(action) = parse_action(action_name) {
                bind_notation(&mut config.global, key_str, action, action_name);
            } else {
                tracing::warn!(action = %action_name, "Unknown action in [keys]");
            }
        }

        let sections = [
            (KeyContext::Form, &self.form),
            (KeyContext::Table, &self.table),
            (KeyContext::Dialog, &self.dialog),
        ];
        for (context, bindings) in sections {
            if let Some(bindings) = bindings {
                let map = config.context.entry(context).or_default();
                for (action_name, key_str) in bindings {
                    match parse_action(action_name) {
                        Some(action) => bind_notation(map, key_str, action, action_name),
                        None => tracing::warn!(
                            action = %action_name,
                            context = ?context,
                            "Unknown action in keybinding section"
                        ),
                    }
                }
            }
        }

        config
    }
}

fn bind_notation(
    map: &mut HashMap<super::keys::KeyCombo, Action>,
    key_str: &str,
    action: Action,
    action_name: &str,
) {
    match parse_key_notation(key_str) {
        Ok(combo) => {
            map.insert(combo, action);
        }
        Err(e) => {
            tracing::warn!(action = %action_name, key = %key_str, error = %e, "Invalid key notation");
        }
    }
}

/// Parse an action name string into an Action
pub fn parse_action(name: &str) -> Option<Action> {
    match name {
        "quit" => Some(Action::Quit),
        "generate_invoice" | "generate" => Some(Action::GenerateInvoice),
        "focus_next" => Some(Action::FocusNext),
        "focus_prev" => Some(Action::FocusPrev),
        "submit" => Some(Action::Submit),
        "clear_form" => Some(Action::ClearForm),
        "backspace" => Some(Action::Backspace),
        "delete" => Some(Action::Delete),
        "delete_word_back" => Some(Action::DeleteWordBack),
        "delete_to_start" => Some(Action::DeleteToStart),
        "delete_to_end" => Some(Action::DeleteToEnd),
        "move_cursor_left" => Some(Action::MoveCursorLeft),
        "move_cursor_right" => Some(Action::MoveCursorRight),
        "move_cursor_start" => Some(Action::MoveCursorStart),
        "move_cursor_end" => Some(Action::MoveCursorEnd),
        "move_word_left" => Some(Action::MoveWordLeft),
        "move_word_right" => Some(Action::MoveWordRight),
        "select_next" => Some(Action::SelectNext),
        "select_prev" => Some(Action::SelectPrev),
        "remove_selected" | "remove_product" => Some(Action::RemoveSelected),
        "dismiss" | "dismiss_dialog" => Some(Action::DismissDialog),
        "toggle_details" => Some(Action::ToggleDetails),
        _ => None,
    }
}

impl Config {
    /// Load config from the default location, creating it on first run.
    ///
    /// A missing or broken file never stops the app: problems are logged and
    /// defaults are used.
    pub fn load() -> Self {
        let config_file = config_path();

        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        Self::load_or_default(&config_file)
    }

    /// Load from `path`, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Using default configuration");
                Config::default()
            }
        }
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Merge a TOML document on top of the defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        let toml_config: TomlConfig = toml::from_str(contents)?;
        let mut config = Config::default();

        if let Some(invoice) = toml_config.invoice {
            if let Some(dir) = invoice.output_dir {
                config.output_dir = expand_home(&dir);
            }
            if let Some(name) = invoice.file_name.filter(|n| !n.trim().is_empty()) {
                config.file_name = name;
            }
        }

        if let Some(paper) = toml_config.pdf.and_then(|pdf| pdf.paper) {
            config.paper = paper;
        }

        if let Some(keys) = toml_config.keys {
            config.keybindings.merge(keys.to_keybinding_config());
        }

        Ok(config)
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::warn!(error = %e, "Failed to create config directory");
                return;
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }

    pub fn with_output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = dir;
        self
    }

    /// Export settings derived from this config
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            output_dir: self.output_dir.clone(),
            file_name: self.file_name.clone(),
            page: PageSetup::default().with_paper(self.paper),
        }
    }
}

/// Expand a leading `~/` to the home directory
fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| path.to_path_buf()),
        Err(_) => path.to_path_buf(),
    }
}
