//! Utility modules

pub mod logging;
pub mod paths;

pub use logging::env_filter;
pub use paths::{config_path, data_dir, default_output_dir, init_data_dir, log_file_path, logs_dir};
