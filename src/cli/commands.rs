use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::model::{Config, FilterMode};

#[derive(Parser)]
#[command(name = "td", about = concat!("[x] todos v", env!("CARGO_PKG_VERSION"), " - a todo list for one session"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read configuration from this file instead of the default location
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (overrides [log].file)
    #[arg(long = "log-file", global = true)]
    pub log_file: Option<PathBuf>,

    /// Filter to start with (overrides [ui].default_filter)
    #[arg(short = 'f', long = "filter", value_enum)]
    pub filter: Option<FilterMode>,
}

impl Cli {
    /// Fold command-line overrides into a loaded config
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(path) = &self.log_file {
            config.log.file = Some(path.clone());
        }
        if let Some(mode) = self.filter {
            config.ui.default_filter = mode;
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the effective configuration as TOML
    Config,
}
