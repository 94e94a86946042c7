use clap::Parser;
use std::path::PathBuf;

use crate::config::EditorConfig;

#[derive(Debug, Parser)]
#[command(name = "tvi")]
#[command(version = "0.1.0")]
#[command(about = "A small modal terminal text editor")]
pub struct CliArgs {
    /// File to edit
    pub file: PathBuf,

    /// Config file (defaults to <config dir>/tvi/config.toml)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Spaces each tab expands to on load
    #[arg(long)]
    pub tab_width: Option<usize>,

    /// Write logs to this file; RUST_LOG sets the level
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl CliArgs {
    /// Command-line flags win over the config file.
    pub fn apply_overrides(&self, config: &mut EditorConfig) {
        if let Some(tab_width) = self.tab_width {
            config.tab_width = tab_width;
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = Some(log_file.clone());
        }
    }
}

pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
