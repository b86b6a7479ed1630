//! bikeshare library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use crate::cli::parser::Cli;
use crate::cli::prompt::Prompter;
use crate::config::Config;
use crate::core::reporters::ReportContext;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::utils::colors::Theme;
use crate::utils::path::expand_tilde;
use std::io;

/// Runs an interactive session on stdin/stdout with the given configuration.
pub fn start_session(cfg: &Config) -> AppResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let prompter = Prompter::new(stdin.lock(), stdout.lock(), Theme::new(cfg.use_colors()));
    let mut session = Session::new(prompter, cfg.data_path(), ReportContext::from_config(cfg));
    session.run()
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ apply data directory override from the command line
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = expand_tilde(dir).to_string_lossy().to_string();
    }
    log::debug!("data directory: {}", cfg.data_path().display());

    // 4️⃣ hand over to the interactive session
    start_session(&cfg)
}
