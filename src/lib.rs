//! rraincast library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! parsing/rendering modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, cfg_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let cfg_path = match &cli.config {
        Some(p) => utils::path::expand_tilde(p),
        None => Config::config_file(),
    };

    let cfg = Config::load(&cfg_path)?;

    dispatch(&cli, &cfg, &cfg_path)
}
