pub mod cli;
pub mod core;
pub mod error;
pub mod providers;
pub mod resolver;
pub mod store;

pub use error::Error;

use crate::core::config::AppConfig;
use anyhow::Result;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ConvertArgs {
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub save: bool,
    pub offline: bool,
}

#[derive(Debug, Clone)]
pub enum AppCommand {
    Convert(ConvertArgs),
    List,
    History,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Convert(args) => cli::convert::run(&args, &config).await,
        AppCommand::List => cli::list::run(),
        AppCommand::History => cli::history::run(&config),
    }
}
