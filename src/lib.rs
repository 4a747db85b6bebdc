pub mod cli;
pub mod commands;
pub mod config;
pub mod utils;

use clap::Parser;
use utils::logger::{self, LogLevel};

pub use config::{BuildConfig, BuildDeclarations, ConfigResolver, PluginDescriptor};
pub use utils::ConfigError;

pub fn run() -> anyhow::Result<()> {
    let cli = cli::Args::parse();

    let level = if cli.verbose { LogLevel::Debug } else { LogLevel::Info };
    logger::init(level, cli.quiet);

    commands::handle_command(cli)
}
