mod check;
mod lookup;
mod resolve;

pub use resolve::render;

use crate::cli::{Args, Commands};
use crate::config::Settings;
use anyhow::Result;

pub fn handle_command(args: Args) -> Result<()> {
    // Resolution failures abort here, before any command runs
    let settings = match &args.config {
        Some(location) => Settings::load(location)?,
        None => Settings::load_from_current_dir()?,
    };

    match args.command {
        Commands::Resolve(resolve_args) => resolve::execute(resolve_args, &settings),
        Commands::Check => check::execute(&settings),
        Commands::Alias(alias_args) => lookup::execute_alias(alias_args, &settings),
        Commands::Asset(asset_args) => lookup::execute_asset(asset_args, &settings),
    }
}
