use super::helpers;
use crate::cli::{OutputFormat, ResolveArgs};
use crate::config::{DeclarationSource, Settings};
use crate::utils::display_utils::{format_display_path, format_plugin_list};
use crate::utils::logger;

pub fn execute(args: ResolveArgs, settings: &Settings) -> anyhow::Result<()> {
    let config = settings.config();

    if args.format == OutputFormat::Table {
        let source = match &settings.source {
            DeclarationSource::File(path) => format_display_path(path),
            DeclarationSource::Builtin => "built-in".to_string(),
        };
        let anchor = format_display_path(&settings.anchor_dir);
        let plugins = format_plugin_list(config.plugins());
        logger::config_summary(&[
            ("Declarations", source.as_str()),
            ("Anchor", anchor.as_str()),
            ("Plugins", plugins.as_str()),
        ]);
    }

    println!("{}", helpers::render(config, args.format)?);
    Ok(())
}
