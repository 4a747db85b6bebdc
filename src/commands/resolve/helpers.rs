use crate::cli::OutputFormat;
use crate::config::BuildConfig;
use crate::utils::display_utils::format_display_path;
use anyhow::{Context, Result};

/// Render a resolved configuration for stdout
pub fn render(config: &BuildConfig, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(config)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(config).context("Failed to serialize configuration as JSON")
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(config).context("Failed to serialize configuration as YAML")
        }
    }
}

fn render_table(config: &BuildConfig) -> String {
    let mut lines = Vec::new();

    lines.push(format!("base: {}", config.base_path()));

    lines.push("plugins:".to_string());
    if config.plugins().is_empty() {
        lines.push("  (none)".to_string());
    }
    for (index, plugin) in config.plugins().iter().enumerate() {
        let has_options = plugin.options.as_object().map_or(!plugin.options.is_null(), |o| !o.is_empty());
        if has_options {
            lines.push(format!("  {}. {} {}", index + 1, plugin.name, plugin.options));
        } else {
            lines.push(format!("  {}. {}", index + 1, plugin.name));
        }
    }

    lines.push("alias:".to_string());
    if config.alias_map().is_empty() {
        lines.push("  (none)".to_string());
    }
    let key_width = config.alias_map().keys().map(String::len).max().unwrap_or(0);
    for (key, target) in config.alias_map() {
        lines.push(format!("  {:<width$} -> {}", key, format_display_path(target), width = key_width));
    }

    lines.join("\n")
}
