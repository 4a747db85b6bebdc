use crate::config::PluginDescriptor;
use std::env;
use std::path::Path;

/// Convert an absolute path to a relative path for display purposes
/// This keeps CLI output short when the project lives under the current working directory
pub fn format_display_path(path: &Path) -> String {
    if let Ok(current_dir) = env::current_dir() {
        if let Ok(relative_path) = path.strip_prefix(&current_dir) {
            let relative = relative_path.to_string_lossy();
            if relative.is_empty() {
                return ".".to_string();
            }
            return format!("./{}", relative);
        }
    }

    path.to_string_lossy().to_string()
}

/// Format a plugin list for display, keeping declaration order
pub fn format_plugin_list(plugins: &[PluginDescriptor]) -> String {
    if plugins.is_empty() {
        return "(none)".to_string();
    }

    let names: Vec<&str> = plugins.iter().map(|p| p.name.as_str()).collect();
    if names.len() <= 3 {
        names.join(", ")
    } else {
        format!("{} (+{} more)", names[..3].join(", "), names.len() - 3)
    }
}
