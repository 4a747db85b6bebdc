use crate::config::types::{BuildConfig, BuildDeclarations, PluginDescriptor};
use crate::utils::ConfigError;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

/// Leading and trailing slash with URL-safe segments in between
static BASE_PATH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/(?:[A-Za-z0-9._-]+/)*$").expect("base path pattern is a valid regex")
});

/// Turns build declarations into an effective `BuildConfig`
pub struct ConfigResolver {
    /// The declarations as loaded from file or built in
    declarations: BuildDeclarations,
    /// Directory that relative alias paths are resolved against
    anchor_dir: PathBuf,
}

impl ConfigResolver {
    pub fn new(declarations: BuildDeclarations, anchor_dir: PathBuf) -> Self {
        Self {
            declarations,
            anchor_dir,
        }
    }

    pub fn anchor_dir(&self) -> &Path {
        &self.anchor_dir
    }

    /// Validate the declarations and resolve every alias to an absolute path.
    ///
    /// The current working directory never takes part: the anchor directory
    /// must already be absolute, and every alias target must exist.
    pub fn resolve(&self) -> Result<BuildConfig, ConfigError> {
        if !self.anchor_dir.is_absolute() {
            return Err(ConfigError::invalid_path(
                "anchor_dir",
                &self.anchor_dir,
                "anchor directory must be an absolute path",
            ));
        }

        let base_path = resolve_base_path(&self.declarations.base)?;
        let plugins = resolve_plugins(&self.declarations.plugins)?;

        let mut alias_map = BTreeMap::new();
        for (key, value) in &self.declarations.resolve.alias {
            let target = self.resolve_alias(key, value)?;
            alias_map.insert(key.clone(), target);
        }

        Ok(BuildConfig::new(plugins, base_path, alias_map))
    }

    /// Resolve one alias target relative to the anchor directory
    fn resolve_alias(&self, key: &str, value: &str) -> Result<PathBuf, ConfigError> {
        let field = format!("resolve.alias.{}", key);

        if key.is_empty() {
            return Err(ConfigError::invalid(field, value, "alias key must not be empty"));
        }
        if value.trim().is_empty() {
            return Err(ConfigError::invalid(field, value, "alias path must not be empty"));
        }

        let target = normalize_path(&self.anchor_dir.join(value));
        if !target.exists() {
            return Err(ConfigError::invalid_path(
                field,
                &target,
                "alias path does not exist",
            ));
        }

        Ok(target)
    }
}

/// Check that a declared base path is path-shaped
pub fn resolve_base_path(base: &str) -> Result<String, ConfigError> {
    if base.is_empty() {
        return Err(ConfigError::invalid("base", base, "base path must not be empty"));
    }
    if !base.starts_with('/') {
        return Err(ConfigError::invalid("base", base, "base path must start with '/'"));
    }
    if !base.ends_with('/') {
        return Err(ConfigError::invalid("base", base, "base path must end with '/'"));
    }
    if !BASE_PATH_PATTERN.is_match(base) {
        return Err(ConfigError::invalid(
            "base",
            base,
            "base path segments may only contain letters, digits, '.', '_' and '-'",
        ));
    }
    Ok(base.to_string())
}

fn resolve_plugins(plugins: &[PluginDescriptor]) -> Result<Vec<PluginDescriptor>, ConfigError> {
    for (index, plugin) in plugins.iter().enumerate() {
        if plugin.name.trim().is_empty() {
            return Err(ConfigError::invalid(
                format!("plugins[{}]", index),
                &plugin.name,
                "plugin name must not be empty",
            ));
        }
    }
    Ok(plugins.to_vec())
}

/// Fold `.` and `..` components without touching the filesystem.
///
/// Symlinks are left alone so the result stays under the anchor directory
/// the caller passed in.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                if !normalized.pop() && !normalized.has_root() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}
