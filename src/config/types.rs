use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Default deployment base path when none is declared
pub const DEFAULT_BASE: &str = "/";

/// An opaque plugin reference: identity plus initialization parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PluginDeclaration")]
pub struct PluginDescriptor {
    /// Plugin identity as understood by the build engine
    pub name: String,
    /// Initialization parameters, passed through untouched
    pub options: serde_json::Value,
}

/// Accepted spellings of a plugin in a declaration file
#[derive(Deserialize)]
#[serde(untagged)]
enum PluginDeclaration {
    Name(String),
    Full {
        name: String,
        #[serde(default = "empty_options")]
        options: serde_json::Value,
    },
}

impl From<PluginDeclaration> for PluginDescriptor {
    fn from(declaration: PluginDeclaration) -> Self {
        match declaration {
            PluginDeclaration::Name(name) => Self::named(&name),
            PluginDeclaration::Full { name, options } => Self { name, options },
        }
    }
}

fn empty_options() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl PluginDescriptor {
    /// A plugin with no initialization parameters
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            options: empty_options(),
        }
    }

    pub fn with_options(name: &str, options: serde_json::Value) -> Self {
        Self {
            name: name.to_string(),
            options,
        }
    }
}

/// Module resolution declarations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolveDeclarations {
    /// Import prefix to path, relative to the anchor directory unless absolute
    #[serde(default, deserialize_with = "unique_alias_map")]
    pub alias: BTreeMap<String, String>,
}

/// Build configuration exactly as declared, before resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildDeclarations {
    /// Plugins in application order
    #[serde(default)]
    pub plugins: Vec<PluginDescriptor>,
    /// Public base path for emitted assets
    #[serde(default = "default_base")]
    pub base: String,
    #[serde(default)]
    pub resolve: ResolveDeclarations,
}

fn default_base() -> String {
    DEFAULT_BASE.to_string()
}

impl Default for BuildDeclarations {
    fn default() -> Self {
        Self {
            plugins: Vec::new(),
            base: default_base(),
            resolve: ResolveDeclarations::default(),
        }
    }
}

impl BuildDeclarations {
    /// Declarations used when a project carries no declaration file:
    /// the React plugin, the root base path and `@` pointing at `./src`.
    pub fn builtin() -> Self {
        let mut alias = BTreeMap::new();
        alias.insert("@".to_string(), "./src".to_string());

        Self {
            plugins: vec![PluginDescriptor::named("react")],
            base: default_base(),
            resolve: ResolveDeclarations { alias },
        }
    }
}

/// Rejects declaration files that repeat an alias key instead of letting the
/// last occurrence win silently.
fn unique_alias_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct UniqueAliasVisitor;

    impl<'de> Visitor<'de> for UniqueAliasVisitor {
        type Value = BTreeMap<String, String>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of alias prefixes to paths")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut aliases = BTreeMap::new();
            while let Some((key, value)) = access.next_entry::<String, String>()? {
                if aliases.contains_key(&key) {
                    return Err(serde::de::Error::custom(format!("duplicate alias key '{}'", key)));
                }
                aliases.insert(key, value);
            }
            Ok(aliases)
        }
    }

    deserializer.deserialize_map(UniqueAliasVisitor)
}

/// Effective build configuration handed to the build engine.
///
/// Only `ConfigResolver` constructs this value; once built it is read-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildConfig {
    plugins: Vec<PluginDescriptor>,
    base_path: String,
    alias_map: BTreeMap<String, PathBuf>,
}

impl BuildConfig {
    pub(crate) fn new(
        plugins: Vec<PluginDescriptor>,
        base_path: String,
        alias_map: BTreeMap<String, PathBuf>,
    ) -> Self {
        Self {
            plugins,
            base_path,
            alias_map,
        }
    }

    pub fn plugins(&self) -> &[PluginDescriptor] {
        &self.plugins
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Alias prefixes mapped to absolute paths
    pub fn alias_map(&self) -> &BTreeMap<String, PathBuf> {
        &self.alias_map
    }

    pub fn alias(&self, key: &str) -> Option<&Path> {
        self.alias_map.get(key).map(PathBuf::as_path)
    }

    /// Public URL of an emitted asset under the base path
    pub fn asset_url(&self, asset: &str) -> String {
        format!("{}{}", self.base_path, asset.trim_start_matches('/'))
    }

    /// Rewrite a module specifier through the alias map.
    ///
    /// A key matches the specifier itself or any `key/...` specifier; when
    /// several keys match, the longest one wins. Returns `None` when no alias
    /// applies.
    pub fn rewrite_specifier(&self, specifier: &str) -> Option<PathBuf> {
        self.alias_map
            .iter()
            .filter_map(|(key, target)| {
                if specifier == key {
                    return Some((key.len(), target.clone()));
                }
                specifier
                    .strip_prefix(key.as_str())
                    .and_then(|rest| rest.strip_prefix('/'))
                    .map(|rest| {
                        // `key/` names the alias target itself
                        if rest.is_empty() {
                            (key.len(), target.clone())
                        } else {
                            (key.len(), target.join(rest))
                        }
                    })
            })
            .max_by_key(|(len, _)| *len)
            .map(|(_, path)| path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_aliases(aliases: &[(&str, &str)]) -> BuildConfig {
        let alias_map = aliases
            .iter()
            .map(|(k, v)| (k.to_string(), PathBuf::from(v)))
            .collect();
        BuildConfig::new(Vec::new(), "/repo-name/".to_string(), alias_map)
    }

    #[test]
    fn test_plugin_shorthand_and_full_form() {
        let plugins: Vec<PluginDescriptor> = serde_json::from_str(
            r#"["react", {"name": "legacy", "options": {"targets": ["defaults"]}}]"#,
        )
        .unwrap();

        assert_eq!(plugins[0], PluginDescriptor::named("react"));
        assert_eq!(plugins[1].name, "legacy");
        assert_eq!(plugins[1].options["targets"][0], "defaults");
    }

    #[test]
    fn test_declarations_defaults() {
        let decls: BuildDeclarations = serde_json::from_str("{}").unwrap();
        assert_eq!(decls, BuildDeclarations::default());
        assert_eq!(decls.base, "/");
        assert!(decls.plugins.is_empty());
        assert!(decls.resolve.alias.is_empty());
    }

    #[test]
    fn test_duplicate_alias_key_rejected() {
        let result: Result<BuildDeclarations, _> =
            serde_json::from_str(r#"{"resolve": {"alias": {"@": "./src", "@": "./lib"}}}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("duplicate alias key '@'"));
    }

    #[test]
    fn test_builtin_declarations() {
        let decls = BuildDeclarations::builtin();
        assert_eq!(decls.plugins, vec![PluginDescriptor::named("react")]);
        assert_eq!(decls.base, "/");
        assert_eq!(decls.resolve.alias["@"], "./src");
    }

    #[test]
    fn test_asset_url() {
        let config = config_with_aliases(&[]);
        assert_eq!(config.asset_url("assets/logo.svg"), "/repo-name/assets/logo.svg");
        assert_eq!(config.asset_url("/favicon.ico"), "/repo-name/favicon.ico");
    }

    #[test]
    fn test_rewrite_specifier_exact_and_prefix() {
        let config = config_with_aliases(&[("@", "/project/src")]);

        assert_eq!(config.rewrite_specifier("@"), Some(PathBuf::from("/project/src")));
        assert_eq!(
            config.rewrite_specifier("@/components/App"),
            Some(PathBuf::from("/project/src/components/App"))
        );
        // Scoped packages share the leading character but not the prefix
        assert_eq!(config.rewrite_specifier("@vitejs/plugin-react"), None);
        assert_eq!(config.rewrite_specifier("react"), None);
    }

    #[test]
    fn test_rewrite_specifier_trailing_slash() {
        let config = config_with_aliases(&[("@", "/project/src")]);

        assert_eq!(config.rewrite_specifier("@/"), Some(PathBuf::from("/project/src")));
        assert_eq!(
            config.rewrite_specifier("@/").unwrap().to_string_lossy(),
            "/project/src"
        );
    }

    #[test]
    fn test_rewrite_specifier_longest_key_wins() {
        let config = config_with_aliases(&[("@", "/project/src"), ("@/assets", "/project/public")]);

        assert_eq!(
            config.rewrite_specifier("@/assets/logo.svg"),
            Some(PathBuf::from("/project/public/logo.svg"))
        );
        assert_eq!(
            config.rewrite_specifier("@/utils/format"),
            Some(PathBuf::from("/project/src/utils/format"))
        );
    }
}
