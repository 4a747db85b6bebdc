use crate::config::resolver::normalize_path;
use crate::config::types::BuildDeclarations;
use crate::utils::logger;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Declaration file names to search for, in priority order
pub const CONFIG_FILE_NAMES: &[&str] = &["basepath.json", "basepath.yml", "basepath.yaml"];

/// Loader for build declaration files
pub struct ConfigLoader {
    /// The directory where declaration files are searched
    pub search_dir: PathBuf,
}

impl ConfigLoader {
    pub fn new<P: AsRef<Path>>(search_dir: P) -> Self {
        Self {
            search_dir: search_dir.as_ref().to_path_buf(),
        }
    }

    pub fn from_current_dir() -> Result<Self> {
        let current_dir = std::env::current_dir().context("Failed to get current working directory")?;
        Ok(Self::new(current_dir))
    }

    /// Find and load the declaration file, if the directory has one
    pub fn load(&self) -> Result<Option<BuildDeclarations>> {
        match self.find_config_file() {
            Some(path) => {
                logger::config_loading(&path.to_string_lossy());
                let declarations = self.load_from_path(&path)?;
                Ok(Some(declarations))
            }
            None => {
                logger::info("No declaration file found, using built-in declarations");
                Ok(None)
            }
        }
    }

    /// Load declarations from a specific file path
    pub fn load_from_path<P: AsRef<Path>>(&self, path: P) -> Result<BuildDeclarations> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read declaration file: {}", path.display()))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => parse_json(&content, path),
            Some("yml") | Some("yaml") => parse_yaml(&content, path),
            _ => {
                // No telling extension, sniff the content
                if content.trim_start().starts_with('{') {
                    parse_json(&content, path)
                } else {
                    parse_yaml(&content, path)
                }
            }
        }
    }

    /// Path of the first declaration file present in the search directory
    pub fn find_config_file(&self) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|filename| self.search_dir.join(filename))
            .find(|path| path.is_file())
    }

    /// Collect non-fatal findings about the declarations.
    ///
    /// Anything that makes resolution impossible is left to `ConfigResolver`.
    pub fn validate(&self, declarations: &BuildDeclarations) -> Vec<String> {
        let mut warnings = Vec::new();

        let mut seen = HashSet::new();
        for plugin in &declarations.plugins {
            if !seen.insert(plugin.name.as_str()) {
                warnings.push(format!("Plugin '{}' is declared more than once", plugin.name));
            }
        }

        for (key, value) in &declarations.resolve.alias {
            let target = normalize_path(&self.search_dir.join(value));
            if !Path::new(value).is_absolute() && !target.starts_with(&self.search_dir) {
                warnings.push(format!(
                    "Alias '{}' points outside the project directory: {}",
                    key, value
                ));
            }
            if key.ends_with('/') {
                warnings.push(format!(
                    "Alias '{}' ends with '/', it will only match specifiers containing '//'",
                    key
                ));
            }
        }

        warnings
    }
}

fn parse_json(content: &str, path: &Path) -> Result<BuildDeclarations> {
    serde_json::from_str(content)
        .with_context(|| format!("Failed to parse JSON declarations: {}", path.display()))
}

fn parse_yaml(content: &str, path: &Path) -> Result<BuildDeclarations> {
    serde_yaml::from_str(content)
        .with_context(|| format!("Failed to parse YAML declarations: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::PluginDescriptor;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_json_declarations() {
        let temp_dir = TempDir::new().unwrap();
        let content = r#"{
            "plugins": ["react"],
            "base": "/repo-name/",
            "resolve": {
                "alias": { "@": "./src" }
            }
        }"#;
        fs::write(temp_dir.path().join("basepath.json"), content).unwrap();

        let loader = ConfigLoader::new(temp_dir.path());
        let decls = loader.load().unwrap().unwrap();

        assert_eq!(decls.plugins, vec![PluginDescriptor::named("react")]);
        assert_eq!(decls.base, "/repo-name/");
        assert_eq!(decls.resolve.alias["@"], "./src");
    }

    #[test]
    fn test_load_yaml_declarations() {
        let temp_dir = TempDir::new().unwrap();
        let content = r#"
plugins:
  - react
  - name: legacy
    options:
      targets: [defaults]
base: /repo-name/
resolve:
  alias:
    "@": ./src
"#;
        fs::write(temp_dir.path().join("basepath.yml"), content).unwrap();

        let loader = ConfigLoader::new(temp_dir.path());
        let decls = loader.load().unwrap().unwrap();

        assert_eq!(decls.plugins.len(), 2);
        assert_eq!(decls.plugins[1].name, "legacy");
        assert_eq!(decls.resolve.alias["@"], "./src");
    }

    #[test]
    fn test_json_preferred_over_yaml() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("basepath.json"), r#"{"base": "/from-json/"}"#).unwrap();
        fs::write(temp_dir.path().join("basepath.yaml"), "base: /from-yaml/\n").unwrap();

        let loader = ConfigLoader::new(temp_dir.path());
        assert_eq!(loader.load().unwrap().unwrap().base, "/from-json/");
    }

    #[test]
    fn test_unknown_extension_sniffed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("build.conf");
        fs::write(&path, r#"{"base": "/sniffed/"}"#).unwrap();

        let loader = ConfigLoader::new(temp_dir.path());
        assert_eq!(loader.load_from_path(&path).unwrap().base, "/sniffed/");
    }

    #[test]
    fn test_no_declaration_file() {
        let temp_dir = TempDir::new().unwrap();
        let loader = ConfigLoader::new(temp_dir.path());

        assert!(loader.load().unwrap().is_none());
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("basepath.json"), "{ not json").unwrap();

        let loader = ConfigLoader::new(temp_dir.path());
        let err = loader.load().unwrap_err();
        assert!(format!("{:#}", err).contains("basepath.json"));
    }

    #[test]
    fn test_validate_warnings() {
        let temp_dir = TempDir::new().unwrap();
        let mut decls = BuildDeclarations::default();
        decls.plugins = vec![PluginDescriptor::named("react"), PluginDescriptor::named("react")];
        decls.resolve.alias.insert("shared".to_string(), "../shared".to_string());
        decls.resolve.alias.insert("@".to_string(), "./src".to_string());

        let loader = ConfigLoader::new(temp_dir.path());
        let warnings = loader.validate(&decls);

        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().any(|w| w.contains("'react' is declared more than once")));
        assert!(warnings.iter().any(|w| w.contains("'shared' points outside")));
    }
}
