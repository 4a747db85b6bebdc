use crate::config::{BuildConfig, BuildDeclarations, ConfigLoader, ConfigResolver};
use crate::utils::logger;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Where the declarations came from
#[derive(Debug, Clone, PartialEq)]
pub enum DeclarationSource {
    File(PathBuf),
    Builtin,
}

/// The resolved build configuration for this process
#[derive(Debug)]
pub struct Settings {
    pub config: BuildConfig,
    /// Directory alias paths were resolved against
    pub anchor_dir: PathBuf,
    pub source: DeclarationSource,
}

impl Settings {
    /// Load and resolve declarations from a project directory or a declaration file.
    ///
    /// The anchor directory is canonicalized here once, so resolution is
    /// independent of the working directory from then on.
    pub fn load<P: AsRef<Path>>(location: P) -> Result<Self> {
        let location = location.as_ref();
        let location = location
            .canonicalize()
            .with_context(|| format!("Failed to locate configuration: {}", location.display()))?;

        if location.is_file() {
            let anchor_dir = location
                .parent()
                .map(Path::to_path_buf)
                .with_context(|| format!("Declaration file has no parent directory: {}", location.display()))?;
            let loader = ConfigLoader::new(&anchor_dir);
            logger::config_loading(&location.to_string_lossy());
            let declarations = loader.load_from_path(&location)?;
            return Self::resolve(&loader, declarations, DeclarationSource::File(location));
        }

        let loader = ConfigLoader::new(&location);
        let source = match loader.find_config_file() {
            Some(path) => DeclarationSource::File(path),
            None => DeclarationSource::Builtin,
        };
        let declarations = loader.load()?.unwrap_or_else(BuildDeclarations::builtin);
        Self::resolve(&loader, declarations, source)
    }

    pub fn load_from_current_dir() -> Result<Self> {
        let loader = ConfigLoader::from_current_dir()?;
        Self::load(&loader.search_dir)
    }

    fn resolve(loader: &ConfigLoader, declarations: BuildDeclarations, source: DeclarationSource) -> Result<Self> {
        for warning in loader.validate(&declarations) {
            logger::warn(&warning);
        }

        let resolver = ConfigResolver::new(declarations, loader.search_dir.clone());
        let config = resolver.resolve()?;
        logger::debug(&format!(
            "Resolved {} alias(es) against {}",
            config.alias_map().len(),
            resolver.anchor_dir().display()
        ));

        Ok(Self {
            config,
            anchor_dir: loader.search_dir.clone(),
            source,
        })
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }
}
