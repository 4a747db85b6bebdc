use crate::cli::{AliasArgs, AssetArgs};
use crate::config::{BuildConfig, Settings};
use crate::utils::logger;
use anyhow::{anyhow, Result};
use std::path::PathBuf;

pub fn execute_alias(args: AliasArgs, settings: &Settings) -> Result<()> {
    let path = alias_target(settings.config(), &args.specifier)?;
    logger::debug(&format!("'{}' matched an alias", args.specifier));
    println!("{}", path.display());
    Ok(())
}

pub fn execute_asset(args: AssetArgs, settings: &Settings) -> Result<()> {
    println!("{}", settings.config().asset_url(&args.path));
    Ok(())
}

fn alias_target(config: &BuildConfig, specifier: &str) -> Result<PathBuf> {
    config
        .rewrite_specifier(specifier)
        .ok_or_else(|| anyhow!("No alias matches module specifier '{}'", specifier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BuildDeclarations, ConfigResolver, DeclarationSource};
    use std::fs;
    use tempfile::TempDir;

    fn settings_for(temp_dir: &TempDir, base: &str) -> Settings {
        fs::create_dir(temp_dir.path().join("src")).unwrap();
        let mut decls = BuildDeclarations::builtin();
        decls.base = base.to_string();
        let config = ConfigResolver::new(decls, temp_dir.path().to_path_buf())
            .resolve()
            .unwrap();

        Settings {
            config,
            anchor_dir: temp_dir.path().to_path_buf(),
            source: DeclarationSource::Builtin,
        }
    }

    #[test]
    fn test_alias_target_found() {
        let temp_dir = TempDir::new().unwrap();
        let settings = settings_for(&temp_dir, "/");

        let path = alias_target(settings.config(), "@/pages/Home").unwrap();
        assert_eq!(path, temp_dir.path().join("src/pages/Home"));
    }

    #[test]
    fn test_alias_target_without_match_fails() {
        let temp_dir = TempDir::new().unwrap();
        let settings = settings_for(&temp_dir, "/");

        let err = alias_target(settings.config(), "react-dom/client").unwrap_err();
        assert_eq!(err.to_string(), "No alias matches module specifier 'react-dom/client'");
    }

    #[test]
    fn test_execute_alias_reports_unmatched_specifier() {
        let temp_dir = TempDir::new().unwrap();
        let settings = settings_for(&temp_dir, "/");

        let args = AliasArgs {
            specifier: "lodash".to_string(),
        };
        assert!(execute_alias(args, &settings).is_err());
    }

    #[test]
    fn test_execute_asset_under_base_path() {
        let temp_dir = TempDir::new().unwrap();
        let settings = settings_for(&temp_dir, "/repo-name/");

        assert_eq!(settings.config().asset_url("/assets/index.css"), "/repo-name/assets/index.css");

        let args = AssetArgs {
            path: "assets/index.css".to_string(),
        };
        assert!(execute_asset(args, &settings).is_ok());
    }
}
