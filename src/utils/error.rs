use std::fmt;
use std::path::Path;

/// Errors raised while turning build declarations into a `BuildConfig`
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The declarations cannot produce a usable configuration
    InvalidConfig {
        field: String,
        value: String,
        cause: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidConfig { field, value, cause } => {
                write!(f, "Invalid configuration in field '{}' with value '{}': {}", field, value, cause)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, value: impl Into<String>, cause: impl Into<String>) -> Self {
        ConfigError::InvalidConfig {
            field: field.into(),
            value: value.into(),
            cause: cause.into(),
        }
    }

    /// Shorthand for errors whose offending value is a filesystem path
    pub fn invalid_path(field: impl Into<String>, path: &Path, cause: impl Into<String>) -> Self {
        Self::invalid(field, path.to_string_lossy(), cause)
    }

    /// Name of the declaration field that failed validation
    pub fn field(&self) -> &str {
        match self {
            ConfigError::InvalidConfig { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_field_and_value() {
        let err = ConfigError::invalid("base", "repo-name", "must start with '/'");
        assert_eq!(
            err.to_string(),
            "Invalid configuration in field 'base' with value 'repo-name': must start with '/'"
        );
        assert_eq!(err.field(), "base");
    }

    #[test]
    fn test_invalid_path_uses_lossy_display() {
        let err = ConfigError::invalid_path("resolve.alias.@", Path::new("/tmp/missing"), "does not exist");
        assert!(err.to_string().contains("/tmp/missing"));
    }
}
