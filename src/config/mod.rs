mod loader;
mod resolver;
mod settings;
mod types;

pub use loader::{ConfigLoader, CONFIG_FILE_NAMES};
pub use resolver::{normalize_path, resolve_base_path, ConfigResolver};
pub use settings::{DeclarationSource, Settings};
pub use types::{BuildConfig, BuildDeclarations, PluginDescriptor, ResolveDeclarations, DEFAULT_BASE};
