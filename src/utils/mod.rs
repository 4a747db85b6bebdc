pub mod display_utils;
pub mod error;
pub mod logger;

pub use error::ConfigError;
