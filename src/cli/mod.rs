mod args;

pub use args::{AliasArgs, Args, AssetArgs, Commands, OutputFormat, ResolveArgs};
