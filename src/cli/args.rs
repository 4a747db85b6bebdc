use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Resolve front-end build declarations into an effective build configuration",
    long_about = "basepath reads a project's build declarations (plugin list, deployment base path \
                  and import aliases), validates them and resolves every alias into an absolute \
                  path anchored at the declaration file's directory."
)]
pub struct Args {
    #[arg(
        long,
        global = true,
        help = "Project directory or declaration file",
        long_help = "A project directory containing basepath.json, basepath.yml or basepath.yaml, \
                    or the path of a declaration file. Defaults to the current directory. \
                    Built-in declarations are used when the directory has no declaration file."
    )]
    pub config: Option<String>,

    #[arg(long, short, global = true, help = "Print debug output")]
    pub verbose: bool,

    #[arg(long, short, global = true, conflicts_with = "verbose", help = "Only print results and errors")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        about = "Print the resolved build configuration",
        long_about = "Resolves the declarations and prints the effective configuration: \
                     plugins in application order, the base path and every alias with its \
                     absolute path."
    )]
    Resolve(ResolveArgs),

    #[command(
        about = "Validate the build declarations",
        long_about = "Resolves the declarations and reports whether they are valid. \
                     Exits with a non-zero status on an invalid configuration."
    )]
    Check,

    #[command(
        about = "Rewrite a module specifier through the alias map",
        long_about = "Prints the absolute path a module specifier resolves to. The longest \
                     alias matching the specifier (exactly, or followed by '/') is used."
    )]
    Alias(AliasArgs),

    #[command(about = "Print the public URL of an asset under the base path")]
    Asset(AssetArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

#[derive(Parser)]
pub struct ResolveArgs {
    #[arg(long, value_enum, default_value = "table", help = "Output format")]
    pub format: OutputFormat,
}

#[derive(Parser)]
pub struct AliasArgs {
    #[arg(help = "Module specifier to rewrite, e.g. @/components/App")]
    pub specifier: String,
}

#[derive(Parser)]
pub struct AssetArgs {
    #[arg(help = "Asset path relative to the output root, e.g. assets/logo.svg")]
    pub path: String,
}
