use colored::*;
use std::sync::{LazyLock, Mutex, MutexGuard};

/// Log levels for different types of output
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum LogLevel {
    Silent,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Console logger for diagnostics.
///
/// Everything the logger prints goes to stderr so that stdout only carries
/// command results (resolved configuration, rewritten paths, URLs).
pub struct Logger {
    level: LogLevel,
    quiet: bool,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self {
            level: LogLevel::Info,
            quiet: false,
        }
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    /// Whether a message at `level` would be printed
    pub fn enabled(&self, level: LogLevel) -> bool {
        // Errors are reported even in quiet mode
        if self.quiet && level > LogLevel::Error {
            return false;
        }
        level != LogLevel::Silent && self.level >= level
    }

    /// Print a section header
    pub fn section(&self, title: &str) {
        if !self.enabled(LogLevel::Info) {
            return;
        }
        eprintln!("\n{} {}", "▶".blue().bold(), title.cyan().bold());
        eprintln!("{}", "─".repeat(title.len() + 2).blue());
    }

    pub fn success(&self, message: &str) {
        if !self.enabled(LogLevel::Info) {
            return;
        }
        eprintln!("{} {}", "✓".green().bold(), message.green());
    }

    pub fn error(&self, message: &str) {
        if !self.enabled(LogLevel::Error) {
            return;
        }
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    pub fn warn(&self, message: &str) {
        if !self.enabled(LogLevel::Warn) {
            return;
        }
        eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    pub fn info(&self, message: &str) {
        if !self.enabled(LogLevel::Info) {
            return;
        }
        eprintln!("{} {}", "ℹ".blue().bold(), message.blue());
    }

    pub fn debug(&self, message: &str) {
        if !self.enabled(LogLevel::Debug) {
            return;
        }
        eprintln!("{} {}", "🔍".dimmed(), message.dimmed());
    }

    /// Print a two-column table with aligned keys
    pub fn table(&self, rows: &[(&str, &str)]) {
        if !self.enabled(LogLevel::Info) {
            return;
        }

        let max_key_len = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

        for (key, value) in rows {
            eprintln!("  {:<width$} {}", key.cyan(), value, width = max_key_len);
        }
    }

    /// Print a configuration summary
    pub fn config_summary(&self, settings: &[(&str, &str)]) {
        if !self.enabled(LogLevel::Info) {
            return;
        }

        self.section("Configuration");
        self.table(settings);
    }

    /// Print configuration loading status
    pub fn config_loading(&self, config_path: &str) {
        if !self.enabled(LogLevel::Info) {
            return;
        }

        let path = std::path::Path::new(config_path);
        let filename = path.file_name().and_then(|f| f.to_str()).unwrap_or("config");
        let parent_dir = path.parent().and_then(|p| p.to_str()).unwrap_or("");

        eprintln!("  {} Loading configuration", "📄".blue());
        eprintln!("    {} File: {}", "📁".dimmed(), filename.cyan().bold());
        if !parent_dir.is_empty() {
            eprintln!("    {} Path: {}", "📍".dimmed(), parent_dir.dimmed());
        }
    }

    /// Report a fatal error with its chain of causes, outermost first
    pub fn failure(&self, title: &str, causes: &[String]) {
        if !self.enabled(LogLevel::Error) {
            return;
        }

        self.error(title);
        for (depth, cause) in causes.iter().enumerate() {
            let marker = if depth == 0 { "└─" } else { "   └─" };
            eprintln!("  {} {}", marker.red(), cause.trim());
        }
    }
}

/// Global logger instance
static LOGGER: LazyLock<Mutex<Logger>> = LazyLock::new(|| Mutex::new(Logger::new()));

/// Initialize the global logger
pub fn init(level: LogLevel, quiet: bool) {
    let mut logger = get();
    let mut new_logger = Logger::new().with_level(level);
    if quiet {
        new_logger = new_logger.quiet();
    }
    *logger = new_logger;
}

/// Get a reference to the global logger
pub fn get() -> MutexGuard<'static, Logger> {
    // A panic while printing cannot leave the logger in a broken state
    LOGGER.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn success(message: &str) {
    get().success(message);
}

pub fn warn(message: &str) {
    get().warn(message);
}

pub fn info(message: &str) {
    get().info(message);
}

pub fn debug(message: &str) {
    get().debug(message);
}

pub fn config_summary(settings: &[(&str, &str)]) {
    get().config_summary(settings);
}

pub fn config_loading(config_path: &str) {
    get().config_loading(config_path);
}

pub fn failure(title: &str, causes: &[String]) {
    get().failure(title, causes);
}
