/// Logger configuration derived from command-line arguments
///
/// Holds the minimum level plus the per-tag debug/verbose sets. Until
/// `init_from_args` runs, defaults apply (Info level, no debug tags).
use super::levels::LogLevel;
use crate::arguments::get_cmd_args;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::RwLock;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Messages above this level are dropped (Debug/Verbose have extra gates)
    pub min_level: LogLevel,
    /// Tags with `--debug-<tag>` set
    pub debug_tags: HashSet<String>,
    /// Tags with `--verbose-<tag>` set
    pub verbose_tags: HashSet<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
            verbose_tags: HashSet::new(),
        }
    }
}

impl LoggerConfig {
    /// Build a configuration from a raw argument list
    pub fn from_args(args: &[String]) -> Self {
        let mut config = LoggerConfig::default();

        for arg in args {
            if let Some(tag) = arg.strip_prefix("--debug-") {
                if !tag.is_empty() {
                    config.debug_tags.insert(tag.to_lowercase());
                    if config.min_level < LogLevel::Debug {
                        config.min_level = LogLevel::Debug;
                    }
                }
            } else if let Some(tag) = arg.strip_prefix("--verbose-") {
                if !tag.is_empty() {
                    config.verbose_tags.insert(tag.to_lowercase());
                    config.debug_tags.insert(tag.to_lowercase());
                    config.min_level = LogLevel::Verbose;
                }
            }
        }

        if args.iter().any(|a| a == "--verbose" || a == "-v") {
            config.min_level = LogLevel::Verbose;
        }
        if args.iter().any(|a| a == "--quiet" || a == "-q") {
            config.min_level = LogLevel::Warning;
        }

        config
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

/// Get a copy of the current logger configuration
pub fn get_logger_config() -> LoggerConfig {
    match LOGGER_CONFIG.read() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Replace the logger configuration
pub fn set_logger_config(config: LoggerConfig) {
    match LOGGER_CONFIG.write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Modify the logger configuration in place
pub fn update_logger_config<F>(f: F)
where
    F: FnOnce(&mut LoggerConfig),
{
    match LOGGER_CONFIG.write() {
        Ok(mut current) => f(&mut current),
        Err(poisoned) => f(&mut poisoned.into_inner()),
    }
}

/// Configure the logger from the process arguments
pub fn init_from_args() {
    set_logger_config(LoggerConfig::from_args(&get_cmd_args()));
}
