/// Configuration utilities - loading, reloading, and access helpers
///
/// This module provides utility functions for working with the configuration system:
/// - Loading configuration from disk
/// - Hot-reloading configuration at runtime
/// - Thread-safe access helpers
use super::schemas::Config;
use crate::logger::{self, LogTag};
use once_cell::sync::OnceCell;
use std::sync::RwLock;

/// Global configuration instance
///
/// This is the single source of truth for all configuration values.
/// Access it using the helper functions below.
pub static CONFIG: OnceCell<RwLock<Config>> = OnceCell::new();

/// Default configuration file path
pub const CONFIG_FILE_PATH: &str = "data/config.toml";

/// Read and validate a configuration file without touching the global state
///
/// A missing file yields the defaults.
pub fn read_config_file(path: &str) -> Result<Config, String> {
    let config = if std::path::Path::new(path).exists() {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path, e))?;

        toml::from_str::<Config>(&contents)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path, e))?
    } else {
        logger::warning(
            LogTag::Config,
            &format!("Config file '{}' not found, using default values", path),
        );
        Config::default()
    };

    config
        .validate()
        .map_err(|e| format!("Invalid config file '{}': {}", path, e))?;

    Ok(config)
}

/// Load configuration from disk and initialize the global CONFIG
pub fn load_config() -> Result<(), String> {
    load_config_from_path(CONFIG_FILE_PATH)
}

/// Load configuration from a specific file path
///
/// # Returns
/// - `Ok(())` - Configuration loaded successfully
/// - `Err(String)` - Error message if loading failed or config was already loaded
pub fn load_config_from_path(path: &str) -> Result<(), String> {
    let config = read_config_file(path)?;

    CONFIG
        .set(RwLock::new(config))
        .map_err(|_| "Config already initialized".to_string())?;

    logger::debug(LogTag::Config, &format!("Configuration loaded from '{}'", path));
    Ok(())
}

/// Reload configuration from a specific file path
///
/// The configuration is atomically replaced, so reads are always consistent.
/// Values already captured by running components (listener address, store
/// backend) keep their old value until restart.
pub fn reload_config_from_path(path: &str) -> Result<(), String> {
    let new_config = read_config_file(path)?;

    let config_lock = CONFIG
        .get()
        .ok_or_else(|| "Config not initialized. Call load_config() first.".to_string())?;

    let mut config = config_lock
        .write()
        .map_err(|e| format!("Failed to acquire config write lock: {}", e))?;
    *config = new_config;

    logger::info(LogTag::Config, &format!("Configuration reloaded from '{}'", path));
    Ok(())
}

/// Execute a function with read access to the configuration
///
/// Falls back to the defaults when `load_config()` has not run.
///
/// # Example
/// ```
/// use stock_price_checker::config::with_config;
///
/// let port = with_config(|cfg| cfg.webserver.port);
/// ```
pub fn with_config<F, R>(f: F) -> R
where
    F: FnOnce(&Config) -> R,
{
    match CONFIG.get() {
        Some(lock) => match lock.read() {
            Ok(config) => f(&config),
            Err(poisoned) => f(&poisoned.into_inner()),
        },
        None => f(&Config::default()),
    }
}

/// Modify the global configuration in place
pub fn update_config<F>(f: F) -> Result<(), String>
where
    F: FnOnce(&mut Config),
{
    let config_lock = CONFIG
        .get()
        .ok_or_else(|| "Config not initialized. Call load_config() first.".to_string())?;

    let mut config = config_lock
        .write()
        .map_err(|e| format!("Failed to acquire config write lock: {}", e))?;
    f(&mut config);
    Ok(())
}

/// Get a clone of the entire configuration
///
/// Useful when values are needed across await points.
pub fn get_config_clone() -> Config {
    with_config(|cfg| cfg.clone())
}

/// Check if configuration has been initialized
pub fn is_config_initialized() -> bool {
    CONFIG.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LikeStoreBackend;

    #[test]
    fn test_read_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let config = read_config_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_read_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[quotes]\ntimeout_secs = 0\n").unwrap();

        let err = read_config_file(path.to_str().unwrap()).unwrap_err();
        assert!(err.contains("timeout_secs"));
    }

    #[test]
    fn test_read_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[webserver\nport = ").unwrap();

        assert!(read_config_file(path.to_str().unwrap()).is_err());
    }

    // The only test that initializes the global instance.
    #[test]
    fn test_global_load_update_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[webserver]\nport = 4000\n").unwrap();
        let path = path.to_str().unwrap();

        load_config_from_path(path).unwrap();
        assert!(is_config_initialized());
        assert_eq!(with_config(|c| c.webserver.port), 4000);
        assert!(load_config_from_path(path).is_err());

        update_config(|c| c.webserver.port = 4001).unwrap();
        assert_eq!(get_config_clone().webserver.port, 4001);

        std::fs::write(path, "[likes]\nbackend = \"sqlite\"\n").unwrap();
        reload_config_from_path(path).unwrap();
        assert_eq!(with_config(|c| c.webserver.port), 3000);
        assert_eq!(with_config(|c| c.likes.backend), LikeStoreBackend::Sqlite);
    }
}
