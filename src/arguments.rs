/// Centralized command-line argument handling
///
/// Arguments are captured once into a process-wide store so that any module
/// can check its `--debug-<module>` flag without threading them through.
///
/// Recognized arguments:
/// - `--config <path>`   configuration file (default `data/config.toml`)
/// - `--port <n>`        override `webserver.port`
/// - `--debug-<module>`  enable debug logs for one tag (webserver, quotes, likes, stocks, config, system)
/// - `--verbose` / `-v`  enable verbose logs everywhere
/// - `--quiet` / `-q`    only warnings and errors
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

/// Global command-line arguments storage
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Sets the global command-line arguments
/// Used by tests to override the default env::args() collection
pub fn set_cmd_args(args: Vec<String>) {
    if let Ok(mut cmd_args) = CMD_ARGS.lock() {
        *cmd_args = args;
    }
}

/// Gets a copy of the current command-line arguments
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        Err(_) => {
            // Fallback to env::args if mutex is poisoned
            env::args().collect()
        }
    }
}

/// Checks if a specific argument is present in the command line
pub fn has_arg(arg: &str) -> bool {
    get_cmd_args().iter().any(|a| a == arg)
}

/// Gets the value of a command-line argument that follows a flag
pub fn get_arg_value(flag: &str) -> Option<String> {
    let args = get_cmd_args();
    for (i, arg) in args.iter().enumerate() {
        if arg == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

// =============================================================================
// DEBUG FLAG CHECKING FUNCTIONS
// =============================================================================

/// Webserver debug mode (request/response details)
pub fn is_debug_webserver_enabled() -> bool {
    has_arg("--debug-webserver")
}

/// Upstream quote fetching debug mode
pub fn is_debug_quotes_enabled() -> bool {
    has_arg("--debug-quotes")
}

/// Like store debug mode
pub fn is_debug_likes_enabled() -> bool {
    has_arg("--debug-likes")
}

/// Request orchestration debug mode
pub fn is_debug_stocks_enabled() -> bool {
    has_arg("--debug-stocks")
}

/// Collect every `--debug-<module>` flag currently set
pub fn get_enabled_debug_modes() -> Vec<String> {
    get_cmd_args()
        .iter()
        .filter_map(|arg| arg.strip_prefix("--debug-"))
        .filter(|module| !module.is_empty())
        .map(|module| module.to_string())
        .collect()
}

// =============================================================================
// COMMON ARGUMENT PATTERNS
// =============================================================================

/// Common argument parsing patterns
pub mod patterns {
    use super::*;

    /// Checks for help flags
    pub fn is_help_requested() -> bool {
        has_arg("--help") || has_arg("-h")
    }

    /// Checks for version flags
    pub fn is_version_requested() -> bool {
        has_arg("--version") || has_arg("-V")
    }

    /// Config file path given with `--config`
    pub fn get_config_path() -> Option<String> {
        get_arg_value("--config")
    }

    /// Port override given with `--port`
    pub fn get_port_override() -> Option<u16> {
        get_arg_value("--port").and_then(|s| s.parse().ok())
    }
}

/// Usage text printed for `--help`
pub fn print_help() {
    println!("stock-price-checker {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("USAGE:");
    println!("    stock-price-checker [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --config <path>     Configuration file (default: data/config.toml)");
    println!("    --port <n>          Override the listening port");
    println!("    --debug-<module>    Debug logs for webserver, quotes, likes, stocks, config, system");
    println!("    -v, --verbose       Verbose logs for every module");
    println!("    -q, --quiet         Only warnings and errors");
    println!("    -h, --help          Print this help");
    println!("    -V, --version       Print version");
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test touches the global store so parallel tests never interleave.
    #[test]
    fn test_argument_store() {
        let test_args = vec![
            "stock-price-checker".to_string(),
            "--debug-quotes".to_string(),
            "--config".to_string(),
            "conf/test.toml".to_string(),
            "--port".to_string(),
            "4100".to_string(),
        ];

        set_cmd_args(test_args.clone());
        assert_eq!(get_cmd_args(), test_args);

        assert!(has_arg("--debug-quotes"));
        assert!(!has_arg("--debug-likes"));
        assert!(is_debug_quotes_enabled());
        assert!(!is_debug_webserver_enabled());

        assert_eq!(patterns::get_config_path(), Some("conf/test.toml".to_string()));
        assert_eq!(patterns::get_port_override(), Some(4100));
        assert_eq!(get_arg_value("--symbol"), None);
        assert_eq!(get_enabled_debug_modes(), vec!["quotes".to_string()]);

        set_cmd_args(vec!["stock-price-checker".to_string(), "--port".to_string()]);
        assert_eq!(patterns::get_port_override(), None);
        assert!(!patterns::is_help_requested());
    }
}
