//! Configuration system
//!
//! - `schemas`: every config section, declared with `config_struct!`
//! - `utils`: loading from TOML, global access, hot reload

#[macro_use]
pub mod macros;
pub mod schemas;
pub mod utils;

pub use schemas::{Config, CorsConfig, LikeStoreBackend, LikesConfig, QuotesConfig, WebserverConfig};
pub use utils::{
    get_config_clone, is_config_initialized, load_config, load_config_from_path, read_config_file,
    reload_config_from_path, update_config, with_config, CONFIG_FILE_PATH,
};
