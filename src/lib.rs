pub mod anonymizer;
pub mod arguments;
pub mod config;
pub mod errors;
pub mod likes;
pub mod logger;
pub mod quotes;
pub mod stocks;

#[cfg(feature = "web")]
pub mod webserver;
