//! HTTP surface
//!
//! - `server`: listener lifecycle and middleware stack
//! - `routes`: `/api/stock-prices` and `/api/health`
//! - `state`: shared handler state
//! - `utils`: JSON success/error helpers

pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
pub mod utils;

pub use server::{build_app, shutdown, start_server};
pub use state::AppState;
