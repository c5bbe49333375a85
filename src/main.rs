use std::future::Future;
use std::sync::Arc;

use tokio::task::{JoinError, JoinHandle};

use stock_price_checker::{
    arguments::{get_enabled_debug_modes, patterns, print_help},
    config,
    likes::open_like_store,
    logger::{self, LogTag},
    quotes::HttpQuoteClient,
    stocks::StockPriceService,
    webserver::{self, AppState},
};

/// Main entry point for the stock price checker
///
/// Loads configuration, wires the quote client and like store into the
/// request pipeline, then serves `/api/stock-prices` until Ctrl+C.
#[tokio::main]
async fn main() {
    logger::init();

    if patterns::is_help_requested() {
        print_help();
        std::process::exit(0);
    }

    if patterns::is_version_requested() {
        println!("stock-price-checker {}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    logger::info(
        LogTag::System,
        &format!("Stock price checker {} starting up", env!("CARGO_PKG_VERSION")),
    );

    let debug_modes = get_enabled_debug_modes();
    if !debug_modes.is_empty() {
        logger::info(
            LogTag::System,
            &format!("Debug modes: {}", debug_modes.join(", ")),
        );
    }

    if let Err(e) = run().await {
        logger::error(LogTag::System, &format!("Fatal: {:#}", e));
        std::process::exit(1);
    }

    logger::info(LogTag::System, "Shutdown complete");
}

async fn run() -> anyhow::Result<()> {
    let loaded = match patterns::get_config_path() {
        Some(path) => config::load_config_from_path(&path),
        None => config::load_config(),
    };
    loaded.map_err(anyhow::Error::msg)?;

    if let Some(port) = patterns::get_port_override() {
        config::update_config(|cfg| cfg.webserver.port = port).map_err(anyhow::Error::msg)?;
    }

    let cfg = config::get_config_clone();

    let quotes = Arc::new(HttpQuoteClient::new(&cfg.quotes)?);
    let likes = open_like_store(&cfg.likes)?;
    let stocks = Arc::new(
        StockPriceService::new(quotes, likes).with_create_on_view(cfg.likes.create_on_view),
    );
    let state = Arc::new(AppState::new(cfg.webserver.clone(), stocks));

    logger::info(
        LogTag::System,
        &format!(
            "Serving on {} (quotes from {}, {} like store)",
            cfg.bind_address(),
            cfg.quotes.base_url,
            cfg.likes.backend.as_str()
        ),
    );

    let server = tokio::spawn(webserver::start_server(state));

    supervise(server, tokio::signal::ctrl_c(), webserver::shutdown).await
}

/// Wait for the server task, triggering `stop` once `stop_signal` fires
///
/// If the signal cannot be installed the server keeps running until it
/// exits on its own.
async fn supervise<S, F>(
    mut server: JoinHandle<Result<(), String>>,
    stop_signal: S,
    stop: F,
) -> anyhow::Result<()>
where
    S: Future<Output = std::io::Result<()>>,
    F: FnOnce(),
{
    tokio::select! {
        joined = &mut server => return server_outcome(joined),
        result = stop_signal => match result {
            Ok(()) => {
                logger::info(LogTag::System, "Received Ctrl+C, shutting down...");
                stop();
            }
            Err(e) => {
                logger::warning(LogTag::System, &format!("Failed to listen for Ctrl+C: {}", e));
            }
        },
    }

    server_outcome(server.await)
}

fn server_outcome(joined: Result<Result<(), String>, JoinError>) -> anyhow::Result<()> {
    match joined {
        Ok(result) => result.map_err(anyhow::Error::msg),
        Err(e) => Err(anyhow::anyhow!("Webserver task failed: {}", e)),
    }
}
