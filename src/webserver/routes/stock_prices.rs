// Stock price API route

use crate::{
    arguments::is_debug_webserver_enabled,
    logger::{self, LogTag},
    stocks::{StockPriceResponse, StockRequest},
    webserver::{
        state::AppState,
        utils::{service_error_response, success_response},
    },
};
use axum::{
    extract::{ConnectInfo, RawQuery, State},
    http::HeaderMap,
    response::Response,
    routing::get,
    Router,
};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

/// Header consulted when `webserver.trust_forwarded_for` is on
const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Create stock price routes
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/stock-prices", get(get_stock_prices))
}

// ==================== Query Parameters ====================

/// Parsed `stock` / `like` query parameters
///
/// `stock` may repeat (`?stock=GOOG&stock=MSFT`), which serde-based query
/// extraction cannot express, so the raw query string is parsed here.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StockPriceQuery {
    pub stocks: Vec<String>,
    pub like: bool,
}

pub fn parse_stock_query(raw: Option<&str>) -> StockPriceQuery {
    let mut query = StockPriceQuery::default();

    for (key, value) in url::form_urlencoded::parse(raw.unwrap_or("").as_bytes()) {
        match key.as_ref() {
            "stock" => query.stocks.push(value.into_owned()),
            "like" => query.like = parse_like_flag(&value),
            _ => {}
        }
    }

    query
}

/// `true`, `1`, `yes`, `on` (any case) register a like
pub fn parse_like_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

/// Caller address used for like deduplication (IP only, no port)
pub fn resolve_client_address(peer: SocketAddr, headers: &HeaderMap, trust_forwarded_for: bool) -> String {
    if trust_forwarded_for {
        let forwarded = headers
            .get(FORWARDED_FOR_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .and_then(|v| parse_forwarded_ip(v.trim()));

        if let Some(ip) = forwarded {
            return canonical_ip(ip).to_string();
        }
    }

    canonical_ip(peer.ip()).to_string()
}

/// Forwarded entries may carry a port (`198.51.100.1:5555`, `[2001:db8::1]:443`)
fn parse_forwarded_ip(value: &str) -> Option<IpAddr> {
    value
        .parse::<IpAddr>()
        .or_else(|_| value.parse::<SocketAddr>().map(|addr| addr.ip()))
        .ok()
}

/// Collapse IPv4-mapped IPv6 addresses so one caller hashes the same either way
fn canonical_ip(ip: IpAddr) -> IpAddr {
    match ip {
        IpAddr::V6(v6) => v6.to_ipv4_mapped().map(IpAddr::V4).unwrap_or(IpAddr::V6(v6)),
        v4 => v4,
    }
}

// ==================== Route Handlers ====================

/// GET /api/stock-prices?stock=<SYMBOL>[&stock=<SYMBOL2>][&like=true]
async fn get_stock_prices(
    State(state): State<Arc<AppState>>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    RawQuery(raw_query): RawQuery,
) -> Response {
    let query = parse_stock_query(raw_query.as_deref());

    if is_debug_webserver_enabled() {
        logger::debug(
            LogTag::Webserver,
            &format!("stock-prices stocks={:?} like={}", query.stocks, query.like),
        );
    }

    let request = StockRequest {
        symbols: query.stocks,
        like: query.like,
        client_address: resolve_client_address(peer, &headers, state.config.trust_forwarded_for),
    };

    match state.stocks.get_stock_data(&request).await {
        Ok(stock_data) => success_response(StockPriceResponse { stock_data }),
        Err(e) => service_error_response(&e),
    }
}
