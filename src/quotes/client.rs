/// HTTP quote client for the upstream price proxy
///
/// One GET per call, no retry: a flaky upstream shows up as an unavailable
/// price for that symbol only.
use super::types::{QuoteError, QuoteResult, UpstreamQuote};
use super::QuoteSource;
use crate::arguments::is_debug_quotes_enabled;
use crate::config::QuotesConfig;
use crate::logger::{self, LogTag};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub struct HttpQuoteClient {
    client: Client,
    base_url: Url,
}

impl HttpQuoteClient {
    /// Create a client from the quotes configuration
    pub fn new(config: &QuotesConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid quote base URL: {}", config.base_url))?;

        Ok(Self { client, base_url })
    }

    /// Create a client against a custom base URL (useful for testing)
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Self::new(&QuotesConfig {
            base_url: base_url.to_string(),
            ..QuotesConfig::default()
        })
    }

    /// Fetch and validate one quote, reporting why it failed
    pub async fn try_fetch_quote(&self, symbol: &str) -> std::result::Result<QuoteResult, QuoteError> {
        let url = quote_url(&self.base_url, symbol)?;

        if is_debug_quotes_enabled() {
            logger::debug(LogTag::Quotes, &format!("GET {}", url));
        }

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| QuoteError::Transport {
                symbol: symbol.to_string(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(QuoteError::HttpStatus {
                symbol: symbol.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| QuoteError::Transport {
            symbol: symbol.to_string(),
            message: e.to_string(),
        })?;

        logger::verbose(LogTag::Quotes, &format!("{} upstream body: {}", symbol, body));

        parse_quote_payload(symbol, &body)
    }
}

#[async_trait]
impl QuoteSource for HttpQuoteClient {
    async fn fetch_quote(&self, symbol: &str) -> QuoteResult {
        match self.try_fetch_quote(symbol).await {
            Ok(quote) => {
                if is_debug_quotes_enabled() {
                    logger::debug(
                        LogTag::Quotes,
                        &format!("{} quoted at {:?}", quote.symbol, quote.price),
                    );
                }
                quote
            }
            Err(e) => {
                logger::warning(LogTag::Quotes, &format!("Quote unavailable: {}", e));
                QuoteResult::unavailable(symbol)
            }
        }
    }
}

/// Build `{base}/v1/stock/{symbol}/quote`, encoding the symbol as one path segment
pub fn quote_url(base_url: &Url, symbol: &str) -> std::result::Result<Url, QuoteError> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| QuoteError::InvalidUrl {
            symbol: symbol.to_string(),
            reason: format!("{} cannot be a base URL", base_url),
        })?
        .pop_if_empty()
        .extend(&["v1", "stock", symbol, "quote"]);
    Ok(url)
}

/// Validate an upstream body into a quote
///
/// The price must be a finite, non-negative number (or a string holding
/// one). The upstream symbol wins over the requested one when present.
pub fn parse_quote_payload(symbol: &str, body: &str) -> std::result::Result<QuoteResult, QuoteError> {
    let malformed = |reason: String| QuoteError::Malformed {
        symbol: symbol.to_string(),
        reason,
    };

    let payload: UpstreamQuote =
        serde_json::from_str(body).map_err(|e| malformed(format!("not a quote object: {}", e)))?;

    let price = match payload.latest_price {
        Some(serde_json::Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| malformed(format!("latestPrice {} is not representable", n)))?,
        Some(serde_json::Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| malformed(format!("latestPrice '{}' is not numeric", s)))?,
        Some(other) => return Err(malformed(format!("latestPrice has unexpected value {}", other))),
        None => return Err(malformed("latestPrice missing".to_string())),
    };

    if !price.is_finite() || price < 0.0 {
        return Err(malformed(format!("latestPrice {} out of range", price)));
    }

    let quoted_symbol = payload
        .symbol
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| symbol.to_string());

    Ok(QuoteResult::available(quoted_symbol, price))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotes::Price;

    #[test]
    fn test_quote_url() {
        let base = Url::parse("https://proxy.example.com").unwrap();
        assert_eq!(
            quote_url(&base, "GOOG").unwrap().as_str(),
            "https://proxy.example.com/v1/stock/GOOG/quote"
        );

        let base = Url::parse("https://proxy.example.com/api/").unwrap();
        assert_eq!(
            quote_url(&base, "MSFT").unwrap().as_str(),
            "https://proxy.example.com/api/v1/stock/MSFT/quote"
        );
    }

    #[test]
    fn test_quote_url_encodes_symbol_as_one_segment() {
        let base = Url::parse("https://proxy.example.com").unwrap();
        let url = quote_url(&base, "../BRK/B?x=1").unwrap();
        assert_eq!(url.path_segments().unwrap().count(), 4);
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_parse_numeric_price() {
        let quote = parse_quote_payload("GOOG", r#"{"symbol":"GOOG","latestPrice":2801.12}"#).unwrap();
        assert_eq!(quote, QuoteResult::available("GOOG", 2801.12));
    }

    #[test]
    fn test_parse_string_price_and_missing_symbol() {
        let quote = parse_quote_payload("MSFT", r#"{"latestPrice":" 301.5 "}"#).unwrap();
        assert_eq!(quote.symbol, "MSFT");
        assert_eq!(quote.price, Price::Available(301.5));
    }

    #[test]
    fn test_parse_rejects_bad_payloads() {
        let bad = [
            r#""Unknown symbol""#,
            r#"{"symbol":"GOOG"}"#,
            r#"{"symbol":"GOOG","latestPrice":null}"#,
            r#"{"symbol":"GOOG","latestPrice":"n/a"}"#,
            r#"{"symbol":"GOOG","latestPrice":-1.0}"#,
            r#"{"symbol":"GOOG","latestPrice":[1]}"#,
            "<html>busy</html>",
        ];
        for body in bad {
            assert!(
                matches!(parse_quote_payload("GOOG", body), Err(QuoteError::Malformed { .. })),
                "accepted {}",
                body
            );
        }
    }

    #[test]
    fn test_parse_rejects_non_finite_string() {
        assert!(parse_quote_payload("GOOG", r#"{"latestPrice":"inf"}"#).is_err());
        assert!(parse_quote_payload("GOOG", r#"{"latestPrice":"NaN"}"#).is_err());
    }

    #[cfg(feature = "web")]
    mod upstream {
        use super::*;
        use axum::{extract::Path, http::StatusCode, response::IntoResponse, routing::get, Json, Router};

        async fn quote(Path(symbol): Path<String>) -> axum::response::Response {
            match symbol.as_str() {
                "GOOG" => Json(serde_json::json!({"symbol": "GOOG", "latestPrice": 135.25})).into_response(),
                "DOWN" => StatusCode::SERVICE_UNAVAILABLE.into_response(),
                _ => Json("Unknown symbol").into_response(),
            }
        }

        async fn spawn_upstream() -> String {
            let app = Router::new().route("/v1/stock/:symbol/quote", get(quote));
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });
            format!("http://{}", addr)
        }

        #[tokio::test]
        async fn test_fetch_from_local_upstream() {
            let client = HttpQuoteClient::with_base_url(&spawn_upstream().await).unwrap();

            assert_eq!(client.fetch_quote("GOOG").await, QuoteResult::available("GOOG", 135.25));
            assert_eq!(client.fetch_quote("NOPE").await, QuoteResult::unavailable("NOPE"));

            assert!(matches!(
                client.try_fetch_quote("DOWN").await,
                Err(QuoteError::HttpStatus { status: 503, .. })
            ));
            assert_eq!(client.fetch_quote("DOWN").await, QuoteResult::unavailable("DOWN"));
        }

        #[tokio::test]
        async fn test_unreachable_upstream_is_unavailable() {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            drop(listener);

            let client = HttpQuoteClient::with_base_url(&format!("http://{}", addr)).unwrap();
            assert_eq!(client.fetch_quote("GOOG").await, QuoteResult::unavailable("GOOG"));
        }
    }
}
