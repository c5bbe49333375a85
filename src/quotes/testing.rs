/// Scripted quote source for tests
use super::{QuoteResult, QuoteSource};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Default)]
pub struct ScriptedQuotes {
    prices: HashMap<String, f64>,
    delays: HashMap<String, Duration>,
    calls: AtomicUsize,
    requested: Mutex<Vec<String>>,
}

impl ScriptedQuotes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quote `symbol` at `price`; unknown symbols are unavailable
    pub fn with_price(mut self, symbol: &str, price: f64) -> Self {
        self.prices.insert(symbol.to_string(), price);
        self
    }

    /// Answer `symbol` only after `delay`
    pub fn with_delay(mut self, symbol: &str, delay: Duration) -> Self {
        self.delays.insert(symbol.to_string(), delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().clone()
    }
}

#[async_trait]
impl QuoteSource for ScriptedQuotes {
    async fn fetch_quote(&self, symbol: &str) -> QuoteResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().push(symbol.to_string());

        if let Some(delay) = self.delays.get(symbol) {
            tokio::time::sleep(*delay).await;
        }

        match self.prices.get(symbol) {
            Some(price) => QuoteResult::available(symbol, *price),
            None => QuoteResult::unavailable(symbol),
        }
    }
}
