//! Exchange rate source abstractions

use crate::error::Error;
use async_trait::async_trait;
use std::collections::HashMap;

/// Full rate table anchored at a base currency: target code to rate.
pub type RateTable = HashMap<String, f64>;

#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch_rates(&self, base: &str) -> Result<RateTable, Error>;
}
