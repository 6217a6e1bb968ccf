//! Rate resolution
//!
//! Decides between the local rate cache and the remote provider, and keeps
//! the cache populated from successful live lookups.

use crate::core::rates::RateProvider;
use crate::error::Error;
use crate::store::RateStore;
use tracing::{debug, warn};

pub struct RateResolver<'a, P: RateProvider> {
    provider: &'a P,
    store: &'a mut RateStore,
}

impl<'a, P: RateProvider> RateResolver<'a, P> {
    pub fn new(provider: &'a P, store: &'a mut RateStore) -> Self {
        RateResolver { provider, store }
    }

    /// Resolves the exchange rate for a currency pair.
    ///
    /// Offline mode consults only the local cache and never touches the
    /// network. Online mode fetches the full table anchored at `from`,
    /// extracts the `to` entry, and writes it into the cache before returning;
    /// a failed cache write is reported but does not block the result.
    pub async fn resolve(&mut self, from: &str, to: &str, offline: bool) -> Result<f64, Error> {
        if offline {
            debug!("Resolving {from} to {to} from cached rates");
            return self
                .store
                .get(from, to)
                .ok_or_else(|| Error::rate_unavailable(from, to));
        }

        let table = self.provider.fetch_rates(from).await?;
        let rate = table
            .get(to)
            .copied()
            // A non-positive rate can never satisfy the rate > 0 invariant
            .filter(|rate| *rate > 0.0)
            .ok_or_else(|| Error::rate_unavailable(from, to))?;

        if let Err(e) = self.store.put(from, to, rate) {
            warn!("Failed to cache rate for {from} to {to}: {e}");
        }

        Ok(rate)
    }
}
