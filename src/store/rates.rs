//! Cached exchange rate store
//!
//! A single JSON object on disk mapping `"FROM_TO"` pair keys to rates. The
//! whole mapping is rewritten on every update; entries never expire.

use crate::error::Error;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub type CachedRates = BTreeMap<String, f64>;

fn pair_key(from: &str, to: &str) -> String {
    format!("{from}_{to}")
}

pub struct RateStore {
    path: PathBuf,
    rates: CachedRates,
}

impl RateStore {
    /// Opens the store at `path`. A missing backing file is an empty mapping;
    /// unreadable or corrupt content also collapses to empty, with a warning,
    /// so the caller never fails here.
    pub fn open<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let rates = match Self::try_load(&path) {
            Ok(rates) => rates,
            Err(e) => {
                warn!("Ignoring unreadable rate cache {}: {e:#}", path.display());
                CachedRates::new()
            }
        };
        debug!("Opened rate store with {} cached rates", rates.len());
        Self { path, rates }
    }

    /// Strict load, distinguishing corruption from an empty-by-design store:
    /// a missing file yields an empty mapping, anything unreadable or
    /// unparseable is an error.
    pub fn try_load(path: &Path) -> Result<CachedRates> {
        if !path.exists() {
            return Ok(CachedRates::new());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read rate cache: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse rate cache: {}", path.display()))
    }

    pub fn get(&self, from: &str, to: &str) -> Option<f64> {
        self.rates.get(&pair_key(from, to)).copied()
    }

    /// Inserts or overwrites one entry, then persists the whole mapping.
    pub fn put(&mut self, from: &str, to: &str, rate: f64) -> Result<(), Error> {
        self.rates.insert(pair_key(from, to), rate);
        self.save()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    fn save(&self) -> Result<(), Error> {
        super::write_json_file(&self.path, &self.rates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_an_empty_store() {
        let dir = tempdir().unwrap();
        let store = RateStore::open(dir.path().join("rates_cache.json"));
        assert!(store.is_empty());
        assert!(store.get("USD", "EUR").is_none());
    }

    #[test]
    fn test_put_then_get_round_trips_through_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rates_cache.json");

        let mut store = RateStore::open(&path);
        store.put("USD", "EUR", 0.91).unwrap();

        let reopened = RateStore::open(&path);
        assert_eq!(reopened.get("USD", "EUR"), Some(0.91));

        // On-disk format is a flat object keyed by currency pair
        let content = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["USD_EUR"], 0.91);
    }

    #[test]
    fn test_put_is_idempotent() {
        let dir = tempdir().unwrap();
        let mut store = RateStore::open(dir.path().join("rates_cache.json"));

        store.put("USD", "EUR", 0.9).unwrap();
        store.put("USD", "EUR", 0.9).unwrap();

        assert_eq!(store.get("USD", "EUR"), Some(0.9));
    }

    #[test]
    fn test_put_overwrites_existing_entry() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rates_cache.json");

        let mut store = RateStore::open(&path);
        store.put("USD", "EUR", 0.9).unwrap();
        store.put("USD", "EUR", 0.95).unwrap();

        assert_eq!(RateStore::open(&path).get("USD", "EUR"), Some(0.95));
    }

    #[test]
    fn test_corrupt_file_collapses_to_empty_only_in_open() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rates_cache.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(RateStore::try_load(&path).is_err());

        let store = RateStore::open(&path);
        assert!(store.is_empty());
    }

    #[test]
    fn test_pair_keys_are_directional() {
        let dir = tempdir().unwrap();
        let mut store = RateStore::open(dir.path().join("rates_cache.json"));

        store.put("USD", "EUR", 0.91).unwrap();
        assert!(store.get("EUR", "USD").is_none());
    }

    #[test]
    fn test_save_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("rates_cache.json");

        let mut store = RateStore::open(&path);
        store.put("USD", "EUR", 0.91).unwrap();
        assert!(path.exists());
    }
}
