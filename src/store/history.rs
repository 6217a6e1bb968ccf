//! Persisted conversion history
//!
//! A JSON array of records, insertion order preserved. Appends are
//! read-modify-write over the whole file; records are never updated or
//! deleted.

use crate::error::Error;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRecord {
    pub timestamp: DateTime<Utc>,
    pub from_amount: f64,
    pub from_currency: String,
    pub to_currency: String,
    pub result: f64,
}

impl ConversionRecord {
    pub fn new(from_amount: f64, from_currency: &str, to_currency: &str, result: f64) -> Self {
        ConversionRecord {
            timestamp: Utc::now(),
            from_amount,
            from_currency: from_currency.to_string(),
            to_currency: to_currency.to_string(),
            result,
        }
    }
}

pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        HistoryLog { path: path.into() }
    }

    /// Strict load: a missing file is an empty history, unreadable or
    /// unparseable content is an error.
    pub fn try_load(&self) -> Result<Vec<ConversionRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read history: {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse history: {}", self.path.display()))
    }

    /// All recorded conversions in insertion order. Missing or corrupt files
    /// yield an empty history rather than an error.
    pub fn read_all(&self) -> Vec<ConversionRecord> {
        match self.try_load() {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    "Ignoring unreadable history {}: {e:#}",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }

    /// Appends one record and persists the whole sequence.
    pub fn append(&self, record: ConversionRecord) -> Result<(), Error> {
        let mut records = self.read_all();
        records.push(record);
        super::write_json_file(&self.path, &records)
    }
}
