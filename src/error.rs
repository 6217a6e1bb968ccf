//! Domain error taxonomy
//!
//! Fatal variants surface to the user and exit non-zero; `Persistence` is
//! reported but never blocks the conversion result that produced it.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("currency {0} is not supported")]
    UnknownCurrency(String),

    #[error("no exchange rate available for {from} to {to}")]
    RateUnavailable { from: String, to: String },

    #[error("unable to reach the exchange rate service: {0}")]
    Network(#[from] reqwest::Error),

    #[error("amount must be a finite, non-negative number (got {0})")]
    InvalidAmount(f64),

    #[error("could not write {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn rate_unavailable(from: &str, to: &str) -> Self {
        Error::RateUnavailable {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub fn persistence(path: &std::path::Path, source: std::io::Error) -> Self {
        Error::Persistence {
            path: path.to_path_buf(),
            source,
        }
    }
}
