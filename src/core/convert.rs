//! Conversion arithmetic

use crate::error::Error;

/// Applies a resolved exchange rate to an amount.
///
/// Negative and non-finite amounts are rejected; zero is allowed. No rounding
/// happens here, display formatting owns that.
pub fn convert(amount: f64, rate: f64) -> Result<f64, Error> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::InvalidAmount(amount));
    }
    Ok(amount * rate)
}
