//! Input validation shared by the pricing, greek, and solver entry points.
//!
//! Every public function validates before computing, so a bad input surfaces
//! as `InvalidInput` naming the offending parameter instead of a NaN or Inf
//! propagating out of a log or a division. `!is_finite()` rejects NaN, +Inf,
//! and -Inf uniformly.

use crate::error::OptGreeksError;

/// For prices, strikes, expiries, vols, premiums, and tolerances: strictly
/// positive and finite.
pub(crate) fn validate_positive(value: f64, name: &str) -> crate::error::Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(OptGreeksError::InvalidInput {
            message: format!("{name} must be positive and finite, got {value}"),
        });
    }
    Ok(value)
}

/// For the rate and carry parameters, which may be zero or negative: any
/// finite value passes.
pub(crate) fn validate_finite(value: f64, name: &str) -> crate::error::Result<f64> {
    if !value.is_finite() {
        return Err(OptGreeksError::InvalidInput {
            message: format!("{name} must be finite, got {value}"),
        });
    }
    Ok(value)
}
