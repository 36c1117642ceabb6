//! Error types for the optgreeks library.
//!
//! All fallible operations return `Result<T, OptGreeksError>` rather than
//! panicking, and a failed implied-volatility solve is reported as a distinct
//! outcome instead of a NaN or a plausible-looking partial value.

use thiserror::Error;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, OptGreeksError>;

/// Errors that can occur during pricing, Greek, and implied-vol computations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OptGreeksError {
    /// Input data is invalid (e.g., non-positive forward, zero expiry,
    /// malformed option-type flag).
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// The implied-volatility iteration stopped improving before reaching
    /// the requested tolerance.
    #[error(
        "implied vol did not converge after {iterations} iterations \
         (last vol {last_vol}, last diff {last_diff})"
    )]
    NoConvergence {
        /// Newton steps taken before giving up.
        iterations: usize,
        /// Volatility iterate at the point of failure.
        last_vol: f64,
        /// Final |market price − model price|.
        last_diff: f64,
    },
}
