//! Core domain types for option pricing.
//!
//! These newtypes wrap `f64` to provide compile-time type safety, preventing
//! accidental parameter swapping (e.g., passing a premium where a volatility
//! is expected).
//!
//! # Newtype Strategy
//!
//! **Outputs use newtypes** — [`Premium`] and [`Vol`] wrap return values so
//! callers can't accidentally feed a premium back in where a volatility is
//! expected.
//!
//! **Inputs use bare `f64`** — API functions like `premium(forward: f64, ...)`
//! accept raw floats for ergonomics. Requiring `premium(Forward(100.0))` at
//! every call site adds ceremony without meaningful safety (the caller already
//! knows they're passing a forward). This is a deliberate trade-off: newtypes
//! guard against *silent* misuse of outputs, while inputs are self-documenting
//! via parameter names.
//!
//! # Why no `Eq` or `Ord`?
//! These types wrap `f64`, which does not implement `Eq` or `Ord` because `NaN`
//! breaks total ordering. We derive `PartialEq` and `PartialOrd` only. Do not
//! add `Eq` without handling `NaN` explicitly.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OptGreeksError;

/// Option type: call or put.
///
/// Determines the pricing formula branch. Parses from the single-letter flags
/// common in quote files (`"c"` / `"p"`, case insensitive) as well as the
/// spelled-out names.
///
/// # Examples
/// ```
/// use optgreeks::OptionType;
///
/// let side: OptionType = "c".parse()?;
/// assert_eq!(side, OptionType::Call);
/// # Ok::<(), optgreeks::OptGreeksError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    /// Right to buy at strike price.
    Call,
    /// Right to sell at strike price.
    Put,
}

impl FromStr for OptionType {
    type Err = OptGreeksError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c" | "call" => Ok(OptionType::Call),
            "p" | "put" => Ok(OptionType::Put),
            _ => Err(OptGreeksError::InvalidInput {
                message: format!("option type must be call or put, got {s:?}"),
            }),
        }
    }
}

/// Implied volatility `σ`, measured as annualized standard deviation.
///
/// A vol of 0.20 represents 20% annualized volatility.
///
/// # Examples
/// ```
/// use optgreeks::types::Vol;
/// let vol = Vol(0.20);
/// assert_eq!(vol.0, 0.20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Vol(pub f64);

/// Option premium, in the same units as the forward and strike.
///
/// # Examples
/// ```
/// use optgreeks::types::Premium;
/// let premium = Premium(0.3568);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Premium(pub f64);
