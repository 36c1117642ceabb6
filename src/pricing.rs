//! Black (1976) option premiums on forwards.
//!
//! The premium of a European option on a forward `f` struck at `x`, with time
//! to expiry `t` in years, discount rate `r`, and volatility `v`:
//!
//! ```text
//! d1 = (ln(f/x) + (v²/2)·t) / (v·√t)
//! d2 = d1 - v·√t
//!
//! call = e^(-r·t) · (f·Φ(d1) - x·Φ(d2))
//! put  = e^(-r·t) · (x·Φ(-d2) - f·Φ(-d1))
//! ```
//!
//! Because the underlying is a forward, cost of carry does not enter the
//! moneyness drift; it reappears in the Greeks ([`crate::greeks`]), which
//! measure sensitivity under an explicit carry rate.
//!
//! # References
//! - Black, F. (1976). "The pricing of commodity contracts". *Journal of
//!   Financial Economics*, 3(1-2), 167-179.
//! - Haug, E.G. (2007). *The Complete Guide to Option Pricing Formulas*,
//!   2nd ed. McGraw-Hill.

use crate::error::Result;
use crate::normal::cnd;
use crate::types::{OptionType, Premium};
use crate::validate::{validate_finite, validate_positive};

/// Price a European option on a forward.
///
/// # Arguments
/// - `forward`: forward price of the underlying
/// - `strike`: strike price
/// - `expiry`: time to expiry in years
/// - `rate`: continuously-compounded discount rate
/// - `vol`: annualized volatility
///
/// # Errors
/// Returns [`crate::OptGreeksError::InvalidInput`] if `forward`, `strike`,
/// `expiry`, or `vol` is not positive and finite, or if `rate` is not finite.
///
/// # Examples
/// ```
/// use optgreeks::{premium, OptionType};
///
/// // 15-day call on a forward at 187.93, struck at 195.
/// let p = premium(OptionType::Call, 187.93, 195.0, 15.0 / 365.0, 0.0, 0.15525)?;
/// assert!((p.0 - 0.3568).abs() < 1e-4);
/// # Ok::<(), optgreeks::OptGreeksError>(())
/// ```
pub fn premium(
    option_type: OptionType,
    forward: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    vol: f64,
) -> Result<Premium> {
    validate_positive(forward, "forward")?;
    validate_positive(strike, "strike")?;
    validate_positive(expiry, "expiry")?;
    validate_finite(rate, "rate")?;
    validate_positive(vol, "vol")?;

    let (d1, d2) = d_values(forward, strike, expiry, vol);
    let discount = (-rate * expiry).exp();

    let value = match option_type {
        OptionType::Call => discount * (forward * cnd(d1) - strike * cnd(d2)),
        OptionType::Put => discount * (strike * cnd(-d2) - forward * cnd(-d1)),
    };
    Ok(Premium(value))
}

/// The `d1`/`d2` arguments of the cumulative normal in the premium formula.
fn d_values(forward: f64, strike: f64, expiry: f64, vol: f64) -> (f64, f64) {
    let sqrt_t = expiry.sqrt();
    let d1 = ((forward / strike).ln() + (vol * vol / 2.0) * expiry) / (vol * sqrt_t);
    let d2 = d1 - vol * sqrt_t;
    (d1, d2)
}
