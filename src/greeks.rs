//! Sensitivities of the option premium (the Greeks).
//!
//! All Greeks are evaluated in the generalized framework of Haug (2007), with
//! an explicit cost-of-carry rate `b`:
//!
//! ```text
//! d1 = (ln(f/x) + (b + v²/2)·t) / (v·√t)
//! d2 = d1 - v·√t
//!
//! delta_call =  e^(-r·t) · Φ(d1)
//! delta_put  = -e^(-r·t) · Φ(-d1)
//! vega       = f · e^((b-r)·t) · n(d1) · √t
//! gamma      = n(d1) · e^((b-r)·t) / (f·v·√t)
//! theta_call = [-f·e^((b-r)·t)·n(d1)·v / (2·√t)
//!               - (b-r)·f·e^((b-r)·t)·Φ(d1) - r·x·e^(-r·t)·Φ(d2)] / 365
//! theta_put  = [-f·e^((b-r)·t)·n(d1)·v / (2·√t)
//!               + (b-r)·f·e^((b-r)·t)·Φ(-d1) + r·x·e^(-r·t)·Φ(-d2)] / 365
//! ```
//!
//! `b = 0` gives options on futures (Black-76); `b = r` recovers
//! Black-Scholes on spot. Delta is discounted at the funding rate `r`. Theta
//! is reported per calendar day. Vega is per unit of volatility, with
//! [`one_percent_vega`] scaling to a one-point move.
//!
//! # References
//! - Haug, E.G. (2007). *The Complete Guide to Option Pricing Formulas*,
//!   2nd ed. McGraw-Hill, chapter 2.

use crate::error::Result;
use crate::normal::{cnd, pdf};
use crate::types::OptionType;
use crate::validate::{validate_finite, validate_positive};

/// Sensitivity of the premium to the forward price.
///
/// Call delta lies in `(0, e^(-r·t))`, put delta in `(-e^(-r·t), 0)`.
///
/// # Errors
/// Returns [`crate::OptGreeksError::InvalidInput`] if `forward`, `strike`,
/// `expiry`, or `vol` is not positive and finite, or if `rate` or `carry` is
/// not finite.
pub fn delta(
    option_type: OptionType,
    forward: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    carry: f64,
    vol: f64,
) -> Result<f64> {
    validate_inputs(forward, strike, expiry, rate, carry, vol)?;

    let (d1, _) = d_values(forward, strike, expiry, carry, vol);
    let discount = (-rate * expiry).exp();

    Ok(match option_type {
        OptionType::Call => discount * cnd(d1),
        OptionType::Put => -discount * cnd(-d1),
    })
}

/// Sensitivity of the premium to volatility, per unit of vol.
///
/// Identical for calls and puts. This is the slope used by the Newton
/// iteration in [`crate::implied_volatility`]; it vanishes for deep
/// in- or out-of-the-money options, which is what makes those solves
/// ill-conditioned.
///
/// # Errors
/// Returns [`crate::OptGreeksError::InvalidInput`] on the same conditions as
/// [`delta`].
///
/// # Examples
/// ```
/// use optgreeks::vega;
///
/// let v = vega(187.93, 195.0, 15.0 / 365.0, 0.0, 0.0, 0.15525)?;
/// assert!((v - 7.7765).abs() < 1e-4);
/// # Ok::<(), optgreeks::OptGreeksError>(())
/// ```
pub fn vega(
    forward: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    carry: f64,
    vol: f64,
) -> Result<f64> {
    validate_inputs(forward, strike, expiry, rate, carry, vol)?;

    let sqrt_t = expiry.sqrt();
    let (d1, _) = d_values(forward, strike, expiry, carry, vol);
    let carry_factor = ((carry - rate) * expiry).exp();

    Ok(forward * carry_factor * pdf(d1) * sqrt_t)
}

/// [`vega`] scaled to a one-percentage-point move in volatility.
///
/// # Errors
/// Returns [`crate::OptGreeksError::InvalidInput`] on the same conditions as
/// [`vega`].
pub fn one_percent_vega(
    forward: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    carry: f64,
    vol: f64,
) -> Result<f64> {
    Ok(vega(forward, strike, expiry, rate, carry, vol)? / 100.0)
}

/// Second derivative of the premium with respect to the forward.
///
/// Identical for calls and puts.
///
/// # Errors
/// Returns [`crate::OptGreeksError::InvalidInput`] on the same conditions as
/// [`delta`].
pub fn gamma(
    forward: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    carry: f64,
    vol: f64,
) -> Result<f64> {
    validate_inputs(forward, strike, expiry, rate, carry, vol)?;

    let sqrt_t = expiry.sqrt();
    let (d1, _) = d_values(forward, strike, expiry, carry, vol);
    let carry_factor = ((carry - rate) * expiry).exp();

    Ok(pdf(d1) * carry_factor / (forward * vol * sqrt_t))
}

/// Time decay of the premium, per calendar day.
///
/// Negative for most options: the premium erodes as expiry approaches.
///
/// # Errors
/// Returns [`crate::OptGreeksError::InvalidInput`] on the same conditions as
/// [`delta`].
pub fn theta(
    option_type: OptionType,
    forward: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    carry: f64,
    vol: f64,
) -> Result<f64> {
    /// Calendar-day convention for per-day theta.
    const DAYS_PER_YEAR: f64 = 365.0;

    validate_inputs(forward, strike, expiry, rate, carry, vol)?;

    let sqrt_t = expiry.sqrt();
    let (d1, d2) = d_values(forward, strike, expiry, carry, vol);
    let carry_factor = ((carry - rate) * expiry).exp();
    let discount = (-rate * expiry).exp();

    let time_decay = (-forward * carry_factor * pdf(d1) * vol) / (2.0 * sqrt_t);

    Ok(match option_type {
        OptionType::Call => {
            (time_decay
                - (carry - rate) * forward * carry_factor * cnd(d1)
                - rate * strike * discount * cnd(d2))
                / DAYS_PER_YEAR
        }
        OptionType::Put => {
            (time_decay
                + (carry - rate) * forward * carry_factor * cnd(-d1)
                + rate * strike * discount * cnd(-d2))
                / DAYS_PER_YEAR
        }
    })
}

fn validate_inputs(
    forward: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    carry: f64,
    vol: f64,
) -> Result<()> {
    validate_positive(forward, "forward")?;
    validate_positive(strike, "strike")?;
    validate_positive(expiry, "expiry")?;
    validate_finite(rate, "rate")?;
    validate_finite(carry, "carry")?;
    validate_positive(vol, "vol")?;
    Ok(())
}

/// The carry-adjusted `d1`/`d2` shared by every Greek.
fn d_values(forward: f64, strike: f64, expiry: f64, carry: f64, vol: f64) -> (f64, f64) {
    let sqrt_t = expiry.sqrt();
    let d1 = ((forward / strike).ln() + (carry + vol * vol / 2.0) * expiry) / (vol * sqrt_t);
    let d2 = d1 - vol * sqrt_t;
    (d1, d2)
}
