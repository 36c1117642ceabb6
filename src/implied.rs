//! Implied volatility by Newton-Raphson inversion of the premium.
//!
//! Given an observed market premium `cm`, find the volatility `v` at which
//! [`premium`] reproduces it:
//!
//! ```text
//! v₀   = √(|ln(f/x)| · 2/t)                  (Manaster-Koehler seed)
//! vᵢ₊₁ = vᵢ - (price(vᵢ) - cm) / vega(vᵢ)
//! ```
//!
//! Iteration stops as soon as `|cm - price(vᵢ)| < tolerance`. The residual
//! must shrink on every step: Newton on this objective overshoots for deep
//! in- or out-of-the-money options and tiny expiries, and a growing residual
//! aborts the solve with [`OptGreeksError::NoConvergence`] rather than
//! oscillating. A hard iteration cap backstops the guard.
//!
//! # References
//! - Manaster, S. & Koehler, G. (1982). "The calculation of implied variances
//!   from the Black-Scholes model: a note". *Journal of Finance*, 37(1),
//!   227-230.

use crate::error::{OptGreeksError, Result};
use crate::greeks::vega;
use crate::pricing::premium;
use crate::types::{OptionType, Vol};
use crate::validate::{validate_finite, validate_positive};

/// Solve for the volatility that reprices an observed market premium.
///
/// The seed is the Manaster-Koehler (1982) starting point, which brackets the
/// solution from above for off-forward strikes. Each Newton step divides the
/// pricing error by [`vega`], the exact slope of the premium in `vol`. The
/// `carry` rate is validated but does not enter the Black (1976) premium
/// being inverted; it is accepted for signature symmetry with the Greeks.
///
/// # Errors
/// - [`OptGreeksError::InvalidInput`] if `forward`, `strike`, `expiry`,
///   `market_price`, or `tolerance` is not positive and finite, or if `rate`
///   or `carry` is not finite.
/// - [`OptGreeksError::NoConvergence`] if the seed is unusable (an
///   at-the-forward quote gives a zero seed), an iterate leaves the valid
///   domain, the residual grows, or the iteration cap is reached. The error
///   carries the iteration count and the last vol and residual seen.
///
/// # Examples
/// ```
/// use optgreeks::{implied_volatility, OptionType};
///
/// // A 15-day call quoted at 0.36.
/// let vol = implied_volatility(
///     OptionType::Call,
///     187.93,
///     195.0,
///     15.0 / 365.0,
///     0.0,
///     0.0,
///     0.36,
///     0.0001,
/// )?;
/// assert!((vol.0 - 0.1557).abs() < 1e-4);
/// # Ok::<(), optgreeks::OptGreeksError>(())
/// ```
#[allow(clippy::too_many_arguments)]
pub fn implied_volatility(
    option_type: OptionType,
    forward: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    carry: f64,
    market_price: f64,
    tolerance: f64,
) -> Result<Vol> {
    /// Hard stop against oscillations the divergence guard misses.
    const MAX_ITERATIONS: usize = 100;

    validate_positive(forward, "forward")?;
    validate_positive(strike, "strike")?;
    validate_positive(expiry, "expiry")?;
    validate_finite(rate, "rate")?;
    validate_finite(carry, "carry")?;
    validate_positive(market_price, "market_price")?;
    validate_positive(tolerance, "tolerance")?;

    let seed = ((forward / strike).ln().abs() * 2.0 / expiry).sqrt();
    if !seed.is_finite() || seed <= 0.0 {
        // At-the-forward quotes give a zero seed and no Newton step to take.
        return Err(OptGreeksError::NoConvergence {
            iterations: 0,
            last_vol: seed,
            last_diff: f64::INFINITY,
        });
    }

    #[cfg(feature = "logging")]
    tracing::debug!(
        forward,
        strike,
        expiry,
        market_price,
        seed,
        "implied vol solve started"
    );

    let mut vol = seed;
    let mut price = premium(option_type, forward, strike, expiry, rate, vol)?.0;
    let mut slope = vega(forward, strike, expiry, rate, 0.0, vol)?;
    let mut diff = (market_price - price).abs();
    let mut prev_diff = f64::INFINITY;
    let mut iterations = 0;

    while iterations < MAX_ITERATIONS {
        if diff < tolerance {
            #[cfg(feature = "logging")]
            tracing::debug!(vol, iterations, diff, "implied vol converged");
            return Ok(Vol(vol));
        }
        if !diff.is_finite() || diff > prev_diff {
            return Err(OptGreeksError::NoConvergence {
                iterations,
                last_vol: vol,
                last_diff: diff,
            });
        }
        prev_diff = diff;

        vol -= (price - market_price) / slope;
        iterations += 1;
        if !vol.is_finite() || vol <= 0.0 {
            return Err(OptGreeksError::NoConvergence {
                iterations,
                last_vol: vol,
                last_diff: diff,
            });
        }

        price = premium(option_type, forward, strike, expiry, rate, vol)?.0;
        slope = vega(forward, strike, expiry, rate, 0.0, vol)?;
        diff = (market_price - price).abs();
    }

    Err(OptGreeksError::NoConvergence {
        iterations,
        last_vol: vol,
        last_diff: diff,
    })
}
