//! Standard normal distribution functions.
//!
//! The workhorse is [`cnd`], the cumulative distribution evaluated with the
//! Hart (1968) rational approximation: double-precision accurate across the
//! full real line and cheap enough for pricing inner loops. [`phi`] is an
//! independent evaluation through the error function (Abramowitz & Stegun
//! 7.1.26, ~1.5e-7 absolute error) kept as a cross-check oracle; pricing code
//! paths use [`cnd`].
//!
//! All functions here are total over finite input and perform no validation;
//! NaN propagates. Callers inside the crate validate first.
//!
//! # References
//! - Hart, J.F. et al. (1968). *Computer Approximations*. Wiley.
//! - West, G. (2005). "Better approximations to cumulative normal functions".
//!   *Wilmott Magazine*, 70-76.
//! - Abramowitz, M. & Stegun, I. (1964). *Handbook of Mathematical
//!   Functions*, formula 7.1.26.

use std::f64::consts::PI;

/// Cumulative standard normal distribution function `Φ(x)`.
///
/// Hart (1968) algorithm: a rational approximation up to the cutover point,
/// a continued-fraction expansion in the far tail, and saturation to 0 or 1
/// beyond `±37` where the tail probability falls below `f64` resolution.
///
/// # Examples
/// ```
/// use optgreeks::normal::cnd;
///
/// assert_eq!(cnd(0.0), 0.5);
/// assert!((cnd(1.96) - 0.975).abs() < 1e-3);
/// ```
pub fn cnd(x: f64) -> f64 {
    /// Beyond this bound the tail probability is below `f64` resolution.
    const SATURATION: f64 = 37.0;
    /// Crossover from the rational approximation to the continued-fraction tail.
    const TAIL_CUTOVER: f64 = 7.07106781186547;
    /// Hart numerator coefficients, highest degree first.
    const NUMERATOR: [f64; 7] = [
        0.0352624965998911,
        0.700383064443688,
        6.37396220353165,
        33.912866078383,
        112.0792914978709,
        221.2135961699311,
        220.2068679123761,
    ];
    /// Hart denominator coefficients, highest degree first.
    const DENOMINATOR: [f64; 8] = [
        0.0883883476483184,
        1.75566716318264,
        16.06417757920695,
        86.78073220294608,
        296.5642487796737,
        637.3336333788311,
        793.8265125199484,
        440.4137358247522,
    ];

    let y = x.abs();
    if y > SATURATION {
        return if x > 0.0 { 1.0 } else { 0.0 };
    }

    let exponential = (-y * y / 2.0).exp();
    let tail = if y <= TAIL_CUTOVER {
        let numerator = NUMERATOR
            .iter()
            .skip(1)
            .fold(NUMERATOR[0], |acc, &c| acc * y + c);
        let denominator = DENOMINATOR
            .iter()
            .skip(1)
            .fold(DENOMINATOR[0], |acc, &c| acc * y + c);
        exponential * numerator / denominator
    } else {
        let mut s = y + 0.65;
        s = y + 4.0 / s;
        s = y + 3.0 / s;
        s = y + 2.0 / s;
        s = y + 1.0 / s;
        // Hart's published tail constant; differs from sqrt(2*PI) in the last ulp.
        exponential / (s * 2.506628274631001)
    };

    if x > 0.0 { 1.0 - tail } else { tail }
}

/// Standard normal probability density function.
///
/// ```text
/// n(x) = exp(-x²/2) / √(2π)
/// ```
pub fn pdf(x: f64) -> f64 {
    (-x * x / 2.0).exp() / (2.0 * PI).sqrt()
}

/// Cumulative standard normal through the error function.
///
/// ```text
/// Φ(x) = (1 + erf(x / √2)) / 2
/// ```
///
/// The erf evaluation uses the Abramowitz & Stegun 7.1.26 series, accurate to
/// about `1.5e-7` absolute. Kept as an independent oracle against [`cnd`];
/// note `phi(0.0)` is `0.5000000005`, not exactly `0.5`, because the series
/// coefficients sum to `0.999999999`.
pub fn phi(x: f64) -> f64 {
    (1.0 + erf(x / std::f64::consts::SQRT_2)) / 2.0
}

/// Error function, Abramowitz & Stegun formula 7.1.26.
fn erf(x: f64) -> f64 {
    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let y = 1.0 - ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t * (-x * x).exp();

    sign * y
}
