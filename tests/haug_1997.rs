//! Validation against published values from Haug (1997).
//!
//! Haug, E.G. (1997). *The Complete Guide to Option Pricing Formulas*.
//! McGraw-Hill.
//!
//! Each test reproduces a worked example from the book; expected values are
//! quoted to the book's four published decimals, with a tighter band on the
//! full double-precision result alongside.

use approx::assert_abs_diff_eq;

use optgreeks::normal::pdf;
use optgreeks::{OptionType, delta, gamma, premium, theta, vega};

// ---------------------------------------------------------------------------
// Published premium values
// ---------------------------------------------------------------------------

/// Option on a futures contract: F = 19, X = 19, T = 0.75, r = 10%, σ = 28%.
/// Book value: c = 1.7011.
#[test]
fn black_76_futures_call() {
    let call = premium(OptionType::Call, 19.0, 19.0, 0.75, 0.10, 0.28).unwrap();
    assert_abs_diff_eq!(call.0, 1.7011, epsilon = 1e-4);
    assert_abs_diff_eq!(call.0, 1.701050725236268, epsilon = 1e-9);
}

/// The put on the same contract carries the same book value, 1.7011: at the
/// forward, call and put are interchangeable.
#[test]
fn black_76_futures_put_equals_call() {
    let call = premium(OptionType::Call, 19.0, 19.0, 0.75, 0.10, 0.28).unwrap();
    let put = premium(OptionType::Put, 19.0, 19.0, 0.75, 0.10, 0.28).unwrap();
    assert_abs_diff_eq!(put.0, 1.7011, epsilon = 1e-4);
    assert_eq!(call.0.to_bits(), put.0.to_bits());
}

/// Stock option: S = 60, X = 65, T = 0.25, r = 8%, σ = 30%. Book value:
/// c = 2.1334. Priced here through the forward F = S·e^(rT), which folds the
/// carry of a non-dividend stock into the underlying.
#[test]
fn black_scholes_call_through_the_forward() {
    let forward = 60.0 * (0.08_f64 * 0.25).exp();
    let call = premium(OptionType::Call, forward, 65.0, 0.25, 0.08, 0.30).unwrap();
    assert_abs_diff_eq!(call.0, 2.1334, epsilon = 1e-4);
    assert_abs_diff_eq!(call.0, 2.1333684449161985, epsilon = 1e-9);
}

/// Delta of a futures call: F = 105, X = 100, T = 0.5, r = 10%, b = 0,
/// σ = 36%. Book value: Δ = 0.5946.
#[test]
fn futures_call_delta() {
    let hedge = delta(OptionType::Call, 105.0, 100.0, 0.5, 0.10, 0.0, 0.36).unwrap();
    assert_abs_diff_eq!(hedge, 0.5946, epsilon = 1e-4);
    assert_abs_diff_eq!(hedge, 0.5946286597299957, epsilon = 1e-9);
}

// ---------------------------------------------------------------------------
// Relationships the book derives in closed form
// ---------------------------------------------------------------------------

/// Put-call parity for options on futures: c - p = e^(-rT)·(F - X).
#[test]
fn put_call_parity_on_futures() {
    let (f, x, t, r, v) = (19.0, 17.0, 0.75, 0.10, 0.28);
    let call = premium(OptionType::Call, f, x, t, r, v).unwrap();
    let put = premium(OptionType::Put, f, x, t, r, v).unwrap();
    assert_abs_diff_eq!(call.0 - put.0, (-r * t).exp() * (f - x), epsilon = 1e-12);
}

/// Delta difference: Δ_call - Δ_put = e^(-rT), whatever the carry.
#[test]
fn delta_parity() {
    let (f, x, t, r, b, v) = (105.0, 100.0, 0.5, 0.10, 0.05, 0.36);
    let call = delta(OptionType::Call, f, x, t, r, b, v).unwrap();
    let put = delta(OptionType::Put, f, x, t, r, b, v).unwrap();
    assert_abs_diff_eq!(call - put, (-r * t).exp(), epsilon = 1e-15);
}

/// Vega and gamma are two views of the same convexity: vega = Γ·F²·σ·T.
#[test]
fn vega_gamma_relationship() {
    let (f, x, t, r, b, v) = (100.0, 110.0, 0.5, 0.03, 0.01, 0.25);
    let vg = vega(f, x, t, r, b, v).unwrap();
    let gm = gamma(f, x, t, r, b, v).unwrap();
    assert_abs_diff_eq!(vg, gm * f * f * v * t, epsilon = 1e-9);
}

/// With r = b = 0 every rate term vanishes and theta reduces to pure time
/// decay, -F·n(d1)·σ / (2√T), identical for calls and puts.
#[test]
fn theta_reduces_to_time_decay_without_rates() {
    let (f, x, t, v): (f64, f64, f64, f64) = (187.93, 195.0, 15.0 / 365.0, 0.15525);

    let sqrt_t = t.sqrt();
    let d1 = ((f / x).ln() + (0.0 + v * v / 2.0) * t) / (v * sqrt_t);
    let by_hand = (-f * pdf(d1) * v) / (2.0 * sqrt_t) / 365.0;

    let call = theta(OptionType::Call, f, x, t, 0.0, 0.0, v).unwrap();
    let put = theta(OptionType::Put, f, x, t, 0.0, 0.0, v).unwrap();
    assert_eq!(call.to_bits(), by_hand.to_bits());
    assert_eq!(put.to_bits(), by_hand.to_bits());
}
