//! Price a quoted option and report its full risk block.
//!
//! Shows how to:
//!   - Cross-check the Hart CND against the erf-based oracle
//!   - Price a short-dated call and put
//!   - Compute delta, vega, gamma, and theta at the quoted vol
//!   - Solve a market premium back to an implied vol
//!
//! Run with: `cargo run --example greeks_report`

use optgreeks::normal::{cnd, phi};
use optgreeks::{
    OptionType, delta, gamma, implied_volatility, one_percent_vega, premium, theta, vega,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A 15-day option on a forward at 187.93, struck at 195.
    let forward = 187.93;
    let strike = 195.0;
    let expiry = 15.0 / 365.0;
    let rate = 0.0;
    let carry = 0.0;
    let vol = 0.15525;

    // ---------------------------------------------------------------
    // 1. Normal distribution spot check
    // ---------------------------------------------------------------

    println!("Cumulative normal at -0.54");
    println!("  Hart:       {:.12}", cnd(-0.54));
    println!("  erf oracle: {:.12}", phi(-0.54));
    println!("  Difference: {:.2e}", (cnd(-0.54) - phi(-0.54)).abs());

    // ---------------------------------------------------------------
    // 2. Premiums and risk
    // ---------------------------------------------------------------

    let call = premium(OptionType::Call, forward, strike, expiry, rate, vol)?;
    let put = premium(OptionType::Put, forward, strike, expiry, rate, vol)?;

    println!("\nContract: F = {forward}, X = {strike}, T = 15d, vol = {:.3}%", vol * 100.0);
    println!("  Call premium: {:.6}", call.0);
    println!("  Put premium:  {:.6}", put.0);

    println!("\nRisk at the quoted vol (call side)");
    println!(
        "  Delta:    {:>12.6}",
        delta(OptionType::Call, forward, strike, expiry, rate, carry, vol)?
    );
    println!(
        "  Vega:     {:>12.6}  (per vol point: {:.6})",
        vega(forward, strike, expiry, rate, carry, vol)?,
        one_percent_vega(forward, strike, expiry, rate, carry, vol)?
    );
    println!(
        "  Gamma:    {:>12.6}",
        gamma(forward, strike, expiry, rate, carry, vol)?
    );
    println!(
        "  Theta/d:  {:>12.6}",
        theta(OptionType::Call, forward, strike, expiry, rate, carry, vol)?
    );

    // ---------------------------------------------------------------
    // 3. Implied vol from a market quote
    // ---------------------------------------------------------------

    let market_price = 0.36;
    let solved = implied_volatility(
        OptionType::Call,
        forward,
        strike,
        expiry,
        rate,
        carry,
        market_price,
        0.0001,
    )?;

    let repriced = premium(OptionType::Call, forward, strike, expiry, rate, solved.0)?;
    println!("\nImplied vol from a quote at {market_price}");
    println!("  Solved vol: {:.10}", solved.0);
    println!("  Reprices:   {:.10}", repriced.0);
    println!("  Residual:   {:.2e}", (repriced.0 - market_price).abs());

    Ok(())
}
