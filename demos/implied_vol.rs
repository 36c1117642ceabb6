//! Recover implied volatilities from market premiums.
//!
//! Shows how to:
//!   - Solve a single quoted premium back to a vol via Newton-Raphson
//!   - Recover a volatility smile from a ladder of out-of-the-money quotes
//!   - Handle the quotes the solver must refuse
//!
//! Run with: `cargo run --example implied_vol`

use optgreeks::{OptionType, implied_volatility, premium};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Quarterly options on a futures contract at 72.50, funding at 4.5%.
    let forward = 72.5;
    let expiry = 0.25;
    let rate = 0.045;

    // ---------------------------------------------------------------
    // 1. Solve a single market quote
    // ---------------------------------------------------------------

    let quote = 1.29; // put struck at 68, last traded premium
    let vol = implied_volatility(OptionType::Put, forward, 68.0, expiry, rate, 0.0, quote, 1e-8)?;
    let repriced = premium(OptionType::Put, forward, 68.0, expiry, rate, vol.0)?;

    println!("Single quote: 68 put on a {forward} future, premium {quote}");
    println!("  Implied vol: {:.10}", vol.0);
    println!("  Reprices to: {:.10}", repriced.0);
    println!("  Residual:    {:.2e}", (repriced.0 - quote).abs());

    // ---------------------------------------------------------------
    // 2. Recover a smile from an out-of-the-money ladder
    // ---------------------------------------------------------------

    // Synthetic quotes generated from a known smile, so recovery is
    // checkable: puts below the forward, calls above, as quoted on screen.
    let smile = |k: f64| 0.28 + 1.2 * (k / forward).ln().powi(2);

    println!("\nSmile recovery from an OTM quote ladder");
    println!(
        "{:>8} {:>6} {:>12} {:>12} {:>12} {:>10}",
        "Strike", "Side", "Quote", "Solved IV", "True IV", "Error"
    );
    println!("{}", "-".repeat(66));

    for strike in [62.0, 66.0, 70.0, 75.0, 80.0, 85.0] {
        let side = if strike > forward {
            OptionType::Call
        } else {
            OptionType::Put
        };
        let true_vol = smile(strike);
        let market = premium(side, forward, strike, expiry, rate, true_vol)?;
        let solved = implied_volatility(side, forward, strike, expiry, rate, 0.0, market.0, 1e-8)?;

        println!(
            "{strike:>8.1} {:>6} {:>12.6} {:>12.8} {:>12.8} {:>10.2e}",
            match side {
                OptionType::Call => "call",
                OptionType::Put => "put",
            },
            market.0,
            solved.0,
            true_vol,
            (solved.0 - true_vol).abs()
        );
    }

    // ---------------------------------------------------------------
    // 3. Quotes the solver must refuse
    // ---------------------------------------------------------------

    println!("\nQuotes the solver refuses");

    // At the forward the Manaster-Koehler seed is zero: no starting point.
    let atm = implied_volatility(OptionType::Call, forward, forward, expiry, rate, 0.0, 1.8, 1e-8);
    println!("  ATM quote:       {}", atm.unwrap_err());

    // A premium above the discounted forward is unreachable at any vol.
    let cap = (-rate * expiry).exp() * forward;
    let rich = implied_volatility(OptionType::Call, forward, 70.0, expiry, rate, 0.0, 80.0, 1e-8);
    println!("  Above the {cap:.2} cap: {}", rich.unwrap_err());

    Ok(())
}
