//! # optgreeks
//!
//! Black (1976) option pricing on forwards: premiums, Greeks, and
//! Newton-Raphson implied volatility.
//!
//! Provides the full quote-handling loop: observed premium → implied vol
//! extraction → repricing and risk (delta, vega, gamma, theta).
//!
//! ## Architecture
//!
//! - **`normal`** — Standard normal distribution (Hart CND, density, erf oracle)
//! - **`pricing`** — European premiums on forwards
//! - **`greeks`** — Premium sensitivities under an explicit cost of carry
//! - **`implied`** — Newton-Raphson implied volatility with divergence guard
//!
//! ## Design
//!
//! - **Newtypes for outputs, bare `f64` for inputs.** [`Premium`] and [`Vol`]
//!   wrap return values to prevent accidental mixing. Inputs take raw `f64`
//!   for ergonomics — every entry point validates its domain first.
//! - **No panics.** Every fallible operation returns [`Result`]. Library code
//!   never calls `unwrap()` or `expect()`.
//! - **Stateless.** Pricing and solving are free functions of their inputs;
//!   there is no engine object to construct or share.
//! - **Thread-safe.** All types are `Send + Sync`; concurrent pricing needs
//!   no synchronization.
//! - **Serializable.** Value types implement Serde `Serialize` /
//!   `Deserialize` for quote-file interchange.
//!
//! ## Example
//!
//! ```
//! use optgreeks::{delta, implied_volatility, premium, OptionType};
//!
//! // A 15-day call on a forward at 187.93, struck at 195, quoted at 0.36.
//! let vol = implied_volatility(
//!     OptionType::Call,
//!     187.93,
//!     195.0,
//!     15.0 / 365.0,
//!     0.0,
//!     0.0,
//!     0.36,
//!     0.0001,
//! )?;
//!
//! let repriced = premium(OptionType::Call, 187.93, 195.0, 15.0 / 365.0, 0.0, vol.0)?;
//! assert!((repriced.0 - 0.36).abs() < 0.0001);
//!
//! let hedge = delta(OptionType::Call, 187.93, 195.0, 15.0 / 365.0, 0.0, 0.0, vol.0)?;
//! assert!(hedge > 0.0 && hedge < 1.0);
//! # Ok::<(), optgreeks::OptGreeksError>(())
//! ```

pub mod error;
pub mod greeks;
pub mod implied;
pub mod normal;
pub mod pricing;
pub mod types;
mod validate;

#[doc(inline)]
pub use error::{OptGreeksError, Result};
#[doc(inline)]
pub use greeks::{delta, gamma, one_percent_vega, theta, vega};
#[doc(inline)]
pub use implied::implied_volatility;
#[doc(inline)]
pub use pricing::premium;
#[doc(inline)]
pub use types::{OptionType, Premium, Vol};
