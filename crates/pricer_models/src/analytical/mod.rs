//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model for lognormal dynamics
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//! - Local volatility: Black-Scholes evaluated at a surface volatility
//!
//! ## Domain
//!
//! d1 and d2 divide by σ√T. [`pricer_core::types::OptionParameters`] rejects
//! σ <= 0 and T <= 0 at construction, so these formulas never see them.

pub mod black_scholes;
pub mod greeks;
pub mod local_volatility;

// Re-export main types at module level
pub use black_scholes::BlackScholes;
pub use greeks::{delta, gamma, greeks_summary, rho, theta, vega, Greek, Greeks};
pub use local_volatility::{FlatVolatility, LocalVolatilityPricer, VolatilitySurface};
