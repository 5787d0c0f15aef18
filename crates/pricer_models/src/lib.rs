//! # Pricer Models (L2: Business Logic)
//!
//! Closed-form option models and the collaborators built on the pricing contract.
//!
//! This crate provides:
//! - Black-Scholes pricing for European calls and puts
//! - Analytical Greeks (Delta, Gamma, Theta, Vega, Rho) and a five-key summary
//! - Local-volatility pricing through a volatility-surface lookup
//! - Hedging position calculators (delta, gamma, vega, combined)
//! - Option strategy valuation (spreads, straddle, strangle, iron condor, covered call)
//!
//! ## Design Principles
//!
//! - **One pricing contract**: every model implements [`pricer_core::traits::OptionPricer`]
//! - **Static dispatch**: hedging and strategies are generic over the pricer
//! - **Explicit configuration**: defaults live in config structs, never in shared state

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod hedging;
pub mod strategies;
