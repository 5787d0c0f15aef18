//! # Pricer Pricing (Layer 3: Numerical Engines)
//!
//! Numerical option pricers built on the `pricer_core` pricing contract:
//!
//! - [`lattice`]: Cox-Ross-Rubinstein binomial tree
//! - [`mc`]: Monte Carlo under GBM (sequential and rayon-parallel) and the
//!   simplified Heston stochastic-volatility pricer
//! - [`rng`]: seeded random numbers shared by the simulation engines
//!
//! Every pricer implements [`pricer_core::traits::OptionPricer`], so the
//! hedging and strategy calculators in `pricer_models` accept any of them.
//!
//! ## Reproducibility
//!
//! Simulation pricers take their seed from [`mc::SimulationConfig`] (default
//! 42). Identical inputs give bit-identical outputs for a fixed `rand`
//! version.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::traits::OptionPricer;
//! use pricer_core::types::{OptionParameters, OptionType};
//! use pricer_pricing::lattice::BinomialTreePricer;
//! use pricer_pricing::mc::MonteCarloPricer;
//!
//! let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
//!
//! let tree = BinomialTreePricer::with_steps(200).unwrap().price(&params).unwrap();
//! let mc = MonteCarloPricer::default().simulate(&params).unwrap();
//!
//! assert!((tree - mc.price).abs() < 4.0 * mc.std_error + 0.05);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod lattice;
pub mod mc;
pub mod rng;

pub use lattice::{BinomialTreePricer, LatticeConfig};
pub use mc::{HestonParams, HestonPricer, MonteCarloPricer, SimulationConfig, SimulationResult};
