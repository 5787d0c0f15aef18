//! # pricer_core: Foundation for the Option Pricing Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Standard normal distribution functions (`math::distributions`)
//! - Validated option inputs: `OptionParameters`, `OptionType` (`types::option`)
//! - The error taxonomy: `PricingError` (`types::error`)
//! - The pricing contract shared by every model: `OptionPricer` (`traits`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::distributions::norm_cdf;
//! use pricer_core::types::{OptionParameters, OptionType};
//!
//! let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
//! assert_eq!(params.spot(), 100.0);
//!
//! // Invalid kinds are rejected when parsed from text
//! assert!("straddle".parse::<OptionType>().is_err());
//!
//! assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `OptionType`, `OptionParameters` and `PricingError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
