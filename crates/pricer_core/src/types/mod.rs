//! Core option and error types.
//!
//! This module provides:
//! - `option`: Option kind and validated market/contract parameters
//! - `error`: Structured error type for pricing operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionParameters`], [`OptionType`] from `option`
//! - [`PricingError`] from `error`

pub mod error;
pub mod option;

// Re-export commonly used types at module level
pub use error::PricingError;
pub use option::{OptionParameters, OptionType};
