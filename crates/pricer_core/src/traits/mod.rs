//! Core traits shared across the pricing layers.
//!
//! This module defines:
//! - Generic floating-point operations (`Float` trait, re-exported from num-traits)
//! - The single pricing contract every model implements (`OptionPricer`)
//!
//! Collaborators (hedging, strategies) are generic over `P: OptionPricer`
//! and use static dispatch; substituting Black-Scholes for a lattice or a
//! simulation changes the type parameter, not the caller.

/// Generic floating-point trait for numeric computations.
///
/// # Examples
/// ```
/// use pricer_core::traits::Float;
///
/// fn compute_discount<T: Float>(rate: T, time: T) -> T {
///     (-rate * time).exp()
/// }
///
/// let discount_f64: f64 = compute_discount(0.05, 1.0);
/// assert!((discount_f64 - 0.951229).abs() < 1e-5);
/// ```
pub use num_traits::Float;

pub mod priceable;

pub use priceable::OptionPricer;
