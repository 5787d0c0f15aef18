//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from parameter validation and pricing operations

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every pricer either returns a valid price or fails synchronously with
/// one of these variants; NaN is never returned in place of an error.
///
/// # Variants
/// - `InvalidArgument`: An argument outside its enumerated set (e.g. an option kind other than call/put)
/// - `DomainError`: A numeric input outside the mathematical domain of the model
/// - `InvalidConfig`: Lattice or simulation configuration out of range
/// - `NumericalInstability`: Computation produced an unusable intermediate value
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidArgument("option type 'swap'".to_string());
/// assert_eq!(format!("{}", err), "Invalid argument: option type 'swap'");
///
/// let err = PricingError::DomainError { parameter: "volatility", value: 0.0 };
/// assert_eq!(format!("{}", err), "Domain error: volatility = 0 is outside the valid domain");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Argument outside its enumerated set of values.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Numeric input outside the valid domain (e.g. zero volatility or expiry).
    #[error("Domain error: {parameter} = {value} is outside the valid domain")]
    DomainError {
        /// Name of the offending parameter
        parameter: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Configuration out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

impl PricingError {
    /// Returns `true` for [`PricingError::DomainError`].
    #[inline]
    pub fn is_domain_error(&self) -> bool {
        matches!(self, PricingError::DomainError { .. })
    }

    /// Returns `true` for [`PricingError::InvalidArgument`].
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PricingError::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = PricingError::InvalidArgument("option type 'forward'".to_string());
        assert_eq!(format!("{}", err), "Invalid argument: option type 'forward'");
        assert!(err.is_invalid_argument());
        assert!(!err.is_domain_error());
    }

    #[test]
    fn test_domain_error_display() {
        let err = PricingError::DomainError {
            parameter: "expiry",
            value: -1.0,
        };
        assert_eq!(
            format!("{}", err),
            "Domain error: expiry = -1 is outside the valid domain"
        );
        assert!(err.is_domain_error());
    }

    #[test]
    fn test_invalid_config_display() {
        let err = PricingError::InvalidConfig("lattice steps must be positive".to_string());
        assert!(err.to_string().contains("lattice steps"));
    }

    #[test]
    fn test_numerical_instability_display() {
        let err = PricingError::NumericalInstability("p = 1.2".to_string());
        assert_eq!(format!("{}", err), "Numerical instability: p = 1.2");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::InvalidConfig("zero paths".to_string());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = PricingError::DomainError {
            parameter: "spot",
            value: 0.0,
        };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
