//! The pricing contract shared by every option model.
//!
//! `price(spot, strike, expiry, rate, volatility, kind) -> price` is the only
//! interface hedging and strategy code depends on.

use crate::types::{OptionParameters, PricingError};

/// A model that prices a European option from [`OptionParameters`].
///
/// # Design Philosophy
///
/// Implementors are immutable configuration values (step counts, simulation
/// sizes, seeds). Pricing never mutates the pricer, so a pricer can be
/// shared freely and calling twice with identical inputs yields identical
/// outputs.
///
/// Prefer generic parameters (`P: OptionPricer`) over `Box<dyn OptionPricer>`
/// in hot loops; the trait is object safe for the cases where a model is
/// chosen at run time.
///
/// # Examples
///
/// ```
/// use pricer_core::traits::OptionPricer;
/// use pricer_core::types::{OptionParameters, OptionType, PricingError};
///
/// /// Prices every option at its intrinsic value.
/// struct Intrinsic;
///
/// impl OptionPricer for Intrinsic {
///     fn price(&self, params: &OptionParameters) -> Result<f64, PricingError> {
///         Ok(params.intrinsic_value())
///     }
/// }
///
/// let params = OptionParameters::new(110.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// assert_eq!(Intrinsic.price(&params).unwrap(), 10.0);
/// ```
pub trait OptionPricer {
    /// Prices the option described by `params`.
    ///
    /// # Invariants
    /// - The returned price is finite and non-negative
    /// - The method is pure (no side effects, deterministic)
    ///
    /// # Errors
    /// Model-specific `PricingError` (configuration, numerical instability).
    fn price(&self, params: &OptionParameters) -> Result<f64, PricingError>;

    /// Short human-readable model name, used in logs and reports.
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<P: OptionPricer + ?Sized> OptionPricer for &P {
    #[inline]
    fn price(&self, params: &OptionParameters) -> Result<f64, PricingError> {
        (**self).price(params)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<P: OptionPricer + ?Sized> OptionPricer for Box<P> {
    #[inline]
    fn price(&self, params: &OptionParameters) -> Result<f64, PricingError> {
        (**self).price(params)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Rejects non-finite or negative model output.
///
/// Rounding can push a deep out-of-the-money closed-form price a few ulps
/// below zero; anything below `-tolerance` is reported instead.
///
/// # Errors
/// `PricingError::NumericalInstability` for NaN, infinite or materially negative values.
pub fn ensure_valid_price(model: &str, value: f64) -> Result<f64, PricingError> {
    const TOLERANCE: f64 = 1e-10;

    if !value.is_finite() || value < -TOLERANCE {
        return Err(PricingError::NumericalInstability(format!(
            "{} produced invalid price {}",
            model, value
        )));
    }
    Ok(value.max(0.0))
}
