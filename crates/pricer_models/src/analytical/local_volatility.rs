//! Local-volatility pricing: look up σ(S, T) on a surface, then price with
//! Black-Scholes.
//!
//! No surface construction or calibration lives here. Callers supply any
//! [`VolatilitySurface`]; [`FlatVolatility`] is the constant case.

use pricer_core::traits::priceable::OptionPricer;
use pricer_core::types::{OptionParameters, PricingError};

use super::black_scholes::BlackScholes;

/// Volatility lookup indexed by spot and time to expiry.
///
/// # Contract
///
/// - `volatility(spot, expiry)` returns σ(S, T)
/// - A returned σ must be finite and strictly positive; the pricer rejects
///   anything else with [`PricingError::DomainError`]
pub trait VolatilitySurface {
    /// Volatility at the given spot and expiry.
    fn volatility(&self, spot: f64, expiry: f64) -> Result<f64, PricingError>;
}

impl<S: VolatilitySurface + ?Sized> VolatilitySurface for &S {
    #[inline]
    fn volatility(&self, spot: f64, expiry: f64) -> Result<f64, PricingError> {
        (**self).volatility(spot, expiry)
    }
}

/// Constant volatility surface.
///
/// # Examples
/// ```
/// use pricer_models::analytical::{FlatVolatility, VolatilitySurface};
///
/// let surface = FlatVolatility::new(0.2).unwrap();
/// assert_eq!(surface.volatility(100.0, 1.0).unwrap(), 0.2);
/// assert!(FlatVolatility::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatVolatility {
    sigma: f64,
}

impl FlatVolatility {
    /// Creates a flat surface; σ must be finite and strictly positive.
    pub fn new(sigma: f64) -> Result<Self, PricingError> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(PricingError::DomainError {
                parameter: "volatility",
                value: sigma,
            });
        }
        Ok(Self { sigma })
    }

    /// The constant volatility.
    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl VolatilitySurface for FlatVolatility {
    #[inline]
    fn volatility(&self, _spot: f64, _expiry: f64) -> Result<f64, PricingError> {
        Ok(self.sigma)
    }
}

/// Black-Scholes priced at the surface volatility σ(S, T).
///
/// The `volatility` field of the incoming [`OptionParameters`] is replaced by
/// the surface lookup.
#[derive(Debug, Clone)]
pub struct LocalVolatilityPricer<S> {
    surface: S,
}

impl<S: VolatilitySurface> LocalVolatilityPricer<S> {
    /// Wraps a surface.
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    /// Underlying surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// σ(S, T) for the given market, validated.
    pub fn local_volatility(&self, params: &OptionParameters) -> Result<f64, PricingError> {
        let sigma = self.surface.volatility(params.spot(), params.expiry())?;
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(PricingError::DomainError {
                parameter: "local_volatility",
                value: sigma,
            });
        }
        Ok(sigma)
    }
}

impl<S: VolatilitySurface> OptionPricer for LocalVolatilityPricer<S> {
    fn price(&self, params: &OptionParameters) -> Result<f64, PricingError> {
        let sigma = self.local_volatility(params)?;
        BlackScholes.price(&params.with_volatility(sigma)?)
    }

    fn name(&self) -> &'static str {
        "local-volatility"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::types::OptionType;

    /// σ grows with expiry and falls with spot.
    struct SkewedSurface;

    impl VolatilitySurface for SkewedSurface {
        fn volatility(&self, spot: f64, expiry: f64) -> Result<f64, PricingError> {
            Ok(0.2 + 0.05 * expiry - 0.0005 * (spot - 100.0))
        }
    }

    struct BrokenSurface(f64);

    impl VolatilitySurface for BrokenSurface {
        fn volatility(&self, _spot: f64, _expiry: f64) -> Result<f64, PricingError> {
            Ok(self.0)
        }
    }

    fn market(vol: f64) -> OptionParameters {
        OptionParameters::new(100.0, 100.0, 1.0, 0.05, vol, OptionType::Call).unwrap()
    }

    #[test]
    fn test_flat_surface_matches_black_scholes() {
        let pricer = LocalVolatilityPricer::new(FlatVolatility::new(0.2).unwrap());
        // Incoming volatility is overridden by the surface
        let price = pricer.price(&market(0.9)).unwrap();
        assert_relative_eq!(price, 10.450583572185565, epsilon = 1e-4);
    }

    #[test]
    fn test_surface_lookup_uses_spot_and_expiry() {
        let pricer = LocalVolatilityPricer::new(SkewedSurface);
        let params = market(0.2);
        assert_relative_eq!(pricer.local_volatility(&params).unwrap(), 0.25, epsilon = 1e-12);

        let expected = BlackScholes
            .price(&params.with_volatility(0.25).unwrap())
            .unwrap();
        assert_relative_eq!(pricer.price(&params).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_surface_output_is_domain_error() {
        for bad in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let pricer = LocalVolatilityPricer::new(BrokenSurface(bad));
            let err = pricer.price(&market(0.2)).unwrap_err();
            assert!(err.is_domain_error(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_flat_volatility_rejects_non_positive() {
        assert!(FlatVolatility::new(-0.2).unwrap_err().is_domain_error());
        assert!(FlatVolatility::new(f64::NAN).is_err());
        assert_eq!(FlatVolatility::new(0.3).unwrap().sigma(), 0.3);
    }

    #[test]
    fn test_surface_by_reference() {
        let surface = FlatVolatility::new(0.2).unwrap();
        let pricer = LocalVolatilityPricer::new(&surface);
        assert_eq!(pricer.name(), "local-volatility");
        assert!(pricer.price(&market(0.2)).unwrap() > 0.0);
    }
}
