//! Hedge position calculators.
//!
//! A portfolio of value `V` is expressed as `V / price` option units; each
//! hedge position is that unit count scaled by the option's Greek:
//!
//! ```text
//! hedge_position = greek × (portfolio_value / option_price)
//! ```
//!
//! The option price comes from any [`OptionPricer`]; the Greeks are the
//! analytical Black-Scholes ones from [`crate::analytical::greeks`].

use pricer_core::traits::priceable::OptionPricer;
use pricer_core::types::{OptionParameters, PricingError};

use crate::analytical::greeks::{delta, gamma, greeks_summary, vega};

/// Portfolio value hedged when none is configured.
pub const DEFAULT_PORTFOLIO_VALUE: f64 = 100_000.0;

/// Hedging inputs that are not market data.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HedgeConfig {
    portfolio_value: f64,
}

impl HedgeConfig {
    /// Creates a config; `portfolio_value` must be finite and positive.
    pub fn new(portfolio_value: f64) -> Result<Self, PricingError> {
        if !portfolio_value.is_finite() || portfolio_value <= 0.0 {
            return Err(PricingError::DomainError {
                parameter: "portfolio_value",
                value: portfolio_value,
            });
        }
        Ok(Self { portfolio_value })
    }

    /// Value of the portfolio being hedged.
    #[inline]
    pub fn portfolio_value(&self) -> f64 {
        self.portfolio_value
    }
}

impl Default for HedgeConfig {
    fn default() -> Self {
        Self {
            portfolio_value: DEFAULT_PORTFOLIO_VALUE,
        }
    }
}

/// Delta, gamma and vega hedge positions for one option.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HedgePositions {
    /// delta × option units
    pub delta_hedge: f64,
    /// gamma × option units
    pub gamma_hedge: f64,
    /// vega × option units
    pub vega_hedge: f64,
}

/// Number of option units making up the portfolio.
///
/// # Errors
///
/// [`PricingError::DomainError`] when the pricer returns a zero price, which
/// leaves the unit count undefined.
pub fn number_of_options<P: OptionPricer>(
    pricer: &P,
    params: &OptionParameters,
    config: &HedgeConfig,
) -> Result<f64, PricingError> {
    let option_price = pricer.price(params)?;
    if option_price <= 0.0 {
        return Err(PricingError::DomainError {
            parameter: "option_price",
            value: option_price,
        });
    }
    Ok(config.portfolio_value() / option_price)
}

/// Delta hedge position.
pub fn delta_hedge<P: OptionPricer>(
    pricer: &P,
    params: &OptionParameters,
    config: &HedgeConfig,
) -> Result<f64, PricingError> {
    Ok(delta(params) * number_of_options(pricer, params, config)?)
}

/// Gamma hedge position.
pub fn gamma_hedge<P: OptionPricer>(
    pricer: &P,
    params: &OptionParameters,
    config: &HedgeConfig,
) -> Result<f64, PricingError> {
    Ok(gamma(params) * number_of_options(pricer, params, config)?)
}

/// Vega hedge position.
pub fn vega_hedge<P: OptionPricer>(
    pricer: &P,
    params: &OptionParameters,
    config: &HedgeConfig,
) -> Result<f64, PricingError> {
    Ok(vega(params) * number_of_options(pricer, params, config)?)
}

/// All three hedge positions, pricing the option once.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionParameters, OptionType};
/// use pricer_models::analytical::BlackScholes;
/// use pricer_models::hedging::{portfolio_hedge, HedgeConfig};
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let hedge = portfolio_hedge(&BlackScholes, &params, &HedgeConfig::default()).unwrap();
///
/// // 100_000 / 10.4506 units, each with delta 0.6368
/// assert!((hedge.delta_hedge - 6093.6).abs() < 1.0);
/// ```
pub fn portfolio_hedge<P: OptionPricer>(
    pricer: &P,
    params: &OptionParameters,
    config: &HedgeConfig,
) -> Result<HedgePositions, PricingError> {
    let units = number_of_options(pricer, params, config)?;
    let greeks = greeks_summary(params);

    Ok(HedgePositions {
        delta_hedge: greeks.delta * units,
        gamma_hedge: greeks.gamma * units,
        vega_hedge: greeks.vega * units,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::BlackScholes;
    use approx::assert_relative_eq;
    use pricer_core::types::OptionType;

    /// Pricer returning a fixed value regardless of inputs.
    struct FixedPrice(f64);

    impl OptionPricer for FixedPrice {
        fn price(&self, _params: &OptionParameters) -> Result<f64, PricingError> {
            Ok(self.0)
        }
    }

    fn reference(kind: OptionType) -> OptionParameters {
        OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, kind).unwrap()
    }

    #[test]
    fn test_hedge_config_default_and_validation() {
        assert_eq!(HedgeConfig::default().portfolio_value(), 100_000.0);
        assert_eq!(HedgeConfig::new(5_000.0).unwrap().portfolio_value(), 5_000.0);
        assert!(HedgeConfig::new(0.0).unwrap_err().is_domain_error());
        assert!(HedgeConfig::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_positions_scale_greeks_by_units() {
        let params = reference(OptionType::Call);
        let config = HedgeConfig::new(1_000.0).unwrap();
        let pricer = FixedPrice(10.0);

        // 1000 / 10 = 100 units
        assert_relative_eq!(
            delta_hedge(&pricer, &params, &config).unwrap(),
            100.0 * 0.6368306511756191,
            epsilon = 1e-4
        );
        assert_relative_eq!(
            gamma_hedge(&pricer, &params, &config).unwrap(),
            100.0 * 0.018762017345846895,
            epsilon = 1e-4
        );
        assert_relative_eq!(
            vega_hedge(&pricer, &params, &config).unwrap(),
            100.0 * 37.52403469169379,
            epsilon = 1e-2
        );
    }

    #[test]
    fn test_portfolio_hedge_matches_individual_hedges() {
        for kind in [OptionType::Call, OptionType::Put] {
            let params = reference(kind);
            let config = HedgeConfig::default();
            let all = portfolio_hedge(&BlackScholes, &params, &config).unwrap();

            assert_eq!(all.delta_hedge, delta_hedge(&BlackScholes, &params, &config).unwrap());
            assert_eq!(all.gamma_hedge, gamma_hedge(&BlackScholes, &params, &config).unwrap());
            assert_eq!(all.vega_hedge, vega_hedge(&BlackScholes, &params, &config).unwrap());
        }
    }

    #[test]
    fn test_put_delta_hedge_is_negative() {
        let params = reference(OptionType::Put);
        let hedge = portfolio_hedge(&BlackScholes, &params, &HedgeConfig::default()).unwrap();
        assert!(hedge.delta_hedge < 0.0);
        assert!(hedge.gamma_hedge > 0.0);
    }

    #[test]
    fn test_zero_option_price_is_domain_error() {
        let params = reference(OptionType::Call);
        let err = portfolio_hedge(&FixedPrice(0.0), &params, &HedgeConfig::default()).unwrap_err();
        assert_eq!(
            err,
            PricingError::DomainError {
                parameter: "option_price",
                value: 0.0
            }
        );
    }

    #[test]
    fn test_pricer_errors_propagate() {
        struct Failing;
        impl OptionPricer for Failing {
            fn price(&self, _params: &OptionParameters) -> Result<f64, PricingError> {
                Err(PricingError::NumericalInstability("boom".into()))
            }
        }
        let params = reference(OptionType::Call);
        let err = delta_hedge(&Failing, &params, &HedgeConfig::default()).unwrap_err();
        assert!(matches!(err, PricingError::NumericalInstability(_)));
    }
}
