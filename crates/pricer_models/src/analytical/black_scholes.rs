//! Black-Scholes pricing model for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use pricer_core::math::distributions::norm_cdf;
use pricer_core::traits::priceable::{ensure_valid_price, OptionPricer};
use pricer_core::types::{OptionParameters, OptionType, PricingError};

/// Black-Scholes closed-form pricer.
///
/// Stateless: all inputs come from [`OptionParameters`], whose construction
/// has already rejected zero volatility and zero expiry.
///
/// # Examples
/// ```
/// use pricer_core::traits::OptionPricer;
/// use pricer_core::types::{OptionParameters, OptionType};
/// use pricer_models::analytical::BlackScholes;
///
/// let call = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let put = call.with_option_type(OptionType::Put);
///
/// let c = BlackScholes.price(&call).unwrap();
/// let p = BlackScholes.price(&put).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = c - p - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlackScholes;

/// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
#[inline]
pub fn d1(params: &OptionParameters) -> f64 {
    let sigma = params.volatility();
    let expiry = params.expiry();
    let log_moneyness = (params.spot() / params.strike()).ln();
    let drift = (params.rate() + 0.5 * sigma * sigma) * expiry;

    (log_moneyness + drift) / (sigma * expiry.sqrt())
}

/// d₂ = d₁ - σ√T
#[inline]
pub fn d2(params: &OptionParameters) -> f64 {
    d1(params) - params.volatility() * params.expiry().sqrt()
}

impl BlackScholes {
    /// Creates the pricer.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// European call price, C = S·N(d₁) - K·e^(-rT)·N(d₂).
    ///
    /// The option kind stored in `params` is ignored.
    #[inline]
    pub fn price_call(&self, params: &OptionParameters) -> f64 {
        let d1 = d1(params);
        let d2 = d1 - params.volatility() * params.expiry().sqrt();

        params.spot() * norm_cdf(d1) - params.strike() * params.discount_factor() * norm_cdf(d2)
    }

    /// European put price, P = K·e^(-rT)·N(-d₂) - S·N(-d₁).
    ///
    /// The option kind stored in `params` is ignored.
    #[inline]
    pub fn price_put(&self, params: &OptionParameters) -> f64 {
        let d1 = d1(params);
        let d2 = d1 - params.volatility() * params.expiry().sqrt();

        params.strike() * params.discount_factor() * norm_cdf(-d2) - params.spot() * norm_cdf(-d1)
    }
}

impl OptionPricer for BlackScholes {
    fn price(&self, params: &OptionParameters) -> Result<f64, PricingError> {
        let raw = match params.option_type() {
            OptionType::Call => self.price_call(params),
            OptionType::Put => self.price_put(params),
        };
        ensure_valid_price(self.name(), raw)
    }

    fn name(&self) -> &'static str {
        "black-scholes"
    }
}
