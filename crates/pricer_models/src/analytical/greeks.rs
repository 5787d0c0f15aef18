//! Analytical Black-Scholes Greeks.
//!
//! - Delta  ∂V/∂S: N(d₁) call, N(d₁) - 1 put
//! - Gamma  ∂²V/∂S²: φ(d₁) / (S·σ·√T), same for call and put
//! - Theta  ∂V/∂t: -(S·φ(d₁)·σ)/(2√T) ∓ r·K·e^(-rT)·N(±d₂), per year
//! - Vega   ∂V/∂σ: S·φ(d₁)·√T, same for call and put
//! - Rho    ∂V/∂r: ±K·T·e^(-rT)·N(±d₂)
//!
//! All five share d₁/d₂ with [`super::black_scholes`]. Inputs come from a
//! validated [`OptionParameters`], so the functions are infallible.

use std::fmt;

use pricer_core::math::distributions::{norm_cdf, norm_pdf};
use pricer_core::types::{OptionParameters, OptionType};

use super::black_scholes::d1;

/// Names of the five sensitivities in the Greeks summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Greek {
    /// ∂V/∂S
    Delta,
    /// ∂²V/∂S²
    Gamma,
    /// ∂V/∂t
    Theta,
    /// ∂V/∂σ
    Vega,
    /// ∂V/∂r
    Rho,
}

impl Greek {
    /// All five Greeks in summary order.
    pub const ALL: [Greek; 5] = [
        Greek::Delta,
        Greek::Gamma,
        Greek::Theta,
        Greek::Vega,
        Greek::Rho,
    ];

    /// Key used in the summary mapping ("Delta", "Gamma", ...).
    pub fn name(&self) -> &'static str {
        match self {
            Greek::Delta => "Delta",
            Greek::Gamma => "Gamma",
            Greek::Theta => "Theta",
            Greek::Vega => "Vega",
            Greek::Rho => "Rho",
        }
    }
}

impl fmt::Display for Greek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The five Black-Scholes sensitivities for one option.
///
/// Serialises as a five-key mapping `{"Delta", "Gamma", "Theta", "Vega", "Rho"}`.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionParameters, OptionType};
/// use pricer_models::analytical::{greeks_summary, Greek};
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let greeks = greeks_summary(&params);
///
/// assert!((greeks.get(Greek::Delta) - 0.6368).abs() < 1e-4);
/// assert!(greeks.gamma >= 0.0 && greeks.vega >= 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct Greeks {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂t, per year
    pub theta: f64,
    /// ∂V/∂σ, per unit of volatility
    pub vega: f64,
    /// ∂V/∂r, per unit of rate
    pub rho: f64,
}

impl Greeks {
    /// Value of a single Greek.
    #[inline]
    pub fn get(&self, greek: Greek) -> f64 {
        match greek {
            Greek::Delta => self.delta,
            Greek::Gamma => self.gamma,
            Greek::Theta => self.theta,
            Greek::Vega => self.vega,
            Greek::Rho => self.rho,
        }
    }

    /// All five Greeks as (key, value) pairs in summary order.
    pub fn entries(&self) -> [(Greek, f64); 5] {
        Greek::ALL.map(|greek| (greek, self.get(greek)))
    }
}

/// Delta: N(d₁) for a call, N(d₁) - 1 for a put.
#[inline]
pub fn delta(params: &OptionParameters) -> f64 {
    let n_d1 = norm_cdf(d1(params));
    match params.option_type() {
        OptionType::Call => n_d1,
        OptionType::Put => n_d1 - 1.0,
    }
}

/// Gamma: φ(d₁) / (S·σ·√T).
#[inline]
pub fn gamma(params: &OptionParameters) -> f64 {
    let vol_sqrt_t = params.volatility() * params.expiry().sqrt();
    norm_pdf(d1(params)) / (params.spot() * vol_sqrt_t)
}

/// Theta per year; usually negative (time decay).
#[inline]
pub fn theta(params: &OptionParameters) -> f64 {
    let sqrt_t = params.expiry().sqrt();
    let d1 = d1(params);
    let d2 = d1 - params.volatility() * sqrt_t;
    let carry = params.rate() * params.strike() * params.discount_factor();

    let decay = -(params.spot() * norm_pdf(d1) * params.volatility()) / (2.0 * sqrt_t);

    match params.option_type() {
        OptionType::Call => decay - carry * norm_cdf(d2),
        OptionType::Put => decay + carry * norm_cdf(-d2),
    }
}

/// Vega: S·φ(d₁)·√T.
#[inline]
pub fn vega(params: &OptionParameters) -> f64 {
    params.spot() * norm_pdf(d1(params)) * params.expiry().sqrt()
}

/// Rho: K·T·e^(-rT)·N(d₂) for a call, -K·T·e^(-rT)·N(-d₂) for a put.
#[inline]
pub fn rho(params: &OptionParameters) -> f64 {
    let d2 = d1(params) - params.volatility() * params.expiry().sqrt();
    let scale = params.strike() * params.expiry() * params.discount_factor();

    match params.option_type() {
        OptionType::Call => scale * norm_cdf(d2),
        OptionType::Put => -scale * norm_cdf(-d2),
    }
}

/// All five Greeks for one option.
pub fn greeks_summary(params: &OptionParameters) -> Greeks {
    Greeks {
        delta: delta(params),
        gamma: gamma(params),
        theta: theta(params),
        vega: vega(params),
        rho: rho(params),
    }
}
