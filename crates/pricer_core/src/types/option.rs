//! Option kind and validated option parameters.
//!
//! [`OptionParameters`] bundles the five scalar inputs shared by every
//! pricing model (spot, strike, expiry, rate, volatility) with the option
//! kind. Construction validates the domain once, so pricers never divide by
//! a zero `σ√T` and never propagate NaN silently.

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// European option kind.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
///
/// assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
/// assert_eq!("PUT".parse::<OptionType>().unwrap(), OptionType::Put);
/// assert!("forward".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionType {
    /// Returns `true` for a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns `true` for a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }

    /// Terminal payoff for a given underlying price.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::OptionType;
    ///
    /// assert_eq!(OptionType::Call.payoff(110.0, 100.0), 10.0);
    /// assert_eq!(OptionType::Put.payoff(110.0, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn payoff(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(PricingError::InvalidArgument(format!(
                "option type '{}': use 'call' or 'put'",
                other
            ))),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated inputs of a European option pricing call.
///
/// Fields are private; every constructed value satisfies:
/// - spot, strike, expiry and volatility are finite and strictly positive
/// - rate is finite (negative rates are allowed)
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionParameters, OptionType};
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let put = params.with_option_type(OptionType::Put);
/// assert!(put.option_type().is_put());
///
/// // Zero volatility makes d1/d2 undefined
/// assert!(OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.0, OptionType::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptionParameters {
    /// Spot price (S)
    spot: f64,
    /// Strike price (K)
    strike: f64,
    /// Time to expiration in years (T)
    expiry: f64,
    /// Continuously-compounded risk-free rate (r)
    rate: f64,
    /// Annualised volatility (σ)
    volatility: f64,
    /// Call or put
    option_type: OptionType,
}

/// Rejects values that are non-finite or not strictly positive.
fn ensure_positive(parameter: &'static str, value: f64) -> Result<f64, PricingError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PricingError::DomainError { parameter, value })
    }
}

fn ensure_finite(parameter: &'static str, value: f64) -> Result<f64, PricingError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::DomainError { parameter, value })
    }
}

impl OptionParameters {
    /// Creates validated option parameters.
    ///
    /// # Arguments
    /// * `spot` - Current underlying price (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `expiry` - Time to expiration in years (must be positive)
    /// * `rate` - Risk-free rate, annualised and continuously compounded
    /// * `volatility` - Annualised volatility (must be positive)
    /// * `option_type` - Call or put
    ///
    /// # Errors
    /// `PricingError::DomainError` naming the first offending parameter.
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Result<Self, PricingError> {
        Ok(Self {
            spot: ensure_positive("spot", spot)?,
            strike: ensure_positive("strike", strike)?,
            expiry: ensure_positive("expiry", expiry)?,
            rate: ensure_finite("rate", rate)?,
            volatility: ensure_positive("volatility", volatility)?,
            option_type,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to expiration in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the option kind.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Discount factor e^(-rT) to expiry.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }

    /// Intrinsic value max(S - K, 0) or max(K - S, 0).
    #[inline]
    pub fn intrinsic_value(&self) -> f64 {
        self.option_type.payoff(self.spot, self.strike)
    }

    /// Same market and contract with a different option kind.
    #[inline]
    pub fn with_option_type(self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..self
        }
    }

    /// Same market with a different strike.
    ///
    /// # Errors
    /// `PricingError::DomainError` if `strike` is not positive.
    pub fn with_strike(self, strike: f64) -> Result<Self, PricingError> {
        Ok(Self {
            strike: ensure_positive("strike", strike)?,
            ..self
        })
    }

    /// Same contract with a different spot.
    ///
    /// # Errors
    /// `PricingError::DomainError` if `spot` is not positive.
    pub fn with_spot(self, spot: f64) -> Result<Self, PricingError> {
        Ok(Self {
            spot: ensure_positive("spot", spot)?,
            ..self
        })
    }

    /// Same contract with a different expiry.
    ///
    /// # Errors
    /// `PricingError::DomainError` if `expiry` is not positive.
    pub fn with_expiry(self, expiry: f64) -> Result<Self, PricingError> {
        Ok(Self {
            expiry: ensure_positive("expiry", expiry)?,
            ..self
        })
    }

    /// Same contract with a different rate.
    ///
    /// # Errors
    /// `PricingError::DomainError` if `rate` is not finite.
    pub fn with_rate(self, rate: f64) -> Result<Self, PricingError> {
        Ok(Self {
            rate: ensure_finite("rate", rate)?,
            ..self
        })
    }

    /// Same contract with a different volatility.
    ///
    /// # Errors
    /// `PricingError::DomainError` if `volatility` is not positive.
    pub fn with_volatility(self, volatility: f64) -> Result<Self, PricingError> {
        Ok(Self {
            volatility: ensure_positive("volatility", volatility)?,
            ..self
        })
    }
}
