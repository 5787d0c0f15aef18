//! Option strategy valuation.
//!
//! A strategy is a signed combination of calls and puts on one underlying,
//! all sharing the market of an [`OptionParameters`] (spot, expiry, rate,
//! volatility). The strike and kind stored in that value are ignored; each
//! leg carries its own.
//!
//! | Strategy       | Value                                  |
//! |----------------|----------------------------------------|
//! | bull call      | C(K1) - C(K2)                          |
//! | bear put       | P(K1) - P(K2)                          |
//! | straddle       | C(K) + P(K)                            |
//! | strangle       | C(K1) + P(K2)                          |
//! | iron condor    | C(K1) - C(K2) + P(K3) - P(K4)          |
//! | covered call   | S - C(K)                               |

use std::fmt;

use pricer_core::traits::priceable::OptionPricer;
use pricer_core::types::{OptionParameters, OptionType, PricingError};

/// The supported strategies with their strikes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "strategy", rename_all = "kebab-case"))]
pub enum Strategy {
    /// Long call at `long_strike`, short call at `short_strike`.
    BullCallSpread {
        /// K1
        long_strike: f64,
        /// K2
        short_strike: f64,
    },
    /// Long put at `long_strike`, short put at `short_strike`.
    BearPutSpread {
        /// K1
        long_strike: f64,
        /// K2
        short_strike: f64,
    },
    /// Long call and long put at the same strike.
    Straddle {
        /// K
        strike: f64,
    },
    /// Long call at `call_strike`, long put at `put_strike`.
    Strangle {
        /// K1
        call_strike: f64,
        /// K2
        put_strike: f64,
    },
    /// Call spread plus put spread.
    IronCondor {
        /// K1, long call
        long_call_strike: f64,
        /// K2, short call
        short_call_strike: f64,
        /// K3, long put
        long_put_strike: f64,
        /// K4, short put
        short_put_strike: f64,
    },
    /// Long underlying, short call.
    CoveredCall {
        /// K
        strike: f64,
    },
}

impl Strategy {
    /// Names accepted by [`Strategy::from_name`].
    pub const NAMES: [&'static str; 6] = [
        "bull-call-spread",
        "bear-put-spread",
        "straddle",
        "strangle",
        "iron-condor",
        "covered-call",
    ];

    /// Builds a strategy from its name and strikes in leg order.
    ///
    /// Names are matched case-insensitively and `_` is accepted for `-`.
    ///
    /// # Errors
    ///
    /// [`PricingError::InvalidArgument`] for an unknown name or a wrong number
    /// of strikes.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::strategies::Strategy;
    ///
    /// let s = Strategy::from_name("bull_call_spread", &[95.0, 105.0]).unwrap();
    /// assert_eq!(s.name(), "bull-call-spread");
    /// assert!(Strategy::from_name("straddle", &[95.0, 105.0]).is_err());
    /// ```
    pub fn from_name(name: &str, strikes: &[f64]) -> Result<Self, PricingError> {
        let key = name.trim().to_ascii_lowercase().replace('_', "-");
        let expected = Self::strike_count(&key).ok_or_else(|| {
            PricingError::InvalidArgument(format!(
                "unknown strategy '{}': expected one of {}",
                name,
                Self::NAMES.join(", ")
            ))
        })?;
        if strikes.len() != expected {
            return Err(PricingError::InvalidArgument(format!(
                "strategy '{}' takes {} strike(s), got {}",
                key,
                expected,
                strikes.len()
            )));
        }

        let strategy = match key.as_str() {
            "bull-call-spread" => Strategy::BullCallSpread {
                long_strike: strikes[0],
                short_strike: strikes[1],
            },
            "bear-put-spread" => Strategy::BearPutSpread {
                long_strike: strikes[0],
                short_strike: strikes[1],
            },
            "straddle" => Strategy::Straddle { strike: strikes[0] },
            "strangle" => Strategy::Strangle {
                call_strike: strikes[0],
                put_strike: strikes[1],
            },
            "iron-condor" => Strategy::IronCondor {
                long_call_strike: strikes[0],
                short_call_strike: strikes[1],
                long_put_strike: strikes[2],
                short_put_strike: strikes[3],
            },
            _ => Strategy::CoveredCall { strike: strikes[0] },
        };
        Ok(strategy)
    }

    fn strike_count(key: &str) -> Option<usize> {
        match key {
            "straddle" | "covered-call" => Some(1),
            "bull-call-spread" | "bear-put-spread" | "strangle" => Some(2),
            "iron-condor" => Some(4),
            _ => None,
        }
    }

    /// Canonical kebab-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::BullCallSpread { .. } => "bull-call-spread",
            Strategy::BearPutSpread { .. } => "bear-put-spread",
            Strategy::Straddle { .. } => "straddle",
            Strategy::Strangle { .. } => "strangle",
            Strategy::IronCondor { .. } => "iron-condor",
            Strategy::CoveredCall { .. } => "covered-call",
        }
    }

    /// Option legs as (sign, kind, strike).
    pub fn legs(&self) -> Vec<(f64, OptionType, f64)> {
        use OptionType::{Call, Put};
        match *self {
            Strategy::BullCallSpread {
                long_strike,
                short_strike,
            } => vec![(1.0, Call, long_strike), (-1.0, Call, short_strike)],
            Strategy::BearPutSpread {
                long_strike,
                short_strike,
            } => vec![(1.0, Put, long_strike), (-1.0, Put, short_strike)],
            Strategy::Straddle { strike } => vec![(1.0, Call, strike), (1.0, Put, strike)],
            Strategy::Strangle {
                call_strike,
                put_strike,
            } => vec![(1.0, Call, call_strike), (1.0, Put, put_strike)],
            Strategy::IronCondor {
                long_call_strike,
                short_call_strike,
                long_put_strike,
                short_put_strike,
            } => vec![
                (1.0, Call, long_call_strike),
                (-1.0, Call, short_call_strike),
                (1.0, Put, long_put_strike),
                (-1.0, Put, short_put_strike),
            ],
            Strategy::CoveredCall { strike } => vec![(-1.0, Call, strike)],
        }
    }

    /// Units of the underlying held alongside the option legs.
    pub fn underlying_units(&self) -> f64 {
        match self {
            Strategy::CoveredCall { .. } => 1.0,
            _ => 0.0,
        }
    }

    /// Values the strategy with `pricer` at the market in `market`.
    ///
    /// # Errors
    ///
    /// Invalid leg strikes surface as [`PricingError::DomainError`]; pricer
    /// errors propagate unchanged.
    pub fn evaluate<P: OptionPricer>(
        &self,
        pricer: &P,
        market: &OptionParameters,
    ) -> Result<f64, PricingError> {
        self.legs().into_iter().try_fold(
            self.underlying_units() * market.spot(),
            |total, (sign, kind, strike)| {
                let leg = market.with_strike(strike)?.with_option_type(kind);
                Ok(total + sign * pricer.price(&leg)?)
            },
        )
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// C(K1) - C(K2).
pub fn bull_call_spread<P: OptionPricer>(
    pricer: &P,
    market: &OptionParameters,
    long_strike: f64,
    short_strike: f64,
) -> Result<f64, PricingError> {
    Strategy::BullCallSpread {
        long_strike,
        short_strike,
    }
    .evaluate(pricer, market)
}

/// P(K1) - P(K2).
pub fn bear_put_spread<P: OptionPricer>(
    pricer: &P,
    market: &OptionParameters,
    long_strike: f64,
    short_strike: f64,
) -> Result<f64, PricingError> {
    Strategy::BearPutSpread {
        long_strike,
        short_strike,
    }
    .evaluate(pricer, market)
}

/// C(K) + P(K).
pub fn straddle<P: OptionPricer>(
    pricer: &P,
    market: &OptionParameters,
    strike: f64,
) -> Result<f64, PricingError> {
    Strategy::Straddle { strike }.evaluate(pricer, market)
}

/// C(K1) + P(K2).
pub fn strangle<P: OptionPricer>(
    pricer: &P,
    market: &OptionParameters,
    call_strike: f64,
    put_strike: f64,
) -> Result<f64, PricingError> {
    Strategy::Strangle {
        call_strike,
        put_strike,
    }
    .evaluate(pricer, market)
}

/// C(K1) - C(K2) + P(K3) - P(K4).
pub fn iron_condor<P: OptionPricer>(
    pricer: &P,
    market: &OptionParameters,
    strikes: [f64; 4],
) -> Result<f64, PricingError> {
    Strategy::IronCondor {
        long_call_strike: strikes[0],
        short_call_strike: strikes[1],
        long_put_strike: strikes[2],
        short_put_strike: strikes[3],
    }
    .evaluate(pricer, market)
}

/// S - C(K).
pub fn covered_call<P: OptionPricer>(
    pricer: &P,
    market: &OptionParameters,
    strike: f64,
) -> Result<f64, PricingError> {
    Strategy::CoveredCall { strike }.evaluate(pricer, market)
}
