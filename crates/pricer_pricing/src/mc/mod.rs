//! Monte Carlo pricing engines.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer                 HestonPricer
//! ├── SimulationConfig             ├── HestonParams
//! ├── GbmStepper                   ├── SimulationConfig (100 steps)
//! ├── PricerRng                    ├── PricerRng
//! └── PayoffAccumulator            └── PayoffAccumulator
//!         └──────── SimulationResult ────────┘
//! ```
//!
//! Both pricers are deterministic for a fixed seed and implement
//! [`pricer_core::traits::OptionPricer`].
//!
//! # Examples
//!
//! ```rust
//! use pricer_core::types::{OptionParameters, OptionType};
//! use pricer_pricing::mc::{MonteCarloPricer, SimulationConfig};
//!
//! let config = SimulationConfig::builder()
//!     .n_paths(20_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! let pricer = MonteCarloPricer::new(config).unwrap();
//!
//! let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
//! let result = pricer.simulate(&params).unwrap();
//! println!("Price: {:.4} +/- {:.4}", result.price, result.confidence_95());
//! ```

pub mod config;
pub mod heston;
pub mod paths;
pub mod pricer;
pub mod result;

pub use config::{
    SimulationConfig, SimulationConfigBuilder, DEFAULT_HESTON_STEPS, DEFAULT_PATHS, DEFAULT_SEED,
    MAX_PATHS, MAX_STEPS,
};
pub use heston::{HestonParams, HestonPricer};
pub use paths::GbmStepper;
pub use pricer::{MonteCarloPricer, PARALLEL_CHUNK_PATHS};
pub use result::SimulationResult;
