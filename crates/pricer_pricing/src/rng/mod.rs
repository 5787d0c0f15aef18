//! # Random Number Generation
//!
//! Seeded pseudo-random numbers for the simulation engines.
//!
//! - **Reproducibility**: every generator is seeded; identical seeds give
//!   identical sequences
//! - **Streams**: [`PricerRng::for_stream`] derives independent generators for
//!   parallel chunks from one parent seed
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(42);
//! let z = rng.gen_normal();
//! assert!(z.is_finite());
//! ```

mod prng;

pub use prng::PricerRng;
