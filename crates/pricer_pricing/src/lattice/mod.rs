//! Recombining lattice pricers.

pub mod binomial;

pub use binomial::{
    BinomialTreePricer, CrrParameters, LatticeConfig, DEFAULT_LATTICE_STEPS, MAX_LATTICE_STEPS,
};
