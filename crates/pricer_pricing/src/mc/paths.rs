//! Geometric Brownian motion under the risk-neutral measure.
//!
//! ```text
//! S(t+dt) = S(t) · exp((r - σ²/2)·dt + σ·√dt·Z)
//! ```
//!
//! The step is exact, so a single step over the whole expiry samples the
//! terminal distribution directly.

use pricer_core::types::OptionParameters;

use crate::rng::PricerRng;

/// Precomputed GBM step coefficients.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmStepper {
    spot: f64,
    drift: f64,
    diffusion: f64,
    n_steps: usize,
}

impl GbmStepper {
    /// Coefficients for `n_steps` equal steps over the option's expiry.
    pub fn new(params: &OptionParameters, n_steps: usize) -> Self {
        let n_steps = n_steps.max(1);
        let dt = params.expiry() / n_steps as f64;
        let sigma = params.volatility();
        Self {
            spot: params.spot(),
            drift: (params.rate() - 0.5 * sigma * sigma) * dt,
            diffusion: sigma * dt.sqrt(),
            n_steps,
        }
    }

    /// Terminal price for one standard normal, one step.
    #[inline]
    pub fn terminal(&self, z: f64) -> f64 {
        self.spot * (self.drift + self.diffusion * z).exp()
    }

    /// Terminal price after `n_steps` steps drawn from `rng`.
    #[inline]
    pub fn sample_terminal(&self, rng: &mut PricerRng) -> f64 {
        if self.n_steps == 1 {
            return self.terminal(rng.gen_normal());
        }
        let log_return: f64 = (0..self.n_steps)
            .map(|_| self.drift + self.diffusion * rng.gen_normal())
            .sum();
        self.spot * log_return.exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::types::OptionType;

    fn params() -> OptionParameters {
        OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap()
    }

    #[test]
    fn test_terminal_at_zero_shock_is_forward_drift() {
        let stepper = GbmStepper::new(&params(), 1);
        assert_relative_eq!(stepper.terminal(0.0), 100.0 * 0.03_f64.exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_terminal_is_increasing_in_shock() {
        let stepper = GbmStepper::new(&params(), 1);
        assert!(stepper.terminal(1.0) > stepper.terminal(0.0));
        assert!(stepper.terminal(-1.0) < stepper.terminal(0.0));
        assert!(stepper.terminal(-10.0) > 0.0);
    }

    #[test]
    fn test_martingale_property() {
        // E[S_T] = S·e^(rT)
        for n_steps in [1, 12] {
            let stepper = GbmStepper::new(&params(), n_steps);
            let mut rng = PricerRng::from_seed(42);
            let n = 100_000;
            let mean = (0..n).map(|_| stepper.sample_terminal(&mut rng)).sum::<f64>() / n as f64;
            // Std of S_T is about 21, so 5 standard errors is about 0.33
            assert!((mean - 100.0 * 0.05_f64.exp()).abs() < 0.35, "mean = {mean}");
        }
    }

    #[test]
    fn test_zero_steps_is_treated_as_one() {
        assert_eq!(GbmStepper::new(&params(), 0), GbmStepper::new(&params(), 1));
    }
}
