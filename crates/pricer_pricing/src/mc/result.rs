//! Simulation results and the payoff accumulator that produces them.

/// z-score of the two-sided 95% confidence interval.
const Z_95: f64 = 1.96;

/// Discounted Monte Carlo estimate with its sampling error.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::SimulationResult;
///
/// let result = SimulationResult { price: 10.45, std_error: 0.05, n_paths: 100_000 };
/// assert!((result.confidence_95() - 0.098).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    /// Discounted mean payoff.
    pub price: f64,
    /// Discounted standard error of the mean, sample std / √n.
    pub std_error: f64,
    /// Number of paths behind the estimate.
    pub n_paths: usize,
}

impl SimulationResult {
    /// 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        Z_95 * self.std_error
    }

    /// (lower, upper) bounds of the 95% confidence interval.
    #[inline]
    pub fn confidence_interval(&self) -> (f64, f64) {
        let half = self.confidence_95();
        (self.price - half, self.price + half)
    }
}

/// Running mean and variance of payoffs (Welford), mergeable across chunks.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct PayoffAccumulator {
    count: usize,
    mean: f64,
    m2: f64,
}

impl PayoffAccumulator {
    #[inline]
    pub(crate) fn push(&mut self, payoff: f64) {
        self.count += 1;
        let delta = payoff - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (payoff - self.mean);
    }

    /// Chan et al. pairwise combination.
    pub(crate) fn merge(self, other: Self) -> Self {
        if self.count == 0 {
            return other;
        }
        if other.count == 0 {
            return self;
        }
        let count = self.count + other.count;
        let delta = other.mean - self.mean;
        let weight = other.count as f64 / count as f64;
        Self {
            count,
            mean: self.mean + delta * weight,
            m2: self.m2 + other.m2 + delta * delta * self.count as f64 * weight,
        }
    }

    /// Discounts the mean and standard error by `discount_factor`.
    pub(crate) fn finish(&self, discount_factor: f64) -> SimulationResult {
        let std_error = if self.count > 1 {
            let variance = self.m2 / (self.count - 1) as f64;
            (variance / self.count as f64).sqrt()
        } else {
            0.0
        };
        SimulationResult {
            price: discount_factor * self.mean,
            std_error: discount_factor * std_error,
            n_paths: self.count,
        }
    }
}
