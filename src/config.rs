use crate::error::{Error, Result};

/// Bounds of the divmod solution search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Bound used for the first attempt at every location
    pub initial_bound: u64,
    /// Factor the bound is multiplied by when a search comes up empty
    pub growth_factor: u64,
    /// Largest bound ever tried (inclusive)
    pub max_bound: u64,
    /// Re-solve all locations at a wider bound when they share no divisor
    pub widen_on_conflict: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            initial_bound: 100,
            growth_factor: 10,
            max_bound: 1_000_000,
            widen_on_conflict: true,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn with_initial_bound(mut self, bound: u64) -> Self {
        self.initial_bound = bound;
        self
    }

    #[must_use]
    pub fn with_growth_factor(mut self, factor: u64) -> Self {
        self.growth_factor = factor;
        self
    }

    #[must_use]
    pub fn with_max_bound(mut self, bound: u64) -> Self {
        self.max_bound = bound;
        self
    }

    #[must_use]
    pub fn with_widening(mut self, widen: bool) -> Self {
        self.widen_on_conflict = widen;
        self
    }

    /// Checks that the bounds describe a terminating search.
    pub fn validate(&self) -> Result<()> {
        if self.initial_bound == 0 {
            return Err(Error::Config("initial bound must be at least 1".into()));
        }
        if self.growth_factor < 2 {
            return Err(Error::Config(format!(
                "growth factor must be at least 2, got {}",
                self.growth_factor
            )));
        }
        if self.initial_bound > self.max_bound {
            return Err(Error::Config(format!(
                "initial bound {} exceeds max bound {}",
                self.initial_bound, self.max_bound
            )));
        }
        Ok(())
    }

    /// The bound after `bound`, or `None` once it would pass `max_bound`.
    pub(crate) fn next_bound(&self, bound: u64) -> Option<u64> {
        bound
            .checked_mul(self.growth_factor)
            .filter(|&next| next <= self.max_bound)
    }
}
