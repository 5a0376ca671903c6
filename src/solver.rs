use crate::config::SearchConfig;
use crate::error::{Error, Result};
use crate::location::Location;
use std::fmt;
use std::ops::RangeInclusive;
use tracing::trace;

/// An integer pair whose division yields a location's index and count.
///
/// Satisfies `x = y * index + count` with `count < y`, so `x / y == index`
/// and `x % y == count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SolutionCandidate {
    pub x: u64,
    pub y: u64,
}

impl SolutionCandidate {
    pub fn new(x: u64, y: u64) -> Self {
        Self { x, y }
    }

    /// Returns true if dividing `x` by `y` reproduces `location`.
    pub fn solves(&self, location: Location) -> bool {
        self.y != 0 && self.x / self.y == location.index && self.x % self.y == location.count
    }
}

impl fmt::Display for SolutionCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A location together with every candidate found within `bound`.
///
/// For a fixed divisor the dividend is fixed too, and dividends grow with the
/// divisor, so the candidates always form one contiguous run of divisors.
/// Only that range is stored; dividends are computed on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationWithSolutions {
    pub location: Location,
    /// Bound both operands were limited to
    pub bound: u64,
    /// Smallest divisor, the set is empty when greater than `max_divisor`
    min_divisor: u64,
    max_divisor: u64,
}

impl LocationWithSolutions {
    /// Keeps only the candidates whose divisor lies in `divisors`.
    #[must_use]
    pub fn restrict(&self, divisors: RangeInclusive<u64>) -> Self {
        Self {
            min_divisor: self.min_divisor.max(*divisors.start()),
            max_divisor: self.max_divisor.min(*divisors.end()),
            ..self.clone()
        }
    }

    pub fn min_divisor(&self) -> u64 {
        self.min_divisor
    }

    pub fn max_divisor(&self) -> u64 {
        self.max_divisor
    }

    /// Divisors of the candidate set in ascending order.
    pub fn divisors(&self) -> RangeInclusive<u64> {
        self.min_divisor..=self.max_divisor
    }

    /// Candidates in ascending divisor order.
    pub fn candidates(&self) -> impl Iterator<Item = SolutionCandidate> + '_ {
        self.divisors().map(|y| self.candidate_at(y))
    }

    pub fn candidate_for(&self, divisor: u64) -> Option<SolutionCandidate> {
        self.contains_divisor(divisor)
            .then(|| self.candidate_at(divisor))
    }

    pub fn contains_divisor(&self, divisor: u64) -> bool {
        self.divisors().contains(&divisor)
    }

    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.max_divisor - self.min_divisor + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min_divisor > self.max_divisor
    }

    /// Only called for divisors inside the range, whose dividend fits the bound.
    fn candidate_at(&self, y: u64) -> SolutionCandidate {
        SolutionCandidate::new(y * self.location.index + self.location.count, y)
    }
}

/// A location narrowed to the one candidate using the shared divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationWithSolution {
    pub location: Location,
    pub solution: SolutionCandidate,
}

/// Every candidate for `location` with both operands at most `bound`.
///
/// A divisor `y` works when `y > count` and `y * index + count <= bound`, so
/// the divisors run from `count + 1` up to `(bound - count) / index`.
pub fn candidates_within(location: Location, bound: u64) -> LocationWithSolutions {
    let Location { index, count } = location;
    let (min_divisor, max_divisor) = match (count.checked_add(1), bound.checked_sub(count)) {
        (Some(min), Some(_)) if index == 0 => (min, bound),
        (Some(min), Some(room)) => (min, bound.min(room / index)),
        _ => (1, 0),
    };
    LocationWithSolutions {
        location,
        bound,
        min_divisor,
        max_divisor,
    }
}

/// Divmod solution generator with an expanding search bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct DivmodSolver {
    config: SearchConfig,
}

impl DivmodSolver {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Finds the candidates for `location`, starting at the initial bound.
    pub fn solve(&self, location: Location) -> Result<LocationWithSolutions> {
        self.solve_from(location, self.config.initial_bound)
    }

    /// Finds the candidates for `location`, starting at `floor`.
    ///
    /// The bound grows by the configured factor until some candidate fits;
    /// once it would pass the max bound the search fails with
    /// [`Error::SolverExhausted`].
    pub fn solve_from(&self, location: Location, floor: u64) -> Result<LocationWithSolutions> {
        let mut bound = floor;
        loop {
            let candidates = candidates_within(location, bound);
            if !candidates.is_empty() {
                trace!(%location, bound, found = candidates.len(), "solved location");
                return Ok(candidates);
            }

            bound = self
                .config
                .next_bound(bound)
                .ok_or(Error::SolverExhausted {
                    index: location.index,
                    count: location.count,
                    max_bound: self.config.max_bound,
                })?;
            trace!(%location, bound, "no candidates, expanding bound");
        }
    }
}
