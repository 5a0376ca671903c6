use crate::charset::CharacterSet;
use crate::common::{assign, extract, find_common_divisor};
use crate::config::SearchConfig;
use crate::error::{Error, Result};
use crate::location::{map_locations, Location};
use crate::obfuscated::Obfuscated;
use crate::rle;
use crate::solver::{DivmodSolver, LocationWithSolutions};
use tracing::{debug, info};

/// Drives the whole encoding pipeline for one text.
///
/// Character set, runs and locations are derived once; the divmod search is
/// then repeated from a shared floor bound until the locations agree on a
/// divisor.
#[derive(Debug, Clone, Copy, Default)]
pub struct Obfuscator {
    solver: DivmodSolver,
}

impl Obfuscator {
    /// Creates an obfuscator, rejecting bounds that cannot terminate.
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            solver: DivmodSolver::new(config),
        })
    }

    pub fn config(&self) -> &SearchConfig {
        self.solver.config()
    }

    /// Encodes `text` into its obfuscated form.
    pub fn obfuscate(&self, text: &str) -> Result<Obfuscated> {
        self.obfuscate_with_stats(text).map(|(obfuscated, _)| obfuscated)
    }

    /// Encodes `text` and reports how the search went.
    pub fn obfuscate_with_stats(&self, text: &str) -> Result<(Obfuscated, ObfuscationStats)> {
        let charset = CharacterSet::from_text(text);
        let runs = rle::encode(text);
        debug!(charset = %charset, "extracted character set");
        debug!(runs = ?runs.iter().map(ToString::to_string).collect::<Vec<_>>(), "run-length encoded");

        let locations = map_locations(&charset, &runs)?;

        let mut stats = ObfuscationStats {
            input_length: text.chars().count(),
            runs: runs.len(),
            charset_len: charset.len(),
            divisor: 1,
            bound: 0,
            rounds: 0,
        };

        if locations.is_empty() {
            return Ok((Obfuscated::new(Vec::new(), 1, charset), stats));
        }

        let (divisor, solutions) = self.search(&locations, &mut stats)?;
        let integers = extract(&assign(divisor, &solutions)?);
        stats.divisor = divisor;

        info!(
            runs = stats.runs,
            divisor,
            bound = stats.bound,
            "obfuscated text"
        );
        Ok((Obfuscated::new(integers, divisor, charset), stats))
    }

    /// Solves every location from a common floor, widening the floor while
    /// the candidate sets share no divisor.
    fn search(
        &self,
        locations: &[Location],
        stats: &mut ObfuscationStats,
    ) -> Result<(u64, Vec<LocationWithSolutions>)> {
        let config = self.solver.config();
        let mut floor = config.initial_bound;
        loop {
            stats.rounds += 1;
            let solutions = locations
                .iter()
                .map(|&location| self.solver.solve_from(location, floor))
                .collect::<Result<Vec<_>>>()?;
            stats.bound = solutions.iter().map(|s| s.bound).max().unwrap_or(floor);

            match find_common_divisor(&solutions) {
                Ok(divisor) => return Ok((divisor, solutions)),
                Err(Error::NoCommonSolution { .. }) if config.widen_on_conflict => {
                    let Some(next) = config.next_bound(floor) else {
                        return Err(Error::NoCommonSolution {
                            locations: locations.len(),
                            bound: stats.bound,
                        });
                    };
                    debug!(from = floor, to = next, "no common divisor, widening bound");
                    floor = next;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Summary of one obfuscation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObfuscationStats {
    /// Number of characters in the input
    pub input_length: usize,
    /// Number of runs after run-length encoding
    pub runs: usize,
    /// Number of distinct characters
    pub charset_len: usize,
    /// Shared divisor chosen
    pub divisor: u64,
    /// Largest search bound any location was solved at
    pub bound: u64,
    /// Number of solve rounds over all locations
    pub rounds: usize,
}

impl ObfuscationStats {
    /// Integers emitted per input character, as a percentage.
    pub fn density(&self) -> f64 {
        if self.input_length == 0 {
            0.0
        } else {
            (self.runs as f64 / self.input_length as f64) * 100.0
        }
    }
}
