use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while obfuscating or decoding text.
#[derive(Error, Debug)]
pub enum Error {
    /// The entry point takes exactly one path argument.
    #[error("expected exactly one argument (a file path), got {count}")]
    Argument { count: usize },

    #[error("could not read file at path {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No (x, y) pair exists for a location, even at the largest bound.
    #[error("no divmod solution for index {index} and count {count} within bound {max_bound}")]
    SolverExhausted { index: u64, count: u64, max_bound: u64 },

    /// The solution sets share no divisor.
    #[error("no divisor is shared by all {locations} locations within bound {bound}")]
    NoCommonSolution { locations: usize, bound: u64 },

    #[error("location {position} has no solution with divisor {divisor}")]
    NoCandidateForDivisor { position: usize, divisor: u64 },

    #[error("character {0:?} is not in the character set")]
    UnknownCharacter(char),

    #[error("quotient {quotient} of {value} is outside the character set of {len} characters")]
    InvalidQuotient { value: u64, quotient: u64, len: usize },

    #[error("divisor must be at least 1")]
    ZeroDivisor,

    #[error("malformed obfuscated layout: {0}")]
    Parse(String),

    #[error("invalid search configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
