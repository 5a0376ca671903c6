//! # Divmod Obfuscator - Integer Encoding for Text
//!
//! Turns a block of text (typically ASCII art) into a flat sequence of
//! integers, one shared divisor and a character table. Dividing each integer
//! by the divisor gives a quotient that indexes the character table and a
//! remainder that is the length of a run of that character.
//!
//! The pipeline:
//! 1. **Character set**: unique characters in first-occurrence order
//! 2. **Run-length encoding**: maximal runs of one character
//! 3. **Locations**: each run as (character index, run length)
//! 4. **Divmod search**: every (x, y) with `x / y == index` and `x % y == count`
//! 5. **Common divisor**: the smallest y every location can use
//! 6. **Extraction**: one x per location for that y
//!
//! ## Example
//!
//! ```
//! use divmod_obfuscator::Obfuscator;
//!
//! let obfuscated = Obfuscator::default().obfuscate("abaaacc").unwrap();
//! assert_eq!(obfuscated.integers, vec![1, 5, 3, 10]);
//! assert_eq!(obfuscated.divisor, 4);
//!
//! // Decodes back to the original text
//! assert_eq!(obfuscated.decode().unwrap(), "abaaacc");
//! ```
//!
//! ## Performance
//!
//! - O(1) per location for any search bound: candidate sets are stored as
//!   divisor ranges and dividends are computed on demand
//! - The bound grows geometrically and is capped, so the search always ends

mod charset;
mod cli;
mod common;
mod config;
mod error;
mod location;
mod logging;
mod obfuscated;
mod obfuscator;
mod rle;
mod solver;


pub use charset::CharacterSet;
pub use cli::{obfuscate_file, parse_args, read_input};
pub use common::{assign, extract, find_common_divisor};
pub use config::SearchConfig;
pub use error::{Error, Result};
pub use location::{map_locations, Location};
pub use logging::{init_logging, LogError};
pub use obfuscated::{Obfuscated, MAX_DECODED_CHARS};
pub use obfuscator::{ObfuscationStats, Obfuscator};
pub use rle::{encode as run_length_encode, expand as run_length_expand, Run, RunExpander};
pub use solver::{
    candidates_within, DivmodSolver, LocationWithSolution, LocationWithSolutions, SolutionCandidate,
};
