use crate::charset::CharacterSet;
use crate::error::{Error, Result};
use crate::rle::Run;
use std::fmt;

/// A run whose character has been replaced by its character set index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub index: u64,
    pub count: u64,
}

impl Location {
    pub fn new(index: u64, count: u64) -> Self {
        Self { index, count }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.index, self.count)
    }
}

/// Maps every run onto its location, preserving run order.
pub fn map_locations(charset: &CharacterSet, runs: &[Run]) -> Result<Vec<Location>> {
    runs.iter()
        .map(|run| -> Result<Location> {
            let index = charset
                .index_of(run.character)
                .ok_or(Error::UnknownCharacter(run.character))?;
            Ok(Location::new(index as u64, run.count))
        })
        .collect()
}
