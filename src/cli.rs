//! Thin I/O layer between the command line and the obfuscator.

use crate::error::{Error, Result};
use crate::obfuscated::Obfuscated;
use crate::obfuscator::Obfuscator;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Extracts the single input path from the arguments (program name excluded).
pub fn parse_args<I, T>(args: I) -> Result<PathBuf>
where
    I: IntoIterator<Item = T>,
    T: Into<PathBuf>,
{
    let mut args: Vec<PathBuf> = args.into_iter().map(Into::into).collect();
    match args.len() {
        1 => Ok(args.remove(0)),
        count => Err(Error::Argument { count }),
    }
}

/// Reads the whole file at `path` as text.
pub fn read_input(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = text.len(), "parsing file");
    Ok(text)
}

/// Parses the arguments, reads the file and obfuscates its contents.
pub fn obfuscate_file<I, T>(args: I, obfuscator: &Obfuscator) -> Result<Obfuscated>
where
    I: IntoIterator<Item = T>,
    T: Into<PathBuf>,
{
    let path = parse_args(args)?;
    let text = read_input(&path)?;
    obfuscator.obfuscate(&text)
}
