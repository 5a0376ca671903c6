use anyhow::Context;
use divmod_obfuscator::{init_logging, obfuscate_file, Obfuscator};
use std::process::ExitCode;

/// Usage: divmod-obfuscator <path>
///
/// Prints the obfuscated layout of the file's contents to stdout.
fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    init_logging("warn").context("failed to initialize logging")?;

    let obfuscator = Obfuscator::default();
    let obfuscated = obfuscate_file(std::env::args_os().skip(1), &obfuscator)?;
    println!("{obfuscated}");
    Ok(())
}
