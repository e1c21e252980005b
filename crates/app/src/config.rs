//! Configuration for the treedump binary.
//!
//! The surface is deliberately tiny: exactly one positional argument, the
//! input file. Anything else is a usage error, reported by the caller with
//! the literal text `Argument Error`.

use std::path::PathBuf;

/// Complete configuration for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Input file whose byte frequencies are counted
    pub input_file: PathBuf,
}

impl Config {
    /// Parse configuration from command-line arguments (program name
    /// already stripped).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        match args {
            [path] => Ok(Self {
                input_file: PathBuf::from(path),
            }),
            _ => Err(format!(
                "expected exactly one input file, got {} arguments",
                args.len()
            )),
        }
    }
}
