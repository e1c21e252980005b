//! treedump: print the deterministic Huffman code tree of a file.
//!
//! Usage: `treedump <file>`
//!
//! Output is the single-line pre-order dump of the code tree, with no
//! trailing newline; an empty file produces no output at all. Failures are
//! reported as literal text on stdout and nothing else:
//! - wrong argument count: `Argument Error`
//! - the file cannot be opened or read: `File Error`

mod config;

use config::Config;
use std::fs::File;
use std::io::{self, Write};
use treedump_core::{build_tree, write_tree, FrequencyTable, Result};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(_) => {
            print!("Argument Error");
            let _ = io::stdout().flush();
            return;
        }
    };

    if run(&config).is_err() {
        print!("File Error");
        let _ = io::stdout().flush();
    }
}

/// Count, build, and dump. No output is written before counting has
/// finished, so a mid-stream read failure never leaves partial output.
fn run(config: &Config) -> Result<()> {
    let file = File::open(&config.input_file)?;
    let table = FrequencyTable::from_reader(file)?;

    // All-zero table: empty input, empty output
    let Some(root) = build_tree(&table) else {
        return Ok(());
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_tree(&root, &mut out)?;
    out.flush()?;
    Ok(())
}
