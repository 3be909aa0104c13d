//! Increment LUT generator
//!
//! Emits the player's frequency-to-increment table as a C array.

use clap::Parser;
use pmpcc::emit::c_source::write_c_array;
use pmpcc::lut;
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(name = "gen-increments")]
#[command(version = "0.1.0")]
#[command(about = "Generate the oscillator increment LUT as a C array", long_about = None)]
struct Args {
    /// Sampling rate (Hz)
    sr: f64,

    /// Root frequency (Hz)
    root: f64,

    /// LUT size (number of notes)
    nb: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let table = lut::increment_lut(args.sr, args.root, args.nb);
    let values: Vec<String> = table.iter().map(|v| v.to_string()).collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_c_array(&mut out, "uint16_t g_incr []", &values, 12)?;
    out.flush()?;

    Ok(())
}
