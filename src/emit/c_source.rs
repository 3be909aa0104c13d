//! C source emission
//!
//! Reproduces the array layout the playback firmware includes directly:
//! summary `#define`s, one `prog_uint8_t` data array per track, then the
//! data/size/generator index arrays.

use crate::compiler::CompiledScore;
use std::io::{self, Write};

/// Writes a compiled score as C arrays
pub struct CSourceWriter<W: Write> {
    out: W,
}

impl<W: Write> CSourceWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the summary defines, per-track data arrays and index arrays
    pub fn write_score(&mut self, score: &CompiledScore) -> io::Result<()> {
        writeln!(self.out, "#define TRACKS_SZ\t{}", score.track_count())?;
        writeln!(self.out, "#define SAMPS_PER_TICK\t{}", score.samps_per_tick())?;
        writeln!(self.out, "#define VOL_DIV_EXP\t{}", score.vol_div_exp())?;
        writeln!(self.out)?;

        let mut names = Vec::new();
        let mut sizes = Vec::new();
        let mut generators = Vec::new();
        for (k, track) in score.tracks.iter().enumerate() {
            let name = format!("g_track_data{}", k);
            let values: Vec<String> = track.data.iter().map(|b| b.to_string()).collect();
            write_c_array(
                &mut self.out,
                &format!("static prog_uint8_t {} []", name),
                &values,
                16,
            )?;
            sizes.push(track.data.len().to_string());
            generators.push(track.generator.c_function().to_string());
            names.push(name);
        }

        write_c_array(&mut self.out, "static uint8_t* g_tracks_datas []", &names, 8)?;
        write_c_array(&mut self.out, "static uint16_t g_tracks_sizes []", &sizes, 8)?;
        write_c_array(
            &mut self.out,
            "static uint8_t (*g_tracks_generators [])(struct track*)",
            &generators,
            8,
        )?;

        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Write one C array literal, `per_line` values per line
///
/// The opening brace stays on the declaration line, values are tab-indented
/// and the closing brace gets its own line.
pub fn write_c_array<W: Write>(
    out: &mut W,
    decl: &str,
    values: &[String],
    per_line: usize,
) -> io::Result<()> {
    write!(out, "{} = {{", decl)?;
    let count = values.len();
    for (i, value) in values.iter().enumerate() {
        if i % per_line == 0 && i < count - 1 {
            write!(out, "\n\t")?;
        }
        write!(out, "{}", value)?;
        if i < count - 1 {
            write!(out, ", ")?;
        }
    }
    write!(out, "\n}};\n")?;
    Ok(())
}
