//! Score compiler - parses the plain-text pmpc notation and packs binary
//! tracks for the playback engine
//!
//! The pipeline runs in fixed stages: directive/body separation, cross-block
//! track merging, tokenization, duration resolution, binary encoding. Every
//! stage is a pure transform; the first failure aborts the compilation.

pub mod duration;
pub mod encode;
pub mod merge;
pub mod meta;
pub mod token;

use crate::error::{Error, Result};
use encode::BinaryTrack;
use meta::{Generator, ScoreMetadata};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Main compiler state
pub struct Compiler {
    samps_per_tick: Option<u32>,
    generators: Option<Vec<Generator>>,
    ticks_per_whole: Option<u32>,
    cut_ticks: Option<u32>,
    /// Score body lines, comments and directives stripped
    body: Vec<String>,
}

impl Compiler {
    pub fn new() -> Self {
        Self {
            samps_per_tick: None,
            generators: None,
            ticks_per_whole: None,
            cut_ticks: None,
            body: Vec::new(),
        }
    }

    /// Compile a score to its binary tracks
    pub fn compile<R: Read>(&mut self, input: R) -> Result<CompiledScore> {
        self.read_input(input)?;
        let metadata = self.take_metadata()?;

        let track_texts = merge::merge_tracks(&self.body)?;
        if track_texts.len() != metadata.generators.len() {
            return Err(Error::GeneratorCountMismatch {
                found: track_texts.len(),
                expected: metadata.generators.len(),
            });
        }

        let mut tracks = Vec::with_capacity(track_texts.len());
        for (text, &generator) in track_texts.iter().zip(&metadata.generators) {
            let resolved = token::tokenize(text)?
                .into_iter()
                .map(|t| duration::resolve(t, metadata.ticks_per_whole))
                .collect::<Result<Vec<_>>>()?;
            let data = encode::encode_track(&resolved, &metadata)?;
            tracks.push(BinaryTrack { generator, data });
        }

        Ok(CompiledScore { metadata, tracks })
    }

    /// Compile a score file
    pub fn compile_file(&mut self, path: &Path) -> Result<CompiledScore> {
        let file = File::open(path).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to open '{}': {}", path.display(), e),
            ))
        })?;
        self.compile(file)
    }

    /// Read raw score text, collecting directives and body lines
    fn read_input<R: Read>(&mut self, input: R) -> Result<()> {
        let reader = BufReader::new(input);

        for line in reader.lines() {
            let line = line?;
            match line.trim().bytes().next() {
                Some(b'#') => continue,
                Some(b'>') => self.parse_directive(line.trim())?,
                _ => self.body.push(line),
            }
        }

        Ok(())
    }

    /// Parse a `>key: value` directive line
    fn parse_directive(&mut self, line: &str) -> Result<()> {
        let rest = line[1..].trim_start();
        let (key, value) = rest
            .split_once(':')
            .ok_or_else(|| Error::MalformedDirective(line.to_string()))?;
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() || value.is_empty() {
            return Err(Error::MalformedDirective(line.to_string()));
        }

        match key {
            "samps_per_tick" => set_once(
                &mut self.samps_per_tick,
                key,
                meta::parse_positive("samps_per_tick", value)?,
            ),
            "generators" => set_once(&mut self.generators, key, meta::parse_generators(value)?),
            "ticks_per_whole" => set_once(
                &mut self.ticks_per_whole,
                key,
                meta::parse_positive("ticks_per_whole", value)?,
            ),
            "cut_ticks" => set_once(&mut self.cut_ticks, key, meta::parse_cut_ticks(value)?),
            _ => Err(Error::UnknownKey(key.to_string())),
        }
    }

    /// All four directives must have been seen exactly once
    fn take_metadata(&mut self) -> Result<ScoreMetadata> {
        match (
            self.samps_per_tick,
            self.generators.take(),
            self.ticks_per_whole,
            self.cut_ticks,
        ) {
            (Some(samps_per_tick), Some(generators), Some(ticks_per_whole), Some(cut_ticks)) => {
                Ok(ScoreMetadata {
                    samps_per_tick,
                    generators,
                    ticks_per_whole,
                    cut_ticks,
                })
            }
            _ => Err(Error::MissingMetadata),
        }
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

fn set_once<T>(slot: &mut Option<T>, key: &str, value: T) -> Result<()> {
    if slot.is_some() {
        return Err(Error::DuplicateKey(key.to_string()));
    }
    *slot = Some(value);
    Ok(())
}

/// Result of a successful compilation
#[derive(Debug, Clone)]
pub struct CompiledScore {
    pub metadata: ScoreMetadata,
    pub tracks: Vec<BinaryTrack>,
}

impl CompiledScore {
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    pub fn samps_per_tick(&self) -> u32 {
        self.metadata.samps_per_tick
    }

    /// Volume division exponent: ceil(log2(track count))
    ///
    /// The player shifts each track's sample right by this amount so the
    /// mixed output cannot overflow the accumulator.
    pub fn vol_div_exp(&self) -> u32 {
        match self.tracks.len() {
            0 | 1 => 0,
            n => n.next_power_of_two().trailing_zeros(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn compiled(tracks: usize) -> CompiledScore {
        CompiledScore {
            metadata: ScoreMetadata {
                samps_per_tick: 100,
                generators: vec![Generator::Tri; tracks],
                ticks_per_whole: 96,
                cut_ticks: 4,
            },
            tracks: (0..tracks)
                .map(|_| BinaryTrack {
                    generator: Generator::Tri,
                    data: Vec::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_vol_div_exp() {
        assert_eq!(compiled(1).vol_div_exp(), 0);
        assert_eq!(compiled(2).vol_div_exp(), 1);
        assert_eq!(compiled(3).vol_div_exp(), 2);
        assert_eq!(compiled(4).vol_div_exp(), 2);
        assert_eq!(compiled(5).vol_div_exp(), 3);
    }

    #[test]
    fn test_directive_parsing() {
        let mut compiler = Compiler::new();
        compiler
            .read_input(Cursor::new(
                "> samps_per_tick: 100\n>generators: tri\n> ticks_per_whole: 96\n> cut_ticks: 4\n",
            ))
            .unwrap();
        let metadata = compiler.take_metadata().unwrap();
        assert_eq!(metadata.samps_per_tick, 100);
        assert_eq!(metadata.generators, vec![Generator::Tri]);
        assert_eq!(metadata.ticks_per_whole, 96);
        assert_eq!(metadata.cut_ticks, 4);
    }

    #[test]
    fn test_malformed_directive() {
        let mut compiler = Compiler::new();
        assert!(matches!(
            compiler.read_input(Cursor::new("> samps_per_tick 100\n")),
            Err(Error::MalformedDirective(_))
        ));
    }

    #[test]
    fn test_comments_and_body_split() {
        let mut compiler = Compiler::new();
        compiler
            .read_input(Cursor::new("# a comment\nc1-10\n  # indented comment\n"))
            .unwrap();
        assert_eq!(compiler.body, vec!["c1-10"]);
    }
}
