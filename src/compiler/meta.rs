//! Score metadata and generator definitions

use crate::error::{Error, Result};

/// Waveform generators available in the playback engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    Tri,
    Sq,
    Saw,
    Noise32k,
    Noise93,
}

impl Generator {
    /// Parse a generator name as written in the `generators` directive
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "tri" => Ok(Self::Tri),
            "sq" => Ok(Self::Sq),
            "saw" => Ok(Self::Saw),
            "noise32k" => Ok(Self::Noise32k),
            "noise93" => Ok(Self::Noise93),
            _ => Err(Error::UnknownGenerator(name.to_string())),
        }
    }

    /// Directive-level name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tri => "tri",
            Self::Sq => "sq",
            Self::Saw => "saw",
            Self::Noise32k => "noise32k",
            Self::Noise93 => "noise93",
        }
    }

    /// Player callback symbol for this generator
    pub fn c_function(&self) -> &'static str {
        match self {
            Self::Tri => "gen_tri",
            Self::Sq => "gen_sq",
            Self::Saw => "gen_saw",
            Self::Noise32k => "gen_noise32k",
            Self::Noise93 => "gen_noise93",
        }
    }
}

/// Global score parameters, built once from the directive lines
#[derive(Debug, Clone)]
pub struct ScoreMetadata {
    /// Samples spanned by one tick (playback speed)
    pub samps_per_tick: u32,
    /// One generator per track, in track order
    pub generators: Vec<Generator>,
    /// Ticks in a whole note, basis for computed durations
    pub ticks_per_whole: u32,
    /// Ticks removed from a cut note and re-inserted as a pause
    pub cut_ticks: u32,
}

/// Parse a positive integer directive value
pub(crate) fn parse_positive(key: &'static str, value: &str) -> Result<u32> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}

/// Parse the `cut_ticks` value
///
/// Every cut inserts a `128 + cut_ticks` pause byte, so the value must fit
/// the pause length range.
pub(crate) fn parse_cut_ticks(value: &str) -> Result<u32> {
    match value.parse::<u32>() {
        Ok(n) if n <= 127 => Ok(n),
        _ => Err(Error::InvalidValue {
            key: "cut_ticks",
            value: value.to_string(),
        }),
    }
}

/// Parse the comma-separated `generators` list
pub(crate) fn parse_generators(value: &str) -> Result<Vec<Generator>> {
    value
        .split(',')
        .map(|name| Generator::from_name(name.trim()))
        .collect()
}
