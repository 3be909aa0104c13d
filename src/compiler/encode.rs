//! Binary track encoding
//!
//! A track is a flat byte stream the player walks directly: a pause is a
//! single byte `128 + length`, a note is a pitch byte (chromatic offset +
//! 12 * octave, always below 128) followed by a length byte. A cut token is
//! shortened by `cut_ticks` and followed by a compensating pause byte so
//! measure totals stay intact.

use super::duration::ResolvedToken;
use super::meta::{Generator, ScoreMetadata};
use super::token::TokenKind;
use crate::error::{Error, Result};

/// Pause discriminator: bytes at or above this are pauses, below are pitches
pub const PAUSE_BASE: u8 = 128;

/// Maximum pause length in ticks
pub const MAX_PAUSE_TICKS: i64 = 127;

/// Maximum note length in ticks
pub const MAX_NOTE_TICKS: i64 = 255;

/// Encoded byte stream of one voice, bound to its waveform generator
#[derive(Debug, Clone)]
pub struct BinaryTrack {
    pub generator: Generator,
    pub data: Vec<u8>,
}

/// Chromatic offset of a pitch letter; uppercase selects the sharp variant
fn pitch_offset(letter: char) -> Option<u8> {
    let offset = match letter {
        'c' => 0,
        'C' => 1,
        'd' => 2,
        'D' => 3,
        'e' => 4,
        'E' => 5,
        'f' => 5,
        'F' => 6,
        'g' => 7,
        'G' => 8,
        'a' => 9,
        'A' => 10,
        'b' => 11,
        'B' => 12,
        _ => return None,
    };
    Some(offset)
}

/// Encode one track's resolved tokens into its byte stream
pub fn encode_track(tokens: &[ResolvedToken], metadata: &ScoreMetadata) -> Result<Vec<u8>> {
    let mut data = Vec::new();

    for resolved in tokens {
        let token = &resolved.token;
        let mut length = i64::from(resolved.ticks);
        if token.cut {
            length -= i64::from(metadata.cut_ticks);
        }
        let out_of_range = || Error::InvalidLength {
            length,
            token: token.text.clone(),
        };

        match token.kind {
            TokenKind::Pause => {
                if !(0..=MAX_PAUSE_TICKS).contains(&length) {
                    return Err(out_of_range());
                }
                data.push(PAUSE_BASE + length as u8);
            }
            TokenKind::Note { letter, octave } => {
                if !(0..=MAX_NOTE_TICKS).contains(&length) {
                    return Err(out_of_range());
                }
                let offset = pitch_offset(letter)
                    .ok_or_else(|| Error::InvalidToken(token.text.clone()))?;
                data.push(offset + 12 * octave);
                data.push(length as u8);
            }
        }

        if token.cut {
            // cut_ticks <= 127 is enforced at directive parsing
            data.push(PAUSE_BASE + metadata.cut_ticks as u8);
        }
    }

    Ok(data)
}
