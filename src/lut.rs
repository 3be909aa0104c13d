//! Oscillator increment LUT generation
//!
//! The player advances each track's wave position by a per-note phase
//! increment into a 16-bit accumulator; this table maps chromatic note
//! indices to those increments.

/// Equal-temperament semitone ratio, 2^(1/12)
pub const SEMITONE_RATIO: f64 = 1.0594630943592952645618252949463417007792043174941856;

/// Phase accumulator span (2^16)
const PHASE_SPACE: f64 = 65536.0;

/// Build the frequency-to-increment table
///
/// Entry i is the rounded 16-bit phase increment for the note i semitones
/// above `root_freq` at the given sampling rate.
pub fn increment_lut(sample_rate: f64, root_freq: f64, count: usize) -> Vec<u16> {
    let mut table = Vec::with_capacity(count);
    let mut freq = root_freq;
    for _ in 0..count {
        table.push((PHASE_SPACE / (sample_rate / freq)).round() as u16);
        freq *= SEMITONE_RATIO;
    }
    table
}
