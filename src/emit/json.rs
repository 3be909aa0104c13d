//! JSON serialization types for compiled scores

use crate::compiler::encode::BinaryTrack;
use crate::compiler::CompiledScore;
use serde::Serialize;

/// Top-level JSON structure for a compiled score
#[derive(Debug, Clone, Serialize)]
pub struct ScoreJson {
    /// Number of tracks
    pub track_count: usize,
    /// Samples per tick, echoed from the score metadata
    pub samps_per_tick: u32,
    /// Volume division exponent, ceil(log2(track_count))
    pub vol_div_exp: u32,
    /// Per-track byte streams
    pub tracks: Vec<TrackJson>,
}

/// JSON representation of one binary track
#[derive(Debug, Clone, Serialize)]
pub struct TrackJson {
    /// Assigned generator name
    pub generator: String,
    /// Byte stream length
    pub size: usize,
    /// Encoded bytes
    pub data: Vec<u8>,
}

impl ScoreJson {
    /// Create a ScoreJson from a compiled score
    pub fn new(score: &CompiledScore) -> Self {
        Self {
            track_count: score.track_count(),
            samps_per_tick: score.samps_per_tick(),
            vol_div_exp: score.vol_div_exp(),
            tracks: score.tracks.iter().map(TrackJson::from).collect(),
        }
    }
}

impl From<&BinaryTrack> for TrackJson {
    fn from(track: &BinaryTrack) -> Self {
        Self {
            generator: track.generator.name().to_string(),
            size: track.data.len(),
            data: track.data.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::meta::{Generator, ScoreMetadata};

    #[test]
    fn test_score_json_fields() {
        let score = CompiledScore {
            metadata: ScoreMetadata {
                samps_per_tick: 100,
                generators: vec![Generator::Tri, Generator::Sq],
                ticks_per_whole: 96,
                cut_ticks: 4,
            },
            tracks: vec![
                BinaryTrack {
                    generator: Generator::Tri,
                    data: vec![12, 10],
                },
                BinaryTrack {
                    generator: Generator::Sq,
                    data: vec![26, 36],
                },
            ],
        };

        let json = serde_json::to_value(ScoreJson::new(&score)).unwrap();
        assert_eq!(json["track_count"], 2);
        assert_eq!(json["samps_per_tick"], 100);
        assert_eq!(json["vol_div_exp"], 1);
        assert_eq!(json["tracks"][0]["generator"], "tri");
        assert_eq!(json["tracks"][0]["size"], 2);
        assert_eq!(json["tracks"][1]["data"][1], 36);
    }
}
