//! Cross-block track merging
//!
//! A score body may be split into blocks for readability. Line i of every
//! block belongs to track i; merging joins the blocks back into one token
//! stream per track.

use crate::error::{Error, Result};

/// Merge body blocks into one text line per track
///
/// Blocks are separated by runs of blank lines (whitespace-only lines count
/// as blank). The first block fixes the track count; every later block must
/// have the same number of lines.
pub fn merge_tracks(body: &[String]) -> Result<Vec<String>> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in body {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line.trim_end());
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    let mut blocks = blocks.into_iter();
    let Some(first) = blocks.next() else {
        return Ok(Vec::new());
    };

    let mut tracks: Vec<String> = first.into_iter().map(str::to_string).collect();
    for (k, block) in blocks.enumerate() {
        if block.len() != tracks.len() {
            return Err(Error::TrackCountMismatch {
                block: k + 1,
                found: block.len(),
                expected: tracks.len(),
            });
        }
        for (track, line) in tracks.iter_mut().zip(block) {
            track.push(' ');
            track.push_str(line);
        }
    }

    Ok(tracks)
}
