/*!
 * Sequential merging of subtitle tracks.
 *
 * Each input track is shifted as a whole so that it starts no earlier than
 * the end of everything merged before it plus a silence buffer. Timing inside
 * a track is never touched. The merged track is renumbered 1..N at the end.
 */

use log::debug;

use crate::subtitle::Subtitle;

/// Joins subtitle sequences end to end
#[derive(Debug, Clone, Copy)]
pub struct SubtitleMerger {
    buffer_ms: u64,
}

impl SubtitleMerger {
    /// Create a merger that keeps `buffer_ms` of silence between tracks
    pub fn new(buffer_ms: u64) -> Self {
        Self { buffer_ms }
    }

    pub fn buffer_ms(&self) -> u64 {
        self.buffer_ms
    }

    /// Offset for a track whose first entry starts at `first_start_ms`
    fn offset_for(&self, current_end_ms: u64, first_start_ms: u64) -> u64 {
        if current_end_ms == 0 {
            return 0;
        }
        current_end_ms
            .saturating_add(self.buffer_ms)
            .saturating_sub(first_start_ms)
    }

    /// Merge tracks in order. Empty tracks contribute nothing.
    pub fn merge(&self, sequences: Vec<Vec<Subtitle>>) -> Vec<Subtitle> {
        let mut merged: Vec<Subtitle> = Vec::with_capacity(sequences.iter().map(Vec::len).sum());
        let mut current_end_ms = 0;

        for (track, sequence) in sequences.into_iter().enumerate() {
            let Some(first_start_ms) = sequence.first().map(Subtitle::start_ms) else {
                debug!("Track {} is empty, skipping", track + 1);
                continue;
            };

            let offset = self.offset_for(current_end_ms, first_start_ms);
            debug!("Track {}: {} entries, offset {} ms", track + 1, sequence.len(), offset);

            merged.extend(sequence.into_iter().map(|sub| sub.shifted(offset)));
            current_end_ms = merged.last().map_or(current_end_ms, Subtitle::end_ms);
        }

        merged
            .into_iter()
            .enumerate()
            .map(|(i, sub)| sub.renumbered(i + 1))
            .collect()
    }
}

/// Merge `sequences` keeping `buffer_ms` between consecutive tracks
pub fn merge(sequences: Vec<Vec<Subtitle>>, buffer_ms: u64) -> Vec<Subtitle> {
    SubtitleMerger::new(buffer_ms).merge(sequences)
}
