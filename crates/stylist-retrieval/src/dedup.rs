//! Order-preserving, first-wins deduplication by candidate id.

use std::collections::HashSet;

use stylist_core::models::Candidate;

/// Accumulates candidates across pipeline stages, dropping repeats and
/// excluded ids. Insertion order is preserved, so candidates from earlier,
/// more specific stages keep their precedence.
#[derive(Debug, Default)]
pub struct Accumulator {
    candidates: Vec<Candidate>,
    seen: HashSet<String>,
    excluded: HashSet<String>,
}

impl Accumulator {
    pub fn with_exclusions(excluded: HashSet<String>) -> Self {
        Self {
            candidates: Vec::new(),
            seen: HashSet::new(),
            excluded,
        }
    }

    /// Returns how many of the batch were actually added.
    pub fn absorb(&mut self, batch: Vec<Candidate>) -> usize {
        let mut added = 0;
        for candidate in batch {
            if self.excluded.contains(&candidate.id) {
                continue;
            }
            if self.seen.insert(candidate.id.clone()) {
                self.candidates.push(candidate);
                added += 1;
            }
        }
        added
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn into_candidates(self) -> Vec<Candidate> {
        self.candidates
    }
}

/// One-shot form of [`Accumulator`] for callers outside the pipeline.
pub fn dedup_by_id(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut acc = Accumulator::default();
    acc.absorb(candidates);
    acc.into_candidates()
}
