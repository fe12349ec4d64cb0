//! Join barrier for resolving a search page into full artworks.
//!
//! A search page yields references; each is fetched separately and the page
//! is only usable once every slot is filled. Resolution is all-or-nothing: the
//! coordinator drops the whole barrier on the first failed item.

use crate::domain::{Artwork, ResultSet};

/// Progress after filling one slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    Pending { remaining: usize },
    Complete(ResultSet),
}

/// Order-preserving barrier over one search page.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResolution {
    seq: u64,
    total: usize,
    slots: Vec<Option<Artwork>>,
    remaining: usize,
}

impl SearchResolution {
    #[must_use]
    pub fn new(seq: u64, total: usize, size: usize) -> Self {
        Self {
            seq,
            total,
            slots: vec![None; size],
            remaining: size,
        }
    }

    /// Sequence number of the search page this barrier belongs to.
    #[must_use]
    pub const fn seq(&self) -> u64 {
        self.seq
    }

    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    /// Stores the artwork for `index`.
    ///
    /// Out-of-range indices and repeated fills are ignored. Once the last slot
    /// is filled the artworks are returned in reference order.
    pub fn fill(&mut self, index: usize, artwork: Artwork) -> Progress {
        if let Some(slot) = self.slots.get_mut(index) {
            if slot.is_none() {
                *slot = Some(artwork);
                self.remaining -= 1;
            }
        }

        if self.remaining > 0 {
            return Progress::Pending { remaining: self.remaining };
        }

        let artworks = self.slots.iter().flatten().cloned().collect();
        Progress::Complete(ResultSet::new(artworks, self.total))
    }
}
