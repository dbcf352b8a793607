//! Best-so-far tracking.

use maxrect_kernel::geometry::area::Area;

use crate::candidate::Candidate;

/// Running maximum over accepted candidates.
///
/// Only a strictly greater area replaces the current best, so among
/// candidates of equal area the first one accepted is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaxTracker {
    best_area: Area,
    best: Option<Candidate>,
}

impl MaxTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer an accepted candidate. Returns `true` if it became the best.
    pub fn consider(&mut self, area: Area, candidate: Candidate) -> bool {
        if area > self.best_area {
            self.best_area = area;
            self.best = Some(candidate);
            true
        } else {
            false
        }
    }

    /// Largest accepted area, `0` if none.
    #[must_use]
    pub fn best_area(&self) -> Area {
        self.best_area
    }

    #[must_use]
    pub fn best(&self) -> Option<Candidate> {
        self.best
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
