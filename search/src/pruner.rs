//! Area-bound pruning.
//!
//! A candidate that cannot strictly beat the best validated area is never
//! validated. The bound is necessary, not sufficient: surviving candidates
//! still go through full containment validation. Because the tracker only
//! replaces on a strictly larger area, skipping `area <= best` never
//! changes the final answer.

use maxrect_kernel::geometry::area::{Area, AreaMetric};

use crate::candidate::Candidate;
use crate::policy::PruneMode;

/// Pure gate in front of the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaPruner {
    metric: AreaMetric,
    mode: PruneMode,
}

impl AreaPruner {
    #[must_use]
    pub fn new(metric: AreaMetric, mode: PruneMode) -> Self {
        Self { metric, mode }
    }

    /// Candidate area under the configured metric.
    #[must_use]
    pub fn area(&self, candidate: &Candidate) -> Area {
        candidate.area(self.metric)
    }

    /// `true` means skip validation.
    #[must_use]
    pub fn prune(&self, candidate: &Candidate, best_so_far: Area) -> bool {
        match self.mode {
            PruneMode::AreaBound => self.area(candidate) <= best_so_far,
            PruneMode::Disabled => false,
        }
    }
}
