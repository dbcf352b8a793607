//! Search policy: the run's fixed resource bounds and strategy switches.
//!
//! A policy is validated once, when the controller is built. It cannot be
//! changed during a run; a different policy needs a new controller.

use maxrect_kernel::geometry::area::AreaMetric;
use maxrect_kernel::geometry::vertex::CoordWidth;
use maxrect_kernel::proof::canon::{canonical_json_bytes, CanonError};
use maxrect_kernel::proof::hash::{canonical_hash, ContentHash};
use maxrect_kernel::proof::hash_domain::HashDomain;

use crate::error::PolicyError;

/// Smallest accepted vertex capacity (one rectangle).
pub const MIN_CAPACITY: usize = 4;
/// Largest accepted vertex capacity.
pub const MAX_CAPACITY: usize = 8192;

/// Resource bounds and strategy for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Fixed vertex capacity of the store.
    pub capacity: usize,
    /// Coordinate width `W` in bits.
    pub coord_width_bits: u8,
    /// Which corner pairs become candidates.
    pub candidate_mode: CandidateMode,
    /// How candidate area is measured.
    pub area_metric: AreaMetric,
    /// Whether the area bound gates validation.
    pub prune_mode: PruneMode,
    /// Where the edge-crossing scan starts.
    pub edge_scan: EdgeScanStart,
    /// Whether the validator classifies the rectangle centre after the
    /// crossing scan.
    pub centre_check: CentreCheck,
}

impl SearchPolicy {
    /// Check every bound.
    ///
    /// # Errors
    ///
    /// [`PolicyError::CapacityOutOfRange`] or
    /// [`PolicyError::CoordWidthOutOfRange`].
    pub fn validate(&self) -> Result<(), PolicyError> {
        if !(MIN_CAPACITY..=MAX_CAPACITY).contains(&self.capacity) {
            return Err(PolicyError::CapacityOutOfRange {
                capacity: self.capacity,
                min: MIN_CAPACITY,
                max: MAX_CAPACITY,
            });
        }
        self.coord_width()?;
        Ok(())
    }

    /// The coordinate width as a checked type.
    ///
    /// # Errors
    ///
    /// [`PolicyError::CoordWidthOutOfRange`] if `coord_width_bits` is unsupported.
    pub fn coord_width(&self) -> Result<CoordWidth, PolicyError> {
        CoordWidth::new(self.coord_width_bits).ok_or(PolicyError::CoordWidthOutOfRange {
            bits: self.coord_width_bits,
        })
    }

    /// JSON echo of the policy for reports.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "area_metric": self.area_metric.as_str(),
            "candidate_mode": self.candidate_mode.as_str(),
            "capacity": self.capacity,
            "coord_width_bits": self.coord_width_bits,
            "edge_scan": self.edge_scan.as_str(),
            "centre_check": self.centre_check.as_str(),
            "prune_mode": self.prune_mode.as_str(),
            "schema_version": "search_policy.v1",
        })
    }

    /// Digest of the canonical policy snapshot.
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`]; the snapshot holds only integers and
    /// strings, so this does not fail in practice.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(canonical_hash(HashDomain::SearchPolicy, &bytes))
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            capacity: 1024,
            coord_width_bits: CoordWidth::DEFAULT.bits(),
            candidate_mode: CandidateMode::CoordinateGrid,
            area_metric: AreaMetric::Continuous,
            prune_mode: PruneMode::AreaBound,
            edge_scan: EdgeScanStart::FromFirst,
            centre_check: CentreCheck::Enabled,
        }
    }
}

/// Candidate generation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CandidateMode {
    /// Every x-coordinate pair crossed with every y-coordinate pair, both
    /// drawn from vertex index pairs `i < j`. O(N^4) emissions worst case.
    #[default]
    CoordinateGrid,
    /// Every vertex pair `i < j` as opposite rectangle corners. O(N^2).
    VertexCorners,
}

impl CandidateMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CoordinateGrid => "coordinate_grid",
            Self::VertexCorners => "vertex_corners",
        }
    }
}

/// Area-bound pruning switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PruneMode {
    /// Skip validation when the candidate cannot beat the best area.
    #[default]
    AreaBound,
    /// Validate every candidate. Same answer, more work.
    Disabled,
}

impl PruneMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AreaBound => "area_bound",
            Self::Disabled => "disabled",
        }
    }
}

/// Starting edge of the validator's edge-crossing scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeScanStart {
    /// Always start at edge 0.
    #[default]
    FromFirst,
    /// Start at the edge that rejected the previous candidate, wrapping
    /// around. Neighbouring candidates tend to be bitten by the same edge.
    ResumeAtLastCrossing,
}

impl EdgeScanStart {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FromFirst => "from_first",
            Self::ResumeAtLastCrossing => "resume_at_last_crossing",
        }
    }
}

/// Third validation stage switch.
///
/// Corner and crossing checks alone accept a rectangle that exactly fills
/// a concave notch. The check rejects it at the cost of one more edge scan
/// per candidate that survives the crossing check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CentreCheck {
    #[default]
    Enabled,
    /// Corners and crossings only. A rectangle filling a notch is
    /// accepted.
    Disabled,
}

impl CentreCheck {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }
}
