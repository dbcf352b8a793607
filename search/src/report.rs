//! Search result and its canonical, digestible form.

use maxrect_kernel::geometry::area::Area;
use maxrect_kernel::proof::canon::{canonical_json_bytes, CanonError};
use maxrect_kernel::proof::hash::{canonical_hash, ContentHash};
use maxrect_kernel::proof::hash_domain::HashDomain;

use crate::candidate::Candidate;
use crate::policy::SearchPolicy;

/// Schema tag written into every report.
pub const REPORT_SCHEMA_VERSION: &str = "search_report.v1";

/// Effort counters. All start at zero and only grow during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchCounters {
    /// Candidates that reached the validator.
    pub candidates_tested: u64,
    /// Candidates skipped by the area bound.
    pub candidates_pruned: u64,
    /// Tested candidates that passed validation.
    pub candidates_accepted: u64,
    /// Edges inspected by the validator, one per validating `advance()`.
    pub validation_cycles: u64,
    /// `advance()` calls that made progress.
    pub advances: u64,
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// Largest contained area, `0` if nothing was accepted.
    pub max_area: Area,
    /// The first rectangle found with `max_area`.
    pub best: Option<Candidate>,
    pub vertices_loaded: usize,
    pub counters: SearchCounters,
    pub policy: SearchPolicy,
}

impl SearchReport {
    /// Whether any candidate was accepted.
    #[must_use]
    pub fn found(&self) -> bool {
        self.best.is_some()
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let c = &self.counters;
        serde_json::json!({
            "schema_version": REPORT_SCHEMA_VERSION,
            "max_area": self.max_area,
            "best": self.best.map(|b| b.to_json_value()),
            "found": self.found(),
            "vertices_loaded": self.vertices_loaded,
            "candidates_tested": c.candidates_tested,
            "candidates_pruned": c.candidates_pruned,
            "candidates_accepted": c.candidates_accepted,
            "validation_cycles": c.validation_cycles,
            "advances": c.advances,
            "policy": self.policy.to_json_value(),
        })
    }

    /// Sorted-key compact JSON.
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`] from canonicalization.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Digest over the canonical bytes in the report hash domain.
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`] from canonicalization.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchReport, &bytes))
    }
}
