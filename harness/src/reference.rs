//! Direct, non-stepped reference search and a brute-force containment
//! oracle.
//!
//! [`reference_search`] walks the same candidate order as the controller
//! but validates each candidate in one call and never prunes, so it
//! shares no state machine with the engine. [`sampled_contains`] checks a
//! rectangle point by point on the half-unit lattice and is only meant for
//! small coordinates.

use maxrect_kernel::geometry::area::Area;
use maxrect_kernel::geometry::vertex::Vertex;
use maxrect_kernel::polygon::{PointClass, PolygonModel, ShapeError};
use maxrect_search::candidate::{Candidate, CandidateEnumerator, Corner};
use maxrect_search::policy::{CentreCheck, SearchPolicy};

/// Outcome of a reference search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceResult {
    pub max_area: Area,
    pub best: Option<Candidate>,
    /// Candidates enumerated.
    pub candidates: u64,
    /// Candidates found contained.
    pub contained: u64,
}

/// Largest contained candidate, checking every candidate.
///
/// Uses the policy's candidate mode, area metric and centre check;
/// pruning and edge-scan settings do not apply.
///
/// # Errors
///
/// [`ShapeError`] if `vertices` is not a rectilinear polygon.
pub fn reference_search(
    vertices: &[Vertex],
    policy: &SearchPolicy,
) -> Result<ReferenceResult, ShapeError> {
    let model = PolygonModel::from_vertices(vertices)?;
    let mut enumerator = CandidateEnumerator::new(policy.candidate_mode);
    let mut result = ReferenceResult {
        max_area: 0,
        best: None,
        candidates: 0,
        contained: 0,
    };
    for candidate in enumerator.iter(model.vertices()) {
        result.candidates += 1;
        let accepted = match policy.centre_check {
            CentreCheck::Enabled => contains(&model, &candidate),
            CentreCheck::Disabled => corners_and_crossings_clear(&model, &candidate),
        };
        if !accepted {
            continue;
        }
        result.contained += 1;
        let area = candidate.area(policy.area_metric);
        if area > result.max_area {
            result.max_area = area;
            result.best = Some(candidate);
        }
    }
    Ok(result)
}

/// Corners contained, no edge inside, centre inside.
#[must_use]
pub fn contains(model: &PolygonModel, c: &Candidate) -> bool {
    if !corners_and_crossings_clear(model, c) {
        return false;
    }
    let (cx, cy) = c.doubled_centre();
    model.classify_scaled(cx, cy, 1) != PointClass::Outside
}

/// Corners contained and no edge inside, without the centre check.
#[must_use]
pub fn corners_and_crossings_clear(model: &PolygonModel, c: &Candidate) -> bool {
    Corner::ALL.iter().all(|&corner| {
        let (x, y) = c.corner(corner);
        model.point_inside(x, y).is_contained()
    }) && model.first_crossing(c.x1, c.x2, c.y1, c.y2).is_none()
}

/// Whether every lattice point of `c` at half-unit spacing is inside or on
/// the polygon.
///
/// Each unit cell of a polygon with integer vertices is wholly inside or
/// wholly outside, so testing cell centres plus the integer points on
/// the boundary decides containment exactly. Cost grows with the area.
#[must_use]
pub fn sampled_contains(model: &PolygonModel, c: &Candidate) -> bool {
    let (x_lo, x_hi) = (u64::from(c.x1) * 2, u64::from(c.x2) * 2);
    let (y_lo, y_hi) = (u64::from(c.y1) * 2, u64::from(c.y2) * 2);
    (x_lo..=x_hi).all(|px| {
        (y_lo..=y_hi).all(|py| model.classify_scaled(px, py, 1).is_contained())
    })
}
