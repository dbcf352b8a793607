//! Named fixture polygons with known answers.
//!
//! Every fixture is a closed rectilinear vertex list plus the policy it is
//! meant to run under and the expected maximum area. Fixtures are data
//! only; the runner decides how to drive them.

use maxrect_kernel::geometry::area::{Area, AreaMetric};
use maxrect_kernel::geometry::vertex::{Coord, Vertex};
use maxrect_kernel::proof::canon::{canonical_json_bytes, CanonError};
use maxrect_kernel::proof::hash::{canonical_hash, ContentHash};
use maxrect_kernel::proof::hash_domain::HashDomain;
use maxrect_search::policy::{CandidateMode, SearchPolicy};

/// A polygon with its run policy and expected result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub name: &'static str,
    pub vertices: Vec<Vertex>,
    pub policy: SearchPolicy,
    pub expected_max_area: Area,
}

impl Fixture {
    /// Digest of the ordered vertex list.
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`].
    pub fn vertices_digest(&self) -> Result<ContentHash, CanonError> {
        vertices_digest(&self.vertices)
    }
}

/// Digest of an ordered vertex list as `[[x, y], ...]` canonical JSON.
///
/// # Errors
///
/// Propagates [`CanonError`]; coordinates are integers so this does not
/// fail in practice.
pub fn vertices_digest(vertices: &[Vertex]) -> Result<ContentHash, CanonError> {
    let value = serde_json::Value::Array(
        vertices
            .iter()
            .map(|v| serde_json::json!([v.x, v.y]))
            .collect(),
    );
    let bytes = canonical_json_bytes(&value)?;
    Ok(canonical_hash(HashDomain::PolygonVertices, &bytes))
}

/// Names accepted by [`by_name`], in a stable order.
pub const FIXTURE_NAMES: &[&str] = &[
    "square",
    "l_shape",
    "notch",
    "u_notch",
    "tile_sample",
    "staircase_4",
];

/// Look up a fixture by name.
#[must_use]
pub fn by_name(name: &str) -> Option<Fixture> {
    let default = SearchPolicy::default;
    let fixture = match name {
        "square" => Fixture {
            name: "square",
            vertices: square(),
            policy: default(),
            expected_max_area: 16,
        },
        "l_shape" => Fixture {
            name: "l_shape",
            vertices: l_shape(),
            policy: default(),
            expected_max_area: 18,
        },
        "notch" => Fixture {
            name: "notch",
            vertices: notch(),
            policy: default(),
            expected_max_area: 32,
        },
        "u_notch" => Fixture {
            name: "u_notch",
            vertices: u_notch(),
            policy: default(),
            expected_max_area: 10,
        },
        "tile_sample" => Fixture {
            name: "tile_sample",
            vertices: tile_sample(),
            policy: tile_policy(),
            expected_max_area: 24,
        },
        "staircase_4" => Fixture {
            name: "staircase_4",
            vertices: staircase(&[(1, 1); 4]),
            policy: default(),
            expected_max_area: 6,
        },
        _ => return None,
    };
    Some(fixture)
}

/// Every fixture in [`FIXTURE_NAMES`] order.
#[must_use]
pub fn all() -> Vec<Fixture> {
    FIXTURE_NAMES.iter().filter_map(|n| by_name(n)).collect()
}

fn from_points(points: &[(Coord, Coord)]) -> Vec<Vertex> {
    points.iter().copied().map(Vertex::from).collect()
}

/// 4 x 4 square.
#[must_use]
pub fn square() -> Vec<Vertex> {
    from_points(&[(0, 0), (4, 0), (4, 4), (0, 4)])
}

/// L with two 6 x 3 arms; the horizontal arm is enumerated first.
#[must_use]
pub fn l_shape() -> Vec<Vertex> {
    from_points(&[(0, 0), (6, 0), (6, 3), (3, 3), (3, 6), (0, 6)])
}

/// 8 x 8 square with a 2 x 4 notch cut down from the top edge.
#[must_use]
pub fn notch() -> Vec<Vertex> {
    from_points(&[
        (0, 0),
        (8, 0),
        (8, 8),
        (5, 8),
        (5, 4),
        (3, 4),
        (3, 8),
        (0, 8),
    ])
}

/// A U whose gap `[1, 5] x [1, 10]` has every corner on the boundary and
/// no edge inside it.
#[must_use]
pub fn u_notch() -> Vec<Vertex> {
    from_points(&[
        (0, 0),
        (6, 0),
        (6, 10),
        (5, 10),
        (5, 1),
        (1, 1),
        (1, 10),
        (0, 10),
    ])
}

/// Tile-floor sample measured in inclusive tiles between vertex corners.
#[must_use]
pub fn tile_sample() -> Vec<Vertex> {
    from_points(&[
        (7, 1),
        (11, 1),
        (11, 7),
        (9, 7),
        (9, 5),
        (2, 5),
        (2, 3),
        (7, 3),
    ])
}

/// Policy matching the tile-floor interpretation.
#[must_use]
pub fn tile_policy() -> SearchPolicy {
    SearchPolicy {
        candidate_mode: CandidateMode::VertexCorners,
        area_metric: AreaMetric::InclusiveTiles,
        ..SearchPolicy::default()
    }
}

/// Descending staircase from `(0, 0)`.
///
/// `steps` lists `(width, height)` of each step from right to left; all
/// must be non-zero. The base spans the total width and the left wall the
/// total height. Produces `2 + 2 * steps.len()` vertices.
#[must_use]
pub fn staircase(steps: &[(Coord, Coord)]) -> Vec<Vertex> {
    let total_width: Coord = steps.iter().map(|&(w, _)| w).sum();
    let mut vertices = vec![Vertex::new(0, 0), Vertex::new(total_width, 0)];
    let (mut x, mut y) = (total_width, 0);
    for &(w, h) in steps {
        y += h;
        vertices.push(Vertex::new(x, y));
        x -= w;
        vertices.push(Vertex::new(x, y));
    }
    vertices
}

/// Histogram of columns on a common base, listed left to right as
/// `(width, height)`.
///
/// Widths and heights must be non-zero and adjacent heights must differ,
/// otherwise two consecutive vertices coincide. Produces
/// `2 + 2 * columns.len()` vertices.
#[must_use]
pub fn histogram(columns: &[(Coord, Coord)]) -> Vec<Vertex> {
    let total_width: Coord = columns.iter().map(|&(w, _)| w).sum();
    let mut vertices = vec![Vertex::new(0, 0), Vertex::new(total_width, 0)];
    let mut x = total_width;
    for &(w, h) in columns.iter().rev() {
        vertices.push(Vertex::new(x, h));
        x -= w;
        vertices.push(Vertex::new(x, h));
    }
    vertices
}
