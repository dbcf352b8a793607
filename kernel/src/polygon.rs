//! `PolygonModel`: derived edge list with containment and crossing queries.
//!
//! Built once from a sealed [`VertexStore`]. Construction is the only place
//! polygon shape is checked; every query afterwards assumes a closed,
//! rectilinear vertex loop of even length >= 4.

use crate::geometry::edge::Edge;
use crate::geometry::vertex::{Coord, Vertex};
use crate::store::VertexStore;

/// Minimum vertex count of a rectilinear polygon.
pub const MIN_VERTICES: usize = 4;

/// Why a vertex sequence is not a usable rectilinear polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// The store has not received its final vertex.
    NotSealed,
    /// Fewer than [`MIN_VERTICES`] vertices.
    TooFewVertices { count: usize },
    /// Rectilinear polygons alternate horizontal and vertical edges, so the
    /// vertex count must be even.
    OddVertexCount { count: usize },
    /// Edge `edge` (from vertex `edge` to `edge + 1 mod N`) is diagonal or
    /// zero-length.
    NotRectilinear { edge: usize },
}

impl std::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotSealed => write!(f, "vertex store not sealed"),
            Self::TooFewVertices { count } => {
                write!(f, "polygon needs at least {MIN_VERTICES} vertices, got {count}")
            }
            Self::OddVertexCount { count } => {
                write!(f, "rectilinear polygon needs an even vertex count, got {count}")
            }
            Self::NotRectilinear { edge } => {
                write!(f, "edge {edge} is not axis-aligned")
            }
        }
    }
}

impl std::error::Error for ShapeError {}

/// Classification of a point against the polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointClass {
    Inside,
    /// On some edge's closed span. Counts as contained for rectangles.
    OnBoundary,
    Outside,
}

impl PointClass {
    /// Whether a rectangle corner with this class is contained.
    #[must_use]
    pub fn is_contained(self) -> bool {
        matches!(self, Self::Inside | Self::OnBoundary)
    }

    /// Parity rule for a point known not to be on the boundary.
    #[must_use]
    pub fn from_crossings(crossings: usize) -> Self {
        if crossings % 2 == 1 {
            Self::Inside
        } else {
            Self::Outside
        }
    }
}

/// A closed rectilinear polygon and its edges.
#[derive(Debug, Clone)]
pub struct PolygonModel {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl PolygonModel {
    /// Build from a sealed store.
    ///
    /// # Errors
    ///
    /// [`ShapeError::NotSealed`] if ingestion has not completed; otherwise
    /// see [`PolygonModel::from_vertices`].
    pub fn from_store(store: &VertexStore) -> Result<Self, ShapeError> {
        if !store.is_sealed() {
            return Err(ShapeError::NotSealed);
        }
        Self::from_vertices(store.as_slice())
    }

    /// Build from an ordered, implicitly closed vertex list.
    ///
    /// # Errors
    ///
    /// Returns the first shape violation found: count checks first, then
    /// the lowest-indexed non-rectilinear edge.
    pub fn from_vertices(vertices: &[Vertex]) -> Result<Self, ShapeError> {
        let count = vertices.len();
        if count < MIN_VERTICES {
            return Err(ShapeError::TooFewVertices { count });
        }
        if count % 2 != 0 {
            return Err(ShapeError::OddVertexCount { count });
        }

        let edges = (0..count)
            .map(|i| {
                Edge::between(i, vertices[i], vertices[(i + 1) % count])
                    .ok_or(ShapeError::NotRectilinear { edge: i })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            vertices: vertices.to_vec(),
            edges,
        })
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Classify `(px, py)` by boundary test, then +x ray parity.
    #[must_use]
    pub fn point_inside(&self, px: Coord, py: Coord) -> PointClass {
        self.classify_scaled(u64::from(px), u64::from(py), 0)
    }

    /// Classify a point given in a coordinate space scaled by `2^shift`.
    ///
    /// With `shift = 1` half-integer points such as a rectangle's centre
    /// become exact integers.
    #[must_use]
    pub fn classify_scaled(&self, px: u64, py: u64, shift: u32) -> PointClass {
        let mut crossings = 0usize;
        for edge in &self.edges {
            if edge.contains_point_scaled(px, py, shift) {
                return PointClass::OnBoundary;
            }
            if edge.ray_crosses_scaled(px, py, shift) {
                crossings += 1;
            }
        }
        PointClass::from_crossings(crossings)
    }

    /// Whether `edge` has any point strictly inside `(x1, x2) x (y1, y2)`.
    #[must_use]
    pub fn edge_crosses_open_rect(
        edge: &Edge,
        x1: Coord,
        x2: Coord,
        y1: Coord,
        y2: Coord,
    ) -> bool {
        edge.crosses_open_rect(x1, x2, y1, y2)
    }

    /// Index of the first edge crossing the open rectangle, if any.
    #[must_use]
    pub fn first_crossing(&self, x1: Coord, x2: Coord, y1: Coord, y2: Coord) -> Option<usize> {
        self.edges
            .iter()
            .position(|e| e.crosses_open_rect(x1, x2, y1, y2))
    }
}
