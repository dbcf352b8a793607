//! Axis-aligned polygon edges.
//!
//! An edge is derived from two consecutive vertices and never stored
//! independently of its polygon. It records one fixed coordinate and an
//! inclusive `[lo, hi]` span along the other axis.

use super::vertex::{Coord, Vertex};

/// Edge direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Constant `y`; spans `x` in `[lo, hi]`.
    Horizontal,
    /// Constant `x`; spans `y` in `[lo, hi]`.
    Vertical,
}

/// A rectilinear edge from vertex `index` to vertex `index + 1 (mod N)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Index of the edge's first vertex.
    pub index: usize,
    pub orientation: Orientation,
    /// The shared coordinate (`y` for horizontal, `x` for vertical).
    pub fixed: Coord,
    pub lo: Coord,
    pub hi: Coord,
}

impl Edge {
    /// Derive the edge between `a` and `b`.
    ///
    /// Returns `None` unless the endpoints differ in exactly one coordinate
    /// (a diagonal or zero-length edge is not rectilinear).
    #[must_use]
    pub fn between(index: usize, a: Vertex, b: Vertex) -> Option<Self> {
        match (a.x == b.x, a.y == b.y) {
            (true, false) => Some(Self {
                index,
                orientation: Orientation::Vertical,
                fixed: a.x,
                lo: a.y.min(b.y),
                hi: a.y.max(b.y),
            }),
            (false, true) => Some(Self {
                index,
                orientation: Orientation::Horizontal,
                fixed: a.y,
                lo: a.x.min(b.x),
                hi: a.x.max(b.x),
            }),
            _ => None,
        }
    }

    /// Whether `(px, py)` lies on the closed segment.
    ///
    /// Coordinates are in a space scaled by `2^shift`; the edge is scaled
    /// to match. `shift = 0` is the native coordinate space.
    #[must_use]
    pub fn contains_point_scaled(&self, px: u64, py: u64, shift: u32) -> bool {
        let (fixed, lo, hi) = self.scaled(shift);
        match self.orientation {
            Orientation::Horizontal => py == fixed && lo <= px && px <= hi,
            Orientation::Vertical => px == fixed && lo <= py && py <= hi,
        }
    }

    /// Whether a ray cast from `(px, py)` toward `+x` crosses this edge.
    ///
    /// Only vertical edges strictly right of the point count. The span is
    /// half-open (`lo <= py < hi`) so a ray through a shared vertex is
    /// counted exactly once.
    #[must_use]
    pub fn ray_crosses_scaled(&self, px: u64, py: u64, shift: u32) -> bool {
        if self.orientation != Orientation::Vertical {
            return false;
        }
        let (fixed, lo, hi) = self.scaled(shift);
        fixed > px && lo <= py && py < hi
    }

    /// Whether any point of this edge lies strictly inside the open
    /// rectangle `(x1, x2) x (y1, y2)`.
    #[must_use]
    pub fn crosses_open_rect(&self, x1: Coord, x2: Coord, y1: Coord, y2: Coord) -> bool {
        let (fixed_lo, fixed_hi, span_lo, span_hi) = match self.orientation {
            Orientation::Horizontal => (y1, y2, x1, x2),
            Orientation::Vertical => (x1, x2, y1, y2),
        };
        // The fixed coordinate must be strictly between the rectangle's
        // bounds on that axis, and the closed span must overlap the open
        // interval on the other.
        fixed_lo < self.fixed && self.fixed < fixed_hi && self.lo < span_hi && self.hi > span_lo
    }

    fn scaled(&self, shift: u32) -> (u64, u64, u64) {
        (
            u64::from(self.fixed) << shift,
            u64::from(self.lo) << shift,
            u64::from(self.hi) << shift,
        )
    }
}
