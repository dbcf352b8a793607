//! Candidate rectangles and their deterministic enumeration.
//!
//! For a rectilinear polygon the largest inscribed axis-aligned rectangle
//! always has its sides on vertex coordinates, so candidates are drawn
//! from stored vertices only. Enumeration order is fixed by vertex index:
//!
//! ```text
//! CoordinateGrid:  for i in 0..N, j in i+1..N      (x pair from x_i, x_j)
//!                    for k in 0..N, l in k+1..N    (y pair from y_k, y_l)
//! VertexCorners:   for i in 0..N, j in i+1..N      (corners v_i, v_j)
//! ```
//!
//! Pairs with equal coordinates give zero-width sides and are skipped
//! without being emitted. Equal values reached through different indices
//! are *not* merged; the order, and therefore every counter, depends only
//! on the vertex sequence.

use maxrect_kernel::geometry::area::{Area, AreaMetric};
use maxrect_kernel::geometry::vertex::{Coord, Vertex};

use crate::policy::CandidateMode;

/// An axis-aligned rectangle `[x1, x2] x [y1, y2]` with `x1 < x2`, `y1 < y2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub x1: Coord,
    pub x2: Coord,
    pub y1: Coord,
    pub y2: Coord,
}

/// Corner labels in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    LowerLeft,
    LowerRight,
    UpperLeft,
    UpperRight,
}

impl Corner {
    /// Validation order.
    pub const ALL: [Corner; 4] = [
        Corner::LowerLeft,
        Corner::LowerRight,
        Corner::UpperLeft,
        Corner::UpperRight,
    ];
}

impl Candidate {
    /// Build from two unordered coordinate pairs.
    ///
    /// Returns `None` if either side would be zero-width.
    #[must_use]
    pub fn from_pairs(xa: Coord, xb: Coord, ya: Coord, yb: Coord) -> Option<Self> {
        if xa == xb || ya == yb {
            return None;
        }
        Some(Self {
            x1: xa.min(xb),
            x2: xa.max(xb),
            y1: ya.min(yb),
            y2: ya.max(yb),
        })
    }

    /// Rectangle with `a` and `b` as opposite corners.
    #[must_use]
    pub fn from_corners(a: Vertex, b: Vertex) -> Option<Self> {
        Self::from_pairs(a.x, b.x, a.y, b.y)
    }

    #[must_use]
    pub fn corner(&self, corner: Corner) -> (Coord, Coord) {
        match corner {
            Corner::LowerLeft => (self.x1, self.y1),
            Corner::LowerRight => (self.x2, self.y1),
            Corner::UpperLeft => (self.x1, self.y2),
            Corner::UpperRight => (self.x2, self.y2),
        }
    }

    /// Centre in doubled coordinates `(x1 + x2, y1 + y2)`.
    #[must_use]
    pub fn doubled_centre(&self) -> (u64, u64) {
        (
            u64::from(self.x1) + u64::from(self.x2),
            u64::from(self.y1) + u64::from(self.y2),
        )
    }

    #[must_use]
    pub fn area(&self, metric: AreaMetric) -> Area {
        metric.area(self.x1, self.x2, self.y1, self.y2)
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "x1": self.x1,
            "x2": self.x2,
            "y1": self.y1,
            "y2": self.y2,
        })
    }
}

/// Index pair `a < b` over `0..n`, advanced in lexicographic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PairCursor {
    a: usize,
    b: usize,
}

impl PairCursor {
    const START: Self = Self { a: 0, b: 1 };

    fn exhausted(self, n: usize) -> bool {
        self.a + 1 >= n
    }

    fn advance(&mut self, n: usize) {
        self.b += 1;
        if self.b >= n {
            self.a += 1;
            self.b = self.a + 1;
        }
    }
}

/// Cursor position, exposed for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorPosition {
    /// Next x index pair `(i, j)` and y index pair `(k, l)` to examine.
    Grid { i: usize, j: usize, k: usize, l: usize },
    /// Next vertex pair `(i, j)` to examine.
    Corners { i: usize, j: usize },
}

/// Restartable candidate cursor.
///
/// The enumerator holds only indices; vertices are passed to each
/// [`CandidateEnumerator::next_candidate`] call so the cursor can live
/// next to the store that owns them.
#[derive(Debug, Clone)]
pub struct CandidateEnumerator {
    mode: CandidateMode,
    outer: PairCursor,
    inner: PairCursor,
}

impl CandidateEnumerator {
    #[must_use]
    pub fn new(mode: CandidateMode) -> Self {
        Self {
            mode,
            outer: PairCursor::START,
            inner: PairCursor::START,
        }
    }

    #[must_use]
    pub fn mode(&self) -> CandidateMode {
        self.mode
    }

    /// Rewind to the first candidate.
    pub fn restart(&mut self) {
        self.outer = PairCursor::START;
        self.inner = PairCursor::START;
    }

    #[must_use]
    pub fn position(&self) -> CursorPosition {
        match self.mode {
            CandidateMode::CoordinateGrid => CursorPosition::Grid {
                i: self.outer.a,
                j: self.outer.b,
                k: self.inner.a,
                l: self.inner.b,
            },
            CandidateMode::VertexCorners => CursorPosition::Corners {
                i: self.outer.a,
                j: self.outer.b,
            },
        }
    }

    /// Next non-degenerate candidate, or `None` once exhausted.
    ///
    /// `vertices` must be the same sequence on every call between restarts.
    pub fn next_candidate(&mut self, vertices: &[Vertex]) -> Option<Candidate> {
        match self.mode {
            CandidateMode::CoordinateGrid => self.next_grid(vertices),
            CandidateMode::VertexCorners => self.next_corners(vertices),
        }
    }

    /// Borrowing iterator over the remaining candidates.
    pub fn iter<'a>(&'a mut self, vertices: &'a [Vertex]) -> Candidates<'a> {
        Candidates {
            enumerator: self,
            vertices,
        }
    }

    fn next_grid(&mut self, v: &[Vertex]) -> Option<Candidate> {
        let n = v.len();
        while !self.outer.exhausted(n) {
            let (i, j) = (self.outer.a, self.outer.b);
            if v[i].x != v[j].x {
                while !self.inner.exhausted(n) {
                    let (k, l) = (self.inner.a, self.inner.b);
                    self.inner.advance(n);
                    if let Some(c) = Candidate::from_pairs(v[i].x, v[j].x, v[k].y, v[l].y) {
                        return Some(c);
                    }
                }
            }
            self.outer.advance(n);
            self.inner = PairCursor::START;
        }
        None
    }

    fn next_corners(&mut self, v: &[Vertex]) -> Option<Candidate> {
        let n = v.len();
        while !self.outer.exhausted(n) {
            let (i, j) = (self.outer.a, self.outer.b);
            self.outer.advance(n);
            if let Some(c) = Candidate::from_corners(v[i], v[j]) {
                return Some(c);
            }
        }
        None
    }
}

/// Iterator adapter returned by [`CandidateEnumerator::iter`].
pub struct Candidates<'a> {
    enumerator: &'a mut CandidateEnumerator,
    vertices: &'a [Vertex],
}

impl Iterator for Candidates<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        self.enumerator.next_candidate(self.vertices)
    }
}
