//! Rectangle area arithmetic with explicit overflow bounds.
//!
//! Coordinates are at most [`CoordWidth::MAX`] bits wide. A side length
//! therefore needs `W` bits (`W + 1` under [`AreaMetric::InclusiveTiles`]),
//! and their product needs at most `2W + 1` bits. `Area` is `u64`, which
//! covers `2 * 31 + 1 = 63` bits with one bit of headroom.

use super::vertex::{Coord, CoordWidth};

/// Rectangle area accumulator.
pub type Area = u64;

/// How a candidate's side lengths are measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AreaMetric {
    /// Geometric area `(x2 - x1) * (y2 - y1)`.
    #[default]
    Continuous,
    /// Tile-count area `(x2 - x1 + 1) * (y2 - y1 + 1)`: every integer
    /// lattice point on or inside the rectangle is one unit tile.
    InclusiveTiles,
}

impl AreaMetric {
    /// Stable lowercase name used in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Continuous => "continuous",
            Self::InclusiveTiles => "inclusive_tiles",
        }
    }

    /// Area of `[x1, x2] x [y1, y2]` under this metric.
    ///
    /// Callers pass `x1 <= x2` and `y1 <= y2`; reversed bounds are measured
    /// by absolute difference so the result never underflows.
    #[must_use]
    pub fn area(self, x1: Coord, x2: Coord, y1: Coord, y2: Coord) -> Area {
        let w = Area::from(x1.abs_diff(x2));
        let h = Area::from(y1.abs_diff(y2));
        match self {
            Self::Continuous => w * h,
            Self::InclusiveTiles => (w + 1) * (h + 1),
        }
    }
}

/// Bits needed to hold any area at coordinate width `width`.
#[must_use]
pub const fn area_bits_required(width: CoordWidth) -> u32 {
    2 * width.bits() as u32 + 1
}

/// Largest area reachable at `width` under `metric`.
#[must_use]
pub fn max_area(width: CoordWidth, metric: AreaMetric) -> Area {
    let top = width.max_value();
    metric.area(0, top, 0, top)
}
