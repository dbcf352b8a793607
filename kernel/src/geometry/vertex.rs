//! Vertex coordinates and the bounded coordinate width.

/// A single polygon coordinate.
///
/// Stored as `u32`; the usable range is bounded by the run's [`CoordWidth`].
pub type Coord = u32;

/// Number of bits a coordinate may occupy.
///
/// Invariant: `MIN..=MAX` (enforced by [`CoordWidth::new`]). The upper bound
/// keeps every area, including the inclusive-tile metric, inside 63 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CoordWidth(u8);

impl CoordWidth {
    /// Narrowest supported width.
    pub const MIN: u8 = 1;
    /// Widest supported width (`2 * 31 + 1 = 63` area bits).
    pub const MAX: u8 = 31;
    /// Default width, matching the 20-bit coordinate registers of the
    /// hardware search unit.
    pub const DEFAULT: Self = Self(20);

    /// Construct a width, returning `None` outside `MIN..=MAX`.
    #[must_use]
    pub const fn new(bits: u8) -> Option<Self> {
        if bits < Self::MIN || bits > Self::MAX {
            None
        } else {
            Some(Self(bits))
        }
    }

    /// Bit count.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Largest representable coordinate (`2^W - 1`).
    #[must_use]
    pub const fn max_value(self) -> Coord {
        // W <= 31, so the shift cannot overflow.
        (1u32 << self.0) - 1
    }

    /// Whether `value` fits in this width.
    #[must_use]
    pub const fn admits(self, value: Coord) -> bool {
        value <= self.max_value()
    }
}

impl Default for CoordWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for CoordWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-bit", self.0)
    }
}

/// An immutable polygon vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vertex {
    pub x: Coord,
    pub y: Coord,
}

impl Vertex {
    #[must_use]
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates fit in `width`.
    #[must_use]
    pub const fn fits(self, width: CoordWidth) -> bool {
        width.admits(self.x) && width.admits(self.y)
    }

    /// The larger of the two coordinates (used for range diagnostics).
    #[must_use]
    pub fn widest_coord(self) -> Coord {
        self.x.max(self.y)
    }
}

impl From<(Coord, Coord)> for Vertex {
    fn from((x, y): (Coord, Coord)) -> Self {
        Self { x, y }
    }
}
