//! Typed engine errors.
//!
//! [`PolicyError`] is a pre-flight failure: it is returned before a
//! controller exists. [`EngineError`] is reported synchronously by the
//! controller call that hit the violation; the fatal kinds also move the
//! controller to [`Phase::Failed`] so no result can be read afterwards.

use maxrect_kernel::geometry::vertex::{Coord, CoordWidth};
use maxrect_kernel::polygon::ShapeError;

use crate::controller::Phase;

/// Controller entry point that was called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Submit,
    Begin,
    Report,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Submit => "submit",
            Self::Begin => "begin",
            Self::Report => "report",
        };
        f.write_str(name)
    }
}

/// Failure reported by a [`crate::controller::SearchController`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// More vertices were submitted than the store holds. Fatal.
    CapacityExceeded { capacity: usize },
    /// The sealed vertex list is not a usable rectilinear polygon. Fatal.
    MalformedPolygon(ShapeError),
    /// `begin()` before the final vertex was submitted.
    NotLoaded,
    /// The call is not valid in the controller's current phase.
    InvalidState { operation: Operation, phase: Phase },
    /// A coordinate does not fit the configured width. Fatal.
    CoordinateOutOfRange {
        vertex_index: usize,
        value: Coord,
        width: CoordWidth,
    },
}

impl EngineError {
    /// Whether this error ends the run (the controller enters `Failed`).
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::CapacityExceeded { .. }
                | Self::MalformedPolygon(_)
                | Self::CoordinateOutOfRange { .. }
        )
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CapacityExceeded { capacity } => {
                write!(f, "capacity exceeded: store holds {capacity} vertices")
            }
            Self::MalformedPolygon(shape) => write!(f, "malformed polygon: {shape}"),
            Self::NotLoaded => write!(f, "begin called before ingestion completed"),
            Self::InvalidState { operation, phase } => {
                write!(f, "{operation} is not valid in phase {phase}")
            }
            Self::CoordinateOutOfRange {
                vertex_index,
                value,
                width,
            } => write!(
                f,
                "vertex {vertex_index}: coordinate {value} does not fit {width} width"
            ),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedPolygon(shape) => Some(shape),
            _ => None,
        }
    }
}

impl From<ShapeError> for EngineError {
    fn from(shape: ShapeError) -> Self {
        Self::MalformedPolygon(shape)
    }
}

/// Invalid [`crate::policy::SearchPolicy`] field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// `capacity` outside the supported vertex range.
    CapacityOutOfRange { capacity: usize, min: usize, max: usize },
    /// `coord_width_bits` outside `CoordWidth::MIN..=CoordWidth::MAX`.
    CoordWidthOutOfRange { bits: u8 },
}

impl std::fmt::Display for PolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CapacityOutOfRange { capacity, min, max } => {
                write!(f, "capacity {capacity} outside {min}..={max}")
            }
            Self::CoordWidthOutOfRange { bits } => write!(
                f,
                "coordinate width {bits} outside {}..={}",
                CoordWidth::MIN,
                CoordWidth::MAX
            ),
        }
    }
}

impl std::error::Error for PolicyError {}
