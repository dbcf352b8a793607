//! Plain-text polygon reader for fixture files.
//!
//! ```text
//! # comment lines start with '#'
//! 7,1
//! 11,1
//! ...
//! <blank line or end of input terminates>
//! ```
//!
//! Leading blank lines are skipped. Whitespace around each number is
//! ignored. The reader checks syntax only; shape and width checks belong
//! to the controller.

use maxrect_kernel::geometry::vertex::{Coord, Vertex};

/// Syntax error at a 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line is not `x,y`.
    MissingComma { line: usize },
    /// A field is not an unsigned integer that fits a coordinate.
    InvalidNumber { line: usize, field: String },
    /// No vertices before the terminator.
    Empty,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingComma { line } => write!(f, "line {line}: expected \"x,y\""),
            Self::InvalidNumber { line, field } => {
                write!(f, "line {line}: invalid coordinate {field:?}")
            }
            Self::Empty => write!(f, "no vertices"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a polygon from text.
///
/// # Errors
///
/// [`ParseError`] on the first malformed line, or if no vertex was read.
pub fn parse_polygon(text: &str) -> Result<Vec<Vertex>, ParseError> {
    let mut vertices = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.starts_with('#') {
            continue;
        }
        if line.is_empty() {
            if vertices.is_empty() {
                continue;
            }
            break;
        }
        let number = index + 1;
        let (x, y) = line
            .split_once(',')
            .ok_or(ParseError::MissingComma { line: number })?;
        vertices.push(Vertex::new(
            parse_coord(x, number)?,
            parse_coord(y, number)?,
        ));
    }
    if vertices.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(vertices)
}

/// Render vertices in the format [`parse_polygon`] reads.
#[must_use]
pub fn render_polygon(vertices: &[Vertex]) -> String {
    vertices
        .iter()
        .map(|v| format!("{},{}\n", v.x, v.y))
        .collect()
}

fn parse_coord(field: &str, line: usize) -> Result<Coord, ParseError> {
    field
        .trim()
        .parse::<Coord>()
        .map_err(|_| ParseError::InvalidNumber {
            line,
            field: field.trim().to_string(),
        })
}
