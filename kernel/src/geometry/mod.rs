//! Fixed-width coordinate, area and edge types.

pub mod area;
pub mod edge;
pub mod vertex;
