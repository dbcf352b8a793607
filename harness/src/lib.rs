//! maxrect harness: drives the search engine over concrete polygons.
//!
//! The harness feeds vertex lists through the controller's public surface
//! and packages the result. It does NOT implement search logic; the
//! reference search here exists to cross-check the engine.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod fixtures;
pub mod polygon_text;
pub mod reference;
pub mod report_dir;
pub mod runner;
