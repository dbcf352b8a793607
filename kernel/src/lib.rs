//! maxrect kernel: fixed-width geometry for rectilinear polygons.
//!
//! # API Surface
//!
//! - [`store::VertexStore`] -- fixed-capacity, seal-once vertex buffer
//! - [`polygon::PolygonModel`] -- edge list plus containment and crossing queries
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 over canonical bytes
//!
//! # Module Dependency Direction
//!
//! `geometry` ← `store` ← `polygon`, and `proof` standalone.
//!
//! One-way only. `proof` knows nothing about geometry; callers decide what
//! to serialize.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod geometry;
pub mod polygon;
pub mod proof;
pub mod store;
