//! maxrect search: step-wise maximum inscribed rectangle search.
//!
//! This crate drives the search over a [`maxrect_kernel`] polygon. It does
//! NOT depend on `maxrect_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! maxrect_kernel  ←  maxrect_search  ←  maxrect_harness
//! (geometry, store)  (state machine)     (runner, fixtures, reference)
//! ```
//!
//! # Key types
//!
//! - [`controller::SearchController`] -- ingestion plus the single-step `advance()` loop
//! - [`candidate::CandidateEnumerator`] -- deterministic candidate order
//! - [`pruner::AreaPruner`] -- area bound in front of validation
//! - [`validator::Validator`] -- one edge per step containment check
//! - [`tracker::MaxTracker`] -- first-wins running maximum
//! - [`report::SearchReport`] -- result, counters and canonical digest
//! - [`policy::SearchPolicy`] -- capacity, coordinate width and strategy switches

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod candidate;
pub mod controller;
pub mod error;
pub mod policy;
pub mod pruner;
pub mod report;
pub mod tracker;
pub mod validator;
