//! Shared helpers for maxrect benchmark suites.

use maxrect_harness::fixtures::{histogram, staircase, tile_policy, tile_sample};
use maxrect_kernel::geometry::vertex::{Coord, Vertex};
use maxrect_search::controller::SearchController;
use maxrect_search::policy::{CandidateMode, SearchPolicy};
use maxrect_search::report::SearchReport;

/// A named polygon and the policy it is benchmarked under.
pub struct Regime {
    pub name: &'static str,
    pub vertices: Vec<Vertex>,
    pub policy: SearchPolicy,
}

/// Comb of alternating tall and short unit columns.
#[must_use]
pub fn comb(teeth: usize) -> Vec<Vertex> {
    let columns: Vec<(Coord, Coord)> = (0..teeth)
        .map(|i| (1, if i % 2 == 0 { 8 } else { 2 }))
        .collect();
    histogram(&columns)
}

/// The benchmark regimes, smallest first.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    vec![
        Regime {
            name: "tile_sample_corners",
            vertices: tile_sample(),
            policy: tile_policy(),
        },
        Regime {
            name: "staircase_8_grid",
            vertices: staircase(&[(1, 1); 8]),
            policy: SearchPolicy::default(),
        },
        Regime {
            name: "comb_12_grid",
            vertices: comb(12),
            policy: SearchPolicy::default(),
        },
        Regime {
            name: "staircase_128_corners",
            vertices: staircase(&[(2, 3); 128]),
            policy: SearchPolicy {
                candidate_mode: CandidateMode::VertexCorners,
                ..SearchPolicy::default()
            },
        },
    ]
}

/// A controller with `regime`'s vertices submitted and sealed, ready for
/// `begin()`. Cloning it skips ingestion in timed loops.
///
/// # Panics
///
/// Panics if the regime's policy or vertices are rejected. Benchmark setup
/// failures are fatal.
#[must_use]
pub fn prepare_loaded(regime: &Regime) -> SearchController {
    let mut controller = SearchController::new(regime.policy.clone()).expect("valid policy");
    let n = regime.vertices.len();
    for (i, &v) in regime.vertices.iter().enumerate() {
        controller.submit(v, i + 1 == n).expect("submit");
    }
    controller
}

/// Run a prepared controller from `begin()` to its report.
///
/// # Panics
///
/// Panics if the prepared controller is not ready or the run fails.
#[must_use]
pub fn run_search_only(loaded: &SearchController) -> SearchReport {
    let mut controller = loaded.clone();
    controller.begin().expect("begin");
    controller.run_to_completion();
    controller.report().expect("report")
}
