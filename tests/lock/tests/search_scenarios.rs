//! Concrete search scenarios with known answers.
//!
//! Proves:
//! 1. Fixture polygons reach their expected maximum areas
//! 2. First-found tie-break on the L-shape
//! 3. Each rejection stage fires on the polygon built to trigger it
//! 4. Capacity and coordinate-width boundaries

use maxrect_harness::fixtures;
use maxrect_harness::runner::{run_polygon, RunConfig, RunError};
use maxrect_kernel::geometry::area::{area_bits_required, max_area, AreaMetric};
use maxrect_kernel::geometry::vertex::{Coord, CoordWidth, Vertex};
use maxrect_kernel::polygon::{PolygonModel, ShapeError};
use maxrect_search::candidate::{Candidate, Corner};
use maxrect_search::controller::SearchController;
use maxrect_search::error::{EngineError, PolicyError};
use maxrect_search::policy::{
    CandidateMode, CentreCheck, EdgeScanStart, SearchPolicy, MAX_CAPACITY,
};
use maxrect_search::validator::{RejectReason, Validator};

fn run_default(vertices: &[Vertex]) -> maxrect_search::report::SearchReport {
    run_polygon(vertices, &RunConfig::default()).expect("run succeeds")
}

fn validate(vertices: &[Vertex], c: Candidate) -> Option<RejectReason> {
    let model = PolygonModel::from_vertices(vertices).expect("valid polygon");
    Validator::new(EdgeScanStart::FromFirst)
        .validate(&model, c)
        .rejection
}

// ---------------------------------------------------------------------------
// 1. Expected areas
// ---------------------------------------------------------------------------

#[test]
fn square_area_is_16() {
    let r = run_default(&fixtures::square());
    assert_eq!(r.max_area, 16);
    assert_eq!(r.vertices_loaded, 4);
    assert!(r.found());
}

#[test]
fn every_fixture_reaches_expected_area() {
    for f in fixtures::all() {
        let r = maxrect_harness::runner::run_fixture(&f, None).expect("fixture runs");
        assert_eq!(r.max_area, f.expected_max_area, "fixture {}", f.name);
    }
}

#[test]
fn tile_sample_in_tiles_and_in_continuous_area() {
    let tiles = run_polygon(
        &fixtures::tile_sample(),
        &RunConfig {
            policy: fixtures::tile_policy(),
            max_advances: None,
        },
    )
    .expect("run succeeds");
    assert_eq!(tiles.max_area, 24);
    assert_eq!(tiles.best, Candidate::from_pairs(2, 9, 3, 5));

    let continuous = run_default(&fixtures::tile_sample());
    assert_eq!(continuous.max_area, 18);
    assert_eq!(continuous.best, Candidate::from_pairs(2, 11, 3, 5));
}

// ---------------------------------------------------------------------------
// 2. Tie-break
// ---------------------------------------------------------------------------

#[test]
fn l_shape_keeps_horizontal_arm() {
    let r = run_default(&fixtures::l_shape());
    assert_eq!(r.max_area, 18);
    assert_eq!(r.best, Candidate::from_pairs(0, 6, 0, 3));
    // The vertical arm has the same area and is pruned, not validated.
    assert!(r.counters.candidates_pruned > 0);
}

// ---------------------------------------------------------------------------
// 3. Rejection stages
// ---------------------------------------------------------------------------

#[test]
fn three_vertices_fail_at_begin() {
    let err = run_default_err(&[(0, 0), (4, 0), (4, 4)]);
    assert_eq!(
        err,
        RunError::Engine(EngineError::MalformedPolygon(
            ShapeError::TooFewVertices { count: 3 }
        ))
    );
}

#[test]
fn odd_vertex_count_fails_at_begin() {
    let err = run_default_err(&[(0, 0), (4, 0), (4, 4), (2, 4), (2, 2)]);
    assert_eq!(
        err,
        RunError::Engine(EngineError::MalformedPolygon(
            ShapeError::OddVertexCount { count: 5 }
        ))
    );
}

fn run_default_err(points: &[(Coord, Coord)]) -> RunError {
    let v: Vec<Vertex> = points.iter().copied().map(Vertex::from).collect();
    run_polygon(&v, &RunConfig::default()).expect_err("run fails")
}

#[test]
fn l_shape_bounding_box_loses_a_corner() {
    let bbox = Candidate::from_pairs(0, 6, 0, 6).expect("non-degenerate");
    assert_eq!(
        validate(&fixtures::l_shape(), bbox),
        Some(RejectReason::CornerOutside {
            corner: Corner::UpperRight
        })
    );
}

#[test]
fn notch_bounding_box_is_cut_by_an_edge() {
    let bbox = Candidate::from_pairs(0, 8, 0, 8).expect("non-degenerate");
    assert!(matches!(
        validate(&fixtures::notch(), bbox),
        Some(RejectReason::EdgeCrossing { .. })
    ));
}

#[test]
fn u_notch_gap_is_outside() {
    let gap = Candidate::from_pairs(1, 5, 1, 10).expect("non-degenerate");
    assert_eq!(
        validate(&fixtures::u_notch(), gap),
        Some(RejectReason::InteriorOutside)
    );
    assert_eq!(run_default(&fixtures::u_notch()).max_area, 10);
}

#[test]
fn without_centre_check_the_u_gap_is_accepted() {
    let config = RunConfig {
        policy: SearchPolicy {
            centre_check: CentreCheck::Disabled,
            ..SearchPolicy::default()
        },
        ..RunConfig::default()
    };
    let report = run_polygon(&fixtures::u_notch(), &config).expect("run succeeds");
    assert_eq!(report.max_area, 36);
    assert_eq!(
        report.best,
        Some(Candidate::from_pairs(1, 5, 1, 10).expect("non-degenerate"))
    );
    assert_eq!(report.policy.centre_check, CentreCheck::Disabled);
}

// ---------------------------------------------------------------------------
// 4. Boundaries
// ---------------------------------------------------------------------------

#[test]
fn capacity_bounds_are_enforced_by_policy() {
    for capacity in [3, MAX_CAPACITY + 1] {
        let policy = SearchPolicy {
            capacity,
            ..SearchPolicy::default()
        };
        assert!(matches!(
            SearchController::new(policy),
            Err(PolicyError::CapacityOutOfRange { .. })
        ));
    }
}

#[test]
fn full_capacity_loads_and_one_more_overflows() {
    // 4095 unit steps give exactly 8192 vertices.
    let stairs = fixtures::staircase(&[(1, 1); 4095]);
    assert_eq!(stairs.len(), MAX_CAPACITY);
    let policy = SearchPolicy {
        capacity: MAX_CAPACITY,
        ..SearchPolicy::default()
    };

    let mut full = SearchController::new(policy.clone()).expect("valid policy");
    for (i, &v) in stairs.iter().enumerate() {
        full.submit(v, i + 1 == stairs.len()).expect("fits");
    }
    full.begin().expect("valid polygon");
    assert!(full.busy());
    assert_eq!(full.vertices_loaded(), MAX_CAPACITY);

    let mut over = SearchController::new(policy).expect("valid policy");
    for &v in &stairs {
        over.submit(v, false).expect("fits");
    }
    assert_eq!(
        over.submit(Vertex::new(0, 1), true),
        Err(EngineError::CapacityExceeded {
            capacity: MAX_CAPACITY
        })
    );
}

#[test]
fn widest_coordinates_do_not_overflow() {
    let width = CoordWidth::new(CoordWidth::MAX).expect("supported");
    assert_eq!(area_bits_required(width), 63);
    let m = width.max_value();
    let square = [
        Vertex::new(0, 0),
        Vertex::new(m, 0),
        Vertex::new(m, m),
        Vertex::new(0, m),
    ];

    let continuous = run_polygon(
        &square,
        &RunConfig {
            policy: SearchPolicy {
                coord_width_bits: CoordWidth::MAX,
                ..SearchPolicy::default()
            },
            max_advances: None,
        },
    )
    .expect("run succeeds");
    assert_eq!(continuous.max_area, max_area(width, AreaMetric::Continuous));

    let tiles = run_polygon(
        &square,
        &RunConfig {
            policy: SearchPolicy {
                coord_width_bits: CoordWidth::MAX,
                candidate_mode: CandidateMode::VertexCorners,
                area_metric: AreaMetric::InclusiveTiles,
                ..SearchPolicy::default()
            },
            max_advances: None,
        },
    )
    .expect("run succeeds");
    assert_eq!(tiles.max_area, 1u64 << 62);
}

#[test]
fn coordinate_width_bounds() {
    let policy = SearchPolicy {
        coord_width_bits: CoordWidth::MAX + 1,
        ..SearchPolicy::default()
    };
    assert_eq!(
        SearchController::new(policy).err(),
        Some(PolicyError::CoordWidthOutOfRange {
            bits: CoordWidth::MAX + 1
        })
    );

    let narrow = RunConfig {
        policy: SearchPolicy {
            coord_width_bits: 2,
            ..SearchPolicy::default()
        },
        max_advances: None,
    };
    assert!(matches!(
        run_polygon(&fixtures::square(), &narrow),
        Err(RunError::Engine(EngineError::CoordinateOutOfRange {
            vertex_index: 1,
            value: 4,
            ..
        }))
    ));
}
