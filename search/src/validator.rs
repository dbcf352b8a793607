//! Rectangle containment validation, one polygon edge per step.
//!
//! A candidate is accepted iff, in order:
//!
//! 1. **Corners.** Each corner is on the boundary or has odd +x ray parity.
//! 2. **Crossings.** No edge has a point strictly inside the open rectangle.
//! 3. **Interior.** The rectangle's centre is inside the polygon.
//!
//! Once stage 2 passes, no edge meets the open rectangle, so its interior
//! is either wholly inside or wholly outside the polygon. A rectangle that
//! exactly fills a concave notch passes stages 1 and 2 with every corner on
//! the boundary; stage 3 rejects it. The centre is classified in doubled
//! coordinates so half-integer centres stay exact. With
//! [`CentreCheck::Disabled`] stage 3 is skipped and such rectangles are
//! accepted.
//!
//! Every [`ValidationRun::step`] inspects exactly one edge and counts one
//! validation cycle. Stages short-circuit on the first failure, so the
//! cycle count is the work actually done, not the worst case.

use maxrect_kernel::geometry::edge::Edge;
use maxrect_kernel::polygon::{PointClass, PolygonModel};

use crate::candidate::{Candidate, Corner};
use crate::policy::{EdgeScanStart, CentreCheck};

/// Why a candidate was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// This corner is strictly outside the polygon.
    CornerOutside { corner: Corner },
    /// Edge `edge` bites into the open rectangle.
    EdgeCrossing { edge: usize },
    /// The rectangle's interior lies outside the polygon (a notch).
    InteriorOutside,
}

/// Final result of validating one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub candidate: Candidate,
    /// `None` when accepted.
    pub rejection: Option<RejectReason>,
    /// Edges inspected to reach this verdict.
    pub cycles: u64,
}

impl Verdict {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.rejection.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Corner {
        corner: usize,
        edge: usize,
        crossings: usize,
    },
    Crossing {
        inspected: usize,
    },
    Interior {
        edge: usize,
        crossings: usize,
    },
    Finished(Option<RejectReason>),
}

/// In-flight validation of one candidate.
#[derive(Debug, Clone)]
pub struct ValidationRun {
    candidate: Candidate,
    stage: Stage,
    crossing_start: usize,
    centre_check: CentreCheck,
    cycles: u64,
}

impl ValidationRun {
    #[must_use]
    pub fn candidate(&self) -> Candidate {
        self.candidate
    }

    /// Edges inspected so far.
    #[must_use]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// The verdict, once reached.
    #[must_use]
    pub fn verdict(&self) -> Option<Verdict> {
        match self.stage {
            Stage::Finished(rejection) => Some(Verdict {
                candidate: self.candidate,
                rejection,
                cycles: self.cycles,
            }),
            _ => None,
        }
    }

    /// Inspect one edge. Returns the verdict once one is reached.
    ///
    /// `model` must be the polygon the run was started against. Calling
    /// `step` after the verdict inspects nothing and returns it again.
    pub fn step(&mut self, model: &PolygonModel) -> Option<Verdict> {
        if let Stage::Finished(_) = self.stage {
            return self.verdict();
        }
        let edges = model.edges();
        let n = edges.len();
        if n == 0 {
            self.stage = Stage::Finished(Some(RejectReason::InteriorOutside));
            return self.verdict();
        }
        self.cycles += 1;

        self.stage = match self.stage {
            Stage::Corner {
                corner,
                edge,
                crossings,
            } => self.corner_step(&edges[edge], corner, edge, crossings, n),
            Stage::Crossing { inspected } => {
                let index = (self.crossing_start + inspected) % n;
                let c = self.candidate;
                if PolygonModel::edge_crosses_open_rect(&edges[index], c.x1, c.x2, c.y1, c.y2) {
                    Stage::Finished(Some(RejectReason::EdgeCrossing { edge: index }))
                } else if inspected + 1 == n {
                    match self.centre_check {
                        CentreCheck::Enabled => Stage::Interior {
                            edge: 0,
                            crossings: 0,
                        },
                        CentreCheck::Disabled => Stage::Finished(None),
                    }
                } else {
                    Stage::Crossing {
                        inspected: inspected + 1,
                    }
                }
            }
            Stage::Interior { edge, crossings } => {
                let (cx, cy) = self.candidate.doubled_centre();
                let e = &edges[edge];
                if e.contains_point_scaled(cx, cy, 1) {
                    // A boundary through the centre would have crossed the
                    // open rectangle in stage 2; treat as contained.
                    Stage::Finished(None)
                } else {
                    let crossings = crossings + usize::from(e.ray_crosses_scaled(cx, cy, 1));
                    if edge + 1 < n {
                        Stage::Interior {
                            edge: edge + 1,
                            crossings,
                        }
                    } else if PointClass::from_crossings(crossings) == PointClass::Inside {
                        Stage::Finished(None)
                    } else {
                        Stage::Finished(Some(RejectReason::InteriorOutside))
                    }
                }
            }
            Stage::Finished(_) => self.stage,
        };
        self.verdict()
    }

    fn corner_step(
        &self,
        e: &Edge,
        corner: usize,
        edge: usize,
        crossings: usize,
        n: usize,
    ) -> Stage {
        let label = Corner::ALL[corner];
        let (px, py) = self.candidate.corner(label);
        let (px, py) = (u64::from(px), u64::from(py));

        let contained = if e.contains_point_scaled(px, py, 0) {
            true
        } else {
            let crossings = crossings + usize::from(e.ray_crosses_scaled(px, py, 0));
            if edge + 1 < n {
                return Stage::Corner {
                    corner,
                    edge: edge + 1,
                    crossings,
                };
            }
            PointClass::from_crossings(crossings).is_contained()
        };

        if !contained {
            Stage::Finished(Some(RejectReason::CornerOutside { corner: label }))
        } else if corner + 1 < Corner::ALL.len() {
            Stage::Corner {
                corner: corner + 1,
                edge: 0,
                crossings: 0,
            }
        } else {
            Stage::Crossing { inspected: 0 }
        }
    }
}

/// Validation unit: starts runs and carries the crossing-scan start hint
/// between candidates.
#[derive(Debug, Clone)]
pub struct Validator {
    edge_scan: EdgeScanStart,
    centre_check: CentreCheck,
    resume_edge: usize,
}

impl Validator {
    #[must_use]
    pub fn new(edge_scan: EdgeScanStart) -> Self {
        Self {
            edge_scan,
            centre_check: CentreCheck::Enabled,
            resume_edge: 0,
        }
    }

    /// Same validator with the centre check switched on or off.
    #[must_use]
    pub fn with_centre_check(mut self, centre_check: CentreCheck) -> Self {
        self.centre_check = centre_check;
        self
    }

    /// Start validating `candidate`. No edge is inspected yet.
    #[must_use]
    pub fn begin(&self, candidate: Candidate) -> ValidationRun {
        let crossing_start = match self.edge_scan {
            EdgeScanStart::FromFirst => 0,
            EdgeScanStart::ResumeAtLastCrossing => self.resume_edge,
        };
        ValidationRun {
            candidate,
            stage: Stage::Corner {
                corner: 0,
                edge: 0,
                crossings: 0,
            },
            crossing_start,
            centre_check: self.centre_check,
            cycles: 0,
        }
    }

    /// Record a verdict so the next crossing scan can resume at the edge
    /// that rejected this one.
    pub fn record(&mut self, verdict: &Verdict) {
        match verdict.rejection {
            Some(RejectReason::EdgeCrossing { edge }) => self.resume_edge = edge,
            None => self.resume_edge = 0,
            Some(RejectReason::CornerOutside { .. } | RejectReason::InteriorOutside) => {}
        }
    }

    /// Run a full validation.
    pub fn validate(&mut self, model: &PolygonModel, candidate: Candidate) -> Verdict {
        let mut run = self.begin(candidate);
        let verdict = loop {
            if let Some(v) = run.step(model) {
                break v;
            }
        };
        self.record(&verdict);
        verdict
    }

    /// Forget the resume hint.
    pub fn reset(&mut self) {
        self.resume_edge = 0;
    }
}
