//! The search state machine.
//!
//! ```text
//!           submit(first)            submit(.., last)
//!   Idle ─────────────────► Loading ─────────────────► Idle (sealed)
//!                                                         │ begin()
//!                    ┌─────── advance(): pruned ◄──┐      ▼
//!                    │                          Searching ──► Done
//!                    └──► advance(): dispatch ──► Validating
//!                                                   │ advance(): one edge
//!                                                   └─► Searching on verdict
//!
//!   CapacityExceeded, CoordinateOutOfRange, MalformedPolygon ──► Failed
//!   reset() from any phase ──► Idle (empty)
//! ```
//!
//! Each [`SearchController::advance`] call is one unit of progress: it
//! either takes one candidate from the enumerator or inspects one polygon
//! edge for the candidate under validation. Nothing runs between calls, so
//! a caller can interleave runs, bound work, or abandon a run with
//! [`SearchController::reset`].

use log::{debug, trace};
use maxrect_kernel::geometry::area::Area;
use maxrect_kernel::geometry::vertex::{CoordWidth, Vertex};
use maxrect_kernel::polygon::PolygonModel;
use maxrect_kernel::store::{LoadError, VertexStore};

use crate::candidate::{Candidate, CandidateEnumerator};
use crate::error::{EngineError, Operation, PolicyError};
use crate::policy::SearchPolicy;
use crate::pruner::AreaPruner;
use crate::report::{SearchCounters, SearchReport};
use crate::tracker::MaxTracker;
use crate::validator::{ValidationRun, Validator};

/// Controller phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Empty, or sealed and waiting for `begin()`.
    Idle,
    /// At least one vertex stored, final vertex not yet seen.
    Loading,
    /// Between candidates.
    Searching,
    /// A candidate is being validated edge by edge.
    Validating,
    /// Enumeration exhausted; `report()` is available.
    Done,
    /// A fatal error ended the run.
    Failed,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Searching => "searching",
            Self::Validating => "validating",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// What one `advance()` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// No run in progress (`Idle` or `Loading`).
    Idle,
    /// The candidate could not beat the best area and was skipped.
    Pruned(Candidate),
    /// The candidate was handed to the validator.
    Dispatched(Candidate),
    /// One edge inspected; no verdict yet.
    Inspected,
    /// The validator reached a verdict on `candidate`.
    Validated { candidate: Candidate, accepted: bool },
    /// Enumeration is exhausted; the run is `Done`.
    Finished,
    /// The run is `Failed`.
    Halted,
}

/// Drives ingestion, enumeration, pruning and validation for one polygon
/// at a time.
#[derive(Debug, Clone)]
pub struct SearchController {
    policy: SearchPolicy,
    width: CoordWidth,
    phase: Phase,
    failure: Option<EngineError>,
    store: VertexStore,
    model: Option<PolygonModel>,
    enumerator: CandidateEnumerator,
    pruner: AreaPruner,
    validator: Validator,
    in_flight: Option<ValidationRun>,
    tracker: MaxTracker,
    counters: SearchCounters,
}

impl SearchController {
    /// Build an idle controller for `policy`.
    ///
    /// # Errors
    ///
    /// [`PolicyError`] if the policy is out of bounds.
    pub fn new(policy: SearchPolicy) -> Result<Self, PolicyError> {
        policy.validate()?;
        let width = policy.coord_width()?;
        Ok(Self {
            width,
            phase: Phase::Idle,
            failure: None,
            store: VertexStore::with_capacity(policy.capacity),
            model: None,
            enumerator: CandidateEnumerator::new(policy.candidate_mode),
            pruner: AreaPruner::new(policy.area_metric, policy.prune_mode),
            validator: Validator::new(policy.edge_scan)
                .with_centre_check(policy.centre_check),
            in_flight: None,
            tracker: MaxTracker::new(),
            counters: SearchCounters::default(),
            policy,
        })
    }

    #[must_use]
    pub fn policy(&self) -> &SearchPolicy {
        &self.policy
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The error that moved the controller to `Failed`, if any.
    #[must_use]
    pub fn failure(&self) -> Option<&EngineError> {
        self.failure.as_ref()
    }

    /// A run is in progress.
    #[must_use]
    pub fn busy(&self) -> bool {
        matches!(self.phase, Phase::Searching | Phase::Validating)
    }

    #[must_use]
    pub fn done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Best accepted area so far. Never decreases during a run.
    #[must_use]
    pub fn best_area(&self) -> Area {
        self.tracker.best_area()
    }

    #[must_use]
    pub fn best(&self) -> Option<Candidate> {
        self.tracker.best()
    }

    #[must_use]
    pub fn counters(&self) -> SearchCounters {
        self.counters
    }

    #[must_use]
    pub fn vertices_loaded(&self) -> usize {
        self.store.len()
    }

    /// Whether the final vertex has been submitted.
    #[must_use]
    pub fn ingestion_complete(&self) -> bool {
        self.store.is_sealed()
    }

    /// Append one vertex. `is_last` ends ingestion.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidState`] outside ingestion, including after
    ///   the final vertex. Not fatal.
    /// - [`EngineError::CoordinateOutOfRange`] if a coordinate does not fit
    ///   the configured width. Fatal.
    /// - [`EngineError::CapacityExceeded`] when the store is full. Fatal.
    pub fn submit(&mut self, vertex: Vertex, is_last: bool) -> Result<(), EngineError> {
        if !matches!(self.phase, Phase::Idle | Phase::Loading) || self.store.is_sealed() {
            return Err(self.invalid(Operation::Submit));
        }
        if self.store.len() >= self.store.capacity() {
            return Err(self.fail(EngineError::CapacityExceeded {
                capacity: self.store.capacity(),
            }));
        }
        if !vertex.fits(self.width) {
            return Err(self.fail(EngineError::CoordinateOutOfRange {
                vertex_index: self.store.len(),
                value: vertex.widest_coord(),
                width: self.width,
            }));
        }
        match self.store.load(vertex, is_last) {
            Ok(()) => {
                self.phase = if is_last { Phase::Idle } else { Phase::Loading };
                if is_last {
                    debug!("ingestion complete: {} vertices", self.store.len());
                }
                Ok(())
            }
            Err(LoadError::NotReady) => Err(self.invalid(Operation::Submit)),
            Err(LoadError::CapacityExceeded { capacity }) => {
                Err(self.fail(EngineError::CapacityExceeded { capacity }))
            }
        }
    }

    /// Start the search over the sealed vertex list.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NotLoaded`] before the final vertex. Not fatal.
    /// - [`EngineError::InvalidState`] outside `Idle`/`Loading`. Not fatal.
    /// - [`EngineError::MalformedPolygon`] if the vertices do not form a
    ///   rectilinear polygon. Fatal.
    pub fn begin(&mut self) -> Result<(), EngineError> {
        match self.phase {
            Phase::Idle if self.store.is_sealed() => {}
            Phase::Idle | Phase::Loading => return Err(EngineError::NotLoaded),
            _ => return Err(self.invalid(Operation::Begin)),
        }
        let model = match PolygonModel::from_store(&self.store) {
            Ok(model) => model,
            Err(shape) => return Err(self.fail(shape.into())),
        };
        debug!(
            "search begin: {} vertices, {} edges, mode {}",
            model.vertices().len(),
            model.edge_count(),
            self.policy.candidate_mode.as_str()
        );
        self.model = Some(model);
        self.enumerator.restart();
        self.validator.reset();
        self.in_flight = None;
        self.tracker.reset();
        self.counters = SearchCounters::default();
        self.phase = Phase::Searching;
        Ok(())
    }

    /// Make one unit of progress.
    pub fn advance(&mut self) -> Step {
        match self.phase {
            Phase::Idle | Phase::Loading => Step::Idle,
            Phase::Done => Step::Finished,
            Phase::Failed => Step::Halted,
            Phase::Searching => {
                self.counters.advances += 1;
                self.next_candidate()
            }
            Phase::Validating => {
                self.counters.advances += 1;
                self.validate_step()
            }
        }
    }

    fn next_candidate(&mut self) -> Step {
        let Some(model) = self.model.as_ref() else {
            return self.finish();
        };
        let Some(candidate) = self.enumerator.next_candidate(model.vertices()) else {
            return self.finish();
        };
        if self.pruner.prune(&candidate, self.tracker.best_area()) {
            self.counters.candidates_pruned += 1;
            return Step::Pruned(candidate);
        }
        self.counters.candidates_tested += 1;
        self.in_flight = Some(self.validator.begin(candidate));
        self.phase = Phase::Validating;
        Step::Dispatched(candidate)
    }

    fn validate_step(&mut self) -> Step {
        let (Some(model), Some(run)) = (self.model.as_ref(), self.in_flight.as_mut()) else {
            self.phase = Phase::Searching;
            return Step::Inspected;
        };
        self.counters.validation_cycles += 1;
        let Some(verdict) = run.step(model) else {
            return Step::Inspected;
        };
        self.in_flight = None;
        self.validator.record(&verdict);
        let candidate = verdict.candidate;
        let accepted = verdict.is_accepted();
        if accepted {
            self.counters.candidates_accepted += 1;
            let area = self.pruner.area(&candidate);
            if self.tracker.consider(area, candidate) {
                trace!("new best {area}: {candidate:?}");
            }
        }
        trace!(
            "verdict {candidate:?}: {:?} after {} cycles",
            verdict.rejection,
            verdict.cycles
        );
        self.phase = Phase::Searching;
        Step::Validated {
            candidate,
            accepted,
        }
    }

    fn finish(&mut self) -> Step {
        self.phase = Phase::Done;
        debug!(
            "search done: max_area={} tested={} pruned={} cycles={}",
            self.tracker.best_area(),
            self.counters.candidates_tested,
            self.counters.candidates_pruned,
            self.counters.validation_cycles
        );
        Step::Finished
    }

    /// Run `advance()` until the run leaves `Searching`/`Validating`.
    ///
    /// Returns the number of progress units taken. Does nothing outside a run.
    pub fn run_to_completion(&mut self) -> u64 {
        let start = self.counters.advances;
        while self.busy() {
            self.advance();
        }
        self.counters.advances - start
    }

    /// Result of a finished run.
    ///
    /// # Errors
    ///
    /// The stored fatal error in `Failed`; [`EngineError::InvalidState`]
    /// in any other phase except `Done`.
    pub fn report(&self) -> Result<SearchReport, EngineError> {
        match self.phase {
            Phase::Done => Ok(SearchReport {
                max_area: self.tracker.best_area(),
                best: self.tracker.best(),
                vertices_loaded: self.store.len(),
                counters: self.counters,
                policy: self.policy.clone(),
            }),
            Phase::Failed => Err(self
                .failure
                .clone()
                .unwrap_or_else(|| self.invalid(Operation::Report))),
            _ => Err(self.invalid(Operation::Report)),
        }
    }

    /// Drop all vertices, progress and results. Always succeeds.
    pub fn reset(&mut self) {
        debug!("reset from phase {}", self.phase);
        self.phase = Phase::Idle;
        self.failure = None;
        self.store.reset();
        self.model = None;
        self.enumerator.restart();
        self.validator.reset();
        self.in_flight = None;
        self.tracker.reset();
        self.counters = SearchCounters::default();
    }

    fn invalid(&self, operation: Operation) -> EngineError {
        EngineError::InvalidState {
            operation,
            phase: self.phase,
        }
    }

    fn fail(&mut self, error: EngineError) -> EngineError {
        debug!("run failed in phase {}: {error}", self.phase);
        self.phase = Phase::Failed;
        self.in_flight = None;
        self.failure = Some(error.clone());
        error
    }
}
