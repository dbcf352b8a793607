//! Harness runner: drives a [`SearchController`] over a vertex list.
//!
//! The runner uses ONLY the controller's public surface: `submit`,
//! `begin`, `advance`, `report`. It does not implement any search logic
//! itself.
//!
//! # Pipeline
//!
//! ```text
//! SearchController::new(policy)
//!   → [submit(v, last) × N] → begin()
//!   → [advance() × k, k ≤ max_advances] → report()
//! ```

use log::debug;
use maxrect_kernel::geometry::area::Area;
use maxrect_kernel::geometry::vertex::Vertex;
use maxrect_search::controller::{SearchController, Step};
use maxrect_search::error::{EngineError, PolicyError};
use maxrect_search::policy::SearchPolicy;
use maxrect_search::report::SearchReport;

use crate::fixtures::Fixture;

/// Run configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub policy: SearchPolicy,
    /// Upper bound on `advance()` calls. `None` is unlimited.
    pub max_advances: Option<u64>,
}

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The policy was rejected before any vertex was submitted.
    Policy(PolicyError),
    /// The controller reported an error.
    Engine(EngineError),
    /// The run was still busy after `budget` advances.
    AdvanceBudgetExceeded { budget: u64 },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Policy(e) => write!(f, "policy error: {e}"),
            Self::Engine(e) => write!(f, "engine error: {e}"),
            Self::AdvanceBudgetExceeded { budget } => {
                write!(f, "advance budget of {budget} exhausted before done")
            }
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Policy(e) => Some(e),
            Self::Engine(e) => Some(e),
            Self::AdvanceBudgetExceeded { .. } => None,
        }
    }
}

impl From<PolicyError> for RunError {
    fn from(e: PolicyError) -> Self {
        Self::Policy(e)
    }
}

impl From<EngineError> for RunError {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}

/// Run `vertices` to completion under `config`.
///
/// # Errors
///
/// Returns [`RunError`] if the policy is invalid, the controller rejects
/// the input, or the advance budget runs out.
pub fn run_polygon(vertices: &[Vertex], config: &RunConfig) -> Result<SearchReport, RunError> {
    run_with_observer(vertices, config, |_, _| {})
}

/// Like [`run_polygon`], calling `observe(step, best_area)` after every
/// `advance()`.
///
/// # Errors
///
/// See [`run_polygon`].
pub fn run_with_observer<F>(
    vertices: &[Vertex],
    config: &RunConfig,
    mut observe: F,
) -> Result<SearchReport, RunError>
where
    F: FnMut(&Step, Area),
{
    let mut controller = SearchController::new(config.policy.clone())?;
    let count = vertices.len();
    for (i, &vertex) in vertices.iter().enumerate() {
        controller.submit(vertex, i + 1 == count)?;
    }
    controller.begin()?;

    let mut taken: u64 = 0;
    while controller.busy() {
        if let Some(budget) = config.max_advances {
            if taken >= budget {
                debug!("run stopped: budget {budget} exhausted at phase {}", controller.phase());
                return Err(RunError::AdvanceBudgetExceeded { budget });
            }
        }
        let step = controller.advance();
        taken += 1;
        observe(&step, controller.best_area());
    }

    let report = controller.report()?;
    debug!(
        "run complete: {} vertices, max_area={}, advances={}",
        report.vertices_loaded, report.max_area, report.counters.advances
    );
    Ok(report)
}

/// Run a fixture under its own policy.
///
/// # Errors
///
/// See [`run_polygon`].
pub fn run_fixture(fixture: &Fixture, max_advances: Option<u64>) -> Result<SearchReport, RunError> {
    let config = RunConfig {
        policy: fixture.policy.clone(),
        max_advances,
    };
    run_polygon(&fixture.vertices, &config)
}
