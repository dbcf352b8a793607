//! Deterministic `key=value` summaries of fixture runs.
//!
//! The `search_fixture` binary prints these lines; the cross-process test
//! compares them against the same lines computed in-process.

use maxrect_harness::fixtures::Fixture;
use maxrect_harness::runner::{run_fixture, RunError};
use maxrect_kernel::proof::canon::CanonError;
use maxrect_kernel::proof::hash::ContentHash;

/// One line per reported field, each prefixed with the fixture name.
///
/// # Errors
///
/// [`RunError`] if the run itself fails. A digest that cannot be computed
/// is printed as `error:<detail>` instead.
pub fn fixture_lines(fixture: &Fixture) -> Result<Vec<String>, RunError> {
    let report = run_fixture(fixture, None)?;
    let n = fixture.name;
    let c = &report.counters;
    let best = report.best.map_or_else(
        || "none".to_string(),
        |b| format!("{},{},{},{}", b.x1, b.x2, b.y1, b.y2),
    );

    Ok(vec![
        format!("{n}.vertices_digest={}", digest_text(fixture.vertices_digest())),
        format!("{n}.policy_digest={}", digest_text(report.policy.digest())),
        format!("{n}.max_area={}", report.max_area),
        format!("{n}.best={best}"),
        format!("{n}.vertices_loaded={}", report.vertices_loaded),
        format!("{n}.candidates_tested={}", c.candidates_tested),
        format!("{n}.candidates_pruned={}", c.candidates_pruned),
        format!("{n}.candidates_accepted={}", c.candidates_accepted),
        format!("{n}.validation_cycles={}", c.validation_cycles),
        format!("{n}.advances={}", c.advances),
        format!("{n}.report_digest={}", digest_text(report.digest())),
    ])
}

fn digest_text(digest: Result<ContentHash, CanonError>) -> String {
    match digest {
        Ok(d) => d.to_string(),
        Err(e) => format!("error:{e}"),
    }
}
