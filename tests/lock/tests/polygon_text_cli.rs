//! Plain-text polygon binary lock tests.
//!
//! Proves:
//! 1. `maxrect` reads rendered vertices from stdin and prints the same area
//!    as an in-process run
//! 2. `--stats` prints the in-process search counters
//! 3. A file path argument reads the same format
//! 4. Malformed or too-short input exits non-zero with a message on stderr

use std::io::Write;
use std::process::{Command, Output, Stdio};

use maxrect_harness::fixtures;
use maxrect_harness::polygon_text::render_polygon;
use maxrect_harness::runner::{run_polygon, RunConfig};

fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("maxrect");
    path.to_string_lossy().to_string()
}

fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let bin = binary_path();
    let mut child = Command::new(&bin)
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|e| panic!("failed to spawn {bin}: {e}"));
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for maxrect")
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "maxrect exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).expect("stdout is valid UTF-8")
}

// ---------------------------------------------------------------------------
// 1. Area from stdin
// ---------------------------------------------------------------------------

#[test]
fn every_fixture_matches_in_process_area() {
    for f in fixtures::all() {
        let expected = run_polygon(&f.vertices, &RunConfig::default()).expect("fixture runs");
        let out = stdout_of(&run_with_stdin(&[], &render_polygon(&f.vertices)));
        assert_eq!(out, format!("max_area={}\n", expected.max_area), "{}", f.name);
    }
}

#[test]
fn comments_and_trailing_text_are_ignored() {
    let input = format!(
        "# L floor\n{}\nignored after the blank line\n",
        render_polygon(&fixtures::l_shape())
    );
    assert_eq!(stdout_of(&run_with_stdin(&[], &input)), "max_area=18\n");
}

// ---------------------------------------------------------------------------
// 2. Counters
// ---------------------------------------------------------------------------

#[test]
fn stats_lines_match_in_process_counters() {
    let l = fixtures::l_shape();
    let report = run_polygon(&l, &RunConfig::default()).expect("l_shape runs");
    let c = report.counters;
    let expected = format!(
        "max_area=18\nvertices_loaded=6\ncandidates_tested={}\ncandidates_pruned={}\n\
         candidates_accepted={}\nvalidation_cycles={}\nadvances={}\n",
        c.candidates_tested,
        c.candidates_pruned,
        c.candidates_accepted,
        c.validation_cycles,
        c.advances,
    );
    for flag in ["--stats", "-v"] {
        let out = stdout_of(&run_with_stdin(&[flag], &render_polygon(&l)));
        assert_eq!(out, expected, "flag {flag}");
    }
}

// ---------------------------------------------------------------------------
// 3. Path argument
// ---------------------------------------------------------------------------

#[test]
fn reads_polygon_from_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("notch.txt");
    std::fs::write(&path, render_polygon(&fixtures::u_notch())).expect("write polygon");
    let out = stdout_of(&run_with_stdin(&[path.to_str().expect("utf-8 path")], ""));
    assert_eq!(out, "max_area=10\n");
}

// ---------------------------------------------------------------------------
// 4. Failures
// ---------------------------------------------------------------------------

#[test]
fn bad_input_exits_non_zero() {
    for (input, needle) in [
        ("0,0\n4 0\n", "line 2"),
        ("", "no vertices"),
        ("0,0\n4,0\n4,4\n", "engine error"),
    ] {
        let output = run_with_stdin(&[], input);
        assert!(!output.status.success(), "input {input:?} succeeded");
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains(needle), "stderr={stderr}");
    }
    assert!(!run_with_stdin(&["--frobnicate"], "").status.success());
}
