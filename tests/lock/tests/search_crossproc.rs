//! Cross-process determinism for fixture searches.
//!
//! Spawns the `search_fixture` binary under 4 environment variants and
//! asserts all produce identical output, equal to the in-process lines.

use std::path::Path;
use std::process::Command;

use lock_tests::fixture_lines::fixture_lines;
use maxrect_harness::fixtures;

fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("search_fixture");
    path.to_string_lossy().to_string()
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &str, args: &[&str], env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command.current_dir(work_dir).args(args);
    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });
    assert!(
        output.status.success(),
        "search_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

fn in_process_output() -> String {
    let mut out = String::new();
    for f in fixtures::all() {
        for line in fixture_lines(&f).expect("fixture runs") {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

#[test]
fn crossproc_determinism_four_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[], &[]);

    assert!(baseline.contains("l_shape.max_area=18"));
    assert!(baseline.contains("l_shape.best=0,6,0,3"));
    assert!(baseline.contains("square.report_digest=sha256:"));
    assert!(baseline.contains("tile_sample.max_area=24"));
    assert!(!baseline.contains("error:"));

    let alt_cwd = if cfg!(target_os = "windows") {
        "C:\\"
    } else {
        "/tmp"
    };
    let variant_cwd = run_variant(alt_cwd, &[], &[]);
    assert_eq!(
        baseline, variant_cwd,
        "output differs when cwd changes from {root} to {alt_cwd}"
    );

    let variant_locale = run_variant(&root, &[], &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(baseline, variant_locale, "output differs when LC_ALL=C LANG=C");

    let variant_noise = run_variant(
        &root,
        &[],
        &[
            ("MAXRECT_NOISE", "should_not_matter"),
            ("TZ", "America/New_York"),
            ("HOME", "/nonexistent"),
        ],
    );
    assert_eq!(baseline, variant_noise, "output differs with spurious env vars");

    assert_eq!(baseline, in_process_output(), "binary and in-process output differ");
}

#[test]
fn crossproc_single_fixture_selection() {
    let root = workspace_root();
    let only_l = run_variant(&root, &["l_shape"], &[]);
    let expected: String = fixture_lines(&fixtures::by_name("l_shape").expect("known"))
        .expect("runs")
        .into_iter()
        .map(|line| line + "\n")
        .collect();
    assert_eq!(only_l, expected);
}
