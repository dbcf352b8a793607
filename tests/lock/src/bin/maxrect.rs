//! Binary that reads a polygon in the plain-text vertex format and prints
//! the largest contained rectangle area.
//!
//! Usage: `maxrect [--stats] [path]` (reads stdin when no path is given)
//!
//! Output: `max_area=<n>`, followed with `--stats` by one `<counter>=<n>`
//! line per search counter. Errors go to stderr with exit status 1.

use std::io::Read;
use std::process::ExitCode;

use maxrect_harness::polygon_text::parse_polygon;
use maxrect_harness::runner::{run_polygon, RunConfig};

fn read_input(path: Option<&str>) -> Result<String, String> {
    match path {
        Some(p) => std::fs::read_to_string(p).map_err(|e| format!("{p}: {e}")),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| format!("stdin: {e}"))?;
            Ok(text)
        }
    }
}

fn run(args: &[String]) -> Result<Vec<String>, String> {
    let mut stats = false;
    let mut path = None;
    for arg in args {
        match arg.as_str() {
            "--stats" | "-v" => stats = true,
            flag if flag.starts_with('-') => return Err(format!("unknown flag: {flag}")),
            p if path.is_none() => path = Some(p),
            extra => return Err(format!("unexpected argument: {extra}")),
        }
    }

    let text = read_input(path)?;
    let vertices = parse_polygon(&text).map_err(|e| e.to_string())?;
    let report = run_polygon(&vertices, &RunConfig::default()).map_err(|e| e.to_string())?;

    let mut lines = vec![format!("max_area={}", report.max_area)];
    if stats {
        let c = &report.counters;
        lines.push(format!("vertices_loaded={}", report.vertices_loaded));
        lines.push(format!("candidates_tested={}", c.candidates_tested));
        lines.push(format!("candidates_pruned={}", c.candidates_pruned));
        lines.push(format!("candidates_accepted={}", c.candidates_accepted));
        lines.push(format!("validation_cycles={}", c.validation_cycles));
        lines.push(format!("advances={}", c.advances));
    }
    Ok(lines)
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("maxrect: {message}");
            ExitCode::FAILURE
        }
    }
}
