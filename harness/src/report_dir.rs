//! Report directory persistence: write/read/verify a [`SearchReport`].
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   report.json          canonical JSON of the report
//!   report_digest.txt    "sha256:..." over report.json in the report domain
//! ```
//!
//! The directory path is never part of the digest.
//!
//! # Fail-closed semantics
//!
//! - Missing file → error
//! - Non-canonical `report.json` → error
//! - Unknown `schema_version` → error
//! - Digest mismatch → error

use std::path::Path;

use maxrect_kernel::proof::canon::is_canonical;
use maxrect_kernel::proof::hash::{canonical_hash, ContentHash};
use maxrect_kernel::proof::hash_domain::HashDomain;
use maxrect_search::report::{SearchReport, REPORT_SCHEMA_VERSION};

const REPORT_FILENAME: &str = "report.json";
const DIGEST_FILENAME: &str = "report_digest.txt";

/// Error writing or reading a report directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportDirError {
    /// I/O error.
    Io { detail: String },
    /// Canonical JSON serialization failed.
    Canon { detail: String },
    /// A required file is missing.
    MissingFile { filename: String },
    /// `report.json` is not valid JSON.
    Parse { detail: String },
    /// `report.json` is valid JSON but not in canonical form.
    NotCanonical,
    /// `schema_version` is not recognized.
    SchemaMismatch { found: String },
    /// `report_digest.txt` does not match the recomputed digest.
    DigestMismatch { stored: String, recomputed: String },
}

impl std::fmt::Display for ReportDirError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::Canon { detail } => write!(f, "canonical JSON error: {detail}"),
            Self::MissingFile { filename } => write!(f, "missing file: {filename}"),
            Self::Parse { detail } => write!(f, "report parse error: {detail}"),
            Self::NotCanonical => write!(f, "{REPORT_FILENAME} is not canonical JSON"),
            Self::SchemaMismatch { found } => write!(f, "schema version mismatch: {found}"),
            Self::DigestMismatch { stored, recomputed } => write!(
                f,
                "digest mismatch: stored={stored}, recomputed={recomputed}"
            ),
        }
    }
}

impl std::error::Error for ReportDirError {}

/// A report read back from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredReport {
    pub value: serde_json::Value,
    pub bytes: Vec<u8>,
    pub digest: ContentHash,
}

impl StoredReport {
    /// `max_area` field, if present and integral.
    #[must_use]
    pub fn max_area(&self) -> Option<u64> {
        self.value["max_area"].as_u64()
    }
}

/// Write `report` into `dir`, creating it if needed. Returns the digest.
///
/// # Errors
///
/// [`ReportDirError::Io`] or [`ReportDirError::Canon`].
pub fn write_report_dir(report: &SearchReport, dir: &Path) -> Result<ContentHash, ReportDirError> {
    std::fs::create_dir_all(dir).map_err(|e| ReportDirError::Io {
        detail: format!("create_dir_all: {e}"),
    })?;
    let bytes = report
        .to_canonical_json_bytes()
        .map_err(|e| ReportDirError::Canon {
            detail: e.to_string(),
        })?;
    let digest = canonical_hash(HashDomain::SearchReport, &bytes);
    write_atomic(&dir.join(REPORT_FILENAME), &bytes)?;
    write_atomic(&dir.join(DIGEST_FILENAME), digest.to_string().as_bytes())?;
    Ok(digest)
}

/// Read and verify a report directory.
///
/// # Errors
///
/// Any [`ReportDirError`] listed in the module docs.
pub fn read_report_dir(dir: &Path) -> Result<StoredReport, ReportDirError> {
    let bytes = read_required(dir, REPORT_FILENAME)?;
    let stored_digest = read_required(dir, DIGEST_FILENAME)?;

    let value: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|e| ReportDirError::Parse {
            detail: e.to_string(),
        })?;
    if !is_canonical(&bytes) {
        return Err(ReportDirError::NotCanonical);
    }
    let schema = value["schema_version"].as_str().unwrap_or("");
    if schema != REPORT_SCHEMA_VERSION {
        return Err(ReportDirError::SchemaMismatch {
            found: schema.to_string(),
        });
    }

    let recomputed = canonical_hash(HashDomain::SearchReport, &bytes);
    let stored = String::from_utf8_lossy(&stored_digest).trim().to_string();
    if ContentHash::parse(&stored) != Some(recomputed) {
        return Err(ReportDirError::DigestMismatch {
            stored,
            recomputed: recomputed.to_string(),
        });
    }

    Ok(StoredReport {
        value,
        bytes,
        digest: recomputed,
    })
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Write via temp file + rename in the same directory.
fn write_atomic(path: &Path, content: &[u8]) -> Result<(), ReportDirError> {
    let dir = path.parent().ok_or_else(|| ReportDirError::Io {
        detail: "no parent directory".into(),
    })?;
    let temp_name = format!(
        ".tmp_{}",
        path.file_name().unwrap_or_default().to_string_lossy()
    );
    let temp_path = dir.join(temp_name);
    std::fs::write(&temp_path, content).map_err(|e| ReportDirError::Io {
        detail: format!("write {}: {e}", temp_path.display()),
    })?;
    std::fs::rename(&temp_path, path).map_err(|e| ReportDirError::Io {
        detail: format!("rename {} to {}: {e}", temp_path.display(), path.display()),
    })
}

fn read_required(dir: &Path, filename: &str) -> Result<Vec<u8>, ReportDirError> {
    std::fs::read(dir.join(filename)).map_err(|_| ReportDirError::MissingFile {
        filename: filename.to_string(),
    })
}
