//! Canonical JSON bytes for reports and policy snapshots.
//!
//! Every digest in the workspace is computed over bytes from
//! [`canonical_json_bytes`], so two artifacts with equal content always
//! hash equally.
//!
//! # Rules
//!
//! 1. Object keys sorted by byte order. Maps are rebuilt in sorted key
//!    order, so the result holds whether or not `serde_json`'s
//!    `preserve_order` feature is unified into the build.
//! 2. Compact separators, no whitespace.
//! 3. Integers only. Floats would make area and counter fields
//!    platform-formatting dependent, so they are rejected.

/// Error producing canonical JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A number that is neither `i64` nor `u64`.
    NonIntegerNumber { path: String, raw: String },
    /// `serde_json` failed to write the value.
    Serialize { detail: String },
}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerNumber { path, raw } => {
                write!(f, "non-integer number at {path}: {raw}")
            }
            Self::Serialize { detail } => write!(f, "serialization failed: {detail}"),
        }
    }
}

impl std::error::Error for CanonError {}

/// Produce canonical JSON bytes from `value`.
///
/// # Errors
///
/// [`CanonError::NonIntegerNumber`] names the JSON path of the first
/// offending number (depth-first, keys in sorted order).
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    let sorted = normalize(value, &mut String::from("$"))?;
    serde_json::to_vec(&sorted).map_err(|e| CanonError::Serialize {
        detail: e.to_string(),
    })
}

/// Whether `bytes` are exactly the canonical encoding of the JSON they hold.
#[must_use]
pub fn is_canonical(bytes: &[u8]) -> bool {
    serde_json::from_slice::<serde_json::Value>(bytes)
        .ok()
        .and_then(|v| canonical_json_bytes(&v).ok())
        .is_some_and(|canon| canon == bytes)
}

fn normalize(
    value: &serde_json::Value,
    path: &mut String,
) -> Result<serde_json::Value, CanonError> {
    match value {
        serde_json::Value::Number(n) if !(n.is_i64() || n.is_u64()) => {
            Err(CanonError::NonIntegerNumber {
                path: path.clone(),
                raw: n.to_string(),
            })
        }
        serde_json::Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                let len = path.len();
                path.push_str(&format!("[{i}]"));
                out.push(normalize(item, path)?);
                path.truncate(len);
            }
            Ok(serde_json::Value::Array(out))
        }
        serde_json::Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut out = serde_json::Map::new();
            for key in keys {
                let len = path.len();
                path.push('.');
                path.push_str(key);
                out.insert(key.clone(), normalize(&map[key.as_str()], path)?);
                path.truncate(len);
            }
            Ok(serde_json::Value::Object(out))
        }
        other => Ok(other.clone()),
    }
}
