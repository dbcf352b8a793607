//! Canonical serialization and content digests for search artifacts.

pub mod canon;
pub mod hash;
pub mod hash_domain;
