//! Hash domain governance lock tests.
//!
//! Proves:
//! 1. Canonical domain set has expected count (catches forgotten additions to ALL)
//! 2. All domain byte strings are unique
//! 3. All domains are null-terminated
//! 4. All domains follow the `MAXRECT::*::V1\0` naming convention
//! 5. Equal bytes hash differently under different domains

use std::collections::BTreeSet;

use maxrect_kernel::proof::hash::canonical_hash;
use maxrect_kernel::proof::hash_domain::HashDomain;

// ---------------------------------------------------------------------------
// 1. Canonical set count
// ---------------------------------------------------------------------------

#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        HashDomain::ALL.len(),
        3,
        "expected 3 domain variants; if you added a new domain, update this count"
    );
}

// ---------------------------------------------------------------------------
// 2. All unique bytes
// ---------------------------------------------------------------------------

#[test]
fn hash_domain_all_unique_bytes() {
    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        assert!(
            seen.insert(domain.as_bytes()),
            "duplicate domain bytes: {domain}"
        );
    }
}

// ---------------------------------------------------------------------------
// 3. All null-terminated
// ---------------------------------------------------------------------------

#[test]
fn hash_domain_all_null_terminated() {
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(bytes.ends_with(&[0]), "{domain} is not null-terminated");
        assert_eq!(
            bytes.iter().filter(|&&b| b == 0).count(),
            1,
            "{domain} has an interior NUL"
        );
    }
}

// ---------------------------------------------------------------------------
// 4. Naming convention
// ---------------------------------------------------------------------------

#[test]
fn hash_domain_naming_convention() {
    for domain in HashDomain::ALL {
        let text = std::str::from_utf8(domain.as_bytes()).expect("ASCII domain");
        assert!(text.starts_with("MAXRECT::"), "{domain}: {text:?}");
        assert!(text.ends_with("::V1\0"), "{domain}: {text:?}");
        let body = &text["MAXRECT::".len()..text.len() - "::V1\0".len()];
        assert!(
            body.chars().all(|c| c.is_ascii_uppercase() || c == '_'),
            "{domain}: {body:?}"
        );
    }
}

// ---------------------------------------------------------------------------
// 5. Domain separation
// ---------------------------------------------------------------------------

#[test]
fn same_bytes_different_domains() {
    let digests: BTreeSet<_> = HashDomain::ALL
        .iter()
        .map(|&d| canonical_hash(d, b"{}"))
        .collect();
    assert_eq!(digests.len(), HashDomain::ALL.len());
}
