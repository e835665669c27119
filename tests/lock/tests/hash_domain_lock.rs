//! Hash domain governance lock tests.
//!
//! Proves:
//! 1. All domain byte strings are unique (prevents domain collision)
//! 2. All domains are null-terminated
//! 3. All domains follow the `GOAP::*::V1\0` naming convention
//! 4. Digests are domain-separated and stable

use std::collections::BTreeSet;

use goap_harness::runner::DOMAIN_PLAN_REPORT;
use goap_kernel::carrier::state::{WorldState, DOMAIN_WORLD_STATE};
use goap_kernel::proof::hash::{canonical_hash, ContentHash};
use goap_search::plan::DOMAIN_PLAN;

const ALL: [&[u8]; 3] = [DOMAIN_WORLD_STATE, DOMAIN_PLAN, DOMAIN_PLAN_REPORT];

#[test]
fn hash_domain_all_unique_bytes() {
    let mut seen = BTreeSet::new();
    for domain in ALL {
        assert!(seen.insert(domain), "duplicate domain bytes: {domain:?}");
    }
}

#[test]
fn hash_domain_all_null_terminated() {
    for domain in ALL {
        assert!(domain.ends_with(&[0]), "{domain:?} is not null-terminated");
    }
}

#[test]
fn hash_domain_naming_convention() {
    for domain in ALL {
        let text = std::str::from_utf8(domain).unwrap();
        assert!(text.starts_with("GOAP::"), "{text:?}");
        assert!(text.ends_with("::V1\0"), "{text:?}");
    }
}

#[test]
fn same_bytes_under_different_domains_differ() {
    let data = WorldState::from_slots(vec![1, 2]).identity_bytes();
    let a = canonical_hash(DOMAIN_WORLD_STATE, &data);
    let b = canonical_hash(DOMAIN_PLAN, &data);
    assert_ne!(a, b);
    assert_eq!(a, WorldState::from_slots(vec![1, 2]).fingerprint());
}

#[test]
fn digests_parse_as_sha256_content_hashes() {
    let fingerprint = WorldState::from_slots(vec![10, 0]).fingerprint();
    let parsed = ContentHash::parse(fingerprint.as_str()).unwrap();
    assert_eq!(parsed.algorithm(), "sha256");
    assert_eq!(parsed.hex_digest().len(), 64);
}
