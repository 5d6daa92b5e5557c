//! Contract Test: Container Label Source
//!
//! This test verifies how domains are read from container labels.
//!
//! Constraints verified:
//! - Stopped containers are listed too
//! - Containers without the label are skipped silently
//! - A malformed label skips only its own container
//! - Client and listing failures append nothing
//! - The runtime handle is released exactly once on every path
//!
//! If this test fails, label reading is no longer best-effort.

mod common;

use common::*;
use ddns_core::Error;
use ddns_core::sources::{LabelScan, read_domains_from_labels};

const LABEL: &str = "cf_ddns_domain";

#[tokio::test]
async fn appends_domains_in_container_order() {
    let factory = ScriptedRuntimeFactory::with_containers(vec![
        labeled("web", "z.com,a.com"),
        unlabeled("db"),
        labeled("api", "m.com"),
    ]);

    let mut out = domains(&["existing.com"]);
    let scan = read_domains_from_labels(&factory, LABEL, &mut out)
        .await
        .expect("enumeration succeeds");

    assert_eq!(out, domains(&["existing.com", "z.com", "a.com", "m.com"]));
    assert_eq!(
        scan,
        LabelScan {
            containers: 3,
            labeled: 2,
            rejected: 0,
            domains: 3,
        }
    );
}

#[tokio::test]
async fn lists_stopped_containers() {
    let factory = ScriptedRuntimeFactory::with_containers(Vec::new());
    let mut out = Vec::new();

    read_domains_from_labels(&factory, LABEL, &mut out)
        .await
        .expect("enumeration succeeds");

    assert_eq!(factory.counters().list_calls(), 1);
    assert_eq!(factory.counters().included_stopped(), 1);
}

#[tokio::test]
async fn malformed_label_skips_only_that_container() {
    let factory = ScriptedRuntimeFactory::with_containers(vec![
        labeled("broken", "ok.example,not a..domain"),
        labeled("fine", "x.example"),
    ]);

    let mut out = Vec::new();
    let scan = read_domains_from_labels(&factory, LABEL, &mut out)
        .await
        .expect("a bad label is not fatal");

    assert_eq!(out, domains(&["x.example"]));
    assert_eq!(scan.labeled, 2);
    assert_eq!(scan.rejected, 1);
}

#[tokio::test]
async fn duplicates_are_kept() {
    let factory = ScriptedRuntimeFactory::with_containers(vec![
        labeled("one", "a.com"),
        labeled("two", "a.com"),
    ]);

    let mut out = Vec::new();
    read_domains_from_labels(&factory, LABEL, &mut out)
        .await
        .expect("enumeration succeeds");

    assert_eq!(out, domains(&["a.com", "a.com"]));
}

#[tokio::test]
async fn unreachable_runtime_is_fatal_and_appends_nothing() {
    let factory = ScriptedRuntimeFactory::new(Script::Unreachable);

    let mut out = domains(&["existing.com"]);
    let err = read_domains_from_labels(&factory, LABEL, &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ClientUnavailable(_)));
    assert_eq!(out, domains(&["existing.com"]));
    assert_eq!(factory.counters().connected(), 0);
    assert_eq!(factory.counters().released(), 0);
}

#[tokio::test]
async fn listing_failure_is_fatal_and_releases_handle() {
    let factory = ScriptedRuntimeFactory::new(Script::ListingFails);

    let mut out = Vec::new();
    let err = read_domains_from_labels(&factory, LABEL, &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ListingFailed(_)));
    assert!(out.is_empty());
    assert_eq!(factory.counters().connected(), 1);
    assert_eq!(factory.counters().released(), 1);
}

#[tokio::test]
async fn handle_released_once_after_partial_enumeration() {
    let factory = ScriptedRuntimeFactory::with_containers(vec![
        labeled("broken", "-bad.com"),
        labeled("fine", "good.com"),
    ]);

    let mut out = Vec::new();
    read_domains_from_labels(&factory, LABEL, &mut out)
        .await
        .expect("enumeration succeeds");

    assert_eq!(factory.counters().connected(), 1);
    assert_eq!(factory.counters().released(), 1);
}

#[tokio::test]
async fn custom_label_key() {
    let factory = ScriptedRuntimeFactory::with_containers(vec![
        labeled("web", "ignored.com"),
        unlabeled("api").with_label("ddns.domains", "used.com"),
    ]);

    let mut out = Vec::new();
    read_domains_from_labels(&factory, "ddns.domains", &mut out)
        .await
        .expect("enumeration succeeds");

    assert_eq!(out, domains(&["used.com"]));
}
