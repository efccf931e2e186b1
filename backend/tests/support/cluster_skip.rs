//! Skip policy for suites that depend on the embedded cluster.
//!
//! Bootstrapping downloads PostgreSQL binaries, so hosts without network
//! access skip these suites with a `SKIP-TEST-CLUSTER` marker. CI sets
//! `REQUIRE_TEST_CLUSTER=1` to turn a failed bootstrap into a test failure.

/// True when `REQUIRE_TEST_CLUSTER` is "1", "true" or "yes" (any case).
pub fn require_test_cluster() -> bool {
    std::env::var("REQUIRE_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Report a cluster setup failure: skip with a marker, or panic when the
/// cluster is required.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if require_test_cluster() {
        panic!("Test cluster setup failed: {reason}. Unset REQUIRE_TEST_CLUSTER to skip.");
    }
    eprintln!("SKIP-TEST-CLUSTER: {reason}");
    None
}
