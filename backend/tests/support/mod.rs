//! Shared helpers for integration tests that need a real PostgreSQL.

mod cluster_skip;
mod pg_embed;

pub use cluster_skip::handle_cluster_setup_failure;
pub use pg_embed::test_cluster;
