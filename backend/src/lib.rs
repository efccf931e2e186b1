//! Stockroom: a per-user inventory tracker.
//!
//! The crate is laid out hexagonally. [`domain`] owns the rules and ports,
//! [`inbound`] adapts HTTP onto the driving ports, and [`outbound`]
//! provides storage and hashing adapters for the driven ones.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

pub use domain::TraceId;
pub use middleware::Trace;
