//! Observability infrastructure
//!
//! Process-wide counters backing the metrics endpoint. Logging goes through
//! `tracing` and is configured by the binary.

pub mod metrics;
