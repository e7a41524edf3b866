//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (structured fields, request ID via middleware)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout log lines (tracing-subscriber, EnvFilter)
//!     → Metrics endpoint (Prometheus scrape)
//! ```

pub mod metrics;
