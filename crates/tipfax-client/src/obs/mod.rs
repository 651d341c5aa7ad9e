//! Observability: structured session events plus lightweight in-process
//! metrics rendered in Prometheus text format.

pub mod metrics;
pub mod observer;

pub use metrics::ClientMetrics;
pub use observer::{MemoryObserver, Observer, SessionEvent, TracingObserver};
