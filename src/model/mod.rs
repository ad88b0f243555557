//! Per-component metric calculators.
//!
//! Each is a small pure function of the component's capacity, its kind
//! profile, and the load arriving at it. CPU utilization is deliberately
//! left unclamped above 100% here so downstream calculators see how far
//! past saturation a component is; the engine clamps at the metrics
//! boundary.

pub mod error_rate;
pub mod latency;
pub mod throughput;
pub mod utilization;

pub use error_rate::error_rate_pct;
pub use latency::latency_ms;
pub use throughput::throughput_rps;
pub use utilization::{utilization, Utilization};
