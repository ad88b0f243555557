//! CPU and memory utilization estimates.

use crate::config::ComponentConfig;
use crate::jitter::Jitter;
use crate::profile;

/// Estimated resource utilization of one component.
///
/// `cpu_pct` is floored at 0 but *not* capped at 100: values above 100
/// mean the component is past saturation, and the latency and throughput
/// calculators use that overshoot. `memory_pct` never drops below the
/// kind's base footprint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Utilization {
    pub cpu_pct: f64,
    pub memory_pct: f64,
    /// Little's-law estimate of requests in flight.
    pub active_requests: f64,
}

pub fn utilization(component: &ComponentConfig, incoming_rps: f64, jitter: &mut Jitter) -> Utilization {
    let kind = component.kind;
    let prof = profile::profile(kind);

    // One core handles ~1000 rps at intensity 1.0. Floor the capacity so a
    // zero-core spec degrades to a huge-but-finite percentage, not NaN.
    let cpu_capacity_rps = (component.specs.cpu * 1000.0).max(1.0);
    let cpu_pct =
        (incoming_rps / cpu_capacity_rps * 100.0 * prof.cpu_intensity + jitter.symmetric(5.0))
            .max(0.0);

    let active_requests = incoming_rps * (prof.base_latency_ms / 1000.0);
    let capacity_mb = (component.specs.memory * 1024.0).max(1.0);
    let base_pct = profile::base_memory_mb(kind) / capacity_mb * 100.0;
    let dynamic_pct = active_requests * profile::memory_per_request_mb(kind) / capacity_mb * 100.0;
    let memory_pct = (dynamic_pct + base_pct).max(base_pct);

    Utilization {
        cpu_pct,
        memory_pct,
        active_requests,
    }
}
