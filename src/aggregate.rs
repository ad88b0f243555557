//! System-wide rollups over per-component metrics.

use crate::config::ComponentKind;
use crate::metrics::ComponentMetrics;
use crate::profile;

/// Kinds counted toward end-to-end latency: entry, compute, and
/// storage-like components. This is a type filter, not a graph walk —
/// a coarse stand-in for true path latency kept for compatibility with
/// the original heuristic.
const CRITICAL_PATH_KINDS: [ComponentKind; 4] = [
    ComponentKind::ApiGateway,
    ComponentKind::Microservice,
    ComponentKind::Database,
    ComponentKind::MlModel,
];

/// Sum of latencies over critical-path kinds, in milliseconds.
pub fn total_latency_ms(components: &[ComponentMetrics]) -> f64 {
    components
        .iter()
        .filter(|c| CRITICAL_PATH_KINDS.contains(&c.kind))
        .map(|c| c.latency_ms)
        .sum()
}

/// Minimum throughput across all components: the single global bottleneck
/// approximation. Zero for an empty system.
pub fn total_throughput_rps(components: &[ComponentMetrics]) -> f64 {
    components
        .iter()
        .map(|c| c.throughput_rps)
        .reduce(f64::min)
        .unwrap_or(0.0)
}

/// Combined error rate, folding each component's rate into the running
/// total as an independent probability: `r ← r + e − r·e/100`. Equivalent
/// to `100·(1 − Π(1 − eᵢ/100))` up to float rounding; evaluated in caller
/// order.
pub fn total_error_rate_pct(components: &[ComponentMetrics]) -> f64 {
    components.iter().fold(0.0, |rate, c| {
        rate + c.error_rate_pct - rate * c.error_rate_pct / 100.0
    })
}

/// Estimated hourly cost: each component's base cost inflated by up to 50%
/// with CPU utilization.
pub fn total_cost_usd(components: &[ComponentMetrics]) -> f64 {
    components
        .iter()
        .map(|c| profile::hourly_cost_usd(c.kind) * (1.0 + c.cpu_pct / 100.0 * 0.5))
        .sum()
}
