//! Output data model: what one simulation run reports back to the caller.

use serde::{Deserialize, Serialize};

use crate::config::ComponentKind;

/// Estimated behavior of a single component under the simulated load.
///
/// Percentages are clamped at this boundary: `cpu_pct` and `memory_pct` to
/// [0, 100], `error_rate_pct` to [0, 10]. Internal calculators may see
/// unclamped figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMetrics {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    #[serde(rename = "cpu")]
    pub cpu_pct: f64,
    #[serde(rename = "memory")]
    pub memory_pct: f64,
    #[serde(rename = "latency")]
    pub latency_ms: f64,
    #[serde(rename = "throughput")]
    pub throughput_rps: f64,
    #[serde(rename = "errorRate")]
    pub error_rate_pct: f64,
    /// Estimated requests in flight (Little's-law style estimate).
    pub connections: u64,
}

/// System-wide rollup for one run, plus the per-component breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemMetrics {
    /// Sum of latencies over critical-path component kinds, in ms.
    pub total_latency: f64,
    /// Minimum component throughput, in rps. Zero for an empty system.
    pub total_throughput: f64,
    /// Combined independent-probability error rate, percent.
    pub total_error_rate: f64,
    /// Estimated hourly cost in USD.
    pub total_cost: f64,
    pub bottlenecks: Vec<String>,
    pub recommendations: Vec<String>,
    pub components: Vec<ComponentMetrics>,
}

impl SystemMetrics {
    /// The all-zero report returned for an empty component list.
    pub fn empty() -> Self {
        Self {
            total_latency: 0.0,
            total_throughput: 0.0,
            total_error_rate: 0.0,
            total_cost: 0.0,
            bottlenecks: Vec::new(),
            recommendations: Vec::new(),
            components: Vec::new(),
        }
    }
}
