//! Throughput estimate: offered load capped by degraded capacity.

use crate::config::ComponentConfig;
use crate::model::Utilization;
use crate::profile;

/// Requests per second the component actually serves.
///
/// Capacity is the kind's per-core base throughput scaled by core count;
/// past 80% CPU it degrades linearly down to a 10% floor. A component never
/// reports serving more than the load offered to it.
pub fn throughput_rps(component: &ComponentConfig, util: &Utilization, incoming_rps: f64) -> f64 {
    let mut max_throughput =
        profile::profile(component.kind).base_throughput_rps * component.specs.cpu;

    if util.cpu_pct > 80.0 {
        max_throughput *= ((100.0 - util.cpu_pct) / 20.0).max(0.1);
    }

    incoming_rps.min(max_throughput).max(0.0)
}
