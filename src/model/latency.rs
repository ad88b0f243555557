//! Latency estimate: base service time inflated by resource pressure.

use crate::config::ComponentConfig;
use crate::jitter::Jitter;
use crate::model::Utilization;
use crate::profile;

/// Estimated response latency in milliseconds.
///
/// Starts at the kind's base latency and applies, in order: CPU pressure
/// above 70%, memory pressure above 80%, a flat 1.5x for network
/// saturation, then ±10% jitter. Never reports below 1 ms.
pub fn latency_ms(
    component: &ComponentConfig,
    util: &Utilization,
    incoming_rps: f64,
    jitter: &mut Jitter,
) -> f64 {
    let mut latency = profile::profile(component.kind).base_latency_ms;

    if util.cpu_pct > 70.0 {
        latency *= 1.0 + (util.cpu_pct - 70.0) / 100.0;
    }
    if util.memory_pct > 80.0 {
        latency *= 1.0 + (util.memory_pct - 80.0) / 50.0;
    }
    // Rough Mbps-to-rps saturation point.
    if incoming_rps > component.specs.network * 100.0 {
        latency *= 1.5;
    }

    latency += jitter.proportional(latency, 0.1);
    latency.max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ComponentKind, ComponentSpec};

    fn component(kind: ComponentKind, network: f64) -> ComponentConfig {
        ComponentConfig {
            id: "c".into(),
            kind,
            name: "c".into(),
            specs: ComponentSpec {
                cpu: 2.0,
                memory: 4.0,
                storage: 20.0,
                network,
            },
            scaling: Default::default(),
            connections: vec![],
        }
    }

    fn util(cpu: f64, memory: f64) -> Utilization {
        Utilization {
            cpu_pct: cpu,
            memory_pct: memory,
            active_requests: 0.0,
        }
    }

    #[test]
    fn unloaded_component_reports_base_latency() {
        let c = component(ComponentKind::Database, 1000.0);
        let l = latency_ms(&c, &util(10.0, 20.0), 100.0, &mut Jitter::disabled());
        assert_eq!(l, 20.0);
    }

    #[test]
    fn cpu_pressure_inflates_latency() {
        let c = component(ComponentKind::Database, 1000.0);
        // cpu 90 -> * (1 + 20/100) = 24 ms
        let l = latency_ms(&c, &util(90.0, 20.0), 100.0, &mut Jitter::disabled());
        assert!((l - 24.0).abs() < 1e-9);
    }

    #[test]
    fn memory_pressure_stacks_on_cpu_pressure() {
        let c = component(ComponentKind::Database, 1000.0);
        // 20 * 1.2 * (1 + 10/50) = 28.8 ms
        let l = latency_ms(&c, &util(90.0, 90.0), 100.0, &mut Jitter::disabled());
        assert!((l - 28.8).abs() < 1e-9);
    }

    #[test]
    fn network_saturation_applies_flat_penalty() {
        let c = component(ComponentKind::Cache, 1.0);
        // base 1 ms, load 200 > 1 * 100 -> * 1.5
        let l = latency_ms(&c, &util(10.0, 20.0), 200.0, &mut Jitter::disabled());
        assert!((l - 1.5).abs() < 1e-9);
    }

    #[test]
    fn latency_is_floored_at_one_ms() {
        let c = component(ComponentKind::Cache, 1000.0);
        for seed in 0..64 {
            let l = latency_ms(&c, &util(0.0, 0.0), 1.0, &mut Jitter::seeded(seed));
            assert!(l >= 1.0);
        }
    }

    #[test]
    fn jitter_stays_within_ten_percent() {
        let c = component(ComponentKind::Database, 1000.0);
        for seed in 0..64 {
            let l = latency_ms(&c, &util(10.0, 20.0), 100.0, &mut Jitter::seeded(seed));
            assert!((18.0..=22.0).contains(&l));
        }
    }
}
