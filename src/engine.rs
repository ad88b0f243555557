//! Simulation engine: one synchronous pass over the component graph.

use tracing::{debug, trace};

use crate::advisor;
use crate::aggregate;
use crate::config::{ComponentConfig, LoadPattern};
use crate::jitter::Jitter;
use crate::metrics::{ComponentMetrics, SystemMetrics};
use crate::model;
use crate::propagation;

/// Analytical performance-simulation engine.
///
/// Holds only the jitter source; every [`simulate`] call is otherwise
/// stateless and produces a fresh [`SystemMetrics`]. Components are
/// evaluated sequentially in input order, which is also the order the
/// error-rate fold consumes them in.
///
/// [`simulate`]: SimulationEngine::simulate
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    jitter: Jitter,
}

impl SimulationEngine {
    pub fn new(jitter: Jitter) -> Self {
        Self { jitter }
    }

    /// Estimate how `components` behave under `load`.
    ///
    /// Never fails: unknown kinds fall back to generic profiles, dangling
    /// connections are ignored, and an empty component list yields the
    /// zeroed report.
    pub fn simulate(
        &mut self,
        components: &[ComponentConfig],
        load: &LoadPattern,
    ) -> SystemMetrics {
        if components.is_empty() {
            debug!("simulate called with no components");
            return SystemMetrics::empty();
        }

        debug!(
            components = components.len(),
            rps = load.requests_per_second,
            pattern = ?load.pattern,
            "running simulation"
        );

        let per_component: Vec<ComponentMetrics> = components
            .iter()
            .map(|c| self.component_metrics(c, components, load))
            .collect();

        let findings = advisor::analyze(&per_component);
        let report = SystemMetrics {
            total_latency: aggregate::total_latency_ms(&per_component),
            total_throughput: aggregate::total_throughput_rps(&per_component),
            total_error_rate: aggregate::total_error_rate_pct(&per_component),
            total_cost: aggregate::total_cost_usd(&per_component),
            bottlenecks: findings.bottlenecks,
            recommendations: findings.recommendations,
            components: per_component,
        };

        debug!(
            total_latency_ms = report.total_latency,
            total_throughput_rps = report.total_throughput,
            bottlenecks = report.bottlenecks.len(),
            "simulation complete"
        );
        report
    }

    /// Metrics for one component. CPU and memory percentages are clamped
    /// to [0, 100] here, at the metrics boundary; the calculators see the
    /// raw overshoot.
    fn component_metrics(
        &mut self,
        component: &ComponentConfig,
        all: &[ComponentConfig],
        load: &LoadPattern,
    ) -> ComponentMetrics {
        let incoming = propagation::incoming_load(component, all, load);
        let util = model::utilization(component, incoming, &mut self.jitter);
        let latency = model::latency_ms(component, &util, incoming, &mut self.jitter);
        let throughput = model::throughput_rps(component, &util, incoming);
        let error_rate = model::error_rate_pct(component.kind, &util);

        trace!(
            id = %component.id,
            incoming_rps = incoming,
            cpu_pct = util.cpu_pct,
            latency_ms = latency,
            "component evaluated"
        );

        ComponentMetrics {
            id: component.id.clone(),
            kind: component.kind,
            cpu_pct: util.cpu_pct.clamp(0.0, 100.0),
            memory_pct: util.memory_pct.clamp(0.0, 100.0),
            latency_ms: latency,
            throughput_rps: throughput,
            error_rate_pct: error_rate,
            connections: util.active_requests.round().max(0.0) as u64,
        }
    }
}
