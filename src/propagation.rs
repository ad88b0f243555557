//! Load propagation: how much of the external request rate reaches a
//! component, given the connection graph.

use crate::config::{ComponentConfig, ComponentConnection, LoadPattern};

/// Request rate (rps) arriving at `component`.
///
/// A component with no inbound edges is an entry point and receives the full
/// external rate. Otherwise the rate is scaled by the mean of the inbound
/// edge weights (mean, not sum: edges are not required to normalize to 1)
/// and by the traffic multiplier of the *first* inbound edge's kind — the
/// first-edge rule is a known simplification kept for compatibility with
/// the original heuristic, even when inbound edges are heterogeneous.
///
/// Connections whose `to` references an id not present in the system simply
/// never match here; dangling edges are a caller-side validation concern.
pub fn incoming_load(
    component: &ComponentConfig,
    all: &[ComponentConfig],
    load: &LoadPattern,
) -> f64 {
    let inbound: Vec<&ComponentConnection> = all
        .iter()
        .flat_map(|c| c.connections.iter())
        .filter(|conn| conn.to == component.id)
        .collect();

    if inbound.is_empty() {
        return load.requests_per_second;
    }

    let mean_weight = inbound.iter().map(|c| c.weight).sum::<f64>() / inbound.len() as f64;
    let multiplier = inbound[0].kind.multiplier();

    (load.requests_per_second * mean_weight * multiplier).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ComponentKind, ConnectionKind, TrafficPattern};

    fn component(id: &str, connections: Vec<ComponentConnection>) -> ComponentConfig {
        ComponentConfig {
            id: id.into(),
            kind: ComponentKind::Microservice,
            name: id.into(),
            specs: Default::default(),
            scaling: Default::default(),
            connections,
        }
    }

    fn edge(from: &str, to: &str, kind: ConnectionKind, weight: f64) -> ComponentConnection {
        ComponentConnection {
            from: from.into(),
            to: to.into(),
            kind,
            weight,
        }
    }

    fn load(rps: f64) -> LoadPattern {
        LoadPattern {
            users: 100,
            duration: 60,
            ramp_up: 0,
            requests_per_second: rps,
            pattern: TrafficPattern::Constant,
        }
    }

    #[test]
    fn entry_point_receives_full_rate() {
        let a = component("a", vec![]);
        let system = vec![a.clone()];
        assert_eq!(incoming_load(&a, &system, &load(100.0)), 100.0);
    }

    #[test]
    fn inbound_weights_are_averaged_not_summed() {
        let a = component("a", vec![edge("a", "c", ConnectionKind::Sync, 0.8)]);
        let b = component("b", vec![edge("b", "c", ConnectionKind::Sync, 0.4)]);
        let c = component("c", vec![]);
        let system = vec![a, b, c.clone()];
        // mean(0.8, 0.4) = 0.6, sync multiplier 1.0
        assert_eq!(incoming_load(&c, &system, &load(100.0)), 60.0);
    }

    #[test]
    fn multiplier_comes_from_first_inbound_edge_only() {
        let a = component("a", vec![edge("a", "c", ConnectionKind::Cache, 0.5)]);
        let b = component("b", vec![edge("b", "c", ConnectionKind::Async, 0.5)]);
        let c = component("c", vec![]);
        let system = vec![a, b, c.clone()];
        // mean weight 0.5, cache multiplier 1.5 from the first edge; the
        // async edge's 0.8 is intentionally ignored.
        assert_eq!(incoming_load(&c, &system, &load(100.0)), 75.0);
    }

    #[test]
    fn dangling_edges_never_match() {
        let a = component("a", vec![edge("a", "ghost", ConnectionKind::Sync, 1.0)]);
        let b = component("b", vec![]);
        let system = vec![a, b.clone()];
        // "b" has no real inbound edge, so it stays an entry point.
        assert_eq!(incoming_load(&b, &system, &load(50.0)), 50.0);
    }

    #[test]
    fn negative_weights_clamp_to_zero_load() {
        let a = component("a", vec![edge("a", "c", ConnectionKind::Sync, -2.0)]);
        let c = component("c", vec![]);
        let system = vec![a, c.clone()];
        assert_eq!(incoming_load(&c, &system, &load(100.0)), 0.0);
    }
}
