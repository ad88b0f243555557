//! Bottleneck detection and remediation recommendations.
//!
//! A rule-based pass over the per-component metrics. Each rule is an
//! independent threshold check; several may fire for the same component.
//! Recommendations are deduplicated in first-seen order so the caller can
//! render them as a stable list.

use crate::metrics::ComponentMetrics;

const CPU_BOTTLENECK_PCT: f64 = 80.0;
const MEMORY_BOTTLENECK_PCT: f64 = 85.0;
const LATENCY_BOTTLENECK_MS: f64 = 1000.0;
const ERROR_BOTTLENECK_PCT: f64 = 1.0;

/// Bottleneck findings and remediation suggestions for one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Findings {
    pub bottlenecks: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Evaluate the threshold rules against every component.
pub fn analyze(components: &[ComponentMetrics]) -> Findings {
    let mut findings = Findings::default();

    for c in components {
        if c.cpu_pct > CPU_BOTTLENECK_PCT {
            findings.bottlenecks.push(format!(
                "{}: CPU utilization at {:.0}% (threshold {:.0}%)",
                c.id, c.cpu_pct, CPU_BOTTLENECK_PCT
            ));
            findings.recommend(format!(
                "Scale out {} or increase its CPU allocation",
                c.id
            ));
        }
        if c.memory_pct > MEMORY_BOTTLENECK_PCT {
            findings.bottlenecks.push(format!(
                "{}: memory utilization at {:.0}% (threshold {:.0}%)",
                c.id, c.memory_pct, MEMORY_BOTTLENECK_PCT
            ));
            findings.recommend(format!(
                "Increase memory for {} or add connection pooling",
                c.id
            ));
        }
        if c.latency_ms > LATENCY_BOTTLENECK_MS {
            findings.bottlenecks.push(format!(
                "{}: latency at {:.0} ms (threshold {:.0} ms)",
                c.id, c.latency_ms, LATENCY_BOTTLENECK_MS
            ));
            findings.recommend(format!(
                "Add caching in front of {} or optimize its hot path",
                c.id
            ));
        }
        if c.error_rate_pct > ERROR_BOTTLENECK_PCT {
            findings.bottlenecks.push(format!(
                "{}: error rate at {:.2}% (threshold {:.0}%)",
                c.id, c.error_rate_pct, ERROR_BOTTLENECK_PCT
            ));
            findings.recommend(format!(
                "Add circuit breakers and retries around {}",
                c.id
            ));
        }
    }

    if findings.bottlenecks.len() > 2 {
        findings.recommend(
            "Multiple bottlenecks detected: consider a service mesh for traffic management"
                .to_string(),
        );
        findings
            .recommend("Add distributed tracing to pinpoint cross-service pressure".to_string());
    }

    findings
}

impl Findings {
    fn recommend(&mut self, text: String) {
        if !self.recommendations.contains(&text) {
            self.recommendations.push(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ComponentKind;

    fn healthy(id: &str) -> ComponentMetrics {
        ComponentMetrics {
            id: id.into(),
            kind: ComponentKind::Microservice,
            cpu_pct: 30.0,
            memory_pct: 40.0,
            latency_ms: 50.0,
            throughput_rps: 500.0,
            error_rate_pct: 0.1,
            connections: 10,
        }
    }

    #[test]
    fn healthy_system_has_no_findings() {
        let f = analyze(&[healthy("a"), healthy("b")]);
        assert!(f.bottlenecks.is_empty());
        assert!(f.recommendations.is_empty());
    }

    #[test]
    fn multiple_rules_fire_for_one_component() {
        let mut c = healthy("db");
        c.cpu_pct = 95.0;
        c.memory_pct = 92.0;
        c.error_rate_pct = 2.5;
        let f = analyze(&[c]);
        assert_eq!(f.bottlenecks.len(), 3);
        assert!(f.bottlenecks[0].contains("CPU"));
        assert!(f.bottlenecks[1].contains("memory"));
        assert!(f.bottlenecks[2].contains("error rate"));
    }

    #[test]
    fn recommendations_are_deduplicated() {
        let mut a = healthy("svc");
        a.cpu_pct = 90.0;
        // Same component listed twice (e.g. two what-if runs merged) must
        // not duplicate the scale-out suggestion.
        let f = analyze(&[a.clone(), a]);
        assert_eq!(f.bottlenecks.len(), 2);
        assert_eq!(
            f.recommendations
                .iter()
                .filter(|r| r.contains("Scale out svc"))
                .count(),
            1
        );
    }

    #[test]
    fn widespread_pressure_adds_system_level_advice() {
        let mut a = healthy("a");
        a.cpu_pct = 90.0;
        let mut b = healthy("b");
        b.memory_pct = 95.0;
        let mut c = healthy("c");
        c.latency_ms = 1500.0;
        let f = analyze(&[a, b, c]);
        assert_eq!(f.bottlenecks.len(), 3);
        assert!(f.recommendations.iter().any(|r| r.contains("service mesh")));
        assert!(f
            .recommendations
            .iter()
            .any(|r| r.contains("distributed tracing")));
    }

    #[test]
    fn two_bottlenecks_do_not_trigger_system_advice() {
        let mut a = healthy("a");
        a.cpu_pct = 90.0;
        let mut b = healthy("b");
        b.memory_pct = 95.0;
        let f = analyze(&[a, b]);
        assert!(!f.recommendations.iter().any(|r| r.contains("service mesh")));
    }

    #[test]
    fn thresholds_are_strict_inequalities() {
        let mut c = healthy("edge");
        c.cpu_pct = 80.0;
        c.memory_pct = 85.0;
        c.latency_ms = 1000.0;
        c.error_rate_pct = 1.0;
        let f = analyze(&[c]);
        assert!(f.bottlenecks.is_empty());
    }
}
