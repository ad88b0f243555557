//! Static per-kind base characteristics.
//!
//! Five lookup tables keyed by [`ComponentKind`], initialized once and never
//! mutated. Every accessor falls back to the generic microservice row for
//! kinds it has no entry for; a lookup miss is never an error.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::config::ComponentKind;

/// Base latency/throughput/CPU characteristics of one component kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindProfile {
    /// Unloaded service time in milliseconds.
    pub base_latency_ms: f64,
    /// Sustainable requests per second per CPU core.
    pub base_throughput_rps: f64,
    /// Fraction of a core consumed per 1000 rps, in (0, 1].
    pub cpu_intensity: f64,
}

/// Generic microservice row, used for `Custom` and any missing entry.
pub const DEFAULT_PROFILE: KindProfile = KindProfile {
    base_latency_ms: 50.0,
    base_throughput_rps: 1000.0,
    cpu_intensity: 0.7,
};

const DEFAULT_MEMORY_PER_REQUEST_MB: f64 = 2.0;
const DEFAULT_BASE_MEMORY_MB: f64 = 1024.0;
const DEFAULT_BASE_ERROR_RATE_PCT: f64 = 0.1;
const DEFAULT_HOURLY_COST_USD: f64 = 0.05;

static PROFILES: Lazy<HashMap<ComponentKind, KindProfile>> = Lazy::new(|| {
    use ComponentKind::*;
    HashMap::from([
        (
            LoadBalancer,
            KindProfile {
                base_latency_ms: 2.0,
                base_throughput_rps: 10_000.0,
                cpu_intensity: 0.3,
            },
        ),
        (
            ApiGateway,
            KindProfile {
                base_latency_ms: 5.0,
                base_throughput_rps: 8_000.0,
                cpu_intensity: 0.6,
            },
        ),
        (Microservice, DEFAULT_PROFILE),
        (
            Frontend,
            KindProfile {
                base_latency_ms: 30.0,
                base_throughput_rps: 2_000.0,
                cpu_intensity: 0.4,
            },
        ),
        (
            Database,
            KindProfile {
                base_latency_ms: 20.0,
                base_throughput_rps: 500.0,
                cpu_intensity: 0.8,
            },
        ),
        (
            Cache,
            KindProfile {
                base_latency_ms: 1.0,
                base_throughput_rps: 50_000.0,
                cpu_intensity: 0.2,
            },
        ),
        (
            MessageQueue,
            KindProfile {
                base_latency_ms: 10.0,
                base_throughput_rps: 20_000.0,
                cpu_intensity: 0.4,
            },
        ),
        (
            MlModel,
            KindProfile {
                base_latency_ms: 200.0,
                base_throughput_rps: 100.0,
                cpu_intensity: 0.95,
            },
        ),
        (
            Cdn,
            KindProfile {
                base_latency_ms: 15.0,
                base_throughput_rps: 50_000.0,
                cpu_intensity: 0.1,
            },
        ),
        (
            ObjectStore,
            KindProfile {
                base_latency_ms: 100.0,
                base_throughput_rps: 1_000.0,
                cpu_intensity: 0.3,
            },
        ),
    ])
});

static MEMORY_PER_REQUEST_MB: Lazy<HashMap<ComponentKind, f64>> = Lazy::new(|| {
    use ComponentKind::*;
    HashMap::from([
        (LoadBalancer, 0.1),
        (ApiGateway, 0.5),
        (Microservice, 2.0),
        (Frontend, 1.0),
        (Database, 5.0),
        (Cache, 1.0),
        (MessageQueue, 1.5),
        (MlModel, 50.0),
        (Cdn, 0.2),
        (ObjectStore, 3.0),
    ])
});

static BASE_MEMORY_MB: Lazy<HashMap<ComponentKind, f64>> = Lazy::new(|| {
    use ComponentKind::*;
    HashMap::from([
        (LoadBalancer, 256.0),
        (ApiGateway, 512.0),
        (Microservice, 1024.0),
        (Frontend, 512.0),
        (Database, 2048.0),
        (Cache, 4096.0),
        (MessageQueue, 1024.0),
        (MlModel, 8192.0),
        (Cdn, 512.0),
        (ObjectStore, 1024.0),
    ])
});

static BASE_ERROR_RATE_PCT: Lazy<HashMap<ComponentKind, f64>> = Lazy::new(|| {
    use ComponentKind::*;
    HashMap::from([
        (LoadBalancer, 0.01),
        (ApiGateway, 0.05),
        (Microservice, 0.1),
        (Frontend, 0.05),
        (Database, 0.05),
        (Cache, 0.01),
        (MessageQueue, 0.02),
        (MlModel, 0.5),
        (Cdn, 0.01),
        (ObjectStore, 0.02),
    ])
});

static HOURLY_COST_USD: Lazy<HashMap<ComponentKind, f64>> = Lazy::new(|| {
    use ComponentKind::*;
    HashMap::from([
        (LoadBalancer, 0.025),
        (ApiGateway, 0.1),
        (Microservice, 0.05),
        (Frontend, 0.02),
        (Database, 0.25),
        (Cache, 0.15),
        (MessageQueue, 0.1),
        (MlModel, 1.5),
        (Cdn, 0.08),
        (ObjectStore, 0.02),
    ])
});

pub fn profile(kind: ComponentKind) -> KindProfile {
    PROFILES.get(&kind).copied().unwrap_or(DEFAULT_PROFILE)
}

pub fn memory_per_request_mb(kind: ComponentKind) -> f64 {
    MEMORY_PER_REQUEST_MB
        .get(&kind)
        .copied()
        .unwrap_or(DEFAULT_MEMORY_PER_REQUEST_MB)
}

pub fn base_memory_mb(kind: ComponentKind) -> f64 {
    BASE_MEMORY_MB
        .get(&kind)
        .copied()
        .unwrap_or(DEFAULT_BASE_MEMORY_MB)
}

pub fn base_error_rate_pct(kind: ComponentKind) -> f64 {
    BASE_ERROR_RATE_PCT
        .get(&kind)
        .copied()
        .unwrap_or(DEFAULT_BASE_ERROR_RATE_PCT)
}

pub fn hourly_cost_usd(kind: ComponentKind) -> f64 {
    HOURLY_COST_USD
        .get(&kind)
        .copied()
        .unwrap_or(DEFAULT_HOURLY_COST_USD)
}
