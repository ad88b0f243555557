//! Analytical performance-simulation engine for distributed system designs.
//!
//! Callers describe an architecture as a graph of typed components
//! (load balancers, services, databases, caches, queues, ML models) and a
//! load specification; the engine estimates, without running anything, how
//! that architecture would behave: per-component CPU/memory utilization,
//! latency, throughput, and error rate, plus system-wide aggregates,
//! bottleneck findings, and remediation recommendations.
//!
//! The model is closed-form, not a discrete-event simulation. Everything is
//! computed in a single synchronous pass over the in-memory graph; the only
//! non-determinism is bounded jitter, which is injected through a seedable
//! [`Jitter`] source so test runs are exactly reproducible.
//!
//! ```
//! use archsim::{ComponentConfig, ComponentKind, ComponentSpec, Jitter,
//!               LoadPattern, SimulationEngine, TrafficPattern};
//!
//! let gateway = ComponentConfig {
//!     id: "gw".into(),
//!     kind: ComponentKind::ApiGateway,
//!     name: "edge".into(),
//!     specs: ComponentSpec { cpu: 2.0, memory: 4.0, storage: 20.0, network: 1000.0 },
//!     scaling: Default::default(),
//!     connections: vec![],
//! };
//! let load = LoadPattern {
//!     users: 500,
//!     duration: 300,
//!     ramp_up: 30,
//!     requests_per_second: 100.0,
//!     pattern: TrafficPattern::Constant,
//! };
//!
//! let mut engine = SimulationEngine::new(Jitter::seeded(7));
//! let report = engine.simulate(&[gateway], &load);
//! assert_eq!(report.components.len(), 1);
//! ```

pub mod advisor;
pub mod aggregate;
pub mod config;
pub mod engine;
pub mod jitter;
pub mod metrics;
pub mod model;
pub mod pattern;
pub mod profile;
pub mod propagation;

pub use config::{
    ComponentConfig, ComponentConnection, ComponentKind, ComponentSpec, ConnectionKind,
    LoadPattern, ScalingPolicy, TrafficPattern,
};
pub use engine::SimulationEngine;
pub use jitter::Jitter;
pub use metrics::{ComponentMetrics, SystemMetrics};
