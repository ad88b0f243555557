//! Input data model: component graph and load specification.
//!
//! These types mirror the JSON the design editor produces. Kind
//! discriminants are closed string enums on the wire; strings the engine
//! does not know collapse to a fallback variant instead of failing
//! deserialization, so a newer editor never breaks an older engine.

use serde::{Deserialize, Serialize};

/// Known component kinds. Unknown strings deserialize to [`Custom`] and
/// take the generic microservice profile in every lookup table.
///
/// [`Custom`]: ComponentKind::Custom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    LoadBalancer,
    ApiGateway,
    Microservice,
    Frontend,
    Database,
    Cache,
    MessageQueue,
    MlModel,
    Cdn,
    ObjectStore,
    #[serde(other)]
    Custom,
}

impl ComponentKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadBalancer => "load_balancer",
            Self::ApiGateway => "api_gateway",
            Self::Microservice => "microservice",
            Self::Frontend => "frontend",
            Self::Database => "database",
            Self::Cache => "cache",
            Self::MessageQueue => "message_queue",
            Self::MlModel => "ml_model",
            Self::Cdn => "cdn",
            Self::ObjectStore => "object_store",
            Self::Custom => "custom",
        }
    }
}

/// Interaction style of a connection. Unknown strings behave as `sync`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionKind {
    Sync,
    Async,
    Database,
    Cache,
    #[serde(other)]
    Unknown,
}

impl ConnectionKind {
    /// Traffic multiplier applied during load propagation. Database and
    /// cache edges amplify (queries and lookups fan out per request),
    /// async edges shed load.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Sync | Self::Unknown => 1.0,
            Self::Async => 0.8,
            Self::Database => 1.2,
            Self::Cache => 1.5,
        }
    }
}

/// Capacity declaration for one component. Immutable per simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentSpec {
    /// CPU cores.
    pub cpu: f64,
    /// Memory in GB.
    pub memory: f64,
    /// Storage in GB.
    pub storage: f64,
    /// Network bandwidth in Mbps.
    pub network: f64,
}

impl Default for ComponentSpec {
    fn default() -> Self {
        Self {
            cpu: 1.0,
            memory: 2.0,
            storage: 20.0,
            network: 1000.0,
        }
    }
}

/// Replica bounds from the editor. Informational only: the engine does not
/// multiply capacity by replica count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalingPolicy {
    pub min: u32,
    pub max: u32,
    pub auto: bool,
}

impl Default for ScalingPolicy {
    fn default() -> Self {
        Self {
            min: 1,
            max: 1,
            auto: false,
        }
    }
}

/// Directed, weighted edge between two components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentConnection {
    pub from: String,
    pub to: String,
    #[serde(rename = "type")]
    pub kind: ConnectionKind,
    /// Relative traffic share in [0, 1]. Edges into one component are not
    /// required to sum to 1.
    pub weight: f64,
}

/// One typed node in the system graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentConfig {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub name: String,
    #[serde(default)]
    pub specs: ComponentSpec,
    #[serde(default)]
    pub scaling: ScalingPolicy,
    /// Outbound edges originating at this component.
    #[serde(default)]
    pub connections: Vec<ComponentConnection>,
}

/// Named traffic shape over a simulated run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficPattern {
    Constant,
    Spike,
    Ramp,
    Wave,
}

/// Load specification for one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadPattern {
    pub users: u64,
    /// Run duration in seconds.
    pub duration: u64,
    /// Ramp-up window in seconds.
    pub ramp_up: u64,
    pub requests_per_second: f64,
    pub pattern: TrafficPattern,
}
