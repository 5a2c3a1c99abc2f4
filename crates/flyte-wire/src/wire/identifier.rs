//! Wire identifier messages.

use serde::{Deserialize, Serialize};

/// Resource type tag on a wire identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    /// A registered task.
    Task,
    /// A registered workflow.
    Workflow,
    /// A registered launch plan.
    LaunchPlan,
}

/// A fully qualified resource identifier on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    /// Which resource kind the identifier names.
    pub resource_type: ResourceType,
    /// Project coordinate.
    pub project: String,
    /// Domain coordinate.
    pub domain: String,
    /// Resource name.
    pub name: String,
    /// Registered version.
    pub version: String,
}
