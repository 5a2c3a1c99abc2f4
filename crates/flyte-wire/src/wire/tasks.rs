//! Wire task template messages.

use serde::{Deserialize, Serialize};

use super::interface::TypedInterface;
use super::literals::KeyValuePair;

/// A container specification on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    /// Container image reference.
    pub image: String,
    /// Entrypoint command, in argv order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub command: Vec<String>,
    /// Arguments appended to the command, in argv order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    /// Environment variables, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<KeyValuePair>,
}

/// SDK runtime type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuntimeType {
    /// Template produced by a Flyte SDK.
    FlyteSdk,
}

/// Which SDK produced a task template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeMetadata {
    /// Runtime type tag.
    #[serde(rename = "type")]
    pub runtime_type: RuntimeType,
    /// SDK version string.
    pub version: String,
    /// SDK flavor label.
    pub flavor: String,
}

/// Task-level metadata on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskMetadata {
    /// The producing runtime.
    pub runtime: RuntimeMetadata,
}

/// A registrable task template on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskTemplate {
    /// The container to run.
    pub container: Container,
    /// Task-level metadata.
    pub metadata: TaskMetadata,
    /// Declared inputs and outputs.
    pub interface: TypedInterface,
    /// Task type tag dispatched on by the execution engine.
    #[serde(rename = "type")]
    pub task_type: String,
}
