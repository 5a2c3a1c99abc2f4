//! Container task templates.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::interface::TypedInterface;
use crate::literal::KeyValuePair;

/// Container specification for a task.
///
/// `command` and `args` are process argv; their order is significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(name = "ContainerBuilder", pattern = "owned", setter(into, prefix = "with"))]
pub struct Container {
    /// Container image reference.
    pub image: String,
    /// Entrypoint command.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub command: Vec<String>,
    /// Arguments appended to the command.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub args: Vec<String>,
    /// Environment variables, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub env: Vec<KeyValuePair>,
}

impl Container {
    /// Returns a builder for creating a container.
    pub fn builder() -> ContainerBuilder {
        ContainerBuilder::default()
    }
}

/// A registrable task template: a container plus its typed interface.
///
/// The fixed runtime metadata (SDK flavor, version, task type tag) is
/// deliberately absent here; the wire codec injects it uniformly for
/// every template at serialization time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(
    name = "TaskTemplateBuilder",
    pattern = "owned",
    setter(into, prefix = "with")
)]
pub struct TaskTemplate {
    /// The container to run.
    pub container: Container,
    /// Declared inputs and outputs.
    pub interface: TypedInterface,
}

impl TaskTemplate {
    /// Returns a builder for creating a task template.
    pub fn builder() -> TaskTemplateBuilder {
        TaskTemplateBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_builder() {
        let container = Container::builder()
            .with_image("alpine:3.7")
            .with_command(vec!["echo".to_string()])
            .with_args(vec!["hello world".to_string()])
            .with_env(vec![KeyValuePair::of("key", "value")])
            .build()
            .unwrap();

        assert_eq!(container.image, "alpine:3.7");
        assert_eq!(container.command, vec!["echo"]);
        assert_eq!(container.args, vec!["hello world"]);
    }

    #[test]
    fn test_container_builder_defaults() {
        let container = Container::builder().with_image("alpine:3.7").build().unwrap();

        assert!(container.command.is_empty());
        assert!(container.args.is_empty());
        assert!(container.env.is_empty());
    }

    #[test]
    fn test_task_template_requires_container() {
        let result = TaskTemplate::builder()
            .with_interface(TypedInterface::default())
            .build();
        assert!(result.is_err());
    }
}
