//! Versioned resource identifiers.
//!
//! Every registered resource (task, workflow, launch plan) is addressed
//! by the same four coordinates: project, domain, name and version.
//! [`Identifier`] is the closed sum over the three resource kinds, so
//! downstream dispatch is always an exhaustive match.

use derive_builder::Builder;
use derive_more::From;
use serde::{Deserialize, Serialize};

/// Identifies a registered task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(name = "TaskIdentifierBuilder", pattern = "owned", setter(into, prefix = "with"))]
pub struct TaskIdentifier {
    /// Project the task is registered under.
    pub project: String,
    /// Domain within the project (e.g. `development`, `production`).
    pub domain: String,
    /// Task name, unique within (project, domain).
    pub name: String,
    /// Registered version.
    pub version: String,
}

impl TaskIdentifier {
    /// Returns a builder for creating a task identifier.
    pub fn builder() -> TaskIdentifierBuilder {
        TaskIdentifierBuilder::default()
    }
}

/// Identifies a registered workflow.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(
    name = "WorkflowIdentifierBuilder",
    pattern = "owned",
    setter(into, prefix = "with")
)]
pub struct WorkflowIdentifier {
    /// Project the workflow is registered under.
    pub project: String,
    /// Domain within the project.
    pub domain: String,
    /// Workflow name, unique within (project, domain).
    pub name: String,
    /// Registered version.
    pub version: String,
}

impl WorkflowIdentifier {
    /// Returns a builder for creating a workflow identifier.
    pub fn builder() -> WorkflowIdentifierBuilder {
        WorkflowIdentifierBuilder::default()
    }
}

/// Identifies a registered launch plan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(
    name = "LaunchPlanIdentifierBuilder",
    pattern = "owned",
    setter(into, prefix = "with")
)]
pub struct LaunchPlanIdentifier {
    /// Project the launch plan is registered under.
    pub project: String,
    /// Domain within the project.
    pub domain: String,
    /// Launch plan name, unique within (project, domain).
    pub name: String,
    /// Registered version.
    pub version: String,
}

impl LaunchPlanIdentifier {
    /// Returns a builder for creating a launch plan identifier.
    pub fn builder() -> LaunchPlanIdentifierBuilder {
        LaunchPlanIdentifierBuilder::default()
    }
}

/// A possibly-partial task identifier.
///
/// Graph builders may reference tasks before the registrar has resolved
/// all four coordinates; any missing field is filled in later during
/// registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(
    name = "PartialTaskIdentifierBuilder",
    pattern = "owned",
    setter(into, strip_option, prefix = "with")
)]
pub struct PartialTaskIdentifier {
    /// Project, if already resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub project: Option<String>,
    /// Domain, if already resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub domain: Option<String>,
    /// Task name, if already resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub name: Option<String>,
    /// Version, if already resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub version: Option<String>,
}

impl PartialTaskIdentifier {
    /// Returns a builder for creating a partial task identifier.
    pub fn builder() -> PartialTaskIdentifierBuilder {
        PartialTaskIdentifierBuilder::default()
    }
}

/// A possibly-partial workflow identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(
    name = "PartialWorkflowIdentifierBuilder",
    pattern = "owned",
    setter(into, strip_option, prefix = "with")
)]
pub struct PartialWorkflowIdentifier {
    /// Project, if already resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub project: Option<String>,
    /// Domain, if already resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub domain: Option<String>,
    /// Workflow name, if already resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub name: Option<String>,
    /// Version, if already resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub version: Option<String>,
}

impl PartialWorkflowIdentifier {
    /// Returns a builder for creating a partial workflow identifier.
    pub fn builder() -> PartialWorkflowIdentifierBuilder {
        PartialWorkflowIdentifierBuilder::default()
    }
}

/// Closed sum over the resource identifier kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, From)]
#[serde(tag = "resource_type", rename_all = "snake_case")]
pub enum Identifier {
    /// A task identifier.
    Task(TaskIdentifier),
    /// A workflow identifier.
    Workflow(WorkflowIdentifier),
    /// A launch plan identifier.
    LaunchPlan(LaunchPlanIdentifier),
}

impl Identifier {
    /// Returns the project coordinate.
    pub fn project(&self) -> &str {
        match self {
            Identifier::Task(id) => &id.project,
            Identifier::Workflow(id) => &id.project,
            Identifier::LaunchPlan(id) => &id.project,
        }
    }

    /// Returns the domain coordinate.
    pub fn domain(&self) -> &str {
        match self {
            Identifier::Task(id) => &id.domain,
            Identifier::Workflow(id) => &id.domain,
            Identifier::LaunchPlan(id) => &id.domain,
        }
    }

    /// Returns the resource name.
    pub fn name(&self) -> &str {
        match self {
            Identifier::Task(id) => &id.name,
            Identifier::Workflow(id) => &id.name,
            Identifier::LaunchPlan(id) => &id.name,
        }
    }

    /// Returns the registered version.
    pub fn version(&self) -> &str {
        match self {
            Identifier::Task(id) => &id.version,
            Identifier::Workflow(id) => &id.version,
            Identifier::LaunchPlan(id) => &id.version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_identifier_builder() {
        let id = TaskIdentifier::builder()
            .with_project("flyte-test")
            .with_domain("development")
            .with_name("task-a")
            .with_version("1")
            .build()
            .unwrap();

        assert_eq!(id.project, "flyte-test");
        assert_eq!(id.domain, "development");
        assert_eq!(id.name, "task-a");
        assert_eq!(id.version, "1");
    }

    #[test]
    fn test_task_identifier_builder_missing_field() {
        let result = TaskIdentifier::builder().with_project("flyte-test").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_partial_task_identifier_defaults() {
        let id = PartialTaskIdentifier::builder().with_name("task-a").build().unwrap();

        assert_eq!(id.name.as_deref(), Some("task-a"));
        assert!(id.project.is_none());
        assert!(id.domain.is_none());
        assert!(id.version.is_none());
    }

    #[test]
    fn test_identifier_accessors_dispatch() {
        let id: Identifier = WorkflowIdentifier::builder()
            .with_project("p")
            .with_domain("d")
            .with_name("n")
            .with_version("v")
            .build()
            .unwrap()
            .into();

        assert_eq!(id.project(), "p");
        assert_eq!(id.domain(), "d");
        assert_eq!(id.name(), "n");
        assert_eq!(id.version(), "v");
        assert!(matches!(id, Identifier::Workflow(_)));
    }
}
