//! Workflow graph model.
//!
//! Structures that encapsulate task, branch and subworkflow nodes to
//! form a statically analyzable, directed acyclic graph. The graph
//! builder is responsible for the structural invariants (unique node
//! ids, resolvable upstream ids and output references, acyclicity);
//! the types here carry an already-valid graph.

use derive_builder::Builder;
use derive_more::From;
use serde::{Deserialize, Serialize};
use strum::AsRefStr;

use crate::identifier::{PartialTaskIdentifier, PartialWorkflowIdentifier};
use crate::interface::TypedInterface;
use crate::literal::{Binding, Primitive};

/// Well-known id of the synthetic start node.
///
/// Upstream lists may name it to anchor nodes with no data
/// dependencies.
pub const START_NODE_ID: &str = "start-node";

/// A node executing a registered task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskNode {
    /// The referenced task; fields may be resolved later.
    pub reference_id: PartialTaskIdentifier,
}

/// A node launching another workflow inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowNode {
    /// The referenced subworkflow; fields may be resolved later.
    pub sub_workflow_ref: PartialWorkflowIdentifier,
}

/// Operand of a branch comparison: a literal primitive or an input
/// variable of the branch node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, From)]
#[serde(rename_all = "snake_case")]
pub enum Operand {
    /// A literal primitive value.
    Primitive(Primitive),
    /// Name of a branch input variable.
    Var(String),
}

/// Comparison operators for branch conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ComparisonOperator {
    /// Equal.
    Eq,
    /// Not equal.
    Neq,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,
}

/// A single comparison between two operands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonExpression {
    /// The comparison operator.
    pub operator: ComparisonOperator,
    /// Left operand.
    pub left_value: Operand,
    /// Right operand.
    pub right_value: Operand,
}

/// Logical connective for combining boolean expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalOperator {
    /// Both sides must hold.
    And,
    /// Either side must hold.
    Or,
}

/// A branch condition: a comparison, or a conjunction of two nested
/// conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, From)]
#[serde(rename_all = "snake_case")]
pub enum BooleanExpression {
    /// A single comparison.
    Comparison(ComparisonExpression),
    /// Two conditions joined by and/or.
    Conjunction(Box<ConjunctionExpression>),
}

/// Two boolean expressions joined by a logical operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConjunctionExpression {
    /// The connective.
    pub operator: LogicalOperator,
    /// Left expression.
    pub left_expression: BooleanExpression,
    /// Right expression.
    pub right_expression: BooleanExpression,
}

/// A condition and the node executed when it holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfBlock {
    /// The guard condition.
    pub condition: BooleanExpression,
    /// Node executed when the condition holds.
    pub then_node: Box<Node>,
}

/// An if/else-if/else cascade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(
    name = "IfElseBlockBuilder",
    pattern = "owned",
    setter(into, strip_option, prefix = "with")
)]
pub struct IfElseBlock {
    /// The first case, always present.
    pub case: IfBlock,
    /// Additional else-if cases, evaluated in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub other: Vec<IfBlock>,
    /// Node executed when no case matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub else_node: Option<Box<Node>>,
}

impl IfElseBlock {
    /// Returns a builder for creating an if/else block.
    pub fn builder() -> IfElseBlockBuilder {
        IfElseBlockBuilder::default()
    }
}

/// A node selecting one of several subgraphs at execution time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode {
    /// The condition cascade.
    pub if_else: IfElseBlock,
}

/// Closed sum over the node kinds a workflow graph may contain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, From, AsRefStr)]
#[serde(tag = "type", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NodeKind {
    /// Executes a registered task.
    Task(TaskNode),
    /// Selects a subgraph by condition.
    Branch(BranchNode),
    /// Launches a subworkflow.
    Workflow(WorkflowNode),
}

impl NodeKind {
    /// Returns whether this is a task node.
    pub const fn is_task(&self) -> bool {
        matches!(self, NodeKind::Task(_))
    }

    /// Returns whether this is a branch node.
    pub const fn is_branch(&self) -> bool {
        matches!(self, NodeKind::Branch(_))
    }

    /// Returns whether this is a subworkflow node.
    pub const fn is_workflow(&self) -> bool {
        matches!(self, NodeKind::Workflow(_))
    }
}

/// A single node of the workflow graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(name = "NodeBuilder", pattern = "owned", setter(into, prefix = "with"))]
pub struct Node {
    /// Node id, unique within the template.
    pub id: String,
    /// Ids of nodes this node depends on, in declaration order.
    ///
    /// Execution order is dependency-driven; this order is still
    /// preserved end-to-end for deterministic diagnostics.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub upstream_node_ids: Vec<String>,
    /// What the node does.
    #[serde(flatten)]
    pub kind: NodeKind,
    /// Input bindings, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub inputs: Vec<Binding>,
}

impl Node {
    /// Returns a builder for creating a node.
    pub fn builder() -> NodeBuilder {
        NodeBuilder::default()
    }
}

/// Behavior when a node fails mid-execution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnFailurePolicy {
    /// Abort the execution as soon as any node fails.
    #[default]
    FailImmediately,
    /// Let already-runnable nodes finish before failing.
    FailAfterExecutableNodesComplete,
}

/// Template-level execution hints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowMetadata {
    /// Failure handling policy.
    #[serde(default)]
    pub on_failure: OnFailurePolicy,
}

/// The serializable DAG: nodes, metadata, interface and output
/// bindings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(
    name = "WorkflowTemplateBuilder",
    pattern = "owned",
    setter(into, prefix = "with")
)]
pub struct WorkflowTemplate {
    /// Graph nodes, in declaration order.
    pub nodes: Vec<Node>,
    /// Template-level metadata.
    #[builder(default)]
    pub metadata: WorkflowMetadata,
    /// Declared workflow inputs and outputs.
    pub interface: TypedInterface,
    /// Output bindings, in declaration order.
    #[builder(default)]
    pub outputs: Vec<Binding>,
}

impl WorkflowTemplate {
    /// Returns a builder for creating a workflow template.
    pub fn builder() -> WorkflowTemplateBuilder {
        WorkflowTemplateBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::BindingData;

    fn task_node(name: &str) -> NodeKind {
        NodeKind::Task(TaskNode {
            reference_id: PartialTaskIdentifier::builder()
                .with_name(name)
                .build()
                .unwrap(),
        })
    }

    #[test]
    fn test_node_builder() {
        let node = Node::builder()
            .with_id("a")
            .with_upstream_node_ids(vec!["b".to_string()])
            .with_kind(task_node("task-a"))
            .with_inputs(vec![
                Binding::builder()
                    .with_var("x")
                    .with_binding(BindingData::of_primitive("input-a"))
                    .build()
                    .unwrap(),
            ])
            .build()
            .unwrap();

        assert_eq!(node.id, "a");
        assert_eq!(node.upstream_node_ids, vec!["b"]);
        assert!(node.kind.is_task());
        assert_eq!(node.inputs.len(), 1);
    }

    #[test]
    fn test_node_builder_defaults() {
        let node = Node::builder()
            .with_id("a")
            .with_kind(task_node("task-a"))
            .build()
            .unwrap();

        assert!(node.upstream_node_ids.is_empty());
        assert!(node.inputs.is_empty());
    }

    #[test]
    fn test_node_anchored_to_start_marker() {
        let node = Node::builder()
            .with_id("a")
            .with_upstream_node_ids(vec![START_NODE_ID.to_string()])
            .with_kind(task_node("task-a"))
            .build()
            .unwrap();

        assert_eq!(node.upstream_node_ids, vec![START_NODE_ID]);
    }

    #[test]
    fn test_node_builder_missing_kind() {
        assert!(Node::builder().with_id("a").build().is_err());
    }

    #[test]
    fn test_workflow_template_preserves_node_order() {
        let nodes = vec![
            Node::builder()
                .with_id("a")
                .with_upstream_node_ids(vec!["b".to_string()])
                .with_kind(task_node("task-a"))
                .build()
                .unwrap(),
            Node::builder().with_id("b").with_kind(task_node("task-b")).build().unwrap(),
        ];
        let template = WorkflowTemplate::builder()
            .with_nodes(nodes)
            .with_interface(TypedInterface::default())
            .build()
            .unwrap();

        let ids: Vec<_> = template.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(template.metadata.on_failure, OnFailurePolicy::FailImmediately);
    }

    #[test]
    fn test_branch_node_construction() {
        let then_node = Node::builder()
            .with_id("then")
            .with_kind(task_node("task-then"))
            .build()
            .unwrap();
        let branch = BranchNode {
            if_else: IfElseBlock::builder()
                .with_case(IfBlock {
                    condition: BooleanExpression::Comparison(ComparisonExpression {
                        operator: ComparisonOperator::Gt,
                        left_value: Operand::Var("x".to_string()),
                        right_value: Operand::Primitive(Primitive::Integer(0)),
                    }),
                    then_node: Box::new(then_node),
                })
                .build()
                .unwrap(),
        };

        assert!(branch.if_else.other.is_empty());
        assert!(branch.if_else.else_node.is_none());
    }

    #[test]
    fn test_workflow_metadata_serde_default() {
        let metadata: WorkflowMetadata = serde_json::from_str("{}").unwrap();
        assert_eq!(metadata.on_failure, OnFailurePolicy::FailImmediately);
    }
}
