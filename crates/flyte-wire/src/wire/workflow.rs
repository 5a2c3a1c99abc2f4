//! Wire workflow graph messages.

use serde::{Deserialize, Serialize};

use super::identifier::Identifier;
use super::interface::TypedInterface;
use super::literals::{Binding, Primitive};

/// A task node on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskNode {
    /// The referenced task identifier.
    pub reference_id: Identifier,
}

/// A subworkflow node on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowNode {
    /// The referenced subworkflow identifier.
    pub sub_workflow_ref: Identifier,
}

/// A comparison operand on the wire, exactly one field populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operand {
    /// A literal primitive.
    Primitive(Primitive),
    /// A branch input variable name.
    Var(String),
}

/// Comparison operator constants on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
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

/// A comparison between two operands on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonExpression {
    /// The comparison operator.
    pub operator: ComparisonOperator,
    /// Left operand.
    pub left_value: Operand,
    /// Right operand.
    pub right_value: Operand,
}

/// Logical connective constants on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogicalOperator {
    /// Both sides must hold.
    And,
    /// Either side must hold.
    Or,
}

/// A branch condition on the wire, exactly one field populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BooleanExpression {
    /// Two conditions joined by and/or.
    Conjunction(Box<ConjunctionExpression>),
    /// A single comparison.
    Comparison(ComparisonExpression),
}

/// Two boolean expressions joined by a logical operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConjunctionExpression {
    /// The connective.
    pub operator: LogicalOperator,
    /// Left expression.
    pub left_expression: BooleanExpression,
    /// Right expression.
    pub right_expression: BooleanExpression,
}

/// A condition and its target node on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IfBlock {
    /// The guard condition.
    pub condition: BooleanExpression,
    /// Node executed when the condition holds.
    pub then_node: Box<Node>,
}

/// An if/else-if/else cascade on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IfElseBlock {
    /// The first case.
    pub case: IfBlock,
    /// Additional else-if cases, in evaluation order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub other: Vec<IfBlock>,
    /// Node executed when no case matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub else_node: Option<Box<Node>>,
}

/// A branch node on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchNode {
    /// The condition cascade.
    pub if_else: IfElseBlock,
}

/// The node-kind oneof on the wire, flattened into the node message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeTarget {
    /// Executes a registered task.
    TaskNode(TaskNode),
    /// Selects a subgraph by condition.
    BranchNode(BranchNode),
    /// Launches a subworkflow.
    WorkflowNode(WorkflowNode),
}

/// A workflow graph node on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Node id, unique within the template.
    pub id: String,
    /// Upstream dependency ids, order preserved from the domain value.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub upstream_node_ids: Vec<String>,
    /// What the node does.
    #[serde(flatten)]
    pub target: NodeTarget,
    /// Input bindings, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<Binding>,
}

/// Failure policy constants on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OnFailurePolicy {
    /// Abort as soon as any node fails.
    #[default]
    FailImmediately,
    /// Let already-runnable nodes finish before failing.
    FailAfterExecutableNodesComplete,
}

/// Workflow metadata on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowMetadata {
    /// Failure handling policy.
    #[serde(default)]
    pub on_failure: OnFailurePolicy,
}

/// A workflow template on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowTemplate {
    /// Template-level metadata.
    pub metadata: WorkflowMetadata,
    /// Declared inputs and outputs.
    pub interface: TypedInterface,
    /// Graph nodes, order preserved from the domain value.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<Node>,
    /// Output bindings, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<Binding>,
}
