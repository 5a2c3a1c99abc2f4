//! Wire message shapes.
//!
//! serde types following the protobuf-JSON convention the remote
//! registry speaks: camelCase field names, oneofs as externally tagged
//! enums with camelCase tags, enum constants in SCREAMING_SNAKE_CASE.
//! Modules mirror the upstream IDL families.

mod errors;
mod identifier;
mod interface;
mod literals;
mod tasks;
mod types;
mod workflow;

pub use errors::{ContainerError, ErrorDocument, ErrorKind};
pub use identifier::{Identifier, ResourceType};
pub use interface::{TypedInterface, Variable};
pub use literals::{
    Binding, BindingData, Duration, KeyValuePair, Literal, Primitive, Scalar, Timestamp,
};
pub use tasks::{Container, RuntimeMetadata, RuntimeType, TaskMetadata, TaskTemplate};
pub use types::{LiteralType, OutputReference, SimpleType};
pub use workflow::{
    BooleanExpression, BranchNode, ComparisonExpression, ComparisonOperator,
    ConjunctionExpression, IfBlock, IfElseBlock, LogicalOperator, Node, NodeTarget,
    OnFailurePolicy, Operand, TaskNode, WorkflowMetadata, WorkflowNode, WorkflowTemplate,
};
