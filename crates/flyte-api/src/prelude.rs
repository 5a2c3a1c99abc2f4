//! Prelude module for convenient imports.
//!
//! This module re-exports commonly used types for ergonomic imports:
//!
//! ```rust
//! use flyte_api::prelude::*;
//! ```

pub use crate::identifier::{
    Identifier, LaunchPlanIdentifier, PartialTaskIdentifier, PartialWorkflowIdentifier,
    TaskIdentifier, WorkflowIdentifier,
};
pub use crate::interface::{LiteralType, SimpleType, TypedInterface, Variable};
pub use crate::literal::{
    Binding, BindingData, KeyValuePair, Literal, OutputReference, Primitive, Scalar,
};
pub use crate::task::{Container, TaskTemplate};
pub use crate::workflow::{
    BranchNode, Node, NodeKind, TaskNode, WorkflowMetadata, WorkflowNode, WorkflowTemplate,
};
