//! Wire interface messages.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::types::LiteralType;

/// A declared variable on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    /// The variable's declared type.
    #[serde(rename = "type")]
    pub literal_type: LiteralType,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A task or workflow interface on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedInterface {
    /// Declared inputs, keyed by variable name.
    #[serde(default)]
    pub inputs: HashMap<String, Variable>,
    /// Declared outputs, keyed by variable name.
    #[serde(default)]
    pub outputs: HashMap<String, Variable>,
}
