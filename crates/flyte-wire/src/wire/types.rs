//! Wire type-descriptor messages.

use serde::{Deserialize, Serialize};

/// Simple type constants on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SimpleType {
    /// 64-bit signed integer.
    Integer,
    /// 64-bit IEEE float.
    Float,
    /// UTF-8 string.
    String,
    /// Boolean.
    Boolean,
    /// Absolute UTC instant.
    Datetime,
    /// Signed duration.
    Duration,
    /// Arbitrary structured value.
    Struct,
}

/// A type descriptor on the wire, exactly one field populated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LiteralType {
    /// A simple type.
    Simple(SimpleType),
    /// Collection element type.
    CollectionType(Box<LiteralType>),
    /// Map value type.
    MapValueType(Box<LiteralType>),
}

/// A reference to another node's output on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputReference {
    /// Id of the producing node.
    pub node_id: String,
    /// Output variable name on that node.
    pub var: String,
}
