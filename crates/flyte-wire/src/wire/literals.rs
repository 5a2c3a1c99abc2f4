//! Wire literal and binding messages.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::types::OutputReference;

/// An absolute instant as split seconds/nanoseconds since the Unix
/// epoch.
///
/// Protobuf timestamp semantics: `seconds` may be negative for
/// pre-epoch instants, `nanos` always counts forward within the second
/// (`0..=999_999_999`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timestamp {
    /// Whole seconds since the epoch.
    pub seconds: i64,
    /// Nanoseconds within the second.
    pub nanos: i32,
}

/// A signed span of time as split seconds/nanoseconds.
///
/// Protobuf duration semantics: `seconds` and `nanos` carry the same
/// sign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Duration {
    /// Whole seconds.
    pub seconds: i64,
    /// Nanoseconds, same sign as `seconds`.
    pub nanos: i32,
}

/// A primitive value on the wire, exactly one field populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Primitive {
    /// 64-bit signed integer.
    Integer(i64),
    /// 64-bit IEEE float.
    FloatValue(f64),
    /// UTF-8 string.
    StringValue(String),
    /// Boolean.
    Boolean(bool),
    /// Absolute UTC instant.
    Datetime(Timestamp),
    /// Signed duration.
    Duration(Duration),
}

/// A scalar value on the wire, exactly one field populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scalar {
    /// A primitive value.
    Primitive(Primitive),
}

/// A literal value on the wire, exactly one field populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Literal {
    /// A single scalar.
    Scalar(Scalar),
    /// An ordered collection of literals.
    Collection(Vec<Literal>),
    /// A string-keyed map of literals.
    Map(HashMap<String, Literal>),
}

/// The value side of a wire binding, exactly one field populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BindingData {
    /// A scalar value.
    Scalar(Scalar),
    /// An ordered collection of binding data.
    Collection(Vec<BindingData>),
    /// A string-keyed map of binding data.
    Map(HashMap<String, BindingData>),
    /// A reference to another node's output.
    Promise(OutputReference),
}

/// A named binding on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Binding {
    /// Variable name.
    pub var: String,
    /// The bound value or reference.
    pub binding: BindingData,
}

/// A key/value pair on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyValuePair {
    /// The key.
    pub key: String,
    /// The value.
    pub value: String,
}
