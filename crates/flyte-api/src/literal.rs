//! Literal value model.
//!
//! The three-layer value model carried by bindings: [`Primitive`] at
//! the bottom, wrapped by [`Scalar`], wrapped by [`Literal`] (which may
//! also be a collection or a string-keyed map). [`BindingData`] mirrors
//! the literal shape but may additionally be a *promise*: an
//! [`OutputReference`] to another node's future output instead of a
//! value known at graph construction time.

use std::collections::HashMap;

use derive_builder::Builder;
use derive_more::From;
use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};

/// A primitive value.
///
/// Datetime and duration carry split seconds/nanoseconds through
/// [`jiff::Timestamp`] and [`jiff::SignedDuration`]; neither is ever
/// collapsed into a single float, so sub-second precision survives
/// serialization exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, From)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    /// 64-bit signed integer.
    Integer(i64),
    /// 64-bit IEEE float.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// Boolean.
    Boolean(bool),
    /// Absolute UTC instant.
    Datetime(Timestamp),
    /// Signed duration, not calendar-aligned.
    Duration(SignedDuration),
}

impl From<&str> for Primitive {
    fn from(value: &str) -> Self {
        Primitive::String(value.to_string())
    }
}

/// A scalar value, wrapping exactly one scalar kind.
///
/// Only primitives are populated today; the sum exists because the wire
/// format reserves room for further scalar kinds (blobs, structured
/// errors) that would widen this enum, not change it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, From)]
#[serde(rename_all = "snake_case")]
pub enum Scalar {
    /// A primitive value.
    Primitive(Primitive),
}

/// A literal value: a scalar, or a recursive collection or map thereof.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, From)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
    /// A single scalar value.
    Scalar(Scalar),
    /// An ordered collection of literals.
    Collection(Vec<Literal>),
    /// A string-keyed map of literals.
    Map(HashMap<String, Literal>),
}

impl Literal {
    /// Wraps a primitive in the full literal shape.
    pub fn of_primitive(primitive: impl Into<Primitive>) -> Self {
        Literal::Scalar(Scalar::Primitive(primitive.into()))
    }
}

/// Reference to another node's output, by node id and variable name.
///
/// Whether the reference resolves within the surrounding template is
/// the graph builder's contract; this type carries the two names
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(
    name = "OutputReferenceBuilder",
    pattern = "owned",
    setter(into, prefix = "with")
)]
pub struct OutputReference {
    /// Id of the node producing the output.
    pub node_id: String,
    /// Name of the output variable on that node.
    pub var: String,
}

impl OutputReference {
    /// Returns a builder for creating an output reference.
    pub fn builder() -> OutputReferenceBuilder {
        OutputReferenceBuilder::default()
    }
}

/// The value side of a [`Binding`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, From)]
#[serde(rename_all = "snake_case")]
pub enum BindingData {
    /// A scalar value known at graph construction time.
    Scalar(Scalar),
    /// An ordered collection of binding data.
    Collection(Vec<BindingData>),
    /// A string-keyed map of binding data.
    Map(HashMap<String, BindingData>),
    /// A promise of another node's future output.
    Promise(OutputReference),
}

impl BindingData {
    /// Wraps a primitive in the scalar binding shape.
    pub fn of_primitive(primitive: impl Into<Primitive>) -> Self {
        BindingData::Scalar(Scalar::Primitive(primitive.into()))
    }
}

/// Named association between a declared variable and its value or
/// source reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(name = "BindingBuilder", pattern = "owned", setter(into, prefix = "with"))]
pub struct Binding {
    /// Variable name, unique within the owning input/output list.
    pub var: String,
    /// The bound value or reference.
    pub binding: BindingData,
}

impl Binding {
    /// Returns a builder for creating a binding.
    pub fn builder() -> BindingBuilder {
        BindingBuilder::default()
    }
}

/// An ordered key/value pair, used for container environments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyValuePair {
    /// The key.
    pub key: String,
    /// The value.
    pub value: String,
}

impl KeyValuePair {
    /// Creates a key/value pair.
    pub fn of(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_from_impls() {
        assert_eq!(Primitive::from(123i64), Primitive::Integer(123));
        assert_eq!(Primitive::from(1.5f64), Primitive::Float(1.5));
        assert_eq!(Primitive::from(true), Primitive::Boolean(true));
        assert_eq!(Primitive::from("abc"), Primitive::String("abc".to_string()));
    }

    #[test]
    fn test_literal_of_primitive() {
        let literal = Literal::of_primitive(1337i64);
        assert_eq!(
            literal,
            Literal::Scalar(Scalar::Primitive(Primitive::Integer(1337)))
        );
    }

    #[test]
    fn test_nested_literal_construction() {
        let inner = Literal::of_primitive("leaf");
        let collection = Literal::Collection(vec![inner.clone(), inner.clone()]);
        let map = Literal::Map(HashMap::from([("k".to_string(), collection)]));

        match map {
            Literal::Map(entries) => {
                assert!(matches!(entries["k"], Literal::Collection(ref items) if items.len() == 2));
            }
            other => panic!("expected map, got {other:?}"),
        }
    }

    #[test]
    fn test_binding_data_promise() {
        let reference = OutputReference::builder()
            .with_node_id("node-id")
            .with_var("var")
            .build()
            .unwrap();
        let data = BindingData::from(reference.clone());

        assert_eq!(data, BindingData::Promise(reference));
    }

    #[test]
    fn test_binding_builder() {
        let binding = Binding::builder()
            .with_var("x")
            .with_binding(BindingData::of_primitive(1i64))
            .build()
            .unwrap();

        assert_eq!(binding.var, "x");
    }
}
