//! Typed task and workflow interfaces.

use std::collections::HashMap;

use derive_builder::Builder;
use derive_more::From;
use serde::{Deserialize, Serialize};
use strum::AsRefStr;

/// Simple (non-nested) value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
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

/// A value's declared type: simple, or nested collection/map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, From)]
#[serde(rename_all = "snake_case")]
pub enum LiteralType {
    /// A simple type.
    #[from]
    Simple(SimpleType),
    /// An ordered collection with elements of the nested type.
    Collection(Box<LiteralType>),
    /// A string-keyed map with values of the nested type.
    Map(Box<LiteralType>),
}

impl LiteralType {
    /// Collection type with the given element type.
    pub fn collection_of(element: impl Into<LiteralType>) -> Self {
        LiteralType::Collection(Box::new(element.into()))
    }

    /// Map type with the given value type.
    pub fn map_of(value: impl Into<LiteralType>) -> Self {
        LiteralType::Map(Box::new(value.into()))
    }
}

/// A declared input or output variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(
    name = "VariableBuilder",
    pattern = "owned",
    setter(into, strip_option, prefix = "with")
)]
pub struct Variable {
    /// The variable's declared type.
    pub literal_type: LiteralType,
    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub description: Option<String>,
}

impl Variable {
    /// Creates a variable of the given type with no description.
    pub fn of_type(literal_type: impl Into<LiteralType>) -> Self {
        Self {
            literal_type: literal_type.into(),
            description: None,
        }
    }

    /// Returns a builder for creating a variable.
    pub fn builder() -> VariableBuilder {
        VariableBuilder::default()
    }
}

/// The named, typed input/output contract of a task or workflow.
///
/// Variable names are unique within each map by construction; map
/// iteration order carries no meaning on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[builder(
    name = "TypedInterfaceBuilder",
    pattern = "owned",
    setter(into, prefix = "with")
)]
pub struct TypedInterface {
    /// Declared inputs, keyed by variable name.
    #[builder(default)]
    pub inputs: HashMap<String, Variable>,
    /// Declared outputs, keyed by variable name.
    #[builder(default)]
    pub outputs: HashMap<String, Variable>,
}

impl TypedInterface {
    /// Returns a builder for creating a typed interface.
    pub fn builder() -> TypedInterfaceBuilder {
        TypedInterfaceBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_type_from_simple() {
        let literal_type: LiteralType = SimpleType::Integer.into();
        assert_eq!(literal_type, LiteralType::Simple(SimpleType::Integer));
    }

    #[test]
    fn test_literal_type_nesting() {
        let nested = LiteralType::map_of(LiteralType::collection_of(SimpleType::Integer));
        assert_eq!(
            nested,
            LiteralType::Map(Box::new(LiteralType::Collection(Box::new(
                LiteralType::Simple(SimpleType::Integer)
            ))))
        );
    }

    #[test]
    fn test_variable_of_type() {
        let var = Variable::of_type(SimpleType::String);
        assert_eq!(var.literal_type, LiteralType::Simple(SimpleType::String));
        assert!(var.description.is_none());
    }

    #[test]
    fn test_typed_interface_builder() {
        let interface = TypedInterface::builder()
            .with_inputs(HashMap::from([(
                "x".to_string(),
                Variable::of_type(SimpleType::String),
            )]))
            .build()
            .unwrap();

        assert_eq!(interface.inputs.len(), 1);
        assert!(interface.outputs.is_empty());
    }

    #[test]
    fn test_simple_type_as_ref() {
        assert_eq!(SimpleType::Datetime.as_ref(), "datetime");
    }
}
