//! Wire → domain deserialization.
//!
//! The inverse of the encode path for the value family: for every
//! constructible primitive `p`, `deserialize(serialize(p)) == p`.
//! Decoding is fallible only where the wire admits values the domain
//! cannot represent (instants outside the representable range,
//! out-of-range nanosecond fields).

use std::collections::HashMap;

use flyte_api::literal::{Binding, BindingData, Literal, OutputReference, Primitive, Scalar};
use jiff::{SignedDuration, Timestamp};

use super::Codec;
use crate::error::{DecodeError, DecodeResult};
use crate::wire;

/// Nanoseconds per second, exclusive bound of the wire nanos field.
const NANOS_PER_SECOND: i32 = 1_000_000_000;

impl Codec {
    /// Deserializes a wire primitive.
    pub fn deserialize_primitive(&self, primitive: &wire::Primitive) -> DecodeResult<Primitive> {
        let primitive = match primitive {
            wire::Primitive::Integer(value) => Primitive::Integer(*value),
            wire::Primitive::FloatValue(value) => Primitive::Float(*value),
            wire::Primitive::StringValue(value) => Primitive::String(value.clone()),
            wire::Primitive::Boolean(value) => Primitive::Boolean(*value),
            wire::Primitive::Datetime(timestamp) => {
                // jiff accepts the forward-counting nanos convention
                // directly and rejects out-of-range instants.
                Primitive::Datetime(Timestamp::new(timestamp.seconds, timestamp.nanos)?)
            }
            wire::Primitive::Duration(duration) => {
                if duration.nanos <= -NANOS_PER_SECOND || duration.nanos >= NANOS_PER_SECOND {
                    return Err(DecodeError::DurationNanos {
                        nanos: duration.nanos,
                    });
                }
                Primitive::Duration(SignedDuration::new(duration.seconds, duration.nanos))
            }
        };

        Ok(primitive)
    }

    /// Deserializes a wire scalar.
    pub fn deserialize_scalar(&self, scalar: &wire::Scalar) -> DecodeResult<Scalar> {
        match scalar {
            wire::Scalar::Primitive(primitive) => {
                Ok(Scalar::Primitive(self.deserialize_primitive(primitive)?))
            }
        }
    }

    /// Deserializes a wire literal, recursing through collections and
    /// maps.
    pub fn deserialize_literal(&self, literal: &wire::Literal) -> DecodeResult<Literal> {
        match literal {
            wire::Literal::Scalar(scalar) => Ok(Literal::Scalar(self.deserialize_scalar(scalar)?)),
            wire::Literal::Collection(items) => Ok(Literal::Collection(
                items
                    .iter()
                    .map(|item| self.deserialize_literal(item))
                    .collect::<DecodeResult<_>>()?,
            )),
            wire::Literal::Map(entries) => Ok(Literal::Map(
                entries
                    .iter()
                    .map(|(name, value)| Ok((name.clone(), self.deserialize_literal(value)?)))
                    .collect::<DecodeResult<_>>()?,
            )),
        }
    }

    /// Deserializes a named wire literal map.
    pub fn deserialize_literal_map(
        &self,
        literals: &HashMap<String, wire::Literal>,
    ) -> DecodeResult<HashMap<String, Literal>> {
        literals
            .iter()
            .map(|(name, value)| Ok((name.clone(), self.deserialize_literal(value)?)))
            .collect()
    }

    /// Deserializes a wire output reference.
    pub fn deserialize_output_reference(&self, reference: &wire::OutputReference) -> OutputReference {
        OutputReference {
            node_id: reference.node_id.clone(),
            var: reference.var.clone(),
        }
    }

    /// Deserializes wire binding data, recursing through collections
    /// and maps.
    pub fn deserialize_binding_data(&self, data: &wire::BindingData) -> DecodeResult<BindingData> {
        match data {
            wire::BindingData::Scalar(scalar) => {
                Ok(BindingData::Scalar(self.deserialize_scalar(scalar)?))
            }
            wire::BindingData::Collection(items) => Ok(BindingData::Collection(
                items
                    .iter()
                    .map(|item| self.deserialize_binding_data(item))
                    .collect::<DecodeResult<_>>()?,
            )),
            wire::BindingData::Map(entries) => Ok(BindingData::Map(
                entries
                    .iter()
                    .map(|(name, value)| {
                        Ok((name.clone(), self.deserialize_binding_data(value)?))
                    })
                    .collect::<DecodeResult<_>>()?,
            )),
            wire::BindingData::Promise(reference) => Ok(BindingData::Promise(
                self.deserialize_output_reference(reference),
            )),
        }
    }

    /// Deserializes a named wire binding.
    pub fn deserialize_binding(&self, binding: &wire::Binding) -> DecodeResult<Binding> {
        Ok(Binding {
            var: binding.var.clone(),
            binding: self.deserialize_binding_data(&binding.binding)?,
        })
    }
}
