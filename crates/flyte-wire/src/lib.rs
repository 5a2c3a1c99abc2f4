#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod codec;
mod error;
pub mod wire;

#[doc(hidden)]
pub mod prelude;

pub use codec::{Codec, CodecConfig};
pub use error::{DecodeError, DecodeResult};

/// Tracing target for codec operations.
pub const TRACING_TARGET: &str = "flyte_wire";
