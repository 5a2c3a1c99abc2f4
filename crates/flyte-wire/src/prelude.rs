//! Prelude module for convenient imports.
//!
//! This module re-exports commonly used types for ergonomic imports:
//!
//! ```rust
//! use flyte_wire::prelude::*;
//! ```

pub use crate::codec::{Codec, CodecConfig};
pub use crate::error::{DecodeError, DecodeResult};
pub use crate::wire;
