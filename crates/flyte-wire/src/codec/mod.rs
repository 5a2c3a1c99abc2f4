//! Stateless codec between the typed IR and the wire encoding.
//!
//! Every method on [`Codec`] is a pure function over immutable inputs:
//! no shared state, no I/O, no ordering dependency between calls, so
//! any number of callers may serialize concurrently without
//! synchronization. Structural invariants of the graph (unique node
//! ids, resolvable references) are the graph builder's preconditions
//! and are not revalidated here.

mod decode;
mod encode;
mod failure;

/// Default SDK flavor label stamped into task runtime metadata.
pub const RUNTIME_FLAVOR: &str = "rust";

/// Default SDK version stamped into task runtime metadata.
pub const RUNTIME_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default task type tag dispatched on by the execution engine.
pub const TASK_TYPE: &str = "rust-task";

/// Fixed constants the codec injects into every serialized task
/// template.
///
/// Injected at construction rather than read from globals so tests can
/// substitute alternate values without process-wide state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// SDK flavor label.
    pub runtime_flavor: String,
    /// SDK version string.
    pub runtime_version: String,
    /// Task type tag.
    pub task_type: String,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            runtime_flavor: RUNTIME_FLAVOR.to_string(),
            runtime_version: RUNTIME_VERSION.to_string(),
            task_type: TASK_TYPE.to_string(),
        }
    }
}

/// The stateless wire codec.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// Creates a codec with the given configuration.
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Returns the injected configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }
}
