//! Tracing utilities for identifier-generation observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! The macro no-ops when the feature is disabled, avoiding `#[cfg]`
//! boilerplate at the generation site.

/// Emit a trace-level event for one generated identifier.
///
/// ```ignore
/// cuid2_trace_generate!(length, prefixed);
/// ```
#[macro_export]
macro_rules! cuid2_trace_generate {
    ($length:expr, $prefixed:expr) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(length = $length, prefixed = $prefixed, "cuid2.generate");
    };
}
