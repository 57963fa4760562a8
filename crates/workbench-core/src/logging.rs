#![forbid(unsafe_code)]

//! Logging glue.
//!
//! With the `tracing` feature enabled the standard `tracing` macros are
//! re-exported here so dependent crates log through a single optional
//! dependency. Without the feature nothing is exported and call sites are
//! compiled out behind `#[cfg(feature = "tracing")]`.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
