#![forbid(unsafe_code)]

//! Core: geometry primitives and logging glue.
//!
//! # Role in workbench
//! `workbench-core` is the bottom of the crate graph. It owns the signed
//! pixel [`geometry`] types that the tab strip layout computes with, and the
//! optional [`logging`] re-exports every other crate logs through.

pub mod geometry;
pub mod logging;

pub use geometry::{Insets, Rect, Size};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
