//! Common utilities for the Renit template parser.
//!
//! This crate provides shared infrastructure used by the parser crates:
//! - **Warning System** - per-parse deduplicated diagnostics routed through `tracing`
//! - **Line Index** - byte offset to line/column mapping for source positions

pub mod position;
pub mod warning;

pub use position::LineIndex;
pub use warning::WarningLog;
