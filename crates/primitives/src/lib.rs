//! Shared value types for the treediff workspace.
//!
//! This crate is independent of the engine and the server so that callers
//! can construct trees and consume diff events without pulling in the
//! async runtime.

mod diff;
mod metrics;
mod tree;

pub use diff::{DiffEvent, DiffKind};
pub use metrics::MetricsSnapshot;
pub use tree::Node;
