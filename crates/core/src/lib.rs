//! Metric-kind definitions and canonical naming for the Remora segment engine.
//!
//! The engine that owns index construction, query execution, and segment
//! storage records a metric kind per segment. This crate holds the local
//! [`MetricKind`] enumeration, the stable canonical name for each kind, and
//! the checked conversions used where raw metric codes cross the boundary
//! from stored metadata into the engine.

pub mod error;
pub mod metric;

pub use error::{MetricError, MetricResult};
pub use metric::{MetricKind, UNKNOWN_METRIC_NAME};
