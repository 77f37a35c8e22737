//! Metric error types.

use thiserror::Error;

/// Errors from metric-kind boundary conversions.
#[derive(Error, Debug)]
pub enum MetricError {
    #[error("Unknown metric code: {0}")]
    UnknownCode(i32),

    #[error("Unknown metric name: {0}")]
    UnknownName(String),
}

pub type MetricResult<T> = Result<T, MetricError>;
