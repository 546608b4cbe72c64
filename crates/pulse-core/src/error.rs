//! Error types for dataset validation

use crate::metric::Period;
use thiserror::Error;

/// Validation failures surfaced at construction time.
///
/// Shape problems are rejected when a `DataSet` or `Metric` is built, never
/// discovered lazily mid-render.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error(
        "dataset sequences have mismatched lengths \
         (labels: {labels}, dates: {full_dates}, data: {data}, comparison: {comparison})"
    )]
    ShapeMismatch {
        labels: usize,
        full_dates: usize,
        data: usize,
        comparison: usize,
    },

    #[error("metric has no dataset for period {0}")]
    MissingPeriod(Period),
}

pub type Result<T> = std::result::Result<T, DataError>;
