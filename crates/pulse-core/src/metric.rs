//! Time periods, chart types, and per-period datasets

use crate::error::{DataError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// ENUMERATIONS
// ============================================================================

/// Time granularity selecting which dataset is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "days")]
    Days,
    #[serde(rename = "weeks")]
    Weeks,
    #[serde(rename = "months")]
    Months,
    #[serde(rename = "quarters")]
    Quarters,
    #[serde(rename = "years")]
    Years,
}

impl Period {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Days => "Days",
            Self::Weeks => "Weeks",
            Self::Months => "Months",
            Self::Quarters => "Quarters",
            Self::Years => "Years",
        }
    }

    /// All periods, in selector order
    pub fn all() -> &'static [Self] {
        &[
            Self::Days,
            Self::Weeks,
            Self::Months,
            Self::Quarters,
            Self::Years,
        ]
    }
}

impl Default for Period {
    fn default() -> Self {
        Self::Months
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Chart rendering style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartType {
    #[serde(rename = "line")]
    Line,
    #[serde(rename = "bar")]
    Bar,
}

impl ChartType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Line => "Line",
            Self::Bar => "Bar",
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::Line, Self::Bar]
    }
}

impl Default for ChartType {
    fn default() -> Self {
        Self::Line
    }
}

impl std::fmt::Display for ChartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// DATASETS
// ============================================================================

/// One time series for one period granularity.
///
/// The four sequences are index-aligned; `new` rejects unequal lengths so
/// per-index lookups are never out of range after construction. `y_max`
/// should be >= max(data) for correct rendering but is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSet {
    /// Short axis labels (e.g. month abbreviations)
    pub labels: Vec<String>,
    /// Full-form date strings, index-aligned with `labels`
    pub full_dates: Vec<String>,
    /// Plotted values; may be empty
    pub data: Vec<f64>,
    /// Per-point percentage deltas, index-aligned
    pub comparison: Vec<f64>,
    /// Vertical-axis upper bound
    pub y_max: f64,
}

impl DataSet {
    /// Build a dataset, failing fast on mismatched sequence lengths
    pub fn new(
        labels: Vec<String>,
        full_dates: Vec<String>,
        data: Vec<f64>,
        comparison: Vec<f64>,
        y_max: f64,
    ) -> Result<Self> {
        let aligned = labels.len() == full_dates.len()
            && labels.len() == data.len()
            && labels.len() == comparison.len();

        if !aligned {
            tracing::warn!(
                labels = labels.len(),
                full_dates = full_dates.len(),
                data = data.len(),
                comparison = comparison.len(),
                "rejecting dataset with mismatched sequence lengths"
            );
            return Err(DataError::ShapeMismatch {
                labels: labels.len(),
                full_dates: full_dates.len(),
                data: data.len(),
                comparison: comparison.len(),
            });
        }

        Ok(Self {
            labels,
            full_dates,
            data,
            comparison,
            y_max,
        })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

// ============================================================================
// METRICS
// ============================================================================

/// A named metric owning one dataset per period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
    datasets: HashMap<Period, DataSet>,
}

impl Metric {
    /// Build a metric, failing fast when any period's dataset is absent
    pub fn new(name: impl Into<String>, datasets: HashMap<Period, DataSet>) -> Result<Self> {
        for &period in Period::all() {
            if !datasets.contains_key(&period) {
                return Err(DataError::MissingPeriod(period));
            }
        }

        Ok(Self {
            name: name.into(),
            datasets,
        })
    }

    /// Dataset for a period. Every period is present after construction.
    pub fn dataset(&self, period: Period) -> &DataSet {
        &self.datasets[&period]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sample_dataset() -> DataSet {
        DataSet::new(
            strs(&["Jan", "Feb", "Mar"]),
            strs(&["January 2025", "February 2025", "March 2025"]),
            vec![350.0, 450.0, 400.0],
            vec![0.0, 28.6, -11.1],
            600.0,
        )
        .unwrap()
    }

    #[test]
    fn test_dataset_shape_mismatch() {
        let err = DataSet::new(
            strs(&["Jan", "Feb"]),
            strs(&["January 2025"]),
            vec![350.0, 450.0],
            vec![0.0, 28.6],
            600.0,
        )
        .unwrap_err();

        assert_eq!(
            err,
            DataError::ShapeMismatch {
                labels: 2,
                full_dates: 1,
                data: 2,
                comparison: 2,
            }
        );
    }

    #[test]
    fn test_empty_dataset_is_valid() {
        let ds = DataSet::new(vec![], vec![], vec![], vec![], 100.0).unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.len(), 0);
    }

    #[test]
    fn test_metric_missing_period() {
        let mut datasets = HashMap::new();
        datasets.insert(Period::Months, sample_dataset());

        let err = Metric::new("Revenue", datasets).unwrap_err();
        assert!(matches!(err, DataError::MissingPeriod(_)));
    }

    #[test]
    fn test_metric_dataset_lookup() {
        let mut datasets = HashMap::new();
        for &period in Period::all() {
            datasets.insert(period, sample_dataset());
        }

        let metric = Metric::new("Revenue", datasets).unwrap();
        assert_eq!(metric.dataset(Period::Quarters).len(), 3);
    }

    #[test]
    fn test_period_serde_renames() {
        assert_eq!(serde_json::to_string(&Period::Quarters).unwrap(), "\"quarters\"");
        assert_eq!(serde_json::to_string(&ChartType::Bar).unwrap(), "\"bar\"");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Period::default(), Period::Months);
        assert_eq!(ChartType::default(), ChartType::Line);
    }
}
