//! Summary statistics derived from the active dataset

use crate::colors;
use crate::metric::Period;
use serde::{Deserialize, Serialize};

/// Percentage change from `base` to `current`.
///
/// A zero base never divides: the result is 100 for growth from nothing,
/// 0 when both sides are zero or negative. Always finite.
pub fn percent_change(current: f64, base: f64) -> f64 {
    if base == 0.0 {
        if current > 0.0 { 100.0 } else { 0.0 }
    } else {
        (current - base) / base * 100.0
    }
}

/// Current/start/previous values and their percentage deltas
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub current: f64,
    pub start: f64,
    pub previous: f64,
    pub start_pct: f64,
    pub previous_pct: f64,
}

impl Summary {
    /// Derive a summary from a plotted series. Empty input yields all zeros.
    pub fn of(values: &[f64]) -> Self {
        let current = values.last().copied().unwrap_or(0.0);
        let start = values.first().copied().unwrap_or(0.0);
        let previous = if values.len() >= 2 {
            values[values.len() - 2]
        } else {
            0.0
        };

        Self {
            current,
            start,
            previous,
            start_pct: percent_change(current, start),
            previous_pct: percent_change(current, previous),
        }
    }

    pub fn start_trend(&self) -> Trend {
        Trend::of(self.start_pct)
    }

    pub fn previous_trend(&self) -> Trend {
        Trend::of(self.previous_pct)
    }
}

/// Payload pushed to the external summary listener
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryChange {
    pub current: f64,
    pub previous: f64,
    /// Previous-period percentage change
    pub change_pct: f64,
    pub period: Period,
}

/// Direction indicator for a percentage delta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trend {
    Up,
    Down,
    #[default]
    Flat,
}

impl Trend {
    pub fn of(pct: f64) -> Self {
        if pct > 0.0 {
            Self::Up
        } else if pct < 0.0 {
            Self::Down
        } else {
            Self::Flat
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
            Self::Flat => "●",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Up => colors::POSITIVE,
            Self::Down => colors::NEGATIVE,
            Self::Flat => colors::NEUTRAL,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Up => "trend-up",
            Self::Down => "trend-down",
            Self::Flat => "trend-flat",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_change_zero_base() {
        assert_eq!(percent_change(50.0, 0.0), 100.0);
        assert_eq!(percent_change(0.0, 0.0), 0.0);
        assert!(percent_change(50.0, 0.0).is_finite());
    }

    #[test]
    fn test_percent_change() {
        assert!((percent_change(150.0, 100.0) - 50.0).abs() < 1e-9);
        assert!((percent_change(75.0, 100.0) + 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_of_series() {
        let data = [350.0, 450.0, 400.0, 570.0, 510.0, 680.0, 610.0, 780.0, 850.0, 920.0];
        let summary = Summary::of(&data);

        assert_eq!(summary.current, 920.0);
        assert_eq!(summary.start, 350.0);
        assert_eq!(summary.previous, 850.0);
        assert!((summary.start_pct - 162.857).abs() < 0.01);
        assert!((summary.previous_pct - 8.235).abs() < 0.01);
    }

    #[test]
    fn test_summary_of_empty() {
        let summary = Summary::of(&[]);
        assert_eq!(summary, Summary::default());
    }

    #[test]
    fn test_summary_of_single_point() {
        let summary = Summary::of(&[42.0]);
        assert_eq!(summary.current, 42.0);
        assert_eq!(summary.start, 42.0);
        assert_eq!(summary.previous, 0.0);
        assert_eq!(summary.previous_pct, 100.0);
    }

    #[test]
    fn test_trend_direction() {
        assert_eq!(Trend::of(8.2), Trend::Up);
        assert_eq!(Trend::of(-3.4), Trend::Down);
        assert_eq!(Trend::of(0.0), Trend::Flat);
        assert_eq!(Trend::Up.arrow(), "▲");
        assert_eq!(Trend::Down.arrow(), "▼");
    }
}
