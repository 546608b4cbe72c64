//! # pulse-core
//!
//! Core domain types for the Pulse Metrics Dashboard.
//! Implements Strategy pattern for value formatting.

pub mod error;
pub mod metric;
pub mod summary;

pub use error::*;
pub use metric::*;
pub use summary::*;

// ============================================================================
// STRATEGY PATTERN: Formatters
// ============================================================================

/// Strategy trait for displayed-value formatting.
///
/// The host injects one of these; everything the dashboard prints a metric
/// value through goes via this trait, so currency vs. plain-number display
/// is a caller decision.
pub trait ValueFormatter: Send + Sync {
    fn format(&self, value: f64) -> String;
}

/// Currency formatter with configurable symbol and decimals
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    pub symbol: &'static str,
    pub decimals: usize,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self {
            symbol: "$",
            decimals: 0,
        }
    }
}

impl ValueFormatter for CurrencyFormatter {
    fn format(&self, value: f64) -> String {
        format!("{}{:.prec$}", self.symbol, value, prec = self.decimals)
    }
}

/// Compact formatter for large numbers (K, M, B suffixes)
#[derive(Debug, Clone, Default)]
pub struct CompactNumberFormatter;

impl ValueFormatter for CompactNumberFormatter {
    fn format(&self, value: f64) -> String {
        let abs = value.abs();
        let sign = if value < 0.0 { "-" } else { "" };

        if abs >= 1_000_000_000.0 {
            format!("{}{:.2}B", sign, abs / 1_000_000_000.0)
        } else if abs >= 1_000_000.0 {
            format!("{}{:.2}M", sign, abs / 1_000_000.0)
        } else if abs >= 1_000.0 {
            format!("{}{:.2}K", sign, abs / 1_000.0)
        } else {
            format!("{}{:.2}", sign, abs)
        }
    }
}

// ============================================================================
// COLOR CONSTANTS
// ============================================================================

pub mod colors {
    pub const ACCENT: &str = "#6366f1";
    pub const POSITIVE: &str = "#22c55e";
    pub const NEGATIVE: &str = "#ef4444";
    pub const NEUTRAL: &str = "#888888";
    pub const BG_VOID: &str = "#0a0a0a";
    pub const BG_PANEL: &str = "#141414";
    pub const BG_ELEVATED: &str = "#1a1a1a";
    pub const BORDER: &str = "#2a2a2a";
    pub const TEXT_PRIMARY: &str = "#fafafa";
    pub const TEXT_MUTED: &str = "#888888";
    pub const GRID: &str = "#1f1f1f";

    pub fn accent_alpha(alpha: f64) -> String {
        format!("rgba(99, 102, 241, {:.2})", alpha)
    }

    pub fn positive_alpha(alpha: f64) -> String {
        format!("rgba(34, 197, 94, {:.2})", alpha)
    }

    pub fn negative_alpha(alpha: f64) -> String {
        format!("rgba(239, 68, 68, {:.2})", alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_formatter_strategy() {
        let formatter = CurrencyFormatter {
            symbol: "€",
            decimals: 2,
        };
        assert_eq!(formatter.format(920.5), "€920.50");

        let default = CurrencyFormatter::default();
        assert_eq!(default.format(920.0), "$920");
    }

    #[test]
    fn test_compact_formatter() {
        let formatter = CompactNumberFormatter;
        assert_eq!(formatter.format(1_500_000.0), "1.50M");
        assert_eq!(formatter.format(2_500.0), "2.50K");
        assert_eq!(formatter.format(500.0), "500.00");
        assert_eq!(formatter.format(-2_500.0), "-2.50K");
    }
}
