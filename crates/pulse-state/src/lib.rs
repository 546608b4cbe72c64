//! # pulse-state
//!
//! Reactive state management for the Pulse Metrics Dashboard.
//! Uses Leptos signals and memos so geometry and summary recompute only
//! when their declared inputs change, never per event tick.

pub mod chart;

pub use chart::*;

use leptos::prelude::*;
use pulse_core::{Metric, ValueFormatter};
use std::sync::Arc;

// ============================================================================
// CONTEXT HELPERS
// ============================================================================

/// Provide dashboard chart state to the component tree
pub fn provide_dashboard_state(
    metric: Metric,
    formatter: Arc<dyn ValueFormatter>,
) -> ChartState {
    let state = ChartState::new(metric, formatter);
    provide_context(state.clone());
    state
}

/// Use dashboard chart state from context
pub fn use_dashboard_state() -> ChartState {
    expect_context::<ChartState>()
}

/// Try to get dashboard chart state from context (returns None if not provided)
pub fn try_use_dashboard_state() -> Option<ChartState> {
    use_context::<ChartState>()
}
