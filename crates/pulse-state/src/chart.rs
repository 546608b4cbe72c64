//! Chart controller: period/type/hover state and memoized derivations

use leptos::prelude::*;
use pulse_charts::{hit_test, ChartScales, Geometry, Tooltip, Viewport};
use pulse_core::{ChartType, Metric, Period, Summary, SummaryChange, ValueFormatter};
use std::sync::Arc;

/// Transient hover state: the hit index and its tooltip payload.
/// Reset on pointer leave and on any dataset/period/type change that
/// invalidates the target.
#[derive(Debug, Clone, PartialEq)]
pub struct Hover {
    pub index: usize,
    pub tooltip: Tooltip,
}

/// Reactive chart state for a single metric.
///
/// Geometry is keyed on (period, chart type) and summary on period; both
/// are equality-gated memos, so downstream consumers only see genuine
/// changes.
#[derive(Clone)]
pub struct ChartState {
    metric: Arc<Metric>,
    formatter: Arc<dyn ValueFormatter>,
    pub viewport: Viewport,
    /// Active time granularity
    pub period: RwSignal<Period>,
    /// Active rendering style
    pub chart_type: RwSignal<ChartType>,
    /// Current hover target, if any
    pub hover: RwSignal<Option<Hover>>,
    /// Render geometry for the active dataset and chart type
    pub geometry: Memo<Geometry>,
    /// Summary statistics for the active dataset
    pub summary: Memo<Summary>,
}

impl ChartState {
    pub fn new(metric: Metric, formatter: Arc<dyn ValueFormatter>) -> Self {
        let metric = Arc::new(metric);
        let viewport = Viewport::dashboard();
        let period = RwSignal::new(Period::default());
        let chart_type = RwSignal::new(ChartType::default());

        let geometry = Memo::new({
            let metric = Arc::clone(&metric);
            move |_| {
                let dataset = metric.dataset(period.get());
                Geometry::build(dataset, chart_type.get(), viewport)
            }
        });

        let summary = Memo::new({
            let metric = Arc::clone(&metric);
            move |_| Summary::of(&metric.dataset(period.get()).data)
        });

        Self {
            metric,
            formatter,
            viewport,
            period,
            chart_type,
            hover: RwSignal::new(None),
            geometry,
            summary,
        }
    }

    pub fn metric_name(&self) -> &str {
        &self.metric.name
    }

    /// Format a value with the host-injected formatter
    pub fn format_value(&self, value: f64) -> String {
        self.formatter.format(value)
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Switch rendering style. A stale hover index pointing past the new
    /// geometry's point count is cleared.
    pub fn select_chart_type(&self, chart_type: ChartType) {
        self.chart_type.set(chart_type);

        let point_count = self.geometry.with_untracked(|g| g.points.len());
        let stale = self
            .hover
            .with_untracked(|h| h.as_ref().is_some_and(|h| h.index >= point_count));
        if stale {
            self.hover.set(None);
        }
    }

    /// Switch the active dataset. The old hover target is always invalid
    /// against a new dataset, so hover and tooltip clear unconditionally.
    pub fn select_period(&self, period: Period) {
        tracing::debug!(%period, "switching period");
        self.period.set(period);
        self.hover.set(None);
    }

    /// Hit-test a pointer position (pixels relative to the surface) and
    /// update hover and tooltip, or clear both when the series is empty.
    pub fn pointer_move(&self, pixel_x: f64, rendered_width: f64, rendered_height: f64) {
        let geometry = self.geometry.get_untracked();
        if geometry.points.is_empty() {
            self.hover.set(None);
            return;
        }

        let dataset = self.metric.dataset(self.period.get_untracked());
        let scales = ChartScales::new(self.viewport, dataset.len(), dataset.y_max);

        match hit_test(&geometry.points, &scales, pixel_x, rendered_width) {
            Some(index) => {
                let tooltip = Tooltip::for_point(
                    &geometry.points[index],
                    self.viewport,
                    rendered_width,
                    rendered_height,
                    self.formatter.as_ref(),
                );
                let next = Hover { index, tooltip };
                // Pointer moves arrive at high frequency; only touch the
                // signal when the hit actually changed.
                if self.hover.with_untracked(|h| h.as_ref() != Some(&next)) {
                    self.hover.set(Some(next));
                }
            }
            None => self.hover.set(None),
        }
    }

    pub fn pointer_leave(&self) {
        self.hover.set(None);
    }

    // ========================================================================
    // Derived accessors
    // ========================================================================

    pub fn hover_index(&self) -> Signal<Option<usize>> {
        let hover = self.hover;
        Signal::derive(move || hover.with(|h| h.as_ref().map(|h| h.index)))
    }

    pub fn tooltip(&self) -> Signal<Option<Tooltip>> {
        let hover = self.hover;
        Signal::derive(move || hover.with(|h| h.as_ref().map(|h| h.tooltip.clone())))
    }

    /// Register an external listener invoked with the summary payload
    /// exactly once per genuine change. The summary memo is equality-gated,
    /// so a re-render without an input change never re-fires.
    pub fn register_summary_listener(&self, listener: impl Fn(SummaryChange) + Send + Sync + 'static) {
        let summary = self.summary;
        let period = self.period;

        Effect::new(move |_| {
            let s = summary.get();
            listener(SummaryChange {
                current: s.current,
                previous: s.previous,
                change_pct: s.previous_pct,
                period: period.get_untracked(),
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::{CurrencyFormatter, DataError, DataSet};
    use std::collections::HashMap;

    fn strs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn dataset(data: Vec<f64>, y_max: f64) -> DataSet {
        let labels: Vec<String> = (0..data.len()).map(|i| format!("P{}", i + 1)).collect();
        let dates: Vec<String> = (0..data.len()).map(|i| format!("Point {}", i + 1)).collect();
        let comparison = vec![0.0; data.len()];
        DataSet::new(labels, dates, data, comparison, y_max).unwrap()
    }

    fn sample_state() -> ChartState {
        let mut datasets = HashMap::new();
        datasets.insert(
            Period::Months,
            dataset(
                vec![350.0, 450.0, 400.0, 570.0, 510.0, 680.0, 610.0, 780.0, 850.0, 920.0],
                1200.0,
            ),
        );
        datasets.insert(Period::Days, dataset(vec![96.0, 132.0, 118.0], 160.0));
        datasets.insert(Period::Weeks, dataset(vec![], 100.0));
        datasets.insert(Period::Quarters, dataset(vec![1210.0, 1580.0], 2000.0));
        datasets.insert(Period::Years, dataset(vec![6400.0], 8000.0));

        let metric = Metric::new("Revenue", datasets).unwrap();
        ChartState::new(metric, Arc::new(CurrencyFormatter::default()))
    }

    #[test]
    fn test_initial_state() {
        let state = sample_state();
        assert_eq!(state.period.get_untracked(), Period::Months);
        assert_eq!(state.chart_type.get_untracked(), ChartType::Line);
        assert!(state.hover.get_untracked().is_none());
    }

    #[test]
    fn test_summary_matches_active_dataset() {
        let state = sample_state();
        let summary = state.summary.get_untracked();

        assert_eq!(summary.current, 920.0);
        assert_eq!(summary.start, 350.0);
        assert_eq!(summary.previous, 850.0);
        assert!((summary.start_pct - 162.857).abs() < 0.01);
        assert!((summary.previous_pct - 8.235).abs() < 0.01);
    }

    #[test]
    fn test_pointer_move_sets_hover() {
        let state = sample_state();
        // Surface rendered at logical size: pixel x == logical x.
        state.pointer_move(51.0, 760.0, 320.0);

        let hover = state.hover.get_untracked().unwrap();
        assert_eq!(hover.index, 0);
        assert_eq!(hover.tooltip.formatted_value, "$350");
        assert_eq!(hover.tooltip.full_date, "Point 1");
    }

    #[test]
    fn test_pointer_move_idempotent() {
        let state = sample_state();
        state.pointer_move(400.0, 760.0, 320.0);
        let first = state.hover.get_untracked();
        state.pointer_move(400.0, 760.0, 320.0);
        assert_eq!(state.hover.get_untracked(), first);
    }

    #[test]
    fn test_select_period_clears_hover() {
        let state = sample_state();
        state.pointer_move(400.0, 760.0, 320.0);
        assert!(state.hover.get_untracked().is_some());

        state.select_period(Period::Days);
        assert!(state.hover.get_untracked().is_none());
        assert_eq!(state.geometry.get_untracked().points.len(), 3);
    }

    #[test]
    fn test_pointer_move_on_empty_series_clears_hover() {
        let state = sample_state();
        state.select_period(Period::Weeks);
        state.pointer_move(400.0, 760.0, 320.0);
        assert!(state.hover.get_untracked().is_none());
    }

    #[test]
    fn test_select_chart_type_clears_stale_hover() {
        let state = sample_state();
        state.pointer_move(400.0, 760.0, 320.0);
        let hover = state.hover.get_untracked().unwrap();

        // Same point count: hover survives a type switch
        state.select_chart_type(ChartType::Bar);
        assert_eq!(
            state.hover.get_untracked().map(|h| h.index),
            Some(hover.index)
        );

        // An index past the geometry is dropped
        state.hover.set(Some(Hover {
            index: 99,
            tooltip: hover.tooltip,
        }));
        state.select_chart_type(ChartType::Line);
        assert!(state.hover.get_untracked().is_none());
    }

    #[test]
    fn test_pointer_leave_clears_hover() {
        let state = sample_state();
        state.pointer_move(400.0, 760.0, 320.0);
        state.pointer_leave();
        assert!(state.hover.get_untracked().is_none());
    }

    #[test]
    fn test_summary_unchanged_by_chart_type() {
        // The listener effect is gated on the summary memo; a type switch
        // must not produce a new summary value.
        let state = sample_state();
        let before = state.summary.get_untracked();
        state.select_chart_type(ChartType::Bar);
        assert_eq!(state.summary.get_untracked(), before);
    }

    #[test]
    fn test_empty_series_summary_is_zero() {
        let state = sample_state();
        state.select_period(Period::Weeks);
        assert_eq!(state.summary.get_untracked(), Summary::default());
    }

    #[test]
    fn test_shape_mismatch_rejected_before_state() {
        let err = DataSet::new(
            strs(&["Jan"]),
            strs(&["January 2025", "February 2025"]),
            vec![350.0],
            vec![0.0],
            600.0,
        )
        .unwrap_err();
        assert!(matches!(err, DataError::ShapeMismatch { .. }));
    }
}
