//! Summary bar for the dashboard header

use leptos::prelude::*;
use pulse_core::Trend;
use pulse_state::use_dashboard_state;

#[component]
pub fn SummaryBar() -> impl IntoView {
    let state = use_dashboard_state();
    let summary = state.summary;
    let name = state.metric_name().to_string();

    let current = {
        let state = state.clone();
        move || state.format_value(summary.get().current)
    };
    let start = {
        let state = state.clone();
        move || state.format_value(summary.get().start)
    };
    let previous = {
        let state = state.clone();
        move || state.format_value(summary.get().previous)
    };

    view! {
        <div class="summary-bar">
            <div class="sb-metric">
                <span class="metric-name">{name}</span>
                <span class="metric-value">{current}</span>
            </div>

            <div class="sb-stats">
                <div class="sb-stat">
                    <span class="stat-label">"Start"</span>
                    <span class="stat-value">{start}</span>
                </div>
                <div class="sb-stat">
                    <span class="stat-label">"Previous"</span>
                    <span class="stat-value">{previous}</span>
                </div>
                <ChangeBadge
                    label="vs start"
                    pct=Signal::derive(move || summary.get().start_pct)
                />
                <ChangeBadge
                    label="vs previous"
                    pct=Signal::derive(move || summary.get().previous_pct)
                />
            </div>
        </div>
    }
}

/// Percentage delta with direction arrow and trend color
#[component]
fn ChangeBadge(label: &'static str, #[prop(into)] pct: Signal<f64>) -> impl IntoView {
    let text = move || {
        let p = pct.get();
        let sign = if p >= 0.0 { "+" } else { "" };
        format!("{} {}{:.1}%", Trend::of(p).arrow(), sign, p)
    };

    view! {
        <div class="sb-stat">
            <span class="stat-label">{label}</span>
            <span
                class=move || format!("stat-value {}", Trend::of(pct.get()).css_class())
                style=move || format!("color: {}", Trend::of(pct.get()).color())
            >
                {text}
            </span>
        </div>
    }
}
