//! Period and chart-type selector controls

use leptos::prelude::*;
use pulse_core::{ChartType, Period};
use pulse_state::use_dashboard_state;

#[component]
pub fn PeriodSelector() -> impl IntoView {
    let state = use_dashboard_state();
    let active = state.period;

    view! {
        <div class="selector period-selector">
            {Period::all().iter().map(|&period| {
                let state = state.clone();
                view! {
                    <button
                        class=move || {
                            if active.get() == period {
                                "selector-btn active"
                            } else {
                                "selector-btn"
                            }
                        }
                        on:click=move |_| state.select_period(period)
                    >
                        {period.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn ChartTypeToggle() -> impl IntoView {
    let state = use_dashboard_state();
    let active = state.chart_type;

    view! {
        <div class="selector chart-type-toggle">
            {ChartType::all().iter().map(|&chart_type| {
                let state = state.clone();
                view! {
                    <button
                        class=move || {
                            if active.get() == chart_type {
                                "selector-btn active"
                            } else {
                                "selector-btn"
                            }
                        }
                        on:click=move |_| state.select_chart_type(chart_type)
                    >
                        {chart_type.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
