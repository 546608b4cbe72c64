//! Main dashboard layout component

use leptos::prelude::*;
use pulse_charts::MetricChart;
use pulse_state::use_dashboard_state;

use crate::{ChartTypeToggle, PeriodSelector, SummaryBar};

#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_dashboard_state();

    let on_pointer_move = Callback::new({
        let state = state.clone();
        move |(pixel_x, width, height): (f64, f64, f64)| {
            state.pointer_move(pixel_x, width, height);
        }
    });

    let on_pointer_leave = Callback::new({
        let state = state.clone();
        move |_: ()| state.pointer_leave()
    });

    view! {
        <div class="dashboard">
            <header class="dash-header">
                <SummaryBar />
            </header>

            <main class="dash-main">
                <section class="dash-center">
                    <div class="panel chart-container">
                        <div class="panel-header">
                            <span class="panel-title">{state.metric_name().to_string()}</span>
                            <div class="panel-controls">
                                <PeriodSelector />
                                <ChartTypeToggle />
                            </div>
                        </div>
                        <div class="panel-content">
                            <MetricChart
                                geometry=state.geometry
                                hover_index=state.hover_index()
                                tooltip=state.tooltip()
                                on_pointer_move=on_pointer_move
                                on_pointer_leave=on_pointer_leave
                            />
                        </div>
                    </div>
                </section>
            </main>
        </div>
    }
}
