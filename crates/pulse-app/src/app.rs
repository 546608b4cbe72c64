//! Root application component

use leptos::prelude::*;
use pulse_components::Dashboard;
use pulse_core::CurrencyFormatter;
use pulse_state::provide_dashboard_state;
use std::sync::Arc;

#[component]
pub fn App() -> impl IntoView {
    let metric = match crate::data::revenue_metric() {
        Ok(metric) => metric,
        Err(err) => {
            tracing::error!(%err, "failed to build sample metric");
            return view! {
                <div class="load-error">
                    <span class="error-icon">"⚠"</span>
                    <span class="error-msg">"Failed to load dashboard data"</span>
                </div>
            }
            .into_any();
        }
    };

    let state = provide_dashboard_state(metric, Arc::new(CurrencyFormatter::default()));

    // Stand-in for the forecast widget: log each genuine summary change
    state.register_summary_listener(|change| {
        tracing::info!(
            period = %change.period,
            current = change.current,
            previous = change.previous,
            change_pct = change.change_pct,
            "summary updated"
        );
    });

    view! { <Dashboard /> }.into_any()
}
