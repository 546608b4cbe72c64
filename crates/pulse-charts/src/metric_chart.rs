//! Interactive metric chart component
//!
//! Renders the active geometry as SVG, feeds pointer positions back to the
//! state layer, and floats the tooltip overlay over the hovered point.

use crate::{colors, Geometry, Shape, Tooltip, TOOLTIP_RISE};
use leptos::prelude::*;
use pulse_core::Trend;
use web_sys::MouseEvent;

#[component]
pub fn MetricChart(
    #[prop(into)] geometry: Signal<Geometry>,
    #[prop(into)] hover_index: Signal<Option<usize>>,
    #[prop(into)] tooltip: Signal<Option<Tooltip>>,
    /// Receives (pixel_x, rendered_width, rendered_height) on pointer move
    #[prop(into)]
    on_pointer_move: Callback<(f64, f64, f64)>,
    #[prop(into)] on_pointer_leave: Callback<()>,
) -> impl IntoView {
    let svg_ref = NodeRef::<leptos::svg::Svg>::new();

    let handle_move = move |ev: MouseEvent| {
        if let Some(svg) = svg_ref.get() {
            let rect = svg.get_bounding_client_rect();
            let pixel_x = ev.client_x() as f64 - rect.left();
            on_pointer_move.run((pixel_x, rect.width(), rect.height()));
        }
    };

    view! {
        <div class="metric-chart">
            <svg
                node_ref=svg_ref
                class="metric-chart-surface"
                viewBox=move || geometry.with(|g| g.viewport.viewbox())
                preserveAspectRatio="none"
                on:mousemove=handle_move
                on:mouseleave=move |_| on_pointer_leave.run(())
            >
                // Background
                <rect
                    width=move || geometry.with(|g| g.viewport.width)
                    height=move || geometry.with(|g| g.viewport.height)
                    fill=colors::BG_PANEL
                    rx="4"
                />

                // Gridlines and axis labels
                {move || {
                    let g = geometry.get();
                    let vp = g.viewport;

                    if g.points.is_empty() {
                        return None;
                    }

                    Some(view! {
                        <g class="chart-grid">
                            {g.y_labels.iter().map(|label| {
                                view! {
                                    <line
                                        x1=vp.plot_left()
                                        y1=label.y
                                        x2=vp.plot_right()
                                        y2=label.y
                                        stroke=colors::GRID
                                        stroke-width="1"
                                        stroke-dasharray="2,2"
                                    />
                                }
                            }).collect_view()}
                        </g>
                        <g class="chart-axis-y">
                            {g.y_labels.iter().map(|label| {
                                view! {
                                    <text
                                        x=label.x
                                        y=label.y
                                        dy="0.32em"
                                        text-anchor="end"
                                        fill=colors::TEXT_MUTED
                                        font-size="11"
                                    >
                                        {label.text.clone()}
                                    </text>
                                }
                            }).collect_view()}
                        </g>
                        <g class="chart-axis-x">
                            {g.x_labels.iter().map(|label| {
                                view! {
                                    <text
                                        x=label.x
                                        y=label.y
                                        text-anchor="middle"
                                        fill=colors::TEXT_MUTED
                                        font-size="11"
                                    >
                                        {label.text.clone()}
                                    </text>
                                }
                            }).collect_view()}
                        </g>
                    })
                }}

                // Series shape
                {move || {
                    let g = geometry.get();
                    match g.shape {
                        Shape::Empty => view! {
                            <text
                                class="chart-empty"
                                x=g.viewport.width / 2.0
                                y=g.viewport.height / 2.0
                                text-anchor="middle"
                                fill=colors::TEXT_MUTED
                                font-size="13"
                            >
                                "No data for this period"
                            </text>
                        }
                        .into_any(),

                        Shape::Line { path, area } => view! {
                            <path d=area fill=colors::accent_alpha(0.15) />
                            <path
                                d=path
                                fill="none"
                                stroke=colors::ACCENT
                                stroke-width="2"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                            />
                            {g.points.iter().map(|p| {
                                view! { <circle cx=p.x cy=p.y r=3.0 fill=colors::ACCENT /> }
                            }).collect_view()}
                        }
                        .into_any(),

                        Shape::Bars(bars) => bars.into_iter().map(|bar| {
                            view! {
                                <rect
                                    x=bar.x
                                    y=bar.y
                                    width=bar.width
                                    height=bar.height
                                    fill=colors::accent_alpha(0.85)
                                    rx="2"
                                />
                            }
                        }).collect_view().into_any(),
                    }
                }}

                // Hovered-point marker
                {move || {
                    hover_index.get()
                        .and_then(|i| geometry.with(|g| g.points.get(i).map(|p| (p.x, p.y))))
                        .map(|(x, y)| view! {
                            <circle
                                class="hover-marker"
                                cx=x
                                cy=y
                                r=5.0
                                fill=colors::ACCENT
                                stroke=colors::TEXT_PRIMARY
                                stroke-width="1.5"
                            />
                        })
                }}
            </svg>

            // Floating tooltip overlay
            {move || {
                tooltip.get().map(|t| {
                    let trend = Trend::of(t.comparison_pct);
                    view! {
                        <div
                            class="chart-tooltip"
                            style=format!(
                                "left: {:.0}px; top: {:.0}px;",
                                t.anchor.x,
                                t.anchor.y - TOOLTIP_RISE,
                            )
                        >
                            <span class="tooltip-date">{t.full_date.clone()}</span>
                            <span class="tooltip-value">{t.formatted_value.clone()}</span>
                            <span
                                class="tooltip-comparison"
                                style=format!("color: {}", trend.color())
                            >
                                {trend.arrow()} " " {t.comparison_str()}
                            </span>
                        </div>
                    }
                })
            }}
        </div>
    }
}
