//! Render geometry: per-index points, line/bar shapes, axis labels

use crate::{ChartScales, Viewport};
use pulse_core::{ChartType, DataSet};
use std::fmt::Write;

/// Fractions of `y_max` the value axis is labeled at
pub const AXIS_FRACTIONS: [f64; 6] = [1.0, 0.8, 0.6, 0.4, 0.2, 0.0];

const Y_LABEL_GAP: f64 = 8.0;
const X_LABEL_DROP: f64 = 18.0;

/// A derived per-index point carrying geometric position alongside the
/// original value/label/comparison data
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPoint {
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub label: String,
    pub full_date: String,
    pub comparison_pct: f64,
}

/// Bar rectangle in logical coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Renderable primitives for the active chart type
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// SVG path (`M` then `L` per vertex) plus its closed area fill
    Line { path: String, area: String },
    Bars(Vec<BarRect>),
    /// Empty series; the component renders a placeholder instead
    Empty,
}

/// Positioned axis label text
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Everything the chart surface renders, recomputed (never mutated) when
/// dataset, chart type, or viewport change
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub viewport: Viewport,
    pub points: Vec<RenderPoint>,
    pub shape: Shape,
    pub y_labels: Vec<AxisLabel>,
    pub x_labels: Vec<AxisLabel>,
}

impl Geometry {
    pub fn build(dataset: &DataSet, chart_type: ChartType, viewport: Viewport) -> Self {
        let scales = ChartScales::new(viewport, dataset.len(), dataset.y_max);

        if dataset.is_empty() {
            return Self {
                viewport,
                points: Vec::new(),
                shape: Shape::Empty,
                y_labels: Vec::new(),
                x_labels: Vec::new(),
            };
        }

        let points: Vec<RenderPoint> = dataset
            .data
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let x = match chart_type {
                    ChartType::Line => scales.index_to_line_x(i),
                    ChartType::Bar => scales.index_to_bar_x(i),
                };
                RenderPoint {
                    x,
                    y: scales.value_to_y(value),
                    value,
                    label: dataset.labels[i].clone(),
                    full_date: dataset.full_dates[i].clone(),
                    comparison_pct: dataset.comparison[i],
                }
            })
            .collect();

        let shape = match chart_type {
            ChartType::Line => {
                let vertices: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
                Shape::Line {
                    path: line_path(&vertices),
                    area: area_path(&vertices, viewport.plot_bottom()),
                }
            }
            ChartType::Bar => Shape::Bars(
                points
                    .iter()
                    .map(|p| BarRect {
                        x: p.x - scales.bar_width() / 2.0,
                        y: p.y,
                        width: scales.bar_width(),
                        height: (viewport.plot_bottom() - p.y).max(0.0),
                    })
                    .collect(),
            ),
        };

        let y_labels = AXIS_FRACTIONS
            .iter()
            .map(|&frac| {
                let value = frac * dataset.y_max;
                AxisLabel {
                    text: format_axis_value(value),
                    x: viewport.plot_left() - Y_LABEL_GAP,
                    y: scales.value_to_y(value),
                }
            })
            .collect();

        let x_labels = points
            .iter()
            .map(|p| AxisLabel {
                text: p.label.clone(),
                x: p.x,
                y: viewport.plot_bottom() + X_LABEL_DROP,
            })
            .collect();

        tracing::debug!(points = points.len(), ?chart_type, "rebuilt chart geometry");

        Self {
            viewport,
            points,
            shape,
            y_labels,
            x_labels,
        }
    }
}

/// Generate line path (non-closed)
pub fn line_path(points: &[(f64, f64)]) -> String {
    if points.is_empty() {
        return String::new();
    }

    let mut path = String::with_capacity(points.len() * 20);
    let (x, y) = points[0];
    write!(path, "M{:.2},{:.2}", x, y).unwrap();

    for &(x, y) in &points[1..] {
        write!(path, "L{:.2},{:.2}", x, y).unwrap();
    }

    path
}

/// Generate closed area path with baseline
pub fn area_path(points: &[(f64, f64)], baseline_y: f64) -> String {
    if points.is_empty() {
        return String::new();
    }

    let mut path = String::with_capacity(points.len() * 20 + 32);
    write!(path, "M{:.2},{:.2}", points[0].0, baseline_y).unwrap();

    for &(x, y) in points {
        write!(path, "L{:.2},{:.2}", x, y).unwrap();
    }

    if let Some(&(last_x, _)) = points.last() {
        write!(path, "L{:.2},{:.2}", last_x, baseline_y).unwrap();
    }

    path.push('Z');
    path
}

/// Format a value-axis label: >= 1000 gets a one-decimal `k` suffix with
/// trailing `.0` stripped, below that renders as an integer.
pub fn format_axis_value(value: f64) -> String {
    if value >= 1000.0 {
        let scaled = format!("{:.1}", value / 1000.0);
        let scaled = scaled.strip_suffix(".0").unwrap_or(&scaled);
        format!("{}k", scaled)
    } else {
        format!("{:.0}", value)
    }
}
