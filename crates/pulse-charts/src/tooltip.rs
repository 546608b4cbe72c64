//! Tooltip payload and logical-to-pixel anchor positioning

use crate::{RenderPoint, Viewport};
use pulse_core::ValueFormatter;

/// Fixed pixel offset lifting the tooltip above its anchor
pub const TOOLTIP_RISE: f64 = 12.0;

/// Anchor position in pixels relative to the container's rendered size
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TooltipAnchor {
    pub x: f64,
    pub y: f64,
}

impl TooltipAnchor {
    /// Project a logical position into the container's pixel space, the
    /// inverse of the stretch the renderer applies to the fixed viewBox.
    pub fn from_logical(
        logical_x: f64,
        logical_y: f64,
        viewport: Viewport,
        container_width: f64,
        container_height: f64,
    ) -> Self {
        Self {
            x: logical_x / viewport.width * container_width,
            y: logical_y / viewport.height * container_height,
        }
    }
}

/// Hover payload handed to the host UI. Purely informational overlay; it
/// never intercepts pointer events.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub full_date: String,
    pub formatted_value: String,
    pub comparison_pct: f64,
    pub anchor: TooltipAnchor,
}

impl Tooltip {
    pub fn for_point(
        point: &RenderPoint,
        viewport: Viewport,
        container_width: f64,
        container_height: f64,
        formatter: &dyn ValueFormatter,
    ) -> Self {
        Self {
            full_date: point.full_date.clone(),
            formatted_value: formatter.format(point.value),
            comparison_pct: point.comparison_pct,
            anchor: TooltipAnchor::from_logical(
                point.x,
                point.y,
                viewport,
                container_width,
                container_height,
            ),
        }
    }

    /// Comparison delta with sign, e.g. `+8.2%`
    pub fn comparison_str(&self) -> String {
        let sign = if self.comparison_pct >= 0.0 { "+" } else { "" };
        format!("{}{:.1}%", sign, self.comparison_pct)
    }
}
