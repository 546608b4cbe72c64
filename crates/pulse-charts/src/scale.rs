//! Linear scales and the index/value transforms for the chart surface

use crate::Viewport;

/// Linear scale (D3-style continuous scale)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
        }
    }

    pub fn domain(mut self, min: f64, max: f64) -> Self {
        self.domain = (min, max);
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    /// Scale a value from domain to range. A degenerate domain collapses
    /// to the range midpoint.
    pub fn scale(&self, value: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if (d_max - d_min).abs() < f64::EPSILON {
            return (r_min + r_max) / 2.0;
        }

        let normalized = (value - d_min) / (d_max - d_min);
        r_min + normalized * (r_max - r_min)
    }

    /// Inverse scale (range to domain)
    pub fn invert(&self, value: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if (r_max - r_min).abs() < f64::EPSILON {
            return (d_min + d_max) / 2.0;
        }

        let normalized = (value - r_min) / (r_max - r_min);
        d_min + normalized * (d_max - d_min)
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new()
    }
}

/// Bar width as a fraction of its slot
pub const BAR_FILL_RATIO: f64 = 0.6;

/// The transforms between data indices/values and the logical rectangle,
/// plus the pixel-to-logical inverse for pointer positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScales {
    viewport: Viewport,
    n: usize,
    y_max: f64,
    x: LinearScale,
    y: LinearScale,
}

impl ChartScales {
    pub fn new(viewport: Viewport, n: usize, y_max: f64) -> Self {
        let x = LinearScale::new()
            .domain(0.0, n.saturating_sub(1) as f64)
            .range(viewport.plot_left(), viewport.plot_right());
        let y = LinearScale::new()
            .domain(0.0, y_max)
            .range(viewport.plot_bottom(), viewport.plot_top());

        Self {
            viewport,
            n,
            y_max,
            x,
            y,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Map a value onto the inverted vertical axis. A non-positive `y_max`
    /// flattens everything to the baseline.
    pub fn value_to_y(&self, value: f64) -> f64 {
        if self.y_max <= 0.0 {
            return self.viewport.plot_bottom();
        }
        self.y.scale(value)
    }

    /// Map an index across the plot width for line charts. A single-point
    /// series lands at the horizontal center.
    pub fn index_to_line_x(&self, index: usize) -> f64 {
        self.x.scale(index as f64)
    }

    /// Width of one of the `n` equal slots the plot divides into
    pub fn slot_width(&self) -> f64 {
        if self.n == 0 {
            return 0.0;
        }
        self.viewport.plot_width() / self.n as f64
    }

    /// Center of slot `index` for bar charts
    pub fn index_to_bar_x(&self, index: usize) -> f64 {
        self.viewport.plot_left() + (index as f64 + 0.5) * self.slot_width()
    }

    pub fn bar_width(&self) -> f64 {
        self.slot_width() * BAR_FILL_RATIO
    }

    /// Project a pixel offset within the surface's current rendered width
    /// back into the logical rectangle, undoing the renderer's stretch.
    pub fn pixel_x_to_logical_x(&self, pixel_x: f64, rendered_width: f64) -> f64 {
        if rendered_width <= 0.0 {
            return 0.0;
        }

        LinearScale::new()
            .domain(0.0, self.viewport.width)
            .range(0.0, rendered_width)
            .invert(pixel_x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scales(n: usize, y_max: f64) -> ChartScales {
        ChartScales::new(Viewport::dashboard(), n, y_max)
    }

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new().domain(0.0, 100.0).range(0.0, 500.0);

        assert_eq!(scale.scale(0.0), 0.0);
        assert_eq!(scale.scale(50.0), 250.0);
        assert_eq!(scale.scale(100.0), 500.0);
    }

    #[test]
    fn test_linear_scale_invert() {
        let scale = LinearScale::new().domain(0.0, 100.0).range(0.0, 500.0);
        assert_eq!(scale.invert(250.0), 50.0);
    }

    #[test]
    fn test_line_x_endpoints() {
        let s = scales(10, 1200.0);
        assert_eq!(s.index_to_line_x(0), 50.0);
        assert_eq!(s.index_to_line_x(9), 740.0);
    }

    #[test]
    fn test_line_x_single_point_centers() {
        let s = scales(1, 1200.0);
        assert_eq!(s.index_to_line_x(0), (50.0 + 740.0) / 2.0);
    }

    #[test]
    fn test_value_to_y_endpoints() {
        let s = scales(10, 1200.0);
        assert_eq!(s.value_to_y(0.0), 280.0);
        assert_eq!(s.value_to_y(1200.0), 20.0);
    }

    #[test]
    fn test_value_to_y_degenerate_scale() {
        let s = scales(10, 0.0);
        assert_eq!(s.value_to_y(0.0), 280.0);
        assert_eq!(s.value_to_y(500.0), 280.0);
    }

    #[test]
    fn test_bar_slots() {
        let s = scales(10, 1200.0);
        assert!((s.slot_width() - 69.0).abs() < 1e-9);
        assert!((s.index_to_bar_x(0) - 84.5).abs() < 1e-9);
        assert!((s.bar_width() - 41.4).abs() < 1e-9);
    }

    #[test]
    fn test_pixel_x_to_logical_x() {
        let s = scales(10, 1200.0);
        // Surface rendered at half the logical width
        assert!((s.pixel_x_to_logical_x(190.0, 380.0) - 380.0).abs() < 1e-9);
        // Non-positive rendered width degrades to the origin
        assert_eq!(s.pixel_x_to_logical_x(190.0, 0.0), 0.0);
    }
}
