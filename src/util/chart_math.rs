//! Chart layout geometry.
//!
//! Converts summary data into positioned marks inside a fixed SVG view box;
//! the chart components turn the marks into markup. Everything here is pure
//! so layout is testable without a browser.

#[cfg(test)]
#[path = "chart_math_test.rs"]
mod chart_math_test;

use crate::util::palette::bar_fill;

/// SVG view-box size shared by both charts; rendering scales responsively.
pub const VIEW_WIDTH: f64 = 480.0;
pub const VIEW_HEIGHT: f64 = 300.0;

// Margins around the data region, sized for the title and axis labels.
const MARGIN_LEFT: f64 = 52.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 34.0;
const MARGIN_BOTTOM: f64 = 48.0;

/// Scatter point radius.
pub const POINT_RADIUS: f64 = 5.0;

/// Gridline intervals on value axes.
pub const AXIS_INTERVALS: usize = 4;

/// The data region inside the view box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            width: VIEW_WIDTH - MARGIN_LEFT - MARGIN_RIGHT,
            height: VIEW_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM,
        }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Map a 0..1 fraction to an x coordinate, left to right.
    #[must_use]
    pub fn x_at(&self, fraction: f64) -> f64 {
        self.left + fraction * self.width
    }

    /// Map a 0..1 fraction to a y coordinate, bottom to top.
    #[must_use]
    pub fn y_at(&self, fraction: f64) -> f64 {
        self.bottom() - fraction * self.height
    }
}

/// A positioned bar with its category label and count.
#[derive(Clone, Debug, PartialEq)]
pub struct BarMark {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
    pub count: i64,
    pub fill: &'static str,
}

/// Integer count axis: the smallest whole step covering `max_count` in
/// [`AXIS_INTERVALS`] intervals. Returns `(axis_max, step)`.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn count_axis(max_count: i64) -> (i64, i64) {
    let intervals = AXIS_INTERVALS as i64;
    let step = (max_count.max(1) as u64).div_ceil(intervals as u64) as i64;
    (step * intervals, step)
}

/// Lay out the distribution bars across the plot area in delivered order.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn bar_marks(distribution: &[(String, i64)], area: PlotArea) -> Vec<BarMark> {
    if distribution.is_empty() {
        return Vec::new();
    }
    let max_count = distribution.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let (axis_max, _) = count_axis(max_count);
    let slot = area.width / distribution.len() as f64;
    distribution
        .iter()
        .enumerate()
        .map(|(index, (label, count))| {
            let height = area.height * ((*count).max(0) as f64 / axis_max as f64);
            BarMark {
                x: area.left + index as f64 * slot + slot * 0.2,
                y: area.bottom() - height,
                width: slot * 0.6,
                height,
                label: label.clone(),
                count: *count,
                fill: bar_fill(index),
            }
        })
        .collect()
}

/// Padded range for a value axis; degenerate inputs widen to a unit span so
/// points never land on the plot border.
#[must_use]
pub fn padded_range(values: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values {
        if value.is_finite() {
            min = min.min(*value);
            max = max.max(*value);
        }
    }
    if min > max {
        return (0.0, 1.0);
    }
    if (max - min).abs() < f64::EPSILON {
        return (min - 1.0, max + 1.0);
    }
    let pad = (max - min) * 0.08;
    (min - pad, max + pad)
}

/// Evenly spaced tick values from `min` to `max` inclusive.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn linear_ticks(min: f64, max: f64) -> Vec<f64> {
    (0..=AXIS_INTERVALS)
        .map(|i| min + (max - min) * (i as f64 / AXIS_INTERVALS as f64))
        .collect()
}

/// Normalize `value` into 0..1 within `[min, max]`, clamped.
#[must_use]
pub fn fraction(value: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return 0.5;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}
