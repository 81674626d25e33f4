//! Chart layout — turns a rolling buffer into drawable geometry.
//!
//! The layout is computed without touching any drawing surface so it can be
//! tested natively; the dashboard only replays it onto a canvas.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::sample::{DEFAULT_CAPACITY, RollingBuffer};

/// Space reserved around the plot area, in CSS pixels.
pub const MARGIN_LEFT: f64 = 38.0;
pub const MARGIN_RIGHT: f64 = 10.0;
pub const MARGIN_TOP: f64 = 10.0;
pub const MARGIN_BOTTOM: f64 = 18.0;

/// Smallest width or height laid out, in CSS pixels.
pub const MIN_SIZE: f64 = 10.0;

/// Number of horizontal grid intervals (so `TICKS + 1` grid lines).
pub const TICKS: u32 = 4;

/// Theme variable holding the grid and label color.
pub const MUTED_VAR: &str = "--muted";
/// Theme variable holding the series color.
pub const ACCENT_VAR: &str = "--accent";

/// Fixed y-range and history length of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub y_min: f64,
    pub y_max: f64,
    pub max_points: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            y_min: 0.0,
            y_max: 2000.0,
            max_points: DEFAULT_CAPACITY,
        }
    }
}

impl ChartConfig {
    /// Check that the range is non-empty and the capacity non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidChartRange`] or [`ValidationError::ZeroCapacity`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.y_min.is_finite() && self.y_max.is_finite()) || self.y_max <= self.y_min {
            return Err(ValidationError::InvalidChartRange {
                y_min: self.y_min,
                y_max: self.y_max,
            });
        }
        if self.max_points == 0 {
            return Err(ValidationError::ZeroCapacity);
        }
        Ok(())
    }

    /// Empty buffer sized for this chart.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ZeroCapacity`] when `max_points` is zero.
    pub fn buffer(&self) -> Result<RollingBuffer, ValidationError> {
        RollingBuffer::new(self.max_points)
    }
}

/// Colors used to paint a chart, read from theme variables at draw time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPalette {
    pub grid: String,
    pub line: String,
    pub text: String,
}

impl Default for ChartPalette {
    fn default() -> Self {
        Self {
            grid: "#9aa".to_string(),
            line: "#22c55e".to_string(),
            text: "#9aa".to_string(),
        }
    }
}

impl ChartPalette {
    /// Build a palette from resolved theme variables, keeping defaults for unset ones.
    #[must_use]
    pub fn from_vars(muted: Option<&str>, accent: Option<&str>) -> Self {
        let pick = |value: Option<&str>, fallback: String| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map_or(fallback, str::to_string)
        };
        let defaults = Self::default();
        let muted_color = pick(muted, defaults.grid);
        Self {
            text: muted_color.clone(),
            grid: muted_color,
            line: pick(accent, defaults.line),
        }
    }
}

/// Displayed size of a chart surface and the backing store it needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Layout size in CSS pixels, at least [`MIN_SIZE`] each way.
    pub width: f64,
    pub height: f64,
    /// Device pixels per CSS pixel.
    pub scale: f64,
    /// Backing store size in device pixels.
    pub pixel_width: u32,
    pub pixel_height: u32,
}

impl Viewport {
    /// Viewport for a surface displayed at `width` × `height` CSS pixels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        let scale = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        let width = width.max(MIN_SIZE);
        let height = height.max(MIN_SIZE);
        Self {
            width,
            height,
            scale,
            pixel_width: (width * scale).round() as u32,
            pixel_height: (height * scale).round() as u32,
        }
    }

    /// Whether the backing store sized for `self` must be reallocated to show `next`.
    #[must_use]
    pub fn needs_realloc(&self, next: &Self) -> bool {
        self.pixel_width != next.pixel_width || self.pixel_height != next.pixel_height
    }
}

/// A point in plot-area coordinates (origin at the plot's top-left corner).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A y-axis label anchored at the left margin.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub text: String,
    pub y: f64,
}

/// Everything needed to paint one frame of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    /// Offset of the plot area inside the surface.
    pub origin: Point,
    pub inner_width: f64,
    pub inner_height: f64,
    /// Y positions of horizontal grid lines, bottom first.
    pub grid_lines: Vec<f64>,
    pub y_labels: Vec<AxisLabel>,
    /// Series polyline; empty when fewer than two samples are buffered.
    pub polyline: Vec<Point>,
}

impl ChartLayout {
    /// Lay out a `width` × `height` chart (CSS pixels) for the buffered samples.
    ///
    /// The y-axis always spans `[y_min, y_max]`; the x-axis spans exactly the
    /// timestamps in `buffer`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(width: f64, height: f64, config: &ChartConfig, buffer: &RollingBuffer) -> Self {
        let inner_width = (width - MARGIN_LEFT - MARGIN_RIGHT).max(0.0);
        let inner_height = (height - MARGIN_TOP - MARGIN_BOTTOM).max(0.0);
        let step = inner_height / f64::from(TICKS);
        let range = config.y_max - config.y_min;

        let grid_lines: Vec<f64> = (0..=TICKS)
            .map(|i| inner_height - step * f64::from(i))
            .collect();
        let y_labels = (0..=TICKS)
            .map(|i| AxisLabel {
                text: format!("{}", (config.y_min + range / f64::from(TICKS) * f64::from(i)).round()),
                y: inner_height - step * f64::from(i),
            })
            .collect();

        let polyline = match buffer.time_span() {
            Some((t_min, t_max)) if buffer.len() > 1 => {
                let span = (t_max - t_min).max(1) as f64;
                buffer
                    .iter()
                    .map(|sample| Point {
                        x: (sample.timestamp - t_min) as f64 / span * inner_width,
                        y: inner_height - (sample.value - config.y_min) / range * inner_height,
                    })
                    .collect()
            }
            _ => Vec::new(),
        };

        Self {
            width,
            height,
            origin: Point {
                x: MARGIN_LEFT,
                y: MARGIN_TOP,
            },
            inner_width,
            inner_height,
            grid_lines,
            y_labels,
            polyline,
        }
    }
}
