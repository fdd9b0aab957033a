//! Plot configuration.

use std::time::Duration;

use crate::error::{PlotError, Result};
use crate::render::Sampler;
use crate::viewport::{Point, Viewport};

/// Pixel offsets of the axis names from the outermost tick labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelOffsets {
    /// Offset of "x" from the last domain tick label.
    pub x_name: Point,
    /// Offset of "y" from the axis center at the last range tick.
    pub y_name: Point,
}

impl Default for LabelOffsets {
    fn default() -> Self {
        Self {
            x_name: Point::new(-20.0, 35.0),
            y_name: Point::new(-35.0, 20.0),
        }
    }
}

impl LabelOffsets {
    /// Offsets sized for braille cells (2x4 pixels per character).
    pub fn braille() -> Self {
        Self {
            x_name: Point::new(-4.0, 8.0),
            y_name: Point::new(-8.0, 4.0),
        }
    }
}

/// Everything that tunes a plot.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// Logical window.
    pub viewport: Viewport,
    /// Distance between function samples, in logical units.
    pub sample_step: f64,
    /// Radius of each plotted point, in pixels.
    pub point_radius: f64,
    /// Placement of the axis names.
    pub label_offsets: LabelOffsets,
    /// Expression shown before the user types anything.
    pub initial_expression: String,
    /// Target time between frames.
    pub frame_interval: Duration,
}

impl PlotConfig {
    /// Default sample step.
    pub const DEFAULT_STEP: f64 = 0.05;
    /// Default point radius.
    pub const DEFAULT_POINT_RADIUS: f64 = 1.0;
    /// Default expression.
    pub const DEFAULT_EXPRESSION: &'static str = "2x^2 + 1";
    /// Default frame rate.
    pub const DEFAULT_FPS: u32 = 60;

    /// Defaults adjusted for a terminal canvas.
    pub fn terminal() -> Self {
        Self {
            label_offsets: LabelOffsets::braille(),
            ..Self::default()
        }
    }

    /// Frame interval for a target frame rate.
    pub fn interval_for_fps(fps: u32) -> Result<Duration> {
        if fps == 0 {
            return Err(PlotError::config("fps", "must be at least 1"));
        }
        Ok(Duration::from_secs(1) / fps)
    }

    /// Sampler built from the step and point radius.
    pub fn sampler(&self) -> Result<Sampler> {
        Sampler::new(self.sample_step, self.point_radius)
    }

    /// Check values that cannot be rejected by their types alone.
    pub fn validate(&self) -> Result<()> {
        self.sampler()?.check_density(&self.viewport)?;
        if self.frame_interval.is_zero() {
            return Err(PlotError::config("frame_interval", "must be non-zero"));
        }
        Ok(())
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            sample_step: Self::DEFAULT_STEP,
            point_radius: Self::DEFAULT_POINT_RADIUS,
            label_offsets: LabelOffsets::default(),
            initial_expression: Self::DEFAULT_EXPRESSION.to_string(),
            frame_interval: Duration::from_millis(16),
        }
    }
}
