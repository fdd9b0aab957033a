//! Function sampling and point plotting.

use std::f64::consts::TAU;

use crate::error::{PlotError, Result};
use crate::expr::{CompiledExpr, EvalError};
use crate::surface::{Paint, Surface};
use crate::viewport::{Mapper, Point, Viewport};

/// Tolerance that keeps an exact multiple of the step from gaining a sample
/// to rounding, e.g. `40.0 / 0.05`.
const COUNT_EPSILON: f64 = 1e-9;

/// Sampling density and point size.
///
/// A frame evaluates at most [`Sampler::MAX_SAMPLES`] points, each painted
/// with a radius of at most [`Sampler::MAX_POINT_RADIUS`] pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampler {
    step: f64,
    point_radius: f64,
}

impl Sampler {
    /// Largest number of samples a frame may take.
    pub const MAX_SAMPLES: usize = 1_000_000;
    /// Largest point radius in pixels.
    pub const MAX_POINT_RADIUS: f64 = 64.0;

    /// Create a sampler. `step` must be positive and `point_radius` must not
    /// be negative.
    pub fn new(step: f64, point_radius: f64) -> Result<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(PlotError::config(
                "step",
                format!("must be a positive number, got {}", step),
            ));
        }
        if !point_radius.is_finite() || point_radius < 0.0 {
            return Err(PlotError::config(
                "point_radius",
                format!("must be zero or positive, got {}", point_radius),
            ));
        }
        if point_radius > Self::MAX_POINT_RADIUS {
            return Err(PlotError::config(
                "point_radius",
                format!(
                    "must be at most {}, got {}",
                    Self::MAX_POINT_RADIUS,
                    point_radius
                ),
            ));
        }
        Ok(Self { step, point_radius })
    }

    /// Distance between samples.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Radius of plotted points in pixels.
    pub fn point_radius(&self) -> f64 {
        self.point_radius
    }

    /// Number of samples across the viewport's domain.
    ///
    /// The domain is sampled as the half-open interval
    /// `[-half_width, half_width)`, so `[-20, 20)` at `0.05` gives 800.
    pub fn sample_count(&self, viewport: &Viewport) -> usize {
        let span = viewport.half_width() * 2.0;
        (span / self.step - COUNT_EPSILON).ceil().max(0.0) as usize
    }

    /// Reject a step too fine for `viewport`'s domain.
    pub fn check_density(&self, viewport: &Viewport) -> Result<()> {
        let count = self.sample_count(viewport);
        if count > Self::MAX_SAMPLES {
            return Err(PlotError::config(
                "step",
                format!(
                    "{} gives {} samples per frame, at most {} are allowed",
                    self.step,
                    count,
                    Self::MAX_SAMPLES
                ),
            ));
        }
        Ok(())
    }

    /// Sample positions across the viewport's domain, never more than
    /// [`Sampler::MAX_SAMPLES`].
    pub fn samples(&self, viewport: &Viewport) -> Samples {
        Samples {
            start: -viewport.half_width(),
            step: self.step,
            index: 0,
            count: self.sample_count(viewport).min(Self::MAX_SAMPLES),
        }
    }

    /// Evaluate `expr` at every sample and paint each result as a disk.
    ///
    /// Samples that fail to evaluate are skipped; the rest of the frame is
    /// unaffected.
    pub fn plot<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        mapper: &Mapper,
        expr: &CompiledExpr,
    ) -> PlotStats {
        let mut stats = PlotStats::default();
        let mut stack = Vec::with_capacity(expr.program().len());

        surface.set_fill_style(Paint::Ink);
        for x in self.samples(mapper.viewport()) {
            match expr.eval_with(x, &mut stack) {
                Ok(y) => {
                    let p = mapper.to_pixel(Point::new(x, y));
                    surface.begin_path();
                    surface.arc(p.x, p.y, self.point_radius, 0.0, TAU);
                    surface.fill();
                    stats.plotted += 1;
                }
                Err(err) => {
                    stats.skipped += 1;
                    stats.first_error.get_or_insert(err);
                }
            }
        }

        stats
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self {
            step: 0.05,
            point_radius: 1.0,
        }
    }
}

/// Iterator over sample positions, computed by index rather than by
/// accumulating the step.
#[derive(Debug, Clone)]
pub struct Samples {
    start: f64,
    step: f64,
    index: usize,
    count: usize,
}

impl Iterator for Samples {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.count {
            return None;
        }
        let x = self.start + self.index as f64 * self.step;
        self.index += 1;
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.index;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Samples {}

/// Outcome of plotting one function.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotStats {
    /// Samples painted.
    pub plotted: usize,
    /// Samples that failed to evaluate.
    pub skipped: usize,
    /// The first evaluation failure, if any.
    pub first_error: Option<EvalError>,
}
