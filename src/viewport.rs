//! Logical viewport and logical-to-pixel coordinate mapping.

use crate::error::{PlotError, Result};

/// A point in either logical or pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The fixed logical window, symmetric around the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    half_width: f64,
    half_height: f64,
}

impl Viewport {
    /// Default half extent on both axes.
    pub const DEFAULT_HALF_EXTENT: f64 = 20.0;
    /// Largest accepted half extent. Every integer in the window gets a
    /// tick label, so this bounds the axis layout.
    pub const MAX_HALF_EXTENT: f64 = 10_000.0;

    /// Create a viewport spanning `[-half_width, half_width]` by
    /// `[-half_height, half_height]`.
    pub fn new(half_width: f64, half_height: f64) -> Result<Self> {
        for (field, value) in [("half_width", half_width), ("half_height", half_height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlotError::config(
                    field,
                    format!("must be a positive number, got {}", value),
                ));
            }
            if value > Self::MAX_HALF_EXTENT {
                return Err(PlotError::config(
                    field,
                    format!("must be at most {}, got {}", Self::MAX_HALF_EXTENT, value),
                ));
            }
        }
        Ok(Self {
            half_width,
            half_height,
        })
    }

    /// Half of the domain extent.
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    /// Half of the range extent.
    pub fn half_height(&self) -> f64 {
        self.half_height
    }

    /// Integer positions along the domain axis, inclusive of both ends.
    pub fn x_ticks(&self) -> impl Iterator<Item = i64> {
        integer_ticks(self.half_width)
    }

    /// Integer positions along the range axis, inclusive of both ends.
    pub fn y_ticks(&self) -> impl Iterator<Item = i64> {
        integer_ticks(self.half_height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            half_width: Self::DEFAULT_HALF_EXTENT,
            half_height: Self::DEFAULT_HALF_EXTENT,
        }
    }
}

fn integer_ticks(half: f64) -> impl Iterator<Item = i64> {
    let max = half.floor() as i64;
    -max..=max
}

/// Pixels per logical unit on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScaleFactors {
    /// Horizontal pixels per unit.
    pub x: f64,
    /// Vertical pixels per unit.
    pub y: f64,
}

/// Converts between viewport coordinates and canvas pixels.
///
/// Pixel rows grow downward, so the range axis is inverted. Scale factors
/// are derived from the canvas size and must be refreshed through
/// [`Mapper::resize`] whenever the canvas changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Mapper {
    viewport: Viewport,
    width: f64,
    height: f64,
    scale: ScaleFactors,
}

impl Mapper {
    /// Create a mapper for a canvas of `width` x `height` pixels.
    pub fn new(viewport: Viewport, width: f64, height: f64) -> Self {
        let mut mapper = Self {
            viewport,
            width: 0.0,
            height: 0.0,
            scale: ScaleFactors::default(),
        };
        mapper.resize(width, height);
        mapper
    }

    /// Recompute scale factors for a new canvas size.
    ///
    /// Returns `true` if the size differs from the previous one. Negative or
    /// non-finite sizes are treated as zero.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        let width = sanitize_extent(width);
        let height = sanitize_extent(height);
        let changed = width != self.width || height != self.height;

        self.width = width;
        self.height = height;
        self.scale = ScaleFactors {
            x: width / (self.viewport.half_width * 2.0),
            y: height / (self.viewport.half_height * 2.0),
        };

        changed
    }

    /// The viewport being mapped.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Current scale factors.
    pub fn scale(&self) -> ScaleFactors {
        self.scale
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Domain value to pixel column.
    pub fn to_pixel_x(&self, x: f64) -> f64 {
        (x + self.viewport.half_width) * self.scale.x
    }

    /// Range value to pixel row.
    pub fn to_pixel_y(&self, y: f64) -> f64 {
        (self.viewport.half_height - y) * self.scale.y
    }

    /// Logical point to pixel point.
    pub fn to_pixel(&self, p: Point) -> Point {
        Point::new(self.to_pixel_x(p.x), self.to_pixel_y(p.y))
    }

    /// Pixel column to domain value. Zero scale maps everything to 0.
    pub fn from_pixel_x(&self, px: f64) -> f64 {
        if self.scale.x == 0.0 {
            return 0.0;
        }
        px / self.scale.x - self.viewport.half_width
    }

    /// Pixel row to range value. Zero scale maps everything to 0.
    pub fn from_pixel_y(&self, py: f64) -> f64 {
        if self.scale.y == 0.0 {
            return 0.0;
        }
        self.viewport.half_height - py / self.scale.y
    }

    /// Pixel point to logical point.
    pub fn from_pixel(&self, p: Point) -> Point {
        Point::new(self.from_pixel_x(p.x), self.from_pixel_y(p.y))
    }
}

fn sanitize_extent(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}
