//! Drawing surface abstraction.
//!
//! [`Surface`] is the small set of raster-canvas primitives the renderer
//! needs: styles, paths, arcs, text and clearing. [`DisplayList`] records the
//! calls so a frame can be inspected or replayed onto a terminal canvas.

use crate::viewport::Point;

/// What to paint with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Paint {
    /// Foreground color of the active theme.
    #[default]
    Ink,
    /// Background color of the active theme.
    Background,
}

/// Text size for labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Font {
    /// Tick labels.
    #[default]
    Small,
    /// Axis names.
    Big,
}

/// A 2D raster canvas in pixel coordinates, origin at the top left.
pub trait Surface {
    /// Canvas size in pixels as `(width, height)`.
    fn size(&self) -> (f64, f64);

    /// Set the paint used by [`Surface::fill`] and [`Surface::fill_text`].
    fn set_fill_style(&mut self, paint: Paint);

    /// Set the paint used by [`Surface::stroke`].
    fn set_stroke_style(&mut self, paint: Paint);

    /// Set the font used by [`Surface::fill_text`].
    fn set_font(&mut self, font: Font);

    /// Start a new path, discarding the current one.
    fn begin_path(&mut self);

    /// Move the pen without drawing.
    fn move_to(&mut self, x: f64, y: f64);

    /// Add a straight segment from the pen to `(x, y)`.
    fn line_to(&mut self, x: f64, y: f64);

    /// Add a circular arc around `(cx, cy)` between two angles in radians.
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64);

    /// Outline the current path.
    fn stroke(&mut self);

    /// Fill the current path.
    fn fill(&mut self);

    /// Draw `text` with its baseline origin at `(x, y)`.
    fn fill_text(&mut self, text: &str, x: f64, y: f64);

    /// Clear a rectangle to the background.
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
}

/// One recorded, fully resolved drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Rectangle cleared to background.
    Clear {
        /// Top left corner.
        origin: Point,
        /// Width in pixels.
        w: f64,
        /// Height in pixels.
        h: f64,
    },
    /// Stroked line segment.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke paint.
        paint: Paint,
    },
    /// Filled disk.
    Disk {
        /// Center.
        center: Point,
        /// Radius in pixels.
        radius: f64,
        /// Fill paint.
        paint: Paint,
    },
    /// Text label.
    Text {
        /// Label contents.
        text: String,
        /// Baseline origin.
        at: Point,
        /// Font size.
        font: Font,
        /// Fill paint.
        paint: Paint,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PathSeg {
    Move(Point),
    Line(Point),
    Arc { center: Point, radius: f64 },
}

/// A [`Surface`] that records resolved commands instead of rasterizing.
///
/// Paths are resolved when stroked or filled: stroking emits one
/// [`DrawCommand::Line`] per segment, filling emits one
/// [`DrawCommand::Disk`] per arc.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    width: f64,
    height: f64,
    fill: Paint,
    stroke: Paint,
    font: Font,
    path: Vec<PathSeg>,
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    /// Create an empty list for a canvas of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Change the canvas size. Recorded commands are kept.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Recorded commands in order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop everything recorded so far.
    pub fn reset(&mut self) {
        self.commands.clear();
        self.path.clear();
    }

    /// Number of stroked line segments.
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    /// Number of filled disks.
    pub fn disk_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Disk { .. }))
            .count()
    }

    /// All text labels with their positions.
    pub fn labels(&self) -> impl Iterator<Item = (&str, Point, Font)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, at, font, .. } => Some((text.as_str(), *at, *font)),
            _ => None,
        })
    }

    fn pen(&self) -> Option<Point> {
        self.path.iter().rev().find_map(|seg| match seg {
            PathSeg::Move(p) | PathSeg::Line(p) => Some(*p),
            PathSeg::Arc { .. } => None,
        })
    }
}

impl Surface for DisplayList {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn set_fill_style(&mut self, paint: Paint) {
        self.fill = paint;
    }

    fn set_stroke_style(&mut self, paint: Paint) {
        self.stroke = paint;
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.push(PathSeg::Move(Point::new(x, y)));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let to = Point::new(x, y);
        if self.pen().is_some() {
            self.path.push(PathSeg::Line(to));
        } else {
            // a line with no current point just sets it
            self.path.push(PathSeg::Move(to));
        }
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, _start: f64, _end: f64) {
        self.path.push(PathSeg::Arc {
            center: Point::new(cx, cy),
            radius,
        });
    }

    fn stroke(&mut self) {
        let mut pen: Option<Point> = None;
        for seg in &self.path {
            match *seg {
                PathSeg::Move(p) => pen = Some(p),
                PathSeg::Line(to) => {
                    if let Some(from) = pen {
                        self.commands.push(DrawCommand::Line {
                            from,
                            to,
                            paint: self.stroke,
                        });
                    }
                    pen = Some(to);
                }
                PathSeg::Arc { .. } => pen = None,
            }
        }
    }

    fn fill(&mut self) {
        for seg in &self.path {
            if let PathSeg::Arc { center, radius } = *seg {
                self.commands.push(DrawCommand::Disk {
                    center,
                    radius,
                    paint: self.fill,
                });
            }
        }
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at: Point::new(x, y),
            font: self.font,
            paint: self.fill,
        });
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        // a full clear makes everything before it invisible
        if x <= 0.0 && y <= 0.0 && w >= self.width && h >= self.height {
            self.commands.clear();
        }
        self.commands.push(DrawCommand::Clear {
            origin: Point::new(x, y),
            w,
            h,
        });
    }
}
