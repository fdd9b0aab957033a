//! Axis lines, tick labels and axis names.

use crate::config::LabelOffsets;
use crate::surface::{Font, Paint, Surface};
use crate::viewport::{Mapper, Viewport};

/// A labeled integer position on an axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    /// Logical position.
    pub value: i64,
    /// Text drawn at the tick.
    pub label: String,
}

/// Tick layout derived once from the viewport.
///
/// Tick values and label strings never change at runtime, so they are built
/// here once; [`AxisLayout::draw`] only maps them to pixels for the current
/// canvas size.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLayout {
    x_ticks: Vec<Tick>,
    y_ticks: Vec<Tick>,
    offsets: LabelOffsets,
}

impl AxisLayout {
    /// Domain axis name.
    pub const X_NAME: &'static str = "x";
    /// Range axis name.
    pub const Y_NAME: &'static str = "y";

    /// Build the layout for `viewport`.
    pub fn new(viewport: &Viewport, offsets: LabelOffsets) -> Self {
        Self {
            x_ticks: viewport
                .x_ticks()
                .map(|value| Tick {
                    value,
                    label: format!("| {}", value),
                })
                .collect(),
            y_ticks: viewport
                .y_ticks()
                .map(|value| Tick {
                    value,
                    label: format!("- {}", value),
                })
                .collect(),
            offsets,
        }
    }

    /// Domain axis ticks, left to right.
    pub fn x_ticks(&self) -> &[Tick] {
        &self.x_ticks
    }

    /// Range axis ticks, bottom to top.
    pub fn y_ticks(&self) -> &[Tick] {
        &self.y_ticks
    }

    /// Draw both axes with their labels.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, mapper: &Mapper) {
        let (width, height) = (mapper.width(), mapper.height());
        let (center_x, center_y) = (width / 2.0, height / 2.0);

        surface.set_stroke_style(Paint::Ink);
        surface.set_fill_style(Paint::Ink);
        surface.set_font(Font::Small);

        // y axis
        surface.begin_path();
        surface.move_to(center_x, 0.0);
        surface.line_to(center_x, height);
        surface.stroke();

        let last_x = self.x_ticks.last().map(|t| t.value);
        for tick in &self.x_ticks {
            let px = mapper.to_pixel_x(tick.value as f64);
            surface.fill_text(&tick.label, px, center_y);

            if Some(tick.value) == last_x {
                surface.set_font(Font::Big);
                surface.fill_text(
                    Self::X_NAME,
                    px + self.offsets.x_name.x,
                    center_y + self.offsets.x_name.y,
                );
                surface.set_font(Font::Small);
            }
        }

        let last_y = self.y_ticks.last().map(|t| t.value);
        for tick in &self.y_ticks {
            let py = mapper.to_pixel_y(tick.value as f64);
            surface.fill_text(&tick.label, center_x - 1.0, py);

            if Some(tick.value) == last_y {
                surface.set_font(Font::Big);
                surface.fill_text(
                    Self::Y_NAME,
                    center_x + self.offsets.y_name.x,
                    py + self.offsets.y_name.y,
                );
                surface.set_font(Font::Small);
            }
        }

        // x axis
        surface.begin_path();
        surface.move_to(0.0, center_y);
        surface.line_to(width, center_y);
        surface.stroke();
    }
}
