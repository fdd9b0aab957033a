//! Plot area: replays the last frame onto a braille canvas.

use crate::app::App;
use crate::surface::{DisplayList, DrawCommand, Font, Surface};
use crate::ui::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine, Points},
        Block, Borders,
    },
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Braille dots per terminal cell, horizontally.
pub const DOTS_PER_COL: u16 = 2;
/// Braille dots per terminal cell, vertically.
pub const DOTS_PER_ROW: u16 = 4;

/// Block that frames the plot; its inner area is the canvas.
pub(crate) fn plot_block<'a>(app: &App, colors: &ThemeColors) -> Block<'a> {
    let title = match &app.expr {
        Ok(e) => format!(" f(x) = {} ", e),
        Err(_) => " f(x) = ? ".to_string(),
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg))
}

/// Canvas size in pixels for a cell area.
pub fn canvas_pixels(area: Rect) -> (f64, f64) {
    (
        f64::from(area.width) * f64::from(DOTS_PER_COL),
        f64::from(area.height) * f64::from(DOTS_PER_ROW),
    )
}

/// Draw the plot. `area` is the whole block, including borders.
pub(crate) fn draw_plot(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let block = plot_block(app, colors);
    let inner = block.inner(area);
    let list = &app.surface;
    let (width, height) = list.size();

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .background_color(colors.bg)
        .x_bounds([0.0, width.max(1.0)])
        .y_bounds([0.0, height.max(1.0)])
        .paint(|ctx| replay(ctx, list, inner, height, colors));

    f.render_widget(canvas, area);
}

/// Replay recorded commands. Pixel rows grow downward; canvas y grows upward.
fn replay(
    ctx: &mut Context<'_>,
    list: &DisplayList,
    inner: Rect,
    height: f64,
    colors: &ThemeColors,
) {
    let flip = |y: f64| height - y;
    let mut disks: Vec<(f64, f64)> = Vec::new();
    let mut taken = LabelCells::new(inner, list.size());

    for cmd in list.commands() {
        match cmd {
            DrawCommand::Clear { .. } => {}
            DrawCommand::Line { from, to, paint } => {
                ctx.draw(&CanvasLine {
                    x1: from.x,
                    y1: flip(from.y),
                    x2: to.x,
                    y2: flip(to.y),
                    color: colors.paint(*paint),
                });
            }
            DrawCommand::Disk { center, radius, .. } => {
                rasterize_disk(center.x, center.y, *radius, |x, y| disks.push((x, flip(y))));
            }
            DrawCommand::Text {
                text,
                at,
                font,
                paint,
            } => {
                if !taken.claim(at.x, at.y, text) {
                    continue;
                }
                let style = match font {
                    Font::Small => Style::default().fg(colors.paint(*paint)),
                    Font::Big => Style::default()
                        .fg(colors.heading)
                        .add_modifier(Modifier::BOLD),
                };
                ctx.print(at.x, flip(at.y), Line::from(Span::styled(text.clone(), style)));
            }
        }
    }

    ctx.draw(&Points {
        coords: &disks,
        color: colors.point,
    });
}

/// Every dot within `radius` of the center, plus the center itself.
pub fn rasterize_disk(cx: f64, cy: f64, radius: f64, mut put: impl FnMut(f64, f64)) {
    put(cx, cy);
    let r = radius.floor() as i64;
    let r2 = radius * radius;
    for dy in -r..=r {
        for dx in -r..=r {
            if (dx, dy) == (0, 0) {
                continue;
            }
            let (fx, fy) = (dx as f64, dy as f64);
            if fx * fx + fy * fy <= r2 {
                put(cx + fx, cy + fy);
            }
        }
    }
}

/// Tracks which terminal cells already hold label text, so crowded tick
/// labels are thinned instead of overprinting each other.
#[derive(Debug)]
struct LabelCells {
    cols: u16,
    rows: u16,
    width: f64,
    height: f64,
    spans: Vec<(u16, u16, u16)>,
}

impl LabelCells {
    fn new(area: Rect, (width, height): (f64, f64)) -> Self {
        Self {
            cols: area.width,
            rows: area.height,
            width,
            height,
            spans: Vec::new(),
        }
    }

    /// Reserve the cells `text` would cover at pixel `(x, y)`. Returns false
    /// if it is off canvas or overlaps an earlier label.
    fn claim(&mut self, x: f64, y: f64, text: &str) -> bool {
        let on_canvas = (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y);
        if self.cols == 0 || self.rows == 0 || !on_canvas {
            return false;
        }
        let col = (x * f64::from(self.cols.saturating_sub(1)) / self.width.max(1.0)) as u16;
        let row = (y * f64::from(self.rows.saturating_sub(1)) / self.height.max(1.0)) as u16;
        let end = col.saturating_add(text.width() as u16);

        let overlaps = self
            .spans
            .iter()
            .any(|&(r, start, stop)| r == row && col < stop && start < end);
        if overlaps {
            return false;
        }
        self.spans.push((row, col, end));
        true
    }
}
