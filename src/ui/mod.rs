//! User interface rendering.

mod input_bar;
mod keymap_bar;
mod plot_view;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use plot_view::{canvas_pixels, rasterize_disk, DOTS_PER_COL, DOTS_PER_ROW};
pub use theme::ThemeColors;

/// Draw the UI.
///
/// Measures the plot area first so the mapper is resized before the frame
/// is rendered; a resize never draws with stale scale factors.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Plot, input line, status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let inner = plot_view::plot_block(app, &colors).inner(chunks[0]);
    let (width, height) = canvas_pixels(inner);
    app.resize_canvas(width, height);
    app.render();

    plot_view::draw_plot(f, chunks[0], app, &colors);
    input_bar::draw_input(f, chunks[1], app, &colors);
    status_bar::draw_status(f, chunks[2], app, &colors);
    keymap_bar::draw_keymap(f, chunks[3], app.loop_state(), &colors);
}
