//! Status bar UI component.

use crate::app::App;
use crate::render::LoopState;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar.
///
/// Shows the last status message, followed by frame statistics while the
/// committed expression plots.
pub(crate) fn draw_status(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let mut text = app.status.clone();
    if let Some(frame) = app.frame_status() {
        text = format!("{}  |  {}", text, frame);
    }

    let fg = if app.expr.is_err() {
        colors.error
    } else if app.loop_state() == LoopState::Stopped {
        colors.warning
    } else {
        colors.status_fg
    };

    let paragraph = Paragraph::new(text).style(Style::default().fg(fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
