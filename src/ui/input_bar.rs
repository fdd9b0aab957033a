//! Expression input line.

use crate::app::App;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const PROMPT: &str = "f(x) = ";

/// Draw the input line and place the terminal cursor in it.
pub(crate) fn draw_input(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let title = if app.input.is_dirty() {
        " Expression (Enter to draw) "
    } else {
        " Expression "
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));
    let inner = block.inner(area);

    let line = Line::from(vec![
        Span::styled(
            PROMPT,
            Style::default()
                .fg(colors.label)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(app.input.buffer(), Style::default().fg(colors.text)),
    ]);

    f.render_widget(Paragraph::new(line).block(block), area);

    let before_cursor: String = app.input.buffer().chars().take(app.input.cursor()).collect();
    let offset = u16::try_from(PROMPT.width() + before_cursor.width()).unwrap_or(u16::MAX);
    if inner.width > 0 && inner.height > 0 {
        f.set_cursor_position(Position::new(
            inner.x + offset.min(inner.width - 1),
            inner.y,
        ));
    }
}
