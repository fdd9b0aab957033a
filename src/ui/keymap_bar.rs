//! Keymap help bar UI component.

use crate::render::LoopState;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(crate) fn draw_keymap(f: &mut Frame<'_>, area: Rect, loop_state: LoopState, colors: &ThemeColors) {
    let keymap_text = if loop_state == LoopState::Stopped {
        "PAUSED | ^P:resume | Enter:draw | Esc:reset | ^T:theme | F1:help | ^C:quit"
    } else {
        "Enter:draw | Esc:reset | ^U:clear | ^P:pause | ^T:theme | F1:help | ^C:quit"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.keymap_bg));

    f.render_widget(paragraph, area);
}
