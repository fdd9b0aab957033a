use funcplot::app::{App, Theme};
use funcplot::config::PlotConfig;
use funcplot::input::ExpressionInput;
use funcplot::render::LoopState;
use funcplot::surface::Surface;
use funcplot::ui;
use funcplot::viewport::Point;
use ratatui::{backend::TestBackend, Terminal};

fn terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).unwrap()
}

fn screen(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut text = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn has_braille(text: &str) -> bool {
    text.chars().any(|c| ('\u{2801}'..='\u{28FF}').contains(&c))
}

fn type_expr(app: &mut App, src: &str) {
    app.clear_input();
    for c in src.chars() {
        app.input(c);
    }
}

#[test]
fn first_draw_plots_the_default_expression() {
    let mut app = App::new(PlotConfig::terminal()).unwrap();
    let mut terminal = terminal(80, 24);

    terminal.draw(|f| ui::draw(f, &mut app)).unwrap();
    let text = screen(&terminal);

    assert!(text.contains(" f(x) = 2x^2 + 1 "));
    assert!(text.contains("800 points, 0 skipped, frame 1"));
    assert!(text.contains("Enter:draw"));
    assert!(has_braille(&text));

    // 78x17 cells inside the border, 2x4 pixels each
    assert_eq!(app.mapper.width(), 156.0);
    assert_eq!(app.mapper.height(), 68.0);
    assert_eq!(app.render_loop.frames(), 1);
}

#[test]
fn malformed_expression_keeps_the_axes() {
    let mut app = App::new(PlotConfig::terminal()).unwrap();
    let mut terminal = terminal(80, 24);

    type_expr(&mut app, "2x^");
    app.submit();
    terminal.draw(|f| ui::draw(f, &mut app)).unwrap();
    let text = screen(&terminal);

    assert!(text.contains(" f(x) = ? "));
    assert!(text.contains("Error at column 3: operator is missing an operand"));
    assert!(has_braille(&text));

    let report = app.last_report.as_ref().unwrap();
    assert!(report.axes_drawn);
    assert!(!report.plotted_function());
    assert_eq!(app.surface.line_count(), 2);
    assert_eq!(app.surface.disk_count(), 0);
}

#[test]
fn submit_replaces_the_expression() {
    let mut app = App::new(PlotConfig::default()).unwrap();

    type_expr(&mut app, "  x sin(x) ");
    assert!(app.input.is_dirty());
    app.submit();

    assert_eq!(app.expr.as_ref().map(|e| e.source()), Ok("x sin(x)"));
    assert_eq!(app.status, "Plotting f(x) = x sin(x)");
    assert!(!app.input.is_dirty());
}

#[test]
fn reset_restores_the_committed_text() {
    let mut app = App::new(PlotConfig::default()).unwrap();

    type_expr(&mut app, "x^3");
    app.backspace();
    assert_eq!(app.input.buffer(), "x^");
    app.reset_input();

    assert_eq!(app.input.buffer(), "2x^2 + 1");
    assert_eq!(app.input.cursor(), 8);
    assert!(app.expr.is_ok());
}

#[test]
fn input_edits_at_the_cursor() {
    let mut app = App::new(PlotConfig::default()).unwrap();

    type_expr(&mut app, "x+1");
    app.input.cursor_home();
    app.input('2');
    app.input.cursor_end();
    app.input.cursor_left();
    app.input.delete();

    assert_eq!(app.input.buffer(), "2x+");
    assert_eq!(app.input.cursor(), 3);
}

#[test]
fn pause_freezes_the_frame_counter() {
    let mut app = App::new(PlotConfig::terminal()).unwrap();
    let mut terminal = terminal(60, 20);

    terminal.draw(|f| ui::draw(f, &mut app)).unwrap();
    app.toggle_pause();
    assert_eq!(app.loop_state(), LoopState::Stopped);
    terminal.draw(|f| ui::draw(f, &mut app)).unwrap();

    assert_eq!(app.render_loop.frames(), 1);
    assert!(screen(&terminal).contains("PAUSED"));

    app.toggle_pause();
    assert_eq!(app.loop_state(), LoopState::Rendering);
    terminal.draw(|f| ui::draw(f, &mut app)).unwrap();
    assert_eq!(app.render_loop.frames(), 2);
}

#[test]
fn paused_loop_redraws_on_resize() {
    let mut app = App::new(PlotConfig::default()).unwrap();

    app.resize_canvas(800.0, 800.0);
    assert!(app.render().is_some());
    app.toggle_pause();
    app.resize_canvas(400.0, 400.0);

    assert_eq!(app.surface.size(), (400.0, 400.0));
    assert_eq!(app.render_loop.frames(), 1);
    let at = app
        .surface
        .labels()
        .find(|(text, _, _)| *text == "| 5")
        .map(|(_, at, _)| at);
    assert_eq!(at, Some(Point::new(250.0, 200.0)));
}

#[test]
fn theme_and_help() {
    let mut app = App::new(PlotConfig::default()).unwrap();

    assert_eq!(app.theme, Theme::GruvboxDark);
    app.cycle_theme();
    assert_eq!(app.theme, Theme::GruvboxLight);
    assert_eq!(app.status, "Theme: Gruvbox Light");

    app.show_help();
    assert!(app.status.contains("sin"));
    assert!(app.status.contains("pi"));
}

#[test]
fn frame_state_reads_current_values() {
    let mut app = App::new(PlotConfig::default()).unwrap();
    app.resize_canvas(200.0, 100.0);

    let state = app.frame_state();
    assert_eq!(state.mapper.width(), 200.0);
    assert!(state.expr.is_ok());
}

#[test]
fn invalid_config_is_rejected() {
    let config = PlotConfig {
        point_radius: -1.0,
        ..PlotConfig::default()
    };
    assert!(App::new(config).is_err());
}

#[test]
fn disks_rasterize_to_dots() {
    let mut dots = Vec::new();
    ui::rasterize_disk(10.0, 10.0, 1.0, |x, y| dots.push((x, y)));
    dots.sort_by(|a, b| a.partial_cmp(b).unwrap());

    assert_eq!(
        dots,
        vec![(9.0, 10.0), (10.0, 9.0), (10.0, 10.0), (10.0, 11.0), (11.0, 10.0)]
    );

    let mut count = 0;
    ui::rasterize_disk(0.0, 0.0, 0.0, |_, _| count += 1);
    assert_eq!(count, 1);
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut app = App::new(PlotConfig::terminal()).unwrap();
    let mut terminal = terminal(10, 6);

    terminal.draw(|f| ui::draw(f, &mut app)).unwrap();
}

#[test]
fn cursor_stays_inside_a_very_long_input() {
    let mut app = App::new(PlotConfig::terminal()).unwrap();
    let mut terminal = terminal(80, 24);
    // prompt plus text is just past u16::MAX columns
    app.input = ExpressionInput::new(&"x".repeat(usize::from(u16::MAX)));

    terminal.draw(|f| ui::draw(f, &mut app)).unwrap();
    let cursor = terminal.get_cursor_position().unwrap();

    // last column inside the input block's border
    assert_eq!((cursor.x, cursor.y), (78, 20));
}
