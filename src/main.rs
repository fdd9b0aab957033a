//! funcplot - A terminal function plotter.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use funcplot::{app::App, config::PlotConfig, headless, ui, viewport::Viewport};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "funcplot")]
#[command(about = "A terminal function plotter", long_about = None)]
struct Args {
    /// Expression to plot, in terms of x
    #[arg(short, long, default_value = PlotConfig::DEFAULT_EXPRESSION)]
    expr: String,

    /// Half of the visible domain, in units
    #[arg(long, default_value_t = Viewport::DEFAULT_HALF_EXTENT, allow_negative_numbers = true)]
    half_width: f64,

    /// Half of the visible range, in units
    #[arg(long, default_value_t = Viewport::DEFAULT_HALF_EXTENT, allow_negative_numbers = true)]
    half_height: f64,

    /// Distance between samples, in units
    #[arg(long, default_value_t = PlotConfig::DEFAULT_STEP, allow_negative_numbers = true)]
    step: f64,

    /// Radius of each plotted point, in pixels
    #[arg(long, default_value_t = PlotConfig::DEFAULT_POINT_RADIUS)]
    point_radius: f64,

    /// Target frames per second
    #[arg(long, default_value_t = PlotConfig::DEFAULT_FPS)]
    fps: u32,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Render into memory and print one report line per frame
    #[arg(long)]
    headless: bool,

    /// Canvas size in pixels for headless mode
    #[arg(long, default_value = "800x800", value_parser = headless::parse_size)]
    size: (f64, f64),

    /// Number of frames to render in headless mode
    #[arg(long, default_value_t = 1)]
    frames: usize,
}

impl Args {
    fn plot_config(&self) -> funcplot::Result<PlotConfig> {
        let base = if self.headless {
            PlotConfig::default()
        } else {
            PlotConfig::terminal()
        };
        let config = PlotConfig {
            viewport: Viewport::new(self.half_width, self.half_height)?,
            sample_step: self.step,
            point_radius: self.point_radius,
            initial_expression: self.expr.clone(),
            frame_interval: PlotConfig::interval_for_fps(self.fps)?,
            ..base
        };
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = File::create(log_path)?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting funcplot");
    }

    let config = args.plot_config()?;

    if args.headless {
        let (width, height) = args.size;
        let mut stdout = io::stdout().lock();
        headless::run(config, width, height, args.frames, &mut stdout)?;
        tracing::info!("funcplot exited");
        return Ok(());
    }

    let app = App::new(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    tracing::info!("funcplot exited");

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if !event::poll(app.frame_interval())? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::CONTROL, KeyCode::Char('c'))
                    | (KeyModifiers::CONTROL, KeyCode::Char('q')) => return Ok(()),

                    // Commit / reset
                    (_, KeyCode::Enter) => app.submit(),
                    (_, KeyCode::Esc) => app.reset_input(),

                    // Editing
                    (_, KeyCode::Backspace) => app.backspace(),
                    (_, KeyCode::Delete) => app.input.delete(),
                    (_, KeyCode::Left) => app.input.cursor_left(),
                    (_, KeyCode::Right) => app.input.cursor_right(),
                    (_, KeyCode::Home) => app.input.cursor_home(),
                    (_, KeyCode::End) => app.input.cursor_end(),
                    (KeyModifiers::CONTROL, KeyCode::Char('u')) => app.clear_input(),

                    // Features
                    (KeyModifiers::CONTROL, KeyCode::Char('p')) => app.toggle_pause(),
                    (KeyModifiers::CONTROL, KeyCode::Char('t')) | (_, KeyCode::F(2)) => {
                        app.cycle_theme()
                    }
                    (_, KeyCode::F(1)) => app.show_help(),

                    (KeyModifiers::NONE, KeyCode::Char(c))
                    | (KeyModifiers::SHIFT, KeyCode::Char(c)) => app.input(c),

                    _ => {}
                }
            }
            Event::Resize(cols, rows) => {
                tracing::debug!(cols, rows, "terminal resized");
            }
            _ => {}
        }
    }
}
