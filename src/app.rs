//! Application state and logic.

use std::time::Duration;

use crate::config::PlotConfig;
use crate::error::Result;
use crate::expr::{self, stdlib, CompiledExpr, ParseErr};
use crate::input::ExpressionInput;
use crate::render::{render_frame, AxisLayout, FrameReport, FrameState, LoopState, RenderLoop, Sampler};
use crate::surface::DisplayList;
use crate::viewport::Mapper;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Active configuration.
    pub config: PlotConfig,
    /// Coordinate mapping for the plot area.
    pub mapper: Mapper,
    /// Cached axis ticks.
    pub axes: AxisLayout,
    /// Sampling settings.
    pub sampler: Sampler,
    /// Frame loop handle.
    pub render_loop: RenderLoop,
    /// Expression input line.
    pub input: ExpressionInput,
    /// Committed expression, compiled.
    pub expr: std::result::Result<CompiledExpr, ParseErr>,
    /// The most recent frame.
    pub surface: DisplayList,
    /// Report for the most recent frame.
    pub last_report: Option<FrameReport>,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
}

impl App {
    /// Create a new application instance with the loop already running.
    pub fn new(config: PlotConfig) -> Result<Self> {
        config.validate()?;

        let sampler = config.sampler()?;
        let mapper = Mapper::new(config.viewport, 0.0, 0.0);
        let axes = AxisLayout::new(&config.viewport, config.label_offsets);
        let input = ExpressionInput::new(&config.initial_expression);
        let mut render_loop = RenderLoop::new(config.frame_interval);
        render_loop.start();

        let mut app = Self {
            expr: expr::parse(&config.initial_expression),
            config,
            mapper,
            axes,
            sampler,
            render_loop,
            input,
            surface: DisplayList::default(),
            last_report: None,
            status: "Ready".to_string(),
            theme: Theme::GruvboxDark,
        };
        app.status = app.expression_status();
        Ok(app)
    }

    /// Commit the input line as the plotted expression.
    pub fn submit(&mut self) {
        let source = self.input.submit().to_string();
        self.expr = expr::parse(&source);
        match &self.expr {
            Ok(_) => tracing::info!(expr = %source, "expression committed"),
            Err(e) => tracing::warn!(expr = %source, "expression rejected: {}", e),
        }
        self.status = self.expression_status();
    }

    /// Insert a character into the input line.
    pub fn input(&mut self, c: char) {
        self.input.input(c);
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        self.input.backspace();
    }

    /// Empty the input line.
    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Restore the input line to the committed expression.
    pub fn reset_input(&mut self) {
        self.input.reset();
        self.status = "Input reset".to_string();
    }

    /// Tell the mapper the plot area's size in pixels.
    ///
    /// A paused loop still redraws once so the frozen frame matches the new
    /// size.
    pub fn resize_canvas(&mut self, width: f64, height: f64) {
        if !self.mapper.resize(width, height) {
            return;
        }
        tracing::debug!(width, height, scale = ?self.mapper.scale(), "canvas resized");
        self.surface.set_size(self.mapper.width(), self.mapper.height());

        if !self.render_loop.is_running() && self.render_loop.frames() > 0 {
            let state = FrameState {
                mapper: &self.mapper,
                axes: &self.axes,
                sampler: &self.sampler,
                expr: self.expr.as_ref(),
            };
            self.last_report = Some(render_frame(&mut self.surface, &state));
        }
    }

    /// Snapshot of what the next frame will read.
    pub fn frame_state(&self) -> FrameState<'_> {
        FrameState {
            mapper: &self.mapper,
            axes: &self.axes,
            sampler: &self.sampler,
            expr: self.expr.as_ref(),
        }
    }

    /// Run one loop tick into [`App::surface`].
    pub fn render(&mut self) -> Option<&FrameReport> {
        let state = FrameState {
            mapper: &self.mapper,
            axes: &self.axes,
            sampler: &self.sampler,
            expr: self.expr.as_ref(),
        };
        if let Some(report) = self.render_loop.tick(&mut self.surface, &state) {
            self.last_report = Some(report);
            return self.last_report.as_ref();
        }
        None
    }

    /// Pause or resume the render loop.
    pub fn toggle_pause(&mut self) {
        if self.render_loop.is_running() {
            self.render_loop.stop();
        } else {
            self.render_loop.start();
        }
        self.status = format!("Render loop: {}", self.render_loop.state().name());
    }

    /// Current loop state.
    pub fn loop_state(&self) -> LoopState {
        self.render_loop.state()
    }

    /// Time to wait for input between frames.
    pub fn frame_interval(&self) -> Duration {
        self.render_loop.frame_interval()
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Show the available names in the status bar.
    pub fn show_help(&mut self) {
        let names: Vec<&str> = stdlib::names().collect();
        self.status = format!("Names: {}  Operators: + - * / ^ ( ) ,", names.join(" "));
    }

    /// Status line describing the committed expression.
    pub fn expression_status(&self) -> String {
        match &self.expr {
            Ok(e) => format!("Plotting f(x) = {}", e),
            Err(e) => format!(
                "Error at column {}: {}",
                e.column(self.input.committed()),
                e
            ),
        }
    }

    /// Status line for the most recent frame.
    pub fn frame_status(&self) -> Option<String> {
        let report = self.last_report.as_ref()?;
        if !report.plotted_function() {
            return None;
        }
        let mut text = format!(
            "{} points, {} skipped, frame {}",
            report.plotted,
            report.skipped,
            self.render_loop.frames()
        );
        if let Some(ref err) = report.eval_error {
            text.push_str(&format!(" ({})", err));
        }
        Some(text)
    }
}
