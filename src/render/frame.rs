//! One frame: clear, axes, function.

use std::fmt;

use super::{AxisLayout, PlotStats, Sampler};
use crate::expr::{CompiledExpr, EvalError, ParseErr};
use crate::surface::Surface;
use crate::viewport::Mapper;

/// Everything a frame reads, captured before drawing starts.
#[derive(Debug, Clone, Copy)]
pub struct FrameState<'a> {
    /// Coordinate mapping for the current canvas size.
    pub mapper: &'a Mapper,
    /// Cached tick layout.
    pub axes: &'a AxisLayout,
    /// Sampling settings.
    pub sampler: &'a Sampler,
    /// The committed expression, or why it failed to compile.
    pub expr: Result<&'a CompiledExpr, &'a ParseErr>,
}

/// What a frame drew.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Whether the axes were drawn.
    pub axes_drawn: bool,
    /// Samples painted.
    pub plotted: usize,
    /// Samples skipped because evaluation failed.
    pub skipped: usize,
    /// First per-sample evaluation failure.
    pub eval_error: Option<EvalError>,
    /// Compile failure that prevented plotting entirely.
    pub parse_error: Option<ParseErr>,
}

impl FrameReport {
    /// Whether the function itself was plotted.
    pub fn plotted_function(&self) -> bool {
        self.parse_error.is_none()
    }
}

impl fmt::Display for FrameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.axes_drawn {
            f.write_str("axes drawn, ")?;
        }
        match &self.parse_error {
            Some(err) => write!(f, "plot skipped: {}", err),
            None => write!(
                f,
                "{} points plotted, {} skipped",
                self.plotted, self.skipped
            ),
        }
    }
}

/// Render one frame onto `surface`.
///
/// A compile failure skips the plot but never the axes.
pub fn render_frame<S: Surface + ?Sized>(surface: &mut S, state: &FrameState<'_>) -> FrameReport {
    let (width, height) = surface.size();
    surface.clear_rect(0.0, 0.0, width, height);

    state.axes.draw(surface, state.mapper);

    let report = match state.expr {
        Ok(expr) => {
            let PlotStats {
                plotted,
                skipped,
                first_error,
            } = state.sampler.plot(surface, state.mapper, expr);
            FrameReport {
                axes_drawn: true,
                plotted,
                skipped,
                eval_error: first_error,
                parse_error: None,
            }
        }
        Err(err) => FrameReport {
            axes_drawn: true,
            plotted: 0,
            skipped: 0,
            eval_error: None,
            parse_error: Some(err.clone()),
        },
    };

    tracing::trace!(
        plotted = report.plotted,
        skipped = report.skipped,
        "frame rendered"
    );
    report
}
