//! Rendering without a terminal.

use std::io::Write;

use crate::app::App;
use crate::config::PlotConfig;
use crate::error::Result;

/// Render `frames` frames at `width`x`height` pixels, writing one report line
/// per frame to `out`.
///
/// A malformed expression is reported per frame; it is not an error.
pub fn run<W: Write>(
    config: PlotConfig,
    width: f64,
    height: f64,
    frames: usize,
    out: &mut W,
) -> Result<App> {
    let mut app = App::new(config)?;
    app.resize_canvas(width, height);

    for i in 1..=frames {
        if let Some(report) = app.render() {
            writeln!(out, "frame {}: {}", i, report)?;
        }
    }
    out.flush()?;

    tracing::info!(
        frames = app.render_loop.frames(),
        width,
        height,
        "headless run finished"
    );
    Ok(app)
}

/// Parse a `WxH` pixel size such as `800x800`.
pub fn parse_size(s: &str) -> std::result::Result<(f64, f64), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
    let parse = |v: &str| -> std::result::Result<f64, String> {
        let n: u32 = v
            .trim()
            .parse()
            .map_err(|_| format!("invalid dimension '{}'", v))?;
        if n == 0 {
            return Err(format!("dimension must be positive, got '{}'", v));
        }
        Ok(f64::from(n))
    };
    Ok((parse(w)?, parse(h)?))
}
