//! funcplot - A terminal function plotter.
//!
//! funcplot draws a single function of `x` on a braille canvas: Cartesian axes
//! with labeled integer ticks, and the function sampled densely over a fixed,
//! symmetric viewport and redrawn every frame.
//!
//! # Features
//!
//! - Infix expressions with implicit multiplication (`2x^2 + 1`, `x sin(x)`)
//! - Fixed logical viewport mapped onto any canvas size
//! - Start/stop render loop with bounded runs
//! - Headless rendering into a display list
//! - Gruvbox color themes
//!
//! # Example
//!
//! ```
//! use funcplot::config::PlotConfig;
//! use funcplot::render::{render_frame, AxisLayout, FrameState};
//! use funcplot::surface::DisplayList;
//! use funcplot::viewport::Mapper;
//!
//! let config = PlotConfig::default();
//! let mapper = Mapper::new(config.viewport, 800.0, 800.0);
//! let axes = AxisLayout::new(&config.viewport, config.label_offsets);
//! let sampler = config.sampler()?;
//! let expr = funcplot::expr::parse("2x^2 + 1")?;
//!
//! let mut surface = DisplayList::new(800.0, 800.0);
//! let state = FrameState { mapper: &mapper, axes: &axes, sampler: &sampler, expr: Ok(&expr) };
//! let report = render_frame(&mut surface, &state);
//! assert_eq!(report.plotted + report.skipped, 800);
//! # Ok::<(), funcplot::PlotError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod config;
pub mod error;
pub mod expr;
pub mod headless;
pub mod input;
pub mod render;
pub mod surface;
pub mod ui;
pub mod viewport;

pub use error::{PlotError, Result};
