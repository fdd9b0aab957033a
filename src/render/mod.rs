//! Rendering: axes, sampled function and the frame loop.
//!
//! Everything here draws through [`crate::surface::Surface`] and reads its
//! inputs from an immutable [`FrameState`], so a frame can be rendered into a
//! [`crate::surface::DisplayList`] and inspected without a terminal.

mod axis;
mod frame;
mod sampler;
mod scheduler;

pub use axis::{AxisLayout, Tick};
pub use frame::{render_frame, FrameReport, FrameState};
pub use sampler::{PlotStats, Sampler, Samples};
pub use scheduler::{LoopState, RenderLoop};
