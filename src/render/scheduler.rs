//! Start/stop handle for the frame loop.

use std::time::Duration;

use super::frame::{render_frame, FrameReport, FrameState};
use crate::surface::Surface;

/// Loop lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    /// Created, no frame drawn yet.
    #[default]
    Idle,
    /// Drawing one frame per tick.
    Rendering,
    /// Paused; ticks do nothing until restarted.
    Stopped,
}

impl LoopState {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            LoopState::Idle => "Idle",
            LoopState::Rendering => "Rendering",
            LoopState::Stopped => "Stopped",
        }
    }
}

/// Drives frames at a fixed cadence.
///
/// The host decides when a tick happens (a terminal event poll, a test loop);
/// the handle only decides whether a tick draws. Every tick runs to
/// completion before returning.
#[derive(Debug, Clone)]
pub struct RenderLoop {
    state: LoopState,
    frames: u64,
    interval: Duration,
}

impl RenderLoop {
    /// Create an idle loop targeting one frame per `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            state: LoopState::Idle,
            frames: 0,
            interval,
        }
    }

    /// Current state.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Whether ticks currently draw.
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Rendering
    }

    /// Begin or resume rendering.
    pub fn start(&mut self) {
        if self.state != LoopState::Rendering {
            tracing::debug!(from = self.state.name(), "render loop started");
            self.state = LoopState::Rendering;
        }
    }

    /// Pause rendering. Already drawn frames stay on screen.
    pub fn stop(&mut self) {
        if self.state == LoopState::Rendering {
            tracing::debug!(frames = self.frames, "render loop stopped");
        }
        self.state = LoopState::Stopped;
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Target time between frames.
    pub fn frame_interval(&self) -> Duration {
        self.interval
    }

    /// Draw one frame if the loop is rendering.
    pub fn tick<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        state: &FrameState<'_>,
    ) -> Option<FrameReport> {
        if !self.is_running() {
            return None;
        }
        let report = render_frame(surface, state);
        self.frames += 1;
        Some(report)
    }

    /// Tick up to `n` times, stopping early if the loop is not rendering.
    pub fn run_for<S: Surface + ?Sized>(
        &mut self,
        n: usize,
        surface: &mut S,
        state: &FrameState<'_>,
    ) -> Vec<FrameReport> {
        (0..n).map_while(|_| self.tick(surface, state)).collect()
    }
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self::new(Duration::from_millis(16))
    }
}
