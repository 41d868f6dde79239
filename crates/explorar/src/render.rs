//! Rendering seam between the replay loop and any display.
//!
//! The core never draws or sleeps. Whoever owns a display implements
//! [`RenderSink`] and receives one frame per applied command; headless
//! callers pass [`NullSink`]. The sink is an explicit parameter so there
//! is no process-global way to silence output.

use crate::grid::Grid;
use crate::rover::Rover;

/// Receives one frame per rover step
pub trait RenderSink {
    /// Called once before a rover's first command and again after every
    /// applied command, with the grid already marked for that step
    fn frame(&mut self, grid: &Grid, rover: &Rover);
}

/// Sink that ignores every frame; the headless default
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn frame(&mut self, _grid: &Grid, _rover: &Rover) {}
}

/// Sink that only counts frames; test and example support
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameCounter {
    /// Frames received so far
    pub frames: usize,
}

impl RenderSink for FrameCounter {
    fn frame(&mut self, _grid: &Grid, _rover: &Rover) {
        self.frames += 1;
    }
}
