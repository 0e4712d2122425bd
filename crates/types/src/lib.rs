//! Core types module - shared constants, actions, and errors
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The simulation space is a fixed square:
//!
//! - **Space width**: 800 logical pixels
//! - **Cell width**: 10 logical pixels (must divide the space width)
//! - **Grid size**: `800 / 10 = 80` cells per side
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_DURATION_MS` | 150 | Fixed interval between generations |
//!
//! The driver advances the simulation once per frame; the engine itself has
//! no notion of time.
//!
//! # Examples
//!
//! ```
//! use tui_life_types::{SimAction, GRID_SIZE, SPACE_WIDTH, PIXEL_WIDTH};
//!
//! assert_eq!(GRID_SIZE, (SPACE_WIDTH / PIXEL_WIDTH) as usize);
//!
//! let action = SimAction::from_str("start").unwrap();
//! assert_eq!(action, SimAction::Start);
//! assert_eq!(action.as_str(), "start");
//! ```

use std::fmt;

/// Simulation space width in logical pixels
pub const SPACE_WIDTH: u32 = 800;

/// Width of one cell in logical pixels (must divide `SPACE_WIDTH`)
pub const PIXEL_WIDTH: u32 = 10;

/// Grid side length in cells (80)
pub const GRID_SIZE: usize = (SPACE_WIDTH / PIXEL_WIDTH) as usize;

/// Fixed interval between generations in milliseconds
pub const FRAME_DURATION_MS: u32 = 150;

/// Actions that drive a simulation run
///
/// These are produced by input mapping and consumed by the driver loop.
/// The engine itself never sees them; it only exposes "advance one
/// generation".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimAction {
    /// Reset the run, seed the demo layout, and start advancing
    Start,
    /// Toggle the driver's running flag
    Pause,
    /// Advance a single generation (useful while paused)
    Step,
    /// Clear the grid and zero the generation counter
    Reset,
}

impl SimAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_life_types::SimAction;
    ///
    /// assert_eq!(SimAction::from_str("start"), Some(SimAction::Start));
    /// assert_eq!(SimAction::from_str("Pause"), Some(SimAction::Pause));
    /// assert_eq!(SimAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(SimAction::Start),
            "pause" => Some(SimAction::Pause),
            "step" => Some(SimAction::Step),
            "reset" => Some(SimAction::Reset),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SimAction::Start => "start",
            SimAction::Pause => "pause",
            SimAction::Step => "step",
            SimAction::Reset => "reset",
        }
    }
}

/// Errors produced by direct grid accessors
///
/// The automaton's own iteration never produces these; only external
/// callers passing bad coordinates can.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A row or column index outside `[0, size)`
    OutOfBounds {
        row: usize,
        col: usize,
        size: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { row, col, size } => {
                write!(f, "cell ({row}, {col}) out of bounds for {size}x{size} grid")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_size_derived_from_space_dimensions() {
        assert_eq!(SPACE_WIDTH % PIXEL_WIDTH, 0);
        assert_eq!(GRID_SIZE, 80);
        assert_eq!(FRAME_DURATION_MS, 150);
    }

    #[test]
    fn test_action_round_trip() {
        for action in [
            SimAction::Start,
            SimAction::Pause,
            SimAction::Step,
            SimAction::Reset,
        ] {
            assert_eq!(SimAction::from_str(action.as_str()), Some(action));
        }
        assert_eq!(SimAction::from_str("STEP"), Some(SimAction::Step));
        assert_eq!(SimAction::from_str("quit"), None);
    }

    #[test]
    fn test_grid_error_display() {
        let err = GridError::OutOfBounds {
            row: 80,
            col: 3,
            size: 80,
        };
        assert_eq!(err.to_string(), "cell (80, 3) out of bounds for 80x80 grid");
    }
}
