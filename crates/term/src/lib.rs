//! Terminal rendering layer.
//!
//! A small, game-oriented rendering stack: a plain framebuffer, a
//! crossterm backend that flushes it, and a pure view that maps simulation
//! snapshots into it.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render into a framebuffer the backend can diff frame-to-frame
//! - Keep the view pure (no I/O) so it can be unit-tested

pub mod fb;
pub mod grid_view;
pub mod renderer;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use grid_view::{GridView, Viewport};
pub use renderer::TerminalRenderer;
