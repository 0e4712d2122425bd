//! Core simulation logic - pure, deterministic, and testable
//!
//! This module contains the cellular-automaton engine and nothing else.
//! It has **zero dependencies** on UI, timing, or I/O, making it:
//!
//! - **Deterministic**: a given seed layout always produces the same
//!   generation sequence
//! - **Testable**: every rule and invariant has a direct unit test
//! - **Portable**: can run headless, in a terminal, or behind any renderer
//!
//! # Module Structure
//!
//! - [`grid`]: the n×n cell matrix with bounds-checked access
//! - [`automaton`]: Conway's rule as a two-phase evaluate/commit step
//! - [`sim`]: a simulation run owning one grid and its generation counter
//! - [`patterns`]: canonical seed layouts as plain coordinate data
//! - [`snapshot`]: the render-facing observation of a run
//!
//! # Update Semantics
//!
//! Each generation is computed in two full passes over the grid. The
//! evaluate pass reads only pre-tick state and records a pending action per
//! cell; the commit pass applies every pending action and clears the flags.
//! No cell's new state is ever visible to another cell's evaluation within
//! the same generation, so results are independent of visitation order.
//!
//! # Example
//!
//! ```
//! use tui_life_core::Simulation;
//! use tui_life_core::patterns;
//!
//! let mut sim = Simulation::new(80);
//! sim.seed(patterns::BLINKER).unwrap();
//!
//! sim.advance();
//! assert_eq!(sim.generation(), 1);
//!
//! // A blinker has period 2.
//! sim.advance();
//! assert!(sim.grid().alive(3, 3));
//! ```

pub mod automaton;
pub mod grid;
pub mod patterns;
pub mod sim;
pub mod snapshot;

pub use tui_life_types as types;

// Re-export commonly used items for convenience
pub use automaton::advance_generation;
pub use grid::{Cell, Grid};
pub use patterns::Pattern;
pub use sim::Simulation;
pub use snapshot::SimSnapshot;
