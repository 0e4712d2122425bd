//! Snapshot module - the render-facing observation of a run
//!
//! Renderers and other external consumers read a [`SimSnapshot`] taken
//! after commit, never the grid mid-update, and never the pending flags.

use crate::sim::Simulation;

/// Immutable observation of a simulation run after a committed generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimSnapshot {
    /// Grid side length in cells.
    pub size: usize,
    /// Generations committed so far.
    pub generation: u64,
    /// Liveness per cell, row-major.
    pub cells: Vec<bool>,
    /// Number of live cells.
    pub population: usize,
}

impl SimSnapshot {
    pub fn capture(sim: &Simulation) -> Self {
        let grid = sim.grid();
        let cells: Vec<bool> = grid.cells().iter().map(|c| c.alive).collect();
        let population = cells.iter().filter(|&&alive| alive).count();
        Self {
            size: grid.size(),
            generation: sim.generation(),
            cells,
            population,
        }
    }

    /// Liveness at `(row, col)`; out-of-range reads as dead.
    pub fn alive(&self, row: usize, col: usize) -> bool {
        if row < self.size && col < self.size {
            self.cells[row * self.size + col]
        } else {
            false
        }
    }
}
