//! Simulation run module
//!
//! A [`Simulation`] is one run of the automaton: a grid and its generation
//! counter, created together, mutated together each tick, and reset
//! together. It replaces the original implementation's global mutable
//! state; the caller (driver) owns the instance and the scheduling, and the
//! "running" flag lives with the driver, not here.

use crate::automaton::advance_generation;
use crate::grid::Grid;
use crate::snapshot::SimSnapshot;
use crate::types::GridError;

/// One simulation run: a grid plus its generation counter.
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    generation: u64,
}

impl Simulation {
    /// Create a run over a fresh n×n all-dead grid at generation 0.
    pub fn new(size: usize) -> Self {
        Self {
            grid: Grid::new(size),
            generation: 0,
        }
    }

    /// Mark each listed cell alive.
    ///
    /// Coordinates are `(col, row)` pairs, matching the canonical pattern
    /// data in [`crate::patterns`]. Fails on the first out-of-bounds pair;
    /// cells seeded before the failure stay seeded.
    pub fn seed(&mut self, coordinates: &[(usize, usize)]) -> Result<(), GridError> {
        for &(col, row) in coordinates {
            self.grid.set_alive(row, col)?;
        }
        Ok(())
    }

    /// Advance by exactly one generation and count it.
    ///
    /// Runs both engine passes to completion; the grid is never observable
    /// mid-update. The counter increments once per committed generation and
    /// has no effect on automaton behavior.
    pub fn advance(&mut self) {
        advance_generation(&mut self.grid);
        self.generation += 1;
    }

    /// Clear the grid and zero the generation counter.
    ///
    /// Must only be invoked between ticks; no state carries over.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.generation = 0;
    }

    /// Generations committed since creation or the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Capture the render-facing observation of this run.
    pub fn snapshot(&self) -> SimSnapshot {
        SimSnapshot::capture(self)
    }
}
