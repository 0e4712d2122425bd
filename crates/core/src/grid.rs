//! Grid module - the n×n cell matrix with bounds-checked access
//!
//! The grid is a pure data holder. It knows nothing about the automaton
//! rule; it only stores cell state and enforces bounds on direct access.
//! Cells are stored in a flat row-major `Vec` indexed as `row * size + col`.

use crate::types::GridError;

/// A single cell of the simulation
///
/// `alive` is the authoritative state after each commit. The two pending
/// flags are transient: they are only meaningful between the evaluate and
/// commit passes of one generation, at most one of them is set at any
/// instant, and both are false whenever the grid is at rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub alive: bool,
    pub pending_alive: bool,
    pub pending_dead: bool,
}

impl Cell {
    /// True if either pending flag is set.
    pub fn has_pending(&self) -> bool {
        self.pending_alive || self.pending_dead
    }
}

/// Fixed-size square grid of cells
///
/// Created once per simulation run; the caller owns it and passes it to the
/// engine by reference. The engine never retains a grid across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an n×n grid with every cell dead and no pending flags.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::default(); size * size],
        }
    }

    /// Side length in cells.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row < self.size && col < self.size {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                size: self.size,
            })
        }
    }

    /// Get a copy of the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[self.index_of(row, col)])
    }

    /// Mark a single cell alive. Used only during seeding.
    pub fn set_alive(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        self.check_bounds(row, col)?;
        let idx = self.index_of(row, col);
        self.cells[idx].alive = true;
        Ok(())
    }

    /// Infallible liveness read; out-of-bounds coordinates read as dead.
    ///
    /// This is the accessor renderers and neighbor counting use. Direct
    /// external access that must distinguish "dead" from "invalid" should
    /// use [`Grid::get`] instead.
    pub fn alive(&self, row: usize, col: usize) -> bool {
        if row < self.size && col < self.size {
            self.cells[row * self.size + col].alive
        } else {
            false
        }
    }

    /// Reset every cell to dead with no pending flags.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.alive).count()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        let idx = self.index_of(row, col);
        &mut self.cells[idx]
    }
}
