//! Automaton module - Conway's rule as a two-phase generation step
//!
//! [`advance_generation`] advances a grid by exactly one generation. The
//! engine is stateless across calls: all state lives in the grid passed in.
//!
//! # Two-phase update
//!
//! The step runs a full **evaluate** pass followed by a full **commit**
//! pass. Evaluation reads only pre-tick `alive` state and records a pending
//! flag per cell; commit applies every pending flag and clears them. A
//! single in-place pass would let an early cell's transition corrupt the
//! neighbor counts of cells visited later, making the outcome depend on
//! visitation order. Callers never observe the grid between the passes.
//!
//! # Edge policy
//!
//! A cell is evaluated only if `row > 1 && row + 1 < n && col > 1 &&
//! col + 1 < n`. This replicates the original implementation's
//! `row-1 > 0 && row+1 < n` comparison verbatim: it freezes the outermost
//! ring *and* the ring at index 1, while index-1 cells still count as
//! neighbors of index-2 cells. A true border rule would use `row > 0`;
//! the stricter comparison looks like an off-by-one in the original, but
//! it is load-bearing for reproducing the exact same generation sequence,
//! so it is preserved rather than fixed.

use crate::grid::Grid;

/// Advance the grid by one generation: evaluate fully, then commit fully.
///
/// Grids too small to contain any evaluated cell are a valid degenerate
/// input and advance as a no-op.
pub fn advance_generation(grid: &mut Grid) {
    evaluate(grid);
    commit(grid);
}

/// True if the cell at `(row, col)` is subject to evaluation.
fn is_evaluated(row: usize, col: usize, size: usize) -> bool {
    // Literal unsigned-safe form of the original `row-1 > 0 && row+1 < n`.
    row > 1 && row + 1 < size && col > 1 && col + 1 < size
}

/// Count live Moore neighbors against current (pre-tick) state.
///
/// Only called for evaluated cells, whose eight neighbor offsets are all in
/// bounds, so no wrap or clamp is needed.
fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let mut count = 0;
    for dr in [-1i64, 0, 1] {
        for dc in [-1i64, 0, 1] {
            if dr == 0 && dc == 0 {
                continue;
            }
            let nr = (row as i64 + dr) as usize;
            let nc = (col as i64 + dc) as usize;
            if grid.alive(nr, nc) {
                count += 1;
            }
        }
    }
    count
}

fn evaluate(grid: &mut Grid) {
    let size = grid.size();
    for row in 0..size {
        for col in 0..size {
            if !is_evaluated(row, col, size) {
                continue;
            }

            let neighbors = live_neighbors(grid, row, col);
            let alive = grid.alive(row, col);

            // Conway's rule: under/overpopulation kills, exactly three births.
            let cell = grid.cell_mut(row, col);
            if alive && !(2..=3).contains(&neighbors) {
                cell.pending_dead = true;
            } else if !alive && neighbors == 3 {
                cell.pending_alive = true;
            }
        }
    }
}

fn commit(grid: &mut Grid) {
    let size = grid.size();
    for row in 0..size {
        for col in 0..size {
            let cell = grid.cell_mut(row, col);
            if cell.pending_alive {
                cell.alive = true;
            } else if cell.pending_dead {
                cell.alive = false;
            }
            cell.pending_alive = false;
            cell.pending_dead = false;
        }
    }
}
