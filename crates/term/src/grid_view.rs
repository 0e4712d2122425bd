//! GridView: maps a `core::SimSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::SimSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal view of the simulation grid.
pub struct GridView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GridView {
    fn default() -> Self {
        // 1x1 keeps an 80-wide grid inside common terminal widths.
        Self {
            cell_w: 1,
            cell_h: 1,
        }
    }
}

impl GridView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and fully repainted.
    pub fn render_into(
        &self,
        snap: &SimSnapshot,
        running: bool,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let grid_px_w = snap.size as u16 * self.cell_w;
        let grid_px_h = snap.size as u16 * self.cell_h;
        let frame_w = grid_px_w + 2;
        let frame_h = grid_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let dead = CellStyle {
            fg: Rgb::new(60, 60, 70),
            bg: Rgb::new(20, 20, 28),
            bold: false,
            dim: true,
        };
        let live = CellStyle {
            fg: Rgb::new(120, 230, 120),
            bg: Rgb::new(20, 20, 28),
            bold: true,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, grid_px_w, grid_px_h, ' ', dead);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..snap.size {
            for col in 0..snap.size {
                if snap.alive(row, col) {
                    self.fill_cell_rect(fb, start_x, start_y, col as u16, row as u16, '█', live);
                }
            }
        }

        self.draw_side_panel(fb, snap, running, viewport, start_x, start_y, frame_w);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SimSnapshot, running: bool, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, running, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &SimSnapshot,
        running: bool,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        if viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let dim = CellStyle { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "GENERATION", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.generation, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "POPULATION", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.population as u64, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STATE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, if running { "RUNNING" } else { "PAUSED" }, value);
        y = y.saturating_add(2);

        for line in [
            "s start",
            "p pause",
            "n step",
            "r reset",
            "q quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, dim);
            y = y.saturating_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Simulation;

    fn small_snapshot() -> SimSnapshot {
        let mut sim = Simulation::new(8);
        sim.seed(&[(3, 3)]).unwrap();
        sim.snapshot()
    }

    #[test]
    fn test_live_cell_rendered_as_block() {
        let view = GridView::default();
        let snap = small_snapshot();
        let fb = view.render(&snap, false, Viewport::new(40, 20));

        let blocks = (0..fb.height())
            .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.get(x, y).map(|c| c.ch) == Some('█'))
            .count();
        assert_eq!(blocks, 1);
    }

    #[test]
    fn test_border_drawn_around_grid() {
        let view = GridView::default();
        let snap = small_snapshot();
        let fb = view.render(&snap, false, Viewport::new(40, 20));

        let corners = (0..fb.height())
            .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.get(x, y).map(|c| c.ch) == Some('┌'))
            .count();
        assert_eq!(corners, 1);
    }

    #[test]
    fn test_viewport_too_small_does_not_panic() {
        let view = GridView::default();
        let snap = small_snapshot();
        let _ = view.render(&snap, true, Viewport::new(3, 2));
        let _ = view.render(&snap, true, Viewport::new(0, 0));
    }
}
