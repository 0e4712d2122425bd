//! Framebuffer primitives for terminal rendering.
//!
//! A `FrameBuffer` is a dense `width * height` array of styled characters.
//! Views draw into it; the backend flushes it. All writes are clipped to
//! the buffer bounds, so callers can draw without their own range checks.

/// 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Style of a single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }
}

/// One styled character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// A dense grid of styled characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the buffer, resetting all cells to default.
    pub fn resize(&mut self, width: u16, height: u16) {
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.cells = vec![Cell::default(); width as usize * height as usize];
        }
    }

    /// Fill the whole buffer with one cell.
    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        if x < self.width && y < self.height {
            Some(self.cells[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Set a cell; writes outside the buffer are ignored.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            self.cells[y as usize * self.width as usize + x as usize] = cell;
        }
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Write a string left-to-right starting at `(x, y)`, clipped at the
    /// right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        for (i, ch) in s.chars().enumerate() {
            let px = x.saturating_add(i as u16);
            if px >= self.width {
                break;
            }
            self.put_char(px, y, ch, style);
        }
    }

    /// Write an integer without allocating.
    pub fn put_u64(&mut self, x: u16, y: u16, mut value: u64, style: CellStyle) {
        // Render digits into a small stack buffer, most significant first.
        let mut digits = [0u8; 20];
        let mut len = 0;
        loop {
            digits[len] = b'0' + (value % 10) as u8;
            value /= 10;
            len += 1;
            if value == 0 {
                break;
            }
        }
        for i in 0..len {
            let px = x.saturating_add(i as u16);
            if px >= self.width {
                break;
            }
            self.put_char(px, y, digits[len - 1 - i] as char, style);
        }
    }

    /// Fill a rectangle with one styled character, clipped to the buffer.
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }
}
