//! Framebuffer and cell types for terminal rendering.

use crate::types::{AddressMode, Color, Dimensions};

/// A single grid cell.
///
/// In [`AddressMode::Char`] the color is the glyph's foreground. In
/// [`AddressMode::Dot`] the glyph is ignored and the color fills the cell's
/// background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub color: Color,
}

impl Cell {
    /// Empty cell in the terminal's default colors.
    pub const BLANK: Cell = Cell {
        ch: ' ',
        color: Color::Default,
    };

    pub const fn glyph(ch: char, color: Color) -> Self {
        Self { ch, color }
    }

    /// A solid dot-mode pixel.
    pub const fn dot(color: Color) -> Self {
        Self { ch: ' ', color }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Grid size `(width, height)` for a terminal in a given addressing mode.
pub fn grid_size(dims: Dimensions, mode: AddressMode) -> (u16, u16) {
    ((dims.cols / mode.cell_width()).max(1), dims.rows.max(1))
}

/// 2D framebuffer of cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    mode: AddressMode,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16, mode: AddressMode) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            mode,
            cells: vec![Cell::default(); len],
        }
    }

    /// Framebuffer covering the whole terminal.
    pub fn for_terminal(dims: Dimensions, mode: AddressMode) -> Self {
        let (w, h) = grid_size(dims, mode);
        Self::new(w, h, mode)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn mode(&self) -> AddressMode {
        self.mode
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    /// Resize to cover `dims`. Returns `true` if the grid size changed.
    pub fn fit_terminal(&mut self, dims: Dimensions) -> bool {
        let (w, h) = grid_size(dims, self.mode);
        let changed = (w, h) != (self.width, self.height);
        self.resize(w, h);
        changed
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Signed grid write. Off-grid coordinates are ignored; returns whether
    /// the cell was written.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        if x < 0 || y < 0 || x > u16::MAX as i32 || y > u16::MAX as i32 {
            return false;
        }
        match self.idx(x as u16, y as u16) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Write by 1-based terminal row/column. In dot mode both columns of a
    /// pixel address the same cell.
    pub fn put_term(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        let x = (col - 1).div_euclid(self.mode.cell_width() as i32);
        self.put(x, row - 1, cell)
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: u16, h: u16, cell: Cell) {
        for dy in 0..h as i32 {
            for dx in 0..w as i32 {
                self.put(x + dx, y + dy, cell);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::palette;

    #[test]
    fn out_of_range_writes_are_ignored() {
        let mut fb = FrameBuffer::new(4, 3, AddressMode::Char);
        let before = fb.clone();
        let c = Cell::glyph('#', palette::RED);
        assert!(!fb.put(-1, 0, c));
        assert!(!fb.put(0, -1, c));
        assert!(!fb.put(4, 0, c));
        assert!(!fb.put(0, 3, c));
        assert!(!fb.put(i32::MAX, i32::MIN, c));
        fb.set(9, 9, c);
        assert_eq!(fb, before);

        assert!(fb.put(3, 2, c));
        assert_eq!(fb.get(3, 2), Some(c));
    }

    #[test]
    fn dot_mode_halves_width() {
        let fb = FrameBuffer::for_terminal(Dimensions::new(81, 24), AddressMode::Dot);
        assert_eq!((fb.width(), fb.height()), (40, 24));
        let fb = FrameBuffer::for_terminal(Dimensions::new(81, 24), AddressMode::Char);
        assert_eq!((fb.width(), fb.height()), (81, 24));
    }

    #[test]
    fn terminal_addressing_is_one_based() {
        let mut fb = FrameBuffer::new(10, 5, AddressMode::Char);
        let c = Cell::glyph('x', palette::GREEN);
        assert!(fb.put_term(1, 1, c));
        assert_eq!(fb.get(0, 0), Some(c));
        assert!(!fb.put_term(0, 1, c));
        assert!(!fb.put_term(1, 0, c));
    }

    #[test]
    fn dot_terminal_columns_pair_up() {
        let mut fb = FrameBuffer::new(5, 2, AddressMode::Dot);
        let c = Cell::dot(palette::BLUE);
        assert!(fb.put_term(2, 3, c));
        assert!(fb.put_term(2, 4, Cell::dot(palette::RED)));
        assert_eq!(fb.get(1, 1), Some(Cell::dot(palette::RED)));
        assert_eq!(fb.get(2, 1), Some(Cell::BLANK));
        // Column 0 is left of the grid even though (0 - 1) / 2 rounds to 0.
        assert!(!fb.put_term(1, 0, c));
    }

    #[test]
    fn fit_terminal_reports_changes() {
        let mut fb = FrameBuffer::for_terminal(Dimensions::new(80, 24), AddressMode::Dot);
        assert!(!fb.fit_terminal(Dimensions::new(81, 24)));
        assert!(fb.fit_terminal(Dimensions::new(100, 30)));
        assert_eq!((fb.width(), fb.height()), (50, 30));
        assert_eq!(fb.cells().len(), 50 * 30);
    }

    #[test]
    fn clear_and_fill() {
        let mut fb = FrameBuffer::new(3, 3, AddressMode::Dot);
        fb.clear(Cell::dot(palette::NIGHT_SKY));
        assert!(fb.cells().iter().all(|c| c.color == palette::NIGHT_SKY));
        fb.fill_rect(-1, -1, 2, 2, Cell::dot(palette::RED));
        assert_eq!(fb.get(0, 0), Some(Cell::dot(palette::RED)));
        assert_eq!(fb.get(1, 1), Some(Cell::dot(palette::NIGHT_SKY)));
    }
}
