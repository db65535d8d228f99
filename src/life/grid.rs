use super::cell::Cell;
use super::LifeError;

/// Double-buffered toroidal grid.
///
/// All reads go to the current buffer and all staged writes to the
/// scratch buffer; `commit` swaps the two. During a generation no read
/// ever observes a staged write, which is what makes the whole-grid
/// update simultaneous rather than sequential. Coordinates are reduced
/// modulo the dimensions on every access, so callers never see an
/// out-of-range error.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    scratch: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimensions { width, height });
        }
        let size = width.checked_mul(height).ok_or(LifeError::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; size],
            scratch: vec![Cell::Dead; size],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Marks every listed coordinate alive in the current buffer.
    /// Out-of-range coordinates wrap; seeding is total.
    pub fn seed(&mut self, coordinates: &[(isize, isize)]) {
        for &(x, y) in coordinates {
            let idx = self.wrap(x, y);
            self.cells[idx] = Cell::Alive;
        }
    }

    pub fn get(&self, x: isize, y: isize) -> Cell {
        self.cells[self.wrap(x, y)]
    }

    pub fn set(&mut self, x: isize, y: isize, cell: Cell) {
        let idx = self.wrap(x, y);
        self.cells[idx] = cell;
    }

    /// Stages a cell for the next generation. Nothing is visible to
    /// `get` until `commit`.
    pub fn set_next(&mut self, x: isize, y: isize, cell: Cell) {
        let idx = self.wrap(x, y);
        self.scratch[idx] = cell;
    }

    /// Publishes the staged generation. The old current buffer becomes
    /// the scratch buffer; every cell of it must be rewritten before
    /// the next commit.
    pub fn commit(&mut self) {
        std::mem::swap(&mut self.scratch, &mut self.cells);
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub fn clear(&mut self) {
        for c in self.cells.iter_mut() {
            *c = Cell::Dead;
        }
    }

    fn wrap(&self, x: isize, y: isize) -> usize {
        let x = x.rem_euclid(self.width as isize) as usize;
        let y = y.rem_euclid(self.height as isize) as usize;
        x + y * self.width
    }
}
