//! Dense rectangular grids addressed by [`GridPos`].

use std::fmt;

/// A cell coordinate. Compares as the tuple `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct GridPos {
    /// Column, `0 <= x < width`.
    pub x: u32,
    /// Row, `0 <= y < height`.
    pub y: u32,
}

impl GridPos {
    /// Creates a coordinate.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Returns `true` if `other` is within one step on both axes.
    pub fn is_adjacent_or_equal(self, other: GridPos) -> bool {
        self.x.abs_diff(other.x) <= 1 && self.y.abs_diff(other.y) <= 1
    }
}

impl From<(u32, u32)> for GridPos {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Row-major `height x width` storage.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    width: u32,
    height: u32,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Creates a grid with every cell set to `fill`.
    pub fn filled(width: u32, height: u32, fill: T) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width as usize * height as usize],
        }
    }
}

impl<T> Grid<T> {
    /// Builds a grid by evaluating `f` for every cell in row-major order.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(GridPos) -> T) -> Self {
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(GridPos::new(x, y)));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    #[inline]
    fn index(&self, pos: GridPos) -> usize {
        assert!(self.contains(pos), "{pos} outside {}x{}", self.width, self.height);
        pos.y as usize * self.width as usize + pos.x as usize
    }

    /// Grid width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` for a zero-sized grid.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if `pos` is inside the grid.
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Returns the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    pub fn get(&self, pos: GridPos) -> &T {
        &self.cells[self.index(pos)]
    }

    /// Overwrites the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    pub fn set(&mut self, pos: GridPos, value: T) {
        let i = self.index(pos);
        self.cells[i] = value;
    }

    /// Iterates `(pos, value)` in row-major order (`y` outer, `x` inner).
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, &T)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(i, v)| {
            let i = i as u32;
            (GridPos::new(i % width, i / width), v)
        })
    }

    /// Iterates rows from `y = 0` upward.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.cells.chunks_exact(self.width.max(1) as usize)
    }
}
