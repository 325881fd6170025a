//! FieldGrid - one square field stored row-major in a single Vec
//!
//! Every field of the solver (velocity+concentration, divergence, pressure)
//! is a `FieldGrid<T>` of resolution N. Storage is allocated once and never
//! resized; cells are addressed by integer `(x, y)` with `x, y < N`.

mod indexing;
mod border;
mod accessors;

pub use border::{border_ring, inward, is_border};

/// Parallel dispatch tile edge in cells. Resolutions are whole multiples of it.
pub const TILE_SIZE: u32 = 8;

/// Distance between neighbouring cell centres in simulation units.
pub const CELL_SIZE: f32 = 1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldGrid<T> {
    resolution: u32,
    size: usize,
    cells: Vec<T>,
}

impl<T: Copy + Default> FieldGrid<T> {
    /// Allocate an N x N grid with every cell at `T::default()`
    pub fn new(resolution: u32) -> Self {
        Self::filled(resolution, T::default())
    }

    pub fn filled(resolution: u32, value: T) -> Self {
        let size = (resolution as usize) * (resolution as usize);
        Self {
            resolution,
            size,
            cells: vec![value; size],
        }
    }

    /// Build a grid from a per-cell function (tests and seeding)
    pub fn from_fn(resolution: u32, f: impl Fn(u32, u32) -> T) -> Self {
        let mut grid = Self::new(resolution);
        for y in 0..resolution {
            for x in 0..resolution {
                grid.set(x, y, f(x, y));
            }
        }
        grid
    }

    /// Overwrite every cell with `value`
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    /// Copy another grid of the same resolution into this one
    pub fn copy_from(&mut self, other: &FieldGrid<T>) {
        debug_assert_eq!(
            self.resolution, other.resolution,
            "copy_from: resolution mismatch"
        );
        self.cells.copy_from_slice(&other.cells);
    }
}
