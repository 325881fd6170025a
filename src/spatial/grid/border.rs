//! Border ring helpers
//!
//! The border ring is every cell with `x` or `y` equal to `0` or `N - 1`.
//! Wall rules for a border cell read its inward neighbour: one step toward
//! the interior on each axis where the cell touches the border, so corners
//! step diagonally. For N >= 3 the inward neighbour is always interior.

use super::FieldGrid;

#[inline]
pub fn is_border(x: u32, y: u32, resolution: u32) -> bool {
    let last = resolution - 1;
    x == 0 || y == 0 || x == last || y == last
}

#[inline]
pub fn inward(x: u32, y: u32, resolution: u32) -> (u32, u32) {
    (inward_axis(x, resolution), inward_axis(y, resolution))
}

/// Coordinates of the border ring, each cell exactly once
pub fn border_ring(resolution: u32) -> impl Iterator<Item = (u32, u32)> {
    let last = resolution - 1;
    let rows = (0..resolution).flat_map(move |x| [(x, 0), (x, last)]);
    let cols = (1..last).flat_map(move |y| [(0, y), (last, y)]);
    rows.chain(cols)
}

#[inline]
fn inward_axis(c: u32, resolution: u32) -> u32 {
    if c == 0 {
        1
    } else if c == resolution - 1 {
        c - 1
    } else {
        c
    }
}

impl<T> FieldGrid<T> {
    #[inline]
    pub fn is_border(&self, x: u32, y: u32) -> bool {
        is_border(x, y, self.resolution())
    }

    pub fn border_cells(&self) -> impl Iterator<Item = (u32, u32)> {
        border_ring(self.resolution())
    }
}
