use super::super::*;

impl<T: Copy> FieldGrid<T> {
    // === Cell access ===
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> T {
        let idx = self.index(x, y);
        *fast!(self.cells, [idx])
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: T) {
        let idx = self.index(x, y);
        fast!(self.cells, [idx] = value);
    }

    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    #[inline]
    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Value at `(x + dx, y + dy)`. Panics when the offset leaves the grid.
    #[inline]
    pub fn neighbor(&self, x: u32, y: u32, dx: i32, dy: i32) -> T {
        self.get((x as i32 + dx) as u32, (y as i32 + dy) as u32)
    }
}
