use super::*;

impl<T> FieldGrid<T> {
    // === Dimensions ===
    #[inline]
    pub fn resolution(&self) -> u32 { self.resolution }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    /// Row-major index of `(x, y)`. Panics when the cell is outside the
    /// grid, in every build profile; `get`/`set` rely on it before their
    /// unchecked slice access.
    #[inline(always)]
    pub fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.resolution && y < self.resolution,
            "index: ({}, {}) outside {}x{} field",
            x,
            y,
            self.resolution,
            self.resolution
        );
        (y as usize) * (self.resolution as usize) + (x as usize)
    }
}
