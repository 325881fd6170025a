use super::super::*;

impl<T> FieldGrid<T> {
    // === Raw pointers for JS interop ===
    pub fn as_ptr(&self) -> *const T {
        self.cells.as_ptr()
    }

    pub fn byte_len(&self) -> usize {
        self.size * std::mem::size_of::<T>()
    }
}
