use crate::spatial::grid::FieldGrid;

use super::parallel::fill_cells;

/// Reset every cell of `dst` to zero
pub fn clear<T>(dst: &mut FieldGrid<T>)
where
    T: Copy + Default + Send + Sync,
{
    fill_cells(dst, |_, _| T::default());
}
