//! Parallel-for over grid cells
//!
//! Cells are handed out in bands of `TILE_SIZE` rows. With the `parallel`
//! feature and `Dispatch::Parallel` each band runs on the rayon pool,
//! otherwise bands run in order on the calling thread. A kernel only reads
//! its source buffers and returns the value for one cell, so both paths
//! write bit-identical results.

use std::cell::Cell;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::spatial::grid::{inward, is_border, FieldGrid, TILE_SIZE};

/// How `fill_cells` walks the bands on the current thread
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dispatch {
    /// rayon pool when the `parallel` feature is built in
    #[default]
    Parallel,
    /// Bands in order on the calling thread
    Sequential,
}

thread_local! {
    static DISPATCH: Cell<Dispatch> = const { Cell::new(Dispatch::Parallel) };
}

/// Dispatch mode `fill_cells` uses on this thread
pub fn current_dispatch() -> Dispatch {
    DISPATCH.with(Cell::get)
}

/// Run `f` with `mode` as this thread's dispatch, restoring the previous
/// mode afterwards, also on unwind.
pub fn with_dispatch<R>(mode: Dispatch, f: impl FnOnce() -> R) -> R {
    struct Restore(Dispatch);
    impl Drop for Restore {
        fn drop(&mut self) {
            DISPATCH.with(|d| d.set(self.0));
        }
    }

    let _restore = Restore(DISPATCH.with(|d| d.replace(mode)));
    f()
}

/// Write `kernel(x, y)` into every cell of `dst`
pub fn fill_cells<T, F>(dst: &mut FieldGrid<T>, kernel: F)
where
    T: Copy + Send,
    F: Fn(u32, u32) -> T + Sync,
{
    let n = dst.resolution() as usize;
    let band = n * TILE_SIZE as usize;

    #[cfg(feature = "parallel")]
    {
        if current_dispatch() == Dispatch::Parallel {
            dst.cells_mut()
                .par_chunks_mut(band)
                .enumerate()
                .for_each(|(tile_row, rows)| fill_band(rows, tile_row, n, &kernel));
            return;
        }
    }

    for (tile_row, rows) in dst.cells_mut().chunks_mut(band).enumerate() {
        fill_band(rows, tile_row, n, &kernel);
    }
}

/// Interior cells get `interior(x, y)`. Border cells get
/// `wall(interior(ix, iy), x, y)` where `(ix, iy)` is their inward
/// neighbour, so the ring always mirrors this generation's interior.
pub fn fill_with_walls<T, F, W>(dst: &mut FieldGrid<T>, interior: F, wall: W)
where
    T: Copy + Send,
    F: Fn(u32, u32) -> T + Sync,
    W: Fn(T, u32, u32) -> T + Sync,
{
    let n = dst.resolution();
    fill_cells(dst, |x, y| {
        if is_border(x, y, n) {
            let (ix, iy) = inward(x, y, n);
            wall(interior(ix, iy), x, y)
        } else {
            interior(x, y)
        }
    });
}

#[inline]
fn fill_band<T, F>(rows: &mut [T], tile_row: usize, n: usize, kernel: &F)
where
    F: Fn(u32, u32) -> T,
{
    let y0 = tile_row * TILE_SIZE as usize;
    for (i, cell) in rows.iter_mut().enumerate() {
        let x = i % n;
        let y = y0 + i / n;
        *cell = kernel(x as u32, y as u32);
    }
}
