//! Divergence from central differences
//!
//! `div = 0.5 / dx * ((vx[x+1] - vx[x-1]) + (vy[y+1] - vy[y-1]))` on interior
//! cells; the border ring holds zero.

use crate::domain::cell::FluidCell;
use crate::spatial::grid::{is_border, FieldGrid, CELL_SIZE};

use super::parallel::fill_cells;

#[inline]
pub fn divergence_at(velocity: &FieldGrid<FluidCell>, x: u32, y: u32) -> f32 {
    let dvx = velocity.neighbor(x, y, 1, 0).vx - velocity.neighbor(x, y, -1, 0).vx;
    let dvy = velocity.neighbor(x, y, 0, 1).vy - velocity.neighbor(x, y, 0, -1).vy;
    0.5 / CELL_SIZE * (dvx + dvy)
}

pub fn compute_divergence(velocity: &FieldGrid<FluidCell>, dst: &mut FieldGrid<f32>) {
    let n = velocity.resolution();
    fill_cells(dst, |x, y| {
        if is_border(x, y, n) {
            0.0
        } else {
            divergence_at(velocity, x, y)
        }
    });
}

/// Largest |divergence| over the interior of `velocity`
pub fn max_abs_divergence(velocity: &FieldGrid<FluidCell>) -> f32 {
    let n = velocity.resolution();
    let mut max = 0.0f32;
    for y in 1..n - 1 {
        for x in 1..n - 1 {
            max = max.max(divergence_at(velocity, x, y).abs());
        }
    }
    max
}
