//! Pressure Poisson solve, one Jacobi sweep
//!
//! `lap(p) = div` discretised on the 5-point stencil:
//! `p = (sum(neighbours) - dx^2 * div) / 4`. Border cells take the new value
//! of their inward neighbour (Neumann) within the same sweep.

use crate::spatial::grid::{FieldGrid, CELL_SIZE};

use super::boundary::pressure_wall;
use super::parallel::fill_with_walls;

pub fn pressure_sweep(src: &FieldGrid<f32>, divergence: &FieldGrid<f32>, dst: &mut FieldGrid<f32>) {
    let dx2 = CELL_SIZE * CELL_SIZE;
    fill_with_walls(
        dst,
        |x, y| {
            let sum = src.neighbor(x, y, -1, 0)
                + src.neighbor(x, y, 1, 0)
                + src.neighbor(x, y, 0, -1)
                + src.neighbor(x, y, 0, 1);
            (sum - dx2 * divergence.get(x, y)) * 0.25
        },
        |inner, _, _| pressure_wall(inner),
    );
}
