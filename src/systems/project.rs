//! Helmholtz-Hodge projection
//!
//! Subtracts the central-difference pressure gradient from velocity and
//! applies the concentration decay. Last stage of a tick.

use crate::domain::cell::FluidCell;
use crate::spatial::grid::{FieldGrid, CELL_SIZE};

use super::boundary::velocity_wall;
use super::parallel::fill_with_walls;

pub fn project(
    src: &FieldGrid<FluidCell>,
    pressure: &FieldGrid<f32>,
    dst: &mut FieldGrid<FluidCell>,
    decay: f32,
) {
    let n = src.resolution();
    let half = 0.5 / CELL_SIZE;
    fill_with_walls(
        dst,
        |x, y| {
            let cell = src.get(x, y);
            let gx = half * (pressure.neighbor(x, y, 1, 0) - pressure.neighbor(x, y, -1, 0));
            let gy = half * (pressure.neighbor(x, y, 0, 1) - pressure.neighbor(x, y, 0, -1));
            FluidCell {
                vx: cell.vx - gx,
                vy: cell.vy - gy,
                c: cell.c * decay,
                reserved: cell.reserved,
            }
        },
        |inner, x, y| velocity_wall(inner, x, y, n),
    );
}
