//! Implicit diffusion, one Jacobi sweep
//!
//! Backward Euler for `dv/dt = nu * lap(v)` gives, per cell,
//! `(4 + a) v = a * v0 + sum(neighbours)` with `a = dx^2 / (nu * dt)`.
//! `base` is v0 (fixed for the whole solve), `estimate` the previous sweep.

use crate::domain::cell::FluidCell;
use crate::spatial::grid::FieldGrid;

use super::boundary::velocity_wall;
use super::parallel::fill_with_walls;

pub fn diffuse_sweep(
    base: &FieldGrid<FluidCell>,
    estimate: &FieldGrid<FluidCell>,
    dst: &mut FieldGrid<FluidCell>,
    alpha: f32,
) {
    let n = estimate.resolution();
    let weight = 1.0 / (4.0 + alpha);
    fill_with_walls(
        dst,
        |x, y| {
            let sum = estimate.neighbor(x, y, -1, 0)
                + estimate.neighbor(x, y, 1, 0)
                + estimate.neighbor(x, y, 0, -1)
                + estimate.neighbor(x, y, 0, 1);
            (base.get(x, y) * alpha + sum) * weight
        },
        |inner, x, y| velocity_wall(inner, x, y, n),
    );
}
