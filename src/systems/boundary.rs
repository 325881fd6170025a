//! Wall conditions
//!
//! Velocity: free-slip reflecting wall. A border cell takes its inward
//! neighbour with the component normal to the touched wall(s) negated;
//! tangential velocity and concentration are copied.
//!
//! Pressure: Neumann, the border copies its inward neighbour.
//!
//! The in-place passes only write the border ring and only read interior
//! cells, so no cell is both read and written.

use crate::domain::cell::FluidCell;
use crate::spatial::grid::{border_ring, inward, FieldGrid};

#[inline]
pub fn velocity_wall(inner: FluidCell, x: u32, y: u32, resolution: u32) -> FluidCell {
    let last = resolution - 1;
    inner.reflect(x == 0 || x == last, y == 0 || y == last)
}

#[inline]
pub fn pressure_wall(inner: f32) -> f32 {
    inner
}

pub fn apply_velocity_boundary(field: &mut FieldGrid<FluidCell>) {
    let n = field.resolution();
    for (x, y) in border_ring(n) {
        let (ix, iy) = inward(x, y, n);
        let inner = field.get(ix, iy);
        field.set(x, y, velocity_wall(inner, x, y, n));
    }
}

pub fn apply_pressure_boundary(field: &mut FieldGrid<f32>) {
    let n = field.resolution();
    for (x, y) in border_ring(n) {
        let (ix, iy) = inward(x, y, n);
        let inner = field.get(ix, iy);
        field.set(x, y, pressure_wall(inner));
    }
}
