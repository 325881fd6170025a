//! Diagnostic seed pattern
//!
//! A solid-body vortex centred in the domain, fading to rest at a quarter
//! of the width, with a dye disc of the same radius. Fully deterministic so
//! two solvers seeded alike stay bit-identical.

use crate::domain::cell::FluidCell;
use crate::spatial::grid::FieldGrid;

use super::parallel::fill_cells;

pub fn seed_test_pattern(dst: &mut FieldGrid<FluidCell>) {
    let n = dst.resolution();
    let centre = (n as f32 - 1.0) * 0.5;
    let radius = (n as f32 * 0.25).max(1.0);

    fill_cells(dst, |x, y| {
        let dx = x as f32 - centre;
        let dy = y as f32 - centre;
        let r = (dx * dx + dy * dy).sqrt();
        let falloff = (1.0 - r / radius).max(0.0);
        let c = if r <= radius { 1.0 } else { 0.0 };
        FluidCell::new(-dy / radius * falloff, dx / radius * falloff, c)
    });
}
