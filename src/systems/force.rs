//! Force stage
//!
//! Adds a pointer impulse to the velocity field as a bilinear splat: the
//! four cells around the pointer share the impulse with weights that sum to
//! one. Concentration is copied unchanged.
//!
//! The splat centre is clamped to `[1, N - 2]` so every weighted cell is
//! interior. The wall pass that follows rebuilds the border ring from the
//! interior, so weight placed on the border would be lost.

use crate::domain::cell::FluidCell;
use crate::spatial::grid::FieldGrid;

use super::parallel::fill_cells;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Splat {
    /// cell coordinates of the pointer
    pub position: (f32, f32),
    /// velocity to add, already scaled
    pub impulse: (f32, f32),
}

/// Lower cell and fractional offset of a splat on one grid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Footprint {
    x0: u32,
    fx: f32,
    y0: u32,
    fy: f32,
}

impl Splat {
    pub fn footprint(&self, resolution: u32) -> Footprint {
        let (x0, fx) = splat_axis(self.position.0, resolution);
        let (y0, fy) = splat_axis(self.position.1, resolution);
        Footprint { x0, fx, y0, fy }
    }
}

impl Footprint {
    /// Share of the impulse landing on `(x, y)`
    #[inline]
    pub fn weight(&self, x: u32, y: u32) -> f32 {
        axis_weight(x, self.x0, self.fx) * axis_weight(y, self.y0, self.fy)
    }
}

pub fn apply_force(src: &FieldGrid<FluidCell>, dst: &mut FieldGrid<FluidCell>, splat: &Splat) {
    let footprint = splat.footprint(src.resolution());
    let (ix, iy) = splat.impulse;

    fill_cells(dst, |x, y| {
        let cell = src.get(x, y);
        let w = footprint.weight(x, y);
        if w == 0.0 {
            cell
        } else {
            cell.with_velocity(cell.vx + w * ix, cell.vy + w * iy)
        }
    });
}

/// Clamp to the interior; at the upper limit the fraction is 0, so the
/// `lower + 1` cell on the border gets no weight
#[inline]
fn splat_axis(p: f32, resolution: u32) -> (u32, f32) {
    let hi = resolution.saturating_sub(2).max(1) as f32;
    let clamped = p.max(1.0).min(hi);
    let lower = clamped.floor();
    (lower as u32, clamped - lower)
}

#[inline]
fn axis_weight(c: u32, c0: u32, f: f32) -> f32 {
    if c == c0 {
        1.0 - f
    } else if c == c0 + 1 {
        f
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total_impulse(before: &FieldGrid<FluidCell>, after: &FieldGrid<FluidCell>) -> (f32, f32) {
        before
            .cells()
            .iter()
            .zip(after.cells())
            .fold((0.0, 0.0), |(sx, sy), (b, a)| (sx + a.vx - b.vx, sy + a.vy - b.vy))
    }

    #[test]
    fn integer_position_hits_one_cell() {
        let src = FieldGrid::filled(8, FluidCell::new(0.0, 0.0, 0.5));
        let mut dst = FieldGrid::new(8);
        let splat = Splat { position: (4.0, 4.0), impulse: (1.0, -2.0) };
        apply_force(&src, &mut dst, &splat);
        assert_eq!(dst.get(4, 4), FluidCell::new(1.0, -2.0, 0.5));
        assert_eq!(dst.get(5, 4), FluidCell::new(0.0, 0.0, 0.5));
    }

    #[test]
    fn fractional_splat_integrates_to_impulse() {
        let src = FieldGrid::new(16);
        let mut dst = FieldGrid::new(16);
        let splat = Splat { position: (6.25, 9.5), impulse: (3.0, 1.0) };
        apply_force(&src, &mut dst, &splat);
        let (sx, sy) = total_impulse(&src, &dst);
        assert!((sx - 3.0).abs() < 1e-5);
        assert!((sy - 1.0).abs() < 1e-5);
        assert!(dst.cells().iter().all(|c| c.c == 0.0));
    }

    #[test]
    fn pointer_outside_grid_lands_on_interior_corner() {
        let src = FieldGrid::new(8);
        let mut dst = FieldGrid::new(8);
        let splat = Splat { position: (20.0, -3.0), impulse: (1.0, 0.0) };
        apply_force(&src, &mut dst, &splat);
        assert_eq!(dst.get(6, 1).vx, 1.0);
        assert_eq!(dst.get(7, 0).vx, 0.0);
        assert_eq!(splat.footprint(8).weight(6, 1), 1.0);
    }

    #[test]
    fn splat_between_edge_and_border_stays_interior() {
        let src = FieldGrid::new(8);
        let mut dst = FieldGrid::new(8);
        let splat = Splat { position: (6.6, 0.4), impulse: (2.0, 1.0) };
        apply_force(&src, &mut dst, &splat);
        for (x, y) in crate::spatial::grid::border_ring(8) {
            assert_eq!(dst.get(x, y), FluidCell::ZERO, "border ({x}, {y})");
        }
        let (sx, sy) = total_impulse(&src, &dst);
        assert!((sx - 2.0).abs() < 1e-6);
        assert!((sy - 1.0).abs() < 1e-6);
    }

    #[test]
    fn impulse_on_the_wall_survives_the_wall_pass() {
        let src = FieldGrid::new(8);
        let mut dst = FieldGrid::new(8);
        let splat = Splat { position: (7.0, 4.0), impulse: (2.0, 0.0) };
        apply_force(&src, &mut dst, &splat);
        super::super::boundary::apply_velocity_boundary(&mut dst);
        assert_eq!(dst.get(6, 4).vx, 2.0);
        assert_eq!(dst.get(7, 4).vx, -2.0);
    }
}
