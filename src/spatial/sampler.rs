//! Bilinear sampler
//!
//! Reads a field at a fractional position. The position is edge-clamped to
//! `[0, N - 1]` before interpolation, so any input (including NaN, which
//! clamps to 0) produces a defined read. At integer coordinates the
//! interpolation weights are exactly 0 and the stored value comes back
//! unchanged.

use super::grid::FieldGrid;

/// Values that can be linearly blended channel by channel.
pub trait Bilinear: Copy {
    fn lerp(a: Self, b: Self, t: f32) -> Self;
}

impl Bilinear for f32 {
    #[inline]
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a + (b - a) * t
    }
}

/// Sample `field` at `position` (cell units, cell centres at integers)
pub fn sample<T: Bilinear>(field: &FieldGrid<T>, position: (f32, f32)) -> T {
    let last = field.resolution() - 1;
    let (x0, x1, tx) = axis(position.0, last);
    let (y0, y1, ty) = axis(position.1, last);

    let bottom = T::lerp(field.get(x0, y0), field.get(x1, y0), tx);
    let top = T::lerp(field.get(x0, y1), field.get(x1, y1), tx);
    T::lerp(bottom, top, ty)
}

/// Clamp one coordinate and split it into (lower cell, upper cell, weight)
#[inline]
fn axis(p: f32, last: u32) -> (u32, u32, f32) {
    let clamped = p.max(0.0).min(last as f32);
    let lower = clamped.floor();
    let c0 = lower as u32;
    let c1 = (c0 + 1).min(last);
    (c0, c1, clamped - lower)
}
