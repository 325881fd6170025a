//! Fluid cell layout
//!
//! One cell of the velocity+concentration field. Four f32 lanes, laid out
//! like an RGBA float texel so a renderer can upload the buffer as-is:
//! r = vx, g = vy, b = concentration, a = reserved.

use std::ops::{Add, Mul, Sub};

use crate::spatial::sampler::Bilinear;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FluidCell {
    pub vx: f32,
    pub vy: f32,
    /// passive dye carried by the flow
    pub c: f32,
    pub reserved: f32,
}

impl FluidCell {
    pub const ZERO: FluidCell = FluidCell { vx: 0.0, vy: 0.0, c: 0.0, reserved: 0.0 };

    #[inline]
    pub const fn new(vx: f32, vy: f32, c: f32) -> Self {
        Self { vx, vy, c, reserved: 0.0 }
    }

    #[inline]
    pub fn velocity(&self) -> (f32, f32) {
        (self.vx, self.vy)
    }

    #[inline]
    pub fn with_velocity(self, vx: f32, vy: f32) -> Self {
        Self { vx, vy, ..self }
    }

    /// Negate the velocity components normal to the walls being touched
    #[inline]
    pub fn reflect(self, normal_x: bool, normal_y: bool) -> Self {
        Self {
            vx: if normal_x { -self.vx } else { self.vx },
            vy: if normal_y { -self.vy } else { self.vy },
            ..self
        }
    }
}

impl Add for FluidCell {
    type Output = FluidCell;

    #[inline]
    fn add(self, rhs: FluidCell) -> FluidCell {
        FluidCell {
            vx: self.vx + rhs.vx,
            vy: self.vy + rhs.vy,
            c: self.c + rhs.c,
            reserved: self.reserved + rhs.reserved,
        }
    }
}

impl Sub for FluidCell {
    type Output = FluidCell;

    #[inline]
    fn sub(self, rhs: FluidCell) -> FluidCell {
        FluidCell {
            vx: self.vx - rhs.vx,
            vy: self.vy - rhs.vy,
            c: self.c - rhs.c,
            reserved: self.reserved - rhs.reserved,
        }
    }
}

impl Mul<f32> for FluidCell {
    type Output = FluidCell;

    #[inline]
    fn mul(self, k: f32) -> FluidCell {
        FluidCell {
            vx: self.vx * k,
            vy: self.vy * k,
            c: self.c * k,
            reserved: self.reserved * k,
        }
    }
}

impl Bilinear for FluidCell {
    #[inline]
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        FluidCell {
            vx: <f32 as Bilinear>::lerp(a.vx, b.vx, t),
            vy: <f32 as Bilinear>::lerp(a.vy, b.vy, t),
            c: <f32 as Bilinear>::lerp(a.c, b.c, t),
            reserved: <f32 as Bilinear>::lerp(a.reserved, b.reserved, t),
        }
    }
}
