//! Solver parameter set
//!
//! Parsed from a JSON document (camelCase keys, every key optional) the same
//! way content bundles are, then validated once. Resolution is fixed for the
//! lifetime of a solver; the rest can be retuned between ticks through the
//! validated setters on the solver.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::core::{FluidError, FluidResult};
use crate::spatial::grid::{CELL_SIZE, TILE_SIZE};

pub const DIFFUSE_ITERATIONS: RangeInclusive<u32> = 1..=20;
pub const PRESSURE_ITERATIONS: RangeInclusive<u32> = 1..=80;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolverParams {
    /// cells per side (N)
    pub resolution: u32,
    /// kinematic viscosity; <= 0 disables diffusion
    pub viscosity: f32,
    /// Jacobi round trips for the diffusion solve
    pub diffuse_iterations: u32,
    /// Jacobi round trips for the pressure solve
    pub pressure_iterations: u32,
    /// per-tick concentration multiplier in [0, 1]
    pub decay: f32,
    /// pointer delta to velocity impulse factor
    pub velocity_scale: f32,
    /// seed the diagnostic vortex pattern on the first tick
    pub seed_test_pattern: bool,
}

impl Default for SolverParams {
    fn default() -> Self {
        SolverParams {
            resolution: 256,
            viscosity: 0.001,
            diffuse_iterations: 4,
            pressure_iterations: 40,
            decay: 0.995,
            velocity_scale: 1.0,
            seed_test_pattern: false,
        }
    }
}

impl SolverParams {
    pub fn new(
        resolution: u32,
        viscosity: f32,
        diffuse_iterations: u32,
        pressure_iterations: u32,
        decay: f32,
        velocity_scale: f32,
    ) -> Self {
        SolverParams {
            resolution,
            viscosity,
            diffuse_iterations,
            pressure_iterations,
            decay,
            velocity_scale,
            seed_test_pattern: false,
        }
    }

    pub fn from_json(json: &str) -> FluidResult<Self> {
        let params: SolverParams = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> FluidResult<()> {
        if self.resolution == 0 || self.resolution % TILE_SIZE != 0 {
            return Err(FluidError::InvalidResolution {
                resolution: self.resolution,
                tile_size: TILE_SIZE,
            });
        }
        check_iterations("diffuseIterations", self.diffuse_iterations, DIFFUSE_ITERATIONS)?;
        check_iterations("pressureIterations", self.pressure_iterations, PRESSURE_ITERATIONS)?;
        check_finite("viscosity", self.viscosity)?;
        check_finite("velocityScale", self.velocity_scale)?;
        check_finite("decay", self.decay)?;
        if !(0.0..=1.0).contains(&self.decay) {
            return Err(FluidError::InvalidParameter {
                name: "decay",
                value: self.decay,
                reason: "must lie in [0, 1]",
            });
        }
        Ok(())
    }

    /// Implicit diffusion weight `dx^2 / (nu * dt)`, or None when the
    /// diffusion stage has nothing to do (nu <= 0 or dt == 0)
    pub fn diffusion_alpha(&self, dt: f32) -> Option<f32> {
        if self.viscosity <= 0.0 || dt <= 0.0 {
            return None;
        }
        Some(CELL_SIZE * CELL_SIZE / (self.viscosity * dt))
    }
}

fn check_iterations(name: &'static str, value: u32, range: RangeInclusive<u32>) -> FluidResult<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(FluidError::IterationsOutOfRange {
            name,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

fn check_finite(name: &'static str, value: f32) -> FluidResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FluidError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        })
    }
}
