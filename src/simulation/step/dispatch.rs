//! Tick planning and typed stage dispatch

use crate::domain::stages::StageId;
use crate::spatial::buffers::FieldStore;
use crate::systems::{
    advect, apply_force, apply_pressure_boundary, apply_velocity_boundary, clear,
    compute_divergence, diffuse_sweep, pressure_sweep, project, seed_test_pattern, Splat,
};

/// Scalars shared by every stage of one tick
#[derive(Clone, Copy, Debug)]
pub(super) struct TickContext {
    pub(super) dt: f32,
    /// None disables diffusion for this tick
    pub(super) alpha: Option<f32>,
    pub(super) decay: f32,
    pub(super) splat: Option<Splat>,
}

/// One planned stage execution; `sweep` counts Jacobi repetitions from 0
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct Pass {
    pub(super) stage: StageId,
    pub(super) sweep: u32,
}

impl Pass {
    fn once(stage: StageId) -> Self {
        Pass { stage, sweep: 0 }
    }
}

/// Order of passes for one tick.
///
/// One Jacobi iteration is a full ping-pong round trip, so `k` diffuse
/// iterations plan `2k` sweeps and `m` pressure iterations plan `2m`.
pub(super) fn plan_tick(
    seed: bool,
    ctx: &TickContext,
    diffuse_iterations: u32,
    pressure_iterations: u32,
) -> Vec<Pass> {
    let diffuse_sweeps = if ctx.alpha.is_some() { diffuse_iterations * 2 } else { 0 };
    let pressure_sweeps = pressure_iterations * 2;
    let mut plan = Vec::with_capacity(8 + (diffuse_sweeps + pressure_sweeps) as usize);

    if seed {
        plan.push(Pass::once(StageId::Seed));
    }
    if ctx.splat.is_some() {
        plan.push(Pass::once(StageId::Force));
    }
    plan.push(Pass::once(StageId::BoundaryVelocity));
    plan.push(Pass::once(StageId::Advection));
    plan.extend((0..diffuse_sweeps).map(|sweep| Pass { stage: StageId::Diffuse, sweep }));
    plan.push(Pass::once(StageId::Divergence));
    plan.push(Pass::once(StageId::Clear));
    plan.extend((0..pressure_sweeps).map(|sweep| Pass { stage: StageId::Pressure, sweep }));
    plan.push(Pass::once(StageId::BoundaryPressure));
    plan.push(Pass::once(StageId::Project));
    plan
}

/// Execute one pass. Ping-pong stages write the non-current buffer and
/// promote it; the rest work on a single buffer.
pub(super) fn run_stage(fields: &mut FieldStore, pass: Pass, ctx: &TickContext) {
    match pass.stage {
        StageId::Seed => {
            let (_, dst) = fields.fluid.roles();
            seed_test_pattern(dst);
            fields.fluid.swap();
        }
        StageId::Force => {
            let Some(splat) = ctx.splat else { return };
            let (src, dst) = fields.fluid.roles();
            apply_force(src, dst, &splat);
            fields.fluid.swap();
        }
        StageId::BoundaryVelocity => apply_velocity_boundary(fields.fluid.current_mut()),
        StageId::Advection => {
            let (src, dst) = fields.fluid.roles();
            advect(src, dst, ctx.dt);
            fields.fluid.swap();
        }
        StageId::Diffuse => {
            let Some(alpha) = ctx.alpha else { return };
            if pass.sweep == 0 {
                fields.diffusion_base.copy_from(fields.fluid.current());
            }
            let (src, dst) = fields.fluid.roles();
            diffuse_sweep(&fields.diffusion_base, src, dst, alpha);
            fields.fluid.swap();
        }
        StageId::Divergence => compute_divergence(fields.fluid.current(), &mut fields.divergence),
        StageId::Clear => clear(fields.pressure.current_mut()),
        StageId::Pressure => {
            let (src, dst) = fields.pressure.roles();
            pressure_sweep(src, &fields.divergence, dst);
            fields.pressure.swap();
        }
        StageId::BoundaryPressure => apply_pressure_boundary(fields.pressure.current_mut()),
        StageId::Project => {
            let (src, dst) = fields.fluid.roles();
            project(src, fields.pressure.current(), dst, ctx.decay);
            fields.fluid.swap();
        }
    }
}
