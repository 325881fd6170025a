//! Runtime-tunable settings. Each setter validates a candidate parameter
//! set and only commits it when the whole set is still valid.

use crate::core::FluidResult;
use crate::domain::params::SolverParams;
use crate::systems::Dispatch;

use super::perf_stats::PerfStats;
use super::FluidCore;

fn update(core: &mut FluidCore, edit: impl FnOnce(&mut SolverParams)) -> FluidResult<()> {
    let mut candidate = core.params.clone();
    edit(&mut candidate);
    candidate.validate()?;
    core.params = candidate;
    Ok(())
}

pub(super) fn set_viscosity(core: &mut FluidCore, viscosity: f32) -> FluidResult<()> {
    update(core, |p| p.viscosity = viscosity)?;
    log::debug!("viscosity = {}", viscosity);
    Ok(())
}

pub(super) fn set_diffuse_iterations(core: &mut FluidCore, iterations: u32) -> FluidResult<()> {
    update(core, |p| p.diffuse_iterations = iterations)?;
    log::debug!("diffuse iterations = {}", iterations);
    Ok(())
}

pub(super) fn set_pressure_iterations(core: &mut FluidCore, iterations: u32) -> FluidResult<()> {
    update(core, |p| p.pressure_iterations = iterations)?;
    log::debug!("pressure iterations = {}", iterations);
    Ok(())
}

pub(super) fn set_decay(core: &mut FluidCore, decay: f32) -> FluidResult<()> {
    update(core, |p| p.decay = decay)?;
    log::debug!("decay = {}", decay);
    Ok(())
}

pub(super) fn set_velocity_scale(core: &mut FluidCore, scale: f32) -> FluidResult<()> {
    update(core, |p| p.velocity_scale = scale)?;
    log::debug!("velocity scale = {}", scale);
    Ok(())
}

pub(super) fn set_dispatch(core: &mut FluidCore, dispatch: Dispatch) {
    core.dispatch = dispatch;
    log::debug!("dispatch = {:?}", dispatch);
}

pub(super) fn enable_perf_metrics(core: &mut FluidCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(core: &FluidCore) -> PerfStats {
    core.perf_stats.clone()
}
