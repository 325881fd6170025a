use crate::core::FluidResult;
use crate::domain::params::SolverParams;
use crate::spatial::buffers::FieldStore;
use crate::systems::Dispatch;

use super::perf_stats::PerfStats;
use super::pointer::PointerTracker;
use super::FluidCore;

/// Validate, then allocate. A rejected parameter set allocates nothing.
pub(super) fn create_fluid_core(params: SolverParams) -> FluidResult<FluidCore> {
    params.validate()?;
    let fields = FieldStore::new(params.resolution);

    log::info!(
        "fluid solver ready: {}x{} cells, {} bytes, diffuse x{}, pressure x{}",
        params.resolution,
        params.resolution,
        fields.memory_bytes(),
        params.diffuse_iterations,
        params.pressure_iterations
    );

    Ok(FluidCore {
        params,
        fields: Some(fields),
        pointer: PointerTracker::default(),
        tick: 0,
        last_stages: Vec::new(),
        dispatch: Dispatch::default(),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}
