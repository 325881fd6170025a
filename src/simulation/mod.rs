//! FluidCore - stable fluids solver lifecycle and tick scheduling
//!
//! Lifecycle: `new` (init) -> `step` / queries -> `shutdown`.
//!
//! - init/      parameter validation, allocation, runtime settings
//! - step/      tick planning, stage dispatch, pointer tracking
//! - commands/  host edits between ticks (dye brush, reset)
//! - render/    raw buffer layout for a JS renderer
//! - perf/      optional per-stage timings
//!
//! The core owns every field buffer through `FieldStore`. Only the
//! scheduler flips ping-pong roles, and only between stages.

use crate::core::{FluidError, FluidResult};
use crate::domain::cell::FluidCell;
use crate::domain::input::PointerEvent;
use crate::domain::params::SolverParams;
use crate::domain::stages::StageId;
use crate::spatial::buffers::FieldStore;
use crate::spatial::grid::FieldGrid;
use crate::systems::Dispatch;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/pointer.rs"]
mod pointer;
#[path = "step/dispatch.rs"]
mod dispatch;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::{FieldLayout, FluidSimulation};
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;
use pointer::PointerTracker;

pub(crate) struct FieldLayoutData {
    pub(crate) resolution: u32,
    pub(crate) fluid_ptr: *const FluidCell,
    pub(crate) fluid_len_elements: usize,
    pub(crate) fluid_len_bytes: usize,
    pub(crate) pressure_ptr: *const f32,
    pub(crate) pressure_len_elements: usize,
    pub(crate) pressure_len_bytes: usize,
    pub(crate) divergence_ptr: *const f32,
    pub(crate) divergence_len_elements: usize,
    pub(crate) divergence_len_bytes: usize,
}

/// The solver
pub struct FluidCore {
    params: SolverParams,
    /// None once shut down
    fields: Option<FieldStore>,
    pointer: PointerTracker,

    // State
    tick: u64,
    last_stages: Vec<StageId>,

    // Execution
    dispatch: Dispatch,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl FluidCore {
    /// Validate `params` and allocate every field, zeroed
    pub fn new(params: SolverParams) -> FluidResult<Self> {
        init::create_fluid_core(params)
    }

    /// Same as `new`, with parameters from a JSON document
    pub fn from_json(json: &str) -> FluidResult<Self> {
        init::create_fluid_core(SolverParams::from_json(json)?)
    }

    pub fn params(&self) -> &SolverParams { &self.params }

    pub fn params_json(&self) -> String { self.params.to_json() }

    pub fn resolution(&self) -> u32 { self.params.resolution }

    /// Completed ticks since init (or the last `clear_fields`)
    pub fn tick(&self) -> u64 { self.tick }

    pub fn is_shut_down(&self) -> bool { self.fields.is_none() }

    /// Stages executed by the last successful tick, in order
    pub fn last_stage_sequence(&self) -> &[StageId] { &self.last_stages }

    // === SETTINGS ===

    pub fn set_viscosity(&mut self, viscosity: f32) -> FluidResult<()> {
        settings::set_viscosity(self, viscosity)
    }

    pub fn set_diffuse_iterations(&mut self, iterations: u32) -> FluidResult<()> {
        settings::set_diffuse_iterations(self, iterations)
    }

    pub fn set_pressure_iterations(&mut self, iterations: u32) -> FluidResult<()> {
        settings::set_pressure_iterations(self, iterations)
    }

    pub fn set_decay(&mut self, decay: f32) -> FluidResult<()> {
        settings::set_decay(self, decay)
    }

    pub fn set_velocity_scale(&mut self, scale: f32) -> FluidResult<()> {
        settings::set_velocity_scale(self, scale)
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// How stage kernels walk the grid on later ticks. Both modes produce
    /// the same bits; `Sequential` keeps every tick on the calling thread.
    pub fn set_dispatch(&mut self, dispatch: Dispatch) {
        settings::set_dispatch(self, dispatch);
    }

    pub fn dispatch(&self) -> Dispatch { self.dispatch }

    // === TICK ===

    /// Advance one tick. On error nothing is mutated.
    pub fn step(&mut self, dt: f32, pointer: Option<PointerEvent>) -> FluidResult<()> {
        step::step(self, dt, pointer)
    }

    // === QUERIES ===

    /// Latest velocity+concentration generation, valid until the next `step`
    pub fn current_velocity_concentration(&self) -> FluidResult<&FieldGrid<FluidCell>> {
        Ok(self.store("query velocity")?.fluid.current())
    }

    pub fn current_pressure(&self) -> FluidResult<&FieldGrid<f32>> {
        Ok(self.store("query pressure")?.pressure.current())
    }

    pub fn current_divergence(&self) -> FluidResult<&FieldGrid<f32>> {
        Ok(&self.store("query divergence")?.divergence)
    }

    /// Max |divergence| of the current velocity, measured after projection
    pub fn residual_divergence(&self) -> FluidResult<f32> {
        let fields = self.store("measure divergence")?;
        Ok(crate::systems::max_abs_divergence(fields.fluid.current()))
    }

    // === COMMANDS ===

    /// Add dye in a disc around (cx, cy); returns the number of cells touched
    pub fn inject_concentration(&mut self, cx: f32, cy: f32, radius: f32, amount: f32) -> FluidResult<u32> {
        commands::inject_concentration(self, cx, cy, radius, amount)
    }

    /// Zero every field and forget pointer history
    pub fn clear_fields(&mut self) -> FluidResult<()> {
        commands::clear_fields(self)
    }

    // === RENDER ===

    pub fn fluid_ptr(&self) -> FluidResult<*const f32> {
        render_extract::fluid_ptr(self)
    }

    pub fn pressure_ptr(&self) -> FluidResult<*const f32> {
        render_extract::pressure_ptr(self)
    }

    pub fn divergence_ptr(&self) -> FluidResult<*const f32> {
        render_extract::divergence_ptr(self)
    }

    pub(crate) fn field_layout_data(&self) -> FluidResult<FieldLayoutData> {
        render_extract::field_layout_data(self)
    }

    // === TEARDOWN ===

    /// Release all field storage. Later steps and queries fail with
    /// `InvalidState`; calling it twice is harmless.
    pub fn shutdown(&mut self) {
        if let Some(fields) = self.fields.take() {
            log::info!(
                "fluid solver shut down after {} ticks, released {} bytes",
                self.tick,
                fields.memory_bytes()
            );
        }
    }

    fn store(&self, operation: &'static str) -> FluidResult<&FieldStore> {
        self.fields.as_ref().ok_or(FluidError::InvalidState { operation })
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
