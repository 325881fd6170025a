use wasm_bindgen::prelude::*;

use crate::domain::stages::StageId;

#[wasm_bindgen]
#[derive(Clone, Debug)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    /// Accumulated per stage, all sweeps of a Jacobi stage included
    pub(super) stage_ms: [f64; StageId::COUNT],
    pub(super) stages_run: u32,
    pub(super) diffuse_sweeps: u32,
    pub(super) pressure_sweeps: u32,
    pub(super) force_applied: bool,
    pub(super) residual_divergence: f32,
    pub(super) memory_bytes: u32,
    pub(super) grid_size: u32,
    pub(super) tick: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(crate) fn record_stage(&mut self, stage: StageId, ms: f64) {
        self.stage_ms[stage.index()] += ms;
        self.stages_run += 1;
        match stage {
            StageId::Diffuse => self.diffuse_sweeps += 1,
            StageId::Pressure => self.pressure_sweeps += 1,
            StageId::Force => self.force_applied = true,
            _ => {}
        }
    }

    pub fn stage(&self, stage: StageId) -> f64 {
        self.stage_ms[stage.index()]
    }
}

impl Default for PerfStats {
    fn default() -> Self {
        PerfStats {
            step_ms: 0.0,
            stage_ms: [0.0; StageId::COUNT],
            stages_run: 0,
            diffuse_sweeps: 0,
            pressure_sweeps: 0,
            force_applied: false,
            residual_divergence: 0.0,
            memory_bytes: 0,
            grid_size: 0,
            tick: 0,
        }
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn seed_ms(&self) -> f64 { self.stage(StageId::Seed) }
    #[wasm_bindgen(getter)]
    pub fn force_ms(&self) -> f64 { self.stage(StageId::Force) }
    #[wasm_bindgen(getter)]
    pub fn boundary_ms(&self) -> f64 {
        self.stage(StageId::BoundaryVelocity) + self.stage(StageId::BoundaryPressure)
    }
    #[wasm_bindgen(getter)]
    pub fn advection_ms(&self) -> f64 { self.stage(StageId::Advection) }
    #[wasm_bindgen(getter)]
    pub fn diffuse_ms(&self) -> f64 { self.stage(StageId::Diffuse) }
    #[wasm_bindgen(getter)]
    pub fn divergence_ms(&self) -> f64 { self.stage(StageId::Divergence) }
    #[wasm_bindgen(getter)]
    pub fn clear_ms(&self) -> f64 { self.stage(StageId::Clear) }
    #[wasm_bindgen(getter)]
    pub fn pressure_ms(&self) -> f64 { self.stage(StageId::Pressure) }
    #[wasm_bindgen(getter)]
    pub fn project_ms(&self) -> f64 { self.stage(StageId::Project) }
    #[wasm_bindgen(getter)]
    pub fn stages_run(&self) -> u32 { self.stages_run }
    #[wasm_bindgen(getter)]
    pub fn diffuse_sweeps(&self) -> u32 { self.diffuse_sweeps }
    #[wasm_bindgen(getter)]
    pub fn pressure_sweeps(&self) -> u32 { self.pressure_sweeps }
    #[wasm_bindgen(getter)]
    pub fn force_applied(&self) -> bool { self.force_applied }
    #[wasm_bindgen(getter)]
    pub fn residual_divergence(&self) -> f32 { self.residual_divergence }
    #[wasm_bindgen(getter)]
    pub fn memory_bytes(&self) -> u32 { self.memory_bytes }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
    #[wasm_bindgen(getter)]
    pub fn tick(&self) -> u32 { self.tick }
}
