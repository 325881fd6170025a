use wasm_bindgen::prelude::*;

use crate::core::FluidError;
use crate::domain::input::PointerEvent;
use crate::domain::params::SolverParams;
use crate::systems::Dispatch;

use super::perf_stats::PerfStats;
use super::FluidCore;

fn to_js(err: FluidError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct FieldLayout {
    resolution: u32,
    fluid_ptr: u32,
    fluid_len_elements: u32,
    fluid_len_bytes: u32,
    pressure_ptr: u32,
    pressure_len_elements: u32,
    pressure_len_bytes: u32,
    divergence_ptr: u32,
    divergence_len_elements: u32,
    divergence_len_bytes: u32,
}

#[wasm_bindgen]
impl FieldLayout {
    #[wasm_bindgen(getter)]
    pub fn resolution(&self) -> u32 { self.resolution }

    #[wasm_bindgen(getter)]
    pub fn fluid_ptr(&self) -> u32 { self.fluid_ptr }
    #[wasm_bindgen(getter)]
    pub fn fluid_len_elements(&self) -> u32 { self.fluid_len_elements }
    #[wasm_bindgen(getter)]
    pub fn fluid_len_bytes(&self) -> u32 { self.fluid_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn pressure_ptr(&self) -> u32 { self.pressure_ptr }
    #[wasm_bindgen(getter)]
    pub fn pressure_len_elements(&self) -> u32 { self.pressure_len_elements }
    #[wasm_bindgen(getter)]
    pub fn pressure_len_bytes(&self) -> u32 { self.pressure_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn divergence_ptr(&self) -> u32 { self.divergence_ptr }
    #[wasm_bindgen(getter)]
    pub fn divergence_len_elements(&self) -> u32 { self.divergence_len_elements }
    #[wasm_bindgen(getter)]
    pub fn divergence_len_bytes(&self) -> u32 { self.divergence_len_bytes }
}

#[wasm_bindgen]
pub struct FluidSimulation {
    core: FluidCore,
}

#[wasm_bindgen]
impl FluidSimulation {
    /// Create a solver; throws on an invalid parameter set
    #[wasm_bindgen(constructor)]
    pub fn new(
        resolution: u32,
        viscosity: f32,
        diffuse_iterations: u32,
        pressure_iterations: u32,
        decay: f32,
        velocity_scale: f32,
    ) -> Result<FluidSimulation, JsValue> {
        let params = SolverParams::new(
            resolution,
            viscosity,
            diffuse_iterations,
            pressure_iterations,
            decay,
            velocity_scale,
        );
        FluidCore::new(params).map(|core| Self { core }).map_err(to_js)
    }

    /// Create a solver from a camelCase JSON parameter document
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<FluidSimulation, JsValue> {
        FluidCore::from_json(json).map(|core| Self { core }).map_err(to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn resolution(&self) -> u32 { self.core.resolution() }

    #[wasm_bindgen(getter)]
    pub fn tick(&self) -> u64 { self.core.tick() }

    #[wasm_bindgen(getter)]
    pub fn shut_down(&self) -> bool { self.core.is_shut_down() }

    /// Current parameter set as JSON
    #[wasm_bindgen(js_name = paramsJson)]
    pub fn params_json(&self) -> String {
        self.core.params_json()
    }

    /// Advance one tick with no pointer over the canvas
    pub fn step(&mut self, dt: f32) -> Result<(), JsValue> {
        self.core.step(dt, None).map_err(to_js)
    }

    /// Advance one tick with the pointer at (x, y) in cell coordinates
    pub fn step_with_pointer(&mut self, dt: f32, x: f32, y: f32, button_held: bool) -> Result<(), JsValue> {
        let event = PointerEvent { position: (x, y), button_held };
        self.core.step(dt, Some(event)).map_err(to_js)
    }

    pub fn set_viscosity(&mut self, viscosity: f32) -> Result<(), JsValue> {
        self.core.set_viscosity(viscosity).map_err(to_js)
    }

    pub fn set_diffuse_iterations(&mut self, iterations: u32) -> Result<(), JsValue> {
        self.core.set_diffuse_iterations(iterations).map_err(to_js)
    }

    pub fn set_pressure_iterations(&mut self, iterations: u32) -> Result<(), JsValue> {
        self.core.set_pressure_iterations(iterations).map_err(to_js)
    }

    pub fn set_decay(&mut self, decay: f32) -> Result<(), JsValue> {
        self.core.set_decay(decay).map_err(to_js)
    }

    pub fn set_velocity_scale(&mut self, scale: f32) -> Result<(), JsValue> {
        self.core.set_velocity_scale(scale).map_err(to_js)
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Keep stage kernels on the calling thread instead of the rayon pool
    pub fn set_sequential_dispatch(&mut self, sequential: bool) {
        self.core.set_dispatch(if sequential { Dispatch::Sequential } else { Dispatch::Parallel });
    }

    /// Dye brush; returns the number of cells touched
    pub fn inject_concentration(&mut self, cx: f32, cy: f32, radius: f32, amount: f32) -> Result<u32, JsValue> {
        self.core.inject_concentration(cx, cy, radius, amount).map_err(to_js)
    }

    pub fn clear_fields(&mut self) -> Result<(), JsValue> {
        self.core.clear_fields().map_err(to_js)
    }

    pub fn residual_divergence(&self) -> Result<f32, JsValue> {
        self.core.residual_divergence().map_err(to_js)
    }

    /// Interleaved (vx, vy, c, reserved) f32 cells, null after shutdown
    pub fn fluid_ptr(&self) -> *const f32 {
        self.core.fluid_ptr().unwrap_or(std::ptr::null())
    }

    pub fn pressure_ptr(&self) -> *const f32 {
        self.core.pressure_ptr().unwrap_or(std::ptr::null())
    }

    pub fn divergence_ptr(&self) -> *const f32 {
        self.core.divergence_ptr().unwrap_or(std::ptr::null())
    }

    /// Cells per exported field, row-major N * N
    pub fn cell_count(&self) -> usize {
        let n = self.core.resolution() as usize;
        n * n
    }

    pub fn field_layout(&self) -> Result<FieldLayout, JsValue> {
        let data = self.core.field_layout_data().map_err(to_js)?;
        Ok(FieldLayout {
            resolution: data.resolution,
            fluid_ptr: data.fluid_ptr as u32,
            fluid_len_elements: data.fluid_len_elements as u32,
            fluid_len_bytes: data.fluid_len_bytes as u32,
            pressure_ptr: data.pressure_ptr as u32,
            pressure_len_elements: data.pressure_len_elements as u32,
            pressure_len_bytes: data.pressure_len_bytes as u32,
            divergence_ptr: data.divergence_ptr as u32,
            divergence_len_elements: data.divergence_len_elements as u32,
            divergence_len_bytes: data.divergence_len_bytes as u32,
        })
    }

    /// Release field storage; later calls throw
    pub fn shutdown(&mut self) {
        self.core.shutdown();
    }
}
