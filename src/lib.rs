//! Eddy Engine - stable fluids solver in WASM
//!
//! Semi-Lagrangian advection, implicit Jacobi diffusion and a pressure
//! projection on an N x N cell grid with reflecting walls.
//!
//! Architecture:
//! - core/        - error type and safety macros
//! - spatial/     - field grids, ping-pong buffers, bilinear sampler
//! - domain/      - cell layout, parameters, stage ids, pointer input
//! - systems/     - per-stage kernels and the parallel-for
//! - simulation/  - solver lifecycle, tick scheduler, wasm facade

// Utils with safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod spatial;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🌀 Eddy fluid engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Resolutions must be a multiple of this
#[wasm_bindgen]
pub fn tile_size() -> u32 { spatial::TILE_SIZE }

// Re-export main types
pub use crate::core::{FluidError, FluidResult};
pub use domain::cell::FluidCell;
pub use domain::input::PointerEvent;
pub use domain::params::SolverParams;
pub use domain::stages::StageId;
pub use simulation::{FieldLayout, FluidCore, FluidSimulation, PerfStats};
pub use spatial::FieldGrid;
pub use systems::Dispatch;
