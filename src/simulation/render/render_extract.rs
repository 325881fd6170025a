//! Zero-copy views of the current generation for a JS renderer.
//!
//! Pointers stay valid until the next `step`, `clear_fields` or `shutdown`;
//! a tick may flip which physical buffer is current, so the host re-reads
//! them every frame.

use std::mem::size_of;

use crate::core::{FluidError, FluidResult};
use crate::domain::cell::FluidCell;

use super::{FieldLayoutData, FluidCore};

/// Fluid buffer as interleaved RGBA f32 (vx, vy, c, reserved)
pub(super) fn fluid_ptr(core: &FluidCore) -> FluidResult<*const f32> {
    Ok(core.store("export fluid buffer")?.fluid.current().as_ptr() as *const f32)
}

pub(super) fn pressure_ptr(core: &FluidCore) -> FluidResult<*const f32> {
    Ok(core.store("export pressure buffer")?.pressure.current().as_ptr())
}

pub(super) fn divergence_ptr(core: &FluidCore) -> FluidResult<*const f32> {
    Ok(core.store("export divergence buffer")?.divergence.as_ptr())
}

pub(super) fn field_layout_data(core: &FluidCore) -> FluidResult<FieldLayoutData> {
    let fields = core
        .fields
        .as_ref()
        .ok_or(FluidError::InvalidState { operation: "export field layout" })?;
    let fluid = fields.fluid.current();
    let pressure = fields.pressure.current();
    let divergence = &fields.divergence;
    let floats_per_cell = size_of::<FluidCell>() / size_of::<f32>();

    Ok(FieldLayoutData {
        resolution: fields.resolution(),
        fluid_ptr: fluid.as_ptr(),
        fluid_len_elements: fluid.size() * floats_per_cell,
        fluid_len_bytes: fluid.byte_len(),
        pressure_ptr: pressure.as_ptr(),
        pressure_len_elements: pressure.size(),
        pressure_len_bytes: pressure.byte_len(),
        divergence_ptr: divergence.as_ptr(),
        divergence_len_elements: divergence.size(),
        divergence_len_bytes: divergence.byte_len(),
    })
}

#[cfg(test)]
mod tests {
    use crate::domain::params::SolverParams;

    use super::*;

    #[test]
    fn layout_reports_four_floats_per_cell() {
        let params = SolverParams { resolution: 8, ..SolverParams::default() };
        let core = FluidCore::new(params).unwrap();
        let layout = field_layout_data(&core).unwrap();
        assert_eq!(layout.resolution, 8);
        assert_eq!(layout.fluid_len_elements, 256);
        assert_eq!(layout.fluid_len_bytes, 1024);
        assert_eq!(layout.pressure_len_elements, 64);
        assert_eq!(layout.divergence_len_bytes, 256);
    }

    #[test]
    fn fluid_pointer_tracks_current_buffer() {
        let params = SolverParams { resolution: 8, ..SolverParams::default() };
        let mut core = FluidCore::new(params).unwrap();
        let before = fluid_ptr(&core).unwrap();
        assert_eq!(before, core.current_velocity_concentration().unwrap().as_ptr() as *const f32);
        core.step(0.016, None).unwrap();
        let after = fluid_ptr(&core).unwrap();
        assert_eq!(after, core.current_velocity_concentration().unwrap().as_ptr() as *const f32);
    }
}
