use crate::core::{FluidError, FluidResult};

use super::FluidCore;

/// Host dye brush. Adds `amount` to the concentration of every interior
/// cell within `radius` of (cx, cy); border cells are rebuilt from their
/// inward neighbours on the next tick anyway.
pub(super) fn inject_concentration(
    core: &mut FluidCore,
    cx: f32,
    cy: f32,
    radius: f32,
    amount: f32,
) -> FluidResult<u32> {
    for (name, value) in [("cx", cx), ("cy", cy), ("amount", amount)] {
        if !value.is_finite() {
            return Err(FluidError::InvalidParameter { name, value, reason: "must be finite" });
        }
    }
    if !radius.is_finite() || radius < 0.0 {
        return Err(FluidError::InvalidParameter {
            name: "radius",
            value: radius,
            reason: "must be finite and >= 0",
        });
    }
    let fields = core
        .fields
        .as_mut()
        .ok_or(FluidError::InvalidState { operation: "inject concentration" })?;

    let n = fields.resolution();
    if n < 3 {
        return Ok(0);
    }
    let last = (n - 2) as f32;
    let x0 = (cx - radius).ceil().max(1.0);
    let x1 = (cx + radius).floor().min(last);
    let y0 = (cy - radius).ceil().max(1.0);
    let y1 = (cy + radius).floor().min(last);
    if x0 > x1 || y0 > y1 {
        return Ok(0);
    }

    let r2 = radius * radius;
    let field = fields.fluid.current_mut();
    let mut touched = 0u32;
    for y in y0 as u32..=y1 as u32 {
        for x in x0 as u32..=x1 as u32 {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            if dx * dx + dy * dy <= r2 {
                let mut cell = field.get(x, y);
                cell.c += amount;
                field.set(x, y, cell);
                touched += 1;
            }
        }
    }
    log::debug!("injected {} dye into {} cells at ({}, {})", amount, touched, cx, cy);
    Ok(touched)
}

pub(super) fn clear_fields(core: &mut FluidCore) -> FluidResult<()> {
    let fields = core
        .fields
        .as_mut()
        .ok_or(FluidError::InvalidState { operation: "clear fields" })?;
    fields.reset();
    core.pointer.reset();
    core.tick = 0;
    core.last_stages.clear();
    core.perf_stats.reset();
    log::info!("fluid fields cleared");
    Ok(())
}
