use crate::core::{FluidError, FluidResult};
use crate::domain::input::PointerEvent;
use crate::systems::{max_abs_divergence, with_dispatch};

use super::dispatch::{plan_tick, run_stage, TickContext};
use super::FluidCore;
use super::PerfTimer;

/// Advance one tick.
///
/// Everything that can fail is checked before the first buffer is touched,
/// so an error leaves contents and ping-pong roles as they were.
pub(super) fn step(core: &mut FluidCore, dt: f32, pointer: Option<PointerEvent>) -> FluidResult<()> {
    if !dt.is_finite() || dt < 0.0 {
        return Err(FluidError::InvalidTimestep { dt });
    }
    let fields = core
        .fields
        .as_mut()
        .ok_or(FluidError::InvalidState { operation: "step" })?;

    let ctx = TickContext {
        dt,
        alpha: core.params.diffusion_alpha(dt),
        decay: core.params.decay,
        splat: core.pointer.advance(pointer, core.params.velocity_scale),
    };
    if ctx.alpha.is_none() {
        log::trace!("diffusion skipped (viscosity {}, dt {})", core.params.viscosity, dt);
    }

    let seed = core.params.seed_test_pattern && core.tick == 0;
    let plan = plan_tick(
        seed,
        &ctx,
        core.params.diffuse_iterations,
        core.params.pressure_iterations,
    );

    let perf_on = core.perf_enabled;
    if perf_on {
        core.perf_stats.reset();
    }
    let step_timer = PerfTimer::start();

    with_dispatch(core.dispatch, || {
        for &pass in &plan {
            let ((), ms) = PerfTimer::measure(perf_on, || run_stage(fields, pass, &ctx));
            if perf_on {
                core.perf_stats.record_stage(pass.stage, ms);
                log::trace!("{} #{}: {:.3} ms", pass.stage, pass.sweep, ms);
            }
        }
    });

    if perf_on {
        let stats = &mut core.perf_stats;
        stats.step_ms = step_timer.elapsed_ms();
        stats.residual_divergence = max_abs_divergence(fields.fluid.current());
        stats.memory_bytes = fields.memory_bytes() as u32;
        stats.grid_size = fields.resolution();
        stats.tick = core.tick as u32;
    }

    core.last_stages.clear();
    core.last_stages.extend(plan.iter().map(|p| p.stage));
    core.tick += 1;

    log::trace!(
        "tick {} done: {} passes, force {}",
        core.tick,
        plan.len(),
        ctx.splat.is_some()
    );
    Ok(())
}
