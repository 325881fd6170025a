use super::*;

fn params(resolution: u32) -> SolverParams {
    SolverParams { resolution, ..SolverParams::default() }
}

fn still_fluid(resolution: u32, decay: f32) -> FluidCore {
    let p = SolverParams {
        resolution,
        viscosity: 0.0,
        diffuse_iterations: 2,
        pressure_iterations: 4,
        decay,
        ..SolverParams::default()
    };
    FluidCore::new(p).unwrap()
}

#[test]
fn init_rejects_partial_tiles() {
    let err = FluidCore::new(params(12)).err();
    assert_eq!(
        err,
        Some(FluidError::InvalidResolution { resolution: 12, tile_size: 8 })
    );
    assert!(FluidCore::new(params(0)).is_err());
}

#[test]
fn init_allocates_zeroed_fields() {
    let core = FluidCore::new(params(16)).unwrap();
    let fluid = core.current_velocity_concentration().unwrap();
    assert_eq!(fluid.size(), 256);
    assert!(fluid.cells().iter().all(|c| *c == FluidCell::ZERO));
    assert!(core.current_pressure().unwrap().cells().iter().all(|p| *p == 0.0));
    assert_eq!(core.tick(), 0);
}

#[test]
fn from_json_uses_defaults_for_missing_keys() {
    let core = FluidCore::from_json(r#"{"resolution": 32, "decay": 0.9}"#).unwrap();
    assert_eq!(core.resolution(), 32);
    assert_eq!(core.params().decay, 0.9);
    assert_eq!(core.params().pressure_iterations, SolverParams::default().pressure_iterations);
}

#[test]
fn rejected_timestep_leaves_state_untouched() {
    let mut core = FluidCore::new(params(8)).unwrap();
    core.inject_concentration(4.0, 4.0, 1.0, 1.0).unwrap();
    let before = core.current_velocity_concentration().unwrap().clone();
    let roles = core.fields.as_ref().map(|f| f.fluid.current_index());

    for dt in [-0.5, f32::NAN, f32::INFINITY] {
        let err = core.step(dt, Some(PointerEvent::held(3.0, 4.0))).err();
        assert!(matches!(err, Some(FluidError::InvalidTimestep { .. })));
    }

    assert_eq!(core.tick(), 0);
    assert_eq!(core.fields.as_ref().map(|f| f.fluid.current_index()), roles);
    assert_eq!(core.current_velocity_concentration().unwrap(), &before);
    assert!(core.last_stage_sequence().is_empty());
}

#[test]
fn rejected_timestep_does_not_record_pointer() {
    let mut core = FluidCore::new(params(8)).unwrap();
    let _ = core.step(-1.0, Some(PointerEvent::held(3.0, 4.0)));
    core.step(0.016, Some(PointerEvent::held(4.0, 4.0))).unwrap();
    assert!(!core.last_stage_sequence().contains(&StageId::Force));
}

#[test]
fn zero_dt_runs_full_pipeline() {
    let mut core = FluidCore::new(params(8)).unwrap();
    core.step(0.0, None).unwrap();
    let stages = core.last_stage_sequence();
    assert_eq!(stages.first(), Some(&StageId::BoundaryVelocity));
    assert_eq!(stages.last(), Some(&StageId::Project));
    // dt = 0 turns diffusion off
    assert!(!stages.contains(&StageId::Diffuse));
    assert_eq!(core.tick(), 1);
}

#[test]
fn stage_sequence_counts_jacobi_round_trips() {
    let p = SolverParams {
        resolution: 8,
        viscosity: 0.1,
        diffuse_iterations: 2,
        pressure_iterations: 4,
        ..SolverParams::default()
    };
    let mut core = FluidCore::new(p).unwrap();
    core.step(0.016, Some(PointerEvent::hover(3.0, 4.0))).unwrap();
    core.step(0.016, Some(PointerEvent::held(4.0, 4.0))).unwrap();

    let stages = core.last_stage_sequence();
    let count = |id: StageId| stages.iter().filter(|s| **s == id).count();
    assert_eq!(stages[0], StageId::Force);
    assert_eq!(stages[1], StageId::BoundaryVelocity);
    assert_eq!(stages[2], StageId::Advection);
    assert_eq!(count(StageId::Diffuse), 4);
    assert_eq!(count(StageId::Pressure), 8);
    assert_eq!(count(StageId::Clear), 1);
    assert_eq!(stages[stages.len() - 2], StageId::BoundaryPressure);
    assert_eq!(stages.len(), 1 + 2 + 4 + 2 + 8 + 2);
}

#[test]
fn seed_pattern_runs_on_first_tick_only() {
    let p = SolverParams { resolution: 16, seed_test_pattern: true, ..SolverParams::default() };
    let mut core = FluidCore::new(p).unwrap();
    core.step(0.016, None).unwrap();
    assert_eq!(core.last_stage_sequence()[0], StageId::Seed);
    let dye: f32 = core.current_velocity_concentration().unwrap().cells().iter().map(|c| c.c).sum();
    assert!(dye > 0.0);

    core.step(0.016, None).unwrap();
    assert!(!core.last_stage_sequence().contains(&StageId::Seed));
}

#[test]
fn still_fluid_decays_concentration_exactly() {
    let mut core = still_fluid(16, 0.5);
    let touched = core.inject_concentration(8.0, 8.0, 2.0, 1.0).unwrap();
    assert_eq!(touched, 13);

    core.step(0.016, None).unwrap();
    core.step(0.016, None).unwrap();

    let fluid = core.current_velocity_concentration().unwrap();
    assert_eq!(fluid.get(8, 8).c, 0.25);
    assert_eq!(fluid.get(10, 8).c, 0.25);
    assert_eq!(fluid.get(3, 3).c, 0.0);
    assert!(fluid.cells().iter().all(|c| c.vx == 0.0 && c.vy == 0.0));
}

#[test]
fn shutdown_invalidates_later_calls() {
    let mut core = FluidCore::new(params(8)).unwrap();
    core.shutdown();
    assert!(core.is_shut_down());

    let state = |op| Some(FluidError::InvalidState { operation: op });
    assert_eq!(core.step(0.016, None).err(), state("step"));
    assert_eq!(core.current_velocity_concentration().err(), state("query velocity"));
    assert_eq!(core.current_pressure().err(), state("query pressure"));
    assert_eq!(core.current_divergence().err(), state("query divergence"));
    assert!(core.inject_concentration(1.0, 1.0, 1.0, 1.0).is_err());
    assert!(core.clear_fields().is_err());
    assert!(core.fluid_ptr().is_err());

    // second shutdown is a no-op
    core.shutdown();
    assert!(core.is_shut_down());
}

#[test]
fn clear_fields_resets_tick_and_buffers() {
    let mut core = FluidCore::new(params(8)).unwrap();
    core.inject_concentration(4.0, 4.0, 1.0, 2.0).unwrap();
    core.step(0.016, None).unwrap();
    core.clear_fields().unwrap();

    assert_eq!(core.tick(), 0);
    assert!(core.last_stage_sequence().is_empty());
    let fluid = core.current_velocity_concentration().unwrap();
    assert!(fluid.cells().iter().all(|c| *c == FluidCell::ZERO));
}

#[test]
fn inject_counts_interior_cells_in_disc() {
    let mut core = FluidCore::new(params(8)).unwrap();
    assert_eq!(core.inject_concentration(3.0, 3.0, 0.0, 1.0), Ok(1));
    assert_eq!(core.inject_concentration(4.0, 4.0, 1.0, 1.0), Ok(5));
    // only border cells are in reach
    assert_eq!(core.inject_concentration(0.0, 0.0, 1.0, 1.0), Ok(0));
    assert_eq!(core.current_velocity_concentration().unwrap().get(4, 4).c, 1.0);
    assert_eq!(core.current_velocity_concentration().unwrap().get(3, 3).c, 1.0);
    assert!(core.inject_concentration(4.0, 4.0, -1.0, 1.0).is_err());
}

#[test]
fn setters_validate_and_keep_previous_value() {
    let mut core = FluidCore::new(params(8)).unwrap();
    assert!(core.set_pressure_iterations(81).is_err());
    assert_eq!(core.params().pressure_iterations, SolverParams::default().pressure_iterations);
    assert!(core.set_decay(1.5).is_err());
    assert!(core.set_viscosity(f32::NAN).is_err());

    core.set_diffuse_iterations(20).unwrap();
    core.set_decay(0.0).unwrap();
    core.set_viscosity(-1.0).unwrap();
    core.set_velocity_scale(3.0).unwrap();
    assert_eq!(core.params().diffuse_iterations, 20);
    assert_eq!(core.params().velocity_scale, 3.0);
}

#[test]
fn perf_stats_count_sweeps_when_enabled() {
    let p = SolverParams {
        resolution: 8,
        viscosity: 0.1,
        diffuse_iterations: 3,
        pressure_iterations: 5,
        ..SolverParams::default()
    };
    let mut core = FluidCore::new(p).unwrap();

    core.step(0.016, None).unwrap();
    assert_eq!(core.get_perf_stats().pressure_sweeps(), 0);

    core.enable_perf_metrics(true);
    core.step(0.016, None).unwrap();
    let stats = core.get_perf_stats();
    assert_eq!(stats.diffuse_sweeps(), 6);
    assert_eq!(stats.pressure_sweeps(), 10);
    assert_eq!(stats.stages_run() as usize, core.last_stage_sequence().len());
    assert_eq!(stats.grid_size(), 8);
    assert_eq!(stats.tick(), 1);
    assert!(!stats.force_applied());
    assert!(stats.step_ms() >= 0.0);
}

#[test]
fn sequential_dispatch_reproduces_parallel_ticks_bit_for_bit() {
    let run = |dispatch: Dispatch| {
        let p = SolverParams {
            resolution: 32,
            viscosity: 0.05,
            diffuse_iterations: 4,
            pressure_iterations: 20,
            decay: 0.99,
            seed_test_pattern: true,
            ..SolverParams::default()
        };
        let mut core = FluidCore::new(p).unwrap();
        core.set_dispatch(dispatch);
        core.inject_concentration(16.0, 16.0, 5.0, 0.8).unwrap();
        core.step(0.016, Some(PointerEvent::hover(8.0, 10.0))).unwrap();
        for i in 0..6 {
            let x = 9.0 + 2.5 * i as f32;
            core.step(0.016, Some(PointerEvent::held(x, 12.0 + i as f32))).unwrap();
        }
        core.step(0.016, None).unwrap();
        core
    };

    let parallel = run(Dispatch::Parallel);
    let sequential = run(Dispatch::Sequential);
    assert_eq!(sequential.dispatch(), Dispatch::Sequential);
    assert_eq!(parallel.tick(), sequential.tick());

    let bits = |core: &FluidCore| -> Vec<u32> {
        let fluid = core.current_velocity_concentration().unwrap();
        fluid
            .cells()
            .iter()
            .flat_map(|c| [c.vx.to_bits(), c.vy.to_bits(), c.c.to_bits()])
            .chain(core.current_pressure().unwrap().cells().iter().map(|p| p.to_bits()))
            .chain(core.current_divergence().unwrap().cells().iter().map(|d| d.to_bits()))
            .collect()
    };
    assert_eq!(bits(&parallel), bits(&sequential));
    assert!(parallel
        .current_velocity_concentration()
        .unwrap()
        .cells()
        .iter()
        .any(|c| c.vx != 0.0));
}

#[test]
fn dispatch_setting_does_not_leak_past_the_tick() {
    let mut core = FluidCore::new(params(8)).unwrap();
    core.set_dispatch(Dispatch::Sequential);
    core.step(0.016, None).unwrap();
    assert_eq!(crate::systems::parallel::current_dispatch(), Dispatch::Parallel);
}
