use eddy_engine::{FluidCore, FluidError, SolverParams};

#[test]
fn manifest_round_trips_through_solver() {
    let json = r#"{
        "resolution": 64,
        "viscosity": 0.0005,
        "diffuseIterations": 6,
        "pressureIterations": 60,
        "decay": 0.98,
        "velocityScale": 2.5,
        "seedTestPattern": true
    }"#;
    let core = FluidCore::from_json(json).unwrap();
    let params = core.params();
    assert_eq!(params.resolution, 64);
    assert_eq!(params.diffuse_iterations, 6);
    assert_eq!(params.velocity_scale, 2.5);
    assert!(params.seed_test_pattern);

    let reparsed = SolverParams::from_json(&core.params_json()).unwrap();
    assert_eq!(&reparsed, params);
}

#[test]
fn malformed_json_is_a_configuration_error() {
    let err = FluidCore::from_json("{ resolution: ").err().unwrap();
    assert!(matches!(err, FluidError::ConfigParse(_)));
    assert!(err.is_configuration());
}

#[test]
fn out_of_range_iterations_are_rejected() {
    let err = FluidCore::from_json(r#"{"pressureIterations": 0}"#).err().unwrap();
    assert_eq!(
        err,
        FluidError::IterationsOutOfRange {
            name: "pressureIterations",
            value: 0,
            min: 1,
            max: 80,
        }
    );
    assert!(FluidCore::from_json(r#"{"diffuseIterations": 21}"#).is_err());
    assert!(FluidCore::from_json(r#"{"decay": 1.01}"#).is_err());
    assert!(FluidCore::from_json(r#"{"resolution": 100}"#).is_err());
}
