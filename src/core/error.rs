//! Solver error type
//!
//! Everything the solver can reject is reported through [`FluidError`].
//! Numerical degeneracies (non-positive viscosity, zero timestep) are not
//! errors: the affected stage turns into a no-op.

use thiserror::Error;

/// Result alias used across the engine.
pub type FluidResult<T> = Result<T, FluidError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Resolution is zero or not a whole number of dispatch tiles.
    #[error("resolution {resolution} must be a positive multiple of the tile size {tile_size}")]
    InvalidResolution { resolution: u32, tile_size: u32 },

    /// Jacobi iteration count outside its allowed window.
    #[error("{name} = {value} is outside the allowed range [{min}, {max}]")]
    IterationsOutOfRange {
        name: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    /// Scalar parameter that is not finite or not in its domain.
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },

    /// Parameter JSON could not be decoded.
    #[error("failed to parse solver parameters: {0}")]
    ConfigParse(String),

    /// Negative or non-finite timestep passed to `step`.
    #[error("timestep must be finite and >= 0, got {dt}")]
    InvalidTimestep { dt: f32 },

    /// Operation attempted after the field storage was released.
    #[error("cannot {operation}: solver has been shut down")]
    InvalidState { operation: &'static str },
}

impl FluidError {
    /// True for errors raised while validating a parameter set.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            FluidError::InvalidResolution { .. }
                | FluidError::IterationsOutOfRange { .. }
                | FluidError::InvalidParameter { .. }
                | FluidError::ConfigParse(_)
        )
    }
}

impl From<serde_json::Error> for FluidError {
    fn from(err: serde_json::Error) -> Self {
        FluidError::ConfigParse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_are_classified() {
        let err = FluidError::InvalidResolution { resolution: 12, tile_size: 8 };
        assert!(err.is_configuration());
        assert!(!FluidError::InvalidTimestep { dt: -1.0 }.is_configuration());
        assert!(!FluidError::InvalidState { operation: "step" }.is_configuration());
    }

    #[test]
    fn messages_name_the_offending_value() {
        let err = FluidError::IterationsOutOfRange {
            name: "pressureIterations",
            value: 81,
            min: 1,
            max: 80,
        };
        assert_eq!(
            err.to_string(),
            "pressureIterations = 81 is outside the allowed range [1, 80]"
        );
    }
}
