//! Domain - cell layout, solver parameters, stage identifiers, host input

pub mod cell;
pub mod params;
pub mod stages;
pub mod input;
