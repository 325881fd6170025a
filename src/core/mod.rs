//! Core - error type and safety macros shared by every layer

#[macro_use]
pub mod utils;
pub mod error;

pub use error::{FluidError, FluidResult};
