//! Systems - per-cell stage kernels
//!
//! Each stage maps (source buffer(s), destination buffer, scalars) to a full
//! destination generation through `parallel::fill_cells`, except the two
//! boundary passes which rewrite the border ring of one buffer in place.

pub mod parallel;
pub mod force;
pub mod boundary;
pub mod advection;
pub mod diffuse;
pub mod divergence;
pub mod clear;
pub mod pressure;
pub mod project;
pub mod seed;

pub use advection::advect;
pub use boundary::{apply_pressure_boundary, apply_velocity_boundary};
pub use clear::clear;
pub use diffuse::diffuse_sweep;
pub use divergence::{compute_divergence, max_abs_divergence};
pub use force::{apply_force, Splat};
pub use parallel::{with_dispatch, Dispatch};
pub use pressure::pressure_sweep;
pub use project::project;
pub use seed::seed_test_pattern;
