//! Spatial - field storage and sampling
//!
//! - grid/     N x N field grids with checked cell access
//! - buffers   ping-pong pairs and the per-solver field store
//! - sampler   bilinear interpolation used by advection

pub mod grid;
pub mod buffers;
pub mod sampler;

pub use buffers::{FieldStore, PingPong};
pub use grid::{FieldGrid, CELL_SIZE, TILE_SIZE};
pub use sampler::{sample, Bilinear};
