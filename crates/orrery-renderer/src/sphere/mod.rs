//! Sphere rendering: UV mesh generation, GPU buffers, MVP math, and the
//! wgpu pipeline.
//!
//! Geometry is generated on the CPU by [`SphereGeometry::generate`] and
//! uploaded once into a [`SphereMesh`], which owns its buffers and draws
//! itself into a caller-prepared render pass.

mod buffers;
pub mod matrix;
mod mesh;
mod pipeline;
mod types;

pub use buffers::*;
pub use mesh::*;
pub use pipeline::*;
pub use types::*;
