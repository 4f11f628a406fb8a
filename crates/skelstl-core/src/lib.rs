//! Skeletal Model STL Exporter Core
//!
//! This crate contains the core pipeline for converting a posed rigid-body
//! skeletal model into world-frame STL meshes:
//! - Model: deserialized model snapshot (bodies, joints, coordinate values)
//! - Placement: world-frame transforms for bodies and joint-axis proxies
//! - TriangleMesh: triangle soup with rigid transform and concatenation
//! - Export: per-part and combined ASCII STL output

pub mod constants;
pub mod export;
pub mod mesh;
pub mod model;
pub mod placement;
pub mod primitive;
pub mod stl;
pub mod transform;

pub use constants::*;
pub use export::*;
pub use mesh::*;
pub use model::*;
pub use placement::*;
pub use primitive::*;
pub use stl::*;
pub use transform::*;
