//! CPU meshing: face-culled cell meshes and a dirty-tracking mesh cache.
#![forbid(unsafe_code)]

mod build;
mod cache;
mod chunk;
pub mod constants;
mod face;
mod mesh_build;

pub use build::build_cell_mesh;
pub use cache::{MeshCache, RebuildStats};
pub use chunk::CellMesh;
pub use face::Face;
pub use mesh_build::MeshBuild;
