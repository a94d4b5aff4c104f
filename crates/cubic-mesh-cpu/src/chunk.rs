use cubic_geom::{Aabb, Vec3};
use cubic_world::CellCoord;

use crate::mesh_build::MeshBuild;

/// Geometry for one cell. Vertex positions are cell-local; `origin` places them
/// in the world.
#[derive(Clone, Debug, PartialEq)]
pub struct CellMesh {
    pub coord: CellCoord,
    pub origin: Vec3,
    pub bbox: Aabb,
    pub mesh: MeshBuild,
}

impl CellMesh {
    #[inline]
    pub fn face_count(&self) -> usize {
        self.mesh.face_count()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    /// Vertex `i` translated into world space.
    pub fn world_vertex(&self, i: usize) -> Option<Vec3> {
        let p = self.mesh.pos.get(i * 3..i * 3 + 3)?;
        Some(self.origin + Vec3::new(p[0], p[1], p[2]))
    }
}
