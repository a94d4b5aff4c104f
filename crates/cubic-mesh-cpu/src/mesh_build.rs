use crate::constants::{FLOATS_PER_FACE, INDICES_PER_FACE, TRIANGLES_PER_FACE};
use crate::face::Face;

/// Flat vertex/normal/index buffers for one cell.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MeshBuild {
    pub pos: Vec<f32>,
    pub norm: Vec<f32>,
    pub idx: Vec<u32>,
}

impl MeshBuild {
    /// Pre-reserve capacity for `n_faces` faces.
    #[inline]
    pub fn reserve_faces(&mut self, n_faces: usize) {
        self.pos.reserve(n_faces * FLOATS_PER_FACE);
        self.norm.reserve(n_faces * FLOATS_PER_FACE);
        self.idx.reserve(n_faces * INDICES_PER_FACE);
    }

    /// Appends one face of the unit cube at local `(x, y, z)`.
    pub fn add_face(&mut self, face: Face, x: f32, y: f32, z: f32) {
        let base = (self.pos.len() / 3) as u32;
        let n = face.normal();
        for c in face.corners() {
            self.pos.extend_from_slice(&[x + c[0], y + c[1], z + c[2]]);
            self.norm.extend_from_slice(&[n.x, n.y, n.z]);
        }
        self.idx.extend_from_slice(&[
            base,
            base + 1,
            base + 2,
            base + 2,
            base + 1,
            base + 3,
        ]);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idx.is_empty()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.idx.len() / INDICES_PER_FACE
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.face_count() * TRIANGLES_PER_FACE
    }
}
