use std::collections::BTreeSet;

use cubic_world::{CellCoord, VoxelWorld};
use hashbrown::HashMap;

use crate::build::build_cell_mesh;
use crate::chunk::CellMesh;

/// Outcome of one [`MeshCache::rebuild_dirty`] pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RebuildStats {
    /// Cells that now hold a mesh.
    pub built: usize,
    /// Cells whose mesh was dropped because nothing is visible any more.
    pub removed: usize,
    pub faces: usize,
}

/// Per-cell meshes plus the set of cells waiting for a rebuild.
///
/// Edits only mark cells dirty; the host calls [`rebuild_dirty`](Self::rebuild_dirty)
/// once per frame so a burst of edits rebuilds each cell once.
#[derive(Default)]
pub struct MeshCache {
    meshes: HashMap<CellCoord, CellMesh>,
    dirty: BTreeSet<CellCoord>,
}

impl MeshCache {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn invalidate(&mut self, coord: CellCoord) {
        self.dirty.insert(coord);
    }

    /// Marks the owning cell and every bordering cell of block `(x, y, z)`.
    pub fn note_edit(&mut self, world: &VoxelWorld, x: i32, y: i32, z: i32) {
        for coord in world.affected_cells(x, y, z) {
            self.dirty.insert(coord);
        }
    }

    /// Marks every allocated cell of `world`.
    pub fn invalidate_world(&mut self, world: &VoxelWorld) {
        self.dirty.extend(world.cell_coords());
    }

    /// Rebuilds `coord` immediately. The replacement is built before the old
    /// mesh is dropped; an empty result removes the entry.
    pub fn generate(&mut self, world: &VoxelWorld, coord: CellCoord) -> Option<&CellMesh> {
        self.dirty.remove(&coord);
        match build_cell_mesh(world, coord) {
            Some(mesh) => {
                self.meshes.insert(coord, mesh);
                self.meshes.get(&coord)
            }
            None => {
                self.meshes.remove(&coord);
                None
            }
        }
    }

    /// Rebuilds every dirty cell once, in ascending coordinate order.
    pub fn rebuild_dirty(&mut self, world: &VoxelWorld) -> RebuildStats {
        let mut stats = RebuildStats::default();
        let dirty = std::mem::take(&mut self.dirty);
        for coord in dirty {
            let had = self.meshes.contains_key(&coord);
            match self.generate(world, coord) {
                Some(mesh) => {
                    stats.built += 1;
                    stats.faces += mesh.face_count();
                }
                None if had => stats.removed += 1,
                None => {}
            }
        }
        if stats.built + stats.removed > 0 {
            log::debug!(
                target: "perf",
                "mesh_cache rebuilt={} removed={} faces={}",
                stats.built,
                stats.removed,
                stats.faces
            );
        }
        stats
    }

    #[inline]
    pub fn get(&self, coord: CellCoord) -> Option<&CellMesh> {
        self.meshes.get(&coord)
    }

    pub fn remove(&mut self, coord: CellCoord) -> Option<CellMesh> {
        self.dirty.remove(&coord);
        self.meshes.remove(&coord)
    }

    pub fn clear(&mut self) {
        self.meshes.clear();
        self.dirty.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    #[inline]
    pub fn dirty_count(&self) -> usize {
        self.dirty.len()
    }

    #[inline]
    pub fn is_dirty(&self, coord: CellCoord) -> bool {
        self.dirty.contains(&coord)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CellCoord, &CellMesh)> {
        self.meshes.iter()
    }

    pub fn total_faces(&self) -> usize {
        self.meshes.values().map(CellMesh::face_count).sum()
    }
}
