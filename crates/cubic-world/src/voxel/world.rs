use std::error::Error;
use std::sync::Arc;

use cubic_blocks::{BlockCatalog, BlockType};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::{Cell, CellCoord, VoxelSource};

pub const DEFAULT_CELL_SIZE: usize = 32;
/// Largest accepted cell edge; a cell is allocated densely (`size^3` bytes).
pub const MAX_CELL_SIZE: usize = 256;

/// One non-air voxel, as produced by [`VoxelWorld::all_voxels`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoxelData {
    #[serde(rename = "type")]
    pub ty: BlockType,
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// Inclusive block-coordinate bounds of all non-air voxels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockBounds {
    pub min: (i32, i32, i32),
    pub max: (i32, i32, i32),
}

/// Sparse world of block codes partitioned into cubic cells.
///
/// Cells are created on the first non-air write and live until [`clear`](Self::clear);
/// a missing cell reads as all air. Coordinates are unbounded: any `i32` triple
/// is a valid address, negatives included.
pub struct VoxelWorld {
    cell_size: i32,
    cells: HashMap<CellCoord, Cell>,
    catalog: Arc<BlockCatalog>,
}

impl VoxelWorld {
    /// World with the default cell size.
    pub fn new(catalog: Arc<BlockCatalog>) -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE as i32,
            cells: HashMap::new(),
            catalog,
        }
    }

    pub fn with_cell_size(
        catalog: Arc<BlockCatalog>,
        cell_size: usize,
    ) -> Result<Self, Box<dyn Error>> {
        if cell_size == 0 || cell_size > MAX_CELL_SIZE {
            return Err(format!("cell size must be within 1..={MAX_CELL_SIZE}, got {cell_size}").into());
        }
        Ok(Self {
            cell_size: cell_size as i32,
            cells: HashMap::new(),
            catalog,
        })
    }

    #[inline]
    pub fn cell_size(&self) -> usize {
        self.cell_size as usize
    }

    #[inline]
    pub fn catalog(&self) -> &Arc<BlockCatalog> {
        &self.catalog
    }

    #[inline]
    pub fn cell_coord_of(&self, x: i32, y: i32, z: i32) -> CellCoord {
        CellCoord::containing(x, y, z, self.cell_size)
    }

    /// Offset of block `(x, y, z)` inside its cell, always in `0..cell_size`.
    #[inline]
    pub fn local_offset(&self, x: i32, y: i32, z: i32) -> (usize, usize, usize) {
        let s = self.cell_size;
        (
            x.rem_euclid(s) as usize,
            y.rem_euclid(s) as usize,
            z.rem_euclid(s) as usize,
        )
    }

    #[inline]
    pub fn cell_origin(&self, coord: CellCoord) -> (i32, i32, i32) {
        coord.origin(self.cell_size)
    }

    pub fn get_voxel(&self, x: i32, y: i32, z: i32) -> BlockType {
        let Some(cell) = self.cells.get(&self.cell_coord_of(x, y, z)) else {
            return BlockType::AIR;
        };
        let (lx, ly, lz) = self.local_offset(x, y, z);
        cell.get_local(lx, ly, lz)
    }

    /// Writes `ty` at `(x, y, z)`. Writing air where no cell exists does nothing.
    pub fn set_voxel(&mut self, x: i32, y: i32, z: i32, ty: BlockType) {
        let coord = self.cell_coord_of(x, y, z);
        let (lx, ly, lz) = self.local_offset(x, y, z);
        if ty.is_air() && !self.cells.contains_key(&coord) {
            return;
        }
        let size = self.cell_size as usize;
        let cell = self.cells.entry(coord).or_insert_with(|| {
            log::trace!(target: "world", "allocating cell {:?}", coord);
            Cell::new(size)
        });
        cell.set_local(lx, ly, lz, ty);
    }

    #[inline]
    pub fn remove_voxel(&mut self, x: i32, y: i32, z: i32) {
        self.set_voxel(x, y, z, BlockType::AIR);
    }

    /// Catalog-resolved solidity at `(x, y, z)`.
    #[inline]
    pub fn is_solid_at(&self, x: i32, y: i32, z: i32) -> bool {
        self.catalog.is_solid(self.get_voxel(x, y, z))
    }

    /// Snapshot of every non-air voxel, ordered by cell coordinate.
    pub fn all_voxels(&self) -> Vec<VoxelData> {
        let mut out = Vec::new();
        for coord in self.cell_coords() {
            let (bx, by, bz) = self.cell_origin(coord);
            for (lx, ly, lz, ty) in self.cells[&coord].iter_non_air() {
                out.push(VoxelData {
                    ty,
                    x: bx + lx as i32,
                    y: by + ly as i32,
                    z: bz + lz as i32,
                });
            }
        }
        out
    }

    /// Writes every record back; the inverse of [`all_voxels`](Self::all_voxels).
    pub fn load_voxels<I>(&mut self, voxels: I) -> usize
    where
        I: IntoIterator<Item = VoxelData>,
    {
        let mut n = 0;
        for v in voxels {
            self.set_voxel(v.x, v.y, v.z, v.ty);
            n += 1;
        }
        n
    }

    pub fn bounds(&self) -> Option<BlockBounds> {
        let mut bounds: Option<BlockBounds> = None;
        for v in self.all_voxels() {
            let b = bounds.get_or_insert(BlockBounds {
                min: (v.x, v.y, v.z),
                max: (v.x, v.y, v.z),
            });
            b.min = (b.min.0.min(v.x), b.min.1.min(v.y), b.min.2.min(v.z));
            b.max = (b.max.0.max(v.x), b.max.1.max(v.y), b.max.2.max(v.z));
        }
        bounds
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn has_cell(&self, coord: CellCoord) -> bool {
        self.cells.contains_key(&coord)
    }

    #[inline]
    pub fn cell(&self, coord: CellCoord) -> Option<&Cell> {
        self.cells.get(&coord)
    }

    /// Coordinates of every allocated cell, sorted.
    pub fn cell_coords(&self) -> Vec<CellCoord> {
        let mut coords: Vec<CellCoord> = self.cells.keys().copied().collect();
        coords.sort_unstable();
        coords
    }

    /// Cells whose geometry can change when block `(x, y, z)` changes: the owning
    /// cell first, then every face/edge/corner neighbor the block borders.
    pub fn affected_cells(&self, x: i32, y: i32, z: i32) -> Vec<CellCoord> {
        let coord = self.cell_coord_of(x, y, z);
        let (lx, ly, lz) = self.local_offset(x, y, z);
        let last = self.cell_size as usize - 1;
        let offsets = |l: usize| -> Vec<i32> {
            let mut v = vec![0];
            if l == 0 {
                v.push(-1);
            }
            if l == last {
                v.push(1);
            }
            v
        };
        let (ox, oy, oz) = (offsets(lx), offsets(ly), offsets(lz));
        let mut affected = vec![coord];
        for &dx in &ox {
            for &dy in &oy {
                for &dz in &oz {
                    if dx == 0 && dy == 0 && dz == 0 {
                        continue;
                    }
                    let Some(n) = coord.checked_offset(dx, dy, dz) else {
                        continue;
                    };
                    if !affected.contains(&n) {
                        affected.push(n);
                    }
                }
            }
        }
        affected
    }
}

impl VoxelSource for VoxelWorld {
    #[inline]
    fn voxel(&self, x: i32, y: i32, z: i32) -> BlockType {
        self.get_voxel(x, y, z)
    }
}
