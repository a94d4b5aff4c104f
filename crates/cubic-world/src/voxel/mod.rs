mod cell;
mod cell_coord;
mod world;

pub use cell::Cell;
pub use cell_coord::CellCoord;
pub use world::{BlockBounds, DEFAULT_CELL_SIZE, MAX_CELL_SIZE, VoxelData, VoxelWorld};

use cubic_blocks::BlockType;

/// Anything that can answer "which block is at this integer coordinate".
///
/// Implementations must be total: coordinates with no data read as `AIR`.
pub trait VoxelSource {
    fn voxel(&self, x: i32, y: i32, z: i32) -> BlockType;
}

impl<T: VoxelSource + ?Sized> VoxelSource for &T {
    #[inline]
    fn voxel(&self, x: i32, y: i32, z: i32) -> BlockType {
        (**self).voxel(x, y, z)
    }
}
