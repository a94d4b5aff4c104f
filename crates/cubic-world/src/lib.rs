//! Sparse, cell-partitioned voxel storage.
#![forbid(unsafe_code)]

pub mod voxel;

pub use voxel::{
    BlockBounds, Cell, CellCoord, DEFAULT_CELL_SIZE, MAX_CELL_SIZE, VoxelData, VoxelSource,
    VoxelWorld,
};
