use serde::{Deserialize, Serialize};

/// Block type code stored one byte per voxel. `AIR` (0) is the absence of a block.
///
/// Any byte is representable so that codes read from malformed data survive a
/// round-trip; the catalog decides how unknown codes behave.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BlockType(pub u8);

impl BlockType {
    pub const AIR: BlockType = BlockType(0);
    pub const GRASS: BlockType = BlockType(1);
    pub const DIRT: BlockType = BlockType(2);
    pub const STONE: BlockType = BlockType(3);
    pub const WOOD: BlockType = BlockType(4);
    pub const LEAVES: BlockType = BlockType(5);
    pub const SAND: BlockType = BlockType(6);
    pub const WATER: BlockType = BlockType(7);

    /// Every built-in non-air type, in id order.
    pub const BUILTIN: [BlockType; 7] = [
        BlockType::GRASS,
        BlockType::DIRT,
        BlockType::STONE,
        BlockType::WOOD,
        BlockType::LEAVES,
        BlockType::SAND,
        BlockType::WATER,
    ];

    #[inline]
    pub const fn id(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_air(self) -> bool {
        self.0 == 0
    }
}

impl From<u8> for BlockType {
    fn from(value: u8) -> Self {
        BlockType(value)
    }
}

impl From<BlockType> for u8 {
    fn from(value: BlockType) -> Self {
        value.0
    }
}
