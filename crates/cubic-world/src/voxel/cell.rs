use cubic_blocks::BlockType;

/// Dense cube of `size^3` block codes, laid out `(y * size + z) * size + x`.
#[derive(Clone, Debug)]
pub struct Cell {
    size: usize,
    blocks: Box<[BlockType]>,
}

impl Cell {
    /// All-air cell.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            blocks: vec![BlockType::AIR; size * size * size].into_boxed_slice(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        (y * self.size + z) * self.size + x
    }

    #[inline]
    pub fn get_local(&self, x: usize, y: usize, z: usize) -> BlockType {
        self.blocks[self.idx(x, y, z)]
    }

    #[inline]
    pub fn set_local(&mut self, x: usize, y: usize, z: usize, ty: BlockType) {
        let i = self.idx(x, y, z);
        self.blocks[i] = ty;
    }

    #[inline]
    pub fn is_all_air(&self) -> bool {
        self.blocks.iter().all(|b| b.is_air())
    }

    pub fn non_air_count(&self) -> usize {
        self.blocks.iter().filter(|b| !b.is_air()).count()
    }

    /// Non-air voxels as `(lx, ly, lz, type)` in storage order.
    pub fn iter_non_air(&self) -> impl Iterator<Item = (usize, usize, usize, BlockType)> + '_ {
        let size = self.size;
        self.blocks
            .iter()
            .enumerate()
            .filter(|(_, b)| !b.is_air())
            .map(move |(i, b)| {
                let x = i % size;
                let z = (i / size) % size;
                let y = i / (size * size);
                (x, y, z, *b)
            })
    }
}
