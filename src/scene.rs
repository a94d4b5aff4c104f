use cubic_blocks::BlockType;
use cubic_world::VoxelWorld;

/// Half-width of the demo platform in blocks.
pub const PLATFORM_RADIUS: i32 = 12;
pub const PLATFORM_TOP: i32 = 4;

/// Fills `world` with a small fixed scene: a layered platform, a pond, a tree
/// and a sand column. Returns the number of voxels written.
pub fn build_demo(world: &mut VoxelWorld) -> usize {
    let mut n = 0;
    let r = PLATFORM_RADIUS;
    for x in -r..=r {
        for z in -r..=r {
            for y in 0..=PLATFORM_TOP {
                let ty = match y {
                    0..=1 => BlockType::STONE,
                    PLATFORM_TOP => BlockType::GRASS,
                    _ => BlockType::DIRT,
                };
                world.set_voxel(x, y, z, ty);
                n += 1;
            }
        }
    }

    // Pond: replace the top layer with water.
    for x in 4..=7 {
        for z in -7..=-4 {
            world.set_voxel(x, PLATFORM_TOP, z, BlockType::WATER);
        }
    }

    let (tx, tz) = (-6, 5);
    for y in PLATFORM_TOP + 1..=PLATFORM_TOP + 4 {
        world.set_voxel(tx, y, tz, BlockType::WOOD);
        n += 1;
    }
    for dx in -2..=2 {
        for dz in -2..=2 {
            for dy in 3..=5 {
                if dx == 0 && dz == 0 && dy < 5 {
                    continue;
                }
                if dx * dx + dz * dz + (dy - 4) * (dy - 4) > 5 {
                    continue;
                }
                world.set_voxel(tx + dx, PLATFORM_TOP + dy, tz + dz, BlockType::LEAVES);
                n += 1;
            }
        }
    }

    for y in PLATFORM_TOP + 1..=PLATFORM_TOP + 3 {
        world.set_voxel(8, y, 8, BlockType::SAND);
        n += 1;
    }
    log::info!("demo scene: {} voxels in {} cells", n, world.cell_count());
    n
}
