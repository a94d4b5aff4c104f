use cubic_blocks::{BlockCatalog, BlockType};
use cubic_geom::{Aabb, Vec3};
use cubic_world::VoxelSource;

/// A solid block found inside a swept box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Collision {
    /// Axis normal picked from the motion (X, then Y, then Z), opposing it.
    pub normal: Vec3,
    /// Center of the block that was hit.
    pub position: Vec3,
    pub block_type: BlockType,
    pub block: (i32, i32, i32),
}

/// Solid blocks whose unit cube overlaps `bbox`, in x, y, z nesting order.
pub(crate) fn solid_blocks_in<'a, W: VoxelSource + ?Sized>(
    world: &'a W,
    catalog: &'a BlockCatalog,
    bbox: Aabb,
) -> impl Iterator<Item = (i32, i32, i32, BlockType)> + 'a {
    let ((x0, y0, z0), (x1, y1, z1)) = bbox.block_range();
    (x0..=x1).flat_map(move |x| {
        (y0..=y1).flat_map(move |y| {
            (z0..=z1).filter_map(move |z| {
                let ty = world.voxel(x, y, z);
                if ty.is_air() || !catalog.is_solid(ty) {
                    return None;
                }
                Aabb::unit_block(x, y, z)
                    .intersects(&bbox)
                    .then_some((x, y, z, ty))
            })
        })
    })
}

#[inline]
fn motion_normal(motion: Vec3) -> Vec3 {
    if motion.x > 0.0 {
        Vec3::new(-1.0, 0.0, 0.0)
    } else if motion.x < 0.0 {
        Vec3::new(1.0, 0.0, 0.0)
    } else if motion.y > 0.0 {
        Vec3::new(0.0, -1.0, 0.0)
    } else if motion.y < 0.0 {
        Vec3::new(0.0, 1.0, 0.0)
    } else if motion.z > 0.0 {
        Vec3::new(0.0, 0.0, -1.0)
    } else if motion.z < 0.0 {
        Vec3::new(0.0, 0.0, 1.0)
    } else {
        Vec3::ZERO
    }
}

/// First solid block overlapping `swept`, with a normal derived from `motion`
/// rather than from penetration depth.
pub fn first_collision<W: VoxelSource + ?Sized>(
    world: &W,
    catalog: &BlockCatalog,
    motion: Vec3,
    swept: Aabb,
) -> Option<Collision> {
    let (x, y, z, ty) = solid_blocks_in(world, catalog, swept).next()?;
    Some(Collision {
        normal: motion_normal(motion),
        position: Vec3::new(x as f32 + 0.5, y as f32 + 0.5, z as f32 + 0.5),
        block_type: ty,
        block: (x, y, z),
    })
}
