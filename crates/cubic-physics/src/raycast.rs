use cubic_blocks::{BlockCatalog, BlockType};
use cubic_geom::Vec3;
use cubic_world::VoxelSource;

/// Longest ray either query will walk; larger `max_distance` values are clamped.
pub const MAX_RAY_DISTANCE: f32 = 1024.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaycastResult {
    pub hit: bool,
    /// Sample point that hit, or the last sample on a miss.
    pub position: Vec3,
    /// Face normal of the hit; zero on a miss.
    pub normal: Vec3,
    pub block_x: i32,
    pub block_y: i32,
    pub block_z: i32,
    /// Type that was hit, or the last sampled type on a miss.
    pub block_type: BlockType,
    pub distance: f32,
}

impl RaycastResult {
    fn miss(position: Vec3, block_type: BlockType, distance: f32) -> Self {
        let (block_x, block_y, block_z) = position.floor_i32();
        Self {
            hit: false,
            position,
            normal: Vec3::ZERO,
            block_x,
            block_y,
            block_z,
            block_type,
            distance,
        }
    }

    #[inline]
    pub fn block(&self) -> (i32, i32, i32) {
        (self.block_x, self.block_y, self.block_z)
    }

    /// The empty cell in front of the hit face, where a new block would go.
    #[inline]
    pub fn adjacent(&self) -> (i32, i32, i32) {
        (
            self.block_x + self.normal.x as i32,
            self.block_y + self.normal.y as i32,
            self.block_z + self.normal.z as i32,
        )
    }
}

#[inline]
fn is_hit(catalog: &BlockCatalog, ty: BlockType) -> bool {
    !ty.is_air() && catalog.is_solid(ty)
}

/// Dominant axis of `delta`, ties resolved X > Y > Z, pointing back toward the origin.
fn dominant_normal(delta: Vec3) -> Vec3 {
    let (ax, ay, az) = (delta.x.abs(), delta.y.abs(), delta.z.abs());
    let back = |d: f32| if d > 0.0 { -1.0 } else { 1.0 };
    if ax >= ay && ax >= az {
        Vec3::new(back(delta.x), 0.0, 0.0)
    } else if ay >= az {
        Vec3::new(0.0, back(delta.y), 0.0)
    } else {
        Vec3::new(0.0, 0.0, back(delta.z))
    }
}

/// Fixed-step march: samples every `step` along the ray, starting one step
/// out. Anything thinner than `step` along the ray can be skipped.
pub(crate) fn march<W: VoxelSource + ?Sized>(
    world: &W,
    catalog: &BlockCatalog,
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
    step: f32,
) -> RaycastResult {
    let max_distance = max_distance.min(MAX_RAY_DISTANCE);
    let len = direction.length();
    if len < 1e-6 || max_distance <= 0.0 {
        return RaycastResult::miss(origin, BlockType::AIR, max_distance.max(0.0));
    }
    let dir = direction / len;
    let advance = dir * step;
    let steps = (max_distance / step).ceil() as usize;

    let mut p = origin;
    let mut last = BlockType::AIR;
    for _ in 0..steps {
        p += advance;
        let (bx, by, bz) = p.floor_i32();
        let ty = world.voxel(bx, by, bz);
        if is_hit(catalog, ty) {
            return RaycastResult {
                hit: true,
                position: p,
                normal: dominant_normal(p - origin),
                block_x: bx,
                block_y: by,
                block_z: bz,
                block_type: ty,
                distance: origin.distance(p),
            };
        }
        last = ty;
    }
    RaycastResult::miss(p, last, max_distance)
}

#[inline]
fn inv_or_max(v: f32) -> f32 {
    if v.abs() < 1e-8 { f32::MAX } else { 1.0 / v.abs() }
}

#[inline]
fn step_sign(v: f32) -> i32 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// Exact voxel traversal (Amanatides-Woo). Reports the entry point into the hit
/// cell and the face crossed to get there; a ray starting inside a solid block
/// hits at distance 0 with a zero normal.
pub(crate) fn traverse<W: VoxelSource + ?Sized>(
    world: &W,
    catalog: &BlockCatalog,
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
) -> RaycastResult {
    let max_distance = max_distance.min(MAX_RAY_DISTANCE);
    let len = direction.length();
    if len < 1e-6 || max_distance <= 0.0 {
        return RaycastResult::miss(origin, BlockType::AIR, max_distance.max(0.0));
    }
    let d = direction / len;

    let (mut vx, mut vy, mut vz) = origin.floor_i32();
    let (sx, sy, sz) = (step_sign(d.x), step_sign(d.y), step_sign(d.z));
    let (invx, invy, invz) = (inv_or_max(d.x), inv_or_max(d.y), inv_or_max(d.z));
    let tdx = if sx == 0 { f32::MAX } else { invx };
    let tdy = if sy == 0 { f32::MAX } else { invy };
    let tdz = if sz == 0 { f32::MAX } else { invz };

    let boundary = |o: f32, s: i32, inv: f32| -> f32 {
        let f = o - o.floor();
        match s {
            1 => (1.0 - f) * inv,
            -1 => f * inv,
            _ => f32::MAX,
        }
    };
    let mut tmx = boundary(origin.x, sx, invx);
    let mut tmy = boundary(origin.y, sy, invy);
    let mut tmz = boundary(origin.z, sz, invz);

    let mut normal = Vec3::ZERO;
    let mut t = 0.0f32;
    let mut last = BlockType::AIR;
    // A ray of length L crosses at most L+1 planes per axis.
    let max_cells = 3 * (max_distance.ceil() as usize + 1) + 1;
    for _ in 0..max_cells {
        if t > max_distance {
            break;
        }
        let ty = world.voxel(vx, vy, vz);
        if is_hit(catalog, ty) {
            return RaycastResult {
                hit: true,
                position: origin + d * t,
                normal,
                block_x: vx,
                block_y: vy,
                block_z: vz,
                block_type: ty,
                distance: t,
            };
        }
        last = ty;
        if tmx < tmy && tmx < tmz {
            vx = vx.saturating_add(sx);
            t = tmx;
            tmx += tdx;
            normal = Vec3::new(-sx as f32, 0.0, 0.0);
        } else if tmy < tmz {
            vy = vy.saturating_add(sy);
            t = tmy;
            tmy += tdy;
            normal = Vec3::new(0.0, -sy as f32, 0.0);
        } else {
            vz = vz.saturating_add(sz);
            t = tmz;
            tmz += tdz;
            normal = Vec3::new(0.0, 0.0, -sz as f32);
        }
    }
    RaycastResult::miss(origin + d * max_distance, last, max_distance)
}
