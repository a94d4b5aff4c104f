use std::sync::Arc;

use cubic_blocks::{BlockCatalog, BlockType};
use cubic_geom::{Aabb, Vec3};
use cubic_world::VoxelSource;

use crate::collision::{Collision, first_collision, solid_blocks_in};
use crate::config::{PhysicsConfig, default_ray_step};
use crate::raycast::{self, RaycastResult};

/// Outcome of one [`PhysicsSystem::update`] tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepResult {
    pub position: Vec3,
    pub on_ground: bool,
    /// Horizontal hit if any, otherwise the vertical one.
    pub collision: Option<Collision>,
}

/// Movement state for a single actor.
///
/// The actor's position is its bottom-center and is owned by the caller; the
/// system keeps only velocity and ground contact between ticks. Each tick
/// resolves the vertical axis first, then both horizontal axes as one combined
/// move that either succeeds entirely or is rejected entirely.
pub struct PhysicsSystem {
    catalog: Arc<BlockCatalog>,
    config: PhysicsConfig,
    velocity: Vec3,
    on_ground: bool,
}

impl PhysicsSystem {
    pub fn new(catalog: Arc<BlockCatalog>, config: PhysicsConfig) -> Self {
        Self {
            catalog,
            config,
            velocity: Vec3::ZERO,
            on_ground: false,
        }
    }

    #[inline]
    pub fn catalog(&self) -> &Arc<BlockCatalog> {
        &self.catalog
    }

    #[inline]
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PhysicsConfig) {
        self.config = config;
    }

    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    #[inline]
    pub fn on_ground(&self) -> bool {
        self.on_ground
    }

    /// Collision box for an actor standing at `feet`.
    #[inline]
    pub fn actor_box(&self, feet: Vec3) -> Aabb {
        Aabb::from_feet(feet, self.config.player_width, self.config.player_height)
    }

    /// Advances one tick and returns the resolved position.
    pub fn update<W: VoxelSource + ?Sized>(
        &mut self,
        world: &W,
        position: Vec3,
        dt: f32,
    ) -> StepResult {
        let mut pos = position;
        self.velocity.y -= self.config.gravity * dt;
        self.velocity.x *= self.config.friction;
        self.velocity.z *= self.config.friction;

        let dy = self.velocity.y * dt;
        let motion_y = Vec3::new(0.0, dy, 0.0);
        let swept_y = self.actor_box(pos).translated(motion_y);
        let vertical = first_collision(world, &self.catalog, motion_y, swept_y);
        if vertical.is_some() {
            if self.velocity.y < 0.0 {
                self.on_ground = true;
                if let Some(top) = self.landing_height(world, swept_y, pos.y) {
                    pos.y = top;
                }
            }
            self.velocity.y = 0.0;
        } else {
            pos.y += dy;
            self.on_ground = false;
        }

        let dx = self.velocity.x * dt;
        let dz = self.velocity.z * dt;
        // Tested from the post-vertical position, so this tick's fall or landing
        // already applies to the horizontal sweep.
        let swept_xz = self.actor_box(pos).translated(Vec3::new(dx, 0.0, dz));
        let mut horizontal = None;
        if dx != 0.0 {
            horizontal = first_collision(world, &self.catalog, Vec3::new(dx, 0.0, 0.0), swept_xz);
        }
        if horizontal.is_none() && dz != 0.0 {
            horizontal = first_collision(world, &self.catalog, Vec3::new(0.0, 0.0, dz), swept_xz);
        }
        if horizontal.is_some() {
            self.velocity.x = 0.0;
            self.velocity.z = 0.0;
        } else {
            pos.x += dx;
            pos.z += dz;
        }

        log::trace!(
            target: "physics",
            "tick pos=({:.3},{:.3},{:.3}) vel=({:.3},{:.3},{:.3}) ground={}",
            pos.x,
            pos.y,
            pos.z,
            self.velocity.x,
            self.velocity.y,
            self.velocity.z,
            self.on_ground
        );
        StepResult {
            position: pos,
            on_ground: self.on_ground,
            collision: horizontal.or(vertical),
        }
    }

    // Highest solid top inside a rejected downward sweep that the feet passed
    // through this tick.
    fn landing_height<W: VoxelSource + ?Sized>(
        &self,
        world: &W,
        swept: Aabb,
        feet_y: f32,
    ) -> Option<f32> {
        solid_blocks_in(world, &self.catalog, swept)
            .map(|(_, y, _, _)| y as f32 + 1.0)
            .filter(|&top| top <= feet_y && top > swept.min.y)
            .reduce(f32::max)
    }

    /// Starts a jump when `on_ground`; returns the new vertical velocity, or 0.
    pub fn jump(&mut self, on_ground: bool) -> f32 {
        if on_ground {
            self.velocity.y = self.config.jump_power;
            self.config.jump_power
        } else {
            0.0
        }
    }

    /// Fixed-step selection ray.
    pub fn raycast<W: VoxelSource + ?Sized>(
        &self,
        world: &W,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
    ) -> RaycastResult {
        let step = if self.config.ray_step > 0.0 {
            self.config.ray_step
        } else {
            default_ray_step()
        };
        raycast::march(world, &self.catalog, origin, direction, max_distance, step)
    }

    /// Grid-exact alternative to [`raycast`](Self::raycast); never skips thin geometry.
    pub fn raycast_exact<W: VoxelSource + ?Sized>(
        &self,
        world: &W,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
    ) -> RaycastResult {
        raycast::traverse(world, &self.catalog, origin, direction, max_distance)
    }

    /// One above the topmost solid block at or below `start_y` in column `(x, z)`,
    /// scanning down to `y = 0`.
    pub fn ground_height<W: VoxelSource + ?Sized>(
        &self,
        world: &W,
        x: i32,
        z: i32,
        start_y: i32,
    ) -> Option<i32> {
        (0..=start_y)
            .rev()
            .find(|&y| self.is_solid_block(world.voxel(x, y, z)))
            .map(|y| y + 1)
    }

    #[inline]
    fn is_solid_block(&self, ty: BlockType) -> bool {
        !ty.is_air() && self.catalog.is_solid(ty)
    }

    /// Air or a non-solid type such as water.
    pub fn is_position_empty<W: VoxelSource + ?Sized>(&self, world: &W, x: i32, y: i32, z: i32) -> bool {
        !self.is_solid_block(world.voxel(x, y, z))
    }

    pub fn can_place_block<W: VoxelSource + ?Sized>(&self, world: &W, x: i32, y: i32, z: i32) -> bool {
        y >= 0 && self.is_position_empty(world, x, y, z)
    }

    pub fn can_break_block<W: VoxelSource + ?Sized>(&self, world: &W, x: i32, y: i32, z: i32) -> bool {
        y >= 0 && self.is_solid_block(world.voxel(x, y, z))
    }

    /// Samples half a block above the feet.
    pub fn is_in_liquid<W: VoxelSource + ?Sized>(&self, world: &W, position: Vec3) -> bool {
        let ty = world.voxel(
            position.x.floor() as i32,
            (position.y + 0.5).floor() as i32,
            position.z.floor() as i32,
        );
        ty == BlockType::WATER
    }
}
