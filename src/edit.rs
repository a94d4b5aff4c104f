use cubic_blocks::BlockType;
use cubic_geom::{Aabb, Vec3};
use cubic_mesh_cpu::MeshCache;
use cubic_physics::{PhysicsSystem, RaycastResult};
use cubic_world::VoxelWorld;

/// Why an edit was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditRejected {
    NoTarget,
    BelowWorld,
    Occupied,
    NotBreakable,
    InsideActor,
    AirPlacement,
}

/// Owns the world together with the state that must follow its edits: the
/// mesh cache and the physics queries used to validate them.
pub struct Editor {
    pub world: VoxelWorld,
    pub meshes: MeshCache,
    pub physics: PhysicsSystem,
    edits: u64,
}

impl Editor {
    pub fn new(world: VoxelWorld, physics: PhysicsSystem) -> Self {
        let mut meshes = MeshCache::new();
        meshes.invalidate_world(&world);
        Self {
            world,
            meshes,
            physics,
            edits: 0,
        }
    }

    #[inline]
    pub fn edit_count(&self) -> u64 {
        self.edits
    }

    /// Selection ray from `eye` along `look`.
    pub fn target(&self, eye: Vec3, look: Vec3, reach: f32) -> RaycastResult {
        self.physics.raycast(&self.world, eye, look, reach)
    }

    pub fn break_block(&mut self, x: i32, y: i32, z: i32) -> Result<BlockType, EditRejected> {
        if y < 0 {
            return Err(EditRejected::BelowWorld);
        }
        if !self.physics.can_break_block(&self.world, x, y, z) {
            return Err(EditRejected::NotBreakable);
        }
        let old = self.world.get_voxel(x, y, z);
        self.world.remove_voxel(x, y, z);
        self.touch(x, y, z);
        log::debug!(target: "edit", "break {:?} at ({},{},{})", old, x, y, z);
        Ok(old)
    }

    /// Places `ty` unless the cell is solid or would overlap the actor at `actor_feet`.
    pub fn place_block(
        &mut self,
        x: i32,
        y: i32,
        z: i32,
        ty: BlockType,
        actor_feet: Option<Vec3>,
    ) -> Result<(), EditRejected> {
        if ty.is_air() {
            return Err(EditRejected::AirPlacement);
        }
        if y < 0 {
            return Err(EditRejected::BelowWorld);
        }
        if !self.physics.can_place_block(&self.world, x, y, z) {
            return Err(EditRejected::Occupied);
        }
        if let Some(feet) = actor_feet {
            let solid = self.world.catalog().is_solid(ty);
            if solid && self.physics.actor_box(feet).intersects(&Aabb::unit_block(x, y, z)) {
                return Err(EditRejected::InsideActor);
            }
        }
        self.world.set_voxel(x, y, z, ty);
        self.touch(x, y, z);
        log::debug!(target: "edit", "place {:?} at ({},{},{})", ty, x, y, z);
        Ok(())
    }

    /// Breaks whatever the ray hits.
    pub fn break_target(&mut self, hit: &RaycastResult) -> Result<BlockType, EditRejected> {
        if !hit.hit {
            return Err(EditRejected::NoTarget);
        }
        let (x, y, z) = hit.block();
        self.break_block(x, y, z)
    }

    /// Places against the face the ray hit.
    pub fn place_at_target(
        &mut self,
        hit: &RaycastResult,
        ty: BlockType,
        actor_feet: Option<Vec3>,
    ) -> Result<(i32, i32, i32), EditRejected> {
        if !hit.hit {
            return Err(EditRejected::NoTarget);
        }
        let (x, y, z) = hit.adjacent();
        self.place_block(x, y, z, ty, actor_feet)?;
        Ok((x, y, z))
    }

    fn touch(&mut self, x: i32, y: i32, z: i32) {
        self.edits += 1;
        self.meshes.note_edit(&self.world, x, y, z);
    }
}
