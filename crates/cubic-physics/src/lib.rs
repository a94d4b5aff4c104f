//! Swept-AABB movement, block raycasts, and column queries against a voxel world.
#![forbid(unsafe_code)]

mod collision;
mod config;
mod raycast;
mod system;

pub use collision::{Collision, first_collision};
pub use config::PhysicsConfig;
pub use raycast::{MAX_RAY_DISTANCE, RaycastResult};
pub use system::{PhysicsSystem, StepResult};
