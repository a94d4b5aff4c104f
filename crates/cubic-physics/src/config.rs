use serde::{Deserialize, Serialize};

/// Tunables for [`PhysicsSystem`](crate::PhysicsSystem). Velocities are in blocks
/// per tick; `dt` scales them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    #[serde(default = "default_gravity")]
    pub gravity: f32,
    #[serde(default = "default_move_speed")]
    pub move_speed: f32,
    #[serde(default = "default_jump_power")]
    pub jump_power: f32,
    #[serde(default = "default_player_width")]
    pub player_width: f32,
    #[serde(default = "default_player_height")]
    pub player_height: f32,
    /// Horizontal damping applied every tick.
    #[serde(default = "default_friction")]
    pub friction: f32,
    /// Sample spacing of [`PhysicsSystem::raycast`](crate::PhysicsSystem::raycast).
    #[serde(default = "default_ray_step")]
    pub ray_step: f32,
}

fn default_gravity() -> f32 {
    0.015
}
fn default_move_speed() -> f32 {
    0.1
}
fn default_jump_power() -> f32 {
    0.35
}
fn default_player_width() -> f32 {
    0.6
}
fn default_player_height() -> f32 {
    1.8
}
fn default_friction() -> f32 {
    0.9
}
pub(crate) fn default_ray_step() -> f32 {
    0.1
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: default_gravity(),
            move_speed: default_move_speed(),
            jump_power: default_jump_power(),
            player_width: default_player_width(),
            player_height: default_player_height(),
            friction: default_friction(),
            ray_step: default_ray_step(),
        }
    }
}
