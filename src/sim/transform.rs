//! Model and camera matrices
//!
//! Model transforms are rebuilt from positions on every call.

use glam::{Mat4, Vec3};

use super::state::{Ball, Paddle};
use crate::consts::*;

impl Paddle {
    /// `T(pos) * S(2, 2, 1)`: scale in local space, then translate
    pub fn transform(&self) -> Mat4 {
        Mat4::from_translation(self.pos.extend(0.0))
            * Mat4::from_scale(Vec3::new(PADDLE_SCALE, PADDLE_SCALE, 1.0))
    }
}

impl Ball {
    /// Translation only, the ball quad is not scaled
    pub fn transform(&self) -> Mat4 {
        Mat4::from_translation(self.pos.extend(0.0))
    }
}

/// Orthographic projection covering the visible playfield
pub fn projection_matrix() -> Mat4 {
    Mat4::orthographic_rh(
        -ARENA_HALF_WIDTH,
        ARENA_HALF_WIDTH,
        -ARENA_HALF_HEIGHT,
        ARENA_HALF_HEIGHT,
        -1.0,
        1.0,
    )
}

pub fn view_matrix() -> Mat4 {
    Mat4::IDENTITY
}
