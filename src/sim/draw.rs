//! Ordered draw list handed to the renderer each frame

use glam::Mat4;

use super::state::GameState;

/// Which startup texture an entity is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureSlot {
    Player1,
    Player2,
    Ball,
}

impl TextureSlot {
    pub const ALL: [TextureSlot; 3] = [
        TextureSlot::Player1,
        TextureSlot::Player2,
        TextureSlot::Ball,
    ];

    /// File name under `assets/textures/`
    pub fn file_name(self) -> &'static str {
        match self {
            TextureSlot::Player1 => "player1_paddle.png",
            TextureSlot::Player2 => "player2_paddle.png",
            TextureSlot::Ball => "ball.png",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// One textured quad to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub transform: Mat4,
    pub texture: TextureSlot,
}

/// Paddle 1, paddle 2, then the ball
pub fn draw_list(state: &GameState) -> [DrawItem; 3] {
    let [player1, player2] = state.paddles();
    [
        DrawItem {
            transform: player1.transform(),
            texture: TextureSlot::Player1,
        },
        DrawItem {
            transform: player2.transform(),
            texture: TextureSlot::Player2,
        },
        DrawItem {
            transform: state.ball.transform(),
            texture: TextureSlot::Ball,
        },
    ]
}
