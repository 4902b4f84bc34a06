//! Duo Pong - A two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Frame simulation (paddle/ball kinematics, collisions, transforms)
//! - `input`: Keyboard tracking and per-frame movement intents
//! - `renderer`: wgpu textured-quad pipeline
//! - `platform`: Native platform helpers (frame timing)

pub mod error;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use error::AssetError;
pub use input::{KeyboardState, sample_input};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Window
    pub const WINDOW_TITLE: &str = "Duo Pong";
    pub const WINDOW_WIDTH: u32 = 640;
    pub const WINDOW_HEIGHT: u32 = 480;

    /// Visible playfield (world units), also the orthographic projection bounds
    pub const ARENA_HALF_WIDTH: f32 = 5.0;
    pub const ARENA_HALF_HEIGHT: f32 = 3.75;
    /// Ball reflects off top/bottom once past this line
    pub const WALL_BOUNCE_Y: f32 = 3.5;

    /// Paddle defaults
    pub const PADDLE_X: f32 = 4.75;
    pub const PADDLE_HALF_HEIGHT: f32 = 1.0;
    /// Paddles stop accepting intent past this height (checked before moving)
    pub const PADDLE_TRAVEL_LIMIT: f32 = 3.0;
    pub const PADDLE_SPEED: f32 = 2.0;
    /// Uniform scale applied to the paddle quad
    pub const PADDLE_SCALE: f32 = 2.0;
    /// Inner edge of the paddle collision band; the outer edge is the arena edge
    pub const PADDLE_BAND_INNER: f32 = 4.5;

    /// Ball defaults
    pub const BALL_SPEED: f32 = 4.0;
    /// Velocity given to a resting ball on the first started frame
    pub const BALL_LAUNCH: Vec2 = Vec2::new(0.5, 0.5);

    /// Background
    pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 1.0];
}

/// Resolve a path under the crate's `assets/` directory
pub fn asset_path(relative: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join(relative)
}
