//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in one [`GameState`] value owned by
//! the frame driver.

use glam::Vec2;

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ball resting at the centre, waiting for the first movement key
    Waiting,
    /// Active gameplay
    Playing,
    /// Run ended (quit or ball left the playfield)
    Ended,
}

/// Why the run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Window closed
    Quit,
    /// Ball crossed the left or right edge
    BallOut,
}

/// Which edge of the playfield a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// +1 for the right edge, -1 for the left
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// A player paddle. x is fixed by its side, only y moves.
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    /// Movement intent for the current frame (zero or unit vertical)
    pub movement: Vec2,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            pos: Vec2::new(side.sign() * PADDLE_X, 0.0),
            movement: Vec2::ZERO,
        }
    }

    pub fn half_height(&self) -> f32 {
        PADDLE_HALF_HEIGHT
    }

    /// Integrate the current movement intent. Not clamped afterwards, so the
    /// paddle may end up to one frame of travel past the travel limit.
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.movement * PADDLE_SPEED * dt;
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub speed: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            speed: BALL_SPEED,
        }
    }
}

impl Ball {
    pub fn is_resting(&self) -> bool {
        self.vel.x == 0.0 && self.vel.y == 0.0
    }

    /// Give a resting ball the fixed diagonal launch velocity
    pub fn launch_if_resting(&mut self) -> bool {
        if self.is_resting() {
            self.vel = BALL_LAUNCH;
            true
        } else {
            false
        }
    }

    pub fn bounce_vertical(&mut self) {
        self.vel.y *= -1.0;
    }

    pub fn bounce_horizontal(&mut self) {
        self.vel.x *= -1.0;
    }

    /// Cap the direction vector at unit length
    pub fn cap_velocity(&mut self) {
        if self.vel.length() > 1.0 {
            self.vel = self.vel.normalize();
        }
    }

    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * self.speed * dt;
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Right paddle, arrow keys
    pub player1: Paddle,
    /// Left paddle, W/S
    pub player2: Paddle,
    pub ball: Ball,
    /// One-way latch, set by the first movement key
    pub started: bool,
    /// Cleared on quit or when the ball leaves the playfield
    pub running: bool,
    /// First reason the run ended
    pub end_reason: Option<EndReason>,
    /// Frames simulated so far
    pub frames: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            player1: Paddle::new(Side::Right),
            player2: Paddle::new(Side::Left),
            ball: Ball::default(),
            started: false,
            running: true,
            end_reason: None,
            frames: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        if !self.running {
            GamePhase::Ended
        } else if self.started {
            GamePhase::Playing
        } else {
            GamePhase::Waiting
        }
    }

    /// Set the start latch. Returns true on the transition.
    pub fn start(&mut self) -> bool {
        let newly = !self.started;
        self.started = true;
        newly
    }

    /// End the run. Only the first reason is kept.
    pub fn end(&mut self, reason: EndReason) {
        self.running = false;
        self.end_reason.get_or_insert(reason);
    }

    pub fn quit(&mut self) {
        self.end(EndReason::Quit);
    }

    /// Paddles in draw order
    pub fn paddles(&self) -> [&Paddle; 2] {
        [&self.player1, &self.player2]
    }
}
