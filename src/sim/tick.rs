//! Per-frame simulation step
//!
//! Advances paddles and ball by the wall-clock time since the previous frame.

use glam::Vec2;

use super::collision::{hits_bottom_wall, hits_paddle, hits_top_wall, out_of_bounds};
use super::state::{EndReason, GameState};

/// Input for a single frame, produced by the input sampler
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Movement intent for the right paddle (zero or unit vertical)
    pub player1: Vec2,
    /// Movement intent for the left paddle
    pub player2: Vec2,
    /// A movement key was held this frame (sets the start latch)
    pub start: bool,
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.start && state.start() {
        log::info!("Game started on frame {}", state.frames);
    }
    state.frames += 1;

    state.player1.movement = input.player1;
    state.player2.movement = input.player2;
    state.player1.integrate(dt);
    state.player2.integrate(dt);

    // Ball stays frozen until the latch is set
    if !state.started {
        return;
    }

    state.ball.launch_if_resting();

    // Independent checks, both walls are tested every frame
    if hits_top_wall(state.ball.pos) {
        state.ball.bounce_vertical();
    }
    if hits_bottom_wall(state.ball.pos) {
        state.ball.bounce_vertical();
    }

    if out_of_bounds(state.ball.pos) {
        if state.running {
            log::info!(
                "Ball left the playfield at ({:.2}, {:.2})",
                state.ball.pos.x,
                state.ball.pos.y
            );
        }
        state.end(EndReason::BallOut);
    }

    if hits_paddle(state.ball.pos, &state.player1) {
        log::trace!("Ball hit player 1 paddle");
        state.ball.bounce_horizontal();
    }
    if hits_paddle(state.ball.pos, &state.player2) {
        log::trace!("Ball hit player 2 paddle");
        state.ball.bounce_horizontal();
    }

    state.ball.cap_velocity();
    state.ball.integrate(dt);
}
