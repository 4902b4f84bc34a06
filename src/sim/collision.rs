//! Collision detection against the four playfield surfaces
//!
//! The ball is treated as a point. Walls and paddles are axis-aligned bands;
//! every check uses strict inequalities, so a ball sitting exactly on a
//! boundary does not register.

use glam::Vec2;

use super::state::{Paddle, Side};
use crate::consts::*;

/// Ball is above the top bounce line
#[inline]
pub fn hits_top_wall(ball_pos: Vec2) -> bool {
    ball_pos.y > WALL_BOUNCE_Y
}

/// Ball is below the bottom bounce line
#[inline]
pub fn hits_bottom_wall(ball_pos: Vec2) -> bool {
    ball_pos.y < -WALL_BOUNCE_Y
}

/// Ball has left the playfield horizontally (loss condition)
#[inline]
pub fn out_of_bounds(ball_pos: Vec2) -> bool {
    ball_pos.x > ARENA_HALF_WIDTH || ball_pos.x < -ARENA_HALF_WIDTH
}

/// Ball is inside the paddle's collision band and within its vertical reach
pub fn hits_paddle(ball_pos: Vec2, paddle: &Paddle) -> bool {
    let in_band = match paddle.side {
        Side::Right => ball_pos.x > PADDLE_BAND_INNER && ball_pos.x < ARENA_HALF_WIDTH,
        Side::Left => ball_pos.x < -PADDLE_BAND_INNER && ball_pos.x > -ARENA_HALF_WIDTH,
    };
    let reach = paddle.half_height();
    in_band && ball_pos.y > paddle.pos.y - reach && ball_pos.y < paddle.pos.y + reach
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walls() {
        assert!(hits_top_wall(Vec2::new(0.0, 3.6)));
        assert!(!hits_top_wall(Vec2::new(0.0, 3.5)));
        assert!(hits_bottom_wall(Vec2::new(1.0, -3.51)));
        assert!(!hits_bottom_wall(Vec2::new(1.0, -3.5)));
    }

    #[test]
    fn test_out_of_bounds() {
        assert!(out_of_bounds(Vec2::new(5.1, 0.0)));
        assert!(out_of_bounds(Vec2::new(-5.01, 2.0)));
        assert!(!out_of_bounds(Vec2::new(5.0, 0.0)));
        assert!(!out_of_bounds(Vec2::new(0.0, 10.0)));
    }

    #[test]
    fn test_right_paddle_band() {
        let paddle = Paddle::new(Side::Right);
        assert!(hits_paddle(Vec2::new(4.8, 0.0), &paddle));
        assert!(hits_paddle(Vec2::new(4.6, 0.99), &paddle));
        // Band edges are exclusive
        assert!(!hits_paddle(Vec2::new(4.5, 0.0), &paddle));
        assert!(!hits_paddle(Vec2::new(5.0, 0.0), &paddle));
        // Outside vertical reach
        assert!(!hits_paddle(Vec2::new(4.8, 1.0), &paddle));
        assert!(!hits_paddle(Vec2::new(4.8, -1.2), &paddle));
        // Mirror band belongs to the other paddle
        assert!(!hits_paddle(Vec2::new(-4.8, 0.0), &paddle));
    }

    #[test]
    fn test_left_paddle_follows_y() {
        let mut paddle = Paddle::new(Side::Left);
        paddle.pos.y = 2.0;
        assert!(hits_paddle(Vec2::new(-4.7, 2.5), &paddle));
        assert!(!hits_paddle(Vec2::new(-4.7, 0.5), &paddle));
        assert!(!hits_paddle(Vec2::new(4.7, 2.5), &paddle));
    }
}
