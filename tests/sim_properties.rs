//! Property tests for the frame simulation

use duo_pong::sim::{GameState, TickInput, hits_bottom_wall, hits_top_wall, tick};
use glam::Vec2;
use proptest::prelude::*;

fn intent() -> impl Strategy<Value = Vec2> {
    prop_oneof![Just(Vec2::ZERO), Just(Vec2::Y), Just(Vec2::NEG_Y)]
}

fn playfield_point() -> impl Strategy<Value = Vec2> {
    (-4.9f32..4.9, -3.7f32..3.7).prop_map(|(x, y)| Vec2::new(x, y))
}

fn direction() -> impl Strategy<Value = Vec2> {
    (-1.0f32..1.0, -1.0f32..1.0)
        .prop_map(|(x, y)| Vec2::new(x, y))
        .prop_filter("non-zero", |v| v.length() > 0.01 && v.length() <= 1.0)
}

proptest! {
    #[test]
    fn ball_frozen_until_started(
        frames in prop::collection::vec((intent(), intent(), 0.0f32..0.1), 1..40),
    ) {
        let mut state = GameState::new();
        for (p1, p2, dt) in frames {
            let input = TickInput { player1: p1, player2: p2, start: false };
            tick(&mut state, &input, dt);
            prop_assert_eq!(state.ball.pos, Vec2::ZERO);
            prop_assert_eq!(state.ball.vel, Vec2::ZERO);
        }
    }

    #[test]
    fn latch_never_resets(
        frames in prop::collection::vec((any::<bool>(), 0.0f32..0.05), 1..60),
    ) {
        let mut state = GameState::new();
        let mut seen = false;
        for (start, dt) in frames {
            let input = TickInput { start, ..Default::default() };
            tick(&mut state, &input, dt);
            seen |= start;
            prop_assert_eq!(state.started, seen);
        }
    }

    #[test]
    fn zero_dt_keeps_ball_in_place(pos in playfield_point(), vel in direction()) {
        let mut state = GameState::new();
        state.start();
        state.ball.pos = pos;
        state.ball.vel = vel;
        tick(&mut state, &TickInput::default(), 0.0);
        prop_assert_eq!(state.ball.pos, pos);
    }

    #[test]
    fn wall_bounce_flips_y_and_keeps_speed(
        x in -4.0f32..4.0,
        y in prop_oneof![3.51f32..3.75, -3.75f32..-3.51],
        vel in direction(),
    ) {
        let pos = Vec2::new(x, y);
        prop_assume!(hits_top_wall(pos) || hits_bottom_wall(pos));

        let mut state = GameState::new();
        state.start();
        state.ball.pos = pos;
        state.ball.vel = vel;
        tick(&mut state, &TickInput::default(), 0.0);

        prop_assert_eq!(state.ball.vel.x, vel.x);
        prop_assert_eq!(state.ball.vel.y, -vel.y);
        prop_assert!((state.ball.vel.length() - vel.length()).abs() < 1e-6);
    }

    #[test]
    fn paddle_bounce_flips_x_and_keeps_speed(
        x in 4.51f32..4.99,
        offset in -0.99f32..0.99,
        paddle_y in -3.0f32..3.0,
        vel in direction(),
    ) {
        let mut state = GameState::new();
        state.start();
        state.player1.pos.y = paddle_y;
        let pos = Vec2::new(x, paddle_y + offset);
        prop_assume!(!hits_top_wall(pos) && !hits_bottom_wall(pos));
        state.ball.pos = pos;
        state.ball.vel = vel;
        tick(&mut state, &TickInput::default(), 0.0);

        prop_assert_eq!(state.ball.vel.x, -vel.x);
        prop_assert_eq!(state.ball.vel.y, vel.y);
        prop_assert!(state.running);
    }

    #[test]
    fn velocity_direction_never_exceeds_unit(
        frames in prop::collection::vec(0.0f32..0.05, 1..200),
        paddle_y in -2.0f32..2.0,
    ) {
        let mut state = GameState::new();
        state.player1.pos.y = paddle_y;
        state.player2.pos.y = -paddle_y;
        tick(&mut state, &TickInput { start: true, ..Default::default() }, 0.0);
        for dt in frames {
            if !state.running {
                break;
            }
            tick(&mut state, &TickInput::default(), dt);
            prop_assert!(state.ball.vel.length() <= 1.0 + 1e-6);
        }
    }
}
