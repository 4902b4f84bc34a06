//! Keyboard tracking and per-frame input sampling
//!
//! winit only reports key transitions, so held keys are tracked here from
//! window events and sampled once per frame into a [`TickInput`].

use std::collections::HashSet;

use glam::Vec2;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::consts::PADDLE_TRAVEL_LIMIT;
use crate::sim::{GameState, Paddle, TickInput};

/// Set of physical keys currently held down
#[derive(Debug, Default, Clone)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a winit keyboard event. Repeats carry no new information.
    pub fn handle_event(&mut self, event: &KeyEvent) {
        if event.repeat {
            return;
        }
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        self.set(code, event.state == ElementState::Pressed);
    }

    pub fn set(&mut self, code: KeyCode, pressed: bool) {
        if pressed {
            self.held.insert(code);
        } else {
            self.held.remove(&code);
        }
    }

    pub fn press(&mut self, code: KeyCode) {
        self.set(code, true);
    }

    pub fn release(&mut self, code: KeyCode) {
        self.set(code, false);
    }

    /// Forget everything (window lost focus, releases will never arrive)
    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, code: KeyCode) -> bool {
        self.held.contains(&code)
    }
}

/// Keys driving one paddle. `first` is checked before `second`, so it wins
/// when both are held.
struct PaddleKeys {
    first: (KeyCode, f32),
    second: (KeyCode, f32),
}

const PLAYER1_KEYS: PaddleKeys = PaddleKeys {
    first: (KeyCode::ArrowUp, 1.0),
    second: (KeyCode::ArrowDown, -1.0),
};

const PLAYER2_KEYS: PaddleKeys = PaddleKeys {
    first: (KeyCode::KeyS, -1.0),
    second: (KeyCode::KeyW, 1.0),
};

/// Intent along y, or zero when the paddle is already at its travel limit
fn directed(paddle: &Paddle, dir: f32) -> Vec2 {
    let allowed = if dir > 0.0 {
        paddle.pos.y < PADDLE_TRAVEL_LIMIT
    } else {
        paddle.pos.y > -PADDLE_TRAVEL_LIMIT
    };
    if allowed { Vec2::new(0.0, dir) } else { Vec2::ZERO }
}

/// Returns the paddle intent and whether one of its keys was held
fn sample_paddle(
    keys: &KeyboardState,
    paddle: &Paddle,
    bindings: &PaddleKeys,
) -> (Vec2, bool) {
    let (first, first_dir) = bindings.first;
    let (second, second_dir) = bindings.second;

    let (mut movement, engaged) = if keys.is_held(first) {
        (directed(paddle, first_dir), true)
    } else if keys.is_held(second) {
        (directed(paddle, second_dir), true)
    } else {
        (Vec2::ZERO, false)
    };

    if movement.length() > 1.0 {
        movement = movement.normalize();
    }
    (movement, engaged)
}

/// Sample held keys into this frame's movement intents
pub fn sample_input(keys: &KeyboardState, state: &GameState) -> TickInput {
    let (player1, engaged1) = sample_paddle(keys, &state.player1, &PLAYER1_KEYS);
    let (player2, engaged2) = sample_paddle(keys, &state.player2, &PLAYER2_KEYS);

    TickInput {
        player1,
        player2,
        start: engaged1 || engaged2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keys_no_intent() {
        let keys = KeyboardState::new();
        let input = sample_input(&keys, &GameState::new());
        assert_eq!(input, TickInput::default());
    }

    #[test]
    fn test_player1_arrows() {
        let state = GameState::new();
        let mut keys = KeyboardState::new();
        keys.press(KeyCode::ArrowUp);
        let input = sample_input(&keys, &state);
        assert_eq!(input.player1, Vec2::Y);
        assert_eq!(input.player2, Vec2::ZERO);
        assert!(input.start);

        keys.release(KeyCode::ArrowUp);
        keys.press(KeyCode::ArrowDown);
        assert_eq!(sample_input(&keys, &state).player1, Vec2::NEG_Y);
    }

    #[test]
    fn test_player2_ws() {
        let state = GameState::new();
        let mut keys = KeyboardState::new();
        keys.press(KeyCode::KeyW);
        assert_eq!(sample_input(&keys, &state).player2, Vec2::Y);
        keys.release(KeyCode::KeyW);
        keys.press(KeyCode::KeyS);
        assert_eq!(sample_input(&keys, &state).player2, Vec2::NEG_Y);
    }

    #[test]
    fn test_first_checked_key_wins() {
        let state = GameState::new();
        let mut keys = KeyboardState::new();
        keys.press(KeyCode::ArrowUp);
        keys.press(KeyCode::ArrowDown);
        keys.press(KeyCode::KeyW);
        keys.press(KeyCode::KeyS);
        let input = sample_input(&keys, &state);
        assert_eq!(input.player1, Vec2::Y);
        assert_eq!(input.player2, Vec2::NEG_Y);
    }

    #[test]
    fn test_travel_limit_suppresses_movement_but_still_latches() {
        let mut state = GameState::new();
        state.player1.pos.y = 3.0;
        state.player2.pos.y = -3.2;
        let mut keys = KeyboardState::new();
        keys.press(KeyCode::ArrowUp);
        keys.press(KeyCode::KeyS);
        let input = sample_input(&keys, &state);
        assert_eq!(input.player1, Vec2::ZERO);
        assert_eq!(input.player2, Vec2::ZERO);
        assert!(input.start);

        // Moving back toward the centre is still allowed
        keys.clear();
        keys.press(KeyCode::ArrowDown);
        assert_eq!(sample_input(&keys, &state).player1, Vec2::NEG_Y);
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let mut keys = KeyboardState::new();
        keys.press(KeyCode::Space);
        keys.press(KeyCode::ArrowLeft);
        let input = sample_input(&keys, &GameState::new());
        assert!(!input.start);
    }
}
