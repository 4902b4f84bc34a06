//! Frame simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform dependencies so it can be driven directly from tests:
//! - Variable timestep (seconds since the previous frame)
//! - Transforms derived from positions, never stored
//! - No rendering or platform dependencies

pub mod collision;
pub mod draw;
pub mod state;
pub mod tick;
pub mod transform;

pub use collision::{hits_bottom_wall, hits_paddle, hits_top_wall, out_of_bounds};
pub use draw::{DrawItem, TextureSlot, draw_list};
pub use state::{Ball, EndReason, GamePhase, GameState, Paddle, Side};
pub use tick::{TickInput, tick};
pub use transform::{projection_matrix, view_matrix};
