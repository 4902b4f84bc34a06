//! Platform abstraction layer
//!
//! Native helpers the frame driver needs outside the simulation:
//! - Time/ticks

pub mod time;

pub use time::FrameClock;
