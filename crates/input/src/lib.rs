//! Terminal input module (engine-facing).
//!
//! This module is independent of the rendering core. It maps `crossterm` key
//! events into [`crate::types::PlayerAction`] and drains everything pending at
//! the start of a frame without blocking.

pub mod drain;
pub mod map;

pub use raycaster_types as types;

pub use drain::drain_pending;
pub use map::{handle_key_event, should_quit};
