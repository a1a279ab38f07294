//! Terminal presentation of rendered frames.
//!
//! The terminal stands in for the live window: each finished framebuffer is
//! downsampled into a grid of half-block character cells (two pixels per
//! cell, stacked vertically) and flushed with crossterm, redrawing only the
//! runs of cells that changed since the previous frame.
//!
//! - [`cells`]: styled character cell buffer
//! - [`view`]: pixel framebuffer -> cell buffer sampling (pure, no I/O)
//! - [`renderer`]: terminal setup, diff encoding and the [`Presenter`](raycaster_core::Presenter) impl

pub mod cells;
pub mod renderer;
pub mod view;

pub use raycaster_core as core;
pub use raycaster_types as types;

pub use cells::{Cell, CellBuffer};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{HalfBlockView, Viewport};
