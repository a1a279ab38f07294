//! Tile raycaster (workspace facade crate).
//!
//! This package exposes the `tile_raycaster::{core,export,input,term,types}`
//! paths used by the binaries and integration tests while the implementation
//! lives in dedicated crates under `crates/`. Configuration loading lives here
//! because it ties every crate together.

pub mod cli;
pub mod config;

pub use raycaster_core as core;
pub use raycaster_export as export;
pub use raycaster_input as input;
pub use raycaster_term as term;
pub use raycaster_types as types;
