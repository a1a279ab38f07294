//! Frame export.
//!
//! Writes finished framebuffers to byte sinks:
//!
//! - [`ppm`]: binary PPM (`P6`), RGB only, alpha discarded
//! - [`raw`]: packed 32-bit pixels in a caller-declared [`PixelLayout`]
//! - [`sink`]: a [`Presenter`](raycaster_core::Presenter) that saves every frame to a file

pub mod ppm;
pub mod raw;
pub mod sink;

pub use raycaster_core as core;
pub use raycaster_types as types;

pub use ppm::{encode_ppm, save_ppm, write_ppm};
pub use raw::{encode_raw, write_raw};
pub use sink::{ExportFormat, FileSink};

pub use raycaster_types::PixelLayout;
