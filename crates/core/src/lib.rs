//! Rendering core - pure, deterministic, and testable
//!
//! This crate contains the whole rendering pipeline and nothing else. It has
//! **no dependencies** on terminals, windows or files, making it:
//!
//! - **Deterministic**: the same map and pose always produce the same pixels
//! - **Testable**: every stage can be exercised against a small framebuffer
//! - **Portable**: any presenter (image file, terminal, texture upload) can consume a frame
//!
//! # Module Structure
//!
//! - [`framebuffer`]: flat packed-pixel buffer with clipped rectangle fills
//! - [`map`]: the immutable tile grid and world-to-cell lookup
//! - [`pose`]: player position and gaze
//! - [`raycast`]: fixed-step ray marching and inverse-distance wall projection
//! - [`minimap`]: scaled overhead view with the player marker
//! - [`scene`]: per-frame orchestration and the [`Presenter`] seam
//!
//! # Example
//!
//! ```
//! use raycaster_core::{PlayerPose, Scene, SceneSettings, TileMap};
//!
//! let settings = SceneSettings { width: 128, height: 64, ..SceneSettings::default() };
//! let mut scene = Scene::new(TileMap::default(), PlayerPose::default(), settings);
//!
//! let stats = scene.render_frame();
//! assert_eq!(stats.columns, 64);
//! assert_eq!(scene.framebuffer().pixels().len(), 128 * 64);
//! ```

pub mod error;
pub mod framebuffer;
pub mod map;
pub mod minimap;
pub mod pose;
pub mod raycast;
pub mod scene;

pub use raycaster_types as types;

pub use error::RenderError;
pub use framebuffer::Framebuffer;
pub use map::{Tile, TileMap, DEFAULT_MAP_HEIGHT, DEFAULT_MAP_ROWS, DEFAULT_MAP_WIDTH};
pub use minimap::{MinimapLayout, MinimapRenderer};
pub use pose::PlayerPose;
pub use raycast::{ColumnHit, RayCaster, ViewRect};
pub use scene::{Background, FrameStats, Presenter, Scene, SceneSettings};
