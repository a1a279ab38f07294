//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the renderer.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core rendering, file export, terminal presentation).
//!
//! # Screen and Camera Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCREEN_WIDTH` | 1024 | Framebuffer width (minimap left half, 3D view right half) |
//! | `SCREEN_HEIGHT` | 512 | Framebuffer height |
//! | `FOV` | π/3 | Angular width swept by the 3D columns |
//! | `MARCH_STEP` | 0.05 | Ray march increment in map units |
//! | `MAX_RANGE` | 20.0 | Ray march cut-off in map units |
//! | `MOVE_STEP` | 0.5 | Forward/backward translation per action |
//! | `TURN_STEP` | 0.05 | Rotation per action (radians) |
//! | `FRAME_MS` | 16 | Frame budget of the interactive loop (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use raycaster_types::{pack, unpack, PlayerAction, Rgba};
//!
//! let packed = pack(10, 20, 30, 255);
//! assert_eq!(unpack(packed), Rgba::new(10, 20, 30, 255));
//!
//! assert_eq!(PlayerAction::from_str("moveForward"), Some(PlayerAction::MoveForward));
//! ```

pub mod color;

pub use color::{pack, pack_rgb, unpack, PixelLayout, Rgba};

/// Framebuffer width of the reference window.
pub const SCREEN_WIDTH: usize = 1024;

/// Framebuffer height of the reference window.
pub const SCREEN_HEIGHT: usize = 512;

/// Field of view in radians (60°).
pub const FOV: f32 = std::f32::consts::FRAC_PI_3;

/// Ray march increment in map units.
pub const MARCH_STEP: f32 = 0.05;

/// Maximum ray march distance in map units.
pub const MAX_RANGE: f32 = 20.0;

/// Distance travelled by one forward/backward action.
pub const MOVE_STEP: f32 = 0.5;

/// Angle turned by one rotate action.
pub const TURN_STEP: f32 = 0.05;

/// Frame budget of the interactive loop in milliseconds.
pub const FRAME_MS: u64 = 16;

/// Side length of the player marker drawn on the minimap.
pub const PLAYER_MARKER_SIZE: usize = 5;

/// Upper bound on actions buffered between two frames.
pub const ACTION_QUEUE_CAPACITY: usize = 32;

/// Actions that can be applied to the player between frames
///
/// These actions are produced by interactive input and consumed once by the
/// scene at the start of the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Translate along the gaze vector
    MoveForward,
    /// Translate against the gaze vector
    MoveBackward,
    /// Decrease the gaze angle
    RotateLeft,
    /// Increase the gaze angle
    RotateRight,
    /// Stop the render loop after the current frame
    Quit,
}

impl PlayerAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use raycaster_types::PlayerAction;
    ///
    /// assert_eq!(PlayerAction::from_str("rotateLeft"), Some(PlayerAction::RotateLeft));
    /// assert_eq!(PlayerAction::from_str("QUIT"), Some(PlayerAction::Quit));
    /// assert_eq!(PlayerAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveforward" => Some(PlayerAction::MoveForward),
            "movebackward" => Some(PlayerAction::MoveBackward),
            "rotateleft" => Some(PlayerAction::RotateLeft),
            "rotateright" => Some(PlayerAction::RotateRight),
            "quit" => Some(PlayerAction::Quit),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerAction::MoveForward => "moveForward",
            PlayerAction::MoveBackward => "moveBackward",
            PlayerAction::RotateLeft => "rotateLeft",
            PlayerAction::RotateRight => "rotateRight",
            PlayerAction::Quit => "quit",
        }
    }
}
