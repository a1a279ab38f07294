//! Error type shared by the rendering core and its presenters.

use std::fmt;
use std::io;

/// Errors surfaced by map construction, cell lookup and frame presentation.
#[derive(Debug)]
pub enum RenderError {
    /// Map symbol count does not equal `width * height`.
    MalformedMap { expected: usize, actual: usize },
    /// Cell lookup outside the map extent.
    OutOfBounds {
        col: usize,
        row: usize,
        width: usize,
        height: usize,
    },
    /// Export or presentation write failed.
    Io(io::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::MalformedMap { expected, actual } => write!(
                f,
                "malformed map: expected {} cells, got {}",
                expected, actual
            ),
            RenderError::OutOfBounds {
                col,
                row,
                width,
                height,
            } => write!(
                f,
                "cell ({}, {}) is outside the {}x{} map",
                col, row, width, height
            ),
            RenderError::Io(e) => write!(f, "frame write failed: {}", e),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RenderError {
    fn from(e: io::Error) -> Self {
        RenderError::Io(e)
    }
}
