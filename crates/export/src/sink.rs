//! File presenter.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::core::{Framebuffer, Presenter, RenderError};
use crate::ppm::encode_ppm;
use crate::raw::encode_raw;
use crate::types::PixelLayout;

/// On-disk encoding of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Ppm,
    Raw(PixelLayout),
}

impl ExportFormat {
    /// Parse `ppm`, `raw-abgr` or `raw-argb`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ppm" => Some(ExportFormat::Ppm),
            other => other
                .strip_prefix("raw-")
                .and_then(PixelLayout::from_str)
                .map(ExportFormat::Raw),
        }
    }

    pub fn encode(self, fb: &Framebuffer, out: &mut Vec<u8>) {
        match self {
            ExportFormat::Ppm => encode_ppm(fb, out),
            ExportFormat::Raw(layout) => encode_raw(fb, layout, out),
        }
    }
}

/// Writes each presented frame to `path`, overwriting the previous one.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    format: ExportFormat,
    buf: Vec<u8>,
    frames_written: u64,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>, format: ExportFormat) -> Self {
        Self {
            path: path.into(),
            format,
            buf: Vec::new(),
            frames_written: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }
}

impl Presenter for FileSink {
    fn present(&mut self, frame: &Framebuffer) -> Result<(), RenderError> {
        self.buf.clear();
        self.format.encode(frame, &mut self.buf);
        fs::write(&self.path, &self.buf)?;
        self.frames_written += 1;
        debug!(
            "wrote {} bytes to {} ({:?})",
            self.buf.len(),
            self.path.display(),
            self.format
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_parse() {
        assert_eq!(ExportFormat::from_str("PPM"), Some(ExportFormat::Ppm));
        assert_eq!(
            ExportFormat::from_str("raw-argb"),
            Some(ExportFormat::Raw(PixelLayout::Argb8888))
        );
        assert_eq!(
            ExportFormat::from_str("raw-abgr8888"),
            Some(ExportFormat::Raw(PixelLayout::Abgr8888))
        );
        assert_eq!(ExportFormat::from_str("png"), None);
        assert_eq!(ExportFormat::from_str("raw-"), None);
    }

    #[test]
    fn missing_directory_surfaces_io_error() {
        let dir = std::env::temp_dir().join("raycaster-export-missing-dir-test");
        let _ = fs::remove_dir_all(&dir);
        let mut sink = FileSink::new(dir.join("frame.ppm"), ExportFormat::Ppm);
        let fb = Framebuffer::new(1, 1, 0);
        assert!(matches!(sink.present(&fb), Err(RenderError::Io(_))));
        assert_eq!(sink.frames_written(), 0);
    }
}
