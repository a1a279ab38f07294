//! HalfBlockView: maps a pixel framebuffer onto terminal cells.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Each cell shows two vertically stacked pixels using the upper half block
//! `▀`: the foreground paints the top pixel and the background the bottom
//! one. Pixels are picked by nearest-neighbour sampling, so the whole frame is
//! squeezed into whatever viewport the terminal offers.

use crate::cells::{Cell, CellBuffer};
use crate::core::Framebuffer;
use crate::types::{unpack, Rgba};

const HALF_BLOCK: char = '▀';

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfBlockView {
    /// Reserve the bottom row for a status line.
    status_row: bool,
    status_fg: Rgba,
    status_bg: Rgba,
}

impl Default for HalfBlockView {
    fn default() -> Self {
        Self {
            status_row: true,
            status_fg: Rgba::rgb(220, 220, 220),
            status_bg: Rgba::rgb(30, 30, 40),
        }
    }
}

impl HalfBlockView {
    pub fn with_status_row(mut self, enabled: bool) -> Self {
        self.status_row = enabled;
        self
    }

    /// Render `frame` into `cells`, resizing them to `viewport`.
    ///
    /// This is the allocation-free hot path as long as the viewport size does
    /// not change between frames.
    pub fn render_into(&self, frame: &Framebuffer, viewport: Viewport, status: &str, cells: &mut CellBuffer) {
        cells.resize(viewport.width, viewport.height);
        cells.clear(Cell::default());

        let rows = if self.status_row {
            viewport.height.saturating_sub(1)
        } else {
            viewport.height
        };
        if rows == 0 || viewport.width == 0 || frame.width() == 0 || frame.height() == 0 {
            return;
        }

        let (fw, fh) = (frame.width(), frame.height());
        let (vw, sub_rows) = (viewport.width as usize, rows as usize * 2);
        let sample = |sx: usize, sy: usize| -> Rgba {
            let px = sx * fw / vw;
            let py = sy * fh / sub_rows;
            frame.get(px, py).map(unpack).unwrap_or_default()
        };

        for cy in 0..rows {
            for cx in 0..viewport.width {
                let top = sample(cx as usize, cy as usize * 2);
                let bottom = sample(cx as usize, cy as usize * 2 + 1);
                cells.set(
                    cx,
                    cy,
                    Cell {
                        ch: HALF_BLOCK,
                        fg: top,
                        bg: bottom,
                    },
                );
            }
        }

        if self.status_row {
            let y = viewport.height - 1;
            for x in 0..viewport.width {
                cells.set(
                    x,
                    y,
                    Cell {
                        ch: ' ',
                        fg: self.status_fg,
                        bg: self.status_bg,
                    },
                );
            }
            cells.put_str(0, y, status, self.status_fg, self.status_bg);
        }
    }

    pub fn render(&self, frame: &Framebuffer, viewport: Viewport, status: &str) -> CellBuffer {
        let mut cells = CellBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, viewport, status, &mut cells);
        cells
    }
}
