//! Framebuffer module - the linear pixel buffer one frame is drawn into
//!
//! Pixels are packed ABGR8888 `u32` values stored row-major (`x + y * width`).
//! The buffer is allocated once and never resized; every drawing primitive
//! clips against the buffer bounds instead of failing.

use crate::types::pack_rgb;

/// Flat buffer of packed pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Framebuffer {
    /// Allocate a `width * height` buffer filled with `fill`.
    ///
    /// # Panics
    ///
    /// If the pixel count overflows `usize` or cannot be allocated. The size
    /// saturates instead of wrapping, so an oversized request never yields a
    /// short buffer.
    pub fn new(width: usize, height: usize, fill: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width.saturating_mul(height)],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    #[inline(always)]
    fn idx(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x as u64 >= self.width as u64 || y as u64 >= self.height as u64 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Write a single pixel; out-of-range coordinates are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i64, y: i64, color: u32) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Fill the `w` x `h` rectangle anchored at (`x`, `y`).
    ///
    /// The rectangle is intersected with the buffer first, so parts hanging
    /// off any edge (including negative anchors) are skipped and the cost is
    /// bounded by the visible area.
    pub fn draw_rect(&mut self, x: i64, y: i64, w: usize, h: usize, color: u32) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let w = i64::try_from(w).unwrap_or(i64::MAX);
        let h = i64::try_from(h).unwrap_or(i64::MAX);
        let x1 = x.saturating_add(w).min(self.width as i64);
        let y1 = y.saturating_add(h).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let (x0, x1) = (x0 as usize, x1 as usize);
        for row in y0 as usize..y1 as usize {
            let start = row * self.width;
            self.pixels[start + x0..start + x1].fill(color);
        }
    }

    /// Red-by-row, green-by-column test gradient.
    pub fn fill_gradient(&mut self) {
        let (w, h) = (self.width.max(1), self.height.max(1));
        for y in 0..self.height {
            let r = (255 * y / h) as u8;
            for x in 0..self.width {
                let g = (255 * x / w) as u8;
                self.pixels[y * self.width + x] = pack_rgb(r, g, 0);
            }
        }
    }
}
