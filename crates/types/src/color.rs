//! Packed pixel colors.
//!
//! Every pixel in the renderer is a `u32` in the canonical ABGR8888 layout:
//! alpha in the highest byte, red in the lowest. On little-endian targets the
//! in-memory bytes of a pixel read `r, g, b, a`.
//!
//! Consumers that expect another ordering (for example a streaming texture
//! declared as ARGB8888) convert through [`PixelLayout`] instead of packing
//! colors themselves.

/// 32-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WALL: Rgba = Rgba::rgb(0, 255, 255);
    pub const PLAYER_MARKER: Rgba = Rgba::rgb(255, 255, 255);
    pub const FLOOR_TRACE: Rgba = Rgba::rgb(160, 160, 160);
    pub const BACKGROUND: Rgba = Rgba::rgb(200, 200, 200);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline(always)]
    pub const fn pack(self) -> u32 {
        pack(self.r, self.g, self.b, self.a)
    }

    #[inline(always)]
    pub const fn unpack(color: u32) -> Self {
        unpack(color)
    }
}

impl From<Rgba> for u32 {
    fn from(c: Rgba) -> Self {
        c.pack()
    }
}

/// Pack four channels into the canonical ABGR8888 layout.
#[inline(always)]
pub const fn pack(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((a as u32) << 24) | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32)
}

/// Pack an opaque color.
#[inline(always)]
pub const fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    pack(r, g, b, 255)
}

/// Inverse of [`pack`].
#[inline(always)]
pub const fn unpack(color: u32) -> Rgba {
    Rgba {
        r: (color & 0xff) as u8,
        g: ((color >> 8) & 0xff) as u8,
        b: ((color >> 16) & 0xff) as u8,
        a: ((color >> 24) & 0xff) as u8,
    }
}

/// Channel ordering a pixel consumer declares for packed `u32` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelLayout {
    /// `a << 24 | b << 16 | g << 8 | r` (the renderer's own layout)
    #[default]
    Abgr8888,
    /// `a << 24 | r << 16 | g << 8 | b`
    Argb8888,
}

impl PixelLayout {
    /// Re-order a canonical pixel for this layout.
    #[inline(always)]
    pub fn convert(self, canonical: u32) -> u32 {
        match self {
            PixelLayout::Abgr8888 => canonical,
            PixelLayout::Argb8888 => {
                let c = unpack(canonical);
                ((c.a as u32) << 24) | ((c.r as u32) << 16) | ((c.g as u32) << 8) | (c.b as u32)
            }
        }
    }

    /// Append canonical pixels to `out` as little-endian words in this layout.
    pub fn write_bytes(self, pixels: &[u32], out: &mut Vec<u8>) {
        out.reserve(pixels.len() * 4);
        for &p in pixels {
            out.extend_from_slice(&self.convert(p).to_le_bytes());
        }
    }

    /// Parse a layout name (`"abgr8888"`, `"argb8888"`, case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "abgr8888" | "abgr" => Some(PixelLayout::Abgr8888),
            "argb8888" | "argb" => Some(PixelLayout::Argb8888),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn red_is_lowest_byte() {
        assert_eq!(pack(0x11, 0x22, 0x33, 0x44), 0x4433_2211);
        assert_eq!(pack_rgb(255, 0, 0), 0xff00_00ff);
    }

    #[test]
    fn unpack_inverts_pack_for_all_channel_values() {
        for v in 0..=255u8 {
            let w = v.wrapping_mul(37);
            let c = Rgba::new(v, w, 255 - v, w ^ v);
            assert_eq!(unpack(c.pack()), c);
        }
    }

    #[test]
    fn canonical_bytes_read_rgba_in_memory_order() {
        let p = pack(10, 20, 30, 40);
        assert_eq!(p.to_le_bytes(), [10, 20, 30, 40]);
    }

    #[test]
    fn argb_conversion_swaps_red_and_blue() {
        let p = pack(1, 2, 3, 4);
        assert_eq!(PixelLayout::Argb8888.convert(p), 0x0401_0203);
        assert_eq!(PixelLayout::Abgr8888.convert(p), p);
    }

    #[test]
    fn write_bytes_emits_four_bytes_per_pixel() {
        let mut out = Vec::new();
        PixelLayout::Argb8888.write_bytes(&[pack(10, 20, 30, 255)], &mut out);
        // little-endian ARGB: b, g, r, a
        assert_eq!(out, vec![30, 20, 10, 255]);
    }

    #[test]
    fn layout_names_parse() {
        assert_eq!(PixelLayout::from_str("ARGB8888"), Some(PixelLayout::Argb8888));
        assert_eq!(PixelLayout::from_str("abgr"), Some(PixelLayout::Abgr8888));
        assert_eq!(PixelLayout::from_str("rgb565"), None);
    }
}
