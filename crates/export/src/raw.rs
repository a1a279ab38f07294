//! Raw packed-pixel dumps.
//!
//! The output is `width * height` little-endian `u32` words, row-major, in the
//! layout the consumer declares. This is the byte span a streaming texture
//! upload expects, so a presenter declaring ARGB8888 gets the channels
//! re-ordered here instead of packing colors its own way.

use std::io::{self, Write};

use crate::core::Framebuffer;
use crate::types::PixelLayout;

pub fn encode_raw(fb: &Framebuffer, layout: PixelLayout, out: &mut Vec<u8>) {
    layout.write_bytes(fb.pixels(), out);
}

pub fn write_raw<W: Write>(w: &mut W, fb: &Framebuffer, layout: PixelLayout) -> io::Result<()> {
    let mut buf = Vec::new();
    encode_raw(fb, layout, &mut buf);
    w.write_all(&buf)?;
    w.flush()
}
