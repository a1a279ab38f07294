//! Binary PPM (P6) encoding.
//!
//! Layout: the ASCII header `P6\n<width> <height>\n255\n` followed by one
//! `r, g, b` byte triple per pixel, row-major from the top row. Nothing
//! follows the last triple.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::core::Framebuffer;
use crate::types::unpack;

/// Append the PPM encoding of `fb` to `out`.
pub fn encode_ppm(fb: &Framebuffer, out: &mut Vec<u8>) {
    out.reserve(32 + fb.pixels().len() * 3);
    // Writing into a Vec cannot fail.
    let _ = write!(out, "P6\n{} {}\n255\n", fb.width(), fb.height());
    for &p in fb.pixels() {
        let c = unpack(p);
        out.extend_from_slice(&[c.r, c.g, c.b]);
    }
}

pub fn write_ppm<W: Write>(w: &mut W, fb: &Framebuffer) -> io::Result<()> {
    let mut buf = Vec::new();
    encode_ppm(fb, &mut buf);
    w.write_all(&buf)?;
    w.flush()
}

/// Write `fb` to `path`, replacing any existing file.
pub fn save_ppm(path: impl AsRef<Path>, fb: &Framebuffer) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    write_ppm(&mut w, fb)
}
