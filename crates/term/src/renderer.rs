//! TerminalRenderer: flushes rendered frames to a real terminal.
//!
//! Frames are first sampled into a [`CellBuffer`] and then written as either a
//! full redraw (first frame, terminal resized) or a diff of the changed runs.

use std::io::{self, Write};

use anyhow::Result;
use log::debug;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::cells::{Cell, CellBuffer};
use crate::core::{Framebuffer, Presenter, RenderError};
use crate::types::Rgba;
use crate::view::{HalfBlockView, Viewport};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    view: HalfBlockView,
    last: Option<CellBuffer>,
    next: CellBuffer,
    buf: Vec<u8>,
    status: String,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            view: HalfBlockView::default(),
            last: None,
            next: CellBuffer::new(0, 0),
            buf: Vec::with_capacity(64 * 1024),
            status: String::new(),
        }
    }

    /// Switch to raw mode and the alternate screen.
    ///
    /// If any step after enabling raw mode fails, the terminal is restored
    /// before the error is returned.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        undo_on_err(self, Self::enter_screen, |r| {
            let _ = r.exit();
        })
    }

    fn enter_screen(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Text shown in the bottom row on the next frame.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Force the next draw to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a cell buffer, swapping it into internal state.
    ///
    /// The renderer diffs against the previous frame and then swaps buffers
    /// so the caller can reuse the old one without cloning.
    pub fn draw_swap(&mut self, cells: &mut CellBuffer) -> io::Result<()> {
        let mut prev = match self.last.take() {
            Some(prev) => prev,
            None => {
                self.buf.clear();
                encode_full_into(cells, &mut self.buf)?;
                self.flush_buf()?;
                self.last = Some(cells.clone());
                return Ok(());
            }
        };

        self.buf.clear();
        if prev.width() != cells.width() || prev.height() != cells.height() {
            debug!("terminal resized to {}x{}", cells.width(), cells.height());
            encode_full_into(cells, &mut self.buf)?;
        } else {
            encode_diff_into(&prev, cells, &mut self.buf)?;
        }
        self.flush_buf()?;

        std::mem::swap(&mut prev, cells);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()
    }
}

impl Presenter for TerminalRenderer {
    fn present(&mut self, frame: &Framebuffer) -> Result<(), RenderError> {
        let (w, h) = terminal::size().unwrap_or((80, 24));
        let mut next = std::mem::replace(&mut self.next, CellBuffer::new(0, 0));
        self.view
            .render_into(frame, Viewport::new(w, h), &self.status, &mut next);
        let result = self.draw_swap(&mut next);
        self.next = next;
        if result.is_err() {
            // Terminal state is unknown after a partial write.
            self.invalidate();
        }
        result.map_err(RenderError::from)
    }
}

/// Run `step` on `target`, running `undo` before passing a failure on.
fn undo_on_err<T>(
    target: &mut T,
    step: impl FnOnce(&mut T) -> Result<()>,
    undo: impl FnOnce(&mut T),
) -> Result<()> {
    step(target).map_err(|e| {
        undo(target);
        e
    })
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(cells: &CellBuffer, out: &mut Vec<u8>) -> io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current: Option<(Rgba, Rgba)> = None;
    for y in 0..cells.height() {
        for x in 0..cells.width() {
            let cell = cells.get(x, y).unwrap_or_default();
            print_cell(out, cell, &mut current)?;
        }
        if y + 1 < cells.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
pub fn encode_diff_into(prev: &CellBuffer, next: &CellBuffer, out: &mut Vec<u8>) -> io::Result<()> {
    let mut current: Option<(Rgba, Rgba)> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            print_cell(out, cell, &mut current)?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn print_cell(out: &mut Vec<u8>, cell: Cell, current: &mut Option<(Rgba, Rgba)>) -> io::Result<()> {
    if *current != Some((cell.fg, cell.bg)) {
        out.queue(SetForegroundColor(rgba_to_color(cell.fg)))?;
        out.queue(SetBackgroundColor(rgba_to_color(cell.bg)))?;
        *current = Some((cell.fg, cell.bg));
    }
    out.queue(Print(cell.ch))?;
    Ok(())
}

fn rgba_to_color(c: Rgba) -> Color {
    Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

fn for_each_changed_run(
    prev: &CellBuffer,
    next: &CellBuffer,
    mut f: impl FnMut(u16, u16, u16) -> io::Result<()>,
) -> io::Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
