//! TerminalRenderer: writes framebuffers to a terminal.
//!
//! The renderer keeps the last frame it drew and sends only the glyph runs
//! that changed. Styles are emitted as deltas against whatever style the
//! terminal currently has, so a run of same-colored blocks costs one color
//! change. A size change (or [`TerminalRenderer::invalidate`]) forces a full
//! redraw.

use std::io::{self, Stdout, Write};
use std::mem;
use std::ops::Range;

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Glyph, GlyphStyle};
use crate::types::Rgb;

pub struct TerminalRenderer<W: Write = Stdout> {
    out: W,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer<Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Raw mode, alternate screen, hidden cursor
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        self.buf.clear();
        self.buf
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode().context("disable raw mode")
    }

    /// Drop the remembered frame so the next draw repaints everything.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb` and hand back the previous frame in its place.
    ///
    /// The caller renders into the returned buffer next time, so two
    /// framebuffers cycle without cloning. Returns true for a full redraw.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<bool> {
        self.buf.clear();
        let prev = self.last.get_or_insert_with(|| FrameBuffer::new(0, 0));

        let full = !same_size(prev, fb);
        if full {
            encode_full_into(fb, &mut self.buf)?;
            prev.resize(fb.width(), fb.height());
        } else {
            encode_diff_into(prev, fb, &mut self.buf)?;
        }
        mem::swap(prev, fb);

        self.flush_buf()?;
        Ok(full)
    }

    fn flush_buf(&mut self) -> Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        self.out
            .write_all(&self.buf)
            .and_then(|_| self.out.flush())
            .context("write frame to terminal")
    }
}

fn same_size(a: &FrameBuffer, b: &FrameBuffer) -> bool {
    a.width() == b.width() && a.height() == b.height()
}

/// Encode a full repaint of `fb` into `out` (no I/O).
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut pen = Pen::default();
    for (y, row) in fb.rows().enumerate() {
        out.queue(cursor::MoveTo(0, y as u16))?;
        for glyph in row {
            pen.put(out, *glyph)?;
        }
    }
    pen.finish(out)
}

/// Encode the changed runs between `prev` and `next` into `out`.
///
/// Frames of different sizes get a full repaint. Returns the number of runs
/// written; identical frames write nothing at all.
pub fn encode_diff_into(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<usize> {
    if !same_size(prev, next) {
        encode_full_into(next, out)?;
        return Ok(next.height() as usize);
    }

    let mut pen = Pen::default();
    let mut runs = 0;
    for (y, (old, new)) in prev.rows().zip(next.rows()).enumerate() {
        for run in changed_runs(old, new) {
            out.queue(cursor::MoveTo(run.start as u16, y as u16))?;
            for glyph in &new[run] {
                pen.put(out, *glyph)?;
            }
            runs += 1;
        }
    }

    if runs > 0 {
        pen.finish(out)?;
    }
    Ok(runs)
}

/// Column ranges where two equally long rows differ.
fn changed_runs<'a>(
    old: &'a [Glyph],
    new: &'a [Glyph],
) -> impl Iterator<Item = Range<usize>> + 'a {
    let differs = move |x: usize| old.get(x) != new.get(x);
    let mut x = 0;
    std::iter::from_fn(move || {
        while x < new.len() && !differs(x) {
            x += 1;
        }
        if x >= new.len() {
            return None;
        }
        let start = x;
        while x < new.len() && differs(x) {
            x += 1;
        }
        Some(start..x)
    })
}

/// Tracks the style last sent to the terminal.
#[derive(Default)]
struct Pen {
    style: Option<GlyphStyle>,
}

impl Pen {
    fn put(&mut self, out: &mut Vec<u8>, glyph: Glyph) -> Result<()> {
        let prev = self.style.replace(glyph.style);
        if prev != Some(glyph.style) {
            set_style(out, prev, glyph.style)?;
        }
        out.queue(Print(glyph.ch))?;
        Ok(())
    }

    fn finish(self, out: &mut Vec<u8>) -> Result<()> {
        out.queue(ResetColor)?.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

fn set_style(out: &mut Vec<u8>, prev: Option<GlyphStyle>, next: GlyphStyle) -> Result<()> {
    // SGR reset is the only way to drop bold or dim, and it clears colors too.
    let reset = prev.map_or(true, |p| (p.bold, p.dim) != (next.bold, next.dim));
    if reset {
        out.queue(SetAttribute(Attribute::Reset))?;
        if next.bold {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        if next.dim {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
    }
    if reset || prev.map(|p| p.fg) != Some(next.fg) {
        out.queue(SetForegroundColor(rgb_to_color(next.fg)))?;
    }
    if reset || prev.map(|p| p.bg) != Some(next.bg) {
        out.queue(SetBackgroundColor(rgb_to_color(next.bg)))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
