//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested against plain framebuffers.

use crate::core::{color_of, GameSnapshot, ShapeMatrix};
use crate::fb::{FrameBuffer, GlyphStyle};
use crate::types::{Cell, CellStatus, Rgb};

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const BLOCK: char = '█';

/// Panel needs at least this many columns to be drawn.
const MIN_PANEL_W: u16 = 12;

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
pub enum AnchorY {
    Center,
    Top,
}

/// Terminal view of one game.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Stage cell width in terminal columns.
    cell_w: u16,
    /// Stage cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up typical terminal glyphs.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Top-left corner of the stage frame plus its outer size.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the stage frame (border included) for a stage of this size
    pub fn frame_size(&self, stage_width: usize, stage_height: usize) -> (u16, u16) {
        (
            (stage_width as u16).saturating_mul(self.cell_w).saturating_add(2),
            (stage_height as u16).saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(GlyphStyle::default().glyph(' '));

        let (w, h) = self.frame_size(snap.stage.width(), snap.stage.height());
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(h) / 2,
                AnchorY::Top => 0,
            },
            w,
            h,
        };

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            w.saturating_sub(2),
            h.saturating_sub(2),
            ' ',
            GlyphStyle::new(Rgb::new(80, 80, 90), PLAY_BG),
        );
        draw_border(fb, frame, GlyphStyle::new(Rgb::new(200, 200, 200), SCREEN_BG));

        for (y, row) in snap.stage.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                self.draw_stage_cell(fb, frame, x as u16, y as u16, *cell);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if !snap.started {
            draw_overlay_text(fb, frame, "ENTER TO START");
        } else if snap.game_over {
            draw_overlay_text(fb, frame, "GAME OVER");
        } else if snap.paused {
            draw_overlay_text(fb, frame, "PAUSED");
        }
    }

    /// Convenience form that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_stage_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, cell: Cell) {
        let px = frame.x + 1 + x * self.cell_w;
        let py = frame.y + 1 + y * self.cell_h;

        let (ch, style) = match cell.status {
            CellStatus::Clear => ('·', GlyphStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim()),
            CellStatus::Merged => (BLOCK, GlyphStyle::new(color_of(cell.kind), PLAY_BG)),
            CellStatus::Active => (BLOCK, GlyphStyle::new(color_of(cell.kind), PLAY_BG).bold()),
        };
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, shape: &ShapeMatrix) {
        for (lx, ly, kind) in shape.occupied() {
            let style = GlyphStyle::new(color_of(kind), SCREEN_BG);
            fb.fill_rect(
                x + lx as u16 * self.cell_w,
                y + ly as u16 * self.cell_h,
                self.cell_w,
                self.cell_h,
                BLOCK,
                style,
            );
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < MIN_PANEL_W {
            return;
        }

        let label = GlyphStyle::default().bold();
        let value = GlyphStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = frame.y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("ROWS", snap.rows_cleared),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), v, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "SPEED", label);
        y = y.saturating_add(1);
        match snap.fall_interval_ms {
            Some(ms) => {
                fb.put_u32(panel_x, y, ms, value);
                fb.put_str(panel_x + digits(ms), y, "ms", value.dim());
            }
            None => fb.put_str(panel_x, y, "-", value),
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        if !snap.next.kind.is_empty() {
            self.draw_preview(fb, panel_x, y, &snap.next.shape);
        }
        y = y.saturating_add(snap.next.shape.size() as u16 * self.cell_h + 1);

        let help = value.dim();
        for line in ["←→ move  ↓ drop", "↑ rotate  p pause", "r restart  q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: GlyphStyle) {
    let Frame { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_overlay_text(fb: &mut FrameBuffer, frame: Frame, text: &str) {
    let mid_y = frame.y.saturating_add(frame.h / 2);
    let text_w = text.chars().count() as u16;
    let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
    let style = GlyphStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    fb.put_str(x, mid_y, text, style);
}

fn digits(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_count() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(100), 3);
        assert_eq!(digits(1000), 4);
    }

    #[test]
    fn frame_size_includes_border() {
        let view = GameView::default();
        assert_eq!(view.frame_size(12, 20), (26, 22));
        assert_eq!(GameView::new(1, 1).frame_size(6, 10), (8, 12));
    }
}
