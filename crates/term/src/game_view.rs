//! BoardView: draws a [`Game`] into a terminal framebuffer.
//!
//! Blobs arrive through the [`Surface`] draw contract in logical pixels and are
//! scaled down to terminal cells; the side panel and overlays come from the
//! game snapshot. Pure (no I/O).

use anyhow::Result;

use crate::core::components::BLOB_TEXTURE;
use crate::core::{Game, GameSnapshot, Surface};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{
    BlobColor, FRect, IRect, GRID_HEIGHT, GRID_WIDTH, SPRITE_SIZE, X_INTERVAL, Y_INTERVAL,
};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);

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

pub fn blob_rgb(color: BlobColor) -> Rgb {
    match color {
        BlobColor::Red => Rgb::new(220, 80, 80),
        BlobColor::Yellow => Rgb::new(240, 220, 80),
        BlobColor::Green => Rgb::new(100, 220, 120),
        BlobColor::Blue => Rgb::new(80, 120, 220),
    }
}

/// [`Surface`] over a region of a framebuffer.
///
/// Logical x is scaled by `cell_w / X_INTERVAL`, y by `cell_h / Y_INTERVAL`;
/// the texture source column selects the blob color.
pub struct FrameSurface<'a> {
    fb: &'a mut FrameBuffer,
    origin_x: u16,
    origin_y: u16,
    cell_w: u16,
    cell_h: u16,
}

impl<'a> FrameSurface<'a> {
    pub fn new(
        fb: &'a mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        cell_w: u16,
        cell_h: u16,
    ) -> Self {
        Self {
            fb,
            origin_x,
            origin_y,
            cell_w,
            cell_h,
        }
    }

    fn scale(v: f32, cells: u16, interval: i32) -> u16 {
        (v.max(0.0) * cells as f32 / interval as f32).round() as u16
    }
}

impl Surface for FrameSurface<'_> {
    fn draw(&mut self, texture: u8, src: IRect, dst: FRect) {
        if texture != BLOB_TEXTURE {
            return;
        }
        let Some(color) = BlobColor::from_atlas_column(src.x / SPRITE_SIZE) else {
            return;
        };
        let x = self.origin_x + Self::scale(dst.x, self.cell_w, X_INTERVAL);
        let y = self.origin_y + Self::scale(dst.y, self.cell_h, Y_INTERVAL);
        let w = Self::scale(dst.w, self.cell_w, X_INTERVAL);
        let h = Self::scale(dst.h, self.cell_h, Y_INTERVAL);
        let style = Style::new(blob_rgb(color), BOARD_BG).bold();
        self.fb.fill_rect(x, y, w, h, '█', style);
    }
}

/// Terminal layout of the board, side panel and overlays
pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2, cell_h: 1 }
    }
}

impl BoardView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Size of the bordered board in terminal cells
    pub fn frame_size(&self) -> (u16, u16) {
        (
            GRID_WIDTH as u16 * self.cell_w + 2,
            GRID_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Top-left corner of the bordered board, centered in `viewport`
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (w, h) = self.frame_size();
        (
            viewport.width.saturating_sub(w) / 2,
            viewport.height.saturating_sub(h) / 2,
        )
    }

    /// Render `game` into `fb`, resizing it to `viewport`
    pub fn render_into(
        &self,
        game: &mut Game,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> Result<()> {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::default().glyph(' '));

        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.frame_origin(viewport);

        let empty = Style::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
        for y in 0..GRID_HEIGHT as u16 {
            for x in 0..GRID_WIDTH as u16 {
                let px = start_x + 1 + x * self.cell_w;
                let py = start_y + 1 + y * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, '·', empty);
            }
        }
        let border = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let mut surface =
            FrameSurface::new(fb, start_x + 1, start_y + 1, self.cell_w, self.cell_h);
        game.render(&mut surface)?;

        let snap = game.snapshot()?;
        self.draw_side_panel(fb, &snap, viewport, start_x + frame_w + 2, start_y);
        if snap.paused {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        }
        Ok(())
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &mut Game, viewport: Viewport) -> Result<FrameBuffer> {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb)?;
        Ok(fb)
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) {
        if x.saturating_add(12) > viewport.width {
            return;
        }
        let label = Style::default().bold();
        let value = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = value.dim();

        fb.put_str(x, y, "SCORE", label);
        fb.put_str(x, y + 1, &snap.score.to_string(), value);
        fb.put_str(x, y + 3, "PHASE", label);
        fb.put_str(x, y + 4, snap.phase.as_str(), value);

        let controls = [
            "a/d  move",
            "s    drop",
            "q/e  rotate",
            "spc  pause",
            "ret  restart",
            "esc  quit",
        ];
        for (i, line) in controls.iter().enumerate() {
            fb.put_str(x, y + 6 + i as u16, line, hint);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
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

fn draw_overlay_text(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let tx = x.saturating_add(w.saturating_sub(text_w) / 2);
    let style = Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
    fb.put_str(tx, y.saturating_add(h / 2), text, style);
}
