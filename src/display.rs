//! Rendering layer. All terminal I/O lives here.
//!
//! The engine thinks in pixels on a fixed-size field; `TerminalSurface`
//! scales that field onto whatever terminal it is given and draws glyph
//! sprites and text with crossterm commands. Nothing is shown until
//! `present` flushes the queued commands.

use std::collections::HashMap;
use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    terminal, QueueableCommand,
};
use kittens::assets::{AssetProvider, Assets, Sprite};
use kittens::surface::{layout_lines, Rgb, Surface, TextStyle};
use kittens::GameError;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_STARS: Color = Color::DarkGrey;
const C_ENEMY: Color = Color::Yellow;
const C_PLAYER: Color = Color::White;

// ── Glyph sprites ─────────────────────────────────────────────────────────────

/// Terminal stand-in for an image: rows of text in one colour.
#[derive(Clone, Debug)]
pub struct Glyph {
    pub lines: Vec<&'static str>,
    pub color: Color,
    /// Repeat the glyph over the whole screen instead of drawing it once.
    pub tiled: bool,
}

/// The built-in set of glyphs, keyed by logical sprite name.
pub struct GlyphBook {
    glyphs: HashMap<&'static str, Glyph>,
}

impl GlyphBook {
    pub fn new() -> Self {
        let mut glyphs = HashMap::new();
        glyphs.insert(
            "enemy",
            Glyph {
                //   /\_/\
                //  ( o.o )
                //   > ^ <
                lines: vec![" /\\_/\\", "( o.o )", " > ^ <"],
                color: C_ENEMY,
                tiled: false,
            },
        );
        glyphs.insert(
            "player",
            Glyph {
                lines: vec!["  /^\\", " |###|", "/_____\\"],
                color: C_PLAYER,
                tiled: false,
            },
        );
        glyphs.insert(
            "background",
            Glyph {
                lines: vec![
                    "  .         *            .       ",
                    "        .          .          +  ",
                    "   +          .        *         ",
                    "          .       .           .  ",
                ],
                color: C_STARS,
                tiled: true,
            },
        );
        Self { glyphs }
    }
}

impl Default for GlyphBook {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetProvider for GlyphBook {
    type Image = Glyph;

    fn image(&self, name: &str) -> Option<&Glyph> {
        self.glyphs.get(name)
    }
}

// ── Surface ───────────────────────────────────────────────────────────────────

pub struct TerminalSurface<W: Write> {
    out: W,
    assets: Assets<Glyph>,
    field: (f32, f32),
    cols: u16,
    rows: u16,
}

impl<W: Write> TerminalSurface<W> {
    /// `field` is the engine's play area in pixels, `(cols, rows)` the terminal size.
    pub fn new(
        out: W,
        provider: &GlyphBook,
        field: (f32, f32),
        (cols, rows): (u16, u16),
    ) -> Result<Self, GameError> {
        Ok(Self {
            out,
            assets: Assets::load(provider)?,
            field,
            cols,
            rows,
        })
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    /// Pixel position to terminal cell. May land off-screen.
    fn cell(&self, x: f32, y: f32) -> (i32, i32) {
        let col = x * self.cols as f32 / self.field.0;
        let row = y * self.rows as f32 / self.field.1;
        (col.floor() as i32, row.floor() as i32)
    }

    /// Print `text` at a cell, clipped to the screen.
    fn put(&mut self, col: i32, row: i32, text: &str) -> io::Result<()> {
        if row < 0 || row >= self.rows as i32 || col >= self.cols as i32 {
            return Ok(());
        }
        let skip = (-col).max(0) as usize;
        let room = (self.cols as i32 - col.max(0)) as usize;
        let visible: String = text.chars().skip(skip).take(room).collect();
        if visible.is_empty() {
            return Ok(());
        }
        self.out.queue(cursor::MoveTo(col.max(0) as u16, row as u16))?;
        self.out.queue(Print(visible))?;
        Ok(())
    }

    fn draw_tiled(&mut self, glyph: &Glyph) -> io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.out.queue(style::SetForegroundColor(glyph.color))?;
        if glyph.lines.is_empty() {
            return Ok(());
        }
        for row in 0..self.rows {
            let line = glyph.lines[row as usize % glyph.lines.len()];
            let repeats = self.cols as usize / line.chars().count().max(1) + 1;
            self.put(0, row as i32, &line.repeat(repeats))?;
        }
        Ok(())
    }

    /// Flush everything queued this frame and park the cursor.
    pub fn present(&mut self) -> io::Result<()> {
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn draw_image(&mut self, sprite: Sprite, x: f32, y: f32) -> io::Result<()> {
        let glyph = self.assets.get(sprite).clone();
        if glyph.tiled {
            return self.draw_tiled(&glyph);
        }
        let (col, row) = self.cell(x, y);
        self.out.queue(style::SetForegroundColor(glyph.color))?;
        for (i, line) in glyph.lines.iter().enumerate() {
            self.put(col, row + i as i32, line)?;
        }
        Ok(())
    }

    // Terminals cannot rotate glyphs; rotation only moves each line's origin.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, text_style: &TextStyle) -> io::Result<()> {
        let Rgb(r, g, b) = text_style.color;
        self.out.queue(style::SetForegroundColor(Color::Rgb { r, g, b }))?;
        let bold = text_style.font.contains("bold");
        if bold {
            self.out.queue(style::SetAttribute(Attribute::Bold))?;
        }
        // Canvas text is anchored at its baseline.
        let lift = text_style.size * 0.75;
        for (line, lx, ly) in layout_lines(text, x, y - lift, text_style) {
            let (col, row) = self.cell(lx, ly);
            self.put(col, row, line)?;
        }
        if bold {
            self.out.queue(style::SetAttribute(Attribute::NormalIntensity))?;
        }
        Ok(())
    }
}
