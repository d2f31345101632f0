//! The drawing surface the engine renders onto.
//!
//! The engine only issues draw calls. Creating, sizing and presenting the
//! surface belongs to whoever owns it.

use std::io;

use crate::assets::Sprite;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font: String,
    /// Font size in pixels; also the line advance for multi-line text.
    pub size: f32,
    pub color: Rgb,
    /// Clockwise rotation in degrees around the text origin.
    pub rotation_deg: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: "serif".to_string(),
            size: 16.0,
            color: Rgb::WHITE,
            rotation_deg: 0.0,
        }
    }
}

impl TextStyle {
    /// The heavy white banner font used for the HUD and the game-over screen.
    pub fn banner() -> Self {
        Self {
            font: "bold Impact".to_string(),
            size: 30.0,
            ..Self::default()
        }
    }
}

pub trait Surface {
    fn draw_image(&mut self, sprite: Sprite, x: f32, y: f32) -> io::Result<()>;

    /// Draw `text` with its first line's origin at `(x, y)`. `\n` starts a new line.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) -> io::Result<()>;
}

/// Split `text` into lines and place each one.
///
/// Line `i` sits `i * style.size` pixels down the rotated vertical axis, so a
/// rotated block of text keeps its lines stacked along the rotation.
pub fn layout_lines<'a>(
    text: &'a str,
    x: f32,
    y: f32,
    style: &TextStyle,
) -> impl Iterator<Item = (&'a str, f32, f32)> + 'a {
    let (sin, cos) = style.rotation_deg.to_radians().sin_cos();
    let size = style.size;
    text.split('\n').enumerate().map(move |(i, line)| {
        let advance = i as f32 * size;
        (line, x - sin * advance, y + cos * advance)
    })
}
