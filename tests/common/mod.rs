#![allow(dead_code)]

use std::io;

use kittens::assets::Sprite;
use kittens::surface::{Surface, TextStyle};
use kittens::{Engine, GameConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// One captured draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum Draw {
    Image(Sprite, f32, f32),
    Text(String, f32, f32),
}

/// Surface that remembers every call instead of drawing.
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<Draw>,
}

impl RecordingSurface {
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Draw::Text(t, _, _) => Some(t.as_str()),
                Draw::Image(..) => None,
            })
            .collect()
    }

    pub fn images(&self, sprite: Sprite) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Draw::Image(s, _, _) if *s == sprite))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn draw_image(&mut self, sprite: Sprite, x: f32, y: f32) -> io::Result<()> {
        self.calls.push(Draw::Image(sprite, x, y));
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, _style: &TextStyle) -> io::Result<()> {
        self.calls.push(Draw::Text(text.to_string(), x, y));
        Ok(())
    }
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Fresh engine on the default field, clock at 0 ms.
pub fn make_engine() -> Engine<StdRng> {
    Engine::new(GameConfig::default(), seeded_rng(), 0.0).unwrap()
}
