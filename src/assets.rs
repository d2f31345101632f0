//! Sprite names and the asset lookup the drawing surface relies on.

use std::collections::HashMap;

use crate::error::GameError;

/// Logical sprite handle. Entities carry one of these, never image data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    Enemy,
    Player,
    Background,
}

impl Sprite {
    pub const ALL: [Sprite; 3] = [Sprite::Enemy, Sprite::Player, Sprite::Background];

    pub fn name(&self) -> &'static str {
        match self {
            Sprite::Enemy => "enemy",
            Sprite::Player => "player",
            Sprite::Background => "background",
        }
    }
}

/// Anything that can hand out a loaded image by its logical name.
pub trait AssetProvider {
    type Image;

    fn image(&self, name: &str) -> Option<&Self::Image>;
}

/// Every sprite resolved to an image, checked once before play starts.
#[derive(Clone, Debug)]
pub struct Assets<I> {
    images: HashMap<Sprite, I>,
}

impl<I: Clone> Assets<I> {
    pub fn load<P>(provider: &P) -> Result<Self, GameError>
    where
        P: AssetProvider<Image = I>,
    {
        let mut images = HashMap::with_capacity(Sprite::ALL.len());
        for sprite in Sprite::ALL {
            let image = provider
                .image(sprite.name())
                .ok_or_else(|| GameError::MissingAsset(sprite.name().to_string()))?;
            images.insert(sprite, image.clone());
        }
        Ok(Self { images })
    }
}

impl<I> Assets<I> {
    /// Every sprite was resolved in `load`, so lookup cannot miss.
    pub fn get(&self, sprite: Sprite) -> &I {
        &self.images[&sprite]
    }
}
