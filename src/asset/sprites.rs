//! GPU textures for every sprite the demos draw

use macroquad::prelude::*;
use crate::config::AssetConfig;
use super::{decode_png, placeholder, AssetError, ImageData};

/// Every image the demos know about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Background = 0,
    Spaceship = 1,
    Ball = 2,
    Paddle = 3,
    GrassTile = 4,
    RockTile = 5,
}

impl SpriteId {
    pub const ALL: [SpriteId; 6] = [
        SpriteId::Background,
        SpriteId::Spaceship,
        SpriteId::Ball,
        SpriteId::Paddle,
        SpriteId::GrassTile,
        SpriteId::RockTile,
    ];

    /// File name from the asset config
    pub fn file_name<'a>(&self, assets: &'a AssetConfig) -> &'a str {
        match self {
            SpriteId::Background => &assets.background,
            SpriteId::Spaceship => &assets.spaceship,
            SpriteId::Ball => &assets.ball,
            SpriteId::Paddle => &assets.paddle,
            SpriteId::GrassTile => &assets.grass_tile,
            SpriteId::RockTile => &assets.rock_tile,
        }
    }

    /// Native size of the generated stand-in image
    pub fn placeholder_size(&self) -> (u32, u32) {
        match self {
            SpriteId::Background => (640, 480),
            SpriteId::Spaceship | SpriteId::Ball => (32, 32),
            SpriteId::Paddle => (64, 16),
            SpriteId::GrassTile | SpriteId::RockTile => (64, 64),
        }
    }
}

/// Loaded textures, indexed by `SpriteId`
pub struct Sprites {
    textures: Vec<Texture2D>,
}

async fn load_image_data(path: &str) -> Result<ImageData, AssetError> {
    let bytes = macroquad::file::load_file(path)
        .await
        .map_err(|e| AssetError::IoError(format!("{}: {}", path, e)))?;
    decode_png(&bytes)
}

impl Sprites {
    /// Load every sprite, substituting placeholders for failures
    pub async fn load(assets: &AssetConfig) -> Self {
        let mut textures = Vec::with_capacity(SpriteId::ALL.len());
        let mut missing = 0;

        for id in SpriteId::ALL {
            let path = assets.path(id.file_name(assets));
            let data = match load_image_data(&path).await {
                Ok(data) => {
                    log::info!("Loaded {} ({}x{})", path, data.width, data.height);
                    data
                }
                Err(e) => {
                    log::warn!("Using placeholder for {:?}: {}", id, e);
                    missing += 1;
                    placeholder(id)
                }
            };
            let texture = Texture2D::from_rgba8(data.width, data.height, &data.rgba);
            texture.set_filter(FilterMode::Nearest);
            textures.push(texture);
        }

        if missing > 0 {
            log::warn!("{} of {} sprites are placeholders", missing, SpriteId::ALL.len());
        }
        Self { textures }
    }

    pub fn get(&self, id: SpriteId) -> &Texture2D {
        &self.textures[id as usize]
    }

    /// Blit a sprite with its top-left at `pos`, optionally stretched to `size`
    pub fn draw(&self, id: SpriteId, pos: Vec2, size: Option<Vec2>) {
        draw_texture_ex(
            self.get(id),
            pos.x,
            pos.y,
            WHITE,
            DrawTextureParams {
                dest_size: size,
                ..Default::default()
            },
        );
    }
}
