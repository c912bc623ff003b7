//! Sprite assets
//!
//! PNG files are fetched through macroquad's file API (works natively and in
//! the browser) and decoded with the `image` crate. A sprite that is missing
//! or broken is replaced by a generated placeholder so every demo stays
//! playable from a bare checkout.

mod image_data;
mod sprites;

pub use image_data::{decode_png, placeholder, ImageData, MAX_IMAGE_SIDE};
pub use sprites::{SpriteId, Sprites};

/// Error type for sprite loading
#[derive(Debug, Clone, PartialEq)]
pub enum AssetError {
    /// File could not be read or fetched
    IoError(String),
    /// Bytes are not a readable PNG
    DecodeError(String),
    /// Image exceeds the texture size we accept
    TooLarge { width: u32, height: u32, max: u32 },
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::IoError(msg) => write!(f, "I/O error: {}", msg),
            AssetError::DecodeError(msg) => write!(f, "decode error: {}", msg),
            AssetError::TooLarge { width, height, max } => {
                write!(f, "image too large: {}x{} (max: {} per side)", width, height, max)
            }
        }
    }
}

impl std::error::Error for AssetError {}

impl From<image::ImageError> for AssetError {
    fn from(e: image::ImageError) -> Self {
        AssetError::DecodeError(e.to_string())
    }
}
