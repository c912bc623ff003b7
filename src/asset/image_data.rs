//! Decoded RGBA images and generated placeholders

use image::{ImageFormat, ImageReader, Rgba, RgbaImage};
use std::io::Cursor;
use super::{AssetError, SpriteId};

/// Largest accepted image side, in pixels
pub const MAX_IMAGE_SIDE: u32 = 4096;

/// Straight RGBA8 pixels, ready for `Texture2D::from_rgba8`
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    pub width: u16,
    pub height: u16,
    pub rgba: Vec<u8>,
}

fn check_size(width: u32, height: u32) -> Result<(), AssetError> {
    if width > MAX_IMAGE_SIDE || height > MAX_IMAGE_SIDE {
        return Err(AssetError::TooLarge { width, height, max: MAX_IMAGE_SIDE });
    }
    Ok(())
}

impl ImageData {
    fn from_image(img: RgbaImage) -> Result<Self, AssetError> {
        let (width, height) = img.dimensions();
        check_size(width, height)?;
        Ok(Self {
            width: width as u16,
            height: height as u16,
            rgba: img.into_raw(),
        })
    }

    /// RGBA of one pixel (test helper for generated art)
    #[cfg(test)]
    pub fn pixel(&self, x: u16, y: u16) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [self.rgba[i], self.rgba[i + 1], self.rgba[i + 2], self.rgba[i + 3]]
    }
}

/// Decode PNG bytes into RGBA.
///
/// The size limit is checked against the header before any pixel data is
/// decoded.
pub fn decode_png(bytes: &[u8]) -> Result<ImageData, AssetError> {
    let (width, height) = ImageReader::with_format(Cursor::new(bytes), ImageFormat::Png)
        .into_dimensions()?;
    check_size(width, height)?;

    let img = ImageReader::with_format(Cursor::new(bytes), ImageFormat::Png).decode()?;
    ImageData::from_image(img.to_rgba8())
}

/// Cheap deterministic per-pixel noise
fn speckle(x: u32, y: u32) -> u32 {
    let mut h = x.wrapping_mul(374_761_393) ^ y.wrapping_mul(668_265_263);
    h = (h ^ (h >> 13)).wrapping_mul(1_274_126_177);
    h ^ (h >> 16)
}

const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Generate stand-in art for a sprite whose file could not be loaded
pub fn placeholder(id: SpriteId) -> ImageData {
    let (w, h) = id.placeholder_size();
    let img = match id {
        SpriteId::Background => RgbaImage::from_fn(w, h, |x, y| {
            let n = speckle(x, y);
            if n % 397 == 0 {
                let v = 160 + (n % 96) as u8;
                Rgba([v, v, v, 255])
            } else {
                Rgba([8, 10, 28, 255])
            }
        }),
        SpriteId::Spaceship => RgbaImage::from_fn(w, h, |x, y| {
            // Upward-pointing triangle
            let half = (y as f32 + 1.0) * 0.5;
            let cx = w as f32 * 0.5;
            if (x as f32 + 0.5 - cx).abs() <= half {
                Rgba([200, 210, 230, 255])
            } else {
                CLEAR
            }
        }),
        SpriteId::Ball => RgbaImage::from_fn(w, h, |x, y| {
            let r = w as f32 * 0.5;
            let dx = x as f32 + 0.5 - r;
            let dy = y as f32 + 0.5 - r;
            if dx * dx + dy * dy <= r * r {
                Rgba([245, 245, 245, 255])
            } else {
                CLEAR
            }
        }),
        SpriteId::Paddle => RgbaImage::from_fn(w, h, |x, y| {
            if x == 0 || y == 0 || x == w - 1 || y == h - 1 {
                Rgba([40, 90, 160, 255])
            } else {
                Rgba([90, 160, 230, 255])
            }
        }),
        SpriteId::GrassTile => RgbaImage::from_fn(w, h, |x, y| {
            let n = speckle(x, y) % 7;
            Rgba([40 + n as u8 * 3, 130 + n as u8 * 6, 50, 255])
        }),
        SpriteId::RockTile => RgbaImage::from_fn(w, h, |x, y| {
            if x == 0 || y == 0 || x == w - 1 || y == h - 1 {
                Rgba([60, 60, 64, 255])
            } else {
                let v = 110 + (speckle(x, y) % 5) as u8 * 8;
                Rgba([v, v, v + 4, 255])
            }
        }),
    };
    // Placeholder sizes are far below the limit
    ImageData {
        width: w as u16,
        height: h as u16,
        rgba: img.into_raw(),
    }
}
