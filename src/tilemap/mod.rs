//! Tile maps and the camera used to look at them

mod camera;
mod map;
mod viewer;

pub use camera::Camera;
pub use map::TileMap;
pub use viewer::{CameraMapDemo, TileMapDemo};
