//! Shared game objects: rectangles and entities

mod entity;
mod rect;

pub use entity::{will_hit, Entity, MomentumEntity};
pub use rect::Rect;
