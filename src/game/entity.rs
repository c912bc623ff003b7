//! Entities
//!
//! An `Entity` is a sprite with a position, a hitbox size and a speed.
//! A `MomentumEntity` also keeps a direction that it moves along every
//! tick until something bounces it.

use macroquad::math::Vec2;
use crate::asset::{SpriteId, Sprites};
use super::Rect;

#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub sprite: SpriteId,
    /// Top-left corner in screen pixels
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per tick per unit of direction
    pub speed: f32,
}

impl Entity {
    pub fn new(sprite: SpriteId, pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self { sprite, pos, size, speed }
    }

    /// Step along `dir`, scaled by speed
    pub fn move_by(&mut self, dir: Vec2) {
        self.pos += dir * self.speed;
    }

    /// Hitbox at the current position
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Keep the hitbox inside `bounds`
    pub fn clamp_to(&mut self, bounds: &Rect) {
        let max_x = (bounds.right() - self.size.x).max(bounds.x);
        let max_y = (bounds.bottom() - self.size.y).max(bounds.y);
        self.pos.x = self.pos.x.clamp(bounds.x, max_x);
        self.pos.y = self.pos.y.clamp(bounds.y, max_y);
    }

    pub fn draw(&self, sprites: &Sprites) {
        sprites.draw(self.sprite, self.pos, Some(self.size));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MomentumEntity {
    pub base: Entity,
    pub dir: Vec2,
}

impl MomentumEntity {
    pub fn new(base: Entity, dir: Vec2) -> Self {
        Self { base, dir }
    }

    /// Nudge the direction by `delta`, then step along it
    pub fn move_by(&mut self, delta: Vec2) {
        self.dir += delta;
        self.base.pos += self.dir * self.base.speed;
    }

    /// Hitbox after the next `move_by(Vec2::ZERO)`
    pub fn next_rect(&self) -> Rect {
        let step = self.dir * self.base.speed;
        self.base.rect().translated(step.x, step.y)
    }

    pub fn bounce_x(&mut self) {
        self.dir.x = -self.dir.x;
    }

    pub fn bounce_y(&mut self) {
        self.dir.y = -self.dir.y;
    }
}

/// Will `moving` overlap `entity` after its next step?
pub fn will_hit(entity: &Entity, moving: &MomentumEntity) -> bool {
    entity.rect().intersects(&moving.next_rect())
}
