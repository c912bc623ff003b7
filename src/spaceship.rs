//! Spaceship demo
//!
//! A ship flies over a space background, steered with WASD, the arrow keys
//! or the left stick.

use macroquad::math::Vec2;
use crate::asset::{SpriteId, Sprites};
use crate::config::SpaceshipConfig;
use crate::game::{Entity, Rect};
use crate::input::FrameInput;

pub struct SpaceshipDemo {
    pub player: Entity,
    screen: Rect,
    start: Vec2,
}

impl SpaceshipDemo {
    pub fn new(config: &SpaceshipConfig, screen: Vec2) -> Self {
        let start = screen * 0.5;
        Self {
            player: Entity::new(
                SpriteId::Spaceship,
                start,
                Vec2::new(config.width, config.height),
                config.speed,
            ),
            screen: Rect::screen(screen.x, screen.y),
            start,
        }
    }

    pub fn reset(&mut self) {
        self.player.pos = self.start;
    }

    /// One tick
    pub fn update(&mut self, input: &FrameInput) {
        self.player.move_by(input.move_axis);
        self.player.clamp_to(&self.screen);
    }

    pub fn draw(&self, sprites: &Sprites) {
        sprites.draw(
            SpriteId::Background,
            Vec2::ZERO,
            Some(Vec2::new(self.screen.w, self.screen.h)),
        );
        self.player.draw(sprites);
    }

    pub fn status(&self) -> String {
        format!("Ship: ({:.0}, {:.0})", self.player.pos.x, self.player.pos.y)
    }
}
