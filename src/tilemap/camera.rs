//! 2D camera for viewing a world image
//!
//! The world is composited onto the screen through one affine transform:
//! pan by `-position`, then zoom and rotate around the viewport centre.
//! The inverse of the same transform maps screen pixels back into world
//! space (used for the cursor readout).

use macroquad::prelude::*;
use std::fmt;

/// Camera for viewing a world
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Screen size in pixels
    pub viewport: Vec2,
    /// World pixel shown at the viewport's top-left when unzoomed
    pub position: Vec2,
    /// Zoom exponent; scale is 1.01^zoom_factor
    pub zoom_factor: i32,
    /// Degrees, clockwise on screen
    pub rotation: i32,
}

/// Where and how to blit a world texture so it matches `world_matrix`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Top-left of the scaled texture before rotation
    pub origin: Vec2,
    pub size: Vec2,
    pub scale: f32,
    /// Radians, about `pivot`
    pub rotation: f32,
    pub pivot: Vec2,
}

impl Placement {
    /// Screen position of a texture pixel, done the way `draw_texture_ex` does it
    #[cfg(test)]
    fn apply(&self, p: Vec2) -> Vec2 {
        let d = self.origin + p * self.scale - self.pivot;
        let (sin, cos) = self.rotation.sin_cos();
        Vec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos) + self.pivot
    }
}

impl fmt::Display for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "T: [{:.1} {:.1}], R: {}, S: {}",
            self.position.x, self.position.y, self.rotation, self.zoom_factor
        )
    }
}

impl Camera {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            viewport,
            position: Vec2::ZERO,
            zoom_factor: 0,
            rotation: 0,
        }
    }

    pub fn viewport_center(&self) -> Vec2 {
        self.viewport * 0.5
    }

    pub fn scale(&self) -> f32 {
        1.01f32.powi(self.zoom_factor)
    }

    /// World-to-screen transform
    pub fn world_matrix(&self) -> Affine2 {
        let center = self.viewport_center();
        let scale = self.scale();
        // Each step is applied after the previous one
        Affine2::from_translation(center)
            * Affine2::from_angle((self.rotation as f32).to_radians())
            * Affine2::from_scale(Vec2::splat(scale))
            * Affine2::from_translation(-center)
            * Affine2::from_translation(-self.position)
    }

    /// Forward mapping of a world point
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        self.world_matrix().transform_point2(world)
    }

    /// Map a screen pixel into world space.
    ///
    /// Extreme zoom factors can underflow or overflow the scale; the matrix
    /// is then singular and both coordinates come back NaN.
    pub fn screen_to_world(&self, x: i32, y: i32) -> Vec2 {
        let m = self.world_matrix();
        let det = m.matrix2.determinant();
        if det == 0.0 || !det.is_finite() {
            return Vec2::NAN;
        }
        m.inverse().transform_point2(Vec2::new(x as f32, y as f32))
    }

    /// Back to the origin, unrotated and unzoomed
    pub fn reset(&mut self) {
        self.position = Vec2::ZERO;
        self.rotation = 0;
        self.zoom_factor = 0;
    }

    /// Blit parameters for a world texture of `texture_size` pixels
    pub fn placement(&self, texture_size: Vec2) -> Placement {
        let scale = self.scale();
        let center = self.viewport_center();
        Placement {
            origin: (-self.position - center) * scale + center,
            size: texture_size * scale,
            scale,
            rotation: (self.rotation as f32).to_radians(),
            pivot: center,
        }
    }

    /// Draw the world image to the screen through the camera.
    ///
    /// Pass `flip_y` for the texture of a `RenderTarget`, which is stored
    /// bottom-up.
    pub fn render(&self, world: &Texture2D, flip_y: bool) {
        let p = self.placement(world.size());
        draw_texture_ex(
            world,
            p.origin.x,
            p.origin.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(p.size),
                rotation: p.rotation,
                pivot: Some(p.pivot),
                flip_y,
                ..Default::default()
            },
        );
    }
}
