//! Tile map demos
//!
//! `TileMapDemo` draws the map straight to the screen. `CameraMapDemo` draws
//! it once into an off-screen world image and composites that image through
//! a `Camera` every frame.

use macroquad::prelude::*;
use crate::asset::Sprites;
use crate::config::{CameraConfig, TileMapConfig};
use crate::game::Rect as ViewRect;
use crate::input::{Action, FrameInput};
use super::{Camera, TileMap};

fn build_map(config: &TileMapConfig) -> TileMap {
    TileMap::generate(
        config.columns as usize,
        config.rows as usize,
        Vec2::new(config.tile_width as f32, config.tile_height as f32),
    )
}

/// The tile map drawn directly, no camera
pub struct TileMapDemo {
    map: TileMap,
    screen: ViewRect,
}

impl TileMapDemo {
    pub fn new(config: &TileMapConfig, screen: Vec2) -> Self {
        Self {
            map: build_map(config),
            screen: ViewRect::screen(screen.x, screen.y),
        }
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    pub fn draw(&self, sprites: &Sprites) {
        self.map.draw(sprites, &self.screen);
    }

    pub fn status(&self) -> String {
        let size = self.map.pixel_size();
        format!(
            "Map: {}x{} tiles ({}x{} px)",
            self.map.columns(),
            self.map.rows(),
            size.x,
            size.y
        )
    }
}

/// The tile map seen through a pan/zoom/rotate camera
pub struct CameraMapDemo {
    map: TileMap,
    pub camera: Camera,
    controls: CameraConfig,
    world: Option<RenderTarget>,
    dirty: bool,
    cursor_world: Vec2,
}

impl CameraMapDemo {
    pub fn new(map_config: &TileMapConfig, controls: &CameraConfig, screen: Vec2) -> Self {
        Self {
            map: build_map(map_config),
            camera: Camera::new(screen),
            controls: controls.clone(),
            world: None,
            dirty: true,
            cursor_world: Vec2::ZERO,
        }
    }

    /// World position under the mouse as of the last tick
    pub fn cursor_world(&self) -> Vec2 {
        self.cursor_world
    }

    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    pub fn reset(&mut self) {
        self.camera.reset();
        self.dirty = true;
    }

    /// One tick
    pub fn update(&mut self, input: &FrameInput) {
        let cam = &mut self.camera;
        cam.position += input.move_axis * self.controls.pan_speed;

        let limit = self.controls.zoom_limit;
        if input.held(Action::ZoomOut) {
            cam.zoom_factor = (cam.zoom_factor - self.controls.zoom_step).max(-limit);
        }
        if input.held(Action::ZoomIn) {
            cam.zoom_factor = (cam.zoom_factor + self.controls.zoom_step).min(limit);
        }
        if input.held(Action::Rotate) {
            cam.rotation = (cam.rotation + self.controls.rotate_step).rem_euclid(360);
        }

        if input.pressed(Action::ResetCamera) {
            log::debug!("Camera reset from {}", self.camera);
            self.reset();
        }

        self.cursor_world = self
            .camera
            .screen_to_world(input.mouse.x as i32, input.mouse.y as i32);
    }

    /// Redraw the world image if needed, then composite it through the camera
    pub fn draw(&mut self, sprites: &Sprites) {
        let size = self.map.pixel_size();
        let world = self.world.get_or_insert_with(|| {
            log::debug!("Creating {}x{} world image", size.x, size.y);
            let target = render_target(size.x as u32, size.y as u32);
            target.texture.set_filter(FilterMode::Nearest);
            self.dirty = true;
            target
        });

        if self.dirty {
            let mut world_camera = Camera2D::from_display_rect(Rect::new(0.0, 0.0, size.x, size.y));
            world_camera.render_target = Some(world.clone());
            set_camera(&world_camera);
            clear_background(BLACK);
            self.map.draw(sprites, &ViewRect::new(0.0, 0.0, size.x, size.y));
            set_default_camera();
            self.dirty = false;
        }

        self.camera.render(&world.texture, true);
    }

    pub fn status(&self) -> Vec<String> {
        let c = self.cursor_world;
        vec![
            self.camera.to_string(),
            format!("Cursor: {:.1}, {:.1}", c.x, c.y),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Vec2 = Vec2::new(640.0, 480.0);

    fn demo() -> CameraMapDemo {
        CameraMapDemo::new(&TileMapConfig::default(), &CameraConfig::default(), SCREEN)
    }

    #[test]
    fn test_tile_map_demo_uses_config() {
        let config = TileMapConfig { columns: 8, rows: 4, ..Default::default() };
        let demo = TileMapDemo::new(&config, SCREEN);
        assert_eq!(demo.map().pixel_size(), Vec2::new(512.0, 256.0));
        assert_eq!(demo.status(), "Map: 8x4 tiles (512x256 px)");
    }

    #[test]
    fn test_pan_one_pixel_per_tick() {
        let mut demo = demo();
        let right = FrameInput::default().with_move(Vec2::new(1.0, 0.0));
        for _ in 0..10 {
            demo.update(&right);
        }
        assert_eq!(demo.camera.position, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut demo = demo();
        demo.camera.zoom_factor = 2399;
        let zoom_in = FrameInput::default().with_held(Action::ZoomIn);
        demo.update(&zoom_in);
        demo.update(&zoom_in);
        assert_eq!(demo.camera.zoom_factor, 2400);

        demo.camera.zoom_factor = -2400;
        demo.update(&FrameInput::default().with_held(Action::ZoomOut));
        assert_eq!(demo.camera.zoom_factor, -2400);
    }

    #[test]
    fn test_rotation_wraps() {
        let mut demo = demo();
        demo.camera.rotation = 359;
        demo.update(&FrameInput::default().with_held(Action::Rotate));
        assert_eq!(demo.camera.rotation, 0);
    }

    #[test]
    fn test_reset_marks_world_dirty() {
        let mut demo = demo();
        demo.dirty = false;
        demo.camera.position = Vec2::new(50.0, 50.0);
        demo.camera.rotation = 90;
        demo.update(&FrameInput::default().with_pressed(Action::ResetCamera));
        assert_eq!(demo.camera, Camera::new(SCREEN));
        assert!(demo.needs_redraw());
    }

    #[test]
    fn test_cursor_tracks_world_position() {
        let mut demo = demo();
        demo.camera.position = Vec2::new(100.0, 40.0);
        demo.update(&FrameInput::default().with_mouse(320.0, 240.0));
        let c = demo.cursor_world();
        assert!((c - Vec2::new(420.0, 280.0)).length() < 0.001);
        assert_eq!(demo.status()[1], "Cursor: 420.0, 280.0");
    }
}
