//! Application state and demo switching
//!
//! Fixed set of demos, each with its own persistent state.
//! Switch between them with Tab / Shift+Tab (RB / LB) or the number keys;
//! all demos stay alive in the background.

use crate::asset::Sprites;
use crate::config::DemoConfig;
use crate::input::{Action, FrameInput};
use crate::pong::PongDemo;
use crate::spaceship::SpaceshipDemo;
use crate::tilemap::{CameraMapDemo, TileMapDemo};
use macroquad::math::Vec2;

/// The available demos (fixed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(not(target_arch = "wasm32"), derive(clap::ValueEnum))]
pub enum Demo {
    Spaceship = 0,
    Pong = 1,
    TileMap = 2,
    CameraMap = 3,
}

impl Demo {
    pub const ALL: [Demo; 4] = [
        Demo::Spaceship,
        Demo::Pong,
        Demo::TileMap,
        Demo::CameraMap,
    ];

    /// Get the display label for this demo
    pub fn label(&self) -> &'static str {
        match self {
            Demo::Spaceship => "Spaceship",
            Demo::Pong => "Pong",
            Demo::TileMap => "Tile Map",
            Demo::CameraMap => "Camera Map",
        }
    }

    pub fn from_index(i: usize) -> Option<Demo> {
        Demo::ALL.get(i).copied()
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn next(&self) -> Demo {
        Demo::ALL[(self.index() + 1) % Demo::ALL.len()]
    }

    pub fn prev(&self) -> Demo {
        Demo::ALL[(self.index() + Demo::ALL.len() - 1) % Demo::ALL.len()]
    }

    /// Key hints shown at the bottom of the HUD
    fn controls(&self) -> &'static str {
        match self {
            Demo::Spaceship => "WASD/arrows: fly",
            Demo::Pong => "A/D: move paddle",
            Demo::TileMap => "",
            Demo::CameraMap => "WASD: pan  Q/E: zoom  R: rotate  Space: reset",
        }
    }
}

/// Main application state containing all demo states
pub struct AppState {
    /// Currently active demo
    pub active_demo: Demo,

    /// HUD overlay visible
    pub show_hud: bool,

    pub spaceship: SpaceshipDemo,
    pub pong: PongDemo,
    pub tile_map: TileMapDemo,
    pub camera_map: CameraMapDemo,
}

impl AppState {
    pub fn new(config: &DemoConfig, screen: Vec2, first: Demo) -> Self {
        let mut state = Self {
            active_demo: first,
            show_hud: true,
            spaceship: SpaceshipDemo::new(&config.spaceship, screen),
            pong: PongDemo::new(&config.pong, screen),
            tile_map: TileMapDemo::new(&config.tilemap, screen),
            camera_map: CameraMapDemo::new(&config.tilemap, &config.camera, screen),
        };
        state.set_active_demo(first);
        state
    }

    /// Switch to a different demo. Entering Pong starts a fresh match.
    pub fn set_active_demo(&mut self, demo: Demo) {
        if demo == Demo::Pong {
            self.pong.reset();
        }
        if demo != self.active_demo {
            log::info!("Switching to {}", demo.label());
        }
        self.active_demo = demo;
    }

    /// Frame-level controls: demo switching and the HUD toggle
    pub fn handle_frame_input(&mut self, input: &FrameInput) {
        if input.pressed(Action::ToggleHud) {
            self.show_hud = !self.show_hud;
        }

        let target = if let Some(demo) = input.demo_hotkey.and_then(Demo::from_index) {
            Some(demo)
        } else if input.pressed(Action::NextDemo) {
            Some(self.active_demo.next())
        } else if input.pressed(Action::PrevDemo) {
            Some(self.active_demo.prev())
        } else {
            None
        };

        if let Some(demo) = target {
            if demo != self.active_demo {
                self.set_active_demo(demo);
            }
        }
    }

    /// One tick of the active demo
    pub fn update(&mut self, input: &FrameInput) {
        match self.active_demo {
            Demo::Spaceship => self.spaceship.update(input),
            Demo::Pong => self.pong.update(input),
            Demo::TileMap => {}
            Demo::CameraMap => self.camera_map.update(input),
        }
    }

    pub fn draw(&mut self, sprites: &Sprites) {
        match self.active_demo {
            Demo::Spaceship => self.spaceship.draw(sprites),
            Demo::Pong => self.pong.draw(sprites),
            Demo::TileMap => self.tile_map.draw(sprites),
            Demo::CameraMap => self.camera_map.draw(sprites),
        }
    }

    /// HUD text: title, demo status, frame rate, then key hints
    pub fn hud_lines(&self, fps: i32) -> Vec<String> {
        let demo = self.active_demo;
        let mut lines = vec![format!(
            "{} ({}/{})",
            demo.label(),
            demo.index() + 1,
            Demo::ALL.len()
        )];
        match demo {
            Demo::Spaceship => lines.push(self.spaceship.status()),
            Demo::Pong => lines.push(self.pong.status()),
            Demo::TileMap => lines.push(self.tile_map.status()),
            Demo::CameraMap => lines.extend(self.camera_map.status()),
        }
        lines.push(format!("FPS: {}", fps));
        let controls = demo.controls();
        lines.push(if controls.is_empty() {
            "Tab: next demo  F1: hide".to_string()
        } else {
            format!("{}  Tab: next demo", controls)
        });
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pong::Score;

    fn app(first: Demo) -> AppState {
        AppState::new(&DemoConfig::default(), Vec2::new(640.0, 480.0), first)
    }

    #[test]
    fn test_demo_cycling_wraps() {
        assert_eq!(Demo::Spaceship.next(), Demo::Pong);
        assert_eq!(Demo::CameraMap.next(), Demo::Spaceship);
        assert_eq!(Demo::Spaceship.prev(), Demo::CameraMap);
        assert_eq!(Demo::from_index(2), Some(Demo::TileMap));
        assert_eq!(Demo::from_index(4), None);
    }

    #[test]
    fn test_next_and_prev_actions() {
        let mut app = app(Demo::Spaceship);
        app.handle_frame_input(&FrameInput::default().with_pressed(Action::PrevDemo));
        assert_eq!(app.active_demo, Demo::CameraMap);
        app.handle_frame_input(&FrameInput::default().with_pressed(Action::NextDemo));
        assert_eq!(app.active_demo, Demo::Spaceship);
    }

    #[test]
    fn test_hotkey_wins_over_cycling() {
        let mut app = app(Demo::Spaceship);
        let mut input = FrameInput::default().with_pressed(Action::NextDemo);
        input.demo_hotkey = Some(3);
        app.handle_frame_input(&input);
        assert_eq!(app.active_demo, Demo::CameraMap);

        // Out-of-range hotkeys fall through to the cycle actions
        let mut input = FrameInput::default();
        input.demo_hotkey = Some(7);
        app.handle_frame_input(&input);
        assert_eq!(app.active_demo, Demo::CameraMap);
    }

    #[test]
    fn test_entering_pong_resets_it() {
        let mut app = app(Demo::Pong);
        app.pong.score = Score { one: 2, two: 1 };
        app.handle_frame_input(&FrameInput::default().with_pressed(Action::NextDemo));
        app.handle_frame_input(&FrameInput::default().with_pressed(Action::PrevDemo));
        assert_eq!(app.active_demo, Demo::Pong);
        assert_eq!(app.pong.score, Score::default());
    }

    #[test]
    fn test_update_only_touches_active_demo() {
        let mut app = app(Demo::Spaceship);
        let right = FrameInput::default().with_move(Vec2::new(1.0, 0.0));
        app.update(&right);
        assert_eq!(app.spaceship.player.pos.x, 324.0);
        assert_eq!(app.camera_map.camera.position, Vec2::ZERO);
    }

    #[test]
    fn test_toggle_hud() {
        let mut app = app(Demo::TileMap);
        assert!(app.show_hud);
        app.handle_frame_input(&FrameInput::default().with_pressed(Action::ToggleHud));
        assert!(!app.show_hud);
    }

    #[test]
    fn test_hud_lines() {
        let app = app(Demo::CameraMap);
        let lines = app.hud_lines(60);
        assert_eq!(lines[0], "Camera Map (4/4)");
        assert_eq!(lines[1], "T: [0.0 0.0], R: 0, S: 0");
        assert!(lines.contains(&"FPS: 60".to_string()));
    }
}
