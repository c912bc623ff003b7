//! Tiny Arcade: a handful of small 2D demos in one window
//!
//! - Spaceship: fly a ship over a space background
//! - Pong: one player against a simple AI paddle
//! - Tile Map: a grass field walled in by rock
//! - Camera Map: the same field seen through a pan/zoom/rotate camera

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod asset;
mod config;
mod game;
mod input;
mod pong;
mod spaceship;
mod tilemap;
mod time;
mod ui;

use macroquad::prelude::*;
use app::{AppState, Demo};
use asset::Sprites;
use config::DemoConfig;
use input::{Action, FrameInput, InputState};
use time::FixedStep;

pub const SCREEN_WIDTH: i32 = 640;
pub const SCREEN_HEIGHT: i32 = 480;

const DEFAULT_CONFIG: &str = "assets/demos.ron";

/// Command line options (native only; the web build always starts on the first demo)
#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[command(name = "tiny-arcade", version, about = "Small 2D demos: spaceship, pong, tile maps")]
struct Cli {
    /// Demo to start on
    #[arg(long, value_enum, default_value = "spaceship")]
    demo: Demo,

    /// Path to the RON config file
    #[arg(long, default_value = DEFAULT_CONFIG)]
    config: String,

    /// Print the effective config as RON and exit
    #[arg(long)]
    print_config: bool,
}

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Tiny Arcade v{}", VERSION),
        window_width: SCREEN_WIDTH,
        window_height: SCREEN_HEIGHT,
        window_resizable: false,
        high_dpi: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    #[cfg(not(target_arch = "wasm32"))]
    let (first_demo, config_path, print_config) = {
        use clap::Parser;
        let cli = Cli::parse();
        (cli.demo, cli.config, cli.print_config)
    };
    #[cfg(target_arch = "wasm32")]
    let (first_demo, config_path, print_config) = (Demo::Spaceship, DEFAULT_CONFIG.to_string(), false);

    let config = DemoConfig::load_or_default(&config_path).await;

    if print_config {
        match config.to_ron_string() {
            Ok(text) => println!("{}", text),
            Err(e) => log::error!("Failed to serialize config: {}", e),
        }
        return;
    }

    let sprites = Sprites::load(&config.assets).await;

    let screen = Vec2::new(SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32);
    let mut app = AppState::new(&config, screen, first_demo);
    let mut input = InputState::new();
    let mut clock = FixedStep::new(config.ticks_per_second);

    if input.has_gamepad() {
        log::info!("Gamepad connected");
    }
    log::info!("=== Tiny Arcade v{} === starting on {}", VERSION, first_demo.label());

    // Presses from frames that ran no tick
    let mut leftover: Option<FrameInput> = None;

    loop {
        let mut frame = input.poll();

        #[cfg(not(target_arch = "wasm32"))]
        if frame.pressed(Action::Quit) {
            log::info!("Quit requested after {} ticks", clock.total_ticks);
            break;
        }

        app.handle_frame_input(&frame);
        if let Some(earlier) = leftover.take() {
            frame.carry_presses(&earlier);
        }

        let ticks = clock.advance(get_frame_time() as f64);
        for _ in 0..ticks {
            app.update(&frame);
            frame.consume_presses();
        }
        if frame.has_presses() {
            leftover = Some(frame.clone());
        }

        clear_background(ui::SCREEN_BG);
        app.draw(&sprites);

        if app.show_hud {
            ui::draw_hud(&app.hud_lines(get_fps()));
        }

        next_frame().await;
    }
}
