//! Input handling with gamepad support
//!
//! Action-based input that works with keyboard/mouse and a gamepad.
//! Devices are sampled once per frame into a `FrameInput`.

mod actions;
mod gamepad;
mod state;

pub use actions::*;
pub use gamepad::{button, Gamepad};
pub use state::*;
