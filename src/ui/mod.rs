//! On-screen overlay drawn over the demos

mod hud;
mod theme;

pub use hud::draw_hud;
pub use theme::*;
