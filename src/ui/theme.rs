//! UI Theme - Shared colors and styling constants
//!
//! Colors for the HUD overlay drawn on top of every demo.

use macroquad::prelude::Color;

// =============================================================================
// Base UI Colors
// =============================================================================

/// Translucent panel behind the HUD text
pub const PANEL_BG: Color = Color::new(0.11, 0.11, 0.13, 0.75);

/// Title line (active demo name)
pub const TITLE_COLOR: Color = Color::new(0.9, 0.85, 0.5, 1.0);

/// Primary text color
pub const TEXT_COLOR: Color = Color::new(0.8, 0.8, 0.85, 1.0);

/// Dimmed/secondary text (key hints)
pub const TEXT_DIM: Color = Color::new(0.5, 0.5, 0.55, 1.0);

/// Clear color behind the demos
pub const SCREEN_BG: Color = Color::new(0.0, 0.0, 0.0, 1.0);

// =============================================================================
// Font Sizes
// =============================================================================

/// Title line text size
pub const FONT_SIZE_HEADER: f32 = 18.0;

/// Standard content text size
pub const FONT_SIZE_CONTENT: f32 = 16.0;

/// Line spacing as a multiple of the font size
pub const LINE_SPACING: f32 = 1.2;

/// Gap between the panel edge and the text
pub const PANEL_PADDING: f32 = 6.0;
