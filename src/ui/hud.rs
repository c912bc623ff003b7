//! Heads-up display
//!
//! A translucent text panel in the bottom-left corner. The first line is
//! drawn as a title, the last one dimmed as a key hint.

use macroquad::prelude::*;
use super::theme::*;

/// Panel size needed for `lines`, given a text measuring function
fn panel_size(lines: &[String], measure: impl Fn(&str, f32) -> f32) -> Vec2 {
    let mut width: f32 = 0.0;
    let mut height = 0.0;
    for (i, line) in lines.iter().enumerate() {
        let size = if i == 0 { FONT_SIZE_HEADER } else { FONT_SIZE_CONTENT };
        width = width.max(measure(line, size));
        height += size * LINE_SPACING;
    }
    Vec2::new(width + PANEL_PADDING * 2.0, height + PANEL_PADDING * 2.0)
}

fn line_color(index: usize, count: usize) -> Color {
    if index == 0 {
        TITLE_COLOR
    } else if index + 1 == count && count > 2 {
        TEXT_DIM
    } else {
        TEXT_COLOR
    }
}

/// Draw the HUD panel; nothing is drawn for an empty list
pub fn draw_hud(lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    let size = panel_size(lines, |text, font_size| {
        measure_text(text, None, font_size as u16, 1.0).width
    });
    let top = screen_height() - size.y;
    draw_rectangle(0.0, top, size.x, size.y, PANEL_BG);

    let mut y = top + PANEL_PADDING;
    for (i, line) in lines.iter().enumerate() {
        let font_size = if i == 0 { FONT_SIZE_HEADER } else { FONT_SIZE_CONTENT };
        y += font_size * LINE_SPACING;
        // Baseline sits a little above the line's bottom; round for crisp text
        let baseline = (y - font_size * (LINE_SPACING - 1.0)).round();
        draw_text(line, PANEL_PADDING.round(), baseline, font_size, line_color(i, lines.len()));
    }
}
