//! Input state management
//!
//! Polls keyboard/mouse (macroquad) and the gamepad once per frame and
//! folds them into a `FrameInput` snapshot. Demo logic only ever sees the
//! snapshot, so it can be driven from tests without a window.

use macroquad::prelude::*;
use super::{button, Action, ActionSet, Gamepad};

/// Everything the demos need to know about input for one frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    held: ActionSet,
    pressed: ActionSet,
    /// Movement direction, length at most 1, y pointing down
    pub move_axis: Vec2,
    /// Cursor in screen pixels
    pub mouse: Vec2,
    /// Number key 1..9 pressed this frame (zero-based)
    pub demo_hotkey: Option<usize>,
}

impl FrameInput {
    /// Action is currently held
    pub fn held(&self, action: Action) -> bool {
        self.held.contains(action)
    }

    /// Action went down this frame
    pub fn pressed(&self, action: Action) -> bool {
        self.pressed.contains(action)
    }

    /// Drop edge-triggered state once the first tick of a frame has seen it
    pub fn consume_presses(&mut self) {
        self.pressed.clear();
        self.demo_hotkey = None;
    }

    /// Any presses still unconsumed
    pub fn has_presses(&self) -> bool {
        !self.pressed.is_empty()
    }

    /// Take over presses from a frame that ran no ticks
    pub fn carry_presses(&mut self, earlier: &FrameInput) {
        self.pressed.extend(earlier.pressed);
    }
}

#[cfg(test)]
impl FrameInput {
    pub fn with_held(mut self, action: Action) -> Self {
        self.held.insert(action);
        self
    }

    pub fn with_pressed(mut self, action: Action) -> Self {
        self.held.insert(action);
        self.pressed.insert(action);
        self
    }

    pub fn with_move(mut self, axis: Vec2) -> Self {
        self.move_axis = axis;
        self
    }

    pub fn with_mouse(mut self, x: f32, y: f32) -> Self {
        self.mouse = Vec2::new(x, y);
        self
    }
}

const DEMO_KEYS: [KeyCode; 9] = [
    KeyCode::Key1, KeyCode::Key2, KeyCode::Key3,
    KeyCode::Key4, KeyCode::Key5, KeyCode::Key6,
    KeyCode::Key7, KeyCode::Key8, KeyCode::Key9,
];

/// Combine digital direction flags into a unit-or-shorter vector
fn digital_axis(up: bool, down: bool, left: bool, right: bool) -> Vec2 {
    let mut v = Vec2::ZERO;
    if up { v.y -= 1.0; }
    if down { v.y += 1.0; }
    if left { v.x -= 1.0; }
    if right { v.x += 1.0; }
    // Diagonals would otherwise be ~1.41x faster
    if v.length() > 1.0 {
        v = v.normalize();
    }
    v
}

/// Unified input state that handles both keyboard/mouse and gamepad
pub struct InputState {
    gamepad: Gamepad,
}

impl InputState {
    pub fn new() -> Self {
        Self { gamepad: Gamepad::new() }
    }

    pub fn has_gamepad(&self) -> bool {
        self.gamepad.has_gamepad()
    }

    /// Sample all devices; call once per frame
    pub fn poll(&mut self) -> FrameInput {
        self.gamepad.poll();
        let gp = &self.gamepad;

        let mut held = ActionSet::default();
        held.set_if(Action::MoveUp, is_key_down(KeyCode::W) || is_key_down(KeyCode::Up) || gp.is_button_down(button::DPAD_UP));
        held.set_if(Action::MoveDown, is_key_down(KeyCode::S) || is_key_down(KeyCode::Down) || gp.is_button_down(button::DPAD_DOWN));
        held.set_if(Action::MoveLeft, is_key_down(KeyCode::A) || is_key_down(KeyCode::Left) || gp.is_button_down(button::DPAD_LEFT));
        held.set_if(Action::MoveRight, is_key_down(KeyCode::D) || is_key_down(KeyCode::Right) || gp.is_button_down(button::DPAD_RIGHT));
        held.set_if(Action::ZoomIn, is_key_down(KeyCode::E) || gp.is_button_down(button::RT));
        held.set_if(Action::ZoomOut, is_key_down(KeyCode::Q) || gp.is_button_down(button::LT));
        held.set_if(Action::Rotate, is_key_down(KeyCode::R) || gp.is_button_down(button::X));

        let shift = is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift);
        let tab = is_key_pressed(KeyCode::Tab);

        let mut pressed = ActionSet::default();
        pressed.set_if(Action::ResetCamera, is_key_pressed(KeyCode::Space) || gp.is_button_pressed(button::START));
        pressed.set_if(Action::NextDemo, (tab && !shift) || gp.is_button_pressed(button::RB));
        pressed.set_if(Action::PrevDemo, (tab && shift) || gp.is_button_pressed(button::LB));
        pressed.set_if(Action::ToggleHud, is_key_pressed(KeyCode::F1) || gp.is_button_pressed(button::SELECT));
        pressed.set_if(Action::Quit, is_key_pressed(KeyCode::Escape));

        let mut move_axis = digital_axis(
            held.contains(Action::MoveUp),
            held.contains(Action::MoveDown),
            held.contains(Action::MoveLeft),
            held.contains(Action::MoveRight),
        );
        // Analog stick wins when it is pushed further
        let stick = gp.left_stick();
        if stick.length() > move_axis.length() {
            move_axis = stick.clamp_length_max(1.0);
        }

        let (mx, my) = mouse_position();

        FrameInput {
            held,
            pressed,
            move_axis,
            mouse: Vec2::new(mx, my),
            demo_hotkey: DEMO_KEYS.iter().position(|k| is_key_pressed(*k)),
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
