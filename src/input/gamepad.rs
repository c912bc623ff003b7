//! Gamepad support
//!
//! Native: first connected controller via gilrs.
//! WASM: no gamepad; keyboard only.

use macroquad::prelude::Vec2;

// Button bits in the polled mask (Xbox naming)
pub mod button {
    pub const X: u32 = 2;
    pub const LB: u32 = 4;
    pub const RB: u32 = 5;
    pub const LT: u32 = 6;
    pub const RT: u32 = 7;
    pub const SELECT: u32 = 8;
    pub const START: u32 = 9;
    pub const DPAD_UP: u32 = 12;
    pub const DPAD_DOWN: u32 = 13;
    pub const DPAD_LEFT: u32 = 14;
    pub const DPAD_RIGHT: u32 = 15;
}

/// Button state of the previous and current poll
#[derive(Debug, Clone, Copy, Default)]
struct ButtonMasks {
    last: u32,
    current: u32,
}

impl ButtonMasks {
    fn update(&mut self, mask: u32) {
        self.last = self.current;
        self.current = mask;
    }

    fn is_down(&self, button: u32) -> bool {
        self.current & (1 << button) != 0
    }

    fn is_pressed(&self, button: u32) -> bool {
        self.is_down(button) && self.last & (1 << button) == 0
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use super::*;
    use gilrs::{Axis, Button as GilrsButton, Gilrs};

    pub struct Gamepad {
        gilrs: Option<Gilrs>,
        deadzone: f32,
        masks: ButtonMasks,
        left_stick: Vec2,
    }

    impl Gamepad {
        pub fn new() -> Self {
            let gilrs = match Gilrs::new() {
                Ok(gilrs) => Some(gilrs),
                Err(e) => {
                    log::warn!("Gamepad support unavailable: {}", e);
                    None
                }
            };
            Self {
                gilrs,
                deadzone: 0.15,
                masks: ButtonMasks::default(),
                left_stick: Vec2::ZERO,
            }
        }

        /// Drain gilrs events and sample the first connected controller
        pub fn poll(&mut self) {
            let Some(gilrs) = self.gilrs.as_mut() else { return };
            while gilrs.next_event().is_some() {}

            let Some((_, gp)) = gilrs.gamepads().next() else {
                self.masks.update(0);
                self.left_stick = Vec2::ZERO;
                return;
            };

            let bindings = [
                (GilrsButton::West, button::X),
                (GilrsButton::LeftTrigger, button::LB),
                (GilrsButton::RightTrigger, button::RB),
                (GilrsButton::LeftTrigger2, button::LT),
                (GilrsButton::RightTrigger2, button::RT),
                (GilrsButton::Select, button::SELECT),
                (GilrsButton::Start, button::START),
                (GilrsButton::DPadUp, button::DPAD_UP),
                (GilrsButton::DPadDown, button::DPAD_DOWN),
                (GilrsButton::DPadLeft, button::DPAD_LEFT),
                (GilrsButton::DPadRight, button::DPAD_RIGHT),
            ];
            let mask = bindings
                .iter()
                .filter(|(b, _)| gp.is_pressed(*b))
                .fold(0u32, |mask, (_, bit)| mask | (1 << bit));
            self.masks.update(mask);

            // gilrs reports stick-up as positive; screen y grows downward
            let x = gp.value(Axis::LeftStickX);
            let y = -gp.value(Axis::LeftStickY);
            self.left_stick = apply_deadzone(x, y, self.deadzone);
        }

        pub fn has_gamepad(&self) -> bool {
            self.gilrs.as_ref().is_some_and(|g| g.gamepads().next().is_some())
        }

        pub fn is_button_down(&self, button: u32) -> bool {
            self.masks.is_down(button)
        }

        pub fn is_button_pressed(&self, button: u32) -> bool {
            self.masks.is_pressed(button)
        }

        pub fn left_stick(&self) -> Vec2 {
            self.left_stick
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod platform {
    use super::*;

    pub struct Gamepad;

    impl Gamepad {
        pub fn new() -> Self {
            Self
        }

        pub fn poll(&mut self) {}

        pub fn has_gamepad(&self) -> bool {
            false
        }

        pub fn is_button_down(&self, _button: u32) -> bool {
            false
        }

        pub fn is_button_pressed(&self, _button: u32) -> bool {
            false
        }

        pub fn left_stick(&self) -> Vec2 {
            Vec2::ZERO
        }
    }
}

impl Default for Gamepad {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply radial deadzone with linear rescaling
fn apply_deadzone(x: f32, y: f32, deadzone: f32) -> Vec2 {
    let len = (x * x + y * y).sqrt();
    if len < deadzone {
        return Vec2::ZERO;
    }
    // Rescale from deadzone..1.0 to 0.0..1.0
    let scale = (len - deadzone) / (1.0 - deadzone) / len;
    Vec2::new(x * scale, y * scale)
}

pub use platform::Gamepad;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadzone_swallows_drift() {
        assert_eq!(apply_deadzone(0.05, -0.05, 0.15), Vec2::ZERO);
    }

    #[test]
    fn test_deadzone_rescales_full_deflection() {
        let v = apply_deadzone(1.0, 0.0, 0.15);
        assert!((v.x - 1.0).abs() < 0.001);
        assert!(v.y.abs() < 0.001);
    }

    #[test]
    fn test_pressed_is_edge_triggered() {
        let mut masks = ButtonMasks::default();
        masks.update(1 << button::START);
        assert!(masks.is_pressed(button::START));
        masks.update(1 << button::START);
        assert!(masks.is_down(button::START));
        assert!(!masks.is_pressed(button::START));
        masks.update(0);
        assert!(!masks.is_down(button::START));
    }
}
