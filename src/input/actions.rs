//! Input action definitions

/// Everything the demos react to, independent of the device that produced it
///
/// Default bindings (keyboard / gamepad):
/// - Move: WASD or arrows / left stick or D-pad
/// - ZoomIn / ZoomOut: E / Q, RT / LT
/// - Rotate: R / X
/// - ResetCamera: Space / Start
/// - NextDemo / PrevDemo: Tab, Shift+Tab / RB, LB
/// - ToggleHud: F1 / Select
/// - Quit: Escape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    // Camera demo
    ZoomIn,
    ZoomOut,
    Rotate,
    ResetCamera,

    // Shell
    NextDemo,
    PrevDemo,
    ToggleHud,
    Quit,
}

impl Action {
    fn bit(self) -> u32 {
        1 << (self as u32)
    }
}

/// Small bitset of actions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionSet(u32);

impl ActionSet {
    pub fn insert(&mut self, action: Action) {
        self.0 |= action.bit();
    }

    /// Insert when `cond` holds
    pub fn set_if(&mut self, action: Action, cond: bool) {
        if cond {
            self.insert(action);
        }
    }

    pub fn contains(&self, action: Action) -> bool {
        self.0 & action.bit() != 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Add every action in `other`
    pub fn extend(&mut self, other: ActionSet) {
        self.0 |= other.0;
    }
}
