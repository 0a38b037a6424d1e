//! Player input
//!
//! The host reports raw key codes; they are mapped onto a closed set of
//! logical actions. Held state is kept as a bitfield, and every up->down
//! transition also sets a "pressed" bit that survives until the next tick
//! consumes it. One-shot actions (entering the vehicle, firing) read the
//! pressed bit, so holding a key fires them exactly once and a tap shorter
//! than a tick is still seen.

use crate::consts::KEY_TABLE_SIZE;

/// Logical input actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveForward,
    MoveBack,
    MoveLeft,
    MoveRight,
    Interact,
    Shoot,
}

impl Action {
    /// Map a raw character code to an action (case-insensitive)
    ///
    /// Codes outside the key table and unmapped codes yield `None`.
    pub fn from_key_code(code: i32) -> Option<Self> {
        if !(0..KEY_TABLE_SIZE).contains(&code) {
            return None;
        }
        let ch = char::from(u8::try_from(code).ok()?);
        match ch.to_ascii_lowercase() {
            'w' => Some(Action::MoveForward),
            's' => Some(Action::MoveBack),
            'a' => Some(Action::MoveLeft),
            'd' => Some(Action::MoveRight),
            'e' => Some(Action::Interact),
            ' ' => Some(Action::Shoot),
            _ => None,
        }
    }

    #[inline]
    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Held and freshly-pressed action state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    held: u8,
    pressed: u8,
}

impl InputState {
    pub const fn new() -> Self {
        Self {
            held: 0,
            pressed: 0,
        }
    }

    /// Record a key transition
    pub fn set(&mut self, action: Action, down: bool) {
        let bit = action.bit();
        if down {
            if self.held & bit == 0 {
                self.pressed |= bit;
            }
            self.held |= bit;
        } else {
            self.held &= !bit;
        }
    }

    #[inline]
    pub const fn is_held(&self, action: Action) -> bool {
        self.held & action.bit() != 0
    }

    /// Whether the action went down since the last tick
    #[inline]
    pub const fn was_pressed(&self, action: Action) -> bool {
        self.pressed & action.bit() != 0
    }

    /// Forget press events; called once at the end of every tick
    pub fn end_tick(&mut self) {
        self.pressed = 0;
    }
}
