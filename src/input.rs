// Keyboard events and the little state machine they drive.
// Visual: arrows slide the circle, E grows it, Q shrinks it.

use crate::config::RADIUS_STEP;

/// Keys the demo reacts to, already translated from the window backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Grow,
    Shrink,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

/// Where the circle is, where it is heading, and how big it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputState {
    pub x: i32,
    pub y: i32,
    pub xvel: i32, // -1, 0 or +1
    pub yvel: i32, // -1, 0 or +1
    pub radius: i32,
}

impl InputState {
    pub fn new(x: i32, y: i32, radius: i32) -> Self {
        Self { x, y, xvel: 0, yvel: 0, radius }
    }

    /// Pressing a direction always wins, even over an opposite key still held.
    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Up => self.yvel = -1,
            Key::Down => self.yvel = 1,
            Key::Left => self.xvel = -1,
            Key::Right => self.xvel = 1,
            Key::Grow => self.radius = self.radius.saturating_add(RADIUS_STEP),
            Key::Shrink => self.radius = self.radius.saturating_sub(RADIUS_STEP),
        }
    }

    /// A release only stops motion the released key is currently driving.
    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Up if self.yvel < 0 => self.yvel = 0,
            Key::Down if self.yvel > 0 => self.yvel = 0,
            Key::Left if self.xvel < 0 => self.xvel = 0,
            Key::Right if self.xvel > 0 => self.xvel = 0,
            _ => {}
        }
    }

    /// One frame of motion, then clamp the center to `[0, width] × [0, height]`.
    /// The upper bound is inclusive, so the center may sit one past the last column/row.
    pub fn integrate(&mut self, width: usize, height: usize) {
        let max_x = i32::try_from(width).unwrap_or(i32::MAX);
        let max_y = i32::try_from(height).unwrap_or(i32::MAX);
        self.x = self.x.saturating_add(self.xvel).clamp(0, max_x);
        self.y = self.y.saturating_add(self.yvel).clamp(0, max_y);
    }
}
