// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows the frame buffer.
// 2) Scanline fills for circles and rectangles, clipped to the frame.

use std::collections::VecDeque;

use crate::error::Error;
use crate::input::{Event, Key};
use crate::types::FrameBuffer;
use minifb::{Key as WinKey, KeyRepeat, Window, WindowOptions};

/// Anything that can show a finished frame and hand back input.
pub trait DisplaySink {
    /// Push the pixels for this frame to the screen.
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Error>;

    /// Next pending event, if any. Never blocks.
    fn poll_event(&mut self) -> Option<Event>;
}

pub struct Drawer {
    window: Window,             // the on-screen window you see
    pending: VecDeque<Event>,   // events seen by the window but not yet polled
    quit_queued: bool,
}

impl Drawer {
    /// Open a window of exactly `width × height` pixels.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        log::info!("opened {width}x{height} window \"{title}\"");
        Ok(Self {
            window,
            pending: VecDeque::new(),
            quit_queued: false,
        })
    }

    // minifb only refreshes key state inside update_with_buffer, so we
    // harvest transitions right after every present.
    // Auto-repeat is on so holding E / Q keeps resizing.
    fn collect_events(&mut self) {
        let released = self.window.get_keys_released();
        let pressed = self.window.get_keys_pressed(KeyRepeat::Yes);
        let closing = !self.window.is_open() || self.window.is_key_down(WinKey::Escape);
        queue_events(&mut self.pending, &mut self.quit_queued, &released, &pressed, closing);
    }
}

/// Translate one update's worth of window key state into events.
/// Releases go first, then presses, then a single Quit for the whole run.
fn queue_events(
    pending: &mut VecDeque<Event>,
    quit_queued: &mut bool,
    released: &[WinKey],
    pressed: &[WinKey],
    closing: bool,
) {
    pending.extend(released.iter().filter_map(|&k| map_key(k)).map(Event::KeyUp));
    pending.extend(pressed.iter().filter_map(|&k| map_key(k)).map(Event::KeyDown));

    if closing && !*quit_queued {
        *quit_queued = true;
        pending.push_back(Event::Quit);
    }
}

impl DisplaySink for Drawer {
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&frame.pixels, frame.width, frame.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        self.collect_events();
        Ok(())
    }

    fn poll_event(&mut self) -> Option<Event> {
        self.pending.pop_front()
    }
}

/// Arrows move, E grows, Q shrinks. Everything else is ignored.
fn map_key(key: WinKey) -> Option<Key> {
    match key {
        WinKey::Up => Some(Key::Up),
        WinKey::Down => Some(Key::Down),
        WinKey::Left => Some(Key::Left),
        WinKey::Right => Some(Key::Right),
        WinKey::E => Some(Key::Grow),
        WinKey::Q => Some(Key::Shrink),
        _ => None,
    }
}

/* ---------- Software drawing: clipped scanline fills ---------- */

/// Fill every pixel within distance `r` of `(cx, cy)`.
/// Visual: a solid disc; whatever hangs off the frame edge is simply not drawn.
///
/// Total over all inputs: `r <= 0` draws nothing, and the row range is
/// clipped before the loop so huge radii cost at most one pass over the frame.
pub fn fill_circle(fb: &mut FrameBuffer, cx: i32, cy: i32, r: i32, color: u32) {
    if r <= 0 || fb.width == 0 || fb.height == 0 {
        return;
    }
    // i64 holds r² for any i32 radius.
    let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(r));
    let (w, h) = (fb.width as i64, fb.height as i64);
    let rr = r * r;

    let top = (cy - r).max(0);
    let bottom = (cy + r).min(h - 1);
    for row in top..=bottom {
        let i = row - cy;
        let half = (rr - i * i).isqrt();
        let x0 = (cx - half).max(0);
        let x1 = (cx + half).min(w - 1);
        if x0 > x1 {
            continue; // chord lies entirely left or right of the frame
        }
        fb.fill_row_span(row as usize, x0 as usize, (x1 - x0 + 1) as usize, color);
    }
}

/// Fill the rectangle `[x, x+w) × [y, y+h)`, clipped to the frame.
/// Visual: a solid box; non-positive sizes draw nothing.
///
/// Library primitive: the demo loop itself only draws the circle.
pub fn fill_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: u32) {
    if w <= 0 || h <= 0 {
        return;
    }
    let x0 = i64::from(x).max(0);
    let y0 = i64::from(y).max(0);
    let x1 = (i64::from(x) + i64::from(w)).min(fb.width as i64);
    let y1 = (i64::from(y) + i64::from(h)).min(fb.height as i64);
    if x0 >= x1 {
        return;
    }
    for row in y0..y1 {
        fb.fill_row_span(row as usize, x0 as usize, (x1 - x0) as usize, color);
    }
}
