// The application context and the frame loop that drives it.
// Visual: every iteration repaints the background, draws the circle where the
// input says it is, shows it, then reacts to at most one key event.

use std::time::{Duration, Instant};

use crate::config::{BACKGROUND, CIRCLE_COLOR, START_RADIUS, START_X, START_Y};
use crate::draw::{fill_circle, DisplaySink};
use crate::error::Error;
use crate::input::{Event, InputState, Key};
use crate::types::FrameBuffer;

/// Everything the loop owns. Dropping it frees the frame.
pub struct App {
    pub frame: FrameBuffer,
    pub input: InputState,
    pub running: bool,
}

impl App {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            frame: FrameBuffer::new(width, height, BACKGROUND),
            input: InputState::new(START_X, START_Y, START_RADIUS),
            running: true,
        }
    }

    /// Clear to the background and draw the circle at the current state.
    pub fn render(&mut self) {
        self.frame.clear(BACKGROUND);
        let InputState { x, y, radius, .. } = self.input;
        fill_circle(&mut self.frame, x, y, radius, CIRCLE_COLOR);
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Quit => {
                log::info!("quit requested");
                self.running = false;
            }
            Event::KeyDown(key) => {
                self.input.key_down(key);
                if matches!(key, Key::Grow | Key::Shrink) {
                    log::debug!("radius -> {}", self.input.radius);
                }
            }
            Event::KeyUp(key) => self.input.key_up(key),
        }
    }

    pub fn integrate(&mut self) {
        self.input.integrate(self.frame.width, self.frame.height);
    }

    /// One full iteration: render, present, poll one event, move.
    pub fn step<S: DisplaySink + ?Sized>(&mut self, sink: &mut S) -> Result<(), Error> {
        self.render();
        sink.present(&self.frame)?;
        if let Some(event) = sink.poll_event() {
            self.handle_event(event);
        }
        self.integrate();
        Ok(())
    }
}

/// Run until a Quit event arrives. Returns how many frames were presented.
/// A failed present ends the loop with that error.
pub fn run<S: DisplaySink + ?Sized>(app: &mut App, sink: &mut S) -> Result<u64, Error> {
    let mut stats = FrameStats::new(Instant::now());
    let mut frames: u64 = 0;
    while app.running {
        app.step(sink)?;
        frames += 1;
        if let Some(fps) = stats.tick(Instant::now()) {
            log::debug!("FPS: {fps:.1}");
        }
    }
    Ok(frames)
}

/// Counts frames and reports a rate once per second.
pub struct FrameStats {
    since: Instant,
    frames: u32,
}

impl FrameStats {
    pub fn new(now: Instant) -> Self {
        Self { since: now, frames: 0 }
    }

    /// Record one frame at `now`; yields frames-per-second when a full second has passed.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        let elapsed = now.duration_since(self.since);
        if elapsed < Duration::from_secs(1) {
            return None;
        }
        let fps = self.frames as f32 / elapsed.as_secs_f32();
        self.frames = 0;
        self.since = now;
        Some(fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Feeds a fixed list of events, one per poll, and remembers what it was shown.
    #[derive(Default)]
    struct ScriptedSink {
        events: VecDeque<Event>,
        presented: usize,
        last_frame: Option<FrameBuffer>,
        fail_on: Option<usize>,
    }

    impl ScriptedSink {
        fn with_events(events: impl IntoIterator<Item = Event>) -> Self {
            Self {
                events: events.into_iter().collect(),
                ..Self::default()
            }
        }
    }

    impl DisplaySink for ScriptedSink {
        fn present(&mut self, frame: &FrameBuffer) -> Result<(), Error> {
            if self.fail_on == Some(self.presented) {
                return Err(Error::WindowUpdate("device lost".into()));
            }
            self.presented += 1;
            self.last_frame = Some(frame.clone());
            Ok(())
        }

        fn poll_event(&mut self) -> Option<Event> {
            self.events.pop_front()
        }
    }

    fn count(frame: &FrameBuffer, color: u32) -> usize {
        frame.pixels.iter().filter(|&&p| p == color).count()
    }

    #[test]
    fn render_draws_start_circle() {
        let mut app = App::new(320, 240);
        app.render();
        assert_eq!(app.frame.pixel(100, 100), Some(CIRCLE_COLOR));
        assert_eq!(app.frame.pixel(150, 100), Some(CIRCLE_COLOR));
        assert_eq!(app.frame.pixel(151, 100), Some(BACKGROUND));
        assert_eq!(app.frame.pixel(0, 0), Some(BACKGROUND));
    }

    #[test]
    fn render_clears_previous_frame() {
        let mut app = App::new(320, 240);
        app.render();
        let before = count(&app.frame, CIRCLE_COLOR);
        app.input.x = 200;
        app.render();
        assert_eq!(count(&app.frame, CIRCLE_COLOR), before);
        assert_eq!(app.frame.pixel(60, 100), Some(BACKGROUND));
    }

    #[test]
    fn step_polls_at_most_one_event() {
        let mut app = App::new(320, 240);
        let mut sink = ScriptedSink::with_events([
            Event::KeyDown(Key::Grow),
            Event::KeyDown(Key::Grow),
        ]);
        app.step(&mut sink).unwrap();
        assert_eq!(app.input.radius, 51);
        assert_eq!(sink.events.len(), 1);
        assert_eq!(sink.presented, 1);
    }

    #[test]
    fn holding_left_for_fifty_frames() {
        let mut app = App::new(1280, 720);
        let mut sink = ScriptedSink::with_events([Event::KeyDown(Key::Left)]);
        for _ in 0..50 {
            app.step(&mut sink).unwrap();
        }
        assert_eq!((app.input.x, app.input.y, app.input.radius), (50, 100, 50));

        // The circle now touches column 0 but is still whole.
        app.render();
        assert_eq!(app.frame.pixel(0, 100), Some(CIRCLE_COLOR));
        assert_eq!(app.frame.pixel(100, 100), Some(CIRCLE_COLOR));
        assert_eq!(app.frame.pixel(101, 100), Some(BACKGROUND));
    }

    #[test]
    fn held_key_never_leaves_bounds() {
        let mut app = App::new(64, 48);
        let mut sink = ScriptedSink::with_events([Event::KeyDown(Key::Right), Event::KeyDown(Key::Down)]);
        for _ in 0..500 {
            app.step(&mut sink).unwrap();
            assert!((0..=64).contains(&app.input.x));
            assert!((0..=48).contains(&app.input.y));
        }
        assert_eq!((app.input.x, app.input.y), (64, 48));
    }

    #[test]
    fn growing_past_the_frame_still_clips() {
        let (w, h) = (320, 180);
        let mut app = App::new(w, h);
        let mut sink = ScriptedSink::with_events(std::iter::repeat_n(Event::KeyDown(Key::Grow), 1000));
        for _ in 0..1000 {
            app.step(&mut sink).unwrap();
        }
        assert_eq!(app.input.radius, 1050);
        assert_eq!((app.input.x, app.input.y), (100, 100));

        app.render();
        let rr = 1050i64 * 1050;
        for py in 0..h {
            for px in 0..w {
                let (dx, dy) = (px as i64 - 100, py as i64 - 100);
                let want = if dx * dx + dy * dy <= rr { CIRCLE_COLOR } else { BACKGROUND };
                assert_eq!(app.frame.pixel(px, py), Some(want));
            }
        }
    }

    #[test]
    fn huge_radius_on_full_size_frame() {
        let mut app = App::new(1280, 720);
        app.input.radius = 1050;
        app.render();
        // (1279, 719) is ~1331 px from (100, 100): outside.
        assert_eq!(app.frame.pixel(1279, 719), Some(BACKGROUND));
        assert_eq!(app.frame.pixel(1100, 100), Some(CIRCLE_COLOR));
        assert_eq!(app.frame.pixels.len(), 1280 * 720);
    }

    #[test]
    fn shrinking_to_nothing_draws_nothing() {
        let mut app = App::new(320, 240);
        let mut sink = ScriptedSink::with_events(std::iter::repeat_n(Event::KeyDown(Key::Shrink), 55));
        for _ in 0..55 {
            app.step(&mut sink).unwrap();
        }
        assert_eq!(app.input.radius, -5);
        app.render();
        assert_eq!(count(&app.frame, CIRCLE_COLOR), 0);
    }

    #[test]
    fn run_stops_after_quit_frame() {
        let mut app = App::new(320, 240);
        let mut sink = ScriptedSink::with_events([Event::KeyDown(Key::Right), Event::Quit]);
        let frames = run(&mut app, &mut sink).unwrap();
        assert_eq!(frames, 2);
        assert_eq!(sink.presented, 2);
        assert!(!app.running);
        // integration still runs on the frame that saw Quit
        assert_eq!(app.input.x, 102);
        let shown = sink.last_frame.unwrap();
        assert_eq!(shown.pixel(101, 100), Some(CIRCLE_COLOR));
    }

    #[test]
    fn run_surfaces_present_failure() {
        let mut app = App::new(32, 32);
        let mut sink = ScriptedSink {
            fail_on: Some(3),
            ..ScriptedSink::default()
        };
        let err = run(&mut app, &mut sink).unwrap_err();
        assert!(matches!(err, Error::WindowUpdate(_)));
        assert_eq!(sink.presented, 3);
        assert!(app.running);
    }

    #[test]
    fn frame_stats_reports_once_per_second() {
        let start = Instant::now();
        let mut stats = FrameStats::new(start);
        for i in 1..60 {
            assert_eq!(stats.tick(start + Duration::from_millis(i * 10)), None);
        }
        let fps = stats.tick(start + Duration::from_secs(1)).unwrap();
        assert!((fps - 60.0).abs() < 1e-3);
        // counter restarts from the reporting instant
        assert_eq!(stats.tick(start + Duration::from_millis(1500)), None);
    }
}
