//! Frame driving
//!
//! The browser drives the world from `requestAnimationFrame` and hands the
//! timestamp to `World::frame`, which goes through a `FrameTimer`. Native
//! hosts and tests use `FrameLoop`, which pulls time from a `Clock` and runs
//! until its `ShutdownSignal` is raised.

use std::cell::Cell;
use std::rc::Rc;

use super::perf_timer::now_ms;
use super::WorldCore;

/// Millisecond time source
pub trait Clock {
    fn now_ms(&mut self) -> f64;
}

/// Wall clock: `Date.now()` on wasm32, `Instant` elsewhere
#[derive(Clone, Copy, Debug, Default)]
pub struct PerfClock;

impl Clock for PerfClock {
    fn now_ms(&mut self) -> f64 {
        now_ms()
    }
}

/// Deterministic clock that moves forward `step_ms` on every read
#[derive(Clone, Debug)]
pub struct ManualClock {
    now_ms: f64,
    step_ms: f64,
}

impl ManualClock {
    pub fn new(step_ms: f64) -> Self {
        Self { now_ms: 0.0, step_ms }
    }

    /// 60 Hz
    pub fn display_rate() -> Self {
        Self::new(1000.0 / 60.0)
    }

    /// Jump ahead without a read, e.g. to simulate a stalled frame
    pub fn advance(&mut self, ms: f64) {
        self.now_ms += ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&mut self) -> f64 {
        let t = self.now_ms;
        self.now_ms += self.step_ms;
        t
    }
}

/// Frames per second, refreshed once at least a second has accumulated
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FpsCounter {
    frames: u32,
    window_ms: f64,
    fps: u32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one frame. Returns the new figure when the window closes.
    pub fn record(&mut self, elapsed_ms: f64) -> Option<u32> {
        self.frames += 1;
        self.window_ms += elapsed_ms;
        if self.window_ms < 1000.0 {
            return None;
        }

        self.fps = (self.frames as f64 * 1000.0 / self.window_ms).round() as u32;
        self.frames = 0;
        self.window_ms = 0.0;
        Some(self.fps)
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

/// Turns absolute timestamps into per-frame elapsed time
#[derive(Clone, Debug, Default)]
pub struct FrameTimer {
    last_ms: Option<f64>,
    fps: FpsCounter,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timer whose first tick measures from `start_ms`
    pub fn starting_at(start_ms: f64) -> Self {
        Self { last_ms: Some(start_ms), fps: FpsCounter::new() }
    }

    /// Seconds since the previous tick. The very first tick of an unprimed
    /// timer yields zero; a clock going backwards also yields zero.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let elapsed_ms = match self.last_ms {
            Some(last) => (now_ms - last).max(0.0),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        self.fps.record(elapsed_ms);
        (elapsed_ms / 1000.0) as f32
    }

    pub fn fps(&self) -> u32 {
        self.fps.fps()
    }
}

/// Cooperative stop flag shared between the loop and whoever wants it to end
#[derive(Clone, Debug, Default)]
pub struct ShutdownSignal(Rc<Cell<bool>>);

impl ShutdownSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.0.set(true);
    }

    pub fn is_requested(&self) -> bool {
        self.0.get()
    }
}

/// What one tick did
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub elapsed_seconds: f32,
    /// False when the world was paused
    pub stepped: bool,
    pub fps: u32,
}

pub struct FrameLoop<C: Clock> {
    clock: C,
    timer: FrameTimer,
    shutdown: ShutdownSignal,
}

impl<C: Clock> FrameLoop<C> {
    pub fn new(mut clock: C) -> Self {
        let start = clock.now_ms();
        Self {
            clock,
            timer: FrameTimer::starting_at(start),
            shutdown: ShutdownSignal::new(),
        }
    }

    /// Handle for stopping `run` from inside the render callback or elsewhere
    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.clone()
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// One frame: read the clock and step the world
    pub fn tick(&mut self, world: &mut WorldCore) -> FrameReport {
        let now = self.clock.now_ms();
        let elapsed_seconds = self.timer.tick(now);
        let stepped = world.step(elapsed_seconds);
        FrameReport { elapsed_seconds, stepped, fps: self.timer.fps() }
    }

    /// Tick and render until shutdown is requested. Returns the frame count.
    pub fn run<F>(&mut self, world: &mut WorldCore, mut render: F) -> u64
    where
        F: FnMut(&mut WorldCore, &FrameReport),
    {
        let mut frames = 0u64;
        while !self.shutdown.is_requested() {
            let report = self.tick(world);
            render(world, &report);
            frames += 1;
        }
        log::debug!("frame loop stopped after {} frames", frames);
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_counter_reports_once_per_second() {
        let mut fps = FpsCounter::new();
        let mut reports = Vec::new();
        for _ in 0..120 {
            if let Some(v) = fps.record(1000.0 / 60.0) {
                reports.push(v);
            }
        }
        // floating point may close the first window one frame late
        assert!(!reports.is_empty() && reports.len() <= 2);
        assert!(reports.iter().all(|&v| v == 60 || v == 59));
    }

    #[test]
    fn frame_timer_starts_at_zero_and_ignores_backwards_time() {
        let mut timer = FrameTimer::new();
        assert_eq!(timer.tick(500.0), 0.0);
        assert!((timer.tick(520.0) - 0.02).abs() < 1e-6);
        assert_eq!(timer.tick(510.0), 0.0);
    }

    #[test]
    fn manual_clock_advances_per_read() {
        let mut clock = ManualClock::new(10.0);
        assert_eq!(clock.now_ms(), 0.0);
        clock.advance(5.0);
        assert_eq!(clock.now_ms(), 15.0);
    }

    #[test]
    fn shutdown_signal_is_shared_between_clones() {
        let a = ShutdownSignal::new();
        let b = a.clone();
        assert!(!a.is_requested());
        b.request();
        assert!(a.is_requested());
    }
}
