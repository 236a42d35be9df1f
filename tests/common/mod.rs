#![allow(dead_code, unreachable_pub)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use calm_light::{
    Button, CancellationToken, Clock, Config, Duration, Error, Instant, Rgb, Strip,
};

pub const TICK: Duration = Duration::from_millis(20);

pub const CONFIG_YAML: &str = r#"
led:
  count: 8
  pin: 18
  brightness: 200
button:
  primary: 17
  secondary: 27
general:
  timer_length: 60
  mode_one:
    start: [0, 0, 255]
    middle: [0, 255, 0]
    end: [255, 0, 0]
  mode_two:
    start: [255, 255, 0]
    middle: [0, 255, 255]
    end: [255, 0, 255]
"#;

pub fn config() -> Config {
    Config::from_yaml(CONFIG_YAML).unwrap()
}

const NOT_HELD: u64 = u64::MAX;

struct ClockState {
    micros: AtomicU64,
    hold_at: AtomicU64,
}

/// Clock whose time only moves when somebody sleeps on it
///
/// Optionally holds at a fixed point: once reached, sleeps block for a real
/// millisecond without advancing time until the hold is released.
#[derive(Clone)]
pub struct SimulatedClock {
    state: Arc<ClockState>,
}

impl Default for SimulatedClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedClock {
    pub fn new() -> Self {
        Self {
            state: Arc::new(ClockState {
                micros: AtomicU64::new(0),
                hold_at: AtomicU64::new(NOT_HELD),
            }),
        }
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_micros(self.state.micros.load(Ordering::SeqCst))
    }

    pub fn hold_at(&self, at: Duration) {
        self.state.hold_at.store(at.as_micros(), Ordering::SeqCst);
    }

    pub fn release(&self) {
        self.state.hold_at.store(NOT_HELD, Ordering::SeqCst);
    }

    /// Release the hold from another thread after `delay` of real time
    pub fn release_after(&self, delay: std::time::Duration) -> thread::JoinHandle<()> {
        let clock = self.clone();
        thread::spawn(move || {
            thread::sleep(delay);
            clock.release();
        })
    }

    /// Block until the held point is reached
    pub fn wait_for_hold(&self) {
        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(10);
        loop {
            let hold = self.state.hold_at.load(Ordering::SeqCst);
            if self.state.micros.load(Ordering::SeqCst) >= hold {
                return;
            }
            assert!(
                std::time::Instant::now() < deadline,
                "clock never reached its hold point"
            );
            thread::sleep(std::time::Duration::from_millis(1));
        }
    }
}

impl Clock for SimulatedClock {
    fn now(&self) -> Instant {
        Instant::from_micros(self.state.micros.load(Ordering::SeqCst))
    }

    fn sleep(&self, duration: Duration) {
        let hold = self.state.hold_at.load(Ordering::SeqCst);
        let advanced = self
            .state
            .micros
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |now| {
                (now < hold).then(|| now.saturating_add(duration.as_micros()).min(hold))
            });
        if advanced.is_ok() {
            thread::yield_now();
        } else {
            thread::sleep(std::time::Duration::from_millis(1));
        }
    }
}

/// One pushed frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub at: Duration,
    pub brightness: u8,
    /// Color of the first pixel
    pub color: Rgb,
}

/// Handle to the frames of a [`RecordingStrip`], usable after the strip moved
#[derive(Clone, Default)]
pub struct FrameLog {
    frames: Arc<Mutex<Vec<Frame>>>,
}

impl FrameLog {
    pub fn frames(&self) -> Vec<Frame> {
        self.frames.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Frame> {
        self.frames.lock().unwrap().last().copied()
    }

    pub fn len(&self) -> usize {
        self.frames.lock().unwrap().len()
    }

    fn push(&self, frame: Frame) {
        self.frames.lock().unwrap().push(frame);
    }
}

/// Strip that records every `show` with the simulated time it happened at
pub struct RecordingStrip {
    clock: SimulatedClock,
    brightness: u8,
    pixels: Vec<Rgb>,
    log: FrameLog,
    fail_after: Option<usize>,
    panic_after: Option<usize>,
    cancel_at: Option<(Duration, CancellationToken)>,
}

impl RecordingStrip {
    pub fn new(clock: &SimulatedClock, count: usize) -> Self {
        Self {
            clock: clock.clone(),
            brightness: 0,
            pixels: vec![Rgb::default(); count],
            log: FrameLog::default(),
            fail_after: None,
            panic_after: None,
            cancel_at: None,
        }
    }

    /// Fail every `show` after the first `shows` succeeded
    pub fn failing_after(mut self, shows: usize) -> Self {
        self.fail_after = Some(shows);
        self
    }

    /// Panic on every `show` after the first `shows` succeeded
    pub fn panicking_after(mut self, shows: usize) -> Self {
        self.panic_after = Some(shows);
        self
    }

    /// Cancel `token` on the first `show` at or after `at`
    pub fn cancelling_at(mut self, at: Duration, token: &CancellationToken) -> Self {
        self.cancel_at = Some((at, token.clone()));
        self
    }

    pub fn log(&self) -> FrameLog {
        self.log.clone()
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }
}

impl Strip for RecordingStrip {
    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }

    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn num_pixels(&self) -> usize {
        self.pixels.len()
    }

    fn show(&mut self) -> Result<(), Error> {
        if let Some(limit) = self.fail_after {
            if self.log.len() >= limit {
                return Err(Error::Strip("strip unplugged".into()));
            }
        }
        if let Some(limit) = self.panic_after {
            assert!(self.log.len() < limit, "strip driver crashed");
        }

        let at = self.clock.elapsed();
        self.log.push(Frame {
            at,
            brightness: self.brightness,
            color: self.pixels.first().copied().unwrap_or_default(),
        });

        if let Some((cancel_at, token)) = &self.cancel_at {
            if at >= *cancel_at {
                token.cancel();
            }
        }
        Ok(())
    }
}

/// Button fed from a script, one sample per poll
///
/// Reads released once the script runs out, and sets the finish flag if one
/// was given.
pub struct ScriptedButton {
    script: VecDeque<Result<bool, Error>>,
    finished: Option<Arc<AtomicBool>>,
}

impl ScriptedButton {
    pub fn new(script: impl IntoIterator<Item = Result<bool, Error>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            finished: None,
        }
    }

    pub fn idle() -> Self {
        Self::new([])
    }

    /// Released for `after` polls, pressed for `polls`, then released
    pub fn press(after: usize, polls: usize) -> Self {
        let script = std::iter::repeat_with(|| Ok(false))
            .take(after)
            .chain(std::iter::repeat_with(|| Ok(true)).take(polls))
            .chain([Ok(false)]);
        Self::new(script)
    }

    /// Set `flag` once the script has run out
    pub fn finishing(mut self, flag: &Arc<AtomicBool>) -> Self {
        self.finished = Some(Arc::clone(flag));
        self
    }
}

impl Button for ScriptedButton {
    fn is_pressed(&mut self) -> Result<bool, Error> {
        match self.script.pop_front() {
            Some(sample) => sample,
            None => {
                if let Some(flag) = &self.finished {
                    flag.store(true, Ordering::Release);
                }
                Ok(false)
            }
        }
    }
}

/// Button pressed and released by the test
#[derive(Clone, Default)]
pub struct SharedButton {
    pressed: Arc<AtomicBool>,
}

impl SharedButton {
    pub fn set(&self, pressed: bool) {
        self.pressed.store(pressed, Ordering::SeqCst);
    }
}

impl Button for SharedButton {
    fn is_pressed(&mut self) -> Result<bool, Error> {
        Ok(self.pressed.load(Ordering::SeqCst))
    }
}
