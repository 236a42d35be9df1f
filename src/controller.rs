//! Action dispatch and the main loop
//!
//! The controller owns the strip whenever no sequence is running. Starting a
//! sequence moves the strip into a dedicated thread; stopping it cancels the
//! thread's token and joins it, which hands the strip back. Only one thread
//! can ever write to the strip.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

use embassy_time::Duration;
use tracing::{debug, error, info, warn};

use crate::sequence::ConfirmSettings;
use crate::{
    Action, Button, CancellationToken, Clock, Completion, Config, Error, FrameScheduler,
    InputPoller, Mode, Scene, Sequence, Strip,
};

/// Fade to black of the end timer action
pub const END_TIMER_FADE: Duration = Duration::from_secs(3);

/// Fade to black after a fault or on shutdown
pub const EMERGENCY_FADE: Duration = Duration::from_secs(3);

/// What the strip is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    /// A sequence started by this action is still running
    Running(Action),
}

type TaskOutput<S> = (S, Result<Completion, Error>);

/// Sequence thread together with the token that stops it
struct Task<S> {
    action: Action,
    token: CancellationToken,
    handle: JoinHandle<TaskOutput<S>>,
}

/// Maps button actions to sequences and runs them one at a time
pub struct Controller<S, C> {
    config: Config,
    clock: C,
    mode: Mode,
    strip: Option<S>,
    task: Option<Task<S>>,
}

impl<S, C> Controller<S, C>
where
    S: Strip + Send + 'static,
    C: Clock + Clone + Send + 'static,
{
    pub fn new(strip: S, clock: C, config: Config) -> Self {
        Self {
            config,
            clock,
            mode: Mode::default(),
            strip: Some(strip),
            task: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The strip, unless a sequence thread currently owns it
    pub fn strip(&self) -> Option<&S> {
        self.strip.as_ref()
    }

    pub fn state(&self) -> RunState {
        match &self.task {
            Some(task) if !task.handle.is_finished() => RunState::Running(task.action),
            _ => RunState::Idle,
        }
    }

    /// Stop whatever is running and start the sequence of `action`
    ///
    /// Blocks until the previous sequence has handed the strip back. For
    /// [`Action::EndTimer`] the previous sequence skips its own wind-down, so
    /// the end timer fade starts from the brightness it was stopped at.
    pub fn dispatch(&mut self, action: Action) -> Result<(), Error> {
        let hand_over = matches!(action, Action::EndTimer);
        if let Err(err) = self.stop(hand_over) {
            warn!(%err, "previous sequence failed");
        }

        let sequence = self.sequence_for(action);
        info!(%action, mode = %self.mode, sequence = sequence.as_str(), "dispatching");
        self.spawn(action, sequence)
    }

    /// Join the running sequence if it has finished on its own
    ///
    /// Returns the sequence's error if it failed.
    pub fn reap(&mut self) -> Result<Option<Completion>, Error> {
        let finished = self
            .task
            .as_ref()
            .is_some_and(|task| task.handle.is_finished());
        if !finished {
            return Ok(None);
        }
        match self.task.take() {
            Some(task) => self.join(task),
            None => Ok(None),
        }
    }

    /// Block until the running sequence ends on its own
    pub fn wait(&mut self) -> Result<Option<Completion>, Error> {
        match self.task.take() {
            Some(task) => self.join(task),
            None => Ok(None),
        }
    }

    /// Cancel the running sequence and fade the strip to black
    pub fn emergency_stop(&mut self) -> Result<(), Error> {
        if let Err(err) = self.stop(true) {
            warn!(%err, "sequence failed while stopping");
        }

        let strip = self.strip.as_mut().ok_or(Error::StripUnavailable)?;
        let token = CancellationToken::new();
        let mut scene = Scene::new(strip, FrameScheduler::new(&self.clock, &token));
        scene.fade_to_black(EMERGENCY_FADE)
    }

    /// Poll buttons and dispatch actions until `shutdown` is set
    ///
    /// Faults are logged and answered with an emergency fade, then polling
    /// goes on. On shutdown the strip fades to black before returning.
    ///
    /// Buttons are not sampled while a dispatch waits for the previous
    /// sequence's wind-down (up to the timer abort or dance exit fade). A
    /// press that starts in that window is timed from the first sample after
    /// it, so its held time is measured short.
    pub fn run<B: Button>(&mut self, input: &mut InputPoller<B>, shutdown: &AtomicBool) {
        let poll_interval = self.config.poll_interval();
        info!(mode = %self.mode, "waiting for buttons");

        while !shutdown.load(Ordering::Acquire) {
            if let Err(err) = self.step(input) {
                error!(%err, "runtime fault, fading out");
                if let Err(err) = self.emergency_stop() {
                    error!(%err, "emergency fade failed");
                }
            }
            self.clock.sleep(poll_interval);
        }

        info!("shutting down");
        if let Err(err) = self.emergency_stop() {
            error!(%err, "emergency fade failed");
        }
    }

    fn step<B: Button>(&mut self, input: &mut InputPoller<B>) -> Result<(), Error> {
        self.reap()?;
        for action in input.poll(self.clock.now())? {
            self.dispatch(action)?;
        }
        Ok(())
    }

    /// Resolve the sequence of `action`, updating the mode on the way
    fn sequence_for(&mut self, action: Action) -> Sequence {
        match action {
            Action::StartTimer => Sequence::Timer(self.config.timer(self.mode)),
            Action::EndTimer => {
                self.mode = Mode::One;
                Sequence::FadeOut(END_TIMER_FADE)
            }
            Action::SetMode => {
                self.mode = self.mode.toggled();
                Sequence::ConfirmMode(ConfirmSettings {
                    brightness: self.config.brightness(),
                    color: self.config.start_color(self.mode),
                    blinks: self.mode.confirm_blinks(),
                })
            }
            Action::Dance => {
                let seed = self.clock.now().as_ticks();
                Sequence::Dance(self.config.dance(self.mode, seed))
            }
        }
    }

    fn spawn(&mut self, action: Action, sequence: Sequence) -> Result<(), Error> {
        let mut strip = self.strip.take().ok_or(Error::StripUnavailable)?;
        let token = CancellationToken::new();
        let task_token = token.clone();
        let clock = self.clock.clone();

        let handle = thread::Builder::new()
            .name(format!("sequence-{action}"))
            .spawn(move || {
                let result = panic::catch_unwind(AssertUnwindSafe(|| {
                    let frames = FrameScheduler::new(&clock, &task_token);
                    let mut scene = Scene::new(&mut strip, frames);
                    sequence.play(&mut scene)
                }))
                .unwrap_or(Err(Error::SequencePanicked));
                debug!(sequence = sequence.as_str(), ?result, "sequence ended");
                (strip, result)
            })
            .map_err(Error::Spawn)?;

        self.task = Some(Task {
            action,
            token,
            handle,
        });
        Ok(())
    }

    /// Cancel the running sequence and take the strip back
    ///
    /// With `hand_over` the sequence returns without fading the strip out.
    fn stop(&mut self, hand_over: bool) -> Result<Option<Completion>, Error> {
        let Some(task) = self.task.take() else {
            return Ok(None);
        };
        if hand_over {
            task.token.hand_over();
        } else {
            task.token.cancel();
        }
        self.join(task)
    }

    fn join(&mut self, task: Task<S>) -> Result<Option<Completion>, Error> {
        let (strip, result) = task.handle.join().map_err(|_| Error::SequencePanicked)?;
        self.strip = Some(strip);
        result.map(Some)
    }
}

impl<S, C> Drop for Controller<S, C> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.token.cancel();
            let _ = task.handle.join();
        }
    }
}
