//! Per-shape playback controller.
//!
//! A [`Controller`] owns the timing state of one animated shape and advances
//! it each time the host clock fires the frame it requested. Exactly one
//! frame request is outstanding while the animation is live.
//!
//! ```text
//!  Idle --start/restart--> Running <--loop flip / reverse--> Reversing
//!                             |                                  |
//!                           pause/unpause                   pause/unpause
//!                             |                                  |
//!                           Paused                             Paused
//!  Running/Reversing --pass complete, no loop--> Finished
//!  any --stop--> Idle
//! ```

use std::sync::Arc;

use tween2d_types::error::Result;

use crate::clock::{FrameClock, FrameHandle};
use crate::frame::{FramePlan, compute_frame};
use crate::shape::ShapeParams;
use crate::sink::{BoxedSink, DrawSink};
use crate::spec::{AnimationSpec, PauseMode};

/// Observable playback phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not started, or stopped.
    Idle,
    /// Advancing toward the end of the pass.
    Running,
    /// Advancing back toward the start.
    Reversing,
    /// Frozen mid-pass (in either direction).
    Paused,
    /// Single pass complete; the final frame is held.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Status {
    #[default]
    Idle,
    Playing,
    Finished,
}

/// Mutable timing state owned by one controller.
#[derive(Debug, Clone, Default)]
struct PlaybackState {
    /// Outstanding frame request, if any.
    pending: Option<FrameHandle>,
    /// Origin of the current half-cycle. Seeded by the first tick after a
    /// (re)start or loop flip.
    start: Option<f64>,
    reversing: bool,
    paused: bool,
    last_elapsed: f64,
    frame: Option<ShapeParams>,
    status: Status,
}

/// An [`AnimationSpec`] bound to a draw sink.
///
/// Each call to [`Animation::start`] creates an independent controller with
/// its own playback state.
pub struct Animation<S> {
    spec: Arc<AnimationSpec>,
    sink: S,
}

/// Bind `spec` to `sink`. Fails if the spec cannot be played.
pub fn animate<S: DrawSink>(spec: AnimationSpec, sink: S) -> Result<Animation<S>> {
    spec.validate()?;
    Ok(Animation {
        spec: Arc::new(spec),
        sink,
    })
}

impl<S> Animation<S> {
    pub fn spec(&self) -> &AnimationSpec {
        &self.spec
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: DrawSink + Clone> Animation<S> {
    /// Start animating `initial`. The first frame is requested immediately.
    pub fn start(&self, initial: ShapeParams, clock: &mut dyn FrameClock) -> Controller<S> {
        Controller::start(Arc::clone(&self.spec), self.sink.clone(), initial, clock)
    }
}

impl<S: DrawSink + Clone + 'static> Animation<S> {
    /// Like [`start`](Self::start), with the sink type erased so controllers
    /// from different animations can live in one collection.
    pub fn start_boxed(
        &self,
        initial: ShapeParams,
        clock: &mut dyn FrameClock,
    ) -> Controller<BoxedSink> {
        let mut sink = self.sink.clone();
        let boxed: BoxedSink = Box::new(move |frame: &ShapeParams| sink.draw(frame));
        Controller::start(Arc::clone(&self.spec), boxed, initial, clock)
    }
}

/// Playback controller for one shape.
pub struct Controller<S> {
    spec: Arc<AnimationSpec>,
    sink: S,
    plan: FramePlan,
    state: PlaybackState,
}

impl<S: DrawSink> Controller<S> {
    /// Create a controller and request its first frame. `spec` must already
    /// have passed [`AnimationSpec::validate`].
    pub(crate) fn start(
        spec: Arc<AnimationSpec>,
        sink: S,
        initial: ShapeParams,
        clock: &mut dyn FrameClock,
    ) -> Self {
        log::debug!(
            "Starting {} animation ({} ms, ease {:?}, loop {})",
            initial.kind(),
            spec.duration,
            spec.ease,
            spec.looping
        );
        let plan = FramePlan::new(initial, &spec);
        let mut controller = Self {
            spec,
            sink,
            plan,
            state: PlaybackState::default(),
        };
        controller.state.status = Status::Playing;
        controller.schedule(clock);
        controller
    }

    /// Handle a fired frame request.
    ///
    /// Returns `false` (and does nothing) when `handle` is not the request
    /// this controller is waiting on, e.g. one it already cancelled.
    pub fn on_frame(
        &mut self,
        handle: FrameHandle,
        timestamp: f64,
        clock: &mut dyn FrameClock,
    ) -> bool {
        if self.state.pending != Some(handle) {
            return false;
        }
        self.state.pending = None;

        if self.state.paused {
            // Redraw mode: hold the frame, keep the request alive.
            if let Some(frame) = &self.state.frame {
                self.sink.draw(frame);
            }
            self.schedule(clock);
            return true;
        }

        let start = *self.state.start.get_or_insert(timestamp);
        let elapsed = timestamp - start;
        let duration = self.spec.duration;
        let raw = if duration == 0.0 {
            1.0
        } else {
            (elapsed / duration).min(1.0)
        };
        let eased = self.spec.ease.ease(raw);
        let progress = if self.state.reversing { 1.0 - eased } else { eased };
        self.state.last_elapsed = elapsed;

        let frame = compute_frame(&self.plan, progress, &self.spec);
        log::trace!(
            "{} tick at {timestamp}: elapsed {elapsed}, progress {progress}",
            frame.kind()
        );
        self.sink.draw(&frame);
        self.state.frame = Some(frame);

        if raw < 1.0 {
            self.schedule(clock);
        } else if self.spec.looping {
            self.state.reversing = !self.state.reversing;
            self.state.start = None;
            self.state.last_elapsed = 0.0;
            log::debug!(
                "{} half-cycle complete, now {}",
                self.plan.initial.kind(),
                if self.state.reversing { "reversing" } else { "forward" }
            );
            self.schedule(clock);
        } else {
            self.state.status = Status::Finished;
            log::debug!("{} animation finished", self.plan.initial.kind());
        }
        true
    }

    /// Cancel the pending frame and go idle. Nothing is drawn until
    /// [`restart`](Self::restart).
    pub fn stop(&mut self, clock: &mut dyn FrameClock) {
        self.cancel(clock);
        if self.state.status == Status::Idle {
            return;
        }
        self.state.status = Status::Idle;
        self.state.paused = false;
        log::debug!("{} animation stopped", self.plan.initial.kind());
    }

    /// Freeze a playing animation. See [`PauseMode`] for what the clock does
    /// meanwhile.
    pub fn pause(&mut self, clock: &mut dyn FrameClock) {
        if self.state.paused || self.state.status != Status::Playing {
            return;
        }
        self.state.paused = true;
        if self.spec.pause_mode == PauseMode::Freeze {
            self.cancel(clock);
        }
        log::debug!(
            "{} animation paused at {} ms ({:?})",
            self.plan.initial.kind(),
            self.state.last_elapsed,
            self.spec.pause_mode
        );
    }

    /// Resume from where [`pause`](Self::pause) left off.
    pub fn unpause(&mut self, clock: &mut dyn FrameClock) {
        if !self.state.paused {
            return;
        }
        self.state.paused = false;
        self.state.start = Some(clock.now() - self.state.last_elapsed);
        log::debug!(
            "{} animation resumed at {} ms",
            self.plan.initial.kind(),
            self.state.last_elapsed
        );
        self.schedule(clock);
    }

    /// Replay from the beginning, forward. Works from any phase.
    pub fn restart(&mut self, clock: &mut dyn FrameClock) {
        self.cancel(clock);
        self.state.paused = false;
        self.state.reversing = false;
        self.state.last_elapsed = 0.0;
        self.state.start = None;
        self.state.status = Status::Playing;
        log::debug!("{} animation restarted", self.plan.initial.kind());
        self.schedule(clock);
    }

    /// Turn around mid-pass, continuing from the current position.
    ///
    /// The new half-cycle resumes at the linear progress whose eased value
    /// puts the shape exactly where it is now, so asymmetric curves do not
    /// jump. From `Finished` this plays the pass back the other way. While
    /// paused only the direction changes; motion resumes on unpause. Ignored
    /// when idle.
    pub fn reverse(&mut self, clock: &mut dyn FrameClock) {
        if self.state.status == Status::Idle {
            return;
        }
        let duration = self.spec.duration;
        let fraction = if duration == 0.0 {
            1.0
        } else {
            (self.state.last_elapsed / duration).min(1.0)
        };
        // Forward at ease(f) and backward at 1 - ease(r) meet when
        // ease(r) = 1 - ease(f); the same holds turning the other way.
        let ease = &self.spec.ease;
        let resume = ease.inverse(1.0 - ease.ease(fraction));
        let remaining = resume * duration;

        self.state.reversing = !self.state.reversing;
        self.state.last_elapsed = remaining;
        log::debug!(
            "{} animation now {}",
            self.plan.initial.kind(),
            if self.state.reversing { "reversing" } else { "forward" }
        );
        if self.state.paused {
            return;
        }
        self.state.start = Some(clock.now() - remaining);
        self.state.status = Status::Playing;
        self.schedule(clock);
    }

    fn schedule(&mut self, clock: &mut dyn FrameClock) {
        self.cancel(clock);
        self.state.pending = Some(clock.request_frame());
    }

    fn cancel(&mut self, clock: &mut dyn FrameClock) {
        if let Some(handle) = self.state.pending.take() {
            clock.cancel_frame(handle);
        }
    }
}

impl<S> Controller<S> {
    pub fn phase(&self) -> Phase {
        match self.state.status {
            Status::Idle => Phase::Idle,
            Status::Finished => Phase::Finished,
            Status::Playing if self.state.paused => Phase::Paused,
            Status::Playing if self.state.reversing => Phase::Reversing,
            Status::Playing => Phase::Running,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.state.paused
    }

    pub fn is_reversing(&self) -> bool {
        self.state.reversing
    }

    /// Milliseconds into the current half-cycle as of the last tick.
    pub fn last_elapsed(&self) -> f64 {
        self.state.last_elapsed
    }

    /// The frame most recently handed to the sink.
    pub fn current_frame(&self) -> Option<&ShapeParams> {
        self.state.frame.as_ref()
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.state.pending
    }

    pub fn initial(&self) -> &ShapeParams {
        &self.plan.initial
    }

    pub fn spec(&self) -> &AnimationSpec {
        &self.spec
    }
}
