//! A set of animated shapes sharing one refresh clock.

use tween2d_types::error::{Result, Tween2dError};

use crate::clock::{FrameClock, RefreshClock};
use crate::controller::{Animation, Controller, Phase};
use crate::shape::ShapeParams;
use crate::sink::{BoxedSink, DrawSink};

/// Identifies a shape spawned on a [`Stage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u64);

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "shape#{}", self.0)
    }
}

struct Entry {
    id: ShapeId,
    controller: Controller<BoxedSink>,
}

/// Owns a [`RefreshClock`] and the controllers driven by it.
///
/// The host calls [`Stage::refresh`] once per display refresh; each fired
/// request is routed to the controller that made it.
#[derive(Default)]
pub struct Stage {
    clock: RefreshClock,
    entries: Vec<Entry>,
    next_id: u64,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: RefreshClock) -> Self {
        Self {
            clock,
            ..Self::default()
        }
    }

    /// Start `initial` under `animation`. Its first frame fires on the next
    /// refresh.
    pub fn spawn<S>(&mut self, animation: &Animation<S>, initial: ShapeParams) -> ShapeId
    where
        S: DrawSink + Clone + 'static,
    {
        self.next_id += 1;
        let id = ShapeId(self.next_id);
        log::debug!("Spawning {} as {id}", initial.kind());
        let controller = animation.start_boxed(initial, &mut self.clock);
        self.entries.push(Entry { id, controller });
        id
    }

    /// Advance the clock to `timestamp` and run every due tick.
    ///
    /// Returns the number of controllers that handled a frame.
    pub fn refresh(&mut self, timestamp: f64) -> usize {
        let fired = self.clock.refresh(timestamp);
        let now = self.clock.now();
        let mut handled = 0;
        for handle in fired {
            let Some(entry) = self
                .entries
                .iter_mut()
                .find(|e| e.controller.pending_frame() == Some(handle))
            else {
                continue;
            };
            if entry.controller.on_frame(handle, now, &mut self.clock) {
                handled += 1;
            }
        }
        handled
    }

    /// Playback controls for one shape.
    pub fn control(&mut self, id: ShapeId) -> Option<ControlHandle<'_>> {
        let entry = self.entries.iter_mut().find(|e| e.id == id)?;
        Some(ControlHandle {
            controller: &mut entry.controller,
            clock: &mut self.clock,
        })
    }

    /// Like [`control`](Self::control), failing with `UnknownShape`.
    pub fn try_control(&mut self, id: ShapeId) -> Result<ControlHandle<'_>> {
        self.control(id)
            .ok_or_else(|| Tween2dError::UnknownShape(id.to_string()))
    }

    pub fn get(&self, id: ShapeId) -> Option<&Controller<BoxedSink>> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| &e.controller)
    }

    /// Stop and drop a shape. Returns `false` if it was not on the stage.
    pub fn remove(&mut self, id: ShapeId) -> bool {
        let Some(pos) = self.entries.iter().position(|e| e.id == id) else {
            return false;
        };
        let mut entry = self.entries.remove(pos);
        entry.controller.stop(&mut self.clock);
        log::debug!("Removed {id}");
        true
    }

    /// True when no controller is waiting on a frame.
    pub fn is_idle(&self) -> bool {
        self.clock.pending_count() == 0
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    pub fn clock(&self) -> &RefreshClock {
        &self.clock
    }

    pub fn now(&self) -> f64 {
        self.clock.now()
    }
}

/// Borrowed controls for one shape on a [`Stage`].
pub struct ControlHandle<'a> {
    controller: &'a mut Controller<BoxedSink>,
    clock: &'a mut RefreshClock,
}

impl ControlHandle<'_> {
    pub fn stop(&mut self) {
        self.controller.stop(self.clock);
    }

    pub fn pause(&mut self) {
        self.controller.pause(self.clock);
    }

    pub fn unpause(&mut self) {
        self.controller.unpause(self.clock);
    }

    pub fn restart(&mut self) {
        self.controller.restart(self.clock);
    }

    pub fn reverse(&mut self) {
        self.controller.reverse(self.clock);
    }

    pub fn is_paused(&self) -> bool {
        self.controller.is_paused()
    }

    pub fn is_reversing(&self) -> bool {
        self.controller.is_reversing()
    }

    pub fn last_elapsed(&self) -> f64 {
        self.controller.last_elapsed()
    }

    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    pub fn current_frame(&self) -> Option<&ShapeParams> {
        self.controller.current_frame()
    }
}
