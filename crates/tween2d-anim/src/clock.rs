//! Display refresh clock abstraction.

/// Handle to a frame requested from a [`FrameClock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(pub u64);

/// The host's refresh clock, as seen by a controller.
///
/// A controller asks for one frame at a time. The host later reports the
/// frame as fired (by calling the controller's `on_frame` with the handle
/// and the refresh timestamp) unless it was cancelled first.
pub trait FrameClock {
    /// Ask to be called back on the next refresh.
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraw a request. Unknown or already fired handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Current time in milliseconds, on the same scale as refresh timestamps.
    fn now(&self) -> f64;
}

/// Host-driven refresh clock.
///
/// The host calls [`RefreshClock::refresh`] once per display refresh with a
/// timestamp in milliseconds. Every frame requested before that call fires
/// exactly once; requests made while the fired frames are being dispatched
/// wait for the following refresh, so nothing ticks faster than the display.
#[derive(Debug, Default)]
pub struct RefreshClock {
    now: f64,
    next_id: u64,
    pending: Vec<FrameHandle>,
}

impl RefreshClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the clock at `now` instead of zero.
    pub fn starting_at(now: f64) -> Self {
        Self {
            now,
            ..Self::default()
        }
    }

    /// Advance to `timestamp` and return the frames due, in request order.
    ///
    /// Timestamps must not go backwards; an earlier timestamp is clamped to
    /// the current time.
    pub fn refresh(&mut self, timestamp: f64) -> Vec<FrameHandle> {
        if timestamp < self.now {
            log::warn!(
                "Refresh timestamp {timestamp} is behind clock time {}, clamping",
                self.now
            );
        } else {
            self.now = timestamp;
        }
        std::mem::take(&mut self.pending)
    }

    /// Number of requests waiting for the next refresh.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.pending.contains(&handle)
    }
}

impl FrameClock for RefreshClock {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|h| *h != handle);
    }

    fn now(&self) -> f64 {
        self.now
    }
}
