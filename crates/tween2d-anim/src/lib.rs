//! tween2d-anim: Shape animation engine.
//!
//! Bind an [`AnimationSpec`] to a [`DrawSink`] with [`animate`], then start
//! shapes from it against a host-driven [`RefreshClock`]. Each started shape
//! gets its own [`Controller`]; a [`Stage`] owns a clock and many
//! controllers and routes fired frames to them.

pub mod clock;
pub mod controller;
pub mod easing;
pub mod frame;
pub mod shape;
pub mod sink;
pub mod spec;
pub mod stage;

pub use tween2d_types::color;
pub use tween2d_types::geometry;

pub use clock::{FrameClock, FrameHandle, RefreshClock};
pub use controller::{Animation, Controller, Phase, animate};
pub use easing::Easing;
pub use frame::{FramePlan, compute_frame};
pub use shape::{ShapeKind, ShapeParams};
pub use sink::{BackendSink, BoxedSink, DrawSink};
pub use spec::{AnimationSpec, PauseMode};
pub use stage::{ControlHandle, ShapeId, Stage};
