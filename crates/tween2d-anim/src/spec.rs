//! Animation configuration.

use serde::Deserialize;
use tween2d_types::color::Rgb;
use tween2d_types::error::{Result, Tween2dError};

use crate::easing::Easing;

/// What a paused animation does while the host clock keeps refreshing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PauseMode {
    /// Keep the frame request alive and repaint the frozen frame on every
    /// refresh, without advancing.
    #[default]
    Redraw,
    /// Cancel the pending frame. Nothing runs until unpaused.
    Freeze,
}

/// How a shape changes over one forward pass.
///
/// Bound once to a draw sink and shared (read-only) by every controller
/// started from it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnimationSpec {
    /// Length of one pass in milliseconds. `0` jumps straight to the end.
    pub duration: f64,
    pub x_offset: f64,
    pub y_offset: f64,
    /// Size multiplier reached at the end of the pass.
    pub scale: f64,
    /// Target color. `None` keeps the shape's own color.
    pub color: Option<Rgb>,
    /// Ping-pong forever between start and end.
    #[serde(rename = "loop")]
    pub looping: bool,
    /// Rotation in radians reached at the end of the pass. Triangles only.
    pub rotation: f64,
    pub ease: Easing,
    pub pause_mode: PauseMode,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            duration: 0.0,
            x_offset: 0.0,
            y_offset: 0.0,
            scale: 1.0,
            color: None,
            looping: false,
            rotation: 0.0,
            ease: Easing::InOut,
            pause_mode: PauseMode::Redraw,
        }
    }
}

impl AnimationSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duration(mut self, ms: f64) -> Self {
        self.duration = ms;
        self
    }

    pub fn with_offset(mut self, dx: f64, dy: f64) -> Self {
        self.x_offset = dx;
        self.y_offset = dy;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn with_rotation(mut self, radians: f64) -> Self {
        self.rotation = radians;
        self
    }

    pub fn with_ease(mut self, ease: Easing) -> Self {
        self.ease = ease;
        self
    }

    pub fn with_pause_mode(mut self, mode: PauseMode) -> Self {
        self.pause_mode = mode;
        self
    }

    /// Reject values the controller cannot run with.
    pub fn validate(&self) -> Result<()> {
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(Tween2dError::InvalidSpec(format!(
                "duration must be a finite, non-negative number of ms, got {}",
                self.duration
            )));
        }
        for (field, value) in [
            ("x_offset", self.x_offset),
            ("y_offset", self.y_offset),
            ("scale", self.scale),
            ("rotation", self.rotation),
        ] {
            if !value.is_finite() {
                return Err(Tween2dError::InvalidSpec(format!(
                    "{field} must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}
