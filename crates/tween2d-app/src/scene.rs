//! Scene files: shapes, their animations, and scripted control events.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tween2d_anim::{AnimationSpec, ShapeParams};
use tween2d_types::error::{Result, Tween2dError};

/// Scene used when no file is given on the command line.
pub const DEMO_SCENE: &str = include_str!("../scenes/demo.toml");

/// Top-level scene file.
#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    /// Virtual display refresh rate.
    #[serde(default = "default_refresh_hz")]
    pub refresh_hz: u32,
    /// Simulated clock time to run, in ms.
    #[serde(default = "default_run_for")]
    pub run_for: f64,
    #[serde(default, rename = "shape")]
    pub shapes: Vec<SceneShape>,
    #[serde(default, rename = "event")]
    pub events: Vec<SceneEvent>,
}

fn default_refresh_hz() -> u32 {
    60
}
fn default_run_for() -> f64 {
    2000.0
}

/// A named shape and the animation it runs.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneShape {
    pub name: String,
    #[serde(default)]
    pub animation: AnimationSpec,
    #[serde(flatten)]
    pub params: ShapeParams,
}

/// A control call applied to a shape at a point in simulated time.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneEvent {
    pub at: f64,
    pub shape: String,
    pub action: Action,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Stop,
    Pause,
    Unpause,
    Restart,
    Reverse,
}

impl Scene {
    /// Parse and validate scene TOML.
    pub fn parse(src: &str) -> Result<Self> {
        let scene: Scene = toml::from_str(src)?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path)?;
        Self::parse(&src)
    }

    /// Milliseconds between virtual refreshes.
    pub fn frame_interval(&self) -> f64 {
        1000.0 / f64::from(self.refresh_hz)
    }

    pub fn validate(&self) -> Result<()> {
        if self.refresh_hz == 0 {
            return Err(Tween2dError::Config(
                "refresh_hz must be at least 1".into(),
            ));
        }
        if !self.run_for.is_finite() || self.run_for < 0.0 {
            return Err(Tween2dError::Config(format!(
                "run_for must be a finite, non-negative number of ms, got {}",
                self.run_for
            )));
        }

        let mut names = HashSet::new();
        for shape in &self.shapes {
            if !names.insert(shape.name.as_str()) {
                return Err(Tween2dError::Config(format!(
                    "duplicate shape name {:?}",
                    shape.name
                )));
            }
            shape.animation.validate().map_err(|e| {
                Tween2dError::InvalidSpec(format!("shape {:?}: {e}", shape.name))
            })?;
        }

        for event in &self.events {
            if !names.contains(event.shape.as_str()) {
                return Err(Tween2dError::UnknownShape(event.shape.clone()));
            }
            if !event.at.is_finite() || event.at < 0.0 {
                return Err(Tween2dError::Config(format!(
                    "event time must be a finite, non-negative number of ms, got {}",
                    event.at
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tween2d_anim::{Easing, PauseMode, ShapeKind};
    use tween2d_types::color::Rgb;
    use tween2d_types::geometry::Point;

    #[test]
    fn demo_scene_loads() {
        let scene = Scene::parse(DEMO_SCENE).unwrap();
        assert_eq!(scene.refresh_hz, 60);
        assert_eq!(scene.run_for, 2500.0);
        let kinds: Vec<ShapeKind> = scene.shapes.iter().map(|s| s.params.kind()).collect();
        assert_eq!(
            kinds,
            vec![ShapeKind::Circle, ShapeKind::Rectangle, ShapeKind::Triangle]
        );
        assert_eq!(scene.events.len(), 4);
        assert_eq!(scene.events[0].action, Action::Pause);
    }

    #[test]
    fn shape_fields_and_animation() {
        let scene = Scene::parse(
            r##"
[[shape]]
name = "ball"
kind = "circle"
center = { x = 1.0, y = 2.0 }
radius = 10.0
color = "#000000"

[shape.animation]
duration = 1000.0
x_offset = 100.0
color = "#ffffff"
loop = true
ease = "linear"
pause_mode = "freeze"
"##,
        )
        .unwrap();
        let ball = &scene.shapes[0];
        assert_eq!(ball.name, "ball");
        assert_eq!(
            ball.params,
            ShapeParams::Circle {
                center: Point::new(1.0, 2.0),
                radius: 10.0,
                color: Rgb::BLACK,
            }
        );
        assert_eq!(ball.animation.duration, 1000.0);
        assert_eq!(ball.animation.color, Some(Rgb::WHITE));
        assert!(ball.animation.looping);
        assert!(matches!(ball.animation.ease, Easing::Linear));
        assert_eq!(ball.animation.pause_mode, PauseMode::Freeze);
    }

    #[test]
    fn empty_scene_uses_defaults() {
        let scene = Scene::parse("").unwrap();
        assert_eq!(scene.refresh_hz, 60);
        assert_eq!(scene.run_for, 2000.0);
        assert!(scene.shapes.is_empty());
        assert!((scene.frame_interval() - 1000.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn missing_animation_table_is_default() {
        let scene = Scene::parse(
            r##"
[[shape]]
name = "box"
kind = "rectangle"
origin = { x = 0.0, y = 0.0 }
width = 4.0
height = 2.0
color = "#102030"
"##,
        )
        .unwrap();
        assert_eq!(scene.shapes[0].animation.duration, 0.0);
        assert!(matches!(scene.shapes[0].animation.ease, Easing::InOut));
    }

    #[test]
    fn zero_refresh_rate_rejected() {
        let err = Scene::parse("refresh_hz = 0").unwrap_err();
        assert!(matches!(err, Tween2dError::Config(_)));
    }

    #[test]
    fn unknown_event_target_rejected() {
        let err = Scene::parse(
            r##"
[[event]]
at = 10.0
shape = "ghost"
action = "pause"
"##,
        )
        .unwrap_err();
        assert!(matches!(err, Tween2dError::UnknownShape(ref n) if n == "ghost"));
    }

    #[test]
    fn bad_color_is_parse_error() {
        let err = Scene::parse(
            r##"
[[shape]]
name = "ball"
kind = "circle"
center = { x = 0.0, y = 0.0 }
radius = 1.0
color = "black"
"##,
        )
        .unwrap_err();
        assert!(matches!(err, Tween2dError::TomlParse(_)));
    }

    #[test]
    fn invalid_animation_rejected() {
        let err = Scene::parse(
            r##"
[[shape]]
name = "ball"
kind = "circle"
center = { x = 0.0, y = 0.0 }
radius = 1.0
color = "#000000"

[shape.animation]
duration = -5.0
"##,
        )
        .unwrap_err();
        assert!(matches!(err, Tween2dError::InvalidSpec(_)));
        assert!(format!("{err}").contains("ball"));
    }

    #[test]
    fn duplicate_names_rejected() {
        let shape = r##"
[[shape]]
name = "a"
kind = "circle"
center = { x = 0.0, y = 0.0 }
radius = 1.0
color = "#000000"
"##;
        let err = Scene::parse(&format!("{shape}{shape}")).unwrap_err();
        assert!(matches!(err, Tween2dError::Config(_)));
    }

    #[test]
    fn unknown_action_rejected() {
        let err = Scene::parse(
            r##"
[[shape]]
name = "a"
kind = "circle"
center = { x = 0.0, y = 0.0 }
radius = 1.0
color = "#000000"

[[event]]
at = 0.0
shape = "a"
action = "explode"
"##,
        )
        .unwrap_err();
        assert!(matches!(err, Tween2dError::TomlParse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Scene::load(Path::new("/nonexistent/scene.toml")).unwrap_err();
        assert!(matches!(err, Tween2dError::Io(_)));
    }
}
