//! Animatable shape parameters.

use std::fmt;

use serde::{Deserialize, Serialize};
use tween2d_types::color::Rgb;
use tween2d_types::geometry::{Point, centroid};

/// Discriminant of a [`ShapeParams`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Triangle,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Triangle => "triangle",
        })
    }
}

/// Snapshot of everything an animation can change on a shape.
///
/// The variant chosen when an animation starts is kept for every frame it
/// produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeParams {
    Circle {
        center: Point,
        radius: f64,
        color: Rgb,
    },
    Rectangle {
        /// Top-left corner.
        origin: Point,
        width: f64,
        height: f64,
        color: Rgb,
    },
    Triangle {
        points: [Point; 3],
        color: Rgb,
        /// Accumulated rotation in radians, for sinks that orient decorations.
        #[serde(default)]
        rotation: f64,
    },
}

impl ShapeParams {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeParams::Circle { .. } => ShapeKind::Circle,
            ShapeParams::Rectangle { .. } => ShapeKind::Rectangle,
            ShapeParams::Triangle { .. } => ShapeKind::Triangle,
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            ShapeParams::Circle { color, .. }
            | ShapeParams::Rectangle { color, .. }
            | ShapeParams::Triangle { color, .. } => *color,
        }
    }

    /// Reference point the offsets move: circle center, rectangle origin,
    /// triangle centroid.
    pub fn anchor(&self) -> Point {
        match self {
            ShapeParams::Circle { center, .. } => *center,
            ShapeParams::Rectangle { origin, .. } => *origin,
            ShapeParams::Triangle { points, .. } => centroid(points),
        }
    }
}
