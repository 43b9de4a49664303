//! 2D points, rotation, and angle helpers.

use std::f64::consts::{PI, TAU};
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A point (or offset) in surface coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f64> for Point {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

/// Rotate an offset vector about the origin by `angle` radians.
///
/// Positive angles turn counter-clockwise in a y-up coordinate system.
pub fn rotate_offset(offset: Point, angle: f64) -> Point {
    let (sin_a, cos_a) = angle.sin_cos();
    Point {
        x: offset.x * cos_a - offset.y * sin_a,
        y: offset.x * sin_a + offset.y * cos_a,
    }
}

/// Rotate `point` about `center` by `angle` radians.
pub fn rotate_point(point: Point, center: Point, angle: f64) -> Point {
    center + rotate_offset(point - center, angle)
}

/// Same as [`rotate_point`], but overwrites `point`.
pub fn rotate_point_in_place(point: &mut Point, center: Point, angle: f64) {
    *point = rotate_point(*point, center, angle);
}

/// Angle of the vector from `from` to `to`, in radians within `(-PI, PI]`.
pub fn angle_between(from: Point, to: Point) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Centroid of a triangle.
pub fn centroid(points: &[Point; 3]) -> Point {
    Point {
        x: (points[0].x + points[1].x + points[2].x) / 3.0,
        y: (points[0].y + points[1].y + points[2].y) / 3.0,
    }
}

/// Direction (radians) bisecting the widest empty wedge around `center`.
///
/// Used to place a label next to a hub point without overlapping any of the
/// spokes running to `points`. With no points the answer is `0.0`; with one
/// point it is the opposite direction.
pub fn largest_angular_space(center: Point, points: &[Point]) -> f64 {
    match points {
        [] => 0.0,
        [only] => angle_between(center, *only) + PI,
        _ => {
            let mut angles: Vec<f64> = points.iter().map(|p| angle_between(center, *p)).collect();
            angles.sort_by(f64::total_cmp);

            let mut widest = 0.0;
            let mut widest_start = angles[0];
            for (i, &angle) in angles.iter().enumerate() {
                let next = angles[(i + 1) % angles.len()];
                let gap = (next - angle + TAU) % TAU;
                if gap > widest {
                    widest = gap;
                    widest_start = angle;
                }
            }
            (widest_start + widest / 2.0) % TAU
        },
    }
}
