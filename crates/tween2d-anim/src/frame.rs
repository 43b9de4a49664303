//! Per-frame shape computation.

use tween2d_types::color::{Rgb, lerp_color};
use tween2d_types::geometry::{Point, centroid, rotate_offset};

use crate::shape::ShapeParams;
use crate::spec::AnimationSpec;

/// Everything that stays fixed across the frames of one controller: the
/// initial shape and the resolved color endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    pub initial: ShapeParams,
    pub start_color: Rgb,
    pub end_color: Rgb,
}

impl FramePlan {
    pub fn new(initial: ShapeParams, spec: &AnimationSpec) -> Self {
        let start_color = initial.color();
        Self {
            end_color: spec.color.unwrap_or(start_color),
            start_color,
            initial,
        }
    }
}

/// `a + (b - a) * t` arranged so both endpoints are exact.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Compute the shape at `progress` (eased, direction already applied).
///
/// `progress` is normally in `[0, 1]`; custom easings may push it outside,
/// which extrapolates every term.
pub fn compute_frame(plan: &FramePlan, progress: f64, spec: &AnimationSpec) -> ShapeParams {
    let shift = Point::new(spec.x_offset, spec.y_offset) * progress;
    let factor = lerp(1.0, spec.scale, progress);
    let color = lerp_color(plan.start_color, plan.end_color, progress);

    match &plan.initial {
        ShapeParams::Circle { center, radius, .. } => ShapeParams::Circle {
            center: *center + shift,
            radius: radius * factor,
            color,
        },
        ShapeParams::Rectangle {
            origin,
            width,
            height,
            ..
        } => ShapeParams::Rectangle {
            origin: *origin + shift,
            width: width * factor,
            height: height * factor,
            color,
        },
        ShapeParams::Triangle {
            points, rotation, ..
        } => {
            let hub = centroid(points);
            let angle = spec.rotation * progress;
            // Move each vertex by the change in its offset instead of rebuilding
            // it from the centroid, so progress 0 reproduces the input exactly.
            let moved = points.map(|p| {
                let offset = p - hub;
                let turned = rotate_offset(offset * factor, angle);
                p + (turned - offset) + shift
            });
            ShapeParams::Triangle {
                points: moved,
                color,
                rotation: rotation + angle,
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    fn circle() -> ShapeParams {
        ShapeParams::Circle {
            center: Point::new(0.0, 0.0),
            radius: 10.0,
            color: Rgb::BLACK,
        }
    }

    fn triangle() -> ShapeParams {
        ShapeParams::Triangle {
            points: [
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(5.0, 10.0),
            ],
            color: Rgb::BLACK,
            rotation: 0.0,
        }
    }

    #[test]
    fn circle_halfway() {
        let spec = AnimationSpec::new()
            .with_duration(1000.0)
            .with_offset(100.0, 0.0)
            .with_scale(2.0)
            .with_color(Rgb::WHITE)
            .with_ease(Easing::Linear);
        let plan = FramePlan::new(circle(), &spec);
        let frame = compute_frame(&plan, 0.5, &spec);
        assert_eq!(
            frame,
            ShapeParams::Circle {
                center: Point::new(50.0, 0.0),
                radius: 15.0,
                color: Rgb::new(128, 128, 128),
            }
        );
    }

    #[test]
    fn rectangle_end_is_exact() {
        let initial = ShapeParams::Rectangle {
            origin: Point::new(3.0, 4.0),
            width: 7.0,
            height: 11.0,
            color: Rgb::new(10, 20, 30),
        };
        let spec = AnimationSpec::new()
            .with_offset(0.3, -12.7)
            .with_scale(0.1)
            .with_color(Rgb::new(200, 100, 0));
        let plan = FramePlan::new(initial, &spec);
        let frame = compute_frame(&plan, 1.0, &spec);
        assert_eq!(
            frame,
            ShapeParams::Rectangle {
                origin: Point::new(3.0 + 0.3, 4.0 + -12.7),
                width: 7.0 * 0.1,
                height: 11.0 * 0.1,
                color: Rgb::new(200, 100, 0),
            }
        );
    }

    #[test]
    fn progress_zero_is_identity() {
        let spec = AnimationSpec::new()
            .with_offset(13.0, 17.0)
            .with_scale(3.3)
            .with_rotation(2.0)
            .with_color(Rgb::WHITE);
        for initial in [circle(), triangle()] {
            let plan = FramePlan::new(initial.clone(), &spec);
            assert_eq!(compute_frame(&plan, 0.0, &spec), initial);
        }
    }

    #[test]
    fn missing_target_color_holds_initial() {
        let spec = AnimationSpec::new().with_offset(1.0, 1.0);
        let plan = FramePlan::new(circle(), &spec);
        assert_eq!(compute_frame(&plan, 0.7, &spec).color(), Rgb::BLACK);
    }

    #[test]
    fn rotation_ignored_for_circle() {
        let spec = AnimationSpec::new().with_rotation(PI);
        let plan = FramePlan::new(circle(), &spec);
        assert_eq!(compute_frame(&plan, 1.0, &spec), circle());
    }

    #[test]
    fn triangle_half_turn_keeps_centroid_and_distances() {
        let spec = AnimationSpec::new()
            .with_duration(1000.0)
            .with_rotation(PI)
            .with_ease(Easing::Linear);
        let initial = triangle();
        let ShapeParams::Triangle { points: before, .. } = initial.clone() else {
            unreachable!()
        };
        let plan = FramePlan::new(initial, &spec);
        let ShapeParams::Triangle {
            points: after,
            rotation,
            ..
        } = compute_frame(&plan, 1.0, &spec)
        else {
            panic!("variant changed");
        };

        let c0 = centroid(&before);
        let c1 = centroid(&after);
        assert!(c0.distance(&c1) < EPS, "centroid moved: {c0:?} -> {c1:?}");
        for (b, a) in before.iter().zip(after.iter()) {
            assert!((b.distance(&c0) - a.distance(&c1)).abs() < EPS);
            // A half turn mirrors each vertex through the centroid.
            let mirrored = c0 * 2.0 - *b;
            assert!(a.distance(&mirrored) < EPS, "{a:?} vs {mirrored:?}");
        }
        assert_eq!(rotation, PI);
    }

    #[test]
    fn triangle_translates_and_scales_about_centroid() {
        let spec = AnimationSpec::new().with_offset(10.0, 5.0).with_scale(2.0);
        let plan = FramePlan::new(triangle(), &spec);
        let ShapeParams::Triangle { points, .. } = compute_frame(&plan, 1.0, &spec) else {
            panic!("variant changed");
        };
        let c = centroid(&points);
        assert!((c.x - 15.0).abs() < EPS);
        assert!((c.y - (10.0 / 3.0 + 5.0)).abs() < EPS);
        // Side lengths double.
        assert!((points[0].distance(&points[1]) - 20.0).abs() < EPS);
    }

    #[test]
    fn overshoot_extrapolates() {
        let spec = AnimationSpec::new().with_offset(100.0, 0.0);
        let plan = FramePlan::new(circle(), &spec);
        let frame = compute_frame(&plan, 1.2, &spec);
        assert!((frame.anchor().x - 120.0).abs() < EPS);
    }
}
