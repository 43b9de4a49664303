//! Draw sinks: where computed frames go.

use std::cell::RefCell;
use std::rc::Rc;

use tween2d_types::backend::ShapeBackend;
use tween2d_types::error::Result;

use crate::shape::ShapeParams;

/// Paints one frame. Called synchronously once per tick.
pub trait DrawSink {
    fn draw(&mut self, frame: &ShapeParams);
}

impl<F> DrawSink for F
where
    F: FnMut(&ShapeParams),
{
    fn draw(&mut self, frame: &ShapeParams) {
        self(frame)
    }
}

/// Type-erased sink, as stored by a [`Stage`](crate::stage::Stage).
pub type BoxedSink = Box<dyn FnMut(&ShapeParams)>;

/// Forwards frames to a [`ShapeBackend`] shared with the host.
///
/// Coordinates are rounded to whole pixels. Backend errors are logged and
/// dropped; a failed paint never interrupts the animation.
pub struct BackendSink<B> {
    backend: Rc<RefCell<B>>,
}

impl<B> BackendSink<B> {
    pub fn new(backend: Rc<RefCell<B>>) -> Self {
        Self { backend }
    }
}

impl<B> Clone for BackendSink<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Rc::clone(&self.backend),
        }
    }
}

impl<B: ShapeBackend> DrawSink for BackendSink<B> {
    fn draw(&mut self, frame: &ShapeParams) {
        let Ok(mut backend) = self.backend.try_borrow_mut() else {
            log::warn!("Backend busy, dropping {} frame", frame.kind());
            return;
        };
        if let Err(e) = paint(&mut *backend, frame) {
            log::warn!("Failed to paint {} frame: {e}", frame.kind());
        }
    }
}

fn px(v: f64) -> i32 {
    v.round() as i32
}

fn extent(v: f64) -> u32 {
    v.max(0.0).round() as u32
}

/// Issue the backend call for one frame.
pub fn paint(backend: &mut dyn ShapeBackend, frame: &ShapeParams) -> Result<()> {
    match frame {
        ShapeParams::Circle {
            center,
            radius,
            color,
        } => backend.fill_circle(px(center.x), px(center.y), extent(*radius), *color),
        ShapeParams::Rectangle {
            origin,
            width,
            height,
            color,
        } => backend.fill_rect(
            px(origin.x),
            px(origin.y),
            extent(*width),
            extent(*height),
            *color,
        ),
        ShapeParams::Triangle { points, color, .. } => {
            backend.fill_triangle(points.map(|p| (px(p.x), px(p.y))), *color)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tween2d_types::backend::DrawCommand;
    use tween2d_types::color::Rgb;
    use tween2d_types::error::Tween2dError;
    use tween2d_types::geometry::Point;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<DrawCommand>,
        fail: bool,
    }

    impl ShapeBackend for Recorder {
        fn clear(&mut self, color: Rgb) -> Result<()> {
            self.calls.push(DrawCommand::Clear { color });
            Ok(())
        }

        fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgb) -> Result<()> {
            if self.fail {
                return Err(Tween2dError::Backend("surface lost".into()));
            }
            self.calls.push(DrawCommand::FillRect { x, y, w, h, color });
            Ok(())
        }

        fn fill_circle(&mut self, cx: i32, cy: i32, radius: u32, color: Rgb) -> Result<()> {
            self.calls.push(DrawCommand::FillCircle {
                cx,
                cy,
                radius,
                color,
            });
            Ok(())
        }
    }

    #[test]
    fn closure_is_a_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |f: &ShapeParams| seen.push(f.kind());
            sink.draw(&ShapeParams::Circle {
                center: Point::ORIGIN,
                radius: 1.0,
                color: Rgb::BLACK,
            });
        }
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn backend_sink_rounds_to_pixels() {
        let backend = Rc::new(RefCell::new(Recorder::default()));
        let mut sink = BackendSink::new(Rc::clone(&backend));
        sink.draw(&ShapeParams::Circle {
            center: Point::new(10.4, 20.6),
            radius: 4.5,
            color: Rgb::WHITE,
        });
        sink.draw(&ShapeParams::Rectangle {
            origin: Point::new(-1.2, 3.0),
            width: 9.7,
            height: -2.0,
            color: Rgb::BLACK,
        });
        assert_eq!(
            backend.borrow().calls,
            vec![
                DrawCommand::FillCircle {
                    cx: 10,
                    cy: 21,
                    radius: 5,
                    color: Rgb::WHITE,
                },
                DrawCommand::FillRect {
                    x: -1,
                    y: 3,
                    w: 10,
                    h: 0,
                    color: Rgb::BLACK,
                },
            ]
        );
    }

    #[test]
    fn backend_errors_are_swallowed() {
        let backend = Rc::new(RefCell::new(Recorder {
            fail: true,
            ..Recorder::default()
        }));
        let mut sink = BackendSink::new(Rc::clone(&backend));
        sink.draw(&ShapeParams::Rectangle {
            origin: Point::ORIGIN,
            width: 1.0,
            height: 1.0,
            color: Rgb::BLACK,
        });
        assert!(backend.borrow().calls.is_empty());
    }

    #[test]
    fn triangle_uses_default_bounding_box() {
        let backend = Rc::new(RefCell::new(Recorder::default()));
        let mut sink = BackendSink::new(Rc::clone(&backend));
        sink.draw(&ShapeParams::Triangle {
            points: [Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(2.0, 3.0)],
            color: Rgb::BLACK,
            rotation: 0.0,
        });
        assert_eq!(
            backend.borrow().calls,
            vec![DrawCommand::FillRect {
                x: 0,
                y: 0,
                w: 4,
                h: 3,
                color: Rgb::BLACK,
            }]
        );
    }
}
