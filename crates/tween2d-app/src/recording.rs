//! Headless backend that records every draw call.

use tween2d_types::backend::{DrawCommand, ShapeBackend};
use tween2d_types::color::Rgb;
use tween2d_types::error::Result;

#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub calls: Vec<DrawCommand>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear { .. }))
            .count()
    }
}

impl ShapeBackend for RecordingBackend {
    fn clear(&mut self, color: Rgb) -> Result<()> {
        self.calls.push(DrawCommand::Clear { color });
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgb) -> Result<()> {
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

    fn fill_triangle(&mut self, points: [(i32, i32); 3], color: Rgb) -> Result<()> {
        self.calls.push(DrawCommand::FillTriangle { points, color });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut b = RecordingBackend::new();
        b.clear(Rgb::BLACK).unwrap();
        b.fill_circle(1, 2, 3, Rgb::WHITE).unwrap();
        b.fill_triangle([(0, 0), (1, 0), (0, 1)], Rgb::WHITE).unwrap();
        assert_eq!(b.calls.len(), 3);
        assert_eq!(b.clear_count(), 1);
        assert!(matches!(b.calls[1], DrawCommand::FillCircle { radius: 3, .. }));
    }
}
