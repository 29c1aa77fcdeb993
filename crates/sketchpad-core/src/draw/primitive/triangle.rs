//! Triangle primitive.

use log::debug;

use crate::{
    draw::{
        Canvas,
        primitive::{Primitive, PrimitiveKind, scale_dimension},
    },
    geometry::Point,
};

/// An equilateral triangle described by its side length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triangle {
    position: Point,
    side_length: i32,
}

impl Triangle {
    pub fn new(x: i32, y: i32, side_length: i32) -> Self {
        Self {
            position: Point::new(x, y),
            side_length,
        }
    }

    pub fn side_length(&self) -> i32 {
        self.side_length
    }
}

impl Primitive for Triangle {
    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Triangle
    }

    fn position(&self) -> Point {
        self.position
    }

    fn position_mut(&mut self) -> &mut Point {
        &mut self.position
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.draw_line(format!(
            "Drawing {} at {} with Side Length {}",
            self.kind(),
            self.position,
            self.side_length
        ));
    }

    fn scale(&mut self, factor: f32) {
        let side_length = scale_dimension(self.side_length, factor);
        debug!(factor, from = self.side_length, to = side_length; "Scaling triangle");
        self.side_length = side_length;
    }
}
