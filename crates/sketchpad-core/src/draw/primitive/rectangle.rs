//! Rectangle primitive.

use log::debug;

use crate::{
    draw::{
        Canvas,
        primitive::{Primitive, PrimitiveKind, scale_dimension},
    },
    geometry::Point,
};

/// An axis-aligned rectangle anchored at its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rectangle {
    position: Point,
    width: i32,
    height: i32,
}

impl Rectangle {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            position: Point::new(x, y),
            width,
            height,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

impl Primitive for Rectangle {
    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Rectangle
    }

    fn position(&self) -> Point {
        self.position
    }

    fn position_mut(&mut self) -> &mut Point {
        &mut self.position
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.draw_line(format!(
            "Drawing {} at {} with Width {} and Height {}",
            self.kind(),
            self.position,
            self.width,
            self.height
        ));
    }

    /// Both dimensions are scaled by the same factor, each truncated on its own.
    fn scale(&mut self, factor: f32) {
        let width = scale_dimension(self.width, factor);
        let height = scale_dimension(self.height, factor);
        debug!(factor, width, height; "Scaling rectangle");
        self.width = width;
        self.height = height;
    }
}
