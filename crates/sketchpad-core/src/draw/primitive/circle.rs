//! Circle primitive.

use log::debug;

use crate::{
    draw::{
        Canvas,
        primitive::{Primitive, PrimitiveKind, scale_dimension},
    },
    geometry::Point,
};

/// A circle anchored at its position.
///
/// The radius is not validated; zero and negative values are kept as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circle {
    position: Point,
    radius: i32,
}

impl Circle {
    pub fn new(x: i32, y: i32, radius: i32) -> Self {
        Self {
            position: Point::new(x, y),
            radius,
        }
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }
}

impl Primitive for Circle {
    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Circle
    }

    fn position(&self) -> Point {
        self.position
    }

    fn position_mut(&mut self) -> &mut Point {
        &mut self.position
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.draw_line(format!(
            "Drawing {} at {} with Radius {}",
            self.kind(),
            self.position,
            self.radius
        ));
    }

    fn scale(&mut self, factor: f32) {
        let radius = scale_dimension(self.radius, factor);
        debug!(factor, from = self.radius, to = radius; "Scaling circle");
        self.radius = radius;
    }
}
