//! Basic geometric types.

use std::fmt;

/// An integer position on the sketchpad.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this point shifted by `dx` and `dy`.
    ///
    /// No bounds are enforced; coordinates wrap on `i32` overflow.
    pub fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(10, -20).to_string(), "(10, -20)");
    }

    #[test]
    fn test_translate() {
        let moved = Point::new(1, 2).translate(-4, 10);
        assert_eq!(moved, Point::new(-3, 12));
    }

    #[test]
    fn test_translate_wraps_on_overflow() {
        let moved = Point::new(i32::MAX, i32::MIN).translate(1, -1);
        assert_eq!(moved, Point::new(i32::MIN, i32::MAX));
    }
}
