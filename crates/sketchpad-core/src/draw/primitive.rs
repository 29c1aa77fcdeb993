//! The [`Primitive`] capability and its implementors.

use std::{cell::RefCell, fmt, rc::Rc};

use log::debug;

use crate::{draw::Canvas, geometry::Point};

mod circle;
mod group;
mod rectangle;
mod triangle;

pub use circle::Circle;
pub use group::Group;
pub use rectangle::Rectangle;
pub use triangle::Triangle;

/// A primitive that may be held by several containers at once.
///
/// The same instance can sit in an editor's top-level list and inside one or
/// more groups; a mutation through any holder is visible through all of them.
pub type SharedPrimitive = Rc<RefCell<dyn Primitive>>;

/// Wraps a primitive for shared ownership.
///
/// The returned handle keeps its concrete type, so callers can still inspect
/// variant-specific attributes, and coerces to [`SharedPrimitive`] wherever a
/// container expects one.
///
/// # Examples
///
/// ```
/// # use sketchpad_core::draw::{Circle, Group, Primitive, shared};
/// let circle = shared(Circle::new(10, 20, 5));
/// let mut group = Group::new(0, 0);
/// group.add_member(circle.clone()).expect("a circle cannot contain a group");
///
/// group.scale(2.0);
/// assert_eq!(circle.borrow().radius(), 10);
/// ```
pub fn shared<P: Primitive + 'static>(primitive: P) -> Rc<RefCell<P>> {
    Rc::new(RefCell::new(primitive))
}

/// The variant of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Circle,
    Rectangle,
    Triangle,
    Group,
}

impl PrimitiveKind {
    /// Returns the name used for this kind in drawn output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Circle => "Circle",
            Self::Rectangle => "Rectangle",
            Self::Triangle => "Triangle",
            Self::Group => "Group",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A drawable, movable and scalable graphic primitive.
///
/// Both leaf shapes and [`Group`] implement this trait, so callers never need
/// to know how deep a tree of primitives is.
pub trait Primitive: fmt::Debug {
    /// Returns the variant of this primitive.
    fn kind(&self) -> PrimitiveKind;

    /// Returns the current position.
    fn position(&self) -> Point;

    /// Returns mutable access to the position, used by [`Movable::move_by`].
    fn position_mut(&mut self) -> &mut Point;

    /// Describes the current state of this primitive on the canvas.
    fn draw(&self, canvas: &mut Canvas);

    /// Multiplies every size attribute by `factor`, truncating toward zero.
    fn scale(&mut self, factor: f32);

    /// Returns the direct children of this primitive.
    /// Leaf shapes have none.
    fn members(&self) -> &[SharedPrimitive] {
        &[]
    }
}

/// Position shifting shared by every [`Primitive`].
///
/// This is implemented once for all primitives and cannot be specialized.
/// Moving a [`Group`] shifts only the group's own anchor; its members keep
/// their positions.
pub trait Movable {
    /// Adds `dx` to `x` and `dy` to `y`.
    fn move_by(&mut self, dx: i32, dy: i32);
}

impl<P: Primitive + ?Sized> Movable for P {
    fn move_by(&mut self, dx: i32, dy: i32) {
        let position = self.position_mut();
        *position = position.translate(dx, dy);
        debug!(kind:% = self.kind(), dx, dy, position:% = self.position(); "Moved primitive");
    }
}

/// Multiplies a size attribute by `factor`, truncating toward zero.
///
/// Values outside the `i32` range saturate and a NaN product becomes zero.
fn scale_dimension(value: i32, factor: f32) -> i32 {
    (value as f32 * factor) as i32
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn coordinate_strategy() -> impl Strategy<Value = i32> {
        -1_000_000i32..1_000_000
    }

    fn size_strategy() -> impl Strategy<Value = i32> {
        -10_000i32..10_000
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Scaling by a whole factor is exact multiplication.
    fn check_whole_factor_is_exact(value: i32, factor: i32) -> Result<(), TestCaseError> {
        prop_assert_eq!(scale_dimension(value, factor as f32), value * factor);
        Ok(())
    }

    /// The scaled value never lands a whole unit away from the real product and
    /// never crosses zero.
    fn check_truncation_toward_zero(value: i32, factor: f32) -> Result<(), TestCaseError> {
        let scaled = scale_dimension(value, factor);
        let product = f64::from(value) * f64::from(factor);

        prop_assert!(
            (product - f64::from(scaled)).abs() < 1.0 + 1e-2,
            "{value} * {factor} scaled to {scaled}, product {product}"
        );
        prop_assert!(
            scaled == 0 || (scaled > 0) == (product > 0.0),
            "{value} * {factor} scaled to {scaled} with the wrong sign"
        );
        Ok(())
    }

    /// Moving changes only the position, by exactly the given offset.
    fn check_move_shifts_position(
        x: i32,
        y: i32,
        side: i32,
        dx: i32,
        dy: i32,
    ) -> Result<(), TestCaseError> {
        let mut triangle = Triangle::new(x, y, side);
        triangle.move_by(dx, dy);

        prop_assert_eq!(triangle.position(), Point::new(x + dx, y + dy));
        prop_assert_eq!(triangle.side_length(), side);
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn whole_factor_is_exact(value in size_strategy(), factor in -50i32..50) {
            check_whole_factor_is_exact(value, factor)?;
        }

        #[test]
        fn truncation_toward_zero(value in size_strategy(), factor in -10.0f32..10.0) {
            check_truncation_toward_zero(value, factor)?;
        }

        #[test]
        fn move_shifts_position(
            x in coordinate_strategy(),
            y in coordinate_strategy(),
            side in size_strategy(),
            dx in coordinate_strategy(),
            dy in coordinate_strategy(),
        ) {
            check_move_shifts_position(x, y, side, dx, dy)?;
        }
    }
}
