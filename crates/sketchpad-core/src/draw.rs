//! Drawable primitives and the canvas they draw onto.
//!
//! Leaf shapes ([`Circle`], [`Rectangle`], [`Triangle`]) and the composite
//! [`Group`] all implement [`Primitive`], so any operation can be applied to a
//! single shape or to an arbitrarily deep tree of groups in the same way.

mod canvas;
mod primitive;

pub use canvas::Canvas;
pub use primitive::{
    Circle, Group, Movable, Primitive, PrimitiveKind, Rectangle, SharedPrimitive, Triangle,
    shared,
};
