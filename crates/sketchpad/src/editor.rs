//! The top-level container driving bulk operations over a scene.

use log::{debug, info};

use sketchpad_core::draw::{Canvas, SharedPrimitive};

/// Holds the top-level primitives of a scene in insertion order.
///
/// Primitives are shared handles. A primitive that is both a top-level entry
/// and a member of a group (also held here) receives every bulk operation
/// once per holder: [`Editor::scale_all`] scales it twice.
///
/// # Examples
///
/// ```
/// use sketchpad::{Editor, draw::{Canvas, Circle, Triangle, shared}};
///
/// let mut editor = Editor::new();
/// editor.add_primitive(shared(Circle::new(10, 20, 5)));
/// editor.add_primitive(shared(Triangle::new(50, 60, 10)));
///
/// editor.scale_all(2.0);
///
/// let mut canvas = Canvas::new();
/// editor.draw_all(&mut canvas);
/// assert_eq!(
///     canvas.lines(),
///     [
///         "Drawing Circle at (10, 20) with Radius 10",
///         "Drawing Triangle at (50, 60) with Side Length 20",
///     ]
/// );
/// ```
#[derive(Debug, Default)]
pub struct Editor {
    primitives: Vec<SharedPrimitive>,
}

impl Editor {
    /// Creates an editor with an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a primitive to the top-level list.
    pub fn add_primitive(&mut self, primitive: SharedPrimitive) {
        debug!(index = self.primitives.len(); "Adding primitive to editor");
        self.primitives.push(primitive);
    }

    /// Draws every top-level primitive in insertion order.
    pub fn draw_all(&self, canvas: &mut Canvas) {
        info!(primitives = self.primitives.len(); "Drawing all primitives");
        for primitive in &self.primitives {
            primitive.borrow().draw(canvas);
        }
    }

    /// Scales every top-level primitive in insertion order.
    pub fn scale_all(&mut self, factor: f32) {
        info!(factor, primitives = self.primitives.len(); "Scaling all primitives");
        for primitive in &self.primitives {
            primitive.borrow_mut().scale(factor);
        }
    }

    /// Returns the top-level primitives.
    pub fn primitives(&self) -> &[SharedPrimitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}
