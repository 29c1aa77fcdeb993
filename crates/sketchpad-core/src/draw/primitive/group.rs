//! Composite primitive that owns an ordered list of members.

use log::debug;

use crate::{
    draw::{
        Canvas,
        primitive::{Primitive, PrimitiveKind, SharedPrimitive},
    },
    error::PrimitiveError,
    geometry::Point,
};

/// A group of primitives treated as a single primitive.
///
/// Drawing and scaling recurse into every member in insertion order. Moving a
/// group only shifts the group's own anchor: members keep their positions.
///
/// Members are shared handles, so a primitive may belong to several groups
/// (and to an editor) at the same time. Each holder applies operations to it
/// independently.
#[derive(Debug, Default)]
pub struct Group {
    position: Point,
    members: Vec<SharedPrimitive>,
}

impl Group {
    /// Creates an empty group anchored at `(x, y)`.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            position: Point::new(x, y),
            members: Vec::new(),
        }
    }

    /// Appends a member to the end of the group.
    ///
    /// Duplicates are allowed: adding the same primitive twice makes every
    /// operation visit it twice.
    ///
    /// # Errors
    ///
    /// Returns [`PrimitiveError::CyclicStructure`] if `member` is this group
    /// or transitively contains it. The group is left unchanged.
    pub fn add_member(&mut self, member: SharedPrimitive) -> Result<(), PrimitiveError> {
        let this = self as *const Self as *const ();
        if reaches(&member, this) {
            return Err(PrimitiveError::CyclicStructure {
                group: self.position,
            });
        }

        debug!(
            group:% = self.position,
            index = self.members.len();
            "Adding member to group"
        );
        self.members.push(member);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Primitive for Group {
    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Group
    }

    fn position(&self) -> Point {
        self.position
    }

    fn position_mut(&mut self) -> &mut Point {
        &mut self.position
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.draw_line(format!("Drawing {} at {}", self.kind(), self.position));
        canvas.nested(|canvas| {
            for member in &self.members {
                member.borrow().draw(canvas);
            }
        });
    }

    fn scale(&mut self, factor: f32) {
        debug!(factor, members = self.members.len(); "Scaling group");
        for member in &self.members {
            member.borrow_mut().scale(factor);
        }
    }

    fn members(&self) -> &[SharedPrimitive] {
        &self.members
    }
}

/// Returns true if `node` is `target` or contains it at any depth.
///
/// `target` is compared by address before `node` is borrowed. A node the
/// caller still holds mutably borrowed is treated as not containing `target`:
/// the only group being mutated by `add_member` is `target` itself, which the
/// address check has already matched.
fn reaches(node: &SharedPrimitive, target: *const ()) -> bool {
    if node.as_ptr() as *const () == target {
        return true;
    }
    node.try_borrow().is_ok_and(|node| {
        node.members()
            .iter()
            .any(|member| reaches(member, target))
    })
}
