//! Error types for primitive composition.

use thiserror::Error;

use crate::geometry::Point;

/// Errors raised while composing primitives into groups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrimitiveError {
    /// The member being added is the group itself or already contains it.
    #[error("Cannot add member to group at {group}: the group would contain itself")]
    CyclicStructure { group: Point },
}
