//! Sketchpad - composable graphic primitives.
//!
//! Circles, rectangles and triangles can be composed into (nested) groups and
//! handed to an [`Editor`], which draws or scales every primitive it holds.
//! Groups and leaf shapes share one capability set, so every operation works
//! the same regardless of how deep a scene is.

pub mod config;

mod editor;
mod error;

pub use sketchpad_core::{draw, geometry};

pub use editor::Editor;
pub use error::SketchpadError;
pub use sketchpad_core::error::PrimitiveError;
