//! Sketchpad Core Types and Definitions
//!
//! This crate provides the foundational types for Sketchpad scenes. It includes:
//!
//! - **Geometry**: Integer positions ([`geometry::Point`])
//! - **Draw**: The [`draw::Primitive`] capability, its leaf shapes, the
//!   composite [`draw::Group`], and the text [`draw::Canvas`] they draw onto
//! - **Errors**: Structural errors raised while composing primitives ([`error`] module)

pub mod draw;
pub mod error;
pub mod geometry;
