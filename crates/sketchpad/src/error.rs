//! Error types for Sketchpad operations.
//!
//! This module provides the main error type [`SketchpadError`] which wraps
//! the error conditions that can occur while building and processing scenes.

use std::io;

use thiserror::Error;

use sketchpad_core::error::PrimitiveError;

/// The main error type for Sketchpad operations.
#[derive(Debug, Error)]
pub enum SketchpadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Primitive(#[from] PrimitiveError),

    #[error("Configuration error: {0}")]
    Config(String),
}
