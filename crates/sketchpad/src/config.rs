//! Configuration types for Sketchpad scenes.
//!
//! All types implement [`serde::Deserialize`] for loading from external
//! sources, and every field has a default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining transform and output settings.
//! - [`TransformConfig`] - Controls the scale factor applied to a scene.
//! - [`OutputConfig`] - Controls how drawn lines are laid out on a [`Canvas`].
//!
//! # Example
//!
//! ```
//! # use sketchpad::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.transform().scale_factor(), 2.0);
//! assert!(config.validate().is_ok());
//! ```

use serde::Deserialize;
use thiserror::Error;

use sketchpad_core::draw::Canvas;

/// Values that deserialize fine but cannot be used.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("scale_factor must be a finite number, got {0}")]
    NonFiniteScaleFactor(f32),
}

/// Top-level configuration combining transform and output settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Transform configuration section.
    #[serde(default)]
    transform: TransformConfig,

    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified sections.
    pub fn new(transform: TransformConfig, output: OutputConfig) -> Self {
        Self { transform, output }
    }

    /// Returns the transform configuration.
    pub fn transform(&self) -> &TransformConfig {
        &self.transform
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns the first invalid value found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.transform.validate()
    }
}

/// Settings for transformations applied to a whole scene.
#[derive(Debug, Clone, Deserialize)]
pub struct TransformConfig {
    /// Factor passed to [`crate::Editor::scale_all`].
    #[serde(default = "default_scale_factor")]
    scale_factor: f32,
}

fn default_scale_factor() -> f32 {
    2.0
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            scale_factor: default_scale_factor(),
        }
    }
}

impl TransformConfig {
    pub fn new(scale_factor: f32) -> Self {
        Self { scale_factor }
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_scale_factor(self.scale_factor)
    }
}

/// Rejects infinite and NaN scale factors.
///
/// # Errors
///
/// Returns [`ValidationError::NonFiniteScaleFactor`] for a non-finite factor.
pub fn validate_scale_factor(factor: f32) -> Result<(), ValidationError> {
    if factor.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFiniteScaleFactor(factor))
    }
}

/// Layout of drawn output.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct OutputConfig {
    /// Spaces added per group nesting level. Zero keeps every line flush left.
    #[serde(default)]
    indent: usize,
}

impl OutputConfig {
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Creates an empty [`Canvas`] laid out with these settings.
    pub fn canvas(&self) -> Canvas {
        Canvas::new().with_indent(self.indent)
    }
}
