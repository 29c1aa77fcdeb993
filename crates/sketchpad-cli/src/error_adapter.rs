//! Error adapter for converting SketchpadError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use sketchpad::{PrimitiveError, SketchpadError};

/// Adapter for a single Sketchpad error.
///
/// Wraps a [`SketchpadError`] and implements [`MietteDiagnostic`] so the
/// binary can render it with a code and a hint.
pub struct ErrorAdapter<'a> {
    err: &'a SketchpadError,
}

impl<'a> ErrorAdapter<'a> {
    /// Create a new error adapter.
    pub fn new(err: &'a SketchpadError) -> Self {
        Self { err }
    }
}

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl std::error::Error for ErrorAdapter<'_> {}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.err {
            SketchpadError::Io(_) => "sketchpad::io",
            SketchpadError::Primitive(PrimitiveError::CyclicStructure { .. }) => {
                "sketchpad::cyclic_structure"
            }
            SketchpadError::Config(_) => "sketchpad::config",
        };
        Some(Box::new(code) as Box<dyn fmt::Display>)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.err {
            SketchpadError::Io(_) => return None,
            SketchpadError::Primitive(PrimitiveError::CyclicStructure { .. }) => {
                "a group may not be added to itself or to any group it contains"
            }
            SketchpadError::Config(_) => {
                "check the file passed with --config, sketchpad/config.toml, or the user config directory"
            }
        };
        Some(Box::new(help) as Box<dyn fmt::Display>)
    }
}

/// Convert a SketchpadError into the diagnostics to render.
pub fn to_reportables(err: &SketchpadError) -> Vec<ErrorAdapter<'_>> {
    vec![ErrorAdapter::new(err)]
}
