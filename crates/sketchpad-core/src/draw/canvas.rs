//! Text canvas that stands in for a rendering surface.
//!
//! Primitives "draw" by appending one human-readable line each. Composite
//! primitives open a nested scope for their members so that an indent width,
//! when configured, makes the tree shape visible.
//!
//! # Example
//!
//! ```
//! # use sketchpad_core::draw::Canvas;
//! let mut canvas = Canvas::new().with_indent(2);
//! canvas.draw_line("Drawing Group at (0, 0)");
//! canvas.nested(|canvas| canvas.draw_line("Drawing Triangle at (1, 1) with Side Length 3"));
//!
//! assert_eq!(
//!     canvas.to_string(),
//!     "Drawing Group at (0, 0)\n  Drawing Triangle at (1, 1) with Side Length 3"
//! );
//! ```

use std::fmt;

use log::trace;

/// Collects drawn lines in the order they were produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Canvas {
    lines: Vec<String>,
    indent: usize,
    depth: usize,
}

impl Canvas {
    /// Creates an empty canvas with no indentation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of spaces added per nesting level (builder style).
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Records a single drawn line at the current nesting depth.
    pub fn draw_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        trace!(depth = self.depth, line:%; "Drew line");

        let padding = self.indent * self.depth;
        if padding == 0 {
            self.lines.push(line);
        } else {
            self.lines.push(format!("{:padding$}{line}", ""));
        }
    }

    /// Runs `f` one nesting level deeper than the current one.
    pub fn nested<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }

    /// Returns the lines drawn so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consumes the canvas and returns its lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_empty() {
        let canvas = Canvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.len(), 0);
        assert_eq!(canvas.to_string(), "");
    }

    #[test]
    fn test_lines_keep_order() {
        let mut canvas = Canvas::new();
        canvas.draw_line("first");
        canvas.draw_line("second");

        assert_eq!(canvas.lines(), ["first", "second"]);
        assert_eq!(canvas.to_string(), "first\nsecond");
    }

    #[test]
    fn test_nested_without_indent_is_flat() {
        let mut canvas = Canvas::new();
        canvas.draw_line("outer");
        canvas.nested(|canvas| canvas.draw_line("inner"));

        assert_eq!(canvas.into_lines(), vec!["outer", "inner"]);
    }

    #[test]
    fn test_nested_indent_accumulates_and_restores() {
        let mut canvas = Canvas::new().with_indent(2);
        canvas.draw_line("a");
        canvas.nested(|canvas| {
            canvas.draw_line("b");
            canvas.nested(|canvas| canvas.draw_line("c"));
            canvas.draw_line("d");
        });
        canvas.draw_line("e");

        assert_eq!(canvas.lines(), ["a", "  b", "    c", "  d", "e"]);
    }
}
