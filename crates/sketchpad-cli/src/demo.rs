//! The demonstration scene driven by the CLI.
//!
//! One circle, one rectangle and one triangle, plus a group that shares the
//! circle and the rectangle. The editor holds all four, so the shared shapes
//! are scaled once directly and once through the group.

use log::debug;

use sketchpad::{
    Editor, SketchpadError,
    config::OutputConfig,
    draw::{Circle, Group, Rectangle, Triangle, shared},
};

/// A fixed sample scene.
#[derive(Debug)]
pub struct DemoScene {
    editor: Editor,
}

impl DemoScene {
    /// Builds the sample scene.
    ///
    /// # Errors
    ///
    /// Returns an error if the group cannot accept its members.
    pub fn build() -> Result<Self, SketchpadError> {
        let circle = shared(Circle::new(10, 20, 5));
        let rectangle = shared(Rectangle::new(30, 40, 8, 12));
        let triangle = shared(Triangle::new(50, 60, 10));

        let mut group = Group::new(0, 0);
        group.add_member(circle.clone())?;
        group.add_member(rectangle.clone())?;

        let mut editor = Editor::new();
        editor.add_primitive(circle);
        editor.add_primitive(rectangle);
        editor.add_primitive(triangle);
        editor.add_primitive(shared(group));

        debug!(primitives = editor.len(); "Demo scene built");
        Ok(Self { editor })
    }

    /// Draws the scene, scales it by `factor`, and draws it again.
    ///
    /// Returns the full transcript, one line per drawn primitive plus headers.
    pub fn play(mut self, factor: f32, output: &OutputConfig) -> String {
        let mut canvas = output.canvas();

        canvas.draw_line("Original Drawings:");
        self.editor.draw_all(&mut canvas);

        canvas.draw_line("");
        canvas.draw_line(format!("Scaling by factor of {factor}:"));
        self.editor.scale_all(factor);
        self.editor.draw_all(&mut canvas);

        format!("{canvas}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_default_factor() {
        let scene = DemoScene::build().expect("Failed to build scene");
        let transcript = scene.play(2.0, &OutputConfig::default());

        let expected = "\
Original Drawings:
Drawing Circle at (10, 20) with Radius 5
Drawing Rectangle at (30, 40) with Width 8 and Height 12
Drawing Triangle at (50, 60) with Side Length 10
Drawing Group at (0, 0)
Drawing Circle at (10, 20) with Radius 5
Drawing Rectangle at (30, 40) with Width 8 and Height 12

Scaling by factor of 2:
Drawing Circle at (10, 20) with Radius 20
Drawing Rectangle at (30, 40) with Width 32 and Height 48
Drawing Triangle at (50, 60) with Side Length 20
Drawing Group at (0, 0)
Drawing Circle at (10, 20) with Radius 20
Drawing Rectangle at (30, 40) with Width 32 and Height 48
";
        assert_eq!(transcript, expected);
    }

    #[test]
    fn test_play_fractional_factor() {
        let scene = DemoScene::build().expect("Failed to build scene");
        let transcript = scene.play(0.5, &OutputConfig::default());

        assert!(transcript.contains("Scaling by factor of 0.5:"));
        // 5 -> 2 -> 1, truncating at each step.
        assert!(transcript.contains("Drawing Circle at (10, 20) with Radius 1\n"));
        assert!(transcript.contains("Drawing Triangle at (50, 60) with Side Length 5\n"));
    }
}
