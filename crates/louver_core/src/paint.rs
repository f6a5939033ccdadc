//! The paint boundary between louver and the host renderer.
//!
//! Louver produces geometry and hands it across `PaintContext`; how a path
//! actually reaches the screen (GPU tessellation, CPU rasterizer, a scene
//! graph) is entirely the host's business. `CommandRecorder` is the built-in
//! implementation used by tests and headless tools.

use crate::brush::Brush;
use crate::path::Path;

/// Rendering operations louver needs from the host
pub trait PaintContext {
    /// Fill a path with a brush
    fn fill_path(&mut self, path: &Path, brush: Brush);
}

/// A recorded paint operation
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    FillPath { path: Path, brush: Brush },
}

/// A paint context that records commands instead of drawing
#[derive(Debug, Default)]
pub struct CommandRecorder {
    commands: Vec<PaintCommand>,
}

impl CommandRecorder {
    /// Create a new empty recorder
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Get the recorded commands
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the recorder empty
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Clear all recorded commands
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl PaintContext for CommandRecorder {
    fn fill_path(&mut self, path: &Path, brush: Brush) {
        self.commands.push(PaintCommand::FillPath {
            path: path.clone(),
            brush,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::geometry::Point;

    fn triangle() -> Path {
        Path::polygon(&[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 8.0),
        ])
    }

    #[test]
    fn test_recorder_records_fills() {
        let mut recorder = CommandRecorder::new();
        recorder.fill_path(&triangle(), Brush::Solid(Color::RED));
        recorder.fill_path(&triangle(), Brush::Solid(Color::BLUE));

        let commands = recorder.commands();
        assert_eq!(commands.len(), 2);
        let PaintCommand::FillPath { brush, .. } = &commands[1];
        assert_eq!(*brush, Brush::Solid(Color::BLUE));
    }

    #[test]
    fn test_take_commands_drains() {
        let mut recorder = CommandRecorder::new();
        recorder.fill_path(&triangle(), Brush::default());
        let taken = recorder.take_commands();
        assert_eq!(taken.len(), 1);
        assert!(recorder.commands().is_empty());
    }
}
