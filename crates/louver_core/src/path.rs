//! Straight-edged vector paths.
//!
//! Only the command set needed for polygonal shapes is carried: move, line,
//! and close. Commands are stored inline for small paths since the typical
//! shape here is a quad (five commands).

use smallvec::SmallVec;

use crate::geometry::{Point, Rect};

/// A single path command
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// Move to a point, starting a new subpath
    MoveTo(Point),
    /// Line to a point
    LineTo(Point),
    /// Close the current subpath
    Close,
}

/// A vector path made of straight edges
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: SmallVec<[PathCommand; 8]>,
}

impl Path {
    /// Create a new empty path
    pub fn new() -> Self {
        Self {
            commands: SmallVec::new(),
        }
    }

    /// Create a path from a list of commands
    pub fn from_commands(commands: impl IntoIterator<Item = PathCommand>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
        }
    }

    /// Create a closed polygon through the given points
    ///
    /// Returns an empty path when fewer than three points are supplied.
    pub fn polygon(points: &[Point]) -> Self {
        if points.len() < 3 {
            return Self::new();
        }
        let mut path = Self::new().move_to(points[0].x, points[0].y);
        for p in &points[1..] {
            path = path.line_to(p.x, p.y);
        }
        path.close()
    }

    /// Move to a point
    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    /// Line to a point
    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    /// Close the path
    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// The recorded commands
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Axis-aligned bounding box of all path points
    pub fn bounds(&self) -> Rect {
        if self.commands.is_empty() {
            return Rect::ZERO;
        }

        let mut min_x = f32::INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut max_y = f32::NEG_INFINITY;

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                    min_x = min_x.min(p.x);
                    min_y = min_y.min(p.y);
                    max_x = max_x.max(p.x);
                    max_y = max_y.max(p.y);
                }
                PathCommand::Close => {}
            }
        }

        if min_x > max_x {
            return Rect::ZERO;
        }
        Rect::from_min_max(Point::new(min_x, min_y), Point::new(max_x, max_y))
    }
}
