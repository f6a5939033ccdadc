//! Fill brushes: solid colors and linear gradients.
//!
//! A brush describes how a filled shape is painted. The louver crates never
//! rasterize brushes themselves; they hand them across the `PaintContext`
//! boundary for the host renderer to resolve.

use crate::color::Color;
use crate::geometry::Point;

/// Gradient stop
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient (0.0 to 1.0)
    pub offset: f32,
    /// Color at this stop
    pub color: Color,
}

impl GradientStop {
    /// Create a new gradient stop, clamping the offset into range
    pub fn new(offset: f32, color: Color) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
        }
    }
}

/// Gradient fill
#[derive(Clone, Debug, PartialEq)]
pub enum Gradient {
    /// Linear gradient between two points
    Linear {
        /// Start point
        start: Point,
        /// End point
        end: Point,
        /// Color stops (should be sorted by offset)
        stops: Vec<GradientStop>,
    },
}

impl Gradient {
    /// Create a simple linear gradient with two colors
    pub fn linear(start: Point, end: Point, from: Color, to: Color) -> Self {
        Gradient::Linear {
            start,
            end,
            stops: vec![GradientStop::new(0.0, from), GradientStop::new(1.0, to)],
        }
    }

    /// Create a linear gradient with multiple stops
    pub fn linear_with_stops(start: Point, end: Point, stops: Vec<GradientStop>) -> Self {
        Gradient::Linear { start, end, stops }
    }
}

/// Fill brush
#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    Gradient(Gradient),
}

impl Default for Brush {
    fn default() -> Self {
        Brush::Solid(Color::BLACK)
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

impl From<Gradient> for Brush {
    fn from(gradient: Gradient) -> Self {
        Brush::Gradient(gradient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_offset_clamped() {
        assert_eq!(GradientStop::new(-0.5, Color::RED).offset, 0.0);
        assert_eq!(GradientStop::new(1.5, Color::RED).offset, 1.0);
        assert_eq!(GradientStop::new(0.25, Color::RED).offset, 0.25);
    }

    #[test]
    fn test_linear_gradient_stops() {
        let g = Gradient::linear(Point::ZERO, Point::new(100.0, 0.0), Color::BLACK, Color::WHITE);
        let Gradient::Linear { stops, .. } = &g;
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0].offset, 0.0);
        assert_eq!(stops[1].color, Color::WHITE);
    }

    #[test]
    fn test_brush_conversions() {
        assert_eq!(Brush::from(Color::RED), Brush::Solid(Color::RED));
        assert_eq!(Brush::default(), Brush::Solid(Color::BLACK));
        let g = Gradient::linear(Point::ZERO, Point::new(0.0, 1.0), Color::RED, Color::BLUE);
        assert!(matches!(Brush::from(g), Brush::Gradient(_)));
    }
}
