//! Louver core primitives
//!
//! Shared foundation for the louver crates: plain geometry types, colors and
//! brushes, straight-edged vector paths, and the `PaintContext` boundary that
//! the host's renderer implements.
//!
//! # Features
//!
//! - **Geometry**: `Point`, `Size`, `Rect`
//! - **Fills**: `Color`, `Gradient`, `Brush`
//! - **Paths**: polygon-oriented `Path` built from move/line/close commands
//! - **Paint boundary**: the `PaintContext` trait plus `CommandRecorder`, a
//!   recording implementation for tests and headless use
//!
//! # Example
//!
//! ```rust
//! use louver_core::{Brush, Color, CommandRecorder, PaintContext, Path, Point};
//!
//! let quad = Path::polygon(&[
//!     Point::new(10.0, 0.0),
//!     Point::new(60.0, 0.0),
//!     Point::new(40.0, 80.0),
//!     Point::new(-10.0, 80.0),
//! ]);
//!
//! let mut recorder = CommandRecorder::new();
//! recorder.fill_path(&quad, Brush::Solid(Color::BLACK));
//! assert_eq!(recorder.commands().len(), 1);
//! ```

pub mod brush;
pub mod color;
pub mod geometry;
pub mod paint;
pub mod path;

pub use brush::{Brush, Gradient, GradientStop};
pub use color::Color;
pub use geometry::{Point, Rect, Size};
pub use paint::{CommandRecorder, PaintCommand, PaintContext};
pub use path::{Path, PathCommand};
