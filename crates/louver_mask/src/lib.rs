//! Louver slanted transition mask
//!
//! A full-surface transition overlay: five slanted parallelogram bands that
//! sweep in to cover the surface and sweep out to reveal it again, with a
//! center-weighted stagger so the edges lead the open and the center leads
//! the close.
//!
//! - **RegionState**: thread-shared per-region coverage values with redraw
//!   notifications
//! - **MaskSequencer**: launches the five staggered tweens and keeps exactly
//!   one sequence live
//! - **geometry**: pure functions from progress values to slanted quads
//! - **SlantedMask**: the assembled control surface hosts embed
//!
//! # Example
//!
//! ```rust
//! use louver_animation::AnimationScheduler;
//! use louver_core::{CommandRecorder, Size};
//! use louver_mask::SlantedMask;
//!
//! let scheduler = AnimationScheduler::new();
//! let mut mask = SlantedMask::new(scheduler.handle());
//!
//! mask.set_opened(true);
//! for _ in 0..64 {
//!     scheduler.tick_with(8.0);
//! }
//!
//! let mut recorder = CommandRecorder::new();
//! mask.render(Size::new(1000.0, 100.0), &mut recorder);
//! assert_eq!(recorder.commands().len(), 5);
//! ```

pub mod geometry;
pub mod mask;
pub mod region;
pub mod sequencer;

pub use geometry::{build_region_quads, RegionQuad};
pub use mask::{MaskConfig, SlantedMask};
pub use region::{MaskError, RegionState, BAND_WEIGHTS, REGION_COUNT};
pub use sequencer::{
    MaskPhase, MaskSequencer, SequenceDirection, SequenceHandle, SequenceOutcome,
};
