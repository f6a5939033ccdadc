//! Louver animation engine
//!
//! Time-based animation primitives and the frame scheduler that drives them:
//!
//! - **Easing**: pure progress curves mapping `[0, 1]` to `[0, 1]`
//! - **Tween**: a delayed, eased, fixed-duration interpolation between two
//!   values, advanced by `tick(dt_ms)`
//! - **AnimationScheduler**: a background thread that drains a task queue and
//!   ticks registered callbacks at a target frame rate, so all animation
//!   writes happen on one owner thread
//!
//! # Example
//!
//! ```rust
//! use louver_animation::{Easing, Tween};
//!
//! let mut tween = Tween::new(0.0, 1.0, 100, Easing::QuartOut).with_delay(50);
//! tween.tick(50.0);
//! assert!(!tween.is_pending());
//! tween.tick(100.0);
//! assert!(tween.is_finished());
//! assert_eq!(tween.value(), 1.0);
//! ```

pub mod easing;
pub mod scheduler;
pub mod tween;

pub use easing::Easing;
pub use scheduler::{
    AnimationScheduler, ScheduleError, SchedulerHandle, Task, TickCallback, TickCallbackId,
};
pub use tween::Tween;
