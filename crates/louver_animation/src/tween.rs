//! Timed interpolation between two values.
//!
//! A `Tween` is plain data: whoever owns it advances it with `tick(dt_ms)`
//! and reads `value()`. Scheduling, cancellation, and applying samples are
//! the owner's concern, which keeps the tween itself trivially testable.

use crate::easing::Easing;

/// A delayed, eased, fixed-duration animation from one value to another
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    duration_ms: u32,
    delay_ms: u32,
    easing: Easing,
    elapsed_ms: f32,
}

impl Tween {
    /// Create a tween from `from` to `to` over `duration_ms`
    ///
    /// A zero duration is floored to 1 ms, degenerating into a jump that
    /// completes on the first tick.
    pub fn new(from: f32, to: f32, duration_ms: u32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(1),
            delay_ms: 0,
            easing,
            elapsed_ms: 0.0,
        }
    }

    /// Delay the start by `delay_ms`; the tween is pending until it elapses
    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Advance the tween's clock
    pub fn tick(&mut self, dt_ms: f32) {
        self.elapsed_ms += dt_ms.max(0.0);
    }

    /// Whether the delay has not yet elapsed
    ///
    /// A pending tween has produced no samples; `value()` would report the
    /// start value but owners typically skip applying it.
    pub fn is_pending(&self) -> bool {
        self.elapsed_ms < self.delay_ms as f32
    }

    /// Whether the tween has played through its full duration
    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= (self.delay_ms + self.duration_ms) as f32
    }

    /// Linear progress through the active window, clamped to `[0, 1]`
    pub fn progress(&self) -> f32 {
        let active_ms = self.elapsed_ms - self.delay_ms as f32;
        (active_ms / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// The current eased value
    ///
    /// Exactly `from` before the active window and exactly `to` once
    /// finished, since every easing curve maps its endpoints exactly.
    pub fn value(&self) -> f32 {
        self.from + (self.to - self.from) * self.easing.apply(self.progress())
    }

    pub fn from(&self) -> f32 {
        self.from
    }

    pub fn to(&self) -> f32 {
        self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_during_delay() {
        let mut tween = Tween::new(0.0, 1.0, 100, Easing::Linear).with_delay(50);
        assert!(tween.is_pending());
        assert_eq!(tween.value(), 0.0);

        tween.tick(49.0);
        assert!(tween.is_pending());
        assert!(!tween.is_finished());

        tween.tick(1.0);
        assert!(!tween.is_pending());
        assert_eq!(tween.progress(), 0.0);
    }

    #[test]
    fn test_linear_midpoint() {
        let mut tween = Tween::new(0.0, 10.0, 100, Easing::Linear);
        tween.tick(50.0);
        assert!((tween.value() - 5.0).abs() < 1e-6);
        assert!((tween.progress() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_eased_sampling() {
        let mut tween = Tween::new(0.0, 1.0, 100, Easing::QuartOut);
        tween.tick(50.0);
        assert!((tween.value() - 0.9375).abs() < 1e-6);
    }

    #[test]
    fn test_finish_is_exact() {
        let mut tween = Tween::new(1.0, 0.0, 300, Easing::QuadIn).with_delay(90);
        tween.tick(1000.0);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 0.0);
        assert_eq!(tween.progress(), 1.0);
    }

    #[test]
    fn test_overshoot_time_clamps() {
        let mut tween = Tween::new(0.0, 1.0, 100, Easing::Linear);
        tween.tick(1e6);
        assert_eq!(tween.value(), 1.0);
    }

    #[test]
    fn test_zero_duration_floored() {
        let mut tween = Tween::new(0.0, 1.0, 0, Easing::Linear);
        assert!(!tween.is_finished());
        tween.tick(1.0);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 1.0);
    }

    #[test]
    fn test_negative_dt_ignored() {
        let mut tween = Tween::new(0.0, 1.0, 100, Easing::Linear);
        tween.tick(30.0);
        let before = tween.value();
        tween.tick(-100.0);
        assert_eq!(tween.value(), before);
    }
}
