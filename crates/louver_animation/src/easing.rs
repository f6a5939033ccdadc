//! Easing curves
//!
//! Pure functions mapping linear progress to eased progress. Input is clamped
//! to `[0, 1]` before evaluation and every curve maps 0 to 0 and 1 to 1, so
//! an animation that finishes lands exactly on its end value.

/// An easing curve
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// No easing, constant velocity
    #[default]
    Linear,
    /// Quadratic acceleration from zero velocity
    QuadIn,
    /// Quadratic deceleration to zero velocity
    QuadOut,
    /// Cubic acceleration from zero velocity
    CubicIn,
    /// Cubic deceleration to zero velocity
    CubicOut,
    /// Quartic acceleration from zero velocity
    QuartIn,
    /// Quartic deceleration to zero velocity
    QuartOut,
}

impl Easing {
    /// Apply the curve to a progress value
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::QuartIn => t.powi(4),
            Easing::QuartOut => 1.0 - (1.0 - t).powi(4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 7] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::QuartIn,
        Easing::QuartOut,
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at 0");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_input_clamped() {
        for easing in ALL {
            assert_eq!(easing.apply(-0.5), 0.0, "{easing:?} below range");
            assert_eq!(easing.apply(1.5), 1.0, "{easing:?} above range");
        }
    }

    #[test]
    fn test_curve_shapes() {
        assert_eq!(Easing::Linear.apply(0.25), 0.25);
        assert!((Easing::QuadIn.apply(0.5) - 0.25).abs() < 1e-6);
        assert!((Easing::QuadOut.apply(0.5) - 0.75).abs() < 1e-6);
        assert!((Easing::CubicOut.apply(0.5) - 0.875).abs() < 1e-6);
        assert!((Easing::QuartIn.apply(0.5) - 0.0625).abs() < 1e-6);
        assert!((Easing::QuartOut.apply(0.5) - 0.9375).abs() < 1e-6);
    }

    #[test]
    fn test_monotonic() {
        for easing in ALL {
            let mut last = 0.0f32;
            for step in 0..=100 {
                let v = easing.apply(step as f32 / 100.0);
                assert!(v >= last, "{easing:?} decreased at step {step}");
                last = v;
            }
        }
    }

    #[test]
    fn test_out_curves_lead_in_curves() {
        // Deceleration curves are ahead of linear mid-flight, acceleration
        // curves behind it.
        for t in [0.2, 0.5, 0.8] {
            assert!(Easing::QuartOut.apply(t) > t);
            assert!(Easing::QuadIn.apply(t) < t);
        }
    }
}
