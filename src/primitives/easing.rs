//! Easing - timing curves for smoothed motion
//!
//! Curves are named after the power family used by common tween libraries:
//! `power1` is quadratic, `power2` cubic, `power3` quartic. Only the `out`
//! flavour is needed here since every effect decelerates into its target.

/// Timing curve mapping linear progress to eased progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    Power1Out,
    #[default]
    Power2Out,
    Power3Out,
}

impl Ease {
    /// Eased progress for `t` in `[0, 1]`; out-of-range input is clamped
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power1Out => 1.0 - (1.0 - t).powi(2),
            Self::Power2Out => 1.0 - (1.0 - t).powi(3),
            Self::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Power1Out => "power1.out",
            Self::Power2Out => "power2.out",
            Self::Power3Out => "power3.out",
        }
    }
}
