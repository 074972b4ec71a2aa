use std::f64::consts::TAU;

/// Easing functions used to map normalized tween progress.
///
/// Every variant clamps its input to `[0, 1]` and maps `0 -> 0` and `1 -> 1` exactly.
/// Elastic variants overshoot the unit range in between.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Decaying sine overshoot that settles on the target.
    OutElastic {
        /// Peak overshoot scale; values below 1 are treated as 1 and shorten the period instead.
        amplitude: f64,
        /// Oscillation period as a fraction of the tween.
        period: f64,
    },
    /// Elastic overshoot on both ends of the tween.
    InOutElastic {
        /// Peak overshoot scale.
        amplitude: f64,
        /// Oscillation period as a fraction of the tween.
        period: f64,
    },
}

impl Default for Ease {
    fn default() -> Self {
        Self::elastic()
    }
}

impl Ease {
    /// Elastic ease-out with the classic `(1.0, 0.3)` shape.
    pub const fn elastic() -> Self {
        Self::OutElastic {
            amplitude: 1.0,
            period: 0.3,
        }
    }

    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::OutElastic { amplitude, period } => elastic_out(t, amplitude, period),
            Self::InOutElastic { amplitude, period } => {
                if t < 0.5 {
                    (1.0 - elastic_out(1.0 - 2.0 * t, amplitude, period)) / 2.0
                } else {
                    (1.0 + elastic_out(2.0 * t - 1.0, amplitude, period)) / 2.0
                }
            }
        }
    }
}

fn elastic_out(t: f64, amplitude: f64, period: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let period = if period.is_finite() && period > 0.0 {
        period
    } else {
        0.3
    };
    let (amp, period) = if amplitude.is_finite() && amplitude >= 1.0 {
        (amplitude, period)
    } else if amplitude.is_finite() && amplitude > 0.0 {
        (1.0, period / amplitude)
    } else {
        (1.0, period)
    };

    let shift = period / TAU * (1.0 / amp).asin();
    amp * 2f64.powf(-10.0 * t) * ((t - shift) * TAU / period).sin() + 1.0
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
