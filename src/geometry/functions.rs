use crate::{
    foundation::core::Vec2,
    foundation::error::{BezringError, BezringResult},
    geometry::sample::value_noise,
};

/// Largest angular frequency accepted by [`ProceduralGeometry::validate`].
pub const MAX_FREQ: f64 = 1.0e6;

fn check_param(what: &str, v: f64) -> BezringResult<()> {
    if !v.is_finite() {
        return Err(BezringError::validation(format!("{what} must be finite, got {v}")));
    }
    Ok(())
}

fn check_freq(what: &str, v: f64) -> BezringResult<()> {
    check_param(what, v)?;
    if v.abs() > MAX_FREQ {
        return Err(BezringError::validation(format!(
            "{what} must be within +/-{MAX_FREQ}, got {v}"
        )));
    }
    Ok(())
}

/// Angle-parameterized shape of a ring.
///
/// `position` places anchors on the unit ring (scaled by the radius later). `control_point` and
/// `contraction` place the raw control points and may use `sample`, the explicit random draw from
/// a [`SampleSource`](crate::SampleSource). Deterministic geometries ignore it.
pub trait RingGeometry {
    /// Unit offset of the anchor at `angle`.
    fn position(&self, angle: f64) -> Vec2;

    /// Unit offset of the control points at `angle`. Defaults to [`RingGeometry::position`].
    fn control_point(&self, angle: f64, sample: f64) -> Vec2 {
        let _ = sample;
        self.position(angle)
    }

    /// Scalar damping applied to the control-point radius. Defaults to `1`.
    fn contraction(&self, angle: f64, sample: f64) -> f64 {
        let _ = (angle, sample);
        1.0
    }
}

impl<T> RingGeometry for Box<T>
where
    T: RingGeometry + ?Sized,
{
    fn position(&self, angle: f64) -> Vec2 {
        (**self).position(angle)
    }

    fn control_point(&self, angle: f64, sample: f64) -> Vec2 {
        (**self).control_point(angle, sample)
    }

    fn contraction(&self, angle: f64, sample: f64) -> f64 {
        (**self).contraction(angle, sample)
    }
}

/// Plain circle: `(sin a, cos a)` for anchors and control points, no contraction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CircleGeometry;

impl RingGeometry for CircleGeometry {
    fn position(&self, angle: f64) -> Vec2 {
        Vec2::new(angle.sin(), angle.cos())
    }
}

/// Trigonometric basis of a [`Wave`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WaveKind {
    /// `sin`
    Sin,
    /// `cos`
    Cos,
}

/// One axis of a procedural ring: `amp * f(freq * angle + phase)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Wave {
    /// Basis function.
    pub kind: WaveKind,
    /// Angular frequency multiplier.
    #[serde(default = "one")]
    pub freq: f64,
    /// Phase offset in radians.
    #[serde(default)]
    pub phase: f64,
    /// Output scale.
    #[serde(default = "one")]
    pub amp: f64,
}

fn one() -> f64 {
    1.0
}

impl Wave {
    /// Unit-frequency wave with no phase offset.
    pub const fn unit(kind: WaveKind) -> Self {
        Self {
            kind,
            freq: 1.0,
            phase: 0.0,
            amp: 1.0,
        }
    }

    /// Reject non-finite parameters and out-of-range frequencies.
    pub fn validate(&self, axis: &str) -> BezringResult<()> {
        check_freq(&format!("{axis}.freq"), self.freq)?;
        check_param(&format!("{axis}.phase"), self.phase)?;
        check_param(&format!("{axis}.amp"), self.amp)
    }

    /// Evaluate at `angle`.
    pub fn eval(self, angle: f64) -> f64 {
        let x = self.freq * angle + self.phase;
        let v = match self.kind {
            WaveKind::Sin => x.sin(),
            WaveKind::Cos => x.cos(),
        };
        self.amp * v
    }
}

/// A pair of waves mapping an angle to a 2D offset.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WavePair {
    /// Horizontal component.
    pub x: Wave,
    /// Vertical component.
    pub y: Wave,
}

impl Default for WavePair {
    fn default() -> Self {
        Self {
            x: Wave::unit(WaveKind::Sin),
            y: Wave::unit(WaveKind::Cos),
        }
    }
}

impl WavePair {
    /// Validate both axes; `name` prefixes error messages.
    pub fn validate(&self, name: &str) -> BezringResult<()> {
        self.x.validate(&format!("{name}.x"))?;
        self.y.validate(&format!("{name}.y"))
    }

    /// Evaluate both axes at `angle`.
    pub fn eval(self, angle: f64) -> Vec2 {
        Vec2::new(self.x.eval(angle), self.y.eval(angle))
    }
}

/// Control-point radius damping.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "params")]
pub enum Contraction {
    /// Fixed scalar. `Constant(1.0)` leaves control points on the ring.
    Constant(f64),
    /// `offset + amp * noise(freq * angle, sample)` with noise in `[0, 1]`.
    ///
    /// Two different samples at the same angle usually disagree, which is what makes
    /// successive cycles move.
    Noise {
        /// Noise scale.
        amp: f64,
        /// Constant added after scaling.
        offset: f64,
        /// Angular frequency of the noise lookup.
        freq: f64,
        /// Noise lattice seed.
        seed: u64,
    },
}

impl Default for Contraction {
    fn default() -> Self {
        Self::Constant(1.0)
    }
}

impl Contraction {
    /// Reject parameters that would make the damping non-finite or alias the noise lattice.
    pub fn validate(&self) -> BezringResult<()> {
        match *self {
            Self::Constant(c) => check_param("contraction", c),
            Self::Noise {
                amp, offset, freq, ..
            } => {
                check_param("contraction.amp", amp)?;
                check_param("contraction.offset", offset)?;
                check_freq("contraction.freq", freq)
            }
        }
    }

    /// Evaluate the damping scalar.
    pub fn eval(self, angle: f64, sample: f64) -> f64 {
        match self {
            Self::Constant(c) => c,
            Self::Noise {
                amp,
                offset,
                freq,
                seed,
            } => offset + amp * value_noise(seed, freq * angle, sample),
        }
    }
}

/// Data-described geometry, loadable from JSON.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ProceduralGeometry {
    /// Anchor placement.
    pub position: WavePair,
    /// Control-point placement; falls back to `position` when absent.
    pub control: Option<WavePair>,
    /// Control-point damping.
    pub contraction: Contraction,
}

impl ProceduralGeometry {
    /// Circle whose control points breathe with value noise, the classic look.
    pub fn noisy_circle(seed: u64) -> Self {
        Self {
            contraction: Contraction::Noise {
                amp: 1.0,
                offset: 0.0,
                freq: 1.0,
                seed,
            },
            ..Self::default()
        }
    }

    /// Strict checks for geometry loaded from outside the process.
    pub fn validate(&self) -> BezringResult<()> {
        self.position.validate("position")?;
        if let Some(control) = &self.control {
            control.validate("control")?;
        }
        self.contraction.validate()
    }
}

impl RingGeometry for ProceduralGeometry {
    fn position(&self, angle: f64) -> Vec2 {
        self.position.eval(angle)
    }

    fn control_point(&self, angle: f64, _sample: f64) -> Vec2 {
        self.control.unwrap_or(self.position).eval(angle)
    }

    fn contraction(&self, angle: f64, sample: f64) -> f64 {
        self.contraction.eval(angle, sample)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/functions.rs"]
mod tests;
