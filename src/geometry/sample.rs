/// Source of the random draws that perturb control-point placement.
///
/// The vertex factory asks for exactly one draw per control-point evaluation, so a freshly
/// built vertex consumes two draws (origin and target) and a reroll consumes one.
/// Any `FnMut() -> f64` closure is a sample source.
pub trait SampleSource {
    /// Produce the next draw. Geometry functions treat it as an opaque noise coordinate.
    fn next_sample(&mut self) -> f64;
}

impl<F> SampleSource for F
where
    F: FnMut() -> f64,
{
    fn next_sample(&mut self) -> f64 {
        self()
    }
}

/// Small deterministic PRNG (SplitMix64).
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Seeded generator; equal seeds yield equal streams.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }
}

/// Upper bound (exclusive) of [`SeededSampler`] draws.
pub const SAMPLE_SPAN: f64 = 1024.0;

/// Seeded sampler drawing uniformly from `[0, SAMPLE_SPAN)`.
#[derive(Clone, Copy, Debug)]
pub struct SeededSampler {
    rng: Rng64,
}

impl SeededSampler {
    /// Sampler whose whole draw sequence is fixed by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Rng64::new(seed),
        }
    }
}

impl SampleSource for SeededSampler {
    fn next_sample(&mut self) -> f64 {
        self.rng.next_f64_01() * SAMPLE_SPAN
    }
}

/// Sampler that always returns the same draw; makes stochastic geometry deterministic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedSampler(pub f64);

impl SampleSource for FixedSampler {
    fn next_sample(&mut self) -> f64 {
        self.0
    }
}

fn lattice01(seed: u64, ix: i64, iy: i64) -> f64 {
    let key = (ix as u64).wrapping_mul(0xD6E8_FEB8_6659_FD93)
        ^ (iy as u64).wrapping_mul(0xA076_1D64_78BD_642F);
    Rng64::new(seed ^ key).next_f64_01()
}

fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Smooth 2D value noise in `[0, 1]`, continuous in both coordinates.
pub fn value_noise(seed: u64, x: f64, y: f64) -> f64 {
    if !x.is_finite() || !y.is_finite() {
        return 0.0;
    }
    let x0 = x.floor();
    let y0 = y.floor();
    let tx = smoothstep(x - x0);
    let ty = smoothstep(y - y0);
    let (ix, iy) = (x0 as i64, y0 as i64);

    let (ix1, iy1) = (ix.wrapping_add(1), iy.wrapping_add(1));

    let a = lattice01(seed, ix, iy);
    let b = lattice01(seed, ix1, iy);
    let c = lattice01(seed, ix, iy1);
    let d = lattice01(seed, ix1, iy1);

    let top = a + (b - a) * tx;
    let bottom = c + (d - c) * tx;
    top + (bottom - top) * ty
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/sample.rs"]
mod tests;
