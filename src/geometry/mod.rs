/// Angle-to-offset functions that shape the ring.
pub mod functions;
/// Explicit randomness fed into control-point placement.
pub mod sample;
