/// Easing curves mapping normalized progress to eased progress.
pub mod ease;
/// Per-control-point tween state and interpolation.
pub mod tween;
