/// CPU raster host built on `vello_cpu`.
pub mod cpu;
/// Read-only traversal from vertices to drawing commands.
pub mod projection;
