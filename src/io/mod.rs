//! I/O layer for loading source images and writing indexed outputs.
//! Provides the `loader` built on the `image` decoders plus `writers`
//! for BMP/PNG outputs and the palette sidecar.
pub mod loader;
pub use loader::load_rgb_image;

pub mod writers;
