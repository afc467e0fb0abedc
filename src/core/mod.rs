//! Core processing building blocks: nearest-neighbor resampling, palette
//! quantization, and the pixel-art pipeline that chains them. These are
//! internal primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
