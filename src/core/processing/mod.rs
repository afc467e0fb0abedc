//! Processing primitives: nearest-neighbor resampling, adaptive palette
//! quantization, and the end-to-end pixelation pipeline.
pub mod pipeline;
pub mod quantize;
pub mod resample;
