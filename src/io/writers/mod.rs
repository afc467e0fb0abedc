//! Output writers for palette-indexed images.
pub mod bmp;
pub mod png;
pub mod sidecar;
