//! Shared types and enums used across dotpix.
//! Includes `OutputFormat`, `PaletteColor`, and the palette-indexed
//! image produced by the processing pipeline (`IndexedImage`).
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Bmp,
    Png,
}

impl OutputFormat {
    /// File extension used when deriving output paths for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Bmp => "bmp",
            OutputFormat::Png => "png",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Bmp => write!(f, "bmp"),
            OutputFormat::Png => write!(f, "png"),
        }
    }
}

/// One opaque palette entry. Alpha is dropped on load, so entries are RGB only.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PaletteColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PaletteColor {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form used by the palette sidecar.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for PaletteColor {
    fn from(rgb: [u8; 3]) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
        }
    }
}

/// Final product of the pipeline: a palette plus one index per pixel.
///
/// `indices` is row-major, top-to-bottom, `width * height` entries long.
/// Every index is a valid position into `palette`; the quantizer guarantees
/// this and the writers rely on it.
#[derive(Clone, Debug)]
pub struct IndexedImage {
    pub width: usize,
    pub height: usize,
    pub palette: Vec<PaletteColor>,
    pub indices: Vec<u8>,
}

impl IndexedImage {
    pub fn new(width: usize, height: usize, palette: Vec<PaletteColor>, indices: Vec<u8>) -> Self {
        debug_assert_eq!(indices.len(), width * height);
        debug_assert!(palette.len() <= 256);
        Self {
            width,
            height,
            palette,
            indices,
        }
    }

    /// Expand back to a packed RGB buffer by looking each index up in the palette.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.width * self.height * 3);
        for &idx in &self.indices {
            let color = self.palette[idx as usize];
            rgb.push(color.r);
            rgb.push(color.g);
            rgb.push(color.b);
        }
        rgb
    }
}
