use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::OutputFormat;

/// Side length of the intermediate pixel grid when none is given.
pub const DEFAULT_DOT_SIZE: usize = 64;
/// Palette size cap when none is given.
pub const DEFAULT_PALETTE_COLORS: usize = 16;

/// Processing parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PixelArtParams {
    pub format: OutputFormat,
    /// Side length of the intermediate grid; pixels of the result appear as
    /// blocks roughly `original_side / dot_size` wide
    pub dot_size: usize,
    /// Upper bound on palette entries in the output, 1..=256
    pub palette_colors: usize,
}

impl Default for PixelArtParams {
    fn default() -> Self {
        Self {
            format: OutputFormat::Bmp,
            dot_size: DEFAULT_DOT_SIZE,
            palette_colors: DEFAULT_PALETTE_COLORS,
        }
    }
}

impl PixelArtParams {
    /// Reject parameter combinations before any file is opened or written.
    pub fn validate(&self) -> Result<()> {
        if self.dot_size == 0 {
            return Err(Error::invalid_parameter("dot_size", self.dot_size));
        }
        if self.palette_colors == 0 || self.palette_colors > 256 {
            return Err(Error::invalid_parameter(
                "palette_colors",
                self.palette_colors,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let params = PixelArtParams::default();
        assert_eq!(params.dot_size, 64);
        assert_eq!(params.palette_colors, 16);
        assert_eq!(params.format, OutputFormat::Bmp);
    }

    #[test]
    fn zero_dot_size_is_rejected() {
        let params = PixelArtParams {
            dot_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(Error::InvalidParameter { name: "dot_size", .. })
        ));
    }

    #[test]
    fn palette_colors_bounds_are_enforced() {
        for bad in [0usize, 257, 1000] {
            let params = PixelArtParams {
                palette_colors: bad,
                ..Default::default()
            };
            assert!(params.validate().is_err(), "palette_colors={bad}");
        }
        for good in [1usize, 16, 256] {
            let params = PixelArtParams {
                palette_colors: good,
                ..Default::default()
            };
            assert!(params.validate().is_ok(), "palette_colors={good}");
        }
    }
}
