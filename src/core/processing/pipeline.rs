use tracing::info;

use crate::core::params::PixelArtParams;
use crate::core::processing::quantize::quantize_rgb;
use crate::core::processing::resample::{downscale_to_grid, expand_from_grid};
use crate::error::{Error, Result};
use crate::types::IndexedImage;

/// Run the full pixelation pipeline over a packed RGB buffer.
///
/// Collapses the image onto the `dot_size` grid, expands it back to the
/// original dimensions, then reduces it to an adaptive palette. The result
/// always has the source dimensions; only the grid step changes geometry
/// and it is undone before quantization.
pub fn pixelate_rgb(
    data: &[u8],
    cols: usize,
    rows: usize,
    params: &PixelArtParams,
) -> Result<IndexedImage> {
    if params.dot_size == 0 {
        return Err(Error::invalid_parameter("dot_size", params.dot_size));
    }
    if data.len() != cols * rows * 3 {
        return Err(Error::Processing(format!(
            "RGB buffer length {} does not match {}x{}",
            data.len(),
            cols,
            rows
        )));
    }

    info!(
        "Pixelating {}x{} (dot_size={}, colors={})",
        cols, rows, params.dot_size, params.palette_colors
    );

    let grid = downscale_to_grid(data, cols, rows, params.dot_size).map_err(Error::external)?;
    let expanded =
        expand_from_grid(&grid, params.dot_size, cols, rows).map_err(Error::external)?;

    quantize_rgb(&expanded, cols, rows, params.palette_colors)
}
