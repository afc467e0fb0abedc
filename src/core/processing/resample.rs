use fast_image_resize::{PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use tracing::debug;

/// Resize a packed RGB buffer with nearest-neighbor sampling.
///
/// Every destination pixel is a copy of exactly one source pixel; no
/// blending or filtering is applied at any scale factor.
pub fn resize_rgb_nearest(
    data: &[u8],
    original_cols: usize,
    original_rows: usize,
    target_cols: usize,
    target_rows: usize,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    // If already at the requested dimensions, skip resizing
    if original_cols == target_cols && original_rows == target_rows {
        return Ok(data.to_vec());
    }

    let resize_options = ResizeOptions::new().resize_alg(ResizeAlg::Nearest);
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_cols as u32,
        original_rows as u32,
        data.to_vec(),
        PixelType::U8x3,
    )?;
    let mut dst_image = Image::new(target_cols as u32, target_rows as u32, PixelType::U8x3);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    Ok(dst_image.into_vec())
}

/// Collapse an image onto the square `dot_size` x `dot_size` grid.
///
/// The grid is square regardless of the source aspect ratio; the distortion
/// is undone when the grid is expanded back to the original dimensions.
/// A `dot_size` larger than the source is allowed and upsamples.
pub fn downscale_to_grid(
    data: &[u8],
    original_cols: usize,
    original_rows: usize,
    dot_size: usize,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    debug!(
        "Downscaling {}x{} to {}x{} grid",
        original_cols, original_rows, dot_size, dot_size
    );
    resize_rgb_nearest(data, original_cols, original_rows, dot_size, dot_size)
}

/// Blow a `dot_size` x `dot_size` grid back up to the original dimensions.
///
/// Each grid cell becomes a block of identical pixels roughly
/// `original_cols / dot_size` wide, which is what produces the visible dots.
pub fn expand_from_grid(
    grid: &[u8],
    dot_size: usize,
    original_cols: usize,
    original_rows: usize,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    debug!(
        "Expanding {}x{} grid to {}x{}",
        dot_size, dot_size, original_cols, original_rows
    );
    resize_rgb_nearest(grid, dot_size, dot_size, original_cols, original_rows)
}
