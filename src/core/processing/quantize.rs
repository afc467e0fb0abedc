use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{IndexedImage, PaletteColor};

/// Reduce a packed RGB buffer to an adaptive palette of at most
/// `max_colors` entries and remap every pixel to its nearest entry.
///
/// The palette is chosen from the colors actually present; an image with
/// fewer distinct colors than `max_colors` yields a shorter palette rather
/// than padded entries. Dithering is disabled so each pixel maps straight
/// to one palette color and repeated runs produce identical output.
pub fn quantize_rgb(
    data: &[u8],
    cols: usize,
    rows: usize,
    max_colors: usize,
) -> Result<IndexedImage> {
    if max_colors == 0 || max_colors > 256 {
        return Err(Error::invalid_parameter("palette_colors", max_colors));
    }
    if data.len() != cols * rows * 3 {
        return Err(Error::Processing(format!(
            "RGB buffer length {} does not match {}x{}",
            data.len(),
            cols,
            rows
        )));
    }

    let bitmap: Vec<imagequant::RGBA> = data
        .chunks_exact(3)
        .map(|px| imagequant::RGBA {
            r: px[0],
            g: px[1],
            b: px[2],
            a: 255,
        })
        .collect();

    let mut liq = imagequant::new();
    liq.set_max_colors(max_colors as u32)?;

    let mut img = liq.new_image(&bitmap[..], cols, rows, 0.0)?;
    let mut res = liq.quantize(&mut img)?;

    // Plain nearest-color remap, no error diffusion
    res.set_dithering_level(0.0)?;
    let (palette, indices) = res.remapped(&mut img)?;

    debug!(
        "Quantized {}x{} to {} palette entries",
        cols,
        rows,
        palette.len()
    );

    let palette = palette
        .iter()
        .map(|c| PaletteColor::from([c.r, c.g, c.b]))
        .collect();

    Ok(IndexedImage::new(cols, rows, palette, indices))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_color_rgb(cols: usize, rows: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(cols * rows * 3);
        for y in 0..rows {
            for _ in 0..cols {
                if y < rows / 2 {
                    data.extend_from_slice(&[255, 0, 0]);
                } else {
                    data.extend_from_slice(&[0, 0, 255]);
                }
            }
        }
        data
    }

    #[test]
    fn palette_never_exceeds_max_colors() {
        // Gradient with far more than 8 distinct colors
        let mut data = Vec::new();
        for y in 0..32u32 {
            for x in 0..32u32 {
                data.extend_from_slice(&[(x * 8) as u8, (y * 8) as u8, 128]);
            }
        }
        let img = quantize_rgb(&data, 32, 32, 8).unwrap();
        assert!(img.palette.len() <= 8);
        assert_eq!(img.indices.len(), 32 * 32);
    }

    #[test]
    fn two_color_image_keeps_both_colors_exactly() {
        let data = two_color_rgb(16, 16);
        let img = quantize_rgb(&data, 16, 16, 16).unwrap();
        assert_eq!(img.palette.len(), 2);
        assert_eq!(img.to_rgb(), data);
    }

    #[test]
    fn indices_stay_within_palette() {
        let data = two_color_rgb(8, 8);
        let img = quantize_rgb(&data, 8, 8, 4).unwrap();
        let len = img.palette.len() as u8;
        assert!(img.indices.iter().all(|&i| i < len));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let data = two_color_rgb(24, 24);
        let a = quantize_rgb(&data, 24, 24, 16).unwrap();
        let b = quantize_rgb(&data, 24, 24, 16).unwrap();
        assert_eq!(a.palette, b.palette);
        assert_eq!(a.indices, b.indices);
    }

    #[test]
    fn zero_and_oversized_color_counts_are_rejected() {
        let data = two_color_rgb(4, 4);
        assert!(quantize_rgb(&data, 4, 4, 0).is_err());
        assert!(quantize_rgb(&data, 4, 4, 257).is_err());
    }

    #[test]
    fn single_color_budget_flattens_image() {
        let data = two_color_rgb(8, 8);
        let img = quantize_rgb(&data, 8, 8, 1).unwrap();
        assert_eq!(img.palette.len(), 1);
        assert!(img.indices.iter().all(|&i| i == 0));
    }

    #[test]
    fn mismatched_buffer_length_is_rejected() {
        let data = vec![0u8; 10];
        assert!(matches!(
            quantize_rgb(&data, 4, 4, 16),
            Err(Error::Processing(_))
        ));
    }
}
