use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::IndexedImage;

fn map_encoding_error(path: &Path, e: png::EncodingError) -> Error {
    match e {
        png::EncodingError::IoError(source) => Error::WriteFailure {
            path: path.to_path_buf(),
            source,
        },
        other => Error::external(other),
    }
}

/// Write the indexed image as an 8-bit paletted PNG.
///
/// Carries the same palette and indices as the BMP writer, so the two
/// formats decode to identical pixels.
pub fn write_indexed_png(output: &Path, image: &IndexedImage) -> Result<()> {
    let file = File::create(output).map_err(|source| Error::WriteFailure {
        path: output.to_path_buf(),
        source,
    })?;
    let w = BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, image.width as u32, image.height as u32);
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Eight);

    let mut plte = Vec::with_capacity(image.palette.len() * 3);
    for color in &image.palette {
        plte.extend_from_slice(&[color.r, color.g, color.b]);
    }
    encoder.set_palette(plte);

    let mut writer = encoder
        .write_header()
        .map_err(|e| map_encoding_error(output, e))?;
    writer
        .write_image_data(&image.indices)
        .map_err(|e| map_encoding_error(output, e))?;
    writer
        .finish()
        .map_err(|e| map_encoding_error(output, e))?;

    debug!(
        "Wrote PNG {} ({}x{}, {} palette entries)",
        output.display(),
        image.width,
        image.height,
        image.palette.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaletteColor;

    #[test]
    fn indexed_png_round_trips_through_decoder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let palette = vec![PaletteColor::new(10, 20, 30), PaletteColor::new(240, 5, 0)];
        let img = IndexedImage::new(2, 2, palette, vec![0, 1, 1, 0]);
        write_indexed_png(&path, &img).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.into_raw(), img.to_rgb());
    }

    #[test]
    fn unwritable_destination_maps_to_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.png");
        let img = IndexedImage::new(1, 1, vec![PaletteColor::new(0, 0, 0)], vec![0]);
        assert!(matches!(
            write_indexed_png(&path, &img),
            Err(Error::WriteFailure { .. })
        ));
    }
}
