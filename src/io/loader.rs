use std::path::Path;

use image::ImageReader;
use tracing::debug;

use crate::error::{Error, Result};

/// Load any supported raster format and normalize it to packed 8-bit RGB.
///
/// Alpha channels and higher bit depths are flattened by the conversion;
/// the pipeline only ever sees `width * height * 3` bytes. Returns
/// `(cols, rows, data)`.
pub fn load_rgb_image(path: &Path) -> Result<(usize, usize, Vec<u8>)> {
    let reader = ImageReader::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::InputNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::Io(e)
        }
    })?;

    let decoded = reader
        .with_guessed_format()
        .map_err(Error::Io)?
        .decode()
        .map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    let rgb = decoded.to_rgb8();
    let (cols, rows) = (rgb.width() as usize, rgb.height() as usize);
    debug!("Loaded {} ({}x{})", path.display(), cols, rows);

    Ok((cols, rows, rgb.into_raw()))
}
