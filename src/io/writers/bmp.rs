use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::IndexedImage;

const FILE_HEADER_SIZE: usize = 14;
const INFO_HEADER_SIZE: usize = 40;

fn write_failure(path: &Path, source: std::io::Error) -> Error {
    Error::WriteFailure {
        path: path.to_path_buf(),
        source,
    }
}

/// Row stride in bytes: one index per pixel, padded to a 4-byte boundary.
fn row_size(cols: usize) -> usize {
    (cols + 3) & !3
}

/// Write an uncompressed 8-bit palette-indexed BMP (BITMAPINFOHEADER).
///
/// The color table carries exactly `palette.len()` BGRA entries and
/// `biClrUsed` says so; rows are stored bottom-up as BMP requires. Pixel
/// data stays uncompressed (`BI_RGB`) whatever the palette size.
pub fn write_indexed_bmp(output: &Path, image: &IndexedImage) -> Result<()> {
    let IndexedImage {
        width: cols,
        height: rows,
        ..
    } = *image;
    let palette_bytes = image.palette.len() * 4;
    let data_offset = FILE_HEADER_SIZE + INFO_HEADER_SIZE + palette_bytes;
    let image_size = row_size(cols) * rows;
    let file_size = data_offset + image_size;

    let mut header = Vec::with_capacity(data_offset);
    // BITMAPFILEHEADER
    header.extend_from_slice(b"BM");
    header.extend_from_slice(&(file_size as u32).to_le_bytes());
    header.extend_from_slice(&0u32.to_le_bytes()); // reserved
    header.extend_from_slice(&(data_offset as u32).to_le_bytes());
    // BITMAPINFOHEADER
    header.extend_from_slice(&(INFO_HEADER_SIZE as u32).to_le_bytes());
    header.extend_from_slice(&(cols as i32).to_le_bytes());
    // positive height means bottom-up row order
    header.extend_from_slice(&(rows as i32).to_le_bytes());
    header.extend_from_slice(&1u16.to_le_bytes()); // planes
    header.extend_from_slice(&8u16.to_le_bytes()); // bits per pixel
    header.extend_from_slice(&0u32.to_le_bytes()); // BI_RGB, no compression
    header.extend_from_slice(&(image_size as u32).to_le_bytes());
    header.extend_from_slice(&0i32.to_le_bytes()); // x pixels per meter
    header.extend_from_slice(&0i32.to_le_bytes()); // y pixels per meter
    header.extend_from_slice(&(image.palette.len() as u32).to_le_bytes());
    header.extend_from_slice(&0u32.to_le_bytes()); // all colors important
    // Color table, BGRA order
    for color in &image.palette {
        header.extend_from_slice(&[color.b, color.g, color.r, 0]);
    }

    let file = File::create(output).map_err(|e| write_failure(output, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&header)
        .map_err(|e| write_failure(output, e))?;

    let padding = vec![0u8; row_size(cols) - cols];
    for row in image.indices.chunks_exact(cols).rev() {
        writer.write_all(row).map_err(|e| write_failure(output, e))?;
        if !padding.is_empty() {
            writer
                .write_all(&padding)
                .map_err(|e| write_failure(output, e))?;
        }
    }
    writer.flush().map_err(|e| write_failure(output, e))?;

    debug!(
        "Wrote BMP {} ({}x{}, {} palette entries, {} bytes)",
        output.display(),
        cols,
        rows,
        image.palette.len(),
        file_size
    );
    Ok(())
}
