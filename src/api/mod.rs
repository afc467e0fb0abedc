//! High-level, ergonomic library API: process images to files or in-memory
//! indexed buffers, batch helpers for directories, and typed save helpers.
//! Prefer these entrypoints over the low-level processing modules when
//! integrating dotpix.
use std::path::{Path, PathBuf};

use crate::core::params::PixelArtParams;
use crate::core::processing::pipeline::pixelate_rgb;
use crate::error::{Error, Result};
use crate::io::loader::load_rgb_image;
use crate::io::writers::bmp::write_indexed_bmp;
use crate::io::writers::png::write_indexed_png;
use crate::types::{IndexedImage, OutputFormat};

/// Extensions the loader accepts during directory scans. Single-file mode
/// ignores this list and lets the decoder decide.
pub const SUPPORTED_EXTENSIONS: &[&str] =
    &["png", "jpg", "jpeg", "bmp", "gif", "webp", "tif", "tiff"];

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// File name an output gets when the caller does not pick one:
/// `<input stem>_dot.<format extension>`.
pub fn dotted_file_name(input: &Path, format: OutputFormat) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    format!("{}_dot.{}", stem, format.extension())
}

/// Default output path: next to the input, with the derived name.
pub fn default_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    input.with_file_name(dotted_file_name(input, format))
}

/// Process an image to an in-memory indexed buffer (no output I/O)
pub fn process_image_to_buffer(input: &Path, params: &PixelArtParams) -> Result<IndexedImage> {
    params.validate()?;
    let (cols, rows, data) = load_rgb_image(input)?;
    pixelate_rgb(&data, cols, rows, params)
}

/// Typed save helper dispatching on the output format
pub fn save_indexed_image(output: &Path, image: &IndexedImage, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Bmp => write_indexed_bmp(output, image),
        OutputFormat::Png => write_indexed_png(output, image),
    }
}

/// Process an image to an output path using PixelArtParams.
///
/// Parameters are validated before the input is opened, so an invalid
/// combination never leaves a partial output behind. Returns the indexed
/// image that was written.
pub fn process_image_to_path(
    input: &Path,
    output: &Path,
    params: &PixelArtParams,
) -> Result<IndexedImage> {
    let image = process_image_to_buffer(input, params)?;
    save_indexed_image(output, &image, params.format)?;
    Ok(image)
}

/// Batch processing report
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Return an iterator over regular files directly inside `input_dir`
/// (candidate images), in name order
pub fn iterate_images(input_dir: &Path) -> Result<std::vec::IntoIter<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(input_dir).map_err(Error::from)? {
        let entry = entry.map_err(Error::from)?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files.into_iter())
}

/// Process every supported image from `input_dir` into `output_dir` using `params`.
/// If `continue_on_error` is true, errors are counted in the report and processing
/// continues; otherwise, the first error is returned.
pub fn process_directory_to_path(
    input_dir: &Path,
    output_dir: &Path,
    params: &PixelArtParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    params.validate()?;
    std::fs::create_dir_all(output_dir).map_err(Error::from)?;

    let mut report = BatchReport::default();

    let mut iter = iterate_images(input_dir)?;
    while let Some(path) = iter.next() {
        if !is_supported_image(&path) {
            report.skipped += 1;
            continue;
        }

        let output_path = output_dir.join(dotted_file_name(&path, params.format));
        match process_image_to_path(&path, &output_path, params) {
            Ok(_) => report.processed += 1,
            Err(e) => {
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
            }
        }
    }

    Ok(report)
}
