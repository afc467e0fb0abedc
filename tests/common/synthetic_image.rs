use std::path::Path;

/// Generates an RGB image split into three flat vertical bands (red, green,
/// blue). Band boundaries sit at width/4 and 3*width/4 so they align with
/// the pixel grid whenever width is a multiple of the grid block size.
pub fn three_band_rgb(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = Vec::with_capacity(width * height * 3);
    for _ in 0..height {
        for x in 0..width {
            let color: [u8; 3] = if x < width / 4 {
                [255, 0, 0]
            } else if x < 3 * width / 4 {
                [0, 255, 0]
            } else {
                [0, 0, 255]
            };
            img.extend_from_slice(&color);
        }
    }
    img
}

/// Generates a smooth RGB gradient with far more distinct colors than any
/// reasonable palette budget.
pub fn gradient_rgb(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width.max(1)) as u8;
            let g = (y * 255 / height.max(1)) as u8;
            img.extend_from_slice(&[r, g, 128]);
        }
    }
    img
}

/// Saves a packed RGB buffer to `path` as a PNG for use as pipeline input.
pub fn save_rgb_png(path: &Path, width: usize, height: usize, data: &[u8]) {
    let img = image::RgbImage::from_raw(width as u32, height as u32, data.to_vec())
        .expect("buffer length must match dimensions");
    img.save(path).expect("failed to write test input");
}
