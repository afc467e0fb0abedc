use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::core::params::PixelArtParams;
use crate::error::{Error, Result};
use crate::types::IndexedImage;

#[derive(Debug, Serialize)]
struct PaletteEntry {
    hex: String,
    rgb: [u8; 3],
}

/// Sidecar payload describing the palette an output was written with.
#[derive(Debug, Serialize)]
struct PaletteSidecar {
    width: usize,
    height: usize,
    dot_size: usize,
    palette: Vec<PaletteEntry>,
}

/// Create a sidecar palette file next to the output image.
///
/// The sidecar shares the output's path with a `.json` extension and lists
/// every palette entry in index order. Returns the sidecar path.
pub fn write_palette_sidecar(
    output_path: &Path,
    image: &IndexedImage,
    params: &PixelArtParams,
) -> Result<PathBuf> {
    let payload = PaletteSidecar {
        width: image.width,
        height: image.height,
        dot_size: params.dot_size,
        palette: image
            .palette
            .iter()
            .map(|c| PaletteEntry {
                hex: c.to_hex(),
                rgb: [c.r, c.g, c.b],
            })
            .collect(),
    };

    let sidecar_path = output_path.with_extension("json");
    let json_string = serde_json::to_string_pretty(&payload).map_err(Error::external)?;
    std::fs::write(&sidecar_path, json_string).map_err(|source| Error::WriteFailure {
        path: sidecar_path.clone(),
        source,
    })?;

    info!("Created palette sidecar: {:?}", sidecar_path);
    Ok(sidecar_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaletteColor;

    #[test]
    fn sidecar_lists_palette_in_index_order() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("art.bmp");
        let image = IndexedImage::new(
            2,
            1,
            vec![PaletteColor::new(255, 0, 0), PaletteColor::new(0, 0, 255)],
            vec![0, 1],
        );
        let params = PixelArtParams::default();

        let sidecar = write_palette_sidecar(&output, &image, &params).unwrap();
        assert_eq!(sidecar, dir.path().join("art.json"));

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&sidecar).unwrap()).unwrap();
        assert_eq!(value["width"], 2);
        assert_eq!(value["height"], 1);
        assert_eq!(value["dot_size"], 64);
        assert_eq!(value["palette"][0]["hex"], "#ff0000");
        assert_eq!(value["palette"][1]["hex"], "#0000ff");
        assert_eq!(value["palette"][1]["rgb"][2], 255);
    }
}
