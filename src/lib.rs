#![doc = r#"
dotpix — a pixel-art converter for outline maps and illustrations.

This crate turns ordinary raster images into blocky, palette-indexed pixel art:
the input is collapsed onto a coarse grid with nearest-neighbor sampling,
expanded back to its original dimensions, reduced to a small adaptive palette,
and written as an uncompressed indexed BMP (or PNG). It powers the dotpix CLI
and can be embedded in your own Rust applications.

Stability
---------
The public library API is experimental in initial releases. It is built on top
of a working MVP used by the CLI and is robust, but may evolve as the crate
stabilizes. Breaking changes can occur.

Requirements
------------
- Pure Rust; no system libraries needed.
- Rust 2024 edition toolchain.

Add dependency
--------------
```toml
[dependencies]
dotpix = "0.1"
```

Quick start: process an image to a file
---------------------------------------
```rust,no_run
use std::path::Path;
use dotpix::{process_image_to_path, OutputFormat, PixelArtParams};

fn main() -> dotpix::Result<()> {
    let params = PixelArtParams {
        format: OutputFormat::Bmp,
        dot_size: 64,
        palette_colors: 16,
    };

    process_image_to_path(
        Path::new("assets/map/china_outline.png"),
        Path::new("assets/map/china_outline_dot.bmp"),
        &params,
    )?;
    Ok(())
}
```

Process in-memory to `IndexedImage`
-----------------------------------
```rust,no_run
use std::path::Path;
use dotpix::{process_image_to_buffer, PixelArtParams};

fn main() -> dotpix::Result<()> {
    let img = process_image_to_buffer(Path::new("photo.jpg"), &PixelArtParams::default())?;

    // Use the palette and per-pixel indices directly, or expand back to RGB.
    println!("{} palette entries", img.palette.len());
    let _rgb = img.to_rgb();
    Ok(())
}
```

Typed save helpers (when you already have an indexed image)
-----------------------------------------------------------
```rust
use std::path::Path;
use dotpix::{save_indexed_image, IndexedImage, OutputFormat};

fn save_both(img: &IndexedImage) -> dotpix::Result<()> {
    save_indexed_image(Path::new("out.bmp"), img, OutputFormat::Bmp)?;
    save_indexed_image(Path::new("out.png"), img, OutputFormat::Png)
}
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use dotpix::{process_directory_to_path, PixelArtParams};

fn main() -> dotpix::Result<()> {
    let report = process_directory_to_path(
        Path::new("maps"),
        Path::new("out"),
        &PixelArtParams::default(),
        true, // continue_on_error
    )?;

    println!(
        "processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(())
}
```

Error handling
--------------
All public functions return `dotpix::Result<T>`; match on `dotpix::Error` to
handle specific cases, e.g. a missing input or an undecodable file.

```rust,no_run
use std::path::Path;
use dotpix::{process_image_to_path, Error, PixelArtParams};

fn main() {
    let params = PixelArtParams::default();
    match process_image_to_path(Path::new("missing.png"), Path::new("out.bmp"), &params) {
        Ok(_) => {}
        Err(Error::InputNotFound { path }) => eprintln!("No such input: {}", path.display()),
        Err(Error::Decode { path, .. }) => eprintln!("Cannot decode: {}", path.display()),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — enums and core types (e.g. `OutputFormat`, `IndexedImage`).
- [`io`] — image loader and BMP/PNG/sidecar writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::params::{DEFAULT_DOT_SIZE, DEFAULT_PALETTE_COLORS, PixelArtParams};
pub use error::{Error, Result};
pub use types::{IndexedImage, OutputFormat, PaletteColor};

// Loader
pub use io::loader::load_rgb_image;

// Selected writer helpers (keep low-level writers public)
pub use io::writers::bmp::write_indexed_bmp;
pub use io::writers::png::write_indexed_png;
pub use io::writers::sidecar::write_palette_sidecar;

// High-level API re-exports
pub use api::{
    BatchReport, default_output_path, dotted_file_name, is_supported_image, iterate_images,
    process_directory_to_path, process_image_to_buffer, process_image_to_path, save_indexed_image,
};
