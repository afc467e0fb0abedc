use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

use dotpix::api::{
    default_output_path, dotted_file_name, is_supported_image, process_image_to_path,
};
use dotpix::core::params::PixelArtParams;
use dotpix::io::writers::sidecar::write_palette_sidecar;

use super::args::CliArgs;
use super::errors::AppError;

fn process_single_file(
    input: &PathBuf,
    output: &PathBuf,
    params: &PixelArtParams,
    palette_sidecar: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let image = process_image_to_path(input, output, params)?;

    info!(
        "Quantized {}x{} to {} palette entries",
        image.width,
        image.height,
        image.palette.len()
    );

    if palette_sidecar {
        write_palette_sidecar(output, &image, params)?;
    }

    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let params = PixelArtParams {
        format: args.format,
        dot_size: args.dot_size,
        palette_colors: args.colors,
    };

    let batch_mode = args.batch || args.input_dir.is_some();

    if batch_mode {
        let input_dir = args.input_dir.ok_or(AppError::MissingArgument {
            arg: "--input-dir".to_string(),
        })?;
        let output_dir = args.output_dir.ok_or(AppError::MissingArgument {
            arg: "--output-dir".to_string(),
        })?;

        fs::create_dir_all(&output_dir)?;

        info!("Starting batch processing from directory: {:?}", input_dir);
        info!("Output directory: {:?}", output_dir);

        let mut processed = 0;
        let mut skipped = 0;
        let mut errors = 0;

        for entry in fs::read_dir(&input_dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && is_supported_image(&path) {
                let output_path = output_dir.join(dotted_file_name(&path, args.format));

                info!("Processing: {:?} -> {:?}", path, output_path);

                match process_single_file(&path, &output_path, &params, args.palette_sidecar) {
                    Ok(()) => {
                        info!("Successfully processed: {:?}\n", path);
                        processed += 1;
                    }
                    Err(e) => {
                        if !args.batch {
                            return Err(e);
                        }
                        warn!("Error processing {:?}: {}", path, e);
                        errors += 1;
                    }
                }
            } else {
                info!("Skipping non-image entry: {:?}", path);
                skipped += 1;
            }
        }

        info!("Batch processing complete!");
        info!("Processed: {}", processed);
        info!("Skipped: {}", skipped);
        info!("Errors: {}", errors);

        println!(
            "Batch complete: {} processed, {} skipped, {} errors",
            processed, skipped, errors
        );
    } else {
        let input = args.input.ok_or(AppError::MissingArgument {
            arg: "--input".to_string(),
        })?;
        let output = args
            .output
            .unwrap_or_else(|| default_output_path(&input, args.format));

        process_single_file(&input, &output, &params, args.palette_sidecar)?;
        info!("Successfully processed: {:?} -> {:?}\n", input, output);

        println!("Saved pixel art image: {}", output.display());
    }

    Ok(())
}
