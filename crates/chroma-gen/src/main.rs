//! Reference generation harness.
//!
//! Renders the fixed sequence of test patterns (two toy matrices plus the
//! 36h11 samples) as a monochrome tag in the input directory and a
//! ChromaTag in the output directory, then verifies each ChromaTag raster
//! decodes back to its own encoding.

use std::fs;
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser;

use chroma_core::dictionaries::TAG36H11_SAMPLES;
use chroma_core::grid::BitGrid;
use chroma_core::palette::CHROMA_PALETTE;
use chroma_core::render::{self, RenderConfig, DEFAULT_SCALE};
use chroma_core::{april_image, chroma_image, encoder};
use image::RgbImage;

#[derive(Parser, Debug)]
#[command(name = "chroma-gen")]
#[command(about = "Render ChromaTag images for the reference test patterns", long_about = None)]
struct Args {
    /// Pixels per matrix cell in the rendered images
    #[arg(short, long, default_value_t = DEFAULT_SCALE)]
    scale: u32,

    /// Directory for the monochrome reference tags
    #[arg(long, default_value = "input")]
    input_dir: PathBuf,

    /// Directory for the color-encoded tags
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = RenderConfig::builder().scale(args.scale).build();

    fs::create_dir_all(&args.input_dir)
        .with_context(|| format!("creating {}", args.input_dir.display()))?;
    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("creating {}", args.output_dir.display()))?;

    let mut fixtures: Vec<(&str, BitGrid)> = vec![
        ("test-1", BitGrid::from_bits(&[[1u8, 0], [0, 1]])?),
        (
            "test-2",
            BitGrid::from_bits(&[[0u8, 1, 1], [1, 1, 1], [0, 1, 0]])?,
        ),
    ];
    for tag in &TAG36H11_SAMPLES {
        fixtures.push((tag.name, tag.grid()));
    }

    for (name, grid) in &fixtures {
        run_test(name, grid, &config, &args)?;
    }

    println!("Rendered {} tag pairs at scale {}.", fixtures.len(), args.scale);
    Ok(())
}

fn run_test(name: &str, grid: &BitGrid, config: &RenderConfig, args: &Args) -> Result<()> {
    println!("-- {name} --");
    print!("{grid}");

    let april = april_image(grid, config)?;
    save(april, &args.input_dir.join(format!("{name}-april.png")))?;

    let pairs = encoder::encode(grid);
    let chroma = chroma_image(grid, &CHROMA_PALETTE, config)?;

    // Reverse path: sample the raster back and decode it against the
    // palette; it must reproduce the encoding exactly.
    let read_back = render::read_colors(&chroma, config.scale)?;
    let decoded = encoder::decode_colors(&read_back, &CHROMA_PALETTE)?;
    ensure!(decoded == pairs, "round-trip mismatch for {name}");

    save(chroma, &args.output_dir.join(format!("{name}-chroma.png")))?;
    println!("round-trip OK");
    Ok(())
}

fn save(img: RgbImage, path: &std::path::Path) -> Result<()> {
    img.save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}
