#![allow(clippy::unwrap_used, missing_docs)]
//! Benchmarks for the transform and the rasterizer.
//!
//! Run with `cargo bench --bench encode_bench`.

use chroma_core::grid::{BitGrid, Grid};
use chroma_core::palette::CHROMA_PALETTE;
use chroma_core::render::RenderConfig;
use chroma_core::{encoder, render};
use divan::Bencher;

fn main() {
    divan::main();
}

fn checker(size: usize) -> BitGrid {
    Grid::from_fn(size, size, |row, col| (row + col) % 2 == 0)
}

#[divan::bench(args = [10, 64, 512])]
fn bench_encode(bencher: Bencher, size: usize) {
    let grid = checker(size);
    bencher.bench_local(|| divan::black_box(encoder::encode(&grid)));
}

#[divan::bench]
fn bench_render_reference_scale(bencher: Bencher) {
    // One 10x10 tag at the default scale of 100: a 1000x1000 raster.
    let colors = encoder::apply_palette(&encoder::encode(&checker(10)), &CHROMA_PALETTE);
    let config = RenderConfig::default();
    bencher.bench_local(|| divan::black_box(render::render_colors(&colors, &config).unwrap()));
}

#[divan::bench]
fn bench_full_pipeline(bencher: Bencher) {
    let grid = checker(10);
    let config = RenderConfig::builder().scale(10).build();
    bencher.bench_local(|| {
        let img = chroma_core::chroma_image(&grid, &CHROMA_PALETTE, &config).unwrap();
        let colors = render::read_colors(&img, config.scale).unwrap();
        divan::black_box(encoder::decode_colors(&colors, &CHROMA_PALETTE).unwrap())
    });
}
