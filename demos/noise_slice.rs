//! Renders a z-slice of the scalar 3D noise to a grayscale PNG.
//!
//! Useful for eyeballing a table: sweep `-z` over a few values and the
//! slices should drift smoothly with no seams where the table tiles.

use std::time::Instant;

use bevy_math::Vec3;
use clap::Parser;
use texnoise::prelude::*;

/// Render one z-slice of scalar table noise
#[derive(Parser)]
#[clap(name = "noise_slice")]
struct Opts {
    /// Length of the sampled area's edges
    #[clap(short, default_value = "24.0")]
    scale: f32,
    /// Resolution of the output image
    #[clap(short, default_value = "512")]
    resolution: usize,
    /// The z plane to sample
    #[clap(short, default_value = "0.0")]
    z: f32,
    /// Seed for the table's bit source
    #[clap(short = 'e', default_value = "1")]
    seed: u32,
    /// Output path
    #[clap(short, default_value = "slice.png")]
    out: String,
}

fn main() {
    let opts = Opts::parse();
    let lattice = LatticeConfig::default();
    let table = generate(256, 256, opts.seed, TableLayout::Gray, &lattice).unwrap();
    let noise = TableNoise::new(table.as_table());

    let mut pixels = Vec::with_capacity(opts.resolution * opts.resolution);
    let step = opts.scale / opts.resolution as f32;
    let start = Instant::now();
    for y in 0..opts.resolution {
        for x in 0..opts.resolution {
            let loc = Vec3::new(x as f32 * step, y as f32 * step, opts.z);
            let value = noise.sample3_1d(loc);
            pixels.push((value * 255.0) as u8);
        }
    }
    println!(
        "sampled {} points in {:?} ({:?} per sample)",
        pixels.len(),
        start.elapsed(),
        start.elapsed() / pixels.len() as u32
    );

    println!("encoding...");
    lodepng::encode_file(
        &opts.out,
        &pixels,
        opts.resolution,
        opts.resolution,
        lodepng::ColorType::GREY,
        8,
    )
    .unwrap();
    println!("wrote {}", opts.out);
}
