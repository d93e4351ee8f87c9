//! Generates a tileable noise lookup table and writes it out as a PNG.
//!
//! The PNG is a byte container here, not an image to look at: the texels
//! are linear values and must be uploaded with color-space conversion
//! disabled, or the channel equalities the scalar entry points rely on are
//! destroyed by the gamma decode.

use std::time::Instant;

use clap::Parser;
use texnoise::prelude::*;

/// Generate a tileable noise lookup table
#[derive(Parser)]
#[clap(name = "gen_table")]
struct Opts {
    /// Edge length of the (square) table in texels
    #[clap(short, default_value = "256")]
    size: u32,
    /// Seed for the bit source
    #[clap(short = 'e', default_value = "1")]
    seed: u32,
    /// Channel layout: rgba, gray or pair
    #[clap(short, default_value = "gray")]
    layout: String,
    /// Output path
    #[clap(short, default_value = "noise_table.png")]
    out: String,
}

fn main() {
    let opts = Opts::parse();
    let layout = match opts.layout.as_str() {
        "rgba" => TableLayout::Rgba,
        "gray" => TableLayout::Gray,
        "pair" => TableLayout::Pair,
        other => {
            eprintln!("unknown layout `{other}` (expected rgba, gray or pair)");
            std::process::exit(1);
        }
    };

    let lattice = LatticeConfig::default();
    let start = Instant::now();
    let table = generate(opts.size, opts.size, opts.seed, layout, &lattice).unwrap();
    verify(table.as_table(), layout, &lattice).unwrap();
    println!(
        "generated and verified a {}x{} {} table in {:?}",
        opts.size,
        opts.size,
        opts.layout,
        start.elapsed()
    );

    println!("encoding...");
    lodepng::encode_file(
        &opts.out,
        table.texels(),
        opts.size as usize,
        opts.size as usize,
        lodepng::ColorType::RGBA,
        8,
    )
    .unwrap();
    println!("wrote {}", opts.out);
}
