//! Offline generation and verification of lookup tables.
//!
//! Generation is the other half of the table contract: the sampler's scalar
//! entry points only work because specific channels of the table are exact
//! shifted copies of other channels, and the shift vectors must be the same
//! `z_offset`/`w_offset` the sampler folds z and w with. Nothing at sample
//! time can detect a mismatch, so this module is where the checking lives:
//! author a table with [`generate`], then round-trip it through [`verify`]
//! before shipping it.
//!
//! Everything here is offline tooling and is gated behind the `std`
//! feature; the sampling core never allocates.

use bevy_math::IVec2;
use std::vec::Vec;

use crate::{
    lattice::LatticeConfig,
    table::{NoiseTable, TableError},
};

/// How the four channels of a generated table relate to each other.
///
/// The relation decides which entry points the table can serve. There is no
/// metadata in the table itself recording the layout; keeping track of it
/// is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum TableLayout {
    /// Four independent channels. Serves the vector outputs of
    /// [`sample2`](crate::TableNoise::sample2),
    /// [`sample3`](crate::TableNoise::sample3) and
    /// [`sample4`](crate::TableNoise::sample4).
    Rgba,
    /// One scalar field in red; green, blue and alpha are red shifted by
    /// `z_offset`, `w_offset`, and both. Serves
    /// [`sample3_1d`](crate::TableNoise::sample3_1d) and
    /// [`sample4_1d`](crate::TableNoise::sample4_1d).
    Gray,
    /// Two independent fields in red and green; blue and alpha are the same
    /// fields shifted by `z_offset`. Serves
    /// [`sample3_2d`](crate::TableNoise::sample3_2d).
    Pair,
}

/// A 32-bit maximal-period Galois LFSR.
///
/// The table needs a statistically unbiased bit source; a biased one leaves
/// visible grid structure in the tiled result. Like the sampler, the
/// generator owns its bit source rather than pulling in a full RNG crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lfsr(u32);

impl Lfsr {
    /// Feedback taps 32, 30, 26, 25. This polynomial is maximal, so the
    /// state walks all 2³² − 1 non-zero values before repeating.
    const TAPS: u32 = 0xA300_0000;

    /// Seeds the generator. The all-zero lock-up state is remapped.
    pub fn new(seed: u32) -> Self {
        Self(if seed == 0 { 0xACE1 } else { seed })
    }

    #[inline]
    fn step(&mut self) -> u32 {
        let lsb = self.0 & 1;
        self.0 >>= 1;
        if lsb == 1 {
            self.0 ^= Self::TAPS;
        }
        self.0
    }

    /// Produces the next byte from eight successive feedback bits.
    #[inline]
    pub fn next_byte(&mut self) -> u8 {
        let mut bits = 0;
        for _ in 0..8 {
            bits = (bits << 1) | (self.step() & 1);
        }
        bits as u8
    }
}

/// An owned table fresh out of [`generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTable {
    width: u32,
    height: u32,
    texels: Vec<u8>,
}

impl GeneratedTable {
    /// The table width in texels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The table height in texels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw row-major RGBA8 texels, e.g. for writing to an image file.
    ///
    /// These are linear values; whatever container they travel in must not
    /// gamma-decode them on the way back in.
    pub fn texels(&self) -> &[u8] {
        &self.texels
    }

    /// Borrows the buffer as a sampler-ready [`NoiseTable`].
    pub fn as_table(&self) -> NoiseTable<'_> {
        NoiseTable::from_raw(self.width, self.height, &self.texels)
    }
}

/// Reads a byte from a row-major single-channel field, wrapping at the
/// edges so the shifted copies tile with the table.
#[inline]
fn field(base: &[u8], width: u32, height: u32, at: IVec2) -> u8 {
    let wrapped = at.rem_euclid(IVec2::new(width as i32, height as i32));
    base[wrapped.y as usize * width as usize + wrapped.x as usize]
}

/// Authors a `width × height` table for `layout`, deriving the redundant
/// channels with the offsets in `lattice`.
///
/// The offsets are rounded to whole texels first — the redundancy is an
/// exact byte equality, so fractional offsets cannot be honored. Generation
/// is deterministic in `seed`.
pub fn generate(
    width: u32,
    height: u32,
    seed: u32,
    layout: TableLayout,
    lattice: &LatticeConfig,
) -> Result<GeneratedTable, TableError> {
    if width == 0 || height == 0 {
        return Err(TableError::ZeroDimension);
    }
    let z = lattice.z_offset.round().as_ivec2();
    let w = lattice.w_offset.round().as_ivec2();
    let count = width as usize * height as usize;

    let mut rng = Lfsr::new(seed);
    let mut bytes = |n: usize| (0..n).map(|_| rng.next_byte()).collect::<Vec<u8>>();
    let red = bytes(count);
    let green = bytes(count);
    let blue = bytes(count);
    let alpha = bytes(count);
    let at = |base: &[u8], p: IVec2| field(base, width, height, p);

    let mut texels = Vec::with_capacity(count * 4);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let p = IVec2::new(x, y);
            let texel = match layout {
                TableLayout::Rgba => [at(&red, p), at(&green, p), at(&blue, p), at(&alpha, p)],
                TableLayout::Gray => [
                    at(&red, p),
                    at(&red, p + z),
                    at(&red, p + w),
                    at(&red, p + z + w),
                ],
                TableLayout::Pair => [
                    at(&red, p),
                    at(&green, p),
                    at(&red, p + z),
                    at(&green, p + z),
                ],
            };
            texels.extend_from_slice(&texel);
        }
    }
    Ok(GeneratedTable {
        width,
        height,
        texels,
    })
}

/// Round-trip-checks a finished table against a layout's channel
/// redundancy, with the offsets in `lattice`.
///
/// This is the only place the contract between generator and sampler can be
/// verified at all, so run it after generating and after any external
/// processing of the image. The first violating texel is reported. An
/// [`Rgba`](TableLayout::Rgba) table has no redundancy and always passes.
pub fn verify(
    table: NoiseTable<'_>,
    layout: TableLayout,
    lattice: &LatticeConfig,
) -> Result<(), TableError> {
    let z = lattice.z_offset.round().as_ivec2();
    let w = lattice.w_offset.round().as_ivec2();
    for y in 0..table.height() as i32 {
        for x in 0..table.width() as i32 {
            let p = IVec2::new(x, y);
            let here = table.texel(p);
            let check = |channel: usize, want: f32| {
                if here.to_array()[channel] == want {
                    Ok(())
                } else {
                    Err(TableError::RedundancyViolation {
                        x: x as u32,
                        y: y as u32,
                        channel,
                    })
                }
            };
            match layout {
                TableLayout::Rgba => {}
                TableLayout::Gray => {
                    check(1, table.texel(p + z).x)?;
                    check(2, table.texel(p + w).x)?;
                    check(3, table.texel(p + z + w).x)?;
                }
                TableLayout::Pair => {
                    check(2, table.texel(p + z).x)?;
                    check(3, table.texel(p + z).y)?;
                }
            }
        }
    }
    Ok(())
}
