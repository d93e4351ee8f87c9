//! The precomputed lookup table the sampler fetches from.
//!
//! A table is a `width × height` grid of RGBA8 unorm texels, logically
//! periodic at its edges. It is authored once offline, immutable at query
//! time, and shared read-only by every caller; [`NoiseTable`] therefore
//! borrows its texels rather than owning them, which keeps the sampling
//! core allocation-free. Values must be read as linear — a table that went
//! through a gamma decode no longer satisfies the exact channel equalities
//! the scalar entry points depend on.

use bevy_math::{IVec2, Vec2, Vec4};
use thiserror::Error;

/// Errors from table construction and verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// The texel buffer length does not match the stated dimensions.
    #[error("texel buffer holds {actual} bytes, expected {expected} (width * height * 4)")]
    SizeMismatch {
        /// `width * height * 4`.
        expected: usize,
        /// The length of the buffer that was passed.
        actual: usize,
    },
    /// A table dimension was zero.
    #[error("table dimensions must be non-zero")]
    ZeroDimension,
    /// Verification found a texel violating a layout's channel redundancy.
    #[error("channel redundancy violated at texel ({x}, {y}), channel {channel}")]
    RedundancyViolation {
        /// Texel x coordinate of the first violation.
        x: u32,
        /// Texel y coordinate of the first violation.
        y: u32,
        /// Zero-based channel index that failed the equality.
        channel: usize,
    },
}

/// A borrowed, periodic, 4-channel lookup table.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct NoiseTable<'a> {
    width: u32,
    height: u32,
    texels: &'a [u8],
}

impl<'a> NoiseTable<'a> {
    /// Wraps a row-major RGBA8 buffer as a table.
    ///
    /// `texels` must hold exactly `width * height * 4` bytes.
    pub fn new(width: u32, height: u32, texels: &'a [u8]) -> Result<Self, TableError> {
        if width == 0 || height == 0 {
            return Err(TableError::ZeroDimension);
        }
        let expected = width as usize * height as usize * 4;
        if texels.len() != expected {
            return Err(TableError::SizeMismatch {
                expected,
                actual: texels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            texels,
        })
    }

    /// For buffers whose length is already an invariant of the caller.
    #[cfg(feature = "std")]
    pub(crate) fn from_raw(width: u32, height: u32, texels: &'a [u8]) -> Self {
        debug_assert_eq!(texels.len(), width as usize * height as usize * 4);
        Self {
            width,
            height,
            texels,
        }
    }

    /// The table width in texels. This is the tiling period along u.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The table height in texels. This is the tiling period along v.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw row-major RGBA8 texels.
    #[inline]
    pub fn texels(&self) -> &'a [u8] {
        self.texels
    }

    /// Reads one texel as a unorm [`Vec4`].
    ///
    /// Out-of-range coordinates are reduced modulo the table's period, never
    /// clamped; clamping would produce seams at tile boundaries.
    #[inline]
    pub fn texel(&self, at: IVec2) -> Vec4 {
        let size = IVec2::new(self.width as i32, self.height as i32);
        let wrapped = at.rem_euclid(size);
        let index = (wrapped.y as usize * self.width as usize + wrapped.x as usize) * 4;
        Vec4::new(
            f32::from(self.texels[index]),
            f32::from(self.texels[index + 1]),
            f32::from(self.texels[index + 2]),
            f32::from(self.texels[index + 3]),
        ) / 255.0
    }

    /// Fetches at a texel-space `uv` with an explicit 4-tap bilinear blend.
    ///
    /// This is the software stand-in for a hardware bilinear sampler: the
    /// fractional part of `uv` becomes the blend weight, so a caller that
    /// has already eased that fraction gets smoothed interpolation for
    /// free. Being the software path, no half-texel center bias applies.
    #[inline]
    pub fn fetch(&self, uv: Vec2) -> Vec4 {
        let base = uv.floor();
        let t = uv - base;
        let at = base.as_ivec2();
        let c00 = self.texel(at);
        let c10 = self.texel(at + IVec2::X);
        let c01 = self.texel(at + IVec2::Y);
        let c11 = self.texel(at + IVec2::ONE);
        c00.lerp(c10, t.x).lerp(c01.lerp(c11, t.x), t.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use approx::assert_relative_eq;

    fn checkered() -> Vec<u8> {
        let mut texels = Vec::with_capacity(4 * 4 * 4);
        for y in 0..4u32 {
            for x in 0..4u32 {
                let value = if (x + y) % 2 == 0 { 255 } else { 0 };
                texels.extend_from_slice(&[value, value, value, value]);
            }
        }
        texels
    }

    #[test]
    fn rejects_wrong_buffer_length() {
        let texels = [0u8; 12];
        assert_eq!(
            NoiseTable::new(2, 2, &texels).err(),
            Some(TableError::SizeMismatch {
                expected: 16,
                actual: 12
            })
        );
        assert_eq!(
            NoiseTable::new(0, 2, &texels).err(),
            Some(TableError::ZeroDimension)
        );
    }

    #[test]
    fn texel_reads_wrap_modulo_period() {
        let texels = checkered();
        let table = NoiseTable::new(4, 4, &texels).unwrap();
        assert_eq!(table.texel(IVec2::new(-1, -1)), table.texel(IVec2::new(3, 3)));
        assert_eq!(table.texel(IVec2::new(4, 4)), table.texel(IVec2::new(0, 0)));
        assert_eq!(table.texel(IVec2::new(-5, 2)), table.texel(IVec2::new(3, 2)));
    }

    #[test]
    fn fetch_at_integer_uv_is_the_texel() {
        let texels = checkered();
        let table = NoiseTable::new(4, 4, &texels).unwrap();
        assert_eq!(table.fetch(Vec2::new(2.0, 1.0)), table.texel(IVec2::new(2, 1)));
    }

    #[test]
    fn fetch_midway_is_the_neighbor_mean() {
        let texels = checkered();
        let table = NoiseTable::new(4, 4, &texels).unwrap();
        let halfway = table.fetch(Vec2::new(0.5, 0.0));
        let mean = (table.texel(IVec2::new(0, 0)) + table.texel(IVec2::new(1, 0))) / 2.0;
        assert_relative_eq!(halfway.x, mean.x);
        assert_relative_eq!(halfway.y, mean.y);
    }
}
