//! The table-backed sampler and its channel-packing entry points.
//!
//! Every entry point runs the same three steps: transform the coordinate by
//! the permutation matrix, split it into a lattice cell plus an eased
//! fractional offset, then issue one to four table fetches whose channels
//! are blended back together. Which channels blend, and how many fetches go
//! out, is the only thing that differs per input/output arity — that
//! dispatch is the table below.
//!
//! | entry | fetches | table layout required |
//! |---|---|---|
//! | [`sample2`](TableNoise::sample2) | 1 | any |
//! | [`sample3`](TableNoise::sample3) | 2 | [`Rgba`](crate::generate::TableLayout::Rgba) |
//! | [`sample3_1d`](TableNoise::sample3_1d) | 1 | [`Gray`](crate::generate::TableLayout::Gray) |
//! | [`sample3_2d`](TableNoise::sample3_2d) | 1 | [`Pair`](crate::generate::TableLayout::Pair) |
//! | [`sample4`](TableNoise::sample4) | 4 | [`Rgba`](crate::generate::TableLayout::Rgba) |
//! | [`sample4_1d`](TableNoise::sample4_1d) | 1 | [`Gray`](crate::generate::TableLayout::Gray) |
//!
//! The layout column is a precondition. The table format carries no
//! metadata to validate against, and a mismatched table still produces
//! plausible-looking values — they are just not smooth noise in the folded
//! dimensions.

use bevy_math::{Curve, FloatExt, Vec2, Vec3, Vec4, Vec4Swizzles};

use crate::{
    NoiseSampler,
    curves::Smoothstep,
    lattice::{LatticeCell, LatticeConfig},
    table::NoiseTable,
};

/// A pure, reentrant noise sampler over a borrowed [`NoiseTable`].
///
/// The smoothing curve `C` eases the fractional lattice offset before it is
/// used as a blend weight; [`Smoothstep`] is the default and is what the
/// standard table contract assumes.
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct TableNoise<'t, C = Smoothstep> {
    /// The lookup table.
    pub table: NoiseTable<'t>,
    /// The constants this sampler shares with the table's generator.
    pub lattice: LatticeConfig,
    /// The fractional-offset easing curve.
    pub curve: C,
    /// The scale of the noise. Applied to the coordinate before the lattice
    /// transform.
    pub frequency: f32,
}

impl<'t> TableNoise<'t> {
    /// Creates a sampler over `table` with the default constants, the
    /// [`Smoothstep`] curve and a frequency of 1.
    pub fn new(table: NoiseTable<'t>) -> Self {
        Self {
            table,
            lattice: LatticeConfig::default(),
            curve: Smoothstep,
            frequency: 1.0,
        }
    }
}

impl<'t, C> TableNoise<'t, C> {
    /// Replaces the easing curve, keeping everything else.
    pub fn with_curve<C2: Curve<f32>>(self, curve: C2) -> TableNoise<'t, C2> {
        TableNoise {
            table: self.table,
            lattice: self.lattice,
            curve,
            frequency: self.frequency,
        }
    }

    /// Sets the scale of the noise via its frequency.
    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency;
    }

    /// Sets the scale of the noise via its period.
    pub fn set_period(&mut self, period: f32) {
        self.frequency = 1.0 / period;
    }
}

impl<'t, C: Curve<f32>> TableNoise<'t, C> {
    /// Base UV and eased z weight for the 3D entry points.
    ///
    /// Only x and y of the lattice cell address the table directly; z folds
    /// in as `floor(z) * z_offset`. Since `floored` and the fold offsets are
    /// integral, the fractional part of the returned UV is exactly the eased
    /// xy offset, which makes the bilinear fetch do the smoothed blend.
    #[inline]
    fn uv3(&self, loc: Vec3) -> (Vec2, f32) {
        let LatticeCell { floored, offset } = self.lattice.cell3(loc * self.frequency);
        let eased = offset.map(|t| self.curve.sample_unchecked(t));
        let uv = floored.truncate() + eased.truncate() + floored.z * self.lattice.z_offset;
        (uv, eased.z)
    }

    /// Base UV and eased (z, w) weights for the 4D entry points.
    #[inline]
    fn uv4(&self, loc: Vec4) -> (Vec2, Vec2) {
        let LatticeCell { floored, offset } = self.lattice.cell4(loc * self.frequency);
        let eased = offset.map(|t| self.curve.sample_unchecked(t));
        let uv = floored.xy()
            + eased.xy()
            + floored.z * self.lattice.z_offset
            + floored.w * self.lattice.w_offset;
        (uv, eased.zw())
    }

    /// Samples a 2D coordinate for four channels. One fetch, channels read
    /// directly. Works against any table layout.
    #[inline]
    pub fn sample2(&self, loc: Vec2) -> Vec4 {
        let LatticeCell { floored, offset } = self.lattice.cell2(loc * self.frequency);
        let eased = offset.map(|t| self.curve.sample_unchecked(t));
        self.table.fetch(floored + eased)
    }

    /// Samples a 3D coordinate for four channels.
    ///
    /// Two fetches, at the base UV and one `z_offset` further, blended by
    /// the eased z weight. Independent output channels require an
    /// independent-channel ([`Rgba`](crate::generate::TableLayout::Rgba))
    /// table.
    #[inline]
    pub fn sample3(&self, loc: Vec3) -> Vec4 {
        let (uv, z) = self.uv3(loc);
        let near = self.table.fetch(uv);
        let far = self.table.fetch(uv + self.lattice.z_offset);
        near.lerp(far, z)
    }

    /// Samples a 3D coordinate for one channel with a single fetch.
    ///
    /// Blends the fetch's red and green channels by the eased z weight.
    /// Requires a [`Gray`](crate::generate::TableLayout::Gray) table, where
    /// green is red shifted by `z_offset` — that equality is what stands in
    /// for the second fetch [`sample3`](Self::sample3) issues.
    #[inline]
    pub fn sample3_1d(&self, loc: Vec3) -> f32 {
        let (uv, z) = self.uv3(loc);
        let t = self.table.fetch(uv);
        t.x.lerp(t.y, z)
    }

    /// Samples a 3D coordinate for two independent channels with a single
    /// fetch.
    ///
    /// Blends the (red, blue) and (green, alpha) channel pairs by the eased
    /// z weight. Requires a [`Pair`](crate::generate::TableLayout::Pair)
    /// table, where blue/alpha are red/green shifted by `z_offset`.
    #[inline]
    pub fn sample3_2d(&self, loc: Vec3) -> Vec2 {
        let (uv, z) = self.uv3(loc);
        let t = self.table.fetch(uv);
        t.xy().lerp(t.zw(), z)
    }

    /// Samples a 4D coordinate for four channels.
    ///
    /// Four fetches at the base UV offset by every combination of
    /// `z_offset` and `w_offset`, blended bilinearly — across z first, then
    /// w. Independent output channels require an
    /// [`Rgba`](crate::generate::TableLayout::Rgba) table.
    #[inline]
    pub fn sample4(&self, loc: Vec4) -> Vec4 {
        let (uv, zw) = self.uv4(loc);
        let z_offset = self.lattice.z_offset;
        let w_offset = self.lattice.w_offset;
        let w_near = self
            .table
            .fetch(uv)
            .lerp(self.table.fetch(uv + z_offset), zw.x);
        let w_far = self
            .table
            .fetch(uv + w_offset)
            .lerp(self.table.fetch(uv + z_offset + w_offset), zw.x);
        w_near.lerp(w_far, zw.y)
    }

    /// Samples a 4D coordinate for one channel with a single fetch.
    ///
    /// Blends the fetch's channels pairwise: red/green and blue/alpha by
    /// the eased z weight, then the two results by the eased w weight.
    /// Requires a [`Gray`](crate::generate::TableLayout::Gray) table, whose
    /// four channels are the four z/w corner shifts of one scalar field.
    #[inline]
    pub fn sample4_1d(&self, loc: Vec4) -> f32 {
        let (uv, zw) = self.uv4(loc);
        let t = self.table.fetch(uv);
        let w_near = t.x.lerp(t.y, zw.x);
        let w_far = t.z.lerp(t.w, zw.x);
        w_near.lerp(w_far, zw.y)
    }
}

impl<'t, C: Curve<f32>> NoiseSampler<Vec2> for TableNoise<'t, C> {
    type Output = Vec4;

    #[inline]
    fn sample(&self, loc: Vec2) -> Self::Output {
        self.sample2(loc)
    }
}

impl<'t, C: Curve<f32>> NoiseSampler<Vec3> for TableNoise<'t, C> {
    type Output = Vec4;

    #[inline]
    fn sample(&self, loc: Vec3) -> Self::Output {
        self.sample3(loc)
    }
}

impl<'t, C: Curve<f32>> NoiseSampler<Vec4> for TableNoise<'t, C> {
    type Output = Vec4;

    #[inline]
    fn sample(&self, loc: Vec4) -> Self::Output {
        self.sample4(loc)
    }
}
