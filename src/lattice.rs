//! The fixed constants that tie a table to its sampler, and the coordinate
//! transform applied before any lattice math.
//!
//! Lattice-aligned noise shows visible banding along grid axes and at 90°
//! viewing angles. Rotating the sampling lattice so none of its axes line up
//! with a coordinate axis suppresses most of that. The rotation, and the two
//! UV offsets that fold z and w into a flat 2D table, live in
//! [`LatticeConfig`]; a table is only valid against the exact constants it
//! was generated with.

use bevy_math::{Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};

/// The default permutation matrix, a signed half-Hadamard.
///
/// Every transformed axis sits at exactly 60° to every world axis, the rows
/// are orthonormal (so frequency is preserved), and the leading 2×2/3×3
/// principal blocks are slight shear-scales that keep the lower-arity paths
/// decorrelated too. Perfectly axis-aligned viewing can still reveal faint
/// repetition; a better-tuned constant can be substituted per sampler
/// without touching the algorithm.
pub const PERMUTATION_MATRIX: Mat4 = Mat4::from_cols_array(&[
    0.5, 0.5, 0.5, 0.5, //
    0.5, -0.5, 0.5, -0.5, //
    0.5, 0.5, -0.5, -0.5, //
    0.5, -0.5, -0.5, 0.5, //
]);

/// The default UV stride for one step along the z lattice axis, in texels.
pub const Z_OFFSET: Vec2 = Vec2::new(37.0, 17.0);

/// The default UV stride for one step along the w lattice axis, in texels.
pub const W_OFFSET: Vec2 = Vec2::new(59.0, 83.0);

/// The immutable constants shared between table generation and sampling.
///
/// Nothing here is ever written at runtime; a config is plain data that can
/// be compiled in or injected. The offsets are carried as [`Vec2`] because
/// they participate in UV arithmetic, but they must hold integral values:
/// the channel-redundancy equalities the scalar entry points rely on are
/// exact texel shifts. A mismatch between the config used to author a table
/// and the config used to sample it is *silent* — the result still looks
/// like noise, it is just wrong.
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct LatticeConfig {
    /// The 4×4 permutation matrix. Lower-arity samples use its leading
    /// principal submatrix.
    pub matrix: Mat4,
    /// UV stride per integer step along z, in texels. Must be integral.
    pub z_offset: Vec2,
    /// UV stride per integer step along w, in texels. Must be integral.
    pub w_offset: Vec2,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            matrix: PERMUTATION_MATRIX,
            z_offset: Z_OFFSET,
            w_offset: W_OFFSET,
        }
    }
}

/// A transformed coordinate split into its lattice cell and the offset
/// within that cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeCell<F> {
    /// The least corner of the cell (component-wise `floor` of the
    /// transformed coordinate).
    pub floored: F,
    /// The positive offset from [`floored`](Self::floored), component-wise
    /// in `[0, 1)`.
    pub offset: F,
}

impl LatticeConfig {
    /// An identity config: no rotation, default offsets.
    ///
    /// Useful for inspecting a table directly, since input x/y then map
    /// straight onto texel coordinates.
    pub fn axis_aligned() -> Self {
        Self {
            matrix: Mat4::IDENTITY,
            ..Self::default()
        }
    }

    /// Transforms a 2D coordinate by the leading 2×2 submatrix and splits it.
    #[inline]
    pub fn cell2(&self, loc: Vec2) -> LatticeCell<Vec2> {
        let c = Mat2::from_mat3(Mat3::from_mat4(self.matrix)) * loc;
        let floored = c.floor();
        LatticeCell {
            floored,
            offset: c - floored,
        }
    }

    /// Transforms a 3D coordinate by the leading 3×3 submatrix and splits it.
    #[inline]
    pub fn cell3(&self, loc: Vec3) -> LatticeCell<Vec3> {
        let c = Mat3::from_mat4(self.matrix) * loc;
        let floored = c.floor();
        LatticeCell {
            floored,
            offset: c - floored,
        }
    }

    /// Transforms a 4D coordinate by the full matrix and splits it.
    #[inline]
    pub fn cell4(&self, loc: Vec4) -> LatticeCell<Vec4> {
        let c = self.matrix * loc;
        let floored = c.floor();
        LatticeCell {
            floored,
            offset: c - floored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_matrix_is_orthonormal() {
        let m = PERMUTATION_MATRIX;
        let product = m * m.transpose();
        for (a, b) in product
            .to_cols_array()
            .iter()
            .zip(Mat4::IDENTITY.to_cols_array())
        {
            assert_relative_eq!(*a, b, epsilon = 1e-6);
        }
    }

    #[test]
    fn default_matrix_axes_avoid_world_axes() {
        // Each transformed basis vector makes a 60 degree angle with every
        // world axis, so no lattice axis shadows a coordinate axis.
        for axis in [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W] {
            let image = PERMUTATION_MATRIX * axis;
            for component in image.to_array() {
                assert_relative_eq!(component.abs(), 0.5, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn default_offsets_are_integral() {
        for offset in [Z_OFFSET, W_OFFSET] {
            assert_eq!(offset, offset.round());
        }
    }

    #[test]
    fn cell_split_handles_negative_coordinates() {
        let config = LatticeConfig::axis_aligned();
        let cell = config.cell3(Vec3::new(1.75, -0.25, 3.5));
        assert_eq!(cell.floored, Vec3::new(1.0, -1.0, 3.0));
        assert_relative_eq!(cell.offset.x, 0.75);
        assert_relative_eq!(cell.offset.y, 0.75);
        assert_relative_eq!(cell.offset.z, 0.5);
    }

    #[test]
    fn lower_arity_uses_leading_submatrix() {
        let config = LatticeConfig::default();
        let loc = Vec3::new(3.2, -1.9, 7.4);
        let full = config.matrix * Vec4::new(loc.x, loc.y, loc.z, 0.0);
        let cell = config.cell3(loc);
        let reconstructed = cell.floored + cell.offset;
        // With w = 0 the full transform's xyz agrees with the 3x3 block.
        assert_relative_eq!(reconstructed.x, full.x, epsilon = 1e-5);
        assert_relative_eq!(reconstructed.y, full.y, epsilon = 1e-5);
        assert_relative_eq!(reconstructed.z, full.z, epsilon = 1e-5);
    }
}
