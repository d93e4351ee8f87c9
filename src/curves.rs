//! Remap curves applied to the fractional part of a lattice coordinate.
//!
//! A raw bilinear blend is continuous but its first derivative jumps at
//! every cell boundary, which the eye picks up as a grid. Sampling the
//! fractional offset through [`Smoothstep`] before it becomes a blend
//! weight removes that discontinuity. [`Linear`] is the identity and is
//! mostly useful for debugging a table.

use bevy_math::{
    Curve, WithDerivative,
    curve::{Interval, derivatives::SampleDerivative},
};

/// Linear interpolation. Passes blend weights through untouched.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct Linear;

impl Curve<f32> for Linear {
    #[inline]
    fn domain(&self) -> Interval {
        Interval::EVERYWHERE
    }

    #[inline]
    fn sample_unchecked(&self, t: f32) -> f32 {
        t
    }
}

impl SampleDerivative<f32> for Linear {
    #[inline]
    fn sample_with_derivative_unchecked(&self, t: f32) -> WithDerivative<f32> {
        WithDerivative {
            value: self.sample_unchecked(t),
            derivative: 1.0,
        }
    }
}

/// The cubic Hermite ease curve, `t² (3 − 2t)`.
///
/// Maps 0 to 0 and 1 to 1 with zero derivative at both endpoints, so blends
/// driven by it line up smoothly across cell boundaries. This is the curve
/// the table sampler uses by default.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct Smoothstep;

impl Curve<f32> for Smoothstep {
    #[inline]
    fn domain(&self) -> Interval {
        Interval::UNIT
    }

    #[inline]
    fn sample_unchecked(&self, t: f32) -> f32 {
        t * t * (t * (-2.0) + 3.0)
    }
}

impl SampleDerivative<f32> for Smoothstep {
    #[inline]
    fn sample_with_derivative_unchecked(&self, t: f32) -> WithDerivative<f32> {
        WithDerivative {
            value: self.sample_unchecked(t),
            derivative: 6.0 * t - 6.0 * t * t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn smoothstep_endpoints() {
        assert_eq!(Smoothstep.sample_unchecked(0.0), 0.0);
        assert_eq!(Smoothstep.sample_unchecked(1.0), 1.0);
        assert_eq!(Smoothstep.sample_unchecked(0.5), 0.5);
    }

    #[test]
    fn smoothstep_flat_at_endpoints() {
        let start = Smoothstep.sample_with_derivative_unchecked(0.0);
        let end = Smoothstep.sample_with_derivative_unchecked(1.0);
        assert_eq!(start.derivative, 0.0);
        assert_eq!(end.derivative, 0.0);
    }

    #[test]
    fn smoothstep_derivative_matches_finite_differences() {
        let h = 1e-3;
        for i in 1..100 {
            let t = i as f32 / 100.0;
            let numeric = (Smoothstep.sample_unchecked(t + h)
                - Smoothstep.sample_unchecked(t - h))
                / (2.0 * h);
            let analytic = Smoothstep.sample_with_derivative_unchecked(t).derivative;
            assert_relative_eq!(numeric, analytic, epsilon = 1e-3);
        }
    }

    #[test]
    fn smoothstep_monotonic_on_unit_interval() {
        let mut last = 0.0;
        for i in 0..=64 {
            let v = Smoothstep.sample_unchecked(i as f32 / 64.0);
            assert!(v >= last);
            last = v;
        }
    }
}
