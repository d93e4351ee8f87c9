#![no_std]
#![allow(
    clippy::doc_markdown,
    reason = "These rules should not apply to the readme."
)]
#![doc = include_str!("../README.md")]

#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
extern crate alloc;

pub mod curves;
#[cfg(feature = "std")]
pub mod generate;
pub mod lattice;
pub mod prelude;
pub mod table;
pub mod table_noise;

pub use lattice::LatticeConfig;
pub use table::{NoiseTable, TableError};
pub use table_noise::TableNoise;

use bevy_math::VectorSpace;

/// Represents a pure noise lookup from an input coordinate `I`.
///
/// Implementations read only immutable constants and a shared read-only
/// table, so a sampler can be shared freely across threads and invoked once
/// per fragment/sample without synchronization.
pub trait NoiseSampler<I: VectorSpace> {
    /// The output of the lookup.
    type Output;

    /// Samples the noise at `loc`.
    ///
    /// Identical `loc` against an identical table always produces
    /// bit-identical output.
    fn sample(&self, loc: I) -> Self::Output;
}
