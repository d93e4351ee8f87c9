//! Contains common imports

pub use crate::{
    NoiseSampler,
    curves::{Linear, Smoothstep},
    lattice::{LatticeConfig, PERMUTATION_MATRIX, W_OFFSET, Z_OFFSET},
    table::{NoiseTable, TableError},
    table_noise::TableNoise,
};

#[cfg(feature = "std")]
pub use crate::generate::{GeneratedTable, TableLayout, generate, verify};
