//! The entropy engine.
//! Provides the Rényi entropy family over empirical distributions
//! and the [`Entropy`] strategy used by the tree builder.

/// Defines the `Entropy` strategy and the `Measure` enum.
pub mod measure;
/// Entropies of value sequences.
pub mod renyi;


pub use measure::{Entropy, Measure};
pub use renyi::{
    probabilities,
    shannon_entropy,
    max_entropy,
    min_entropy,
    renyi_entropy,
};
