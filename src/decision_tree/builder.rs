use crate::entropy::{Entropy, Measure};
use super::dtree::DecisionTree;


/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```
/// use minitrees::{DecisionTreeBuilder, Measure};
///
/// let tree = DecisionTreeBuilder::new()
///     .entropy(Measure::renyi(2.0).unwrap())
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct DecisionTreeBuilder<E> {
    entropy: E,
}


impl DecisionTreeBuilder<Measure> {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, the tree is grown with the Shannon entropy.
    pub fn new() -> Self {
        Self { entropy: Measure::Shannon }
    }
}


impl Default for DecisionTreeBuilder<Measure> {
    fn default() -> Self {
        Self::new()
    }
}


impl<E> DecisionTreeBuilder<E>
    where E: Entropy,
{
    /// Set the entropy used to measure the information gain.
    /// Default value is `Measure::Shannon`.
    /// See [`Measure`] for the Rényi family;
    /// a closure `Fn(&[f64]) -> Result<f64>` is accepted as well.
    #[inline]
    pub fn entropy<F>(self, entropy: F) -> DecisionTreeBuilder<F>
        where F: Entropy,
    {
        DecisionTreeBuilder { entropy }
    }

    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree<E> {
        DecisionTree::new(self.entropy)
    }
}
