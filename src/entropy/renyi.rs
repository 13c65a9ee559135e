//! Empirical entropies of a value sequence.
//! All entropies are measured in bits.
use std::hash::Hash;

use crate::common::{checker, group_by};
use crate::error::Result;


/// Returns the empirical distribution of `values`.
/// Probabilities are listed in the order the values were first seen.
pub fn probabilities<T>(values: &[T]) -> Vec<f64>
    where T: Hash + Eq,
{
    let total = values.len() as f64;
    group_by(values.iter(), |v| *v)
        .into_iter()
        .map(|(_, group)| group.len() as f64 / total)
        .collect()
}


/// Shannon entropy `- sum p log2(p)` of `values`.
pub fn shannon_entropy<T>(values: &[T]) -> f64
    where T: Hash + Eq,
{
    shannon(&probabilities(values))
}


/// Max entropy (Hartley entropy) `log2(#distinct values)`.
pub fn max_entropy<T>(values: &[T]) -> f64
    where T: Hash + Eq,
{
    hartley(&probabilities(values))
}


/// Min entropy `- log2(max p)`.
pub fn min_entropy<T>(values: &[T]) -> f64
    where T: Hash + Eq,
{
    min(&probabilities(values))
}


/// Rényi entropy of order `alpha`.
///
/// - `alpha == 0` is the max entropy,
/// - `alpha == 1` is the Shannon entropy,
/// - `alpha == inf` is the min entropy.
///
/// Returns `TreeError::InvalidParameter` if `alpha < 0`.
pub fn renyi_entropy<T>(values: &[T], alpha: f64) -> Result<f64>
    where T: Hash + Eq,
{
    checker::renyi_parameter(alpha)?;
    Ok(renyi(&probabilities(values), alpha))
}


// The functions below take a probability vector
// that is assumed to be normalized and free of zeros.


#[inline]
pub(crate) fn shannon(probabilities: &[f64]) -> f64 {
    -probabilities.iter()
        .map(|&p| p * p.log2())
        .sum::<f64>()
}


#[inline]
pub(crate) fn hartley(probabilities: &[f64]) -> f64 {
    if probabilities.is_empty() { return 0f64; }
    (probabilities.len() as f64).log2()
}


#[inline]
pub(crate) fn min(probabilities: &[f64]) -> f64 {
    probabilities.iter()
        .copied()
        .reduce(f64::max)
        .map_or(0f64, |p| -p.log2())
}


/// `alpha` is assumed to be valid.
#[inline]
pub(crate) fn renyi(probabilities: &[f64], alpha: f64) -> f64 {
    if alpha == 0f64 {
        return hartley(probabilities);
    } else if alpha == 1f64 {
        return shannon(probabilities);
    } else if alpha == f64::INFINITY {
        return min(probabilities);
    }
    if probabilities.is_empty() { return 0f64; }

    let sum = probabilities.iter()
        .map(|p| p.powf(alpha))
        .sum::<f64>();
    sum.log2() / (1f64 - alpha)
}
