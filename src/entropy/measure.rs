//! Defines the entropy strategy injected into the tree builder.
use serde::{Serialize, Deserialize};

use std::fmt;
use std::hash::Hash;

use crate::common::checker;
use crate::error::Result;
use super::renyi::{self, probabilities};


/// A measure of uncertainty over an empirical distribution.
///
/// The tree builder never computes an entropy by itself;
/// it asks the `Entropy` it was built with.
/// [`Measure`] covers the Rényi family,
/// and any closure `Fn(&[f64]) -> Result<f64>` is an `Entropy` as well.
///
/// ```
/// use minitrees::{Entropy, Measure};
/// let values = ["a", "b", "a", "b"];
/// let h = Measure::Shannon.entropy(&values).unwrap();
/// assert!((h - 1.0).abs() < 1e-9);
/// ```
pub trait Entropy: Sync {
    /// Returns the entropy of the given probability vector.
    /// The probabilities are positive and sum to one.
    fn entropy_of(&self, probabilities: &[f64]) -> Result<f64>;

    /// Returns the entropy of the empirical distribution of `values`.
    fn entropy<T>(&self, values: &[T]) -> Result<f64>
        where T: Hash + Eq,
              Self: Sized,
    {
        self.entropy_of(&probabilities(values))
    }
}


impl<F> Entropy for F
    where F: Fn(&[f64]) -> Result<f64> + Sync,
{
    #[inline]
    fn entropy_of(&self, probabilities: &[f64]) -> Result<f64> {
        self(probabilities)
    }
}


/// Members of the Rényi entropy family.
/// * `Measure::Max` is the order `0` (Hartley) entropy.
/// * `Measure::Shannon` is the order `1` entropy.
/// * `Measure::Renyi(alpha)` is the order `alpha` entropy.
/// * `Measure::Min` is the order `inf` entropy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Measure {
    /// `log2` of the number of distinct values.
    Max,
    /// `- sum p log2(p)`.
    Shannon,
    /// `log2(sum p^alpha) / (1 - alpha)`.
    Renyi(f64),
    /// `- log2(max p)`.
    Min,
}


impl Measure {
    /// Returns the Rényi entropy of order `alpha`.
    /// The orders `0`, `1`, and `inf` are mapped to
    /// `Max`, `Shannon`, and `Min` respectively.
    ///
    /// Returns `TreeError::InvalidParameter` if `alpha < 0`.
    pub fn renyi(alpha: f64) -> Result<Self> {
        checker::renyi_parameter(alpha)?;
        let measure = if alpha == 0f64 {
            Self::Max
        } else if alpha == 1f64 {
            Self::Shannon
        } else if alpha == f64::INFINITY {
            Self::Min
        } else {
            Self::Renyi(alpha)
        };
        Ok(measure)
    }

    /// Returns the order of this entropy.
    pub fn alpha(&self) -> f64 {
        match self {
            Self::Max => 0f64,
            Self::Shannon => 1f64,
            Self::Renyi(alpha) => *alpha,
            Self::Min => f64::INFINITY,
        }
    }
}


impl Default for Measure {
    fn default() -> Self {
        Self::Shannon
    }
}


impl Entropy for Measure {
    fn entropy_of(&self, probabilities: &[f64]) -> Result<f64> {
        let h = match self {
            Self::Max => renyi::hartley(probabilities),
            Self::Shannon => renyi::shannon(probabilities),
            Self::Min => renyi::min(probabilities),
            Self::Renyi(alpha) => {
                // `Renyi` can be built without `Measure::renyi`.
                checker::renyi_parameter(*alpha)?;
                renyi::renyi(probabilities, *alpha)
            },
        };
        Ok(h)
    }
}


impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Max => write!(f, "Max entropy"),
            Self::Shannon => write!(f, "Shannon entropy"),
            Self::Renyi(alpha) => write!(f, "Rényi entropy (alpha = {alpha})"),
            Self::Min => write!(f, "Min entropy"),
        }
    }
}
