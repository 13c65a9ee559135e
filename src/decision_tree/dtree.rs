use log::{debug, info, trace};
use rayon::prelude::*;

use crate::common::group_by;
use crate::entropy::Entropy;
use crate::error::{Result, TreeError};
use crate::sample::Table;

use super::{
    node::*,
    classifier::DecisionTreeClassifier,
};

use std::fmt;
use std::hash::Hash;


/// The ID3 decision tree algorithm over categorical features.
/// Given a [`Table`] whose last column is the target class,
/// [`DecisionTree`] recursively splits the rows
/// on the feature with the largest information gain
/// and outputs a [`DecisionTreeClassifier`].
///
/// The information gain is measured by the [`Entropy`]
/// this struct is built with,
/// so the same induction runs under any member of the Rényi family.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](crate::DecisionTreeBuilder).
///
/// # Example
/// ```
/// use minitrees::{DecisionTreeBuilder, Measure, Table};
///
/// let table = Table::new(
///     [
///         ["Sunny", "Weak",   "Yes"],
///         ["Sunny", "Strong", "No"],
///         ["Rainy", "Weak",   "No"],
///         ["Rainy", "Strong", "No"],
///     ],
///     ["Outlook", "Wind", "Play"],
/// ).unwrap();
///
/// let tree = DecisionTreeBuilder::new()
///     .entropy(Measure::Shannon)
///     .build();
/// let f = tree.produce(&table).unwrap();
///
/// assert_eq!(f.total_count(), 4);
/// ```
pub struct DecisionTree<E> {
    entropy: E,
}


impl<E> DecisionTree<E>
    where E: Entropy,
{
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn new(entropy: E) -> Self {
        Self { entropy }
    }

    /// Returns the entropy of the empirical distribution of `values`
    /// under the measure this tree is grown with.
    #[inline]
    pub fn entropy<T>(&self, values: &[T]) -> Result<f64>
        where T: Hash + Eq,
    {
        self.entropy.entropy(values)
    }

    /// Returns the pair `(i, gain)` of the feature column `i`
    /// that maximizes the information gain about the target column.
    /// Ties are broken by the lowest column index.
    pub fn select_feature_index(&self, table: &Table) -> Result<(usize, f64)> {
        self.best_feature(&table.borrowed_rows())
    }

    /// Grow a decision tree over `table`.
    /// This method computes as follows;
    /// 1. select the feature with the largest information gain,
    /// 2. stop with a group of leaves if the gain is zero
    ///    or the feature is the last one,
    /// 3. otherwise, split the rows on the feature values,
    ///    drop the feature, and grow a subtree for each split.
    pub fn produce(&self, table: &Table) -> Result<DecisionTreeClassifier> {
        let (n_rows, n_columns) = table.shape();
        info!("Growing a decision tree over {n_rows} rows and {n_columns} columns.");

        let rows = table.borrowed_rows();
        let labels = table.labels()
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>();
        let root = self.grow(rows, labels)?;

        let f = DecisionTreeClassifier::from(root);
        info!("Grown a decision tree of depth {}.", f.depth());
        Ok(f)
    }

    /// Construct a subtree over `rows`.
    /// `labels` names the columns of `rows`; the last one is the target.
    fn grow(&self, rows: Vec<Vec<&str>>, labels: Vec<&str>) -> Result<Node> {
        // The stopping rule below fires at two columns,
        // so a lone target column means the recursion went wrong.
        if labels.len() == 1 {
            return Err(TreeError::MalformedRecursion);
        }

        let (feature, gain) = self.best_feature(&rows)?;

        if gain == 0f64 || labels.len() == 2 {
            let leaves = group_by(rows.iter(), |row| row[row.len() - 1])
                .into_iter()
                .map(|(y, ys)| Leaf::new(y, ys.len()))
                .collect::<Vec<_>>();
            trace!("Emit {} leaves over {} rows.", leaves.len(), rows.len());
            return Ok(Node::terminal(leaves));
        }

        let label = labels[feature];
        debug!(
            "Split {n_rows} rows on `{label}` (gain = {gain:.6}).",
            n_rows = rows.len(),
        );

        let labels = skip_index(&labels, feature);
        let branches = group_by(rows, |row| row[feature])
            .into_iter()
            .map(|(value, group)| -> Result<NodeBranch> {
                let group = group.iter()
                    .map(|row| skip_index(row, feature))
                    .collect::<Vec<_>>();
                let children = self.grow(group, labels.clone())?;
                Ok(NodeBranch::new(value, children))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Node::internal(label, gain, branches))
    }

    /// Returns the best feature of `rows` and its information gain.
    /// The gain of the feature `X` about the target `Y` is
    /// `H(Y) - H(Y|X)` where `H(Y|X) = H(X, Y) - H(X)`.
    fn best_feature(&self, rows: &[Vec<&str>]) -> Result<(usize, f64)> {
        let n_columns = rows.first()
            .map(|row| row.len())
            .ok_or_else(|| TreeError::InvalidInput("the table has no rows".into()))?;
        if rows.iter().any(|row| row.len() != n_columns) {
            return Err(TreeError::InvalidInput(
                "the rows have different arity".into()
            ));
        }
        let target = n_columns - 1;

        let ys = rows.iter()
            .map(|row| row[target])
            .collect::<Vec<_>>();
        let target_entropy = self.entropy.entropy(&ys)?;

        let gains = (0..target).into_par_iter()
            .map(|i| -> Result<f64> {
                let xs = rows.iter()
                    .map(|row| row[i])
                    .collect::<Vec<_>>();
                let xys = rows.iter()
                    .map(|row| (row[i], row[target]))
                    .collect::<Vec<_>>();

                let marginal = self.entropy.entropy(&xs)?;
                let joint = self.entropy.entropy(&xys)?;
                let conditional = joint - marginal;

                Ok(target_entropy - conditional)
            })
            .collect::<Result<Vec<f64>>>()?;

        gains.into_iter()
            .enumerate()
            .fold(None, |best, (i, gain)| match best {
                Some((_, best_gain)) if !(gain > best_gain) => best,
                _ => Some((i, gain)),
            })
            .ok_or_else(|| TreeError::InvalidInput(
                "the table has no feature column".into()
            ))
    }
}


/// Returns a copy of `row` without the `index`-th element.
#[inline]
fn skip_index<T: Copy>(row: &[T], index: usize) -> Vec<T> {
    row.iter()
        .enumerate()
        .filter_map(|(i, &v)| (i != index).then_some(v))
        .collect()
}


impl<E> fmt::Display for DecisionTree<E>
    where E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # Decision Tree (ID3)\n\n\
            - Entropy: {}\n\
            ----------\
            ",
            self.entropy,
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecisionTreeBuilder, Measure};

    const TEST_TOLERANCE: f64 = 1e-9;

    fn shannon_tree() -> DecisionTree<Measure> {
        DecisionTreeBuilder::new().build()
    }

    #[test]
    fn test_skip_index() {
        assert_eq!(skip_index(&["a", "b", "c"], 0), vec!["b", "c"]);
        assert_eq!(skip_index(&["a", "b", "c"], 1), vec!["a", "c"]);
        assert_eq!(skip_index(&["a", "b", "c"], 2), vec!["a", "b"]);
    }

    #[test]
    fn test_target_only_is_malformed() {
        let result = shannon_tree().grow(vec![vec!["x"], vec!["y"]], vec!["class"]);
        assert!(
            matches!(result, Err(TreeError::MalformedRecursion)),
            "expected `MalformedRecursion`, got {result:?}"
        );
    }

    #[test]
    fn test_best_feature_perfect_split() {
        let rows = vec![
            vec!["a", "p", "yes"],
            vec!["a", "q", "no"],
            vec!["b", "p", "yes"],
            vec!["b", "q", "no"],
        ];
        let (feature, gain) = shannon_tree().best_feature(&rows).unwrap();
        assert_eq!(feature, 1);
        assert!((gain - 1f64).abs() < TEST_TOLERANCE, "got {gain}");
    }

    #[test]
    fn test_best_feature_tie_goes_to_lowest_index() {
        let rows = vec![
            vec!["a", "p", "yes"],
            vec!["b", "q", "no"],
        ];
        let (feature, _) = shannon_tree().best_feature(&rows).unwrap();
        assert_eq!(feature, 0);
    }

    #[test]
    fn test_best_feature_without_features() {
        let rows = vec![vec!["yes"], vec!["no"]];
        let result = shannon_tree().best_feature(&rows);
        assert!(matches!(result, Err(TreeError::InvalidInput(_))));
    }

    #[test]
    fn test_best_feature_ragged() {
        let rows = vec![vec!["a", "yes"], vec!["no"]];
        let result = shannon_tree().best_feature(&rows);
        assert!(matches!(result, Err(TreeError::InvalidInput(_))));
    }

    #[test]
    fn test_constant_target_collapses() {
        let table = Table::from_rows([
            ["a", "p", "yes"],
            ["b", "q", "yes"],
            ["c", "p", "yes"],
        ]).unwrap();
        let f = shannon_tree().produce(&table).unwrap();
        assert_eq!(f.root(), &Node::terminal(vec![Leaf::new("yes", 3)]));
    }

    #[test]
    fn test_single_row() {
        let table = Table::from_rows([["a", "p", "yes"]]).unwrap();
        let f = shannon_tree().produce(&table).unwrap();
        assert_eq!(f.root(), &Node::terminal(vec![Leaf::new("yes", 1)]));
    }

    #[test]
    fn test_last_feature_stops() {
        // A single feature column always ends in leaves,
        // even when it is informative.
        let table = Table::from_rows([
            ["a", "yes"],
            ["b", "no"],
            ["a", "yes"],
        ]).unwrap();
        let f = shannon_tree().produce(&table).unwrap();
        assert_eq!(
            f.root(),
            &Node::terminal(vec![Leaf::new("yes", 2), Leaf::new("no", 1)])
        );
    }

    #[test]
    fn test_entropy_error_propagates() {
        let failing = |_: &[f64]| -> Result<f64> {
            Err(TreeError::InvalidParameter(
                "alpha".into(), "anything".into(), "nothing".into()
            ))
        };
        let tree = DecisionTreeBuilder::new().entropy(failing).build();
        let table = Table::from_rows([["a", "yes"], ["b", "no"]]).unwrap();
        let result = tree.produce(&table);
        assert!(matches!(result, Err(TreeError::InvalidParameter(..))));
    }

    #[test]
    fn test_display() {
        let text = format!("{}", shannon_tree());
        assert!(text.contains("Shannon entropy"), "got {text}");
    }
}
