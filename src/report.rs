//! Console reports of a table and the trees grown over it.
use colored::Colorize;

use crate::common::constants::{FULL_WIDTH, PRINT_WIDTH};
use crate::decision_tree::{DecisionTree, DecisionTreeClassifier};
use crate::entropy::Entropy;
use crate::error::Result;
use crate::sample::Table;

const WIDTH: usize = PRINT_WIDTH;


/// Entropies of a table under one measure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Entropy over whole rows.
    pub total_entropy: f64,
    /// Entropy of the target column.
    pub target_entropy: f64,
    /// The feature column selected at the root.
    pub feature: usize,
    /// The information gain of `feature`.
    pub gain: f64,
}


/// Returns the [`Summary`] of `table` under the entropy of `tree`.
pub fn summarize<E>(tree: &DecisionTree<E>, table: &Table) -> Result<Summary>
    where E: Entropy,
{
    let total_entropy = tree.entropy(table.rows())?;
    let target_entropy = tree.entropy(&table.target())?;
    let (feature, gain) = tree.select_feature_index(table)?;

    Ok(Summary { total_entropy, target_entropy, feature, gain })
}


/// Returns the matrix whose `(i, j)` entry tells
/// whether the `i`-th and the `j`-th trees split identically.
/// The gains are not compared,
/// see [`DecisionTreeClassifier::same_structure`].
pub fn comparison_matrix<S>(results: &[(S, DecisionTreeClassifier)])
    -> Vec<Vec<bool>>
{
    results.iter()
        .map(|(_, f)| {
            results.iter()
                .map(|(_, g)| f.same_structure(g))
                .collect()
        })
        .collect()
}


/// Print the count and the percentage of each target class.
pub fn print_target_distribution(table: &Table) {
    println!(
        "{:<WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
        "TARGET".bold().red(),
        "CNT".bold().blue(),
        "%".bold().green(),
    );
    for (target, count, fraction) in table.target_distribution() {
        println!(
            "{target:<WIDTH$}\t{count:>WIDTH$}\t{:>WIDTH$.2}",
            fraction * 100f64,
        );
    }
    println!();
}


/// Print the [`Summary`] for `name`.
pub fn print_summary(name: &str, summary: &Summary, table: &Table) {
    let header = format!(
        "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
        "", name.bold(), "",
    );
    let label = &table.labels()[summary.feature];
    println!(
        "{header}\n\
        + {:<WIDTH$}\t{:>.6}\n\
        + {:<WIDTH$}\t{:>.6}\n\
        + {:<WIDTH$}\t{} (index {}, gain {:.6})\n",
        "Total entropy".bold(),
        summary.total_entropy,
        "Target entropy".bold(),
        summary.target_entropy,
        "First split".bold(),
        label.green(),
        summary.feature,
        summary.gain,
    );
}


/// Print which of the `results` split identically.
pub fn print_comparison<S>(results: &[(S, DecisionTreeClassifier)])
    where S: AsRef<str>,
{
    let names = results.iter()
        .map(|(name, _)| name.as_ref())
        .collect::<Vec<_>>();

    let header = names.iter()
        .map(|name| format!("{:>WIDTH$}", name.bold().cyan()))
        .collect::<Vec<_>>()
        .join("\t");
    println!("{:>WIDTH$}\t{header}", "");

    let matrix = comparison_matrix(results);
    for (name, row) in names.iter().zip(matrix) {
        let cells = row.into_iter()
            .map(|same| {
                let mark = if same { "=" } else { " " };
                format!("{mark:>WIDTH$}")
            })
            .collect::<Vec<_>>()
            .join("\t");
        println!("{:>WIDTH$}\t{cells}", name.bold().cyan());
    }
}
