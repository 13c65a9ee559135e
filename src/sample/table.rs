//! Defines the table of categorical rows.
use crate::common::{checker, group_by};
use crate::error::Result;

use std::fmt;


/// A table of categorical values.
/// Each row holds the feature values followed by the target class.
/// `labels` names each column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    rows:   Vec<Vec<String>>,
    labels: Vec<String>,
}


impl Table {
    /// Construct a new table from `rows` and column `labels`.
    ///
    /// Returns `TreeError::InvalidInput` if the table is empty,
    /// the rows have different arity,
    /// the rows have no feature column,
    /// or the number of labels differs from the arity.
    pub fn new<R, S, L>(rows: R, labels: L) -> Result<Self>
        where R: IntoIterator,
              R::Item: IntoIterator,
              <R::Item as IntoIterator>::Item: Into<String>,
              L: IntoIterator<Item = S>,
              S: Into<String>,
    {
        let rows = rows.into_iter()
            .map(|row| row.into_iter().map(Into::into).collect::<Vec<String>>())
            .collect::<Vec<_>>();
        let labels = labels.into_iter()
            .map(Into::into)
            .collect::<Vec<String>>();

        checker::table(&rows, &labels)?;

        Ok(Self { rows, labels })
    }

    /// Construct a new table whose labels are the column positions
    /// `"0", "1", ...`.
    pub fn from_rows<R>(rows: R) -> Result<Self>
        where R: IntoIterator,
              R::Item: IntoIterator,
              <R::Item as IntoIterator>::Item: Into<String>,
    {
        let rows = rows.into_iter()
            .map(|row| row.into_iter().map(Into::into).collect::<Vec<String>>())
            .collect::<Vec<_>>();
        let arity = rows.first().map_or(0, |row| row.len());
        Self::new(rows, positional_labels(arity))
    }

    /// Returns the pair of the number of rows and columns.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.labels.len())
    }

    /// Returns the rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows[..]
    }

    /// Returns the column labels.
    pub fn labels(&self) -> &[String] {
        &self.labels[..]
    }

    /// Returns the label of the target column.
    pub fn target_label(&self) -> &str {
        // `checker::table` guarantees at least two labels.
        &self.labels[self.labels.len() - 1]
    }

    /// Returns the target column.
    pub fn target(&self) -> Vec<&str> {
        self.rows.iter()
            .map(|row| row[row.len() - 1].as_str())
            .collect()
    }

    /// Returns a tuple `(value, count, fraction)`
    /// for each target class, in the order the class first appears.
    pub fn target_distribution(&self) -> Vec<(&str, usize, f64)> {
        let n_rows = self.rows.len() as f64;
        group_by(self.target(), |y| *y)
            .into_iter()
            .map(|(y, ys)| (y, ys.len(), ys.len() as f64 / n_rows))
            .collect()
    }

    /// Returns the rows as borrowed string slices.
    pub(crate) fn borrowed_rows(&self) -> Vec<Vec<&str>> {
        self.rows.iter()
            .map(|row| row.iter().map(String::as_str).collect())
            .collect()
    }
}


/// Returns the labels `"0", "1", ..., "arity - 1"`.
pub(crate) fn positional_labels(arity: usize) -> Vec<String> {
    (0..arity).map(|i| i.to_string()).collect()
}


impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.labels.join("\t"))?;
        for row in self.rows.iter() {
            writeln!(f, "{}", row.join("\t"))?;
        }
        Ok(())
    }
}
