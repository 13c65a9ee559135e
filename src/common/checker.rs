//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of a table, range of the entropy parameter.
use crate::error::{Result, TreeError};


/// Check whether the rows form a valid training table.
/// The rows must be non-empty, share the same arity,
/// and hold at least one feature column besides the target.
pub fn table<R, S>(rows: &[R], labels: &[S]) -> Result<()>
    where R: AsRef<[String]>,
{
    let arity = match rows.first() {
        Some(row) => row.as_ref().len(),
        None => {
            return Err(TreeError::InvalidInput(
                "the table has no rows".into()
            ));
        },
    };

    if let Some((i, row)) = rows.iter()
        .enumerate()
        .find(|(_, row)| row.as_ref().len() != arity)
    {
        return Err(TreeError::InvalidInput(format!(
            "row {i} has {got} fields, expected {arity}",
            got = row.as_ref().len(),
        )));
    }

    if arity < 2 {
        return Err(TreeError::InvalidInput(format!(
            "a table needs a feature and a target column, got {arity} column(s)"
        )));
    }

    if labels.len() != arity {
        return Err(TreeError::InvalidInput(format!(
            "{n_labels} labels are given for {arity} columns",
            n_labels = labels.len(),
        )));
    }

    Ok(())
}


/// Check the Rényi parameter `alpha`.
/// `alpha` must be non-negative; `f64::INFINITY` is allowed.
#[inline(always)]
pub fn renyi_parameter(alpha: f64) -> Result<()> {
    if alpha.is_nan() || alpha < 0f64 {
        return Err(TreeError::InvalidParameter(
            "alpha".into(),
            "a value in [0, inf]".into(),
            format!("{alpha}"),
        ));
    }
    Ok(())
}
