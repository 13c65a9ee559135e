//! Reads a table from delimited text.
use log::info;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::common::constants::DEFAULT_DELIMITER;
use crate::error::{Result, TreeError};
use super::table::{Table, positional_labels};


/// A struct that returns [`Table`].
/// Using this struct, one can read a delimited text file to [`Table`].
/// Each line is split on the delimiter,
/// and each field is trimmed of surrounding whitespace.
/// Blank lines are skipped.
///
/// # Example
/// ```no_run
/// use minitrees::TableReader;
/// let table = TableReader::default()
///     .file("/path/to/golf.data")
///     .labels(["Outlook", "Temperature", "Humidity", "Wind", "Play golf"])
///     .read()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct TableReader {
    file:       Option<PathBuf>,
    delimiter:  char,
    labels:     Option<Vec<String>>,
    has_header: bool,
}


impl Default for TableReader {
    fn default() -> Self {
        Self {
            file:       None,
            delimiter:  DEFAULT_DELIMITER,
            labels:     None,
            has_header: false,
        }
    }
}


impl TableReader {
    /// Set the file name.
    pub fn file<P>(mut self, file: P) -> Self
        where P: AsRef<Path>,
    {
        self.file = Some(file.as_ref().to_path_buf());
        self
    }

    /// Set the field delimiter.
    /// Default is `','`.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the column labels.
    /// If neither labels nor a header are given,
    /// the columns are labeled by their positions `"0", "1", ...`.
    pub fn labels<L, S>(mut self, labels: L) -> Self
        where L: IntoIterator<Item = S>,
              S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Set the flag whether the first line is a header row or not.
    /// Labels given by [`TableReader::labels`] take precedence
    /// over the header.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }

    /// Reads a table from `reader` based on the arguments.
    /// This method consumes `self.`
    pub fn read_from<R>(self, reader: R) -> Result<Table>
        where R: BufRead,
    {
        let delimiter = self.delimiter;
        let split = |line: &str| -> Vec<String> {
            line.split(delimiter)
                .map(|x| x.trim().to_string())
                .collect()
        };

        let mut header = None;
        let mut rows = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() { continue; }

            if self.has_header && header.is_none() {
                header = Some(split(&line));
                continue;
            }
            rows.push(split(&line));
        }

        let labels = match (self.labels, header) {
            (Some(labels), _) => labels,
            (None, Some(header)) => header,
            (None, None) => {
                let arity = rows.first().map_or(0, |row| row.len());
                positional_labels(arity)
            },
        };

        let table = Table::new(rows, labels)?;
        let (n_rows, n_columns) = table.shape();
        info!("Read a table of {n_rows} rows and {n_columns} columns.");
        Ok(table)
    }

    /// Reads the file based on the arguments,
    /// and returns [`Table`].
    /// This method consumes `self.`
    pub fn read(mut self) -> Result<Table> {
        let file = self.file.take()
            .ok_or_else(|| TreeError::InvalidInput(
                "the file name of the table is not set".into()
            ))?;
        let reader = BufReader::new(File::open(file)?);
        self.read_from(reader)
    }
}
