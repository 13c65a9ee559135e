#![warn(missing_docs)]

//!
//! A crate that grows decision trees over categorical tables.
//!
//! Given a table whose last column is the target class,
//! [`DecisionTree`] recursively splits the rows
//! on the feature with the largest information gain (ID3),
//! and outputs a [`DecisionTreeClassifier`]
//! whose leaves report the target-class counts.
//!
//! The information gain is measured by an [`Entropy`] strategy.
//! This crate provides the Rényi entropy family through [`Measure`]:
//!
//! - `Measure::Max`, the order `0` (Hartley) entropy,
//! - `Measure::Shannon`, the order `1` entropy,
//! - `Measure::Renyi(alpha)`, the order `alpha` entropy,
//! - `Measure::Min`, the order `inf` entropy.
//!
//! Grown trees can be written as JSON or as a Graphviz dot file.
//!
//! ```no_run
//! use minitrees::prelude::*;
//!
//! let table = TableReader::default()
//!     .file("golf.data")
//!     .labels(["Outlook", "Temperature", "Humidity", "Wind", "Play golf"])
//!     .read()
//!     .unwrap();
//!
//! let tree = DecisionTreeBuilder::new()
//!     .entropy(Measure::renyi(2.0).unwrap())
//!     .build();
//! let f = tree.produce(&table).unwrap();
//!
//! f.to_dot_file("golf.dot").unwrap();
//! println!("{}", f.to_json_pretty().unwrap());
//! ```

pub mod common;
pub mod decision_tree;
pub mod entropy;
pub mod error;
pub mod prelude;
pub mod report;
pub mod sample;


pub use decision_tree::{
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    DecisionNode,
    Leaf,
    LeafGroup,
    Node,
    NodeBranch,
    TreeVisitor,
};

pub use entropy::{Entropy, Measure};

pub use error::{Result, TreeError};

pub use sample::{Table, TableReader};
