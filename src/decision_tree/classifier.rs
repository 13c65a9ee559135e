//! Defines the decision tree classifier.
use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::sample::Table;
use super::node::*;

use std::path::Path;
use std::fs::File;
use std::io::{BufReader, BufWriter, prelude::*};


/// Decision tree classifier.
/// This struct is just a wrapper of `Node`.
/// The root is either a decision node or,
/// for a degenerate tree, a single group of leaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionTreeClassifier {
    root: Node,
}


impl From<Node> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}


/// Collects the shape of a tree in a single traversal.
#[derive(Default)]
struct Shape {
    depth: usize,
    n_leaves: usize,
    total: usize,
}


impl TreeVisitor for Shape {
    fn visit_decision(&mut self, _node: &DecisionNode, _depth: usize) {}

    fn visit_leaves(&mut self, leaves: &LeafGroup, depth: usize) {
        self.depth = self.depth.max(depth);
        self.n_leaves += leaves.leaves().len();
        self.total += leaves.total();
    }
}


impl DecisionTreeClassifier {
    /// Returns the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Drive `visitor` over the whole tree in pre-order.
    pub fn walk<V>(&self, visitor: &mut V)
        where V: TreeVisitor + ?Sized,
    {
        self.root.walk(visitor);
    }

    fn shape(&self) -> Shape {
        let mut shape = Shape::default();
        self.walk(&mut shape);
        shape
    }

    /// Returns the number of decision levels above the deepest leaves.
    /// A tree made of a single group of leaves has depth `0`.
    pub fn depth(&self) -> usize {
        self.shape().depth
    }

    /// Returns the number of leaves over all leaf groups.
    pub fn n_leaves(&self) -> usize {
        self.shape().n_leaves
    }

    /// Returns the sum of all leaf counts,
    /// i.e., the number of rows the tree was grown on.
    pub fn total_count(&self) -> usize {
        self.shape().total
    }

    /// Returns `true` if `self` and `other` are the same tree
    /// up to the gains recorded at the decision nodes.
    /// Trees grown with different entropies
    /// can split identically but never share their gains.
    pub fn same_structure(&self, other: &Self) -> bool {
        self.root.same_structure(&other.root)
    }

    /// Predict the class of `row`.
    /// `labels` names the columns of `row`.
    /// Returns the majority class of the leaf group that `row` reaches,
    /// or `None` if `row` takes a feature value
    /// that no branch was grown for.
    pub fn predict<S, T>(&self, labels: &[S], row: &[T]) -> Option<&str>
        where S: AsRef<str>,
              T: AsRef<str>,
    {
        let mut node = &self.root;
        loop {
            match node {
                Node::Internal(decision) => {
                    let column = labels.iter()
                        .position(|label| label.as_ref() == decision.label())?;
                    let value = row.get(column)?.as_ref();
                    node = decision.branches()
                        .iter()
                        .find(|branch| branch.value() == value)?
                        .children();
                },
                Node::Terminal(group) => {
                    return group.majority().map(|leaf| leaf.value.as_str());
                },
            }
        }
    }

    /// Predict the class of each row of `table`.
    pub fn predict_all<'a>(&'a self, table: &Table) -> Vec<Option<&'a str>> {
        let labels = table.labels();
        table.rows()
            .iter()
            .map(|row| self.predict(labels, &row[..]))
            .collect()
    }

    /// Returns the JSON representation of this tree.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Returns the indented JSON representation of this tree.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a tree from its JSON representation.
    /// The `gain` of a decision node is optional.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the current decision tree to a JSON file.
    pub fn to_json_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut f, self)?;
        f.write_all(b"\n")?;
        f.flush()?;
        Ok(())
    }

    /// Read a decision tree from a JSON file.
    pub fn from_json_file<P>(path: P) -> Result<Self>
        where P: AsRef<Path>
    {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Returns the current decision tree in dot format.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("graph DecisionTree {\n");
        let (info, _) = self.root.to_dot_info(0);
        info.into_iter()
            .for_each(|row| dot.push_str(&row));
        dot.push_str("}\n");
        dot
    }

    /// Write the current decision tree to dot file.
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(self.to_dot().as_bytes())?;
        Ok(())
    }
}
