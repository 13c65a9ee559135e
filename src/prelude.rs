//! Exports the decision tree, the entropy measures, and the table reader.
//!
pub use crate::decision_tree::{
    // Tree builder
    DecisionTreeBuilder,
    DecisionTree,


    // Tree model
    DecisionTreeClassifier,
    Node,
    DecisionNode,
    NodeBranch,
    LeafGroup,
    Leaf,
    TreeVisitor,
};


pub use crate::entropy::{
    // Entropy trait
    Entropy,
    Measure,
};


pub use crate::sample::{
    Table,
    TableReader,
};


pub use crate::error::{
    Result,
    TreeError,
};
