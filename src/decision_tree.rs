//! Defines the ID3 decision tree over categorical features.

/// Defines the decision tree algorithm.
pub mod dtree;
/// Defines the classifier produced by `DecisionTree`.
pub mod classifier;
/// Defines the tree model: decision nodes, branches, and leaves.
pub mod node;
mod builder;


pub use builder::DecisionTreeBuilder;
pub use classifier::DecisionTreeClassifier;
pub use dtree::DecisionTree;
pub use node::{
    DecisionNode,
    Leaf,
    LeafGroup,
    Node,
    NodeBranch,
    TreeVisitor,
};
