//! Defines the inner representation
//! of the decision tree produced by `DecisionTree`.
use serde::{Serialize, Deserialize};


/// A terminal outcome bucket:
/// a target class and the number of rows that reached it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaf {
    /// The target class.
    pub value: String,
    /// The number of rows whose target is `value`.
    pub count: usize,
}


impl Leaf {
    /// Returns a new `Leaf`.
    pub fn new<S: Into<String>>(value: S, count: usize) -> Self {
        Self { value: value.into(), count }
    }
}


/// The leaves emitted when the recursion stops.
/// One `Leaf` per distinct target class,
/// in the order the classes were first seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeafGroup {
    leaves: Vec<Leaf>,
}


impl LeafGroup {
    /// Returns a new `LeafGroup`.
    pub fn new(leaves: Vec<Leaf>) -> Self {
        Self { leaves }
    }

    /// Returns the leaves.
    pub fn leaves(&self) -> &[Leaf] {
        &self.leaves[..]
    }

    /// Returns the number of rows that reached this group.
    pub fn total(&self) -> usize {
        self.leaves.iter().map(|leaf| leaf.count).sum()
    }

    /// Returns the most frequent class.
    /// Ties go to the class seen first.
    pub fn majority(&self) -> Option<&Leaf> {
        self.leaves.iter()
            .reduce(|best, leaf| if leaf.count > best.count { leaf } else { best })
    }
}


/// Represents the decision nodes of the tree.
/// A decision node has one branch per observed value
/// of the feature `label`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionNode {
    pub(super) label: String,
    #[serde(default)]
    pub(super) gain: f64,
    pub(super) branches: Vec<NodeBranch>,
}


impl DecisionNode {
    /// Returns the name of the feature this node splits on.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the information gain of the split.
    pub fn gain(&self) -> f64 {
        self.gain
    }

    /// Returns the branches in the order their values were first seen.
    pub fn branches(&self) -> &[NodeBranch] {
        &self.branches[..]
    }
}


/// An edge from a `DecisionNode`,
/// keyed by one value of the node's feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeBranch {
    pub(super) value: String,
    pub(super) children: Node,
}


impl NodeBranch {
    /// Returns a new `NodeBranch`.
    pub fn new<S: Into<String>>(value: S, children: Node) -> Self {
        Self { value: value.into(), children }
    }

    /// Returns the feature value of this branch.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the subtree below this branch.
    pub fn children(&self) -> &Node {
        &self.children
    }
}


/// Enumeration of `DecisionNode` and `LeafGroup`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// A node that splits on a feature.
    Internal(DecisionNode),


    /// A node that reports target counts.
    Terminal(LeafGroup),
}


/// A read-only, pre-order traversal over a tree.
/// `depth` is `0` at the root.
pub trait TreeVisitor {
    /// Called on each decision node before its branches.
    fn visit_decision(&mut self, node: &DecisionNode, depth: usize);

    /// Called on each leaf group.
    fn visit_leaves(&mut self, leaves: &LeafGroup, depth: usize);
}


impl Node {
    /// Returns a decision node.
    pub fn internal<S: Into<String>>(
        label:    S,
        gain:     f64,
        branches: Vec<NodeBranch>,
    ) -> Self
    {
        Self::Internal(DecisionNode { label: label.into(), gain, branches, })
    }

    /// Returns a leaf group.
    pub fn terminal(leaves: Vec<Leaf>) -> Self {
        Self::Terminal(LeafGroup::new(leaves))
    }

    /// Drive `visitor` over this subtree.
    pub fn walk<V>(&self, visitor: &mut V)
        where V: TreeVisitor + ?Sized,
    {
        self.walk_at(visitor, 0);
    }

    fn walk_at<V>(&self, visitor: &mut V, depth: usize)
        where V: TreeVisitor + ?Sized,
    {
        match self {
            Self::Internal(node) => {
                visitor.visit_decision(node, depth);
                for branch in node.branches.iter() {
                    branch.children.walk_at(visitor, depth + 1);
                }
            },
            Self::Terminal(leaves) => {
                visitor.visit_leaves(leaves, depth);
            },
        }
    }

    /// Returns `true` if `self` and `other` split on the same features
    /// with the same branch values in the same order,
    /// and end in the same leaves.
    /// The gains are ignored.
    pub fn same_structure(&self, other: &Node) -> bool {
        match (self, other) {
            (Self::Internal(lhs), Self::Internal(rhs)) => {
                lhs.label == rhs.label
                    && lhs.branches.len() == rhs.branches.len()
                    && lhs.branches.iter()
                        .zip(rhs.branches.iter())
                        .all(|(l, r)| {
                            l.value == r.value
                                && l.children.same_structure(&r.children)
                        })
            },
            (Self::Terminal(lhs), Self::Terminal(rhs)) => lhs == rhs,
            _ => false,
        }
    }

    /// Returns the dot statements of this subtree
    /// and the next unused node id.
    /// `id` is the id of this node.
    pub(crate) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Self::Internal(node) => {
                let mut info = vec![format!(
                    "\tnode_{id} [ label = \"{label}\" ];\n",
                    label = escape(&node.label),
                )];

                let mut next_id = id + 1;
                for branch in node.branches.iter() {
                    let child_id = next_id;
                    let (mut child, ret_id) = branch.children
                        .to_dot_info(child_id);
                    info.append(&mut child);

                    let edge = format!(
                        "\tnode_{id} -- node_{child_id} [ label = \"{value}\" ];\n",
                        value = escape(&branch.value),
                    );
                    info.push(edge);
                    next_id = ret_id;
                }

                (info, next_id)
            },
            Self::Terminal(group) => {
                let label = group.leaves.iter()
                    .map(|leaf| format!("{} ({})", escape(&leaf.value), leaf.count))
                    .collect::<Vec<_>>()
                    .join("\\n");
                let info = format!(
                    "\tnode_{id} [ label = \"{label}\", shape = box ];\n",
                );

                (vec![info], id + 1)
            },
        }
    }
}


/// Escape a string for a quoted dot identifier.
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
