//! The trained tree model and its decision procedure.

use serde::{Deserialize, Serialize};

use crate::data::Value;
use crate::training::split::bucket_of;

/// A trained classification tree node.
///
/// An owned recursive sum type: trees contain no cycles, so children are
/// held directly by value. Nodes are created bottom-up by the builder and
/// read-only thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TreeNode {
    /// Terminal node holding the predicted class.
    Leaf {
        class: usize,
    },
    /// Split on a categorical feature: one child per category code in the
    /// feature's domain.
    CategoricalBranch {
        /// Feature index the split reads.
        feature: usize,
        /// Majority class over the rows that reached this node; used when
        /// a category code was unseen at training time.
        default: usize,
        children: Vec<TreeNode>,
    },
    /// Split on a numeric feature: `thresholds.len() + 1` children in
    /// bucket order.
    NumericBranch {
        feature: usize,
        /// Majority class over the rows that reached this node.
        default: usize,
        /// Ordered split thresholds.
        thresholds: Vec<f64>,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    /// Predict the class for one encoded observation.
    ///
    /// `observation` holds one [`Value`] per feature, indexed the same way
    /// as the training features. An unseen category code and a missing
    /// categorical value resolve to the branch default; a missing numeric
    /// value routes to bucket 0; a value exactly equal to a threshold
    /// routes to the bucket above it.
    ///
    /// # Panics
    ///
    /// Panics when the observation's value kind contradicts the branch
    /// kind (a numeric value at a categorical branch, or a category code
    /// at a numeric branch). That is a featurization contract violation,
    /// not a runtime condition to recover from.
    pub fn decide(&self, observation: &[Value]) -> usize {
        match self {
            TreeNode::Leaf { class } => *class,
            TreeNode::CategoricalBranch {
                feature,
                default,
                children,
            } => match observation[*feature] {
                Value::Categorical(code) => children
                    .get(code as usize)
                    .map_or(*default, |child| child.decide(observation)),
                Value::Missing => *default,
                Value::Numeric(_) => {
                    panic!("feature {feature}: numeric value at a categorical branch")
                }
            },
            TreeNode::NumericBranch {
                feature,
                thresholds,
                children,
                ..
            } => {
                let bucket = match observation[*feature] {
                    Value::Numeric(value) => bucket_of(thresholds, value),
                    Value::Missing => 0,
                    Value::Categorical(_) => {
                        panic!("feature {feature}: category code at a numeric branch")
                    }
                };
                children[bucket].decide(observation)
            }
        }
    }

    /// Number of leaves in this subtree.
    pub fn n_leaves(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::CategoricalBranch { children, .. }
            | TreeNode::NumericBranch { children, .. } => {
                children.iter().map(TreeNode::n_leaves).sum()
            }
        }
    }

    /// Depth of this subtree; a lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 0,
            TreeNode::CategoricalBranch { children, .. }
            | TreeNode::NumericBranch { children, .. } => {
                1 + children.iter().map(TreeNode::depth).max().unwrap_or(0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric_tree() -> TreeNode {
        TreeNode::NumericBranch {
            feature: 0,
            default: 0,
            thresholds: vec![2.5],
            children: vec![TreeNode::Leaf { class: 0 }, TreeNode::Leaf { class: 1 }],
        }
    }

    fn categorical_tree() -> TreeNode {
        TreeNode::CategoricalBranch {
            feature: 0,
            default: 1,
            children: vec![TreeNode::Leaf { class: 0 }, TreeNode::Leaf { class: 1 }],
        }
    }

    #[test]
    fn leaf_decides_immediately() {
        let tree = TreeNode::Leaf { class: 3 };
        assert_eq!(tree.decide(&[]), 3);
    }

    #[test]
    fn numeric_branch_routes_by_threshold() {
        let tree = numeric_tree();
        assert_eq!(tree.decide(&[Value::Numeric(2.0)]), 0);
        assert_eq!(tree.decide(&[Value::Numeric(3.0)]), 1);
        // Exactly on the threshold: deterministically the upper bucket.
        assert_eq!(tree.decide(&[Value::Numeric(2.5)]), 1);
    }

    #[test]
    fn missing_numeric_value_routes_to_bucket_zero() {
        let tree = numeric_tree();
        assert_eq!(tree.decide(&[Value::Missing]), 0);
    }

    #[test]
    fn unseen_category_code_resolves_to_default() {
        let tree = categorical_tree();
        assert_eq!(tree.decide(&[Value::Categorical(0)]), 0);
        assert_eq!(tree.decide(&[Value::Categorical(9)]), 1);
        assert_eq!(tree.decide(&[Value::Missing]), 1);
    }

    #[test]
    #[should_panic(expected = "numeric value at a categorical branch")]
    fn kind_mismatch_is_a_contract_violation() {
        categorical_tree().decide(&[Value::Numeric(1.0)]);
    }

    #[test]
    fn leaf_count_and_depth_walk_the_whole_tree() {
        let tree = TreeNode::CategoricalBranch {
            feature: 1,
            default: 0,
            children: vec![numeric_tree(), TreeNode::Leaf { class: 1 }],
        };
        assert_eq!(tree.n_leaves(), 3);
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn tree_round_trips_through_serde() {
        let tree = TreeNode::CategoricalBranch {
            feature: 1,
            default: 0,
            children: vec![numeric_tree(), TreeNode::Leaf { class: 1 }],
        };
        let json = serde_json::to_string(&tree).unwrap();
        let back: TreeNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tree);
    }
}
