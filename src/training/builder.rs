//! Recursive tree construction.
//!
//! [`train`] is the crate's training entry point: a depth-first recursion
//! that either terminates a node into a leaf or asks the selector for the
//! winning feature and recurses into the resulting child filters. Each
//! invocation owns its filter and feature set and never mutates a parent's,
//! so the recursion is pure and deterministic; the dataset is only ever
//! read.

use crate::data::{Dataset, Feature, RowId, Settings};
use crate::tree::TreeNode;

use super::entropy::class_counts;
use super::logger::TrainingLogger;
use super::selector::{select_feature, SplitPlan};
use super::split::subindex;

/// Why a node terminated into a leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeafReason {
    /// Every feature has been consumed on this path.
    NoFeatures,
    /// The filter reached `min_leaf` size (the size is recorded).
    MinLeaf(usize),
    /// No remaining feature offers a positive-gain split.
    NoPositiveGain,
}

/// Grow a classification tree over the observations in `filter`, using the
/// feature indexes in `features`.
///
/// A node becomes a leaf (majority class over the filtered outcomes) when
/// `features` is empty, when `filter.len() <= settings.min_leaf`, or when
/// the selector finds no positive-gain candidate. Otherwise the winning
/// feature is removed from the set for the whole subtree and one child is
/// grown per category code or threshold bucket; an empty child filter
/// becomes a leaf carrying the parent's majority class rather than
/// recursing into no data.
///
/// Recursion depth is bounded by `features.len()`. Calling twice with
/// identical inputs yields structurally identical trees.
pub fn train(
    dataset: &Dataset,
    filter: &[RowId],
    features: &[usize],
    settings: &Settings,
) -> TreeNode {
    let mut logger = TrainingLogger::new(settings.verbosity);
    logger.start(filter.len(), features.len());
    let root = grow(dataset, filter, features, settings, &mut logger, 0);
    logger.finish(root.n_leaves(), root.depth());
    root
}

fn grow(
    dataset: &Dataset,
    filter: &[RowId],
    features: &[usize],
    settings: &Settings,
    logger: &mut TrainingLogger,
    depth: usize,
) -> TreeNode {
    if features.is_empty() {
        return leaf(dataset, filter, logger, depth, LeafReason::NoFeatures);
    }
    if filter.len() <= settings.min_leaf {
        return leaf(dataset, filter, logger, depth, LeafReason::MinLeaf(filter.len()));
    }
    let Some(split) = select_feature(dataset, filter, features) else {
        return leaf(dataset, filter, logger, depth, LeafReason::NoPositiveGain);
    };

    // Features are used at most once per root-to-leaf path.
    let remaining: Vec<usize> = features
        .iter()
        .copied()
        .filter(|&feature| feature != split.feature)
        .collect();
    let default = majority_class(dataset, filter);
    logger.log_split(depth, split.feature, split.gain);

    match split.plan {
        SplitPlan::Categorical { groups } => {
            let children = groups
                .iter()
                .map(|child_filter| {
                    grow_child(dataset, child_filter, &remaining, settings, logger, depth, default)
                })
                .collect();
            TreeNode::CategoricalBranch {
                feature: split.feature,
                default,
                children,
            }
        }
        SplitPlan::Numeric { thresholds } => {
            let Feature::Numeric { values } = dataset.feature(split.feature) else {
                unreachable!("selector produced a numeric plan for a categorical feature");
            };
            let children = subindex(values, filter, &thresholds)
                .iter()
                .map(|child_filter| {
                    grow_child(dataset, child_filter, &remaining, settings, logger, depth, default)
                })
                .collect();
            TreeNode::NumericBranch {
                feature: split.feature,
                default,
                thresholds,
                children,
            }
        }
    }
}

/// Recurse into a child filter, or emit a default-class leaf when the
/// filter is empty (never recurse into no data).
#[allow(clippy::too_many_arguments)]
fn grow_child(
    dataset: &Dataset,
    child_filter: &[RowId],
    remaining: &[usize],
    settings: &Settings,
    logger: &mut TrainingLogger,
    depth: usize,
    default: usize,
) -> TreeNode {
    if child_filter.is_empty() {
        TreeNode::Leaf { class: default }
    } else {
        grow(dataset, child_filter, remaining, settings, logger, depth + 1)
    }
}

fn leaf(
    dataset: &Dataset,
    filter: &[RowId],
    logger: &TrainingLogger,
    depth: usize,
    reason: LeafReason,
) -> TreeNode {
    let class = majority_class(dataset, filter);
    logger.log_leaf(depth, class, &reason);
    TreeNode::Leaf { class }
}

/// Majority vote over the labels in `filter`. Ties resolve to the lowest
/// class index reaching the maximum count, keeping leaves deterministic.
fn majority_class(dataset: &Dataset, filter: &[RowId]) -> usize {
    let counts = class_counts(
        dataset.n_classes(),
        filter.iter().map(|&row| dataset.outcomes()[row as usize]),
    );
    let mut best = 0;
    for (class, &count) in counts.iter().enumerate() {
        if count > counts[best] {
            best = class;
        }
    }
    best
}
