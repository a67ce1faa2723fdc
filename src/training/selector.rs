//! Candidate evaluation and winning-feature selection.

use crate::data::{Dataset, Feature, RowId};

use super::entropy::{class_counts, conditional_entropy, h};
use super::split::{best_numeric_split, NumericSplit};

/// How the winning feature partitions its node.
#[derive(Debug, Clone, PartialEq)]
pub enum SplitPlan {
    /// One child per category code in the feature's domain. Carries the
    /// per-category filters already restricted to the node, so the builder
    /// does not intersect twice.
    Categorical { groups: Vec<Vec<RowId>> },
    /// One child per threshold bucket.
    Numeric { thresholds: Vec<f64> },
}

/// The selector's verdict for one node.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedSplit {
    /// Index of the winning feature.
    pub feature: usize,
    /// Information gain of the winning split.
    pub gain: f64,
    /// How to partition the node's filter.
    pub plan: SplitPlan,
}

/// Evaluate every feature in `remaining` against `filter` and pick the one
/// whose best split maximizes information gain.
///
/// Candidates with non-positive gain are discarded; `None` means no useful
/// split exists and the caller must terminate the node into a leaf. Ties
/// keep the first maximal candidate in `remaining` order (strict `>`
/// replacement), so selection is deterministic for a fixed input.
pub fn select_feature(
    dataset: &Dataset,
    filter: &[RowId],
    remaining: &[usize],
) -> Option<SelectedSplit> {
    let labels = filter.iter().map(|&row| dataset.outcomes()[row as usize]);
    let initial_entropy = h(&class_counts(dataset.n_classes(), labels));

    let mut best: Option<SelectedSplit> = None;

    for &feature in remaining {
        let restricted = dataset.feature(feature).filtered_by(filter, dataset.n_rows());
        let candidate = match restricted {
            Feature::Categorical { groups } => {
                let partitions: Vec<Vec<usize>> = groups
                    .iter()
                    .map(|group| {
                        group
                            .iter()
                            .map(|&row| dataset.outcomes()[row as usize])
                            .collect()
                    })
                    .collect();
                let cond = conditional_entropy(dataset.n_classes(), &partitions);
                Some((cond, SplitPlan::Categorical { groups }))
            }
            Feature::Numeric { values } => {
                // Positions in `values` are filter-relative; pair each
                // valued entry with the label of the row it came from.
                let samples: Vec<(f64, usize)> = values
                    .iter()
                    .zip(filter)
                    .filter_map(|(value, &row)| {
                        value.map(|v| (v, dataset.outcomes()[row as usize]))
                    })
                    .collect();
                best_numeric_split(dataset.n_classes(), &samples).map(
                    |NumericSplit {
                         cond_entropy,
                         thresholds,
                     }| (cond_entropy, SplitPlan::Numeric { thresholds }),
                )
            }
        };

        let Some((cond, plan)) = candidate else {
            continue;
        };
        let gain = initial_entropy - cond;
        if gain <= 0.0 {
            continue;
        }
        if best.as_ref().map_or(true, |b| gain > b.gain) {
            best = Some(SelectedSplit {
                feature,
                gain,
                plan,
            });
        }
    }

    best
}
