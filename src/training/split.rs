//! Threshold search and bucketing for numeric features.
//!
//! The analyzer proposes a single binary threshold per split: every cut
//! point between distinct consecutive sorted values is evaluated with a
//! prefix-count sweep, and the one minimizing conditional entropy wins.
//! [`subindex`] and the tree representation stay generic over any threshold
//! count, so the representation does not bake the policy in.

use crate::data::RowId;

use super::entropy::{class_counts, h};

/// Best split found for one numeric feature.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSplit {
    /// Conditional entropy over the resulting buckets.
    pub cond_entropy: f64,
    /// Ordered threshold values. One entry under the binary policy.
    pub thresholds: Vec<f64>,
}

/// Find the entropy-minimizing binary threshold for `samples`.
///
/// `samples` are `(value, label)` pairs already restricted to the live
/// filter, with missing values removed by the caller. Candidate cut points
/// lie only between distinct consecutive sorted values — a split that would
/// separate two observations with an identical value is never proposed.
/// The winning threshold is the midpoint of the adjacent distinct values.
///
/// Returns `None` when fewer than two distinct values exist; the selector
/// treats that as "no useful split on this feature", which satisfies the
/// requirement that such a feature never beats the parent's entropy.
pub fn best_numeric_split(n_classes: usize, samples: &[(f64, usize)]) -> Option<NumericSplit> {
    if samples.len() < 2 {
        return None;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

    let total = sorted.len();
    let mut left_counts = vec![0usize; n_classes];
    let mut right_counts = class_counts(n_classes, sorted.iter().map(|&(_, label)| label));

    let mut best: Option<(f64, f64)> = None; // (cond_entropy, threshold)

    for i in 0..total - 1 {
        let (value, label) = sorted[i];
        left_counts[label] += 1;
        right_counts[label] -= 1;

        let next = sorted[i + 1].0;
        if next <= value {
            // Equal consecutive values: no legal cut here.
            continue;
        }

        let left_n = (i + 1) as f64;
        let right_n = (total - i - 1) as f64;
        let cond = (left_n * h(&left_counts) + right_n * h(&right_counts)) / total as f64;

        let improves = best.map_or(true, |(best_cond, _)| cond < best_cond);
        if improves {
            best = Some((cond, (value + next) / 2.0));
        }
    }

    best.map(|(cond_entropy, threshold)| NumericSplit {
        cond_entropy,
        thresholds: vec![threshold],
    })
}

/// Bucket index for `value` against ordered `thresholds`: the number of
/// thresholds at or below the value. A value exactly equal to a threshold
/// routes to the bucket above it.
#[inline]
pub fn bucket_of(thresholds: &[f64], value: f64) -> usize {
    thresholds.partition_point(|&threshold| threshold <= value)
}

/// Child filters for a numeric split.
///
/// Re-walks `filter` in order and routes each valued observation to its
/// bucket, producing `thresholds.len() + 1` filters of absolute observation
/// indexes. Empty buckets are preserved positionally so branch children
/// stay aligned with threshold order. Missing-valued rows are excluded:
/// they took no part in split evaluation, and at decision time a missing
/// value routes to bucket 0 instead.
pub fn subindex(values: &[Option<f64>], filter: &[RowId], thresholds: &[f64]) -> Vec<Vec<RowId>> {
    let mut buckets = vec![Vec::new(); thresholds.len() + 1];
    for &row in filter {
        if let Some(value) = values[row as usize] {
            buckets[bucket_of(thresholds, value)].push(row);
        }
    }
    buckets
}
