//! Shannon entropy over class-count distributions.

/// Shannon entropy (base 2) of the distribution obtained by normalizing
/// `counts`:
///
/// ```text
/// h = -Σ_k p_k · log2(p_k),   p_k = counts[k] / Σ counts
/// ```
///
/// `0 log 0` contributes 0, so a pure distribution has entropy 0. An empty
/// or all-zero `counts` also gives 0.
pub fn h(counts: &[usize]) -> f64 {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;

    let mut entropy = 0.0;
    for &count in counts {
        if count > 0 {
            let p = count as f64 / total;
            entropy -= p * p.log2();
        }
    }
    entropy
}

/// Count occurrences of each class over `labels`.
///
/// Labels must be below `n_classes`; [`Dataset::new`](crate::data::Dataset::new)
/// guarantees that for anything coming out of a dataset.
pub fn class_counts(n_classes: usize, labels: impl IntoIterator<Item = usize>) -> Vec<usize> {
    let mut counts = vec![0usize; n_classes];
    for label in labels {
        counts[label] += 1;
    }
    counts
}

/// Weighted average entropy over `partitions`, each a list of class labels.
///
/// Weights are partition sizes relative to the total across all partitions,
/// so empty partitions contribute nothing. This is the conditional entropy
/// H(class | partition) used both for categorical features (one partition
/// per category) and for evaluating a candidate numeric split (one
/// partition per bucket).
pub fn conditional_entropy(n_classes: usize, partitions: &[Vec<usize>]) -> f64 {
    let total: usize = partitions.iter().map(Vec::len).sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;

    partitions
        .iter()
        .filter(|partition| !partition.is_empty())
        .map(|partition| {
            let counts = class_counts(n_classes, partition.iter().copied());
            (partition.len() as f64 / total) * h(&counts)
        })
        .sum()
}
