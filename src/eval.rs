//! Holdout partitioning and scoring.
//!
//! Randomness lives here, outside the induction engine: the recursion only
//! ever consumes precomputed index splits, which keeps training
//! deterministic and testable. Scoring reads a finished tree, so rows are
//! evaluated in parallel.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::data::{RowId, Value};
use crate::tree::TreeNode;

/// Split `0..n_rows` into `(training, validation)` observation indexes.
///
/// `holdout` is the fraction reserved for validation, rounded up to a whole
/// row count. The shuffle is seeded, so a fixed `(n_rows, holdout, seed)`
/// always yields the same split; the two sides are disjoint and together
/// cover every row exactly once.
pub fn holdout_split(n_rows: usize, holdout: f64, seed: u64) -> (Vec<RowId>, Vec<RowId>) {
    let mut rows: Vec<RowId> = (0..n_rows as RowId).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    rows.shuffle(&mut rng);

    let n_valid = (holdout * n_rows as f64).ceil() as usize;
    let validation = rows[..n_valid].to_vec();
    let training = rows[n_valid..].to_vec();
    (training, validation)
}

/// Fraction of observations whose predicted class matches `labels`.
///
/// Rows are scored with rayon; `decide` only reads the tree, so the
/// traversals are independent and the result is deterministic. An empty
/// set scores 0.0.
///
/// # Panics
///
/// Panics when `observations` and `labels` disagree in length.
pub fn accuracy(tree: &TreeNode, observations: &[Vec<Value>], labels: &[usize]) -> f64 {
    assert_eq!(
        observations.len(),
        labels.len(),
        "one label per observation"
    );
    if observations.is_empty() {
        return 0.0;
    }

    let hits = observations
        .par_iter()
        .zip(labels.par_iter())
        .filter(|(observation, &label)| tree.decide(observation) == label)
        .count();
    hits as f64 / labels.len() as f64
}
