//! Encoded dataset abstraction.
//!
//! The induction engine never sees raw records: every observation arrives
//! already encoded, either as a category code or as a numeric value. This
//! module holds those encodings and validates their shape once, at
//! construction time. During training, all partitioning is expressed as
//! arrays of observation indexes into the encodings ("filters") rather than
//! materialized row copies.

use serde::{Deserialize, Serialize};

use crate::training::Verbosity;

/// Type alias for observation (row) indexes.
pub type RowId = u32;

/// One encoded cell of an observation, as consumed by
/// [`TreeNode::decide`](crate::tree::TreeNode::decide).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Category code for a categorical feature.
    Categorical(u32),
    /// Value for a numeric feature.
    Numeric(f64),
    /// Missing value.
    Missing,
}

/// A single encoded feature across all observations.
///
/// Both encodings are consumed exhaustively at every site (split selection,
/// filtering, subindexing); adding a variant is a deliberate API change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Feature {
    /// Inverted index: one group per category code, each listing the
    /// observation indexes whose value equals that code, ascending. Rows
    /// with a missing value appear in no group.
    Categorical { groups: Vec<Vec<RowId>> },
    /// Dense column: one entry per observation, `None` meaning missing.
    /// Position equals observation index.
    Numeric { values: Vec<Option<f64>> },
}

impl Feature {
    /// Restrict this encoding to the observation indexes in `filter`.
    ///
    /// - Categorical: each group is intersected with the filter, keeping
    ///   the group's original relative order.
    /// - Numeric: values are gathered in `filter` order. Positions in the
    ///   result are filter-relative, not absolute observation indexes;
    ///   [`subindex`](crate::training::subindex) is what maps bucketed
    ///   positions back to absolute indexes.
    pub fn filtered_by(&self, filter: &[RowId], n_rows: usize) -> Feature {
        match self {
            Feature::Categorical { groups } => {
                let mut live = vec![false; n_rows];
                for &row in filter {
                    live[row as usize] = true;
                }
                let groups = groups
                    .iter()
                    .map(|group| {
                        group
                            .iter()
                            .copied()
                            .filter(|&row| live[row as usize])
                            .collect()
                    })
                    .collect();
                Feature::Categorical { groups }
            }
            Feature::Numeric { values } => {
                let values = filter.iter().map(|&row| values[row as usize]).collect();
                Feature::Numeric { values }
            }
        }
    }
}

/// Dataset and settings validation errors.
///
/// These surface contract violations at the boundary between featurization
/// and the core; once a [`Dataset`] exists the engine never re-validates.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DatasetError {
    #[error("feature {feature}: expected {expected} rows, got {got}")]
    RowCountMismatch {
        feature: usize,
        expected: usize,
        got: usize,
    },

    #[error("feature {feature}: observation index {row} out of range ({rows} rows)")]
    RowOutOfRange {
        feature: usize,
        row: RowId,
        rows: usize,
    },

    #[error("observation {row}: label {label} out of range for {n_classes} classes")]
    LabelOutOfRange {
        row: usize,
        label: usize,
        n_classes: usize,
    },

    #[error("class count must be at least 1")]
    NoClasses,

    #[error("holdout fraction {0} outside [0, 1)")]
    InvalidHoldout(f64),
}

/// The full training set: class count, per-observation labels, and one
/// encoding per feature in a fixed order. Immutable once built, so it may
/// be shared read-only across concurrent training runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    n_classes: usize,
    outcomes: Vec<usize>,
    features: Vec<Feature>,
}

impl Dataset {
    /// Create a dataset from labels and feature encodings.
    ///
    /// Validates that every label is below `n_classes`, every numeric
    /// encoding covers exactly one entry per observation, and every
    /// categorical group member is a real observation index. Regression
    /// (continuous labels) is unsupported by construction: labels are
    /// class indexes, and a float label that survives a lossy cast at the
    /// featurization boundary still lands here as [`DatasetError::LabelOutOfRange`].
    pub fn new(
        n_classes: usize,
        outcomes: Vec<usize>,
        features: Vec<Feature>,
    ) -> Result<Self, DatasetError> {
        if n_classes == 0 {
            return Err(DatasetError::NoClasses);
        }

        let n_rows = outcomes.len();
        for (row, &label) in outcomes.iter().enumerate() {
            if label >= n_classes {
                return Err(DatasetError::LabelOutOfRange {
                    row,
                    label,
                    n_classes,
                });
            }
        }

        for (feature, encoding) in features.iter().enumerate() {
            match encoding {
                Feature::Categorical { groups } => {
                    for group in groups {
                        for &row in group {
                            if row as usize >= n_rows {
                                return Err(DatasetError::RowOutOfRange {
                                    feature,
                                    row,
                                    rows: n_rows,
                                });
                            }
                        }
                    }
                }
                Feature::Numeric { values } => {
                    if values.len() != n_rows {
                        return Err(DatasetError::RowCountMismatch {
                            feature,
                            expected: n_rows,
                            got: values.len(),
                        });
                    }
                }
            }
        }

        Ok(Self {
            n_classes,
            outcomes,
            features,
        })
    }

    /// Number of observations.
    pub fn n_rows(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of distinct class labels.
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Number of features.
    pub fn n_features(&self) -> usize {
        self.features.len()
    }

    /// Observation index → class label.
    pub fn outcomes(&self) -> &[usize] {
        &self.outcomes
    }

    /// Encoding of one feature.
    pub fn feature(&self, index: usize) -> &Feature {
        &self.features[index]
    }

    /// All feature encodings, in fixed order.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Decode the encodings back into per-row value vectors for the rows
    /// in `filter`, in filter order.
    ///
    /// This is the bridge from training-side encodings to the
    /// [`decide`](crate::tree::TreeNode::decide)-side observation layout;
    /// the holdout scoring layer uses it to classify validation rows. The
    /// categorical inverted index is decoded once per feature.
    pub fn observations(&self, filter: &[RowId]) -> Vec<Vec<Value>> {
        let columns: Vec<Vec<Value>> = self
            .features
            .iter()
            .map(|feature| match feature {
                Feature::Categorical { groups } => {
                    let mut column = vec![Value::Missing; self.n_rows()];
                    for (code, group) in groups.iter().enumerate() {
                        for &row in group {
                            column[row as usize] = Value::Categorical(code as u32);
                        }
                    }
                    column
                }
                Feature::Numeric { values } => values
                    .iter()
                    .map(|value| value.map_or(Value::Missing, Value::Numeric))
                    .collect(),
            })
            .collect();

        filter
            .iter()
            .map(|&row| columns.iter().map(|column| column[row as usize]).collect())
            .collect()
    }
}

/// Training tunables.
///
/// Use struct construction with `..Default::default()` for convenient
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Filter size at or below which a node becomes a leaf regardless of
    /// gain. Zero is legal: only empty filters terminate early then.
    pub min_leaf: usize,
    /// Fraction of observations reserved for validation. Consumed by the
    /// evaluation layer ([`holdout_split`](crate::eval::holdout_split)),
    /// never by the recursion itself.
    pub holdout: f64,
    /// Verbosity level for training output.
    pub verbosity: Verbosity,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_leaf: 1,
            holdout: 0.2,
            verbosity: Verbosity::default(),
        }
    }
}

impl Settings {
    /// Validate field ranges, consuming and returning the settings.
    pub fn validated(self) -> Result<Self, DatasetError> {
        if !self.holdout.is_finite() || !(0.0..1.0).contains(&self.holdout) {
            return Err(DatasetError::InvalidHoldout(self.holdout));
        }
        Ok(self)
    }
}
