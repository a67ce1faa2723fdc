//! dtree: classification decision trees with entropy-driven induction.
//!
//! Training consumes a fully encoded [`data::Dataset`] — an upstream
//! featurization layer has already mapped raw records to category codes and
//! numeric values — and grows an owned recursive [`tree::TreeNode`] by
//! repeatedly selecting the feature whose split maximizes information gain.
//! Partitioning is expressed as arrays of observation indexes ("filters"),
//! never as copies of the data.
//!
//! ```rust,ignore
//! use dtree::data::{Dataset, Settings};
//! use dtree::training::train;
//!
//! let dataset = Dataset::new(2, outcomes, features)?;
//! let filter: Vec<u32> = (0..dataset.n_rows() as u32).collect();
//! let usable: Vec<usize> = (0..dataset.n_features()).collect();
//! let tree = train(&dataset, &filter, &usable, &Settings::default());
//! let class = tree.decide(&encoded_row);
//! ```

pub mod data;
pub mod eval;
pub mod training;
pub mod tree;
