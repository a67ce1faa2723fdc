//! Tree induction: entropy mathematics, split search, and the recursive
//! builder.
//!
//! - [`entropy`]: Shannon entropy and conditional entropy over class counts
//! - [`split`]: numeric threshold search and bucketing
//! - [`selector`]: per-node winning-feature selection
//! - [`builder`]: the recursive partitioner, entered through [`train`]
//! - [`logger`]: leveled training output

pub mod builder;
pub mod entropy;
pub mod logger;
pub mod selector;
pub mod split;

pub use builder::{train, LeafReason};
pub use logger::{TrainingLogger, Verbosity};
pub use selector::{select_feature, SelectedSplit, SplitPlan};
pub use split::{best_numeric_split, bucket_of, subindex, NumericSplit};
