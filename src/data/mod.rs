//! Encoded training data, observation values, and tunables.

mod dataset;

pub use dataset::{Dataset, DatasetError, Feature, RowId, Settings, Value};
