//! End-to-end pipeline tests: split, train, evaluate.

use dtree::data::{Dataset, Feature, RowId, Settings};
use dtree::eval::{accuracy, holdout_split};
use dtree::training::train;

/// 16 rows, two classes, fully determined by the categorical feature.
/// The numeric feature is noise and should not hurt evaluation.
fn separable_dataset() -> Dataset {
    let outcomes: Vec<usize> = (0..16).map(|row| row % 2).collect();
    let even: Vec<RowId> = (0..16).filter(|row| row % 2 == 0).collect();
    let odd: Vec<RowId> = (0..16).filter(|row| row % 2 == 1).collect();
    let noise: Vec<Option<f64>> = (0..16).map(|row| Some((row % 5) as f64)).collect();

    Dataset::new(
        2,
        outcomes,
        vec![
            Feature::Categorical {
                groups: vec![even, odd],
            },
            Feature::Numeric { values: noise },
        ],
    )
    .expect("valid dataset")
}

#[test]
fn holdout_pipeline_reaches_full_accuracy_on_separable_data() {
    let dataset = separable_dataset();
    let settings = Settings::default().validated().expect("valid settings");

    let (training, validation) = holdout_split(dataset.n_rows(), settings.holdout, 7);
    assert!(!training.is_empty());
    assert!(!validation.is_empty());

    let features: Vec<usize> = (0..dataset.n_features()).collect();
    let tree = train(&dataset, &training, &features, &settings);

    let train_obs = dataset.observations(&training);
    let train_labels: Vec<usize> = training
        .iter()
        .map(|&row| dataset.outcomes()[row as usize])
        .collect();
    assert_eq!(accuracy(&tree, &train_obs, &train_labels), 1.0);

    // The class is a pure function of the feature, so holdout rows
    // classify perfectly too.
    let valid_obs = dataset.observations(&validation);
    let valid_labels: Vec<usize> = validation
        .iter()
        .map(|&row| dataset.outcomes()[row as usize])
        .collect();
    assert_eq!(accuracy(&tree, &valid_obs, &valid_labels), 1.0);
}

#[test]
fn split_fractions_partition_the_rows() {
    let dataset = separable_dataset();
    let (training, validation) = holdout_split(dataset.n_rows(), 0.25, 42);

    assert_eq!(validation.len(), 4);
    assert_eq!(training.len(), 12);

    let mut all: Vec<RowId> = training.iter().chain(validation.iter()).copied().collect();
    all.sort_unstable();
    let expected: Vec<RowId> = (0..dataset.n_rows() as RowId).collect();
    assert_eq!(all, expected);
}

#[test]
fn min_leaf_larger_than_the_dataset_collapses_to_a_single_leaf() {
    let dataset = separable_dataset();
    let settings = Settings {
        min_leaf: dataset.n_rows() + 1,
        ..Default::default()
    };
    let filter: Vec<RowId> = (0..dataset.n_rows() as RowId).collect();
    let features: Vec<usize> = (0..dataset.n_features()).collect();

    let tree = train(&dataset, &filter, &features, &settings);
    assert_eq!(tree.n_leaves(), 1);
    assert_eq!(tree.depth(), 0);
}
