//! End-to-end tests for the admission pipeline
//!
//! Dataset → split → forest → confusion matrix → economic impact, through the
//! public API only.

use std::io::Write;
use valorar::config::{load_config, load_dataset, ValorarConfig};
use valorar::data::{train_test_split, Admission, CandidateFeatures, Dataset};
use valorar::eval::{economic_impact, ConfusionMatrix, EconomicParameters};
use valorar::pipeline::{evaluate, predict, run, train};
use valorar::{ConfigurationError, Error};

#[test]
fn test_scenario_dashboard_matrix() {
    let impact = economic_impact(
        &[[5_i64, 0, 0], [1, 3, 0], [0, 2, 9]],
        &EconomicParameters::new(vec![500.0, 1000.0, 1500.0], -300.0),
    )
    .unwrap();

    assert_eq!(impact.correct_value, 19_000.0);
    assert_eq!(impact.correct, 17);
    assert_eq!(impact.misclassified, 3);
    assert_eq!(impact.value(), 18_100.0);
    assert_eq!(impact.to_string(), "$18,100.00");
}

#[test]
fn test_scenario_perfect_classifier_ignores_penalty() {
    let impact = economic_impact(
        &[[2_i64, 0, 0], [0, 2, 0], [0, 0, 2]],
        &EconomicParameters::new(vec![1.0, 1.0, 1.0], -1000.0),
    )
    .unwrap();
    assert_eq!(impact.value(), 6.0);
}

#[test]
fn test_scenario_short_reward_vector() {
    let err = economic_impact(
        &[[5_i64, 0, 0], [1, 3, 0], [0, 2, 9]],
        &EconomicParameters::new(vec![500.0, 1000.0], -300.0),
    )
    .unwrap_err();
    assert_eq!(err, ConfigurationError::RewardLengthMismatch { rewards: 2, labels: 3 });
}

#[test]
fn test_scenario_negative_entry() {
    let err = economic_impact(
        &[[5_i64, 0, 0], [1, -3, 0], [0, 2, 9]],
        &EconomicParameters::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ConfigurationError::NegativeEntry { row: 1, col: 1, value: -3 }));
}

#[test]
fn test_full_pipeline_is_reproducible_with_default_forest() {
    let config = ValorarConfig::default();
    let first = run(&Dataset::candidates(), &config).unwrap();
    let second = run(&Dataset::candidates(), &config).unwrap();

    assert_eq!(first.evaluation.confusion, second.evaluation.confusion);
    assert_eq!(first.impact.value(), second.impact.value());
    assert_eq!(first, second);
}

#[test]
fn test_composed_steps_match_run() {
    let config = ValorarConfig { seed: 5, ..Default::default() };
    let dataset = Dataset::candidates();

    let (train_set, test_set) = train_test_split(&dataset, config.split.test_size, config.seed).unwrap();
    let model = train(&train_set, &config.forest, config.seed).unwrap();
    let evaluation = evaluate(&model, &test_set).unwrap();
    let impact = config.economics.evaluate(&evaluation.confusion).unwrap();

    let report = run(&dataset, &config).unwrap();
    assert_eq!(report.evaluation, evaluation);
    assert_eq!(report.impact, impact);
}

#[test]
fn test_prediction_is_reproducible() {
    let config = ValorarConfig::default();
    let candidate = CandidateFeatures::new(720.0, 85.0, 6.0, 31.0);

    let labels: Vec<Admission> = (0..2)
        .map(|_| {
            let model = train(&Dataset::candidates(), &config.forest, config.seed).unwrap();
            predict(&model, &candidate).unwrap().label
        })
        .collect();
    assert_eq!(labels[0], labels[1]);
}

#[test]
fn test_predict_range_error_is_reported_not_panicked() {
    let model = train(&Dataset::candidates(), &ValorarConfig::default().forest, 0).unwrap();
    let err = predict(&model, &CandidateFeatures::new(500.0, 30.0, 5.0, 101.0)).unwrap_err();
    assert!(matches!(err, Error::InvalidRange { field: "age", .. }));
}

#[test]
fn test_pipeline_from_config_and_dataset_files() {
    let dir = tempfile::TempDir::new().unwrap();

    let data_path = dir.path().join("candidates.yaml");
    let rows = serde_yaml::to_string(&Dataset::candidates()).unwrap();
    std::fs::write(&data_path, rows).unwrap();

    let config_path = dir.path().join("valorar.yaml");
    let mut config_file = std::fs::File::create(&config_path).unwrap();
    write!(
        config_file,
        "seed: 2\nsplit:\n  test_size: 0.2\nforest:\n  n_estimators: 15\ndata:\n  path: {}\n",
        data_path.display()
    )
    .unwrap();

    let config = load_config(&config_path).unwrap();
    let dataset = load_dataset(&config).unwrap();
    assert_eq!(dataset, Dataset::candidates());

    let report = run(&dataset, &config).unwrap();
    assert_eq!(report.n_test, 8);
    assert_eq!(report.n_train, 32);
    assert_eq!(report.evaluation.confusion.total(), 8);
}

#[test]
fn test_fixed_label_axis_on_single_class_test_set() {
    let actual = [2, 2, 2];
    let predicted = [2, 1, 2];
    let cm = ConfusionMatrix::from_labels(&actual, &predicted, Some(&Admission::indices())).unwrap();

    assert_eq!(cm.n_classes(), 3);
    let impact = EconomicParameters::default().evaluate(&cm).unwrap();
    assert_eq!(impact.value(), 2.0 * 1500.0 - 300.0);
}

#[test]
fn test_shipped_config_matches_defaults() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/valorar.yaml");
    assert_eq!(load_config(path).unwrap(), ValorarConfig::default());
}
