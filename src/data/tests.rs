use super::*;
use crate::error::{ConfigurationError, Error};
use std::io::Write;

#[test]
fn test_candidates_has_forty_rows() {
    let dataset = Dataset::candidates();
    assert_eq!(dataset.len(), N_CANDIDATES);
    assert_eq!(dataset.feature_matrix().len(), 40);
    assert!(dataset.feature_matrix().iter().all(|row| row.len() == N_FEATURES));
}

#[test]
fn test_candidates_class_balance() {
    let dataset = Dataset::candidates();
    assert_eq!(dataset.class_counts(), [18, 10, 12]);
}

#[test]
fn test_candidates_first_and_last_rows() {
    let dataset = Dataset::candidates();
    let first = dataset.samples()[0];
    assert_eq!(first.features, CandidateFeatures::new(780.0, 4.0, 3.0, 25.0));
    assert_eq!(first.label, Admission::Admitted);

    let last = dataset.samples()[39];
    assert_eq!(last.features, CandidateFeatures::new(790.0, 3.7, 5.0, 31.0));
    assert_eq!(last.label, Admission::Admitted);
}

#[test]
fn test_admission_try_from() {
    assert_eq!(Admission::try_from(0).unwrap(), Admission::Rejected);
    assert_eq!(Admission::try_from(1).unwrap(), Admission::Waitlisted);
    assert_eq!(Admission::try_from(2).unwrap(), Admission::Admitted);
    assert_eq!(Admission::try_from(3), Err(ConfigurationError::UnknownLabel(3)));
    assert_eq!(Admission::try_from(-1), Err(ConfigurationError::UnknownLabel(-1)));
}

#[test]
fn test_admission_messages_are_distinct() {
    let messages: std::collections::HashSet<_> =
        Admission::ALL.iter().map(|a| a.message()).collect();
    assert_eq!(messages.len(), 3);
    assert_eq!(Admission::Admitted.message(), "Candidate admitted");
}

#[test]
fn test_feature_order_matches_vector() {
    let features = CandidateFeatures::new(1.0, 2.0, 3.0, 4.0);
    let vec = features.to_vec();
    for feature in Feature::ALL {
        assert_eq!(vec[feature.index()], features.get(feature));
    }
}

#[test]
fn test_split_sizes() {
    let dataset = Dataset::candidates();
    let (train, test) = train_test_split(&dataset, 0.25, 0).unwrap();
    assert_eq!(train.len(), 30);
    assert_eq!(test.len(), 10);
}

#[test]
fn test_split_rounds_test_size_up() {
    let dataset = Dataset::candidates();
    let (train, test) = train_test_split(&dataset, 0.21, 7).unwrap();
    // ceil(0.21 * 40) = 9
    assert_eq!(test.len(), 9);
    assert_eq!(train.len(), 31);
}

#[test]
fn test_split_is_partition() {
    let dataset = Dataset::candidates();
    let (train, test) = train_test_split(&dataset, 0.25, 3).unwrap();
    let mut counts = train.class_counts();
    for (c, t) in counts.iter_mut().zip(test.class_counts()) {
        *c += t;
    }
    assert_eq!(counts, dataset.class_counts());
}

#[test]
fn test_split_same_seed_same_partition() {
    let dataset = Dataset::candidates();
    let a = train_test_split(&dataset, 0.25, 11).unwrap();
    let b = train_test_split(&dataset, 0.25, 11).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_split_rejects_bad_test_size() {
    let dataset = Dataset::candidates();
    for size in [0.0, 1.0, -0.2, 1.5, f64::NAN] {
        assert!(matches!(
            train_test_split(&dataset, size, 0),
            Err(ConfigurationError::InvalidTestSize(_))
        ));
    }
}

#[test]
fn test_split_rejects_empty_train() {
    let dataset: Dataset = Dataset::candidates().samples()[..2].iter().copied().collect();
    let err = train_test_split(&dataset, 0.9, 0).unwrap_err();
    assert!(matches!(err, ConfigurationError::EmptySplit { side: "train", .. }));
}

#[test]
fn test_split_rejects_empty_dataset() {
    let err = train_test_split(&Dataset::default(), 0.25, 0).unwrap_err();
    assert!(matches!(err, ConfigurationError::EmptySplit { side: "test", .. }));
}

#[test]
fn test_from_path_json() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"[{{"exam_score": 700, "psychometric": 3.5, "work_experience": 4, "age": 27, "label": 2}},
            {{"exam_score": 560, "psychometric": 2.1, "work_experience": 1, "age": 23, "label": 0}}]"#
    )
    .unwrap();

    let dataset = Dataset::from_path(file.path()).unwrap();
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.labels(), vec![Admission::Admitted, Admission::Rejected]);
}

#[test]
fn test_from_path_yaml() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(
        file,
        "- {{exam_score: 650, psychometric: 3.0, work_experience: 2, age: 25, label: 1}}"
    )
    .unwrap();

    let dataset = Dataset::from_path(file.path()).unwrap();
    assert_eq!(dataset.labels(), vec![Admission::Waitlisted]);
}

#[test]
fn test_from_path_rejects_unknown_label() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"[{{"exam_score": 700, "psychometric": 3.5, "work_experience": 4, "age": 27, "label": 7}}]"#
    )
    .unwrap();

    let err = Dataset::from_path(file.path()).unwrap_err();
    assert!(err.to_string().contains("unknown admission label 7"));
}

#[test]
fn test_from_path_rejects_unknown_extension() {
    let file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    let err = Dataset::from_path(file.path()).unwrap_err();
    assert!(matches!(err, Error::ConfigError(_)));
}

#[test]
fn test_from_path_missing_file() {
    let err = Dataset::from_path("/nonexistent/candidates.json").unwrap_err();
    assert!(matches!(err, Error::DatasetNotFound(_)));
}

#[test]
fn test_from_path_rejects_empty_table() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, "[]").unwrap();
    let err = Dataset::from_path(file.path()).unwrap_err();
    assert!(matches!(err, Error::InsufficientData(_)));
}

#[test]
fn test_dataset_serializes_as_row_list() {
    let dataset: Dataset = Dataset::candidates().samples()[..1].iter().copied().collect();
    let json = serde_json::to_value(&dataset).unwrap();
    assert!(json.is_array());
    assert_eq!(json[0]["label"], 2);
    assert_eq!(json[0]["exam_score"], 780.0);
}

#[test]
fn test_default_features_are_in_range() {
    assert!(CandidateFeatures::default().check_ranges().is_ok());
}

#[test]
fn test_check_ranges_names_offending_feature() {
    let err = CandidateFeatures::new(500.0, 30.0, 11.0, 40.0).check_ranges().unwrap_err();
    match err {
        Error::InvalidRange { field, value, min, max } => {
            assert_eq!(field, "work_experience");
            assert_eq!(value, 11.0);
            assert_eq!((min, max), (0.0, 10.0));
        }
        other => panic!("Expected InvalidRange, got {other:?}"),
    }
}

#[test]
fn test_check_ranges_accepts_bounds() {
    assert!(CandidateFeatures::new(0.0, 0.0, 0.0, 0.0).check_ranges().is_ok());
    assert!(CandidateFeatures::new(1000.0, 100.0, 10.0, 100.0).check_ranges().is_ok());
    assert!(CandidateFeatures::new(-1.0, 30.0, 5.0, 40.0).check_ranges().is_err());
    assert!(CandidateFeatures::new(500.0, 30.0, 5.0, f64::NAN).check_ranges().is_err());
}
