use super::*;
use crate::error::ConfigurationError;
use crate::eval::ConfusionMatrix;
use approx::assert_abs_diff_eq;

fn params(rewards: &[f64], penalty: f64) -> EconomicParameters {
    EconomicParameters::new(rewards.to_vec(), penalty)
}

#[test]
fn test_dashboard_example() {
    let matrix = [[5_i64, 0, 0], [1, 3, 0], [0, 2, 9]];
    let impact = economic_impact(&matrix, &EconomicParameters::default()).unwrap();

    // 5*500 + 3*1000 + 9*1500 = 19000; 3 misclassified * -300 = -900
    assert_eq!(impact.correct_value, 19_000.0);
    assert_eq!(impact.correct, 17);
    assert_eq!(impact.misclassified, 3);
    assert_eq!(impact.penalty_value, -900.0);
    assert_eq!(impact.value(), 18_100.0);
    assert_eq!(impact.total(), 20);
}

#[test]
fn test_no_misclassifications_ignore_penalty() {
    let matrix = [[2_i64, 0, 0], [0, 2, 0], [0, 0, 2]];
    let impact = economic_impact(&matrix, &params(&[1.0, 1.0, 1.0], -1000.0)).unwrap();
    assert_eq!(impact.value(), 6.0);
    assert_eq!(impact.misclassified, 0);
}

#[test]
fn test_short_reward_vector_rejected() {
    let matrix = [[1_i64, 0, 0], [0, 1, 0], [0, 0, 1]];
    let err = economic_impact(&matrix, &params(&[500.0, 1000.0], -300.0)).unwrap_err();
    assert_eq!(err, ConfigurationError::RewardLengthMismatch { rewards: 2, labels: 3 });
}

#[test]
fn test_negative_entry_rejected() {
    let matrix = [[5_i64, 0, 0], [1, -3, 0], [0, 2, 9]];
    let err = economic_impact(&matrix, &EconomicParameters::default()).unwrap_err();
    assert_eq!(err, ConfigurationError::NegativeEntry { row: 1, col: 1, value: -3 });
}

#[test]
fn test_negative_off_diagonal_rejected() {
    // would make the misclassified count negative if it were let through
    let matrix = [[5_i64, -4, 0], [0, 3, 0], [0, 0, 9]];
    let err = economic_impact(&matrix, &EconomicParameters::default()).unwrap_err();
    assert!(matches!(err, ConfigurationError::NegativeEntry { row: 0, col: 1, .. }));
}

#[test]
fn test_non_square_rejected() {
    let matrix = vec![vec![1_i64, 0, 0], vec![0, 1], vec![0, 0, 1]];
    let err = economic_impact(&matrix, &EconomicParameters::default()).unwrap_err();
    assert_eq!(err, ConfigurationError::NonSquareMatrix { row: 1, len: 2, expected: 3 });
}

#[test]
fn test_total_overflow_rejected() {
    let matrix = [[i64::MAX, 0], [0, 1]];
    let err = economic_impact(&matrix, &params(&[1.0, 1.0], -1.0)).unwrap_err();
    assert!(matches!(err, ConfigurationError::SumOverflow { .. }));
}

#[test]
fn test_off_diagonal_overflow_rejected() {
    let matrix = [[1_i64, i64::MAX], [0, 0]];
    let err = economic_impact(&matrix, &params(&[1.0, 1.0], -1.0)).unwrap_err();
    assert_eq!(err, ConfigurationError::SumOverflow { row: 0, col: 1 });
}

#[test]
fn test_max_single_count_accepted() {
    let matrix = [[i64::MAX, 0], [0, 0]];
    let impact = economic_impact(&matrix, &params(&[0.0, 0.0], -1.0)).unwrap();
    assert_eq!(impact.correct, i64::MAX.unsigned_abs());
    assert_eq!(impact.misclassified, 0);
}

#[test]
fn test_penalty_can_dominate() {
    let matrix = [[0_i64, 4], [6, 0]];
    let impact = economic_impact(&matrix, &params(&[100.0, 100.0], -50.0)).unwrap();
    assert_eq!(impact.value(), -500.0);
}

#[test]
fn test_general_n_by_n() {
    let matrix = [[3_i64, 1, 0, 0], [0, 2, 0, 1], [0, 0, 4, 0], [1, 0, 0, 5]];
    let impact = economic_impact(&matrix, &params(&[1.0, 2.0, 3.0, 4.0], -0.5)).unwrap();
    // 3 + 4 + 12 + 20 = 39; 3 misclassified
    assert_abs_diff_eq!(impact.value(), 39.0 - 1.5);
}

#[test]
fn test_empty_matrix_with_empty_rewards() {
    let matrix: Vec<Vec<i64>> = Vec::new();
    let impact = economic_impact(&matrix, &params(&[], -1.0)).unwrap();
    assert_eq!(impact.value(), 0.0);
}

#[test]
fn test_fractional_rewards() {
    let matrix = [[1_i64, 1], [0, 1]];
    let impact = economic_impact(&matrix, &params(&[0.1, 0.2], -0.3)).unwrap();
    assert_abs_diff_eq!(impact.value(), 0.0, epsilon = 1e-9);
}

#[test]
fn test_evaluate_confusion_matrix() {
    let cm = ConfusionMatrix::from_counts(vec![vec![5, 0, 0], vec![1, 3, 0], vec![0, 2, 9]])
        .unwrap();
    let impact = EconomicParameters::default().evaluate(&cm).unwrap();
    assert_eq!(impact.value(), 18_100.0);
}

#[test]
fn test_evaluate_rejects_matrix_reward_mismatch() {
    let cm = ConfusionMatrix::from_counts(vec![vec![1, 0], vec![0, 1]]).unwrap();
    assert!(EconomicParameters::default().evaluate(&cm).is_err());
}

#[test]
fn test_currency_formatting() {
    assert_eq!(format_currency(18_100.0), "$18,100.00");
    assert_eq!(format_currency(6.0), "$6.00");
    assert_eq!(format_currency(-900.0), "-$900.00");
    assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
    assert_eq!(format_currency(100.0), "$100.00");
    assert_eq!(format_currency(-0.001), "$0.00");
}

#[test]
fn test_impact_display_is_currency() {
    let impact = economic_impact(&[[5_i64, 0, 0], [1, 3, 0], [0, 2, 9]], &EconomicParameters::default())
        .unwrap();
    assert_eq!(impact.to_string(), "$18,100.00");
}
