//! Tests for CLI argument parsing

use super::*;
use crate::config::ValorarConfig;
use proptest::prelude::*;
use std::path::PathBuf;

fn evaluate_args() -> EvaluateArgs {
    EvaluateArgs {
        config: None,
        seed: None,
        test_size: None,
        rewards: None,
        penalty: None,
        format: OutputFormat::Text,
    }
}

#[test]
fn test_parse_evaluate_defaults() {
    let cli = parse_args(["valorar", "evaluate"]).unwrap();
    match cli.command {
        Command::Evaluate(args) => assert_eq!(args, evaluate_args()),
        _ => panic!("Expected Evaluate command"),
    }
}

#[test]
fn test_parse_evaluate_with_overrides() {
    let cli = parse_args([
        "valorar",
        "evaluate",
        "--config",
        "valorar.yaml",
        "--seed",
        "7",
        "--test-size",
        "0.3",
        "--rewards",
        "100,200,300",
        "--penalty",
        "-50",
        "--format",
        "json",
    ])
    .unwrap();

    match cli.command {
        Command::Evaluate(args) => {
            assert_eq!(args.config, Some(PathBuf::from("valorar.yaml")));
            assert_eq!(args.seed, Some(7));
            assert_eq!(args.test_size, Some(0.3));
            assert_eq!(args.rewards, Some(vec![100.0, 200.0, 300.0]));
            assert_eq!(args.penalty, Some(-50.0));
            assert_eq!(args.format, OutputFormat::Json);
        }
        _ => panic!("Expected Evaluate command"),
    }
}

#[test]
fn test_parse_predict_defaults() {
    let cli = parse_args(["valorar", "predict"]).unwrap();
    match cli.command {
        Command::Predict(args) => {
            assert_eq!(args.exam, 500.0);
            assert_eq!(args.psychometric, 30.0);
            assert_eq!(args.experience, 5.0);
            assert_eq!(args.age, 40.0);
            assert!(args.config.is_none());
        }
        _ => panic!("Expected Predict command"),
    }
}

#[test]
fn test_parse_predict_values() {
    let cli = parse_args([
        "valorar",
        "predict",
        "--exam",
        "720",
        "--psychometric",
        "85",
        "--experience",
        "6",
        "--age",
        "31",
    ])
    .unwrap();
    match cli.command {
        Command::Predict(args) => {
            assert_eq!(args.exam, 720.0);
            assert_eq!(args.psychometric, 85.0);
            assert_eq!(args.experience, 6.0);
            assert_eq!(args.age, 31.0);
        }
        _ => panic!("Expected Predict command"),
    }
}

#[test]
fn test_parse_predict_accepts_negative_for_range_check() {
    let cli = parse_args(["valorar", "predict", "--age", "-3"]).unwrap();
    match cli.command {
        Command::Predict(args) => assert_eq!(args.age, -3.0),
        _ => panic!("Expected Predict command"),
    }
}

#[test]
fn test_parse_impact_command() {
    let cli = parse_args(["valorar", "impact", "--matrix", "5,0,0;1,3,0;0,2,9"]).unwrap();
    match cli.command {
        Command::Impact(args) => {
            assert_eq!(args.matrix.rows(), &[vec![5, 0, 0], vec![1, 3, 0], vec![0, 2, 9]]);
            assert_eq!(args.rewards, vec![500.0, 1000.0, 1500.0]);
            assert_eq!(args.penalty, -300.0);
        }
        _ => panic!("Expected Impact command"),
    }
}

#[test]
fn test_parse_impact_negative_entry_reaches_calculator() {
    let cli = parse_args(["valorar", "impact", "--matrix", "-1,0;0,2", "--rewards", "1,2"]).unwrap();
    match cli.command {
        Command::Impact(args) => assert_eq!(args.matrix.rows(), &[vec![-1, 0], vec![0, 2]]),
        _ => panic!("Expected Impact command"),
    }
}

#[test]
fn test_parse_impact_requires_matrix() {
    assert!(parse_args(["valorar", "impact"]).is_err());
}

#[test]
fn test_count_matrix_rejects_garbage() {
    assert!("".parse::<CountMatrix>().is_err());
    assert!("1,x;0,1".parse::<CountMatrix>().is_err());
    assert!("1,2;;3,4".parse::<CountMatrix>().is_err());
}

#[test]
fn test_count_matrix_keeps_ragged_rows() {
    let m: CountMatrix = "1,2,3;4,5".parse().unwrap();
    assert_eq!(m.rows()[1].len(), 2);
    assert_eq!(m.to_string(), "1,2,3;4,5");
}

#[test]
fn test_parse_dataset_yaml_format() {
    let cli = parse_args(["valorar", "dataset", "--format", "yaml"]).unwrap();
    match cli.command {
        Command::Dataset(args) => assert_eq!(args.format, OutputFormat::Yaml),
        _ => panic!("Expected Dataset command"),
    }
}

#[test]
fn test_parse_validate_detailed() {
    let cli = parse_args(["valorar", "validate", "valorar.yaml", "--detailed"]).unwrap();
    match cli.command {
        Command::Validate(args) => {
            assert_eq!(args.config, PathBuf::from("valorar.yaml"));
            assert!(args.detailed);
        }
        _ => panic!("Expected Validate command"),
    }
}

#[test]
fn test_validate_requires_config() {
    assert!(parse_args(["valorar", "validate"]).is_err());
}

#[test]
fn test_parse_init_command() {
    let cli = parse_args(["valorar", "init", "--output", "valorar.yaml"]).unwrap();
    match cli.command {
        Command::Init(args) => {
            assert_eq!(args.output, Some(PathBuf::from("valorar.yaml")));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn test_global_flags() {
    let cli = parse_args(["valorar", "-v", "dataset"]).unwrap();
    assert!(cli.verbose);
    assert!(!cli.quiet);

    let cli = parse_args(["valorar", "dataset", "--quiet"]).unwrap();
    assert!(cli.quiet);
}

#[test]
fn test_unknown_command() {
    assert!(parse_args(["valorar", "unknown"]).is_err());
}

#[test]
fn test_unknown_output_format() {
    assert!(parse_args(["valorar", "dataset", "--format", "xml"]).is_err());
}

#[test]
fn test_apply_overrides_none_keeps_config() {
    let mut config = ValorarConfig::default();
    apply_overrides(&mut config, &evaluate_args());
    assert_eq!(config, ValorarConfig::default());
}

#[test]
fn test_apply_overrides_all() {
    let mut config = ValorarConfig::default();
    let args = EvaluateArgs {
        seed: Some(42),
        test_size: Some(0.2),
        rewards: Some(vec![1.0, 2.0, 3.0]),
        penalty: Some(-10.0),
        ..evaluate_args()
    };
    apply_overrides(&mut config, &args);
    assert_eq!(config.seed, 42);
    assert_eq!(config.split.test_size, 0.2);
    assert_eq!(config.economics.rewards, vec![1.0, 2.0, 3.0]);
    assert_eq!(config.economics.penalty, -10.0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_seed_override(seed in any::<u64>()) {
        let seed_str = seed.to_string();
        let cli = parse_args(["valorar", "evaluate", "--seed", &seed_str]).unwrap();
        match cli.command {
            Command::Evaluate(args) => prop_assert_eq!(args.seed, Some(seed)),
            _ => prop_assert!(false, "Expected Evaluate command"),
        }
    }

    #[test]
    fn prop_output_format_case_insensitive(
        format in prop::sample::select(vec!["text", "TEXT", "Text", "json", "JSON", "yaml", "Yaml"])
    ) {
        prop_assert!(format.parse::<OutputFormat>().is_ok());
    }
}
