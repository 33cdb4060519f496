//! End-to-end run of the worked three-level example through the public API.

use approx::assert_relative_eq;
use hierbench::{Bootstrap, ConfidenceLevel, Error, Experiment};
use std::collections::HashMap;

fn worked_example() -> Experiment {
    let mut samples = HashMap::new();
    samples.insert(vec![0, 0], vec![9.0, 5.0]);
    samples.insert(vec![0, 1], vec![8.0, 3.0]);
    samples.insert(vec![1, 0], vec![10.0, 6.0]);
    samples.insert(vec![1, 1], vec![7.0, 11.0]);
    samples.insert(vec![2, 0], vec![1.0, 12.0]);
    samples.insert(vec![2, 1], vec![2.0, 4.0]);
    Experiment::new(samples, vec![3, 2, 2]).unwrap()
}

#[test]
fn variance_decomposition_matches_paper() {
    let experiment = worked_example();

    assert_eq!(experiment.levels(), 3);
    assert_eq!(experiment.total_samples(), 12);
    assert_eq!(experiment.mean(&[]).unwrap(), 6.5);

    assert_relative_eq!(experiment.biased_variance(1).unwrap(), 16.5, epsilon = 0.05);
    assert_relative_eq!(experiment.biased_variance(2).unwrap(), 2.6, epsilon = 0.05);
    assert_relative_eq!(experiment.biased_variance(3).unwrap(), 3.6, epsilon = 0.05);

    assert_relative_eq!(experiment.unbiased_variance(1).unwrap(), 16.5, epsilon = 0.05);
    assert_relative_eq!(experiment.unbiased_variance(2).unwrap(), -5.7, epsilon = 0.05);
    assert_relative_eq!(experiment.unbiased_variance(3).unwrap(), 2.3, epsilon = 0.05);
}

#[test]
fn parametric_and_bootstrap_intervals_agree_roughly() {
    let experiment = worked_example();
    let grand_mean = experiment.mean(&[]).unwrap();

    let half_width = experiment.confidence95().unwrap();
    assert!(half_width > 0.0);

    let interval = Bootstrap::new()
        .with_iterations(5000)
        .with_seed(42)
        .confidence_interval(&experiment)
        .unwrap();
    assert!(interval.contains(grand_mean));

    // Both approaches see spread of the same order of magnitude.
    assert!(interval.error() < 4.0 * half_width);
}

#[test]
fn quotient_against_itself_is_near_one() {
    let a = worked_example();
    let b = worked_example();
    let interval = Bootstrap::new()
        .with_iterations(5000)
        .with_seed(7)
        .with_confidence_level(ConfidenceLevel::from_ratio(4, 5).unwrap())
        .quotient(&a, &b)
        .unwrap();
    assert!(interval.contains(1.0));
}

#[test]
fn incomplete_dataset_is_fatal() {
    let mut samples = HashMap::new();
    samples.insert(vec![0, 0], vec![9.0, 5.0]);
    let err = Experiment::new(samples, vec![3, 2, 2]).unwrap_err();
    assert!(matches!(err, Error::IncompleteDataset { .. }));
}
