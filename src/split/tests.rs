//! Tests for stratified splitting

use super::*;
use crate::data::{Column, Frame};
use ndarray::Array1;
use proptest::prelude::*;

fn labels(counts: &[(&str, usize)]) -> Vec<String> {
    counts
        .iter()
        .flat_map(|(label, n)| std::iter::repeat(label.to_string()).take(*n))
        .collect()
}

fn class_count(labels: &[String], idx: &[usize], class: &str) -> usize {
    idx.iter().filter(|&&i| labels[i] == class).count()
}

#[test]
fn test_hundred_rows_split_67_33() {
    let y = labels(&[("0", 50), ("1", 50)]);
    let (train, test) = StratifiedSplit::new(0.33).with_seed(1024).split(&y).unwrap();
    assert_eq!(train.len(), 67);
    assert_eq!(test.len(), 33);
}

#[test]
fn test_partitions_disjoint_and_exhaustive() {
    let y = labels(&[("a", 40), ("b", 25), ("c", 35)]);
    let (train, test) = StratifiedSplit::new(0.33).with_seed(7).split(&y).unwrap();

    let mut all: Vec<usize> = train.iter().chain(test.iter()).copied().collect();
    all.sort_unstable();
    assert_eq!(all, (0..100).collect::<Vec<_>>());
}

#[test]
fn test_class_balance_preserved() {
    let y = labels(&[("0", 70), ("1", 30)]);
    let (train, test) = StratifiedSplit::new(0.33).with_seed(1024).split(&y).unwrap();
    assert_eq!(class_count(&y, &test, "1"), 10);
    assert_eq!(class_count(&y, &test, "0"), 23);
    assert_eq!(class_count(&y, &train, "1"), 20);
    assert_eq!(class_count(&y, &train, "0"), 47);
}

#[test]
fn test_same_seed_same_split() {
    let y = labels(&[("0", 60), ("1", 40)]);
    let a = StratifiedSplit::new(0.33).with_seed(1024).split(&y).unwrap();
    let b = StratifiedSplit::new(0.33).with_seed(1024).split(&y).unwrap();
    let c = StratifiedSplit::new(0.33).with_seed(99).split(&y).unwrap();
    assert_eq!(a, b);
    assert_ne!(a.1, c.1);
}

#[test]
fn test_singleton_class_fails() {
    let y = labels(&[("0", 10), ("1", 1)]);
    let err = StratifiedSplit::new(0.33).split(&y).unwrap_err();
    assert_eq!(
        err,
        SplitError::TooFewMembers {
            class: "1".to_string(),
            count: 1
        }
    );
}

#[test]
fn test_invalid_test_size() {
    let y = labels(&[("0", 10), ("1", 10)]);
    assert!(matches!(
        StratifiedSplit::new(0.0).split(&y),
        Err(SplitError::InvalidTestSize(_))
    ));
    assert!(matches!(
        StratifiedSplit::new(1.0).split(&y),
        Err(SplitError::InvalidTestSize(_))
    ));
}

#[test]
fn test_test_partition_too_small() {
    let y = labels(&[("a", 2), ("b", 2), ("c", 2)]);
    assert!(matches!(
        StratifiedSplit::new(0.2).split(&y),
        Err(SplitError::TestTooSmall { size: 2, n_classes: 3 })
    ));
}

#[test]
fn test_train_partition_too_small() {
    let y = labels(&[("a", 2), ("b", 2)]);
    assert!(matches!(
        StratifiedSplit::new(0.8).split(&y),
        Err(SplitError::TrainTooSmall { .. })
    ));
}

#[test]
fn test_empty_labels() {
    let y: Vec<String> = Vec::new();
    assert_eq!(StratifiedSplit::new(0.3).split(&y), Err(SplitError::Empty));
}

#[test]
fn test_train_test_split_frame() {
    let n = 100;
    let frame = Frame::new()
        .with_column("gene_a", Column::Numeric(Array1::from_iter((0..n).map(|i| i as f64))))
        .unwrap()
        .with_column(
            "phenotype_reg",
            Column::Numeric(Array1::from_iter((0..n).map(|i| (i % 2) as f64))),
        )
        .unwrap();

    let (train, test) = train_test_split(&frame, "phenotype_reg", 0.33, 1024).unwrap();
    assert_eq!(train.n_rows() + test.n_rows(), n);
    assert_eq!(test.n_rows(), 33);

    let ones = test.numeric("phenotype_reg").unwrap().sum();
    assert!((ones - 16.5).abs() <= 1.0);
}

#[test]
fn test_train_test_split_missing_target() {
    let frame = Frame::new()
        .with_column("gene_a", Column::Numeric(Array1::zeros(4)))
        .unwrap();
    assert!(train_test_split(&frame, "phenotype_reg", 0.33, 1).is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_stratification_within_one_row(
        counts in prop::collection::vec(3usize..60, 1..5),
        test_size in 0.1f64..0.45,
        seed in any::<u64>()
    ) {
        let named: Vec<(String, usize)> = counts
            .iter()
            .enumerate()
            .map(|(i, &c)| (format!("class{i}"), c))
            .collect();
        let y: Vec<String> = named
            .iter()
            .flat_map(|(l, n)| std::iter::repeat(l.clone()).take(*n))
            .collect();
        let n = y.len();
        let splitter = StratifiedSplit::new(test_size).with_seed(seed);

        if let Ok((train, test)) = splitter.split(&y) {
            prop_assert_eq!(train.len() + test.len(), n);
            prop_assert_eq!(test.len(), splitter.test_count(n));
            for (label, count) in &named {
                let expected = *count as f64 * test.len() as f64 / n as f64;
                let got = class_count(&y, &test, label) as f64;
                prop_assert!((got - expected).abs() < 1.0 + 1e-9);
                prop_assert!(class_count(&y, &train, label) >= 1);
            }
        }
    }
}
