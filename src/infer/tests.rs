//! Tests for feature type inference

use super::*;
use crate::data::RawTable;
use proptest::prelude::*;

fn make_stats(name: &str, count: usize, unique: usize, all_numeric: bool) -> ColumnStats {
    ColumnStats {
        name: name.to_string(),
        count,
        unique_count: unique,
        all_numeric,
        all_integers: false,
        ..Default::default()
    }
}

// ============================================================
// Unit Tests
// ============================================================

#[test]
fn test_infer_numeric() {
    let stats = make_stats("gene_a", 100, 100, true);
    let config = InferenceConfig::default();
    assert_eq!(infer_type(&stats, &config), FeatureType::Numeric);
}

#[test]
fn test_infer_categorical_string() {
    let stats = make_stats("gender", 100, 2, false);
    let config = InferenceConfig::default();
    assert_eq!(infer_type(&stats, &config), FeatureType::Categorical);
}

#[test]
fn test_low_cardinality_numeric_stays_numeric() {
    // 0/1 encoded columns are numbers, not objects
    let mut stats = make_stats("phenotype_reg", 100, 2, true);
    stats.all_integers = true;
    let config = InferenceConfig::default();
    assert_eq!(infer_type(&stats, &config), FeatureType::Numeric);
}

#[test]
fn test_force_categorical() {
    let stats = make_stats("batch", 100, 3, true);
    let config = InferenceConfig::default().with_categorical(["batch"]);
    assert_eq!(infer_type(&stats, &config), FeatureType::Categorical);
}

#[test]
fn test_excluded_column_is_unknown() {
    let stats = make_stats("run", 100, 100, false);
    let config = InferenceConfig::default().with_exclude(["run"]);
    assert_eq!(infer_type(&stats, &config), FeatureType::Unknown);
}

#[test]
fn test_all_null_column_is_unknown() {
    let values: Vec<Option<&str>> = vec![None, None, None];
    let stats = collect_stats_from_samples("empty", &values);
    assert_eq!(infer_type(&stats, &InferenceConfig::default()), FeatureType::Unknown);
}

#[test]
fn test_collect_stats_numeric() {
    let values: Vec<Option<&str>> = vec![Some("1.5"), Some("2.3"), Some("3.7"), None, Some("4.1")];
    let stats = collect_stats_from_samples("gene_a", &values);

    assert_eq!(stats.count, 5);
    assert_eq!(stats.null_count, 1);
    assert!(stats.all_numeric);
    assert!(!stats.all_integers);
}

#[test]
fn test_collect_stats_integers() {
    let values: Vec<Option<&str>> = vec![Some("1"), Some("0"), Some("1"), Some("0")];
    let stats = collect_stats_from_samples("phenotype_reg", &values);

    assert!(stats.all_numeric);
    assert!(stats.all_integers);
    assert_eq!(stats.unique_count, 2);
}

#[test]
fn test_collect_stats_mixed_is_not_numeric() {
    let values: Vec<Option<&str>> = vec![Some("1.0"), Some("male"), Some("2.0")];
    let stats = collect_stats_from_samples("mixed", &values);
    assert!(!stats.all_numeric);
    assert_eq!(infer_type(&stats, &InferenceConfig::default()), FeatureType::Categorical);
}

#[test]
fn test_infer_schema_from_table() {
    let mut table = RawTable::new(vec![
        "gene_a".to_string(),
        "gender".to_string(),
        "phenotype_reg".to_string(),
    ]);
    table
        .push_row(vec![Some("0.5".into()), Some("F".into()), Some("1".into())])
        .unwrap();
    table
        .push_row(vec![Some("1.5".into()), Some("M".into()), Some("0".into())])
        .unwrap();

    let schema = infer_schema_from_table(&table, &InferenceConfig::default());

    assert_eq!(schema.categorical(), vec!["gender"]);
    assert_eq!(schema.numeric(), vec!["gene_a", "phenotype_reg"]);
    assert_eq!(schema.stypes().get("gender").map(String::as_str), Some("c"));
    assert!(!schema.stypes().contains_key("gene_a"));
}

#[test]
fn test_schema_preserves_table_order() {
    let stats = vec![
        make_stats("z_gene", 10, 10, true),
        make_stats("a_gene", 10, 10, true),
    ];
    let schema = infer_schema(stats, &InferenceConfig::default());
    assert_eq!(schema.order, vec!["z_gene", "a_gene"]);
    assert_eq!(schema.numeric(), vec!["z_gene", "a_gene"]);
}

#[test]
fn test_feature_type_display() {
    assert_eq!(format!("{}", FeatureType::Numeric), "numeric");
    assert_eq!(format!("{}", FeatureType::Categorical), "categorical");
    assert_eq!(FeatureType::Categorical.code(), "c");
}

#[test]
fn test_cardinality_ratio() {
    let stats = ColumnStats {
        count: 1000,
        unique_count: 50,
        ..Default::default()
    };
    assert!((stats.cardinality_ratio() - 0.05).abs() < 1e-6);
}

// ============================================================
// Property Tests
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_float_columns_are_numeric(values in prop::collection::vec(-1e6f64..1e6, 1..50)) {
        let strings: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        let cells: Vec<Option<&str>> = strings.iter().map(|s| Some(s.as_str())).collect();
        let stats = collect_stats_from_samples("x", &cells);
        prop_assert_eq!(infer_type(&stats, &InferenceConfig::default()), FeatureType::Numeric);
    }

    #[test]
    fn prop_alphabetic_values_make_column_categorical(
        numbers in prop::collection::vec(-100i32..100, 0..20),
        word in "[a-zA-Z]{2,8}"
    ) {
        let mut strings: Vec<String> = numbers.iter().map(|v| v.to_string()).collect();
        strings.push(word);
        let cells: Vec<Option<&str>> = strings.iter().map(|s| Some(s.as_str())).collect();
        let stats = collect_stats_from_samples("x", &cells);
        // "inf"/"nan"-like words parse as floats; everything else is categorical
        let parses = strings.iter().all(|s| s.parse::<f64>().is_ok());
        let expected = if parses { FeatureType::Numeric } else { FeatureType::Categorical };
        prop_assert_eq!(infer_type(&stats, &InferenceConfig::default()), expected);
    }

    #[test]
    fn prop_null_ratio_bounded(count in 1usize..10000, null_count in 0usize..10000) {
        let null_count = null_count.min(count);
        let stats = ColumnStats { count, null_count, ..Default::default() };
        prop_assert!((0.0..=1.0).contains(&stats.null_ratio()));
    }
}
