//! Property tests for configuration validation

use super::validator::validate_config;
use crate::config::schema::PipelineSpec;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_test_sizes_accepted(test_size in 0.001f64..0.999) {
        let spec = PipelineSpec { test_size, ..Default::default() };
        prop_assert!(validate_config(&spec).is_ok());
    }

    #[test]
    fn prop_floor_outside_unit_interval_rejected(floor in prop_oneof![-10.0f64..-0.001, 1.001f64..10.0]) {
        let spec = PipelineSpec { prior_floor: floor, ..Default::default() };
        prop_assert!(validate_config(&spec).is_err());
    }

    #[test]
    fn prop_positive_epochs_accepted(n_epochs in 1usize..1000) {
        let spec = PipelineSpec { n_epochs, ..Default::default() };
        prop_assert!(validate_config(&spec).is_ok());
    }
}
