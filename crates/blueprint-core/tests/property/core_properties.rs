//! Property tests for blueprint-core: score helpers and tag normalization.

use proptest::prelude::*;

use blueprint_core::models::normalize_tags;
use blueprint_core::scores::{clamp_unit, round2, unit_score};

proptest! {
    #[test]
    fn unit_score_is_bounded(value in proptest::num::f64::ANY) {
        let score = unit_score(value);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn clamp_is_identity_inside_range(value in 0.0f64..=1.0) {
        prop_assert_eq!(clamp_unit(value), value);
    }

    #[test]
    fn round2_is_idempotent(value in -10.0f64..10.0) {
        prop_assert_eq!(round2(round2(value)), round2(value));
    }

    #[test]
    fn tag_normalization_is_idempotent_and_sorted(
        tags in prop::collection::vec("[ a-zA-Z]{0,8}", 0..10)
    ) {
        let once = normalize_tags(&tags);
        prop_assert_eq!(normalize_tags(&once), once.clone());
        prop_assert!(once.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(once.iter().all(|t| !t.is_empty() && t.trim() == t));
    }
}
