//! Property-based tests for the escape-time primitives
//!
//! The filters are specified as exact set operations over the sample set, so
//! the properties here check exactness, not approximation.

use proptest::prelude::*;

use hypervis_fractal::{
    escape_time, filter_samples, generate_samples, power_map, smooth_escape_time, ColorMode,
    HyperbulbConfig,
};
use hypervis_math::VecN;

fn arb_point() -> impl Strategy<Value = VecN> {
    (3usize..=11)
        .prop_flat_map(|dim| prop::collection::vec(-1.5f64..1.5, dim))
        .prop_map(|c| VecN::from_slice(&c))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn escape_time_is_bounded_by_max(c in arb_point(), power in 2.0f64..9.0) {
        let t = escape_time(&c, power, 32, 2.0);
        prop_assert!(t <= 32);
    }

    #[test]
    fn smooth_escape_is_finite_and_in_range(c in arb_point(), power in 2.0f64..9.0) {
        let s = smooth_escape_time(&c, power, 32, 2.0);
        prop_assert!(s.is_finite());
        prop_assert!((0.0..=32.0).contains(&s));
    }

    #[test]
    fn bounded_iff_smooth_equals_max(c in arb_point()) {
        let t = escape_time(&c, 8.0, 24, 2.0);
        let s = smooth_escape_time(&c, 8.0, 24, 2.0);
        if t == 24 {
            prop_assert_eq!(s, 24.0);
        } else {
            prop_assert!(s <= 24.0);
        }
    }

    #[test]
    fn power_map_raises_radius(c in arb_point(), power in 2.0f64..9.0) {
        let mapped = power_map(&c, power);
        prop_assert!(mapped.is_finite());
        let expected = c.length().powf(power);
        prop_assert!((mapped.length() - expected).abs() < expected.max(1.0) * 1e-9);
    }

    #[test]
    fn larger_escape_radius_never_decreases_time(c in arb_point()) {
        let small = escape_time(&c, 8.0, 48, 2.0);
        let large = escape_time(&c, 8.0, 48, 8.0);
        prop_assert!(large >= small);
    }
}

#[test]
fn origin_is_bounded_in_every_dimension() {
    for dim in 3..=11 {
        let c = VecN::zeros(dim);
        assert_eq!(escape_time(&c, 8.0, 40, 2.0), 40);
    }
}

#[test]
fn interior_and_boundary_filters_partition_consistently() {
    let base = HyperbulbConfig {
        resolution: 8,
        max_iterations: 12,
        ..HyperbulbConfig::default()
    };
    let samples = generate_samples(4, &base);

    let interior = filter_samples(
        &samples,
        &HyperbulbConfig {
            color_mode: ColorMode::Interior,
            ..base.clone()
        },
    );
    assert!(interior.iter().all(|s| s.escape >= 12));
    assert_eq!(
        interior.len(),
        samples.iter().filter(|s| s.escape >= 12).count()
    );

    let boundary = filter_samples(
        &samples,
        &HyperbulbConfig {
            color_mode: ColorMode::Boundary,
            boundary_threshold: [0.0, 1.0],
            ..base
        },
    );
    // A full-width band keeps every sample
    assert_eq!(boundary.len(), samples.len());
}
