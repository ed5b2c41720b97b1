//! Property tests for the tuner pipeline

use atelier_tuner::{
    compute_overrides, deserialize, from_query_string, normalize, serialize, to_query_string,
    TunerPatch, TunerValues,
};
use proptest::prelude::*;

fn unit() -> impl Strategy<Value = f32> {
    0.0f32..=1.0
}

fn tuner_values() -> impl Strategy<Value = TunerValues> {
    (unit(), unit(), unit(), unit(), unit()).prop_map(
        |(abstraction, density, motion, contrast, narrative)| TunerValues {
            abstraction,
            density,
            motion,
            contrast,
            narrative,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn deserialize_inverts_serialize_up_to_rounding(values in tuner_values()) {
        let restored = normalize(&deserialize(&serialize(&values)), None);
        prop_assert_eq!(restored, values.rounded());
    }

    #[test]
    fn query_string_survives_a_second_trip(values in tuner_values()) {
        let first = normalize(&from_query_string(&to_query_string(&values)), None);
        let second = normalize(&from_query_string(&to_query_string(&first)), None);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn overrides_stay_within_bounds(
        density in -5.0f32..5.0,
        motion in -5.0f32..5.0,
        contrast in -5.0f32..5.0,
    ) {
        let values = normalize(
            &TunerPatch {
                density: Some(density),
                motion: Some(motion),
                contrast: Some(contrast),
                ..Default::default()
            },
            None,
        );
        let overrides = compute_overrides(&values);
        prop_assert!((8.0..=24.0).contains(&overrides.gap_px));
        prop_assert!((12.0..=28.0).contains(&overrides.card_padding_px));
        prop_assert!((32.0..=52.0).contains(&overrides.row_height_px));
        prop_assert!((80.0..=480.0).contains(&overrides.duration_ms));
        prop_assert!((0.0..=24.0).contains(&overrides.travel_px));
        prop_assert!((0.06..=0.32).contains(&overrides.border_opacity));
        prop_assert!((0.55..=0.90).contains(&overrides.muted_text_opacity));
    }
}

#[test]
fn clamping_examples() {
    let high = normalize(
        &TunerPatch {
            density: Some(1.7),
            ..Default::default()
        },
        None,
    );
    assert_eq!(high.density, 1.0);

    let low = normalize(
        &TunerPatch {
            density: Some(-3.0),
            ..Default::default()
        },
        None,
    );
    assert_eq!(low.density, 0.0);
}

#[test]
fn serialized_form_is_json_friendly() {
    let values = TunerValues::default();
    let json = serde_json::to_value(serialize(&values)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "abstraction": "0.5",
            "density": "0.5",
            "motion": "0.5",
            "contrast": "0.5",
            "narrative": "0.5",
        })
    );
}
