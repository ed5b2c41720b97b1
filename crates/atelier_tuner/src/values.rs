//! Tuner values and normalization

use serde::{Deserialize, Serialize};

/// Value every tuner takes when nothing else is known
pub const DEFAULT_TUNER_VALUE: f32 = 0.5;

/// The five tuners, in serialization order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TunerField {
    Abstraction,
    Density,
    Motion,
    Contrast,
    Narrative,
}

impl TunerField {
    pub const ALL: [TunerField; 5] = [
        TunerField::Abstraction,
        TunerField::Density,
        TunerField::Motion,
        TunerField::Contrast,
        TunerField::Narrative,
    ];

    /// Query-string key
    pub fn key(self) -> &'static str {
        match self {
            Self::Abstraction => "abstraction",
            Self::Density => "density",
            Self::Motion => "motion",
            Self::Contrast => "contrast",
            Self::Narrative => "narrative",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

/// A complete set of tuner values, each in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TunerValues {
    pub abstraction: f32,
    pub density: f32,
    pub motion: f32,
    pub contrast: f32,
    pub narrative: f32,
}

impl Default for TunerValues {
    fn default() -> Self {
        Self {
            abstraction: DEFAULT_TUNER_VALUE,
            density: DEFAULT_TUNER_VALUE,
            motion: DEFAULT_TUNER_VALUE,
            contrast: DEFAULT_TUNER_VALUE,
            narrative: DEFAULT_TUNER_VALUE,
        }
    }
}

impl TunerValues {
    pub fn get(&self, field: TunerField) -> f32 {
        match field {
            TunerField::Abstraction => self.abstraction,
            TunerField::Density => self.density,
            TunerField::Motion => self.motion,
            TunerField::Contrast => self.contrast,
            TunerField::Narrative => self.narrative,
        }
    }

    fn field_mut(&mut self, field: TunerField) -> &mut f32 {
        match field {
            TunerField::Abstraction => &mut self.abstraction,
            TunerField::Density => &mut self.density,
            TunerField::Motion => &mut self.motion,
            TunerField::Contrast => &mut self.contrast,
            TunerField::Narrative => &mut self.narrative,
        }
    }

    /// Apply a patch on top of these values
    pub fn merge(&self, patch: &TunerPatch) -> TunerValues {
        normalize(patch, Some(self))
    }

    /// Every field rounded to one decimal place
    pub fn rounded(&self) -> TunerValues {
        let mut out = *self;
        for field in TunerField::ALL {
            *out.field_mut(field) = round_tenth(self.get(field));
        }
        out
    }
}

/// A partial set of tuner values: overrides, or parsed query parameters
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TunerPatch {
    pub abstraction: Option<f32>,
    pub density: Option<f32>,
    pub motion: Option<f32>,
    pub contrast: Option<f32>,
    pub narrative: Option<f32>,
}

impl TunerPatch {
    pub fn get(&self, field: TunerField) -> Option<f32> {
        match field {
            TunerField::Abstraction => self.abstraction,
            TunerField::Density => self.density,
            TunerField::Motion => self.motion,
            TunerField::Contrast => self.contrast,
            TunerField::Narrative => self.narrative,
        }
    }

    pub fn set(&mut self, field: TunerField, value: f32) {
        let slot = match field {
            TunerField::Abstraction => &mut self.abstraction,
            TunerField::Density => &mut self.density,
            TunerField::Motion => &mut self.motion,
            TunerField::Contrast => &mut self.contrast,
            TunerField::Narrative => &mut self.narrative,
        };
        *slot = Some(value);
    }

    pub fn is_empty(&self) -> bool {
        TunerField::ALL.into_iter().all(|f| self.get(f).is_none())
    }
}

impl From<TunerValues> for TunerPatch {
    fn from(values: TunerValues) -> Self {
        let mut patch = TunerPatch::default();
        for field in TunerField::ALL {
            patch.set(field, values.get(field));
        }
        patch
    }
}

/// Resolve a patch into complete, clamped values
///
/// Per field: a finite override wins (clamped to `[0, 1]`), then the
/// previous value (clamped), then [`DEFAULT_TUNER_VALUE`]. NaN and infinite
/// overrides count as absent.
pub fn normalize(patch: &TunerPatch, previous: Option<&TunerValues>) -> TunerValues {
    let mut out = TunerValues::default();
    for field in TunerField::ALL {
        let value = patch
            .get(field)
            .filter(|v| v.is_finite())
            .or_else(|| previous.map(|p| p.get(field)).filter(|v| v.is_finite()))
            .unwrap_or(DEFAULT_TUNER_VALUE);
        *out.field_mut(field) = value.clamp(0.0, 1.0);
    }
    out
}

/// Round to one decimal place, the precision of the URL form
pub fn round_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn out_of_range_overrides_are_clamped() {
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
        assert_eq!(low.motion, DEFAULT_TUNER_VALUE);
    }

    #[test]
    fn missing_fields_fall_back_to_previous_then_default() {
        let previous = TunerValues {
            motion: 0.9,
            ..Default::default()
        };
        let patch = TunerPatch {
            contrast: Some(0.2),
            ..Default::default()
        };

        let merged = previous.merge(&patch);
        assert_eq!(merged.motion, 0.9);
        assert_eq!(merged.contrast, 0.2);
        assert_eq!(merged.density, DEFAULT_TUNER_VALUE);
    }

    #[test]
    fn non_finite_overrides_count_as_absent() {
        let previous = TunerValues {
            abstraction: 0.3,
            ..Default::default()
        };
        let patch = TunerPatch {
            abstraction: Some(f32::NAN),
            narrative: Some(f32::INFINITY),
            ..Default::default()
        };

        let out = normalize(&patch, Some(&previous));
        assert_eq!(out.abstraction, 0.3);
        assert_eq!(out.narrative, DEFAULT_TUNER_VALUE);
    }

    #[test]
    fn field_keys_round_trip() {
        for field in TunerField::ALL {
            assert_eq!(TunerField::from_key(field.key()), Some(field));
        }
        assert_eq!(TunerField::from_key("speed"), None);
    }

    #[test]
    fn round_tenth_matches_one_decimal() {
        assert_eq!(round_tenth(0.34), 0.3);
        assert_eq!(round_tenth(0.36), 0.4);
        assert_eq!(round_tenth(1.0), 1.0);
    }

    proptest! {
        #[test]
        fn normalize_always_lands_in_unit_range(
            a in proptest::num::f32::ANY,
            d in -10.0f32..10.0,
            m in proptest::option::of(-10.0f32..10.0),
        ) {
            let patch = TunerPatch {
                abstraction: Some(a),
                density: Some(d),
                motion: m,
                ..Default::default()
            };
            let out = normalize(&patch, None);
            for field in TunerField::ALL {
                let v = out.get(field);
                prop_assert!((0.0..=1.0).contains(&v), "{field:?} = {v}");
            }
        }

        #[test]
        fn normalize_is_idempotent(
            a in 0.0f32..=1.0,
            d in -2.0f32..3.0,
        ) {
            let once = normalize(&TunerPatch { abstraction: Some(a), density: Some(d), ..Default::default() }, None);
            let twice = normalize(&TunerPatch::from(once), None);
            prop_assert_eq!(once, twice);
        }
    }
}
