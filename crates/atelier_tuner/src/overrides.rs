//! Tuner values to style overrides
//!
//! Continuous tuners interpolate between two bounds; discrete tuners pick a
//! variant from thirds of the unit range.

use indexmap::IndexMap;
use tracing::trace;

use crate::values::TunerValues;

const GAP_PX: (f32, f32) = (24.0, 8.0);
const CARD_PADDING_PX: (f32, f32) = (28.0, 12.0);
const ROW_HEIGHT_PX: (f32, f32) = (52.0, 32.0);
const DURATION_MS: (f32, f32) = (80.0, 480.0);
const TRAVEL_PX: (f32, f32) = (0.0, 24.0);
const BORDER_OPACITY: (f32, f32) = (0.06, 0.32);
const MUTED_TEXT_OPACITY: (f32, f32) = (0.55, 0.90);

/// Imagery style selected by the `abstraction` tuner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AbstractionVariant {
    Literal,
    Balanced,
    Geometric,
}

impl AbstractionVariant {
    pub fn from_value(value: f32) -> Self {
        match third(value) {
            0 => Self::Literal,
            1 => Self::Balanced,
            _ => Self::Geometric,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Literal => "literal",
            Self::Balanced => "balanced",
            Self::Geometric => "geometric",
        }
    }

    fn icon_stroke(self) -> &'static str {
        match self {
            Self::Literal => "1.5",
            Self::Balanced => "1.75",
            Self::Geometric => "2",
        }
    }
}

/// Layout voice selected by the `narrative` tuner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NarrativeVariant {
    Utility,
    Editorial,
    Cinematic,
}

impl NarrativeVariant {
    pub fn from_value(value: f32) -> Self {
        match third(value) {
            0 => Self::Utility,
            1 => Self::Editorial,
            _ => Self::Cinematic,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Utility => "utility",
            Self::Editorial => "editorial",
            Self::Cinematic => "cinematic",
        }
    }

    fn section_spacing(self) -> &'static str {
        match self {
            Self::Utility => "48px",
            Self::Editorial => "96px",
            Self::Cinematic => "160px",
        }
    }
}

/// Bounded style deltas derived from one set of tuner values
#[derive(Clone, Debug, PartialEq)]
pub struct StyleOverrideSet {
    pub gap_px: f32,
    pub card_padding_px: f32,
    pub row_height_px: f32,
    pub duration_ms: f32,
    pub travel_px: f32,
    pub border_opacity: f32,
    pub muted_text_opacity: f32,
    pub abstraction: AbstractionVariant,
    pub narrative: NarrativeVariant,
    properties: IndexMap<&'static str, String>,
}

impl StyleOverrideSet {
    /// Custom properties in insertion order
    pub fn properties(&self) -> &IndexMap<&'static str, String> {
        &self.properties
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Map tuner values to style overrides
///
/// Input is clamped again here so the mapping stays total even for values
/// that skipped [`normalize`](crate::normalize).
pub fn compute_overrides(values: &TunerValues) -> StyleOverrideSet {
    let density = unit(values.density);
    let motion = unit(values.motion);
    let contrast = unit(values.contrast);

    let gap_px = lerp(GAP_PX, density);
    let card_padding_px = lerp(CARD_PADDING_PX, density);
    let row_height_px = lerp(ROW_HEIGHT_PX, density);
    let duration_ms = lerp(DURATION_MS, motion);
    let travel_px = lerp(TRAVEL_PX, motion);
    let border_opacity = lerp(BORDER_OPACITY, contrast);
    let muted_text_opacity = lerp(MUTED_TEXT_OPACITY, contrast);
    let abstraction = AbstractionVariant::from_value(unit(values.abstraction));
    let narrative = NarrativeVariant::from_value(unit(values.narrative));

    let mut properties = IndexMap::new();
    properties.insert("--tuner-gap", format!("{gap_px:.0}px"));
    properties.insert("--tuner-card-padding", format!("{card_padding_px:.0}px"));
    properties.insert("--tuner-row-height", format!("{row_height_px:.0}px"));
    properties.insert("--tuner-duration", format!("{duration_ms:.0}ms"));
    properties.insert("--tuner-travel", format!("{travel_px:.0}px"));
    properties.insert("--tuner-border-opacity", format!("{border_opacity:.2}"));
    properties.insert(
        "--tuner-muted-text-opacity",
        format!("{muted_text_opacity:.2}"),
    );
    properties.insert("--tuner-imagery", abstraction.as_str().to_string());
    properties.insert("--tuner-icon-stroke", abstraction.icon_stroke().to_string());
    properties.insert("--tuner-narrative", narrative.as_str().to_string());
    properties.insert(
        "--tuner-section-spacing",
        narrative.section_spacing().to_string(),
    );

    trace!(?abstraction, ?narrative, gap_px, duration_ms, "computed tuner overrides");

    StyleOverrideSet {
        gap_px,
        card_padding_px,
        row_height_px,
        duration_ms,
        travel_px,
        border_opacity,
        muted_text_opacity,
        abstraction,
        narrative,
        properties,
    }
}

fn unit(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        crate::DEFAULT_TUNER_VALUE
    }
}

fn lerp((from, to): (f32, f32), t: f32) -> f32 {
    let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
    (from + (to - from) * t).clamp(lo, hi)
}

/// 0, 1 or 2 for the lower, middle and upper third of `[0, 1]`
fn third(value: f32) -> u8 {
    if value < 1.0 / 3.0 {
        0
    } else if value < 2.0 / 3.0 {
        1
    } else {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn with(f: impl FnOnce(&mut TunerValues)) -> TunerValues {
        let mut values = TunerValues::default();
        f(&mut values);
        values
    }

    #[test]
    fn bounds_hit_the_endpoints() {
        let low = compute_overrides(&with(|v| {
            v.density = 0.0;
            v.motion = 0.0;
            v.contrast = 0.0;
        }));
        assert_eq!(low.get("--tuner-gap"), Some("24px"));
        assert_eq!(low.get("--tuner-row-height"), Some("52px"));
        assert_eq!(low.get("--tuner-duration"), Some("80ms"));
        assert_eq!(low.get("--tuner-travel"), Some("0px"));
        assert_eq!(low.get("--tuner-border-opacity"), Some("0.06"));

        let high = compute_overrides(&with(|v| {
            v.density = 1.0;
            v.motion = 1.0;
            v.contrast = 1.0;
        }));
        assert_eq!(high.get("--tuner-card-padding"), Some("12px"));
        assert_eq!(high.get("--tuner-duration"), Some("480ms"));
        assert_eq!(high.get("--tuner-muted-text-opacity"), Some("0.90"));
    }

    #[test]
    fn continuous_tuners_are_monotonic() {
        let mut previous = compute_overrides(&with(|v| {
            v.density = 0.0;
            v.motion = 0.0;
            v.contrast = 0.0;
        }));
        for step in 1..=20 {
            let t = step as f32 / 20.0;
            let next = compute_overrides(&with(|v| {
                v.density = t;
                v.motion = t;
                v.contrast = t;
            }));
            assert!(next.gap_px <= previous.gap_px);
            assert!(next.card_padding_px <= previous.card_padding_px);
            assert!(next.row_height_px <= previous.row_height_px);
            assert!(next.duration_ms >= previous.duration_ms);
            assert!(next.travel_px >= previous.travel_px);
            assert!(next.border_opacity >= previous.border_opacity);
            assert!(next.muted_text_opacity >= previous.muted_text_opacity);
            previous = next;
        }
    }

    #[test]
    fn discrete_tuners_select_by_thirds() {
        assert_eq!(AbstractionVariant::from_value(0.0), AbstractionVariant::Literal);
        assert_eq!(AbstractionVariant::from_value(0.3), AbstractionVariant::Literal);
        assert_eq!(AbstractionVariant::from_value(0.5), AbstractionVariant::Balanced);
        assert_eq!(AbstractionVariant::from_value(0.7), AbstractionVariant::Geometric);
        assert_eq!(NarrativeVariant::from_value(1.0), NarrativeVariant::Cinematic);
        assert_eq!(NarrativeVariant::from_value(0.4), NarrativeVariant::Editorial);

        let overrides = compute_overrides(&with(|v| v.narrative = 0.1));
        assert_eq!(overrides.get("--tuner-narrative"), Some("utility"));
        assert_eq!(overrides.get("--tuner-section-spacing"), Some("48px"));
    }

    #[test]
    fn mapping_is_total_for_unnormalized_input() {
        let overrides = compute_overrides(&with(|v| {
            v.density = f32::NAN;
            v.motion = 7.0;
        }));
        assert_eq!(overrides.get("--tuner-gap"), Some("16px"));
        assert_eq!(overrides.get("--tuner-duration"), Some("480ms"));
        assert_eq!(overrides.len(), 11);
    }
}
