//! Taste profiles and color temperature

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Dominant color temperature of a reference
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTemperature {
    Warm,
    Cool,
    #[default]
    Neutral,
}

impl ColorTemperature {
    /// Vote order on exact ties: the first entry wins
    pub const TIE_ORDER: [ColorTemperature; 3] = [
        ColorTemperature::Cool,
        ColorTemperature::Neutral,
        ColorTemperature::Warm,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Warm => "warm",
            Self::Cool => "cool",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for ColorTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aesthetic profile; every continuous field lies in `[0, 1]`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TasteProfile {
    pub abstraction: f32,
    pub restraint: f32,
    pub density: f32,
    pub motion: f32,
    pub contrast: f32,
    #[serde(alias = "narrativeStrength")]
    pub narrative_strength: f32,
    #[serde(alias = "typographyLooseness")]
    pub typography_looseness: f32,
    #[serde(alias = "surfaceComplexity")]
    pub surface_complexity: f32,
    #[serde(alias = "colorTemperature")]
    pub color_temperature: ColorTemperature,
    pub motifs: BTreeSet<String>,
}

impl Default for TasteProfile {
    fn default() -> Self {
        Self::neutral()
    }
}

impl TasteProfile {
    /// Number of continuous fields
    pub const CONTINUOUS_FIELDS: usize = 8;

    /// Midpoint on every axis, neutral temperature, no motifs
    pub fn neutral() -> Self {
        Self {
            abstraction: 0.5,
            restraint: 0.5,
            density: 0.5,
            motion: 0.5,
            contrast: 0.5,
            narrative_strength: 0.5,
            typography_looseness: 0.5,
            surface_complexity: 0.5,
            color_temperature: ColorTemperature::Neutral,
            motifs: BTreeSet::new(),
        }
    }

    pub fn with_temperature(mut self, temperature: ColorTemperature) -> Self {
        self.color_temperature = temperature;
        self
    }

    pub fn with_motifs<I, S>(mut self, motifs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.motifs.extend(motifs.into_iter().map(Into::into));
        self
    }

    /// Continuous fields in declaration order
    pub fn continuous(&self) -> [f32; Self::CONTINUOUS_FIELDS] {
        [
            self.abstraction,
            self.restraint,
            self.density,
            self.motion,
            self.contrast,
            self.narrative_strength,
            self.typography_looseness,
            self.surface_complexity,
        ]
    }

    pub(crate) fn set_continuous(&mut self, values: [f32; Self::CONTINUOUS_FIELDS]) {
        let [abstraction, restraint, density, motion, contrast, narrative, typography, surface] =
            values;
        self.abstraction = abstraction;
        self.restraint = restraint;
        self.density = density;
        self.motion = motion;
        self.contrast = contrast;
        self.narrative_strength = narrative;
        self.typography_looseness = typography;
        self.surface_complexity = surface;
    }

    /// Clamp every continuous field into `[0, 1]`; non-finite values become 0.5
    pub fn clamped(mut self) -> Self {
        let values = self.continuous().map(|v| {
            if v.is_finite() {
                v.clamp(0.0, 1.0)
            } else {
                0.5
            }
        });
        self.set_continuous(values);
        self
    }
}
