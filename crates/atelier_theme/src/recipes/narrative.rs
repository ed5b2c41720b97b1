//! Narrative-only recipes
//!
//! These have no operational analogue: layered background motifs, the
//! section storyboard, and signature blocks. Narrative surfaces come in three
//! variants instead of one.

use super::SurfaceRecipe;
use serde::{Deserialize, Serialize};

/// Narrative surface variants
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceVariants {
    /// Derived from the operational surface, absent when it is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<SurfaceRecipe>,
    pub hero: SurfaceRecipe,
    pub feature: SurfaceRecipe,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MotifKind {
    Grain,
    Gradient,
    Grid,
    Orbs,
    Contours,
}

/// One layer of the background motif stack, bottom first
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotifLayer {
    pub kind: MotifKind,
    pub opacity: f32,
    /// CSS `mix-blend-mode`
    #[serde(default = "default_blend")]
    pub blend: String,
}

fn default_blend() -> String {
    "normal".to_string()
}

impl MotifLayer {
    pub fn new(kind: MotifKind, opacity: f32, blend: &str) -> Self {
        Self {
            kind,
            opacity,
            blend: blend.to_string(),
        }
    }
}

/// Which narrative surface a storyboard section sits on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionSurface {
    #[default]
    Default,
    Hero,
    Feature,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryboardSection {
    pub id: String,
    pub layout: String,
    #[serde(default)]
    pub surface: SectionSurface,
}

impl StoryboardSection {
    pub fn new(id: &str, layout: &str, surface: SectionSurface) -> Self {
        Self {
            id: id.to_string(),
            layout: layout.to_string(),
            surface,
        }
    }
}

/// Ordered section plan for a narrative page
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Storyboard {
    pub sections: Vec<StoryboardSection>,
}

impl Storyboard {
    pub fn section(&self, id: &str) -> Option<&StoryboardSection> {
        self.sections.iter().find(|s| s.id == id)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignatureVariant {
    #[default]
    Wordmark,
    Monogram,
    Stamp,
}

/// Signature-block configuration (closing brand mark on narrative pages)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignatureRecipe {
    pub enabled: bool,
    pub variant: SignatureVariant,
    /// Paint the block with the accent color instead of text color
    pub accent: bool,
}
