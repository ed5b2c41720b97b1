//! Presentational recipes shared by both contexts

use serde::{Deserialize, Serialize};

/// Texture painted under a surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SurfaceTexture {
    #[default]
    None,
    Grain,
    Grid,
    Dots,
}

/// Surface treatment: borders, gradients, glow, backdrop blur
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceRecipe {
    pub border: bool,
    pub gradient: bool,
    pub glow: bool,
    /// Backdrop blur radius in px (0 = none)
    pub blur: u8,
    pub texture: SurfaceTexture,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardVariant {
    Flat,
    #[default]
    Outlined,
    Elevated,
    Glass,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardRecipe {
    pub variant: CardVariant,
    /// Raise the card on hover
    #[serde(alias = "hoverLift")]
    pub hover_lift: bool,
    pub compact: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListVariant {
    Plain,
    #[default]
    Divided,
    Striped,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListRecipe {
    pub variant: ListVariant,
    pub dense: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableVariant {
    #[default]
    Minimal,
    Bordered,
    Striped,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableRecipe {
    pub variant: TableVariant,
    #[serde(alias = "stickyHeader")]
    pub sticky_header: bool,
}

/// Icon sizing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconRecipe {
    pub size: String,
    pub stroke: f32,
}

impl Default for IconRecipe {
    fn default() -> Self {
        Self {
            size: "16px".to_string(),
            stroke: 1.5,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlaceholderStyle {
    #[default]
    Skeleton,
    Shimmer,
    Spinner,
    Blur,
}

/// Placeholder / loading presentation
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceholderRecipe {
    pub style: PlaceholderStyle,
    pub animated: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaTreatment {
    #[default]
    Plain,
    Duotone,
    Grain,
    Vignette,
}

/// Image and video framing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaRecipe {
    #[serde(alias = "aspectRatio")]
    pub aspect_ratio: String,
    pub treatment: MediaTreatment,
    /// Opacity of the scrim laid over media, 0..=1
    #[serde(alias = "overlayOpacity")]
    pub overlay_opacity: f32,
    pub rounded: bool,
}

impl Default for MediaRecipe {
    fn default() -> Self {
        Self {
            aspect_ratio: "16/9".to_string(),
            treatment: MediaTreatment::Plain,
            overlay_opacity: 0.0,
            rounded: true,
        }
    }
}
