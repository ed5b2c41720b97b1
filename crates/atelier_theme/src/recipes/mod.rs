//! Context recipes
//!
//! A recipe is a small, named bundle of behavioral settings for one UI
//! concern (card styling, motion timing, ...). A [`RecipeSet`] holds the
//! recipes of one usage context. Every recipe is optional: packs authored in
//! the legacy shape may lack some, and absence propagates through
//! normalization instead of failing it.
//!
//! Recipes are looked up by name with [`RecipeSet::get`].

pub mod defaults;
mod motion;
mod narrative;
mod surface;

pub use motion::*;
pub use narrative::*;
pub use surface::*;

use serde::{Deserialize, Serialize};

/// Recipes of one usage context
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface: Option<SurfaceRecipe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surfaces: Option<SurfaceVariants>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardRecipe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<ListRecipe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<TableRecipe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconRecipe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<PlaceholderRecipe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaRecipe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motion: Option<MotionRecipe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motifs: Option<Vec<MotifLayer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storyboard: Option<Storyboard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<SignatureRecipe>,
    #[serde(alias = "motionBindings", skip_serializing_if = "Option::is_none")]
    pub motion_bindings: Option<Vec<MotionBinding>>,
}

/// A borrowed recipe, as returned by name lookup
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Recipe<'a> {
    Surface(&'a SurfaceRecipe),
    Surfaces(&'a SurfaceVariants),
    Card(&'a CardRecipe),
    List(&'a ListRecipe),
    Table(&'a TableRecipe),
    Icon(&'a IconRecipe),
    Placeholder(&'a PlaceholderRecipe),
    Media(&'a MediaRecipe),
    Motion(&'a MotionRecipe),
    Motifs(&'a [MotifLayer]),
    Storyboard(&'a Storyboard),
    Signature(&'a SignatureRecipe),
    MotionBindings(&'a [MotionBinding]),
}

impl RecipeSet {
    /// Every recipe name [`RecipeSet::get`] understands
    pub const NAMES: [&'static str; 13] = [
        "surface",
        "surfaces",
        "card",
        "list",
        "table",
        "icon",
        "placeholder",
        "media",
        "motion",
        "motifs",
        "storyboard",
        "signature",
        "motion_bindings",
    ];

    /// Look up a recipe by name
    ///
    /// Returns `None` both for unknown names and for recipes absent from
    /// this set. `motionBindings` is accepted as an alias.
    pub fn get(&self, name: &str) -> Option<Recipe<'_>> {
        match name {
            "surface" => self.surface.as_ref().map(Recipe::Surface),
            "surfaces" => self.surfaces.as_ref().map(Recipe::Surfaces),
            "card" => self.card.as_ref().map(Recipe::Card),
            "list" => self.list.as_ref().map(Recipe::List),
            "table" => self.table.as_ref().map(Recipe::Table),
            "icon" => self.icon.as_ref().map(Recipe::Icon),
            "placeholder" => self.placeholder.as_ref().map(Recipe::Placeholder),
            "media" => self.media.as_ref().map(Recipe::Media),
            "motion" => self.motion.as_ref().map(Recipe::Motion),
            "motifs" => self.motifs.as_deref().map(Recipe::Motifs),
            "storyboard" => self.storyboard.as_ref().map(Recipe::Storyboard),
            "signature" => self.signature.as_ref().map(Recipe::Signature),
            "motion_bindings" | "motionBindings" => {
                self.motion_bindings.as_deref().map(Recipe::MotionBindings)
            }
            _ => None,
        }
    }

    /// Whether a recipe with this name is present
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}
