//! Theme pack shapes
//!
//! A [`ThemePack`] is the current, dual-context shape: tokens plus one recipe
//! set per [`Context`]. A [`LegacyThemePack`] carries a single, implicitly
//! operational recipe set; it only exists as normalizer input.
//!
//! Callers label input explicitly with [`ThemePackInput`]. Pack files are
//! classified once, when they are read (see [`crate::source`]).

use crate::recipes::RecipeSet;
use crate::scheme::{ColorScheme, Context};
use crate::tokens::TokenSet;
use serde::{Deserialize, Serialize};

/// Recipe sets for both usage contexts
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipesByContext {
    pub operational: RecipeSet,
    pub narrative: RecipeSet,
}

impl RecipesByContext {
    pub fn get(&self, context: Context) -> &RecipeSet {
        match context {
            Context::Operational => &self.operational,
            Context::Narrative => &self.narrative,
        }
    }
}

/// A normalized theme pack
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemePack {
    pub name: String,
    pub mode: ColorScheme,
    pub tokens: TokenSet,
    #[serde(alias = "recipesByContext")]
    pub recipes_by_context: RecipesByContext,
}

/// A pack authored against the single-context shape
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegacyThemePack {
    pub name: String,
    pub mode: ColorScheme,
    pub tokens: TokenSet,
    #[serde(default)]
    pub recipes: RecipeSet,
}

/// Normalizer input, tagged by shape
#[derive(Clone, Debug, PartialEq)]
pub enum ThemePackInput {
    Legacy(LegacyThemePack),
    Current(ThemePack),
}

impl ThemePackInput {
    pub fn name(&self) -> &str {
        match self {
            Self::Legacy(pack) => &pack.name,
            Self::Current(pack) => &pack.name,
        }
    }

    pub fn mode(&self) -> ColorScheme {
        match self {
            Self::Legacy(pack) => pack.mode,
            Self::Current(pack) => pack.mode,
        }
    }

    pub fn tokens(&self) -> &TokenSet {
        match self {
            Self::Legacy(pack) => &pack.tokens,
            Self::Current(pack) => &pack.tokens,
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::Legacy(_))
    }
}

impl From<ThemePack> for ThemePackInput {
    fn from(pack: ThemePack) -> Self {
        Self::Current(pack)
    }
}

impl From<LegacyThemePack> for ThemePackInput {
    fn from(pack: LegacyThemePack) -> Self {
        Self::Legacy(pack)
    }
}

impl From<ThemePackInput> for ThemePack {
    fn from(input: ThemePackInput) -> Self {
        crate::normalize::normalize(input)
    }
}
