//! Reading theme packs from TOML and JSON
//!
//! This is the only place where a pack's shape is inspected. A document
//! whose `recipes_by_context` carries both contexts becomes
//! [`ThemePackInput::Current`]; anything else is
//! [`ThemePackInput::Legacy`], with its operational recipes taken from
//! `recipes` or, failing that, from `recipes_by_context.operational`.

use std::path::Path;

use serde::Deserialize;

use crate::error::ThemeError;
use crate::pack::{LegacyThemePack, RecipesByContext, ThemePack, ThemePackInput};
use crate::recipes::RecipeSet;
use crate::scheme::ColorScheme;
use crate::tokens::TokenSet;

#[derive(Debug, Default, Deserialize)]
struct RawRecipesByContext {
    #[serde(default)]
    operational: Option<RecipeSet>,
    #[serde(default)]
    narrative: Option<RecipeSet>,
}

/// Either pack shape, as it appears on disk
#[derive(Debug, Deserialize)]
struct RawThemePack {
    name: String,
    mode: ColorScheme,
    tokens: TokenSet,
    #[serde(default)]
    recipes: Option<RecipeSet>,
    #[serde(default, alias = "recipesByContext")]
    recipes_by_context: Option<RawRecipesByContext>,
}

impl RawThemePack {
    fn classify(self) -> ThemePackInput {
        let RawThemePack {
            name,
            mode,
            tokens,
            recipes,
            recipes_by_context,
        } = self;

        match recipes_by_context {
            Some(RawRecipesByContext {
                operational: Some(operational),
                narrative: Some(narrative),
            }) => ThemePackInput::Current(ThemePack {
                name,
                mode,
                tokens,
                recipes_by_context: RecipesByContext {
                    operational,
                    narrative,
                },
            }),
            partial => {
                let recipes = recipes
                    .or_else(|| partial.and_then(|c| c.operational))
                    .unwrap_or_default();
                ThemePackInput::Legacy(LegacyThemePack {
                    name,
                    mode,
                    tokens,
                    recipes,
                })
            }
        }
    }
}

impl ThemePackInput {
    /// Parse a pack authored in TOML
    pub fn from_toml_str(src: &str) -> Result<Self, ThemeError> {
        let raw: RawThemePack = toml::from_str(src)?;
        Ok(raw.classify())
    }

    /// Parse a pack authored in JSON
    pub fn from_json_str(src: &str) -> Result<Self, ThemeError> {
        let raw: RawThemePack = serde_json::from_str(src)?;
        Ok(raw.classify())
    }

    /// Read a pack file, picking the parser from its extension
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        read_pack_file(path.as_ref())
    }
}

pub(crate) fn is_pack_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("toml") | Some("json")
    )
}

pub(crate) fn read_pack_file(path: &Path) -> Result<ThemePackInput, ThemeError> {
    let parse: fn(&str) -> Result<ThemePackInput, ThemeError> =
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => ThemePackInput::from_toml_str,
            Some("json") => ThemePackInput::from_json_str,
            _ => return Err(ThemeError::UnsupportedFormat(path.to_path_buf())),
        };
    let src = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&src)
}
