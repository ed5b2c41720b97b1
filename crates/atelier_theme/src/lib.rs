//! Atelier Theme Packs
//!
//! Declarative design configuration resolved into concrete style parameters.
//!
//! # Overview
//!
//! A theme pack is a set of design tokens (colors, shadows, radii, type
//! scale, density) plus behavioral recipes for two usage contexts:
//!
//! - **Operational**: dense, restrained screens (dashboards, tools)
//! - **Narrative**: expressive, storytelling pages (landing, editorial)
//!
//! The configuration path runs one way:
//!
//! ```text
//! pack file ─▶ ThemePackInput ─▶ normalize ─▶ ThemeRegistry ─▶ resolve_recipes
//!                                                        └────▶ ThemeApplier ─▶ surface
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use atelier_theme::{Context, MemorySurface, ThemeApplier, ThemeRegistry, resolve_recipes};
//!
//! let registry = ThemeRegistry::with_presets();
//! let pack = registry.load("chronicle-dark").expect("built-in preset");
//!
//! // Recipes for the requested context
//! let recipes = resolve_recipes(&*pack, Context::Narrative);
//! assert!(recipes.get("storyboard").is_some());
//!
//! // Project tokens onto a surface
//! let mut applier = ThemeApplier::new(MemorySurface::new());
//! applier.subscribe(|change| println!("applied {} ({})", change.pack.name, change.context));
//! applier.apply(&pack, Context::Narrative);
//! assert_eq!(applier.surface().attribute("data-mode"), Some("dark"));
//! ```
//!
//! # Legacy packs
//!
//! Packs authored with a single `recipes` table are upgraded by
//! [`normalize`]: the table becomes the operational set and the narrative set
//! is synthesized from it plus mode-dependent defaults
//! ([`recipes::defaults`]). The legacy/current decision is made once, when a
//! pack is read ([`ThemePackInput::from_toml_str`],
//! [`ThemePackInput::from_json_str`]), and carried as a tagged enum after
//! that.

pub mod applier;
pub mod error;
pub mod normalize;
pub mod pack;
pub mod presets;
pub mod recipes;
pub mod registry;
pub mod resolve;
pub mod scheme;
pub mod source;
pub mod tokens;

// Re-export commonly used types
pub use applier::{
    style_parameters, AppliedState, MemorySurface, StyleSurface, SubscriptionId, ThemeApplier,
    ThemeChange, ThemeListener, CONTEXT_ATTRIBUTE, MODE_ATTRIBUTE,
};
pub use error::ThemeError;
pub use normalize::normalize;
pub use pack::{LegacyThemePack, RecipesByContext, ThemePack, ThemePackInput};
pub use presets::ThemePackPreset;
pub use recipes::{Recipe, RecipeSet};
pub use registry::{registry_key, ThemeRegistry};
pub use resolve::{resolve_recipes, RecipeSource};
pub use scheme::{ColorScheme, Context};
pub use tokens::*;
