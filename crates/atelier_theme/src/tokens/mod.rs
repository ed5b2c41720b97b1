//! Design tokens for theme packs
//!
//! Tokens are the style primitives a pack projects onto a surface:
//! - Colors (core, accent, semantic)
//! - Shadows
//! - Border radii
//! - Type scale
//! - Density (row/control heights, gutters, gaps, padding)
//!
//! Every field is required. A token set missing a type step or a density
//! dimension fails to deserialize rather than applying partially.

mod color;
mod density;
mod radius;
mod shadow;
mod typography;

pub use color::*;
pub use density::*;
pub use radius::*;
pub use shadow::*;
pub use typography::*;

use serde::{Deserialize, Serialize};

/// Complete token set carried by a theme pack
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenSet {
    pub colors: ColorTokens,
    pub shadows: ShadowTokens,
    pub radii: RadiusTokens,
    #[serde(alias = "typeScale")]
    pub type_scale: TypeScale,
    pub density: DensityTokens,
}
