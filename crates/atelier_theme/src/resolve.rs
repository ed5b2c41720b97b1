//! Context-aware recipe resolution

use crate::pack::{LegacyThemePack, ThemePack, ThemePackInput};
use crate::recipes::RecipeSet;
use crate::scheme::Context;

/// Anything that can hand out the recipe set for a context
pub trait RecipeSource {
    fn recipes_for(&self, context: Context) -> &RecipeSet;
}

impl RecipeSource for ThemePack {
    fn recipes_for(&self, context: Context) -> &RecipeSet {
        self.recipes_by_context.get(context)
    }
}

/// Legacy packs have a single recipe set and ignore the context.
impl RecipeSource for LegacyThemePack {
    fn recipes_for(&self, _context: Context) -> &RecipeSet {
        &self.recipes
    }
}

impl RecipeSource for ThemePackInput {
    fn recipes_for(&self, context: Context) -> &RecipeSet {
        match self {
            Self::Legacy(pack) => pack.recipes_for(context),
            Self::Current(pack) => pack.recipes_for(context),
        }
    }
}

/// Resolve the recipe set a pack uses in `context`
pub fn resolve_recipes<S>(source: &S, context: Context) -> &RecipeSet
where
    S: RecipeSource + ?Sized,
{
    source.recipes_for(context)
}
