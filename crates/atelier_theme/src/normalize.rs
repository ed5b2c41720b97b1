//! Legacy-to-current pack normalization
//!
//! Upgrades a single-context pack into the dual-context shape. The
//! operational recipes are kept verbatim (with media and motion filled in
//! when missing) and the narrative set is synthesized from them plus the
//! mode-parameterized defaults in [`crate::recipes::defaults`].
//!
//! Normalization never fails. Recipes missing from a legacy pack stay absent
//! in the recipes derived from them.

use crate::pack::{LegacyThemePack, RecipesByContext, ThemePack, ThemePackInput};
use crate::recipes::defaults;
use crate::recipes::{CardRecipe, RecipeSet, SurfaceVariants};
use crate::scheme::ColorScheme;
use tracing::debug;

/// Normalize any pack input into the current shape
///
/// Current packs are returned unchanged, so normalizing twice is the same as
/// normalizing once.
pub fn normalize(input: ThemePackInput) -> ThemePack {
    match input {
        ThemePackInput::Current(pack) => pack,
        ThemePackInput::Legacy(legacy) => upgrade_legacy(legacy),
    }
}

fn upgrade_legacy(legacy: LegacyThemePack) -> ThemePack {
    let LegacyThemePack {
        name,
        mode,
        tokens,
        recipes,
    } = legacy;

    let operational = operational_recipes(recipes, mode);
    let narrative = synthesize_narrative(&operational, mode);

    debug!(pack = %name, %mode, "normalized legacy theme pack");

    ThemePack {
        name,
        mode,
        tokens,
        recipes_by_context: RecipesByContext {
            operational,
            narrative,
        },
    }
}

/// Complete a legacy recipe set for the operational context
///
/// Authored recipes win; media and motion defaults only fill gaps.
pub fn operational_recipes(mut recipes: RecipeSet, mode: ColorScheme) -> RecipeSet {
    recipes
        .media
        .get_or_insert_with(|| defaults::operational_media(mode));
    recipes
        .motion
        .get_or_insert_with(|| defaults::operational_motion(mode));
    recipes
}

/// Build the narrative recipe set from an operational one
pub fn synthesize_narrative(operational: &RecipeSet, mode: ColorScheme) -> RecipeSet {
    RecipeSet {
        surface: None,
        surfaces: Some(SurfaceVariants {
            default: operational
                .surface
                .as_ref()
                .map(defaults::narrative_default_surface),
            hero: defaults::hero_surface(mode),
            feature: defaults::feature_surface(mode),
        }),
        card: operational.card.as_ref().map(|card| CardRecipe {
            hover_lift: true,
            ..card.clone()
        }),
        list: operational.list.clone(),
        // Tables are an operational concern only.
        table: None,
        icon: operational.icon.clone(),
        placeholder: operational.placeholder.clone(),
        media: Some(defaults::narrative_media(mode)),
        motion: Some(defaults::narrative_motion(mode)),
        motifs: Some(defaults::motif_layers(mode)),
        storyboard: Some(defaults::storyboard(mode)),
        signature: Some(defaults::signature_blocks(mode)),
        motion_bindings: Some(defaults::motion_bindings(mode)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::ThemePackPreset;
    use crate::recipes::{CardVariant, MediaRecipe, MediaTreatment, SurfaceRecipe};
    use pretty_assertions::assert_eq;

    fn minimal_legacy(mode: ColorScheme) -> LegacyThemePack {
        LegacyThemePack {
            name: "Minimal".to_string(),
            mode,
            tokens: ThemePackPreset::Chronicle.tokens(),
            recipes: RecipeSet::default(),
        }
    }

    #[test]
    fn normalize_is_idempotent() {
        for mode in [ColorScheme::Dark, ColorScheme::Light] {
            let once = normalize(minimal_legacy(mode).into());
            let twice = normalize(once.clone().into());
            assert_eq!(twice, once);
        }
    }

    #[test]
    fn minimal_legacy_gets_both_contexts_populated() {
        for mode in [ColorScheme::Dark, ColorScheme::Light] {
            let pack = normalize(minimal_legacy(mode).into());
            let op = &pack.recipes_by_context.operational;
            let nar = &pack.recipes_by_context.narrative;

            assert_eq!(op.media, Some(defaults::operational_media(mode)));
            assert_eq!(op.motion, Some(defaults::operational_motion(mode)));

            let surfaces = nar.surfaces.as_ref().unwrap();
            // No operational surface to derive from.
            assert_eq!(surfaces.default, None);
            assert_eq!(surfaces.hero, defaults::hero_surface(mode));
            assert_eq!(surfaces.feature, defaults::feature_surface(mode));
            assert!(nar.media.is_some());
            assert!(nar.motion.is_some());
            assert!(nar.motifs.is_some());
            assert!(nar.storyboard.is_some());
            assert!(nar.signature.is_some());
            assert!(nar.motion_bindings.is_some());
        }
    }

    #[test]
    fn operational_recipes_are_kept_verbatim() {
        let mut legacy = minimal_legacy(ColorScheme::Light);
        let authored_media = MediaRecipe {
            aspect_ratio: "1/1".to_string(),
            treatment: MediaTreatment::Vignette,
            overlay_opacity: 0.5,
            rounded: false,
        };
        legacy.recipes.media = Some(authored_media.clone());
        legacy.recipes.card = Some(CardRecipe {
            variant: CardVariant::Elevated,
            hover_lift: false,
            compact: true,
        });

        let pack = normalize(legacy.into());
        let op = &pack.recipes_by_context.operational;
        assert_eq!(op.media, Some(authored_media));
        assert!(!op.card.as_ref().unwrap().hover_lift);

        let nar_card = pack.recipes_by_context.narrative.card.unwrap();
        assert_eq!(nar_card.variant, CardVariant::Elevated);
        assert!(nar_card.hover_lift);
        assert!(nar_card.compact);
    }

    #[test]
    fn narrative_default_surface_is_derived_from_operational() {
        let mut legacy = minimal_legacy(ColorScheme::Dark);
        legacy.recipes.surface = Some(SurfaceRecipe {
            border: true,
            gradient: false,
            glow: true,
            blur: 6,
            ..Default::default()
        });
        legacy.recipes.table = Some(Default::default());

        let pack = normalize(legacy.into());
        let nar = &pack.recipes_by_context.narrative;
        let default = nar.surfaces.as_ref().unwrap().default.as_ref().unwrap();
        assert!(!default.border);
        assert!(default.gradient);
        assert!(default.glow);
        assert_eq!(default.blur, 6);
        assert_eq!(nar.table, None);
        assert_eq!(nar.surface, None);
    }

    #[test]
    fn current_packs_pass_through_unchanged() {
        let pack = normalize(ThemePackPreset::Atlas.input());
        let again = normalize(ThemePackInput::Current(pack.clone()));
        assert_eq!(again, pack);
    }
}
