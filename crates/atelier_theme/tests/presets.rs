use atelier_theme::{
    normalize, registry_key, resolve_recipes, style_parameters, ColorScheme, Context,
    ThemePackPreset, ThemeRegistry,
};

#[test]
fn preset_catalog_contains_expected_presets() {
    let mut ids: Vec<&str> = ThemePackPreset::all().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["atlas-light", "chronicle-dark"]);
}

#[test]
fn preset_ids_match_registry_keys() {
    for preset in ThemePackPreset::all() {
        assert_eq!(registry_key(preset.display_name()), preset.id());
    }
}

#[test]
fn presets_normalize_with_both_contexts() {
    for preset in ThemePackPreset::all() {
        let pack = normalize(preset.input());
        assert_eq!(pack.mode, preset.mode());
        for context in Context::ALL {
            let recipes = resolve_recipes(&pack, context);
            assert!(
                recipes.get("motion").is_some(),
                "preset={preset:?} context={context:?}"
            );
        }
        assert!(pack.recipes_by_context.narrative.get("storyboard").is_some());
    }
}

#[test]
fn presets_have_distinct_modes_and_colors() {
    let chronicle = ThemePackPreset::Chronicle.tokens();
    let atlas = ThemePackPreset::Atlas.tokens();

    assert_eq!(ThemePackPreset::Chronicle.mode(), ColorScheme::Dark);
    assert_eq!(ThemePackPreset::Atlas.mode(), ColorScheme::Light);
    assert_ne!(chronicle.colors.base, atlas.colors.base);
}

#[test]
fn presets_project_the_same_parameter_names() {
    let chronicle = style_parameters(&ThemePackPreset::Chronicle.tokens());
    let atlas = style_parameters(&ThemePackPreset::Atlas.tokens());
    let chronicle_keys: Vec<&String> = chronicle.keys().collect();
    let atlas_keys: Vec<&String> = atlas.keys().collect();
    assert_eq!(chronicle_keys, atlas_keys);
}

#[test]
fn chronicle_dark_loads_by_key() {
    let registry = ThemeRegistry::with_presets();
    let pack = registry.load("chronicle-dark").unwrap();
    assert_eq!(pack.name, "Chronicle Dark");
}
