//! Built-in theme pack presets.

use crate::pack::{LegacyThemePack, RecipesByContext, ThemePack, ThemePackInput};
use crate::recipes::*;
use crate::scheme::ColorScheme;
use crate::tokens::*;
use std::fmt::{Display, Formatter};

/// Built-in preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePackPreset {
    /// Dark editorial pack, authored in the legacy single-context shape.
    Chronicle,
    /// Light product pack, authored with both contexts.
    Atlas,
}

impl ThemePackPreset {
    /// Stable preset id (the registry key).
    pub fn id(self) -> &'static str {
        match self {
            Self::Chronicle => "chronicle-dark",
            Self::Atlas => "atlas-light",
        }
    }

    /// Pack name as registered.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Chronicle => "Chronicle Dark",
            Self::Atlas => "Atlas Light",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePackPreset] {
        const PRESETS: [ThemePackPreset; 2] = [ThemePackPreset::Chronicle, ThemePackPreset::Atlas];
        &PRESETS
    }

    pub fn mode(self) -> ColorScheme {
        match self {
            Self::Chronicle => ColorScheme::Dark,
            Self::Atlas => ColorScheme::Light,
        }
    }

    pub fn tokens(self) -> TokenSet {
        match self {
            Self::Chronicle => chronicle_tokens(),
            Self::Atlas => atlas_tokens(),
        }
    }

    /// The preset as authored, ready for normalization.
    pub fn input(self) -> ThemePackInput {
        match self {
            Self::Chronicle => ThemePackInput::Legacy(LegacyThemePack {
                name: self.display_name().to_string(),
                mode: self.mode(),
                tokens: self.tokens(),
                recipes: chronicle_recipes(),
            }),
            Self::Atlas => ThemePackInput::Current(ThemePack {
                name: self.display_name().to_string(),
                mode: self.mode(),
                tokens: self.tokens(),
                recipes_by_context: atlas_recipes(),
            }),
        }
    }
}

impl Display for ThemePackPreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Metrics shared by both presets; heading weight and tracking differ.
fn type_scale(heading_weight: &str, display_tracking: &str) -> TypeScale {
    TypeScale {
        heading_1: TypeStep::new("3rem", heading_weight, display_tracking, "1.1"),
        heading_2: TypeStep::new("2.25rem", heading_weight, display_tracking, "1.15"),
        heading_3: TypeStep::new("1.5rem", "600", "-0.01em", "1.25"),
        body: TypeStep::new("1rem", "400", "0", "1.6"),
        body_sm: TypeStep::new("0.875rem", "400", "0", "1.5"),
        caption: TypeStep::new("0.75rem", "500", "0.01em", "1.4"),
        label: TypeStep::new("0.75rem", "600", "0.08em", "1.2").with_transform("uppercase"),
    }
}

fn chronicle_tokens() -> TokenSet {
    TokenSet {
        colors: ColorTokens {
            base: "#0e0f13".to_string(),
            surface: "#16181e".to_string(),
            border: "#2a2d36".to_string(),
            text: "#e8e6e1".to_string(),
            accent: AccentColors {
                primary: "#e0a458".to_string(),
                secondary: "#7fa7c9".to_string(),
                muted: "rgba(224, 164, 88, 0.16)".to_string(),
            },
            semantic: SemanticColors {
                success: "#5fbf8f".to_string(),
                success_muted: "rgba(95, 191, 143, 0.16)".to_string(),
                warning: "#e6b450".to_string(),
                warning_muted: "rgba(230, 180, 80, 0.16)".to_string(),
                danger: "#e5676b".to_string(),
                danger_muted: "rgba(229, 103, 107, 0.16)".to_string(),
            },
        },
        shadows: ShadowTokens {
            sm: "0 1px 2px rgba(0, 0, 0, 0.4)".to_string(),
            md: "0 4px 12px rgba(0, 0, 0, 0.45)".to_string(),
            lg: "0 16px 40px rgba(0, 0, 0, 0.55)".to_string(),
        },
        radii: RadiusTokens {
            sm: "4px".to_string(),
            lg: "12px".to_string(),
        },
        type_scale: type_scale("500", "-0.01em"),
        density: DensityTokens {
            row_height: "40px".to_string(),
            row_height_compact: "32px".to_string(),
            control_height: "36px".to_string(),
            control_height_sm: "28px".to_string(),
            gutter: "24px".to_string(),
            gap: "16px".to_string(),
            gap_sm: "8px".to_string(),
            card_padding: "20px".to_string(),
        },
    }
}

fn chronicle_recipes() -> RecipeSet {
    RecipeSet {
        surface: Some(SurfaceRecipe {
            border: true,
            gradient: false,
            glow: false,
            blur: 0,
            texture: SurfaceTexture::Grain,
        }),
        card: Some(CardRecipe {
            variant: CardVariant::Outlined,
            hover_lift: false,
            compact: false,
        }),
        list: Some(ListRecipe {
            variant: ListVariant::Divided,
            dense: true,
        }),
        table: Some(TableRecipe {
            variant: TableVariant::Minimal,
            sticky_header: true,
        }),
        icon: Some(IconRecipe {
            size: "16px".to_string(),
            stroke: 1.5,
        }),
        placeholder: Some(PlaceholderRecipe {
            style: PlaceholderStyle::Shimmer,
            animated: true,
        }),
        ..Default::default()
    }
}

fn atlas_tokens() -> TokenSet {
    TokenSet {
        colors: ColorTokens {
            base: "#ffffff".to_string(),
            surface: "#f6f7f9".to_string(),
            border: "#e3e6eb".to_string(),
            text: "#14171c".to_string(),
            accent: AccentColors {
                primary: "#2f5bea".to_string(),
                secondary: "#0f9d8a".to_string(),
                muted: "rgba(47, 91, 234, 0.10)".to_string(),
            },
            semantic: SemanticColors {
                success: "#1a8f5a".to_string(),
                success_muted: "rgba(26, 143, 90, 0.10)".to_string(),
                warning: "#b7791f".to_string(),
                warning_muted: "rgba(183, 121, 31, 0.10)".to_string(),
                danger: "#d13b3b".to_string(),
                danger_muted: "rgba(209, 59, 59, 0.10)".to_string(),
            },
        },
        shadows: ShadowTokens {
            sm: "0 1px 2px rgba(20, 23, 28, 0.06)".to_string(),
            md: "0 4px 12px rgba(20, 23, 28, 0.08)".to_string(),
            lg: "0 16px 40px rgba(20, 23, 28, 0.12)".to_string(),
        },
        radii: RadiusTokens {
            sm: "6px".to_string(),
            lg: "16px".to_string(),
        },
        type_scale: type_scale("700", "-0.02em"),
        density: DensityTokens {
            row_height: "44px".to_string(),
            row_height_compact: "36px".to_string(),
            control_height: "40px".to_string(),
            control_height_sm: "32px".to_string(),
            gutter: "32px".to_string(),
            gap: "20px".to_string(),
            gap_sm: "12px".to_string(),
            card_padding: "24px".to_string(),
        },
    }
}

fn atlas_recipes() -> RecipesByContext {
    let mode = ColorScheme::Light;
    let operational = RecipeSet {
        surface: Some(SurfaceRecipe {
            border: true,
            ..Default::default()
        }),
        card: Some(CardRecipe {
            variant: CardVariant::Flat,
            hover_lift: false,
            compact: true,
        }),
        list: Some(ListRecipe {
            variant: ListVariant::Plain,
            dense: true,
        }),
        table: Some(TableRecipe {
            variant: TableVariant::Striped,
            sticky_header: true,
        }),
        icon: Some(IconRecipe::default()),
        placeholder: Some(PlaceholderRecipe {
            style: PlaceholderStyle::Skeleton,
            animated: false,
        }),
        media: Some(defaults::operational_media(mode)),
        motion: Some(defaults::operational_motion(mode)),
        ..Default::default()
    };
    let narrative = RecipeSet {
        surfaces: Some(SurfaceVariants {
            default: Some(SurfaceRecipe::default()),
            hero: defaults::hero_surface(mode),
            feature: SurfaceRecipe {
                border: true,
                glow: true,
                blur: 16,
                ..Default::default()
            },
        }),
        card: Some(CardRecipe {
            variant: CardVariant::Elevated,
            hover_lift: true,
            compact: false,
        }),
        icon: Some(IconRecipe {
            size: "24px".to_string(),
            stroke: 1.25,
        }),
        media: Some(defaults::narrative_media(mode)),
        motion: Some(defaults::narrative_motion(mode)),
        motifs: Some(vec![MotifLayer::new(MotifKind::Gradient, 0.5, "normal")]),
        storyboard: Some(defaults::storyboard(mode)),
        signature: Some(SignatureRecipe {
            enabled: false,
            ..Default::default()
        }),
        motion_bindings: Some(defaults::motion_bindings(mode)),
        ..Default::default()
    };
    RecipesByContext {
        operational,
        narrative,
    }
}
