//! Synthesized recipe defaults
//!
//! Each function builds one recipe for one mode. Every function is total over
//! [`ColorScheme`], so normalization never hits a mode without a default.

use super::*;
use crate::scheme::ColorScheme;

/// Media framing for dense, operational screens
pub fn operational_media(mode: ColorScheme) -> MediaRecipe {
    MediaRecipe {
        aspect_ratio: "4/3".to_string(),
        treatment: MediaTreatment::Plain,
        overlay_opacity: match mode {
            ColorScheme::Dark => 0.12,
            ColorScheme::Light => 0.0,
        },
        rounded: true,
    }
}

/// Short, subtle transitions for operational screens
pub fn operational_motion(mode: ColorScheme) -> MotionRecipe {
    MotionRecipe {
        duration_ms: match mode {
            ColorScheme::Dark => 160,
            ColorScheme::Light => 140,
        },
        easing: Easing::EaseOut,
        behavior: MotionBehavior::Subtle,
        stagger_ms: 0,
    }
}

/// Media framing for narrative pages: wide, treated, with a scrim
pub fn narrative_media(mode: ColorScheme) -> MediaRecipe {
    let (treatment, overlay_opacity) = match mode {
        ColorScheme::Dark => (MediaTreatment::Grain, 0.35),
        ColorScheme::Light => (MediaTreatment::Duotone, 0.18),
    };
    MediaRecipe {
        aspect_ratio: "21/9".to_string(),
        treatment,
        overlay_opacity,
        rounded: false,
    }
}

/// Longer, expressive motion for narrative pages
pub fn narrative_motion(mode: ColorScheme) -> MotionRecipe {
    MotionRecipe {
        duration_ms: match mode {
            ColorScheme::Dark => 600,
            ColorScheme::Light => 480,
        },
        easing: Easing::EMPHASIZED,
        behavior: MotionBehavior::Expressive,
        stagger_ms: 80,
    }
}

/// Re-derive the default narrative surface from the operational one
pub fn narrative_default_surface(operational: &SurfaceRecipe) -> SurfaceRecipe {
    SurfaceRecipe {
        border: false,
        gradient: true,
        ..operational.clone()
    }
}

pub fn hero_surface(mode: ColorScheme) -> SurfaceRecipe {
    match mode {
        ColorScheme::Dark => SurfaceRecipe {
            border: false,
            gradient: true,
            glow: true,
            blur: 24,
            texture: SurfaceTexture::Grain,
        },
        ColorScheme::Light => SurfaceRecipe {
            border: false,
            gradient: true,
            glow: false,
            blur: 12,
            texture: SurfaceTexture::Dots,
        },
    }
}

pub fn feature_surface(mode: ColorScheme) -> SurfaceRecipe {
    match mode {
        ColorScheme::Dark => SurfaceRecipe {
            border: true,
            gradient: true,
            glow: true,
            blur: 8,
            texture: SurfaceTexture::None,
        },
        ColorScheme::Light => SurfaceRecipe {
            border: true,
            gradient: false,
            glow: false,
            blur: 0,
            texture: SurfaceTexture::Grid,
        },
    }
}

/// Layered background motifs, bottom layer first
pub fn motif_layers(mode: ColorScheme) -> Vec<MotifLayer> {
    match mode {
        ColorScheme::Dark => vec![
            MotifLayer::new(MotifKind::Gradient, 0.6, "normal"),
            MotifLayer::new(MotifKind::Orbs, 0.25, "screen"),
            MotifLayer::new(MotifKind::Grain, 0.08, "overlay"),
        ],
        ColorScheme::Light => vec![
            MotifLayer::new(MotifKind::Gradient, 0.4, "normal"),
            MotifLayer::new(MotifKind::Contours, 0.12, "multiply"),
            MotifLayer::new(MotifKind::Grain, 0.05, "multiply"),
        ],
    }
}

/// Section plan for a narrative page
pub fn storyboard(mode: ColorScheme) -> Storyboard {
    let proof_layout = match mode {
        ColorScheme::Dark => "logo-wall",
        ColorScheme::Light => "quote-grid",
    };
    Storyboard {
        sections: vec![
            StoryboardSection::new("hero", "split", SectionSurface::Hero),
            StoryboardSection::new("proof", proof_layout, SectionSurface::Default),
            StoryboardSection::new("features", "bento", SectionSurface::Feature),
            StoryboardSection::new("story", "timeline", SectionSurface::Default),
            StoryboardSection::new("closing", "centered", SectionSurface::Hero),
        ],
    }
}

pub fn signature_blocks(mode: ColorScheme) -> SignatureRecipe {
    SignatureRecipe {
        enabled: true,
        variant: match mode {
            ColorScheme::Dark => SignatureVariant::Monogram,
            ColorScheme::Light => SignatureVariant::Wordmark,
        },
        accent: mode.is_dark(),
    }
}

/// Which storyboard targets animate, and on what
pub fn motion_bindings(mode: ColorScheme) -> Vec<MotionBinding> {
    let hero_effect = match mode {
        ColorScheme::Dark => "glow-in",
        ColorScheme::Light => "fade-up",
    };
    vec![
        MotionBinding::new("hero", MotionTrigger::Enter, hero_effect),
        MotionBinding::new("features", MotionTrigger::Scroll, "stagger-up"),
        MotionBinding::new("card", MotionTrigger::Hover, "lift"),
        MotionBinding::new("closing", MotionTrigger::Scroll, "fade-in"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODES: [ColorScheme; 2] = [ColorScheme::Dark, ColorScheme::Light];

    #[test]
    fn narrative_motion_is_slower_than_operational() {
        for mode in MODES {
            assert!(narrative_motion(mode).duration_ms > operational_motion(mode).duration_ms);
            assert_eq!(narrative_motion(mode).behavior, MotionBehavior::Expressive);
        }
    }

    #[test]
    fn hero_and_feature_differ_per_mode() {
        assert_ne!(
            hero_surface(ColorScheme::Dark),
            hero_surface(ColorScheme::Light)
        );
        assert_ne!(
            feature_surface(ColorScheme::Dark),
            feature_surface(ColorScheme::Light)
        );
        for mode in MODES {
            assert!(!hero_surface(mode).border);
            assert!(hero_surface(mode).gradient);
        }
    }

    #[test]
    fn default_surface_disables_border_and_enables_gradient() {
        let operational = SurfaceRecipe {
            border: true,
            gradient: false,
            glow: false,
            blur: 4,
            texture: SurfaceTexture::Grid,
        };
        let derived = narrative_default_surface(&operational);
        assert!(!derived.border);
        assert!(derived.gradient);
        assert_eq!(derived.blur, 4);
        assert_eq!(derived.texture, SurfaceTexture::Grid);
    }

    #[test]
    fn motif_layers_stay_within_opacity_bounds() {
        for mode in MODES {
            let layers = motif_layers(mode);
            assert_eq!(layers.len(), 3);
            assert!(layers.iter().all(|l| (0.0..=1.0).contains(&l.opacity)));
        }
    }

    #[test]
    fn storyboard_bindings_target_real_sections() {
        for mode in MODES {
            let board = storyboard(mode);
            for binding in motion_bindings(mode) {
                if binding.target == "card" {
                    continue;
                }
                assert!(
                    board.section(&binding.target).is_some(),
                    "binding {} has no section (mode={mode})",
                    binding.target
                );
            }
        }
    }

    #[test]
    fn signature_variant_follows_mode() {
        assert_eq!(
            signature_blocks(ColorScheme::Dark).variant,
            SignatureVariant::Monogram
        );
        assert_eq!(
            signature_blocks(ColorScheme::Light).variant,
            SignatureVariant::Wordmark
        );
        assert!(signature_blocks(ColorScheme::Light).enabled);
    }
}
