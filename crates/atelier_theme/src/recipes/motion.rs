//! Motion recipes: timing, easing, and behavior

use serde::{Deserialize, Serialize};

/// Timing function for transitions
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Material-style emphasized deceleration
    pub const EMPHASIZED: Easing = Easing::CubicBezier(0.2, 0.0, 0.0, 1.0);

    /// CSS `transition-timing-function` value
    pub fn css(&self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseIn => "ease-in".to_string(),
            Easing::EaseOut => "ease-out".to_string(),
            Easing::EaseInOut => "ease-in-out".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

/// How much a context animates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MotionBehavior {
    None,
    #[default]
    Subtle,
    Expressive,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionRecipe {
    #[serde(alias = "durationMs")]
    pub duration_ms: u32,
    pub easing: Easing,
    pub behavior: MotionBehavior,
    /// Delay between siblings entering, in ms
    #[serde(alias = "staggerMs")]
    pub stagger_ms: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MotionTrigger {
    #[default]
    Enter,
    Scroll,
    Hover,
}

/// Declares that a named target animates with `effect` when `trigger` fires
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotionBinding {
    pub target: String,
    #[serde(default)]
    pub trigger: MotionTrigger,
    pub effect: String,
}

impl MotionBinding {
    pub fn new(target: &str, trigger: MotionTrigger, effect: &str) -> Self {
        Self {
            target: target.to_string(),
            trigger,
            effect: effect.to_string(),
        }
    }
}
