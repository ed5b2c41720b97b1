//! Color tokens for theming
//!
//! Color values are opaque color-space strings (`#0f1115`, `oklch(...)`,
//! `rgb(...)`). They are passed through to the surface untouched.

use serde::{Deserialize, Serialize};

/// Color token keys, in canonical application order
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Core colors
    Base,
    Surface,
    Border,
    Text,

    // Accent colors
    Accent,
    AccentSecondary,
    AccentMuted,

    // Semantic colors
    Success,
    SuccessMuted,
    Warning,
    WarningMuted,
    Danger,
    DangerMuted,
}

impl ColorToken {
    /// Core and accent colors, applied first
    pub const CORE: [ColorToken; 7] = [
        ColorToken::Base,
        ColorToken::Surface,
        ColorToken::Border,
        ColorToken::Text,
        ColorToken::Accent,
        ColorToken::AccentSecondary,
        ColorToken::AccentMuted,
    ];

    /// Semantic colors, applied after the core group
    pub const SEMANTIC: [ColorToken; 6] = [
        ColorToken::Success,
        ColorToken::SuccessMuted,
        ColorToken::Warning,
        ColorToken::WarningMuted,
        ColorToken::Danger,
        ColorToken::DangerMuted,
    ];

    /// Stable kebab-case name used for style parameters
    pub fn name(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Surface => "surface",
            Self::Border => "border",
            Self::Text => "text",
            Self::Accent => "accent",
            Self::AccentSecondary => "accent-secondary",
            Self::AccentMuted => "accent-muted",
            Self::Success => "success",
            Self::SuccessMuted => "success-muted",
            Self::Warning => "warning",
            Self::WarningMuted => "warning-muted",
            Self::Danger => "danger",
            Self::DangerMuted => "danger-muted",
        }
    }
}

/// Accent palette
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccentColors {
    pub primary: String,
    pub secondary: String,
    pub muted: String,
}

/// Semantic (status) palette, each with a muted variant
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticColors {
    pub success: String,
    #[serde(alias = "successMuted")]
    pub success_muted: String,
    pub warning: String,
    #[serde(alias = "warningMuted")]
    pub warning_muted: String,
    pub danger: String,
    #[serde(alias = "dangerMuted")]
    pub danger_muted: String,
}

/// Complete set of color tokens
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTokens {
    pub base: String,
    pub surface: String,
    pub border: String,
    pub text: String,
    pub accent: AccentColors,
    pub semantic: SemanticColors,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> &str {
        match token {
            ColorToken::Base => &self.base,
            ColorToken::Surface => &self.surface,
            ColorToken::Border => &self.border,
            ColorToken::Text => &self.text,
            ColorToken::Accent => &self.accent.primary,
            ColorToken::AccentSecondary => &self.accent.secondary,
            ColorToken::AccentMuted => &self.accent.muted,
            ColorToken::Success => &self.semantic.success,
            ColorToken::SuccessMuted => &self.semantic.success_muted,
            ColorToken::Warning => &self.semantic.warning,
            ColorToken::WarningMuted => &self.semantic.warning_muted,
            ColorToken::Danger => &self.semantic.danger,
            ColorToken::DangerMuted => &self.semantic.danger_muted,
        }
    }
}
