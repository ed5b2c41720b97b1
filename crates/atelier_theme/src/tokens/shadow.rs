//! Shadow tokens for theming

use serde::{Deserialize, Serialize};

/// Shadow token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ShadowToken {
    Sm,
    Md,
    Lg,
}

impl ShadowToken {
    pub const ALL: [ShadowToken; 3] = [ShadowToken::Sm, ShadowToken::Md, ShadowToken::Lg];

    pub fn name(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

/// Three box-shadow definitions, stored as CSS shadow strings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowTokens {
    pub sm: String,
    pub md: String,
    pub lg: String,
}

impl ShadowTokens {
    /// Get shadow by token key
    pub fn get(&self, token: ShadowToken) -> &str {
        match token {
            ShadowToken::Sm => &self.sm,
            ShadowToken::Md => &self.md,
            ShadowToken::Lg => &self.lg,
        }
    }
}
