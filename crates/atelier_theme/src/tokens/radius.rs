//! Border radius tokens

use serde::{Deserialize, Serialize};

/// Radius token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RadiusToken {
    Sm,
    Lg,
}

impl RadiusToken {
    pub const ALL: [RadiusToken; 2] = [RadiusToken::Sm, RadiusToken::Lg];

    pub fn name(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Lg => "lg",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadiusTokens {
    pub sm: String,
    pub lg: String,
}

impl RadiusTokens {
    pub fn get(&self, token: RadiusToken) -> &str {
        match token {
            RadiusToken::Sm => &self.sm,
            RadiusToken::Lg => &self.lg,
        }
    }
}
