//! Type scale tokens

use serde::{Deserialize, Serialize};

/// Named steps of the type scale, largest first
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TypeStepToken {
    Heading1,
    Heading2,
    Heading3,
    Body,
    BodySm,
    Caption,
    Label,
}

impl TypeStepToken {
    pub const ALL: [TypeStepToken; 7] = [
        TypeStepToken::Heading1,
        TypeStepToken::Heading2,
        TypeStepToken::Heading3,
        TypeStepToken::Body,
        TypeStepToken::BodySm,
        TypeStepToken::Caption,
        TypeStepToken::Label,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Heading1 => "heading-1",
            Self::Heading2 => "heading-2",
            Self::Heading3 => "heading-3",
            Self::Body => "body",
            Self::BodySm => "body-sm",
            Self::Caption => "caption",
            Self::Label => "label",
        }
    }
}

/// A single step of the type scale
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeStep {
    pub size: String,
    pub weight: String,
    /// Letter spacing
    #[serde(alias = "letterSpacing")]
    pub tracking: String,
    /// Line height
    #[serde(alias = "lineHeight")]
    pub leading: String,
    #[serde(default, alias = "textTransform", skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
}

impl TypeStep {
    pub fn new(
        size: impl Into<String>,
        weight: impl Into<String>,
        tracking: impl Into<String>,
        leading: impl Into<String>,
    ) -> Self {
        Self {
            size: size.into(),
            weight: weight.into(),
            tracking: tracking.into(),
            leading: leading.into(),
            transform: None,
        }
    }

    pub fn with_transform(mut self, transform: impl Into<String>) -> Self {
        self.transform = Some(transform.into());
        self
    }
}

/// The full type scale. Every step is required.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeScale {
    #[serde(rename = "heading-1", alias = "heading1")]
    pub heading_1: TypeStep,
    #[serde(rename = "heading-2", alias = "heading2")]
    pub heading_2: TypeStep,
    #[serde(rename = "heading-3", alias = "heading3")]
    pub heading_3: TypeStep,
    pub body: TypeStep,
    #[serde(rename = "body-sm", alias = "bodySm")]
    pub body_sm: TypeStep,
    pub caption: TypeStep,
    pub label: TypeStep,
}

impl TypeScale {
    pub fn get(&self, token: TypeStepToken) -> &TypeStep {
        match token {
            TypeStepToken::Heading1 => &self.heading_1,
            TypeStepToken::Heading2 => &self.heading_2,
            TypeStepToken::Heading3 => &self.heading_3,
            TypeStepToken::Body => &self.body,
            TypeStepToken::BodySm => &self.body_sm,
            TypeStepToken::Caption => &self.caption,
            TypeStepToken::Label => &self.label,
        }
    }
}
