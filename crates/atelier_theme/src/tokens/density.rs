//! Density tokens: the spacing dimensions that make a layout tight or airy

use serde::{Deserialize, Serialize};

/// Density dimension keys, in canonical application order
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum DensityToken {
    RowHeight,
    RowHeightCompact,
    ControlHeight,
    ControlHeightSm,
    Gutter,
    Gap,
    GapSm,
    CardPadding,
}

impl DensityToken {
    pub const ALL: [DensityToken; 8] = [
        DensityToken::RowHeight,
        DensityToken::RowHeightCompact,
        DensityToken::ControlHeight,
        DensityToken::ControlHeightSm,
        DensityToken::Gutter,
        DensityToken::Gap,
        DensityToken::GapSm,
        DensityToken::CardPadding,
    ];

    /// Field name as authored in pack files
    pub fn field_name(self) -> &'static str {
        match self {
            Self::RowHeight => "row_height",
            Self::RowHeightCompact => "row_height_compact",
            Self::ControlHeight => "control_height",
            Self::ControlHeightSm => "control_height_sm",
            Self::Gutter => "gutter",
            Self::Gap => "gap",
            Self::GapSm => "gap_sm",
            Self::CardPadding => "card_padding",
        }
    }
}

/// Complete set of density tokens (simple length values)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DensityTokens {
    #[serde(alias = "rowHeight")]
    pub row_height: String,
    #[serde(alias = "rowHeightCompact")]
    pub row_height_compact: String,
    #[serde(alias = "controlHeight")]
    pub control_height: String,
    #[serde(alias = "controlHeightSm")]
    pub control_height_sm: String,
    pub gutter: String,
    pub gap: String,
    #[serde(alias = "gapSm")]
    pub gap_sm: String,
    #[serde(alias = "cardPadding")]
    pub card_padding: String,
}

impl DensityTokens {
    pub fn get(&self, token: DensityToken) -> &str {
        match token {
            DensityToken::RowHeight => &self.row_height,
            DensityToken::RowHeightCompact => &self.row_height_compact,
            DensityToken::ControlHeight => &self.control_height,
            DensityToken::ControlHeightSm => &self.control_height_sm,
            DensityToken::Gutter => &self.gutter,
            DensityToken::Gap => &self.gap,
            DensityToken::GapSm => &self.gap_sm,
            DensityToken::CardPadding => &self.card_padding,
        }
    }
}

/// Convert a snake_case or camelCase field name to kebab-case
///
/// `row_height_compact` -> `row-height-compact`, `cardPadding` -> `card-padding`
pub fn kebab_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 4);
    for (i, c) in field.chars().enumerate() {
        if c == '_' || c == ' ' {
            if !out.ends_with('-') && !out.is_empty() {
                out.push('-');
            }
        } else if c.is_ascii_uppercase() {
            if i > 0 && !out.ends_with('-') {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_case_handles_snake_and_camel() {
        assert_eq!(kebab_case("row_height_compact"), "row-height-compact");
        assert_eq!(kebab_case("cardPadding"), "card-padding");
        assert_eq!(kebab_case("gap"), "gap");
        assert_eq!(kebab_case("controlHeightSm"), "control-height-sm");
    }

    #[test]
    fn every_field_name_has_a_kebab_form() {
        for token in DensityToken::ALL {
            assert!(!kebab_case(token.field_name()).contains('_'));
        }
    }
}
