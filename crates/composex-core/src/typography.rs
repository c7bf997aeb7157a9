//! Typography scale
//!
//! Fifteen text roles derived from the [`FontType`] sizes. A resolved
//! style only carries a font token; [`FontType::text_style`] turns it into a
//! complete [`TextStyle`].

use crate::tokens::FontType;
use serde::{Deserialize, Serialize};

// =============================================================================
// Font Weight
// =============================================================================

/// Font weights used by the type scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontWeight {
    /// 400
    #[default]
    Normal,
    /// 500
    Medium,
    /// 600
    SemiBold,
    /// 700
    Bold,
}

impl FontWeight {
    /// Numeric CSS weight
    pub fn value(&self) -> u16 {
        match self {
            FontWeight::Normal => 400,
            FontWeight::Medium => 500,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
        }
    }
}

// =============================================================================
// Text Style
// =============================================================================

/// A complete text style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Font size in sp
    pub font_size: f32,
    /// Font weight
    pub font_weight: FontWeight,
    /// Font family override (None = platform default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl TextStyle {
    /// Create a text style with the platform font
    pub fn new(font_size: f32, font_weight: FontWeight) -> Self {
        Self {
            font_size,
            font_weight,
            font_family: None,
        }
    }

    /// Set font family
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Scale the font size by a multiplier
    pub fn scale(&self, multiplier: f32) -> Self {
        Self {
            font_size: self.font_size * multiplier,
            font_weight: self.font_weight,
            font_family: self.font_family.clone(),
        }
    }
}

// =============================================================================
// Type Scale
// =============================================================================

/// Step-down factor for medium/small members of a role group
const STEP: f32 = 0.875;

/// The full set of text roles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeScale {
    /// Largest display text
    pub display_large: TextStyle,
    /// Medium display text
    pub display_medium: TextStyle,
    /// Small display text
    pub display_small: TextStyle,
    /// Large headline
    pub headline_large: TextStyle,
    /// Medium headline
    pub headline_medium: TextStyle,
    /// Small headline
    pub headline_small: TextStyle,
    /// Large title
    pub title_large: TextStyle,
    /// Medium title
    pub title_medium: TextStyle,
    /// Small title
    pub title_small: TextStyle,
    /// Large body text
    pub body_large: TextStyle,
    /// Medium body text
    pub body_medium: TextStyle,
    /// Small body text
    pub body_small: TextStyle,
    /// Large label
    pub label_large: TextStyle,
    /// Medium label
    pub label_medium: TextStyle,
    /// Small label
    pub label_small: TextStyle,
}

impl TypeScale {
    /// Build the scale, optionally with a custom font family
    pub fn new(font_family: Option<&str>) -> Self {
        let style = |font: FontType, factor: f32, weight: FontWeight| {
            let style = TextStyle::new(font.to_size() * factor, weight);
            match font_family {
                Some(family) => style.with_font_family(family),
                None => style,
            }
        };

        Self {
            display_large: style(FontType::Display, 1.0, FontWeight::Bold),
            display_medium: style(FontType::Display, STEP, FontWeight::Bold),
            display_small: style(FontType::Display, 0.75, FontWeight::Bold),
            headline_large: style(FontType::Title, 1.0, FontWeight::Bold),
            headline_medium: style(FontType::Title, STEP, FontWeight::Bold),
            headline_small: style(FontType::Title, 1.0, FontWeight::SemiBold),
            title_large: style(FontType::Title, 1.0, FontWeight::SemiBold),
            title_medium: style(FontType::Subtitle, 1.0, FontWeight::Medium),
            title_small: style(FontType::Subtitle, STEP, FontWeight::Medium),
            body_large: style(FontType::Body, 1.0, FontWeight::Normal),
            body_medium: style(FontType::Body, STEP, FontWeight::Normal),
            body_small: style(FontType::Caption, 1.0, FontWeight::Normal),
            label_large: style(FontType::Body, 1.0, FontWeight::Medium),
            label_medium: style(FontType::Caption, 1.0, FontWeight::Medium),
            label_small: style(FontType::Caption, STEP, FontWeight::Medium),
        }
    }

    /// Roles with their kebab-case names, in scale order
    pub fn roles(&self) -> [(&'static str, &TextStyle); 15] {
        [
            ("display-large", &self.display_large),
            ("display-medium", &self.display_medium),
            ("display-small", &self.display_small),
            ("headline-large", &self.headline_large),
            ("headline-medium", &self.headline_medium),
            ("headline-small", &self.headline_small),
            ("title-large", &self.title_large),
            ("title-medium", &self.title_medium),
            ("title-small", &self.title_small),
            ("body-large", &self.body_large),
            ("body-medium", &self.body_medium),
            ("body-small", &self.body_small),
            ("label-large", &self.label_large),
            ("label-medium", &self.label_medium),
            ("label-small", &self.label_small),
        ]
    }
}

impl Default for TypeScale {
    fn default() -> Self {
        Self::new(None)
    }
}

impl FontType {
    /// Text style for a resolved font token, using the default scale
    pub fn text_style(&self) -> TextStyle {
        let scale = TypeScale::default();
        match self {
            FontType::Display => scale.display_large,
            FontType::Title => scale.title_large,
            FontType::Subtitle => scale.title_medium,
            FontType::Body => scale.body_large,
            FontType::Caption => scale.body_small,
            FontType::Custom(size) => TextStyle::new(*size, FontWeight::Normal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_weight_values() {
        assert_eq!(FontWeight::Normal.value(), 400);
        assert_eq!(FontWeight::Medium.value(), 500);
        assert_eq!(FontWeight::SemiBold.value(), 600);
        assert_eq!(FontWeight::Bold.value(), 700);
    }

    #[test]
    fn test_text_style_builder() {
        let style = TextStyle::new(14.0, FontWeight::Medium).with_font_family("Inter");
        assert_eq!(style.font_family.as_deref(), Some("Inter"));
        assert_eq!(style.scale(2.0).font_size, 28.0);
        assert_eq!(style.scale(2.0).font_weight, FontWeight::Medium);
    }

    #[test]
    fn test_type_scale_sizes() {
        let scale = TypeScale::default();
        assert_eq!(scale.display_large.font_size, 32.0);
        assert_eq!(scale.display_medium.font_size, 28.0);
        assert_eq!(scale.display_small.font_size, 24.0);
        assert_eq!(scale.headline_medium.font_size, 21.0);
        assert_eq!(scale.title_medium.font_size, 18.0);
        assert_eq!(scale.title_small.font_size, 15.75);
        assert_eq!(scale.body_medium.font_size, 12.25);
        assert_eq!(scale.body_small.font_size, 12.0);
        assert_eq!(scale.label_small.font_size, 10.5);
    }

    #[test]
    fn test_type_scale_weights() {
        let scale = TypeScale::default();
        assert_eq!(scale.display_large.font_weight, FontWeight::Bold);
        assert_eq!(scale.headline_small.font_weight, FontWeight::SemiBold);
        assert_eq!(scale.title_large.font_weight, FontWeight::SemiBold);
        assert_eq!(scale.title_small.font_weight, FontWeight::Medium);
        assert_eq!(scale.body_large.font_weight, FontWeight::Normal);
        assert_eq!(scale.label_large.font_weight, FontWeight::Medium);
    }

    #[test]
    fn test_type_scale_font_family() {
        let scale = TypeScale::new(Some("Roboto"));
        assert!(scale
            .roles()
            .iter()
            .all(|(_, style)| style.font_family.as_deref() == Some("Roboto")));
        assert!(TypeScale::default()
            .roles()
            .iter()
            .all(|(_, style)| style.font_family.is_none()));
    }

    #[test]
    fn test_roles_are_uniquely_named() {
        let scale = TypeScale::default();
        let roles = scale.roles();
        let mut names: Vec<_> = roles.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 15);
    }

    #[test]
    fn test_font_type_text_style() {
        assert_eq!(FontType::Display.text_style().font_size, 32.0);
        assert_eq!(FontType::Title.text_style().font_weight, FontWeight::SemiBold);
        assert_eq!(FontType::Subtitle.text_style().font_size, 18.0);
        assert_eq!(FontType::Body.text_style().font_size, 14.0);
        assert_eq!(FontType::Caption.text_style().font_size, 12.0);

        let custom = FontType::Custom(11.0).text_style();
        assert_eq!(custom, TextStyle::new(11.0, FontWeight::Normal));
    }
}
