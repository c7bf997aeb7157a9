//! Token document construction
//!
//! A [`TokenDocument`] is the fully resolved design system for one theme
//! configuration: one [`StyleEntry`] per (variant, state, named size), the
//! per-widget dimension tables, the raw token scales and the type scale.

use crate::{stylesheet, ExportError, Result};
use composex_core::config::{ThemeConfig, ThemeMode};
use composex_core::dimensions::{WidgetDimensions, WidgetKind};
use composex_core::style::{ComponentState, CustomVariant, FinalizedStyle, Variant};
use composex_core::tokens::{ElevationType, FontType, Shape, ShapeType, SizeToken, SpacingType};
use composex_core::typography::{TextStyle, TypeScale};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON token document
    #[default]
    Json,
    /// CSS custom properties
    Css,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Css => write!(f, "css"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "css" => Ok(OutputFormat::Css),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Export options
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Extra variants to export, by name
    pub custom_variants: Vec<(String, CustomVariant)>,
    /// Font family for the type scale
    pub font_family: Option<String>,
}

impl ExportOptions {
    /// Add a named custom variant
    pub fn with_custom_variant(mut self, name: impl Into<String>, variant: CustomVariant) -> Self {
        self.custom_variants.push((name.into(), variant));
        self
    }

    /// Set the type scale font family
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }
}

/// One resolved style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleEntry {
    /// Variant name
    pub variant: String,
    /// State name
    pub state: String,
    /// Size name
    pub size: String,
    /// Concrete values
    #[serde(flatten)]
    pub style: FinalizedStyle,
}

/// Raw token scales by name
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scales {
    /// Size tokens (dp)
    pub size: BTreeMap<String, f32>,
    /// Elevation tokens (dp)
    pub elevation: BTreeMap<String, f32>,
    /// Shape tokens
    pub shape: BTreeMap<String, Shape>,
    /// Spacing tokens (dp)
    pub spacing: BTreeMap<String, f32>,
    /// Font tokens (sp)
    pub font: BTreeMap<String, f32>,
}

impl Scales {
    fn collect() -> Self {
        Self {
            size: SizeToken::NAMED
                .iter()
                .map(|token| (token.name().to_string(), token.to_dp()))
                .collect(),
            elevation: ElevationType::NAMED
                .iter()
                .map(|token| (token.name().to_string(), token.to_dp()))
                .collect(),
            shape: ShapeType::NAMED
                .iter()
                .map(|token| (token.name().to_string(), token.to_shape()))
                .collect(),
            spacing: SpacingType::NAMED
                .iter()
                .map(|token| (token.name().to_string(), token.to_dp()))
                .collect(),
            font: FontType::NAMED
                .iter()
                .map(|token| (token.name().to_string(), token.to_size()))
                .collect(),
        }
    }
}

/// Fully resolved design tokens for one theme configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDocument {
    /// Configured theme mode
    pub mode: ThemeMode,
    /// Brightness the colors were finalized for
    pub is_light: bool,
    /// Every (variant, state, size) combination
    pub styles: Vec<StyleEntry>,
    /// Widget dimensions by widget, then size
    pub dimensions: BTreeMap<String, BTreeMap<String, WidgetDimensions>>,
    /// Raw token scales
    pub scales: Scales,
    /// Text roles
    pub typography: BTreeMap<String, TextStyle>,
}

impl TokenDocument {
    /// Resolve every built-in and custom variant for a configuration
    pub fn build(config: &ThemeConfig, options: &ExportOptions) -> Result<Self> {
        config.validate()?;
        let resolver = config.resolver();
        let variants = variant_list(options)?;

        let mut styles =
            Vec::with_capacity(variants.len() * ComponentState::ALL.len() * SizeToken::NAMED.len());
        for (name, variant) in &variants {
            for state in ComponentState::ALL {
                for size in SizeToken::NAMED {
                    styles.push(StyleEntry {
                        variant: name.clone(),
                        state: state.name().to_string(),
                        size: size.name().to_string(),
                        style: resolver.resolve_finalized(*variant, state, size),
                    });
                }
            }
        }

        let dimensions = WidgetKind::ALL
            .iter()
            .map(|kind| {
                let sizes = SizeToken::NAMED
                    .iter()
                    .map(|size| (size.name().to_string(), kind.dimensions(*size)))
                    .collect();
                (kind.name().to_string(), sizes)
            })
            .collect();

        let type_scale = TypeScale::new(options.font_family.as_deref());
        let typography = type_scale
            .roles()
            .into_iter()
            .map(|(name, style)| (name.to_string(), style.clone()))
            .collect();

        tracing::info!(
            "Resolved {} styles for {} variants ({} theme)",
            styles.len(),
            variants.len(),
            if resolver.is_light() { "light" } else { "dark" }
        );

        Ok(Self {
            mode: config.mode,
            is_light: resolver.is_light(),
            styles,
            dimensions,
            scales: Scales::collect(),
            typography,
        })
    }

    /// Look up one resolved style by names
    pub fn style(&self, variant: &str, state: &str, size: &str) -> Option<&StyleEntry> {
        self.styles
            .iter()
            .find(|entry| entry.variant == variant && entry.state == state && entry.size == size)
    }

    /// Serialize to JSON
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Render in the given format
    pub fn render(&self, format: OutputFormat, pretty: bool) -> Result<String> {
        match format {
            OutputFormat::Json => self.to_json(pretty),
            OutputFormat::Css => Ok(stylesheet::render(self)),
        }
    }

    /// Render and write to a file
    pub fn write_to(&self, path: impl AsRef<Path>, format: OutputFormat, pretty: bool) -> Result<()> {
        let path = path.as_ref();
        let contents = self.render(format, pretty)?;
        std::fs::write(path, contents)?;
        tracing::info!("Wrote {} tokens to {}", format, path.display());
        Ok(())
    }
}

fn variant_list(options: &ExportOptions) -> Result<Vec<(String, Variant)>> {
    let mut variants: Vec<(String, Variant)> = Variant::BUILT_IN
        .iter()
        .map(|variant| (variant.name().to_string(), *variant))
        .collect();

    for (name, custom) in &options.custom_variants {
        if !is_token_name(name) {
            return Err(ExportError::InvalidVariantName(name.clone()));
        }
        if variants.iter().any(|(existing, _)| existing == name) {
            return Err(ExportError::DuplicateVariant(name.clone()));
        }
        tracing::debug!("Adding custom variant {}", name);
        variants.push((name.clone(), Variant::Custom(*custom)));
    }

    Ok(variants)
}

/// Lowercase ASCII letters, digits and inner hyphens
fn is_token_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && !name.ends_with('-')
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
