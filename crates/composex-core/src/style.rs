//! Component style resolution
//!
//! [`resolve_style`] turns three orthogonal tokens (variant, interaction
//! state, size) into a full [`ComponentStyle`]. Resolution is a pure table
//! lookup: the same inputs always produce an equal style, and nothing is
//! cached or shared between calls.
//!
//! Only the background color and the elevation react to the interaction
//! state. Content color, border color and shape stay fixed for a variant so
//! disabled and pressed components remain legible.
//!
//! # Example
//!
//! ```rust
//! use composex_core::style::{resolve_style, ComponentState, Variant};
//! use composex_core::theme::ColorType;
//! use composex_core::tokens::{ElevationType, FontType, SizeToken};
//!
//! let style = resolve_style(Variant::Tertiary, ComponentState::Disabled, SizeToken::Small);
//! assert_eq!(style.background_color, ColorType::disabled());
//! assert_eq!(style.elevation, ElevationType::None);
//! assert_eq!(style.font_type, FontType::Caption);
//! ```

use crate::color::Color;
use crate::theme::{palette, Brightness, ColorType, ThemePalette};
use crate::tokens::{ElevationType, FontType, Shape, ShapeType, SizeToken, SpacingType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// State Opacity
// =============================================================================

/// Background alpha multipliers for interaction states
pub mod opacity {
    /// Pressed background (85%)
    pub const PRESSED: f32 = 0.85;
    /// Focused background (90%)
    pub const FOCUSED: f32 = 0.9;
    /// Hovered background (95%)
    pub const HOVERED: f32 = 0.95;
}

// =============================================================================
// Variant
// =============================================================================

/// Fully caller-specified variant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomVariant {
    /// Background color
    pub background_color: Color,
    /// Foreground (text/icon) color
    pub content_color: Color,
    /// Optional border color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    /// Resting elevation
    #[serde(default)]
    pub elevation: ElevationType,
    /// Corner shape
    #[serde(default)]
    pub shape: ShapeType,
}

impl CustomVariant {
    /// Create a custom variant with no border, no elevation and medium corners
    pub fn new(background_color: Color, content_color: Color) -> Self {
        Self {
            background_color,
            content_color,
            border_color: None,
            elevation: ElevationType::None,
            shape: ShapeType::Medium,
        }
    }

    /// Set the border color
    pub fn with_border(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    /// Set the elevation
    pub fn with_elevation(mut self, elevation: ElevationType) -> Self {
        self.elevation = elevation;
        self
    }

    /// Set the shape
    pub fn with_shape(mut self, shape: ShapeType) -> Self {
        self.shape = shape;
        self
    }
}

/// Semantic role of a component
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Variant {
    /// Main call to action
    #[default]
    Primary,
    /// Secondary action
    Secondary,
    /// Low-emphasis neutral action
    Tertiary,
    /// Positive outcome
    Success,
    /// Destructive action
    Danger,
    /// Caution
    Warning,
    /// Informational
    Info,
    /// Caller-provided colors, elevation and shape
    Custom(CustomVariant),
}

impl Variant {
    /// Every built-in variant
    pub const BUILT_IN: [Variant; 7] = [
        Variant::Primary,
        Variant::Secondary,
        Variant::Tertiary,
        Variant::Success,
        Variant::Danger,
        Variant::Warning,
        Variant::Info,
    ];

    /// Lowercase name (`custom` for custom variants)
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Primary => "primary",
            Variant::Secondary => "secondary",
            Variant::Tertiary => "tertiary",
            Variant::Success => "success",
            Variant::Danger => "danger",
            Variant::Warning => "warning",
            Variant::Info => "info",
            Variant::Custom(_) => "custom",
        }
    }

    /// Whether this is a custom variant
    pub fn is_custom(&self) -> bool {
        matches!(self, Variant::Custom(_))
    }

    /// The custom definition, if any
    pub fn as_custom(&self) -> Option<&CustomVariant> {
        if let Variant::Custom(custom) = self {
            Some(custom)
        } else {
            None
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "primary" => Ok(Variant::Primary),
            "secondary" => Ok(Variant::Secondary),
            "tertiary" => Ok(Variant::Tertiary),
            "success" => Ok(Variant::Success),
            "danger" => Ok(Variant::Danger),
            "warning" => Ok(Variant::Warning),
            "info" => Ok(Variant::Info),
            _ => Err(format!("Unknown variant: {}", s)),
        }
    }
}

// =============================================================================
// Interaction State
// =============================================================================

/// Interaction condition at resolution time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentState {
    /// Resting
    #[default]
    Default,
    /// Being pressed
    Pressed,
    /// Not interactive
    Disabled,
    /// Holding focus
    Focused,
    /// Pointer hovering
    Hovered,
}

impl ComponentState {
    /// Every state
    pub const ALL: [ComponentState; 5] = [
        ComponentState::Default,
        ComponentState::Pressed,
        ComponentState::Disabled,
        ComponentState::Focused,
        ComponentState::Hovered,
    ];

    /// Lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            ComponentState::Default => "default",
            ComponentState::Pressed => "pressed",
            ComponentState::Disabled => "disabled",
            ComponentState::Focused => "focused",
            ComponentState::Hovered => "hovered",
        }
    }

    /// State for a component that is simply enabled or not
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            ComponentState::Default
        } else {
            ComponentState::Disabled
        }
    }
}

impl fmt::Display for ComponentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ComponentState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(ComponentState::Default),
            "pressed" => Ok(ComponentState::Pressed),
            "disabled" => Ok(ComponentState::Disabled),
            "focused" => Ok(ComponentState::Focused),
            "hovered" => Ok(ComponentState::Hovered),
            _ => Err(format!("Unknown state: {}", s)),
        }
    }
}

// =============================================================================
// Component Style
// =============================================================================

/// Resolved visual properties for one (variant, state, size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStyle {
    /// Input variant
    pub variant: Variant,
    /// Input state
    pub state: ComponentState,
    /// Container color
    pub background_color: ColorType,
    /// Text and icon color
    pub content_color: ColorType,
    /// Outline color, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<ColorType>,
    /// Shadow depth
    pub elevation: ElevationType,
    /// Corner treatment
    pub shape: ShapeType,
    /// Padding scale
    pub spacing: SpacingType,
    /// Input size
    pub size_token: SizeToken,
    /// Text size class
    pub font_type: FontType,
}

impl ComponentStyle {
    /// Finalize every token against a palette and the ambient brightness
    pub fn finalize(&self, palette: &ThemePalette, ambient_is_light: bool) -> FinalizedStyle {
        FinalizedStyle {
            background_color: self.background_color.resolve(palette, ambient_is_light),
            content_color: self.content_color.resolve(palette, ambient_is_light),
            border_color: self
                .border_color
                .map(|color| color.resolve(palette, ambient_is_light)),
            elevation: self.elevation.to_dp(),
            shape: self.shape.to_shape(),
            spacing: self.spacing.to_dp(),
            font_size: self.font_type.to_size(),
        }
    }
}

/// A [`ComponentStyle`] with every token turned into a concrete value
///
/// Colors serialize as hex, which rounds alpha to a byte; the in-memory
/// alpha is exact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizedStyle {
    /// Container color
    pub background_color: Color,
    /// Text and icon color
    pub content_color: Color,
    /// Outline color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    /// Elevation in dp
    pub elevation: f32,
    /// Concrete shape
    pub shape: Shape,
    /// Spacing in dp
    pub spacing: f32,
    /// Font size
    pub font_size: f32,
}

// =============================================================================
// Resolver
// =============================================================================

/// Style resolver bound to a palette and an ambient brightness
///
/// The pressed/focused/hovered backgrounds are the base color with a reduced
/// alpha, which needs the base color in concrete form; the palette and
/// brightness used for that are carried here instead of being read from
/// the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StyleResolver {
    palette: ThemePalette,
    brightness: Brightness,
}

impl StyleResolver {
    /// Create a resolver for a palette and an "is light theme" flag
    pub fn new(palette: ThemePalette, ambient_is_light: bool) -> Self {
        Self {
            palette,
            brightness: Brightness::from_is_light(ambient_is_light),
        }
    }

    /// The palette colors are finalized against
    pub fn palette(&self) -> &ThemePalette {
        &self.palette
    }

    /// Whether the ambient display is light
    pub fn is_light(&self) -> bool {
        self.brightness.is_light()
    }

    /// Resolve a style
    pub fn resolve(&self, variant: Variant, state: ComponentState, size: SizeToken) -> ComponentStyle {
        tracing::debug!("Resolving style {}/{}/{}", variant, state, size);
        let base_background = base_background(&variant);
        let background_color = match state {
            ComponentState::Disabled => ColorType::disabled(),
            ComponentState::Pressed => self.faded(base_background, opacity::PRESSED),
            ComponentState::Focused => self.faded(base_background, opacity::FOCUSED),
            ComponentState::Hovered => self.faded(base_background, opacity::HOVERED),
            ComponentState::Default => base_background,
        };

        let custom = variant.as_custom();
        let base_elevation = custom.map_or(ElevationType::High, |custom| custom.elevation);
        let elevation = match state {
            ComponentState::Pressed => ElevationType::High,
            ComponentState::Disabled => ElevationType::None,
            ComponentState::Default | ComponentState::Focused | ComponentState::Hovered => {
                base_elevation
            }
        };

        ComponentStyle {
            variant,
            state,
            background_color,
            content_color: base_content(&variant),
            border_color: custom
                .and_then(|custom| custom.border_color)
                .map(ColorType::custom),
            elevation,
            shape: custom.map_or(ShapeType::Medium, |custom| custom.shape),
            spacing: spacing_for(size),
            size_token: size,
            font_type: font_for(size),
        }
    }

    /// Resolve a style and finalize it in one step
    pub fn resolve_finalized(
        &self,
        variant: Variant,
        state: ComponentState,
        size: SizeToken,
    ) -> FinalizedStyle {
        self.resolve(variant, state, size)
            .finalize(&self.palette, self.is_light())
    }

    fn faded(&self, base: ColorType, factor: f32) -> ColorType {
        let concrete = base.resolve(&self.palette, self.is_light());
        ColorType::custom(concrete.multiply_alpha(factor))
    }
}

/// Resolve a style with the built-in palette on a dark display
///
/// Use [`StyleResolver`] to pick another palette or brightness.
pub fn resolve_style(variant: Variant, state: ComponentState, size: SizeToken) -> ComponentStyle {
    StyleResolver::default().resolve(variant, state, size)
}

fn base_background(variant: &Variant) -> ColorType {
    match variant {
        Variant::Primary => ColorType::info(),
        Variant::Secondary => ColorType::info().pinned(Brightness::Dark),
        Variant::Tertiary => ColorType::custom(palette::DISABLED_DARK),
        Variant::Success => ColorType::success(),
        Variant::Danger => ColorType::danger(),
        Variant::Warning => ColorType::warning(),
        Variant::Info => ColorType::info(),
        Variant::Custom(custom) => ColorType::custom(custom.background_color),
    }
}

fn base_content(variant: &Variant) -> ColorType {
    match variant {
        Variant::Tertiary => ColorType::custom(palette::BLACK),
        Variant::Custom(custom) => ColorType::custom(custom.content_color),
        Variant::Primary
        | Variant::Secondary
        | Variant::Success
        | Variant::Danger
        | Variant::Warning
        | Variant::Info => ColorType::custom(palette::WHITE),
    }
}

fn font_for(size: SizeToken) -> FontType {
    match size {
        SizeToken::Small => FontType::Caption,
        SizeToken::Medium => FontType::Body,
        SizeToken::Large => FontType::Title,
        SizeToken::ExtraLarge => FontType::Display,
        SizeToken::Custom(dp) => FontType::Custom(dp),
    }
}

fn spacing_for(size: SizeToken) -> SpacingType {
    match size {
        SizeToken::Small => SpacingType::Small,
        SizeToken::Medium => SpacingType::Medium,
        SizeToken::Large => SpacingType::Large,
        SizeToken::ExtraLarge => SpacingType::ExtraLarge,
        SizeToken::Custom(dp) => SpacingType::Custom(dp),
    }
}
