//! Design tokens for ComposeX
//!
//! Size, elevation, shape, spacing and font tokens. Each is a closed set of
//! named steps plus a `Custom` escape hatch carrying an explicit magnitude,
//! and each maps to a concrete value in density-independent pixels (dp).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Size Tokens
// =============================================================================

/// Discrete size class of a component
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SizeToken {
    /// Small (16dp)
    Small,
    /// Medium (24dp)
    #[default]
    Medium,
    /// Large (32dp)
    Large,
    /// Extra large (48dp)
    ExtraLarge,
    /// Explicit linear size in dp
    Custom(f32),
}

impl SizeToken {
    /// The named sizes, smallest first
    pub const NAMED: [SizeToken; 4] = [
        SizeToken::Small,
        SizeToken::Medium,
        SizeToken::Large,
        SizeToken::ExtraLarge,
    ];

    /// Base linear size in dp
    pub fn to_dp(&self) -> f32 {
        match self {
            SizeToken::Small => 16.0,
            SizeToken::Medium => 24.0,
            SizeToken::Large => 32.0,
            SizeToken::ExtraLarge => 48.0,
            SizeToken::Custom(dp) => *dp,
        }
    }

    /// Kebab-case name (`custom` for custom sizes)
    pub fn name(&self) -> &'static str {
        match self {
            SizeToken::Small => "small",
            SizeToken::Medium => "medium",
            SizeToken::Large => "large",
            SizeToken::ExtraLarge => "extra-large",
            SizeToken::Custom(_) => "custom",
        }
    }
}

impl fmt::Display for SizeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeToken::Custom(dp) => write!(f, "custom({}dp)", dp),
            named => f.write_str(named.name()),
        }
    }
}

impl FromStr for SizeToken {
    type Err = String;

    /// Accepts the named sizes (`sm`/`md`/`lg`/`xl` too) or a bare number of dp
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "small" | "sm" => Ok(SizeToken::Small),
            "medium" | "md" => Ok(SizeToken::Medium),
            "large" | "lg" => Ok(SizeToken::Large),
            "extra-large" | "extralarge" | "xl" => Ok(SizeToken::ExtraLarge),
            other => other
                .trim_end_matches("dp")
                .parse::<f32>()
                .ok()
                .filter(|dp| dp.is_finite() && *dp >= 0.0)
                .map(SizeToken::Custom)
                .ok_or_else(|| format!("Unknown size token: {}", s)),
        }
    }
}

// =============================================================================
// Elevation Tokens
// =============================================================================

/// Shadow depth
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElevationType {
    /// Flat (0dp)
    #[default]
    None,
    /// Low (2dp)
    Low,
    /// Medium (4dp)
    Medium,
    /// High (8dp)
    High,
    /// Extra high (16dp)
    ExtraHigh,
    /// Explicit depth in dp
    Custom(f32),
}

impl ElevationType {
    /// The named elevations, lowest first
    pub const NAMED: [ElevationType; 5] = [
        ElevationType::None,
        ElevationType::Low,
        ElevationType::Medium,
        ElevationType::High,
        ElevationType::ExtraHigh,
    ];

    /// Depth in dp
    pub fn to_dp(&self) -> f32 {
        match self {
            ElevationType::None => 0.0,
            ElevationType::Low => 2.0,
            ElevationType::Medium => 4.0,
            ElevationType::High => 8.0,
            ElevationType::ExtraHigh => 16.0,
            ElevationType::Custom(dp) => *dp,
        }
    }

    /// Kebab-case name
    pub fn name(&self) -> &'static str {
        match self {
            ElevationType::None => "none",
            ElevationType::Low => "low",
            ElevationType::Medium => "medium",
            ElevationType::High => "high",
            ElevationType::ExtraHigh => "extra-high",
            ElevationType::Custom(_) => "custom",
        }
    }
}

// =============================================================================
// Shape Tokens
// =============================================================================

/// Corner treatment token
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeType {
    /// Square corners
    None,
    /// 4dp radius
    ExtraSmall,
    /// 8dp radius
    Small,
    /// 12dp radius
    #[default]
    Medium,
    /// 16dp radius
    Large,
    /// 24dp radius
    ExtraLarge,
    /// Fully round
    Circle,
    /// 8dp cut corners
    Cut,
    /// Explicit corner radius in dp
    Custom(f32),
}

/// Concrete shape a [`ShapeType`] maps to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Shape {
    /// Rounded rectangle
    Rounded {
        /// Corner radius in dp
        radius: f32,
    },
    /// Pill / circle, whatever the component's dimensions
    Circle,
    /// Corners cut at 45 degrees
    CutCorner {
        /// Cut length in dp
        size: f32,
    },
}

impl ShapeType {
    /// The named shapes
    pub const NAMED: [ShapeType; 8] = [
        ShapeType::None,
        ShapeType::ExtraSmall,
        ShapeType::Small,
        ShapeType::Medium,
        ShapeType::Large,
        ShapeType::ExtraLarge,
        ShapeType::Circle,
        ShapeType::Cut,
    ];

    /// Concrete shape
    pub fn to_shape(&self) -> Shape {
        match self {
            ShapeType::None => Shape::Rounded { radius: 0.0 },
            ShapeType::ExtraSmall => Shape::Rounded { radius: 4.0 },
            ShapeType::Small => Shape::Rounded { radius: 8.0 },
            ShapeType::Medium => Shape::Rounded { radius: 12.0 },
            ShapeType::Large => Shape::Rounded { radius: 16.0 },
            ShapeType::ExtraLarge => Shape::Rounded { radius: 24.0 },
            ShapeType::Circle => Shape::Circle,
            ShapeType::Cut => Shape::CutCorner { size: 8.0 },
            ShapeType::Custom(radius) => Shape::Rounded { radius: *radius },
        }
    }

    /// Kebab-case name
    pub fn name(&self) -> &'static str {
        match self {
            ShapeType::None => "none",
            ShapeType::ExtraSmall => "extra-small",
            ShapeType::Small => "small",
            ShapeType::Medium => "medium",
            ShapeType::Large => "large",
            ShapeType::ExtraLarge => "extra-large",
            ShapeType::Circle => "circle",
            ShapeType::Cut => "cut",
            ShapeType::Custom(_) => "custom",
        }
    }
}

impl Shape {
    /// CSS `border-radius` equivalent; cut corners have no CSS radius
    pub fn css_border_radius(&self) -> Option<String> {
        match self {
            Shape::Rounded { radius } => Some(format!("{}px", radius)),
            Shape::Circle => Some("9999px".to_string()),
            Shape::CutCorner { .. } => None,
        }
    }
}

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpacingType {
    /// 0dp
    None,
    /// 4dp
    ExtraSmall,
    /// 8dp
    Small,
    /// 16dp
    #[default]
    Medium,
    /// 24dp
    Large,
    /// 32dp
    ExtraLarge,
    /// Explicit distance in dp
    Custom(f32),
}

impl SpacingType {
    /// The named spacings, smallest first
    pub const NAMED: [SpacingType; 6] = [
        SpacingType::None,
        SpacingType::ExtraSmall,
        SpacingType::Small,
        SpacingType::Medium,
        SpacingType::Large,
        SpacingType::ExtraLarge,
    ];

    /// Distance in dp
    pub fn to_dp(&self) -> f32 {
        match self {
            SpacingType::None => 0.0,
            SpacingType::ExtraSmall => 4.0,
            SpacingType::Small => 8.0,
            SpacingType::Medium => 16.0,
            SpacingType::Large => 24.0,
            SpacingType::ExtraLarge => 32.0,
            SpacingType::Custom(dp) => *dp,
        }
    }

    /// Kebab-case name
    pub fn name(&self) -> &'static str {
        match self {
            SpacingType::None => "none",
            SpacingType::ExtraSmall => "extra-small",
            SpacingType::Small => "small",
            SpacingType::Medium => "medium",
            SpacingType::Large => "large",
            SpacingType::ExtraLarge => "extra-large",
            SpacingType::Custom(_) => "custom",
        }
    }
}

// =============================================================================
// Font Tokens
// =============================================================================

/// Font size class
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontType {
    /// 32
    Display,
    /// 24
    Title,
    /// 18
    Subtitle,
    /// 14
    #[default]
    Body,
    /// 12
    Caption,
    /// Explicit font size
    Custom(f32),
}

impl FontType {
    /// The named font types, largest first
    pub const NAMED: [FontType; 5] = [
        FontType::Display,
        FontType::Title,
        FontType::Subtitle,
        FontType::Body,
        FontType::Caption,
    ];

    /// Font size
    pub fn to_size(&self) -> f32 {
        match self {
            FontType::Display => 32.0,
            FontType::Title => 24.0,
            FontType::Subtitle => 18.0,
            FontType::Body => 14.0,
            FontType::Caption => 12.0,
            FontType::Custom(size) => *size,
        }
    }

    /// Kebab-case name
    pub fn name(&self) -> &'static str {
        match self {
            FontType::Display => "display",
            FontType::Title => "title",
            FontType::Subtitle => "subtitle",
            FontType::Body => "body",
            FontType::Caption => "caption",
            FontType::Custom(_) => "custom",
        }
    }
}
