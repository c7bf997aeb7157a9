//! Theme palette and color tokens
//!
//! Colors in a [`crate::style::ComponentStyle`] are abstract [`ColorType`]
//! tokens. They become concrete [`Color`]s only when finalized against a
//! [`ThemePalette`] and the ambient brightness of the host display.
//!
//! # Usage
//!
//! ```rust
//! use composex_core::theme::{Brightness, ColorType, ThemePalette};
//!
//! let palette = ThemePalette::default();
//! let danger = ColorType::danger().resolve(&palette, true);
//! assert_eq!(danger.to_hex(), "#F44336");
//!
//! // A pinned brightness wins over the ambient flag
//! let info = ColorType::info().pinned(Brightness::Dark).resolve(&palette, true);
//! assert_eq!(info.to_hex(), "#1565C0");
//! ```

use crate::color::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Palette Constants
// =============================================================================

/// Built-in semantic colors
pub mod palette {
    use crate::color::Color;

    /// Success, light variant (vibrant green)
    pub const SUCCESS_LIGHT: Color = Color::from_rgb_u32(0x4CAF50);
    /// Danger, light variant (vibrant red)
    pub const DANGER_LIGHT: Color = Color::from_rgb_u32(0xF44336);
    /// Warning, light variant (vibrant orange)
    pub const WARNING_LIGHT: Color = Color::from_rgb_u32(0xFF9800);
    /// Info, light variant (vibrant blue)
    pub const INFO_LIGHT: Color = Color::from_rgb_u32(0x2196F3);

    /// Success, dark variant
    pub const SUCCESS_DARK: Color = Color::from_rgb_u32(0x2E7D32);
    /// Danger, dark variant
    pub const DANGER_DARK: Color = Color::from_rgb_u32(0xC62828);
    /// Warning, dark variant
    pub const WARNING_DARK: Color = Color::from_rgb_u32(0xF57C00);
    /// Info, dark variant
    pub const INFO_DARK: Color = Color::from_rgb_u32(0x1565C0);

    /// Disabled gray for light displays
    pub const DISABLED_LIGHT: Color = Color::from_rgb_u32(0xBDBDBD);
    /// Disabled gray for dark displays
    pub const DISABLED_DARK: Color = Color::from_rgb_u32(0x757575);

    /// Pure white
    pub const WHITE: Color = Color::WHITE;
    /// Pure black
    pub const BLACK: Color = Color::BLACK;
}

// =============================================================================
// Brightness
// =============================================================================

/// Display brightness a color is resolved for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Brightness {
    /// Light display
    Light,
    /// Dark display; also the fallback when the host reports nothing
    #[default]
    Dark,
}

impl Brightness {
    /// Build from an "is light theme" flag
    pub fn from_is_light(is_light: bool) -> Self {
        if is_light {
            Brightness::Light
        } else {
            Brightness::Dark
        }
    }

    /// Whether this is the light brightness
    pub fn is_light(&self) -> bool {
        matches!(self, Brightness::Light)
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Brightness::Light => write!(f, "light"),
            Brightness::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Brightness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Brightness::Light),
            "dark" => Ok(Brightness::Dark),
            _ => Err(format!("Unknown brightness: {}", s)),
        }
    }
}

// =============================================================================
// Theme Palette
// =============================================================================

/// Semantic hue families in the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hue {
    /// Positive outcome
    Success,
    /// Destructive or error
    Danger,
    /// Caution
    Warning,
    /// Informational / brand
    Info,
    /// Neutral disabled gray
    Disabled,
}

impl Hue {
    /// All hues, in palette order
    pub const ALL: [Hue; 5] = [Hue::Success, Hue::Danger, Hue::Warning, Hue::Info, Hue::Disabled];

    /// Lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Hue::Success => "success",
            Hue::Danger => "danger",
            Hue::Warning => "warning",
            Hue::Info => "info",
            Hue::Disabled => "disabled",
        }
    }
}

/// Light and dark variants of one hue
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HueColors {
    /// Variant used on light displays
    pub light: Color,
    /// Variant used on dark displays
    pub dark: Color,
}

impl HueColors {
    /// Create a hue pair
    pub const fn new(light: Color, dark: Color) -> Self {
        Self { light, dark }
    }

    /// Pick the variant for a brightness
    pub fn for_brightness(&self, brightness: Brightness) -> Color {
        match brightness {
            Brightness::Light => self.light,
            Brightness::Dark => self.dark,
        }
    }
}

/// The palette color tokens resolve against
///
/// Swapping the palette changes every finalized color without touching
/// the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemePalette {
    /// Success colors
    pub success: HueColors,
    /// Danger colors
    pub danger: HueColors,
    /// Warning colors
    pub warning: HueColors,
    /// Info colors
    pub info: HueColors,
    /// Disabled grays
    pub disabled: HueColors,
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self {
            success: HueColors::new(palette::SUCCESS_LIGHT, palette::SUCCESS_DARK),
            danger: HueColors::new(palette::DANGER_LIGHT, palette::DANGER_DARK),
            warning: HueColors::new(palette::WARNING_LIGHT, palette::WARNING_DARK),
            info: HueColors::new(palette::INFO_LIGHT, palette::INFO_DARK),
            disabled: HueColors::new(palette::DISABLED_LIGHT, palette::DISABLED_DARK),
        }
    }
}

impl ThemePalette {
    /// Get the color pair for a hue
    pub fn hue(&self, hue: Hue) -> &HueColors {
        match hue {
            Hue::Success => &self.success,
            Hue::Danger => &self.danger,
            Hue::Warning => &self.warning,
            Hue::Info => &self.info,
            Hue::Disabled => &self.disabled,
        }
    }

    /// Look up `(hue, brightness)`
    pub fn color(&self, hue: Hue, brightness: Brightness) -> Color {
        self.hue(hue).for_brightness(brightness)
    }
}

// =============================================================================
// Color Tokens
// =============================================================================

/// Abstract color token
///
/// Palette tokens optionally pin a brightness; unpinned tokens follow the
/// ambient display brightness at finalization time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ColorType {
    /// Success hue
    Success {
        /// Forced brightness
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pin: Option<Brightness>,
    },
    /// Danger hue
    Danger {
        /// Forced brightness
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pin: Option<Brightness>,
    },
    /// Warning hue
    Warning {
        /// Forced brightness
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pin: Option<Brightness>,
    },
    /// Info hue
    Info {
        /// Forced brightness
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pin: Option<Brightness>,
    },
    /// Disabled gray
    Disabled {
        /// Forced brightness
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pin: Option<Brightness>,
    },
    /// Literal color
    Custom {
        /// The color itself
        color: Color,
        /// Recorded brightness; a literal color resolves to itself regardless
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pin: Option<Brightness>,
    },
}

impl ColorType {
    /// Unpinned success token
    pub const fn success() -> Self {
        ColorType::Success { pin: None }
    }

    /// Unpinned danger token
    pub const fn danger() -> Self {
        ColorType::Danger { pin: None }
    }

    /// Unpinned warning token
    pub const fn warning() -> Self {
        ColorType::Warning { pin: None }
    }

    /// Unpinned info token
    pub const fn info() -> Self {
        ColorType::Info { pin: None }
    }

    /// Unpinned disabled token
    pub const fn disabled() -> Self {
        ColorType::Disabled { pin: None }
    }

    /// Literal color token
    pub const fn custom(color: Color) -> Self {
        ColorType::Custom { color, pin: None }
    }

    /// Pin the token to a brightness
    pub fn pinned(self, brightness: Brightness) -> Self {
        let pin = Some(brightness);
        match self {
            ColorType::Success { .. } => ColorType::Success { pin },
            ColorType::Danger { .. } => ColorType::Danger { pin },
            ColorType::Warning { .. } => ColorType::Warning { pin },
            ColorType::Info { .. } => ColorType::Info { pin },
            ColorType::Disabled { .. } => ColorType::Disabled { pin },
            ColorType::Custom { color, .. } => ColorType::Custom { color, pin },
        }
    }

    /// The pinned brightness, if any
    pub fn pin(&self) -> Option<Brightness> {
        match self {
            ColorType::Success { pin }
            | ColorType::Danger { pin }
            | ColorType::Warning { pin }
            | ColorType::Info { pin }
            | ColorType::Disabled { pin }
            | ColorType::Custom { pin, .. } => *pin,
        }
    }

    /// The palette hue, or `None` for literal colors
    pub fn hue(&self) -> Option<Hue> {
        match self {
            ColorType::Success { .. } => Some(Hue::Success),
            ColorType::Danger { .. } => Some(Hue::Danger),
            ColorType::Warning { .. } => Some(Hue::Warning),
            ColorType::Info { .. } => Some(Hue::Info),
            ColorType::Disabled { .. } => Some(Hue::Disabled),
            ColorType::Custom { .. } => None,
        }
    }

    /// Brightness this token resolves at, given the ambient flag
    pub fn effective_brightness(&self, ambient_is_light: bool) -> Brightness {
        self.pin()
            .unwrap_or_else(|| Brightness::from_is_light(ambient_is_light))
    }

    /// Finalize to a concrete color
    pub fn resolve(&self, palette: &ThemePalette, ambient_is_light: bool) -> Color {
        let hue = match self {
            ColorType::Custom { color, .. } => return *color,
            ColorType::Success { .. } => Hue::Success,
            ColorType::Danger { .. } => Hue::Danger,
            ColorType::Warning { .. } => Hue::Warning,
            ColorType::Info { .. } => Hue::Info,
            ColorType::Disabled { .. } => Hue::Disabled,
        };
        palette.color(hue, self.effective_brightness(ambient_is_light))
    }
}
