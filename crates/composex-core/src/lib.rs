//! Component style resolution for ComposeX
//!
//! This crate turns three orthogonal tokens (a visual [`style::Variant`],
//! an interaction [`style::ComponentState`] and a [`tokens::SizeToken`])
//! into a complete [`style::ComponentStyle`]: background and content colors,
//! optional border, elevation, shape, spacing, size and font.
//!
//! Colors stay abstract ([`theme::ColorType`]) until finalized against a
//! [`theme::ThemePalette`] and the host's light/dark preference.
//!
//! # Modules
//!
//! - [`style`] - Variant/state/size resolution
//! - [`theme`] - Palette and color tokens
//! - [`tokens`] - Size, elevation, shape, spacing and font scales
//! - [`dimensions`] - Per-widget dimension tables
//! - [`typography`] - Text roles derived from the font scale
//! - [`config`] - JSON theme configuration
//! - [`color`] - Concrete RGBA colors
//!
//! # Example
//!
//! ```rust
//! use composex_core::config::{ThemeConfig, ThemeMode};
//! use composex_core::dimensions::WidgetKind;
//! use composex_core::style::{ComponentState, Variant};
//! use composex_core::tokens::SizeToken;
//!
//! let resolver = ThemeConfig::with_mode(ThemeMode::Light).resolver();
//! let style = resolver.resolve(Variant::Danger, ComponentState::Pressed, SizeToken::Medium);
//! let finalized = style.finalize(resolver.palette(), resolver.is_light());
//!
//! assert_eq!(finalized.background_color.to_css(), "rgba(244, 67, 54, 0.85)");
//! assert_eq!(WidgetKind::Button.dimensions(style.size_token).height, Some(40.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod color;
pub mod config;
pub mod dimensions;
pub mod style;
pub mod theme;
pub mod tokens;
pub mod typography;

pub use color::Color;
pub use config::{ConfigError, ThemeConfig, ThemeMode};
pub use dimensions::{WidgetDimensions, WidgetKind};
pub use style::{
    resolve_style, ComponentState, ComponentStyle, CustomVariant, FinalizedStyle, StyleResolver,
    Variant,
};
pub use theme::{Brightness, ColorType, ThemePalette};
pub use tokens::{ElevationType, FontType, Shape, ShapeType, SizeToken, SpacingType};
pub use typography::{FontWeight, TextStyle, TypeScale};
