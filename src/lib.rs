//! ComposeX design-token engine
//!
//! Re-exports the style resolver ([`composex_core`]) and the token exporter
//! ([`token_export`]) under one crate.

#![warn(missing_docs)]

pub use composex_core;
pub use composex_core::{
    resolve_style, ComponentState, ComponentStyle, SizeToken, StyleResolver, ThemeConfig, Variant,
};
pub use token_export;
