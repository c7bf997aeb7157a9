//! Design token export for ComposeX
//!
//! Resolves every built-in variant in every state at every named size and
//! writes the results, together with the raw token scales, as a JSON
//! document or a CSS custom-property stylesheet.
//!
//! # Example
//!
//! ```rust
//! use composex_core::config::{ThemeConfig, ThemeMode};
//! use token_export::{stylesheet, ExportOptions, TokenDocument};
//!
//! let config = ThemeConfig::with_mode(ThemeMode::Light);
//! let document = TokenDocument::build(&config, &ExportOptions::default()).unwrap();
//!
//! let css = stylesheet::render(&document);
//! assert!(css.contains("--cx-danger-default-medium-background: rgb(244, 67, 54);"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod export;
pub mod stylesheet;

pub use cli::{load_config, resolve_payload, ResolvedStyle};
pub use export::{ExportOptions, OutputFormat, StyleEntry, TokenDocument};

use thiserror::Error;

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing the output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the document failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The theme configuration could not be used
    #[error("Config error: {0}")]
    Config(#[from] composex_core::ConfigError),

    /// Two variants would be exported under the same name
    #[error("Duplicate variant name: {0}")]
    DuplicateVariant(String),

    /// A custom variant name is not usable as a token identifier
    #[error("Invalid variant name: {0:?}")]
    InvalidVariantName(String),
}

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;
