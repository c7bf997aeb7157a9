//! Command-line interface for `composex-tokens`
//!
//! Argument definitions and command execution live here so the binary is
//! only tracing setup plus [`run`].

use crate::export::{ExportOptions, OutputFormat, TokenDocument};
use crate::Result;
use clap::{Parser, Subcommand, ValueEnum};
use composex_core::config::{ThemeConfig, ThemeMode};
use composex_core::style::{ComponentState, ComponentStyle, FinalizedStyle, Variant};
use composex_core::tokens::SizeToken;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level arguments
#[derive(Debug, Parser)]
#[command(name = "composex-tokens")]
#[command(version, about = "Resolve and export ComposeX design tokens", long_about = None)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Export every resolved style as JSON or CSS
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Override the configured theme mode
        #[arg(short, long, value_enum)]
        theme: Option<Theme>,
        /// Theme config file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
        /// Font family for the type scale
        #[arg(long)]
        font_family: Option<String>,
    },
    /// Resolve a single style and print it as JSON
    Resolve {
        /// Built-in variant name
        variant: Variant,
        /// Interaction state
        #[arg(long, default_value = "default")]
        state: ComponentState,
        /// Size token (small, medium, large, extra-large or a dp value)
        #[arg(long, default_value = "medium")]
        size: SizeToken,
        /// Override the configured theme mode
        #[arg(short, long, value_enum)]
        theme: Option<Theme>,
        /// Theme config file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// `--format` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// JSON token document
    Json,
    /// CSS custom properties
    Css,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Css => OutputFormat::Css,
        }
    }
}

/// `--theme` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    /// Light
    Light,
    /// Dark
    Dark,
    /// Host preference
    System,
}

impl From<Theme> for ThemeMode {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => ThemeMode::Light,
            Theme::Dark => ThemeMode::Dark,
            Theme::System => ThemeMode::System,
        }
    }
}

/// Output of `resolve`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedStyle {
    /// Token-level style
    pub style: ComponentStyle,
    /// Concrete values for the configured brightness
    pub finalized: FinalizedStyle,
}

/// Load a config file (or the defaults) and apply a `--theme` override
pub fn load_config(path: Option<&Path>, theme: Option<Theme>) -> Result<ThemeConfig> {
    let mut config = match path {
        Some(path) => ThemeConfig::load(path)?,
        None => ThemeConfig::default(),
    };
    if let Some(theme) = theme {
        tracing::debug!("Theme mode overridden to {:?}", theme);
        config.mode = theme.into();
    }
    Ok(config)
}

/// Resolve and finalize one style for a configuration
pub fn resolve_payload(
    config: &ThemeConfig,
    variant: Variant,
    state: ComponentState,
    size: SizeToken,
) -> Result<ResolvedStyle> {
    config.validate()?;
    let resolver = config.resolver();
    let style = resolver.resolve(variant, state, size);
    let finalized = style.finalize(resolver.palette(), resolver.is_light());
    Ok(ResolvedStyle { style, finalized })
}

/// Run a command; returns text for stdout, if any
pub fn run(command: Commands) -> Result<Option<String>> {
    match command {
        Commands::Export {
            format,
            theme,
            config,
            output,
            pretty,
            font_family,
        } => {
            let config = load_config(config.as_deref(), theme)?;
            let mut options = ExportOptions::default();
            if let Some(family) = font_family {
                options = options.with_font_family(family);
            }

            let document = TokenDocument::build(&config, &options)?;
            match output {
                Some(path) => {
                    document.write_to(&path, format.into(), pretty)?;
                    Ok(None)
                }
                None => Ok(Some(document.render(format.into(), pretty)?)),
            }
        }
        Commands::Resolve {
            variant,
            state,
            size,
            theme,
            config,
        } => {
            let config = load_config(config.as_deref(), theme)?;
            let payload = resolve_payload(&config, variant, state, size)?;
            Ok(Some(serde_json::to_string_pretty(&payload)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExportError;
    use composex_core::color::Color;
    use composex_core::theme::palette;
    use composex_core::tokens::FontType;

    fn parse(args: &[&str]) -> Commands {
        let mut argv = vec!["composex-tokens"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().command
    }

    fn config_file(dir: &tempfile::TempDir, json: &str) -> PathBuf {
        let path = dir.path().join("theme.json");
        std::fs::write(&path, json).unwrap();
        path
    }

    // ==========================================================================
    // Config Loading Tests
    // ==========================================================================

    #[test]
    fn test_theme_flag_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_file(&dir, r#"{ "mode": "dark" }"#);

        let config = load_config(Some(&path), Some(Theme::Light)).unwrap();
        assert_eq!(config.mode, ThemeMode::Light);
        assert!(config.is_light_theme());

        let config = load_config(Some(&path), None).unwrap();
        assert_eq!(config.mode, ThemeMode::Dark);
    }

    #[test]
    fn test_load_config_defaults() {
        let config = load_config(None, None).unwrap();
        assert_eq!(config, ThemeConfig::default());
        assert!(!config.is_light_theme());
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(Some(&dir.path().join("nope.json")), None);
        assert!(matches!(result, Err(ExportError::Config(_))));
    }

    // ==========================================================================
    // Argument Parsing Tests
    // ==========================================================================

    #[test]
    fn test_parse_resolve_sizes() {
        let cases = [
            ("extra-large", SizeToken::ExtraLarge),
            ("xl", SizeToken::ExtraLarge),
            ("36dp", SizeToken::Custom(36.0)),
            ("small", SizeToken::Small),
        ];
        for (arg, expected) in cases {
            match parse(&["resolve", "danger", "--size", arg]) {
                Commands::Resolve { variant, size, state, .. } => {
                    assert_eq!(variant, Variant::Danger);
                    assert_eq!(size, expected, "{}", arg);
                    assert_eq!(state, ComponentState::Default);
                }
                other => panic!("expected resolve, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_parse_resolve_defaults_and_state() {
        match parse(&["resolve", "info", "--state", "pressed", "-t", "light"]) {
            Commands::Resolve {
                state, size, theme, ..
            } => {
                assert_eq!(state, ComponentState::Pressed);
                assert_eq!(size, SizeToken::Medium);
                assert_eq!(theme, Some(Theme::Light));
            }
            other => panic!("expected resolve, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_bad_arguments() {
        let parse_err = |args: &[&str]| {
            let mut argv = vec!["composex-tokens"];
            argv.extend_from_slice(args);
            Cli::try_parse_from(argv).is_err()
        };
        assert!(parse_err(&["resolve", "custom"]));
        assert!(parse_err(&["resolve", "danger", "--size", "-4"]));
        assert!(parse_err(&["export", "--format", "yaml"]));
    }

    #[test]
    fn test_parse_export() {
        match parse(&["export", "--format", "css", "--theme", "dark", "--pretty"]) {
            Commands::Export {
                format,
                theme,
                pretty,
                output,
                ..
            } => {
                assert_eq!(format, Format::Css);
                assert_eq!(theme, Some(Theme::Dark));
                assert!(pretty);
                assert_eq!(output, None);
            }
            other => panic!("expected export, got {:?}", other),
        }
    }

    // ==========================================================================
    // Execution Tests
    // ==========================================================================

    #[test]
    fn test_resolve_payload_shape() {
        let config = ThemeConfig::with_mode(ThemeMode::Light);
        let payload =
            resolve_payload(&config, Variant::Danger, ComponentState::Pressed, SizeToken::Custom(36.0))
                .unwrap();
        assert_eq!(payload.style.font_type, FontType::Custom(36.0));
        assert_eq!(payload.finalized.font_size, 36.0);
        let bg = payload.finalized.background_color;
        assert_eq!((bg.r, bg.g, bg.b), (244, 67, 54));

        let value = serde_json::to_value(&payload).unwrap();
        assert!(value["style"]["backgroundColor"].is_object());
        assert_eq!(value["finalized"]["contentColor"], "#FFFFFF");
    }

    #[test]
    fn test_run_resolve_uses_theme_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_file(&dir, r#"{ "mode": "dark" }"#);
        let command = parse(&[
            "resolve",
            "success",
            "--config",
            path.to_str().unwrap(),
            "--theme",
            "light",
        ]);

        let output = run(command).unwrap().unwrap();
        let payload: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            payload["finalized"]["backgroundColor"],
            palette::SUCCESS_LIGHT.to_hex()
        );
    }

    #[test]
    fn test_run_export_to_file_and_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("tokens.css");
        let command = parse(&["export", "-f", "css", "-o", output.to_str().unwrap()]);
        assert_eq!(run(command).unwrap(), None);
        assert!(std::fs::read_to_string(&output)
            .unwrap()
            .contains("--cx-primary-default-medium-background"));

        let stdout = run(parse(&["export", "--theme", "light"])).unwrap().unwrap();
        let document: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(document["isLight"], true);
    }

    #[test]
    fn test_resolve_payload_rejects_invalid_config() {
        let mut config = ThemeConfig::default();
        config.palette.warning.light = Color::TRANSPARENT;
        let result =
            resolve_payload(&config, Variant::Warning, ComponentState::Default, SizeToken::Medium);
        assert!(matches!(result, Err(ExportError::Config(_))));
    }
}
