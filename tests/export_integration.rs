//! Export Integration Tests
//!
//! Builds token documents from config files and checks the written JSON
//! and CSS outputs.

use composex::composex_core::color::Color;
use composex::composex_core::tokens::ShapeType;
use composex::composex_core::{ComponentState, CustomVariant, ThemeMode, Variant};
use composex::token_export::{stylesheet, ExportOptions, OutputFormat, TokenDocument};
use composex::{SizeToken, ThemeConfig};
use tempfile::TempDir;

fn write_config(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("theme.json");
    std::fs::write(&path, json).unwrap();
    path
}

/// JSON output lists every variant/state/size with hex colors
#[test]
fn test_json_export_from_config_file() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(&dir, r#"{ "mode": "dark" }"#);
    let config = ThemeConfig::load(&config_path).unwrap();

    let document = TokenDocument::build(&config, &ExportOptions::default()).unwrap();
    let output = dir.path().join("tokens.json");
    document.write_to(&output, OutputFormat::Json, true).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["mode"], "dark");
    assert_eq!(value["isLight"], false);

    let styles = value["styles"].as_array().unwrap();
    assert_eq!(
        styles.len(),
        Variant::BUILT_IN.len() * ComponentState::ALL.len() * SizeToken::NAMED.len()
    );

    let danger = styles
        .iter()
        .find(|s| s["variant"] == "danger" && s["state"] == "default" && s["size"] == "medium")
        .unwrap();
    assert_eq!(danger["backgroundColor"], "#C62828");
    assert_eq!(danger["contentColor"], "#FFFFFF");
    assert_eq!(danger["shape"]["kind"], "rounded");
    assert_eq!(value["typography"]["title-large"]["fontWeight"], "semiBold");
}

/// CSS output carries custom variants and the configured palette
#[test]
fn test_css_export_with_custom_palette_and_variant() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(
        &dir,
        r##"{ "mode": "light", "palette": { "info": { "light": "#0061A4", "dark": "#003258" } } }"##,
    );
    let config = ThemeConfig::load(&config_path).unwrap();

    let options = ExportOptions::default().with_custom_variant(
        "brand",
        CustomVariant::new(Color::rgb(0x9D, 0x4E, 0xDD), Color::WHITE).with_shape(ShapeType::Circle),
    );
    let document = TokenDocument::build(&config, &options).unwrap();
    let output = dir.path().join("tokens.css");
    document.write_to(&output, OutputFormat::Css, false).unwrap();

    let css = std::fs::read_to_string(&output).unwrap();
    assert_eq!(css, stylesheet::render(&document));
    assert!(css.contains("  --cx-primary-default-medium-background: rgb(0, 97, 164);\n"));
    assert!(css.contains("  --cx-primary-focused-medium-background: rgba(0, 97, 164, 0.9);\n"));
    // Secondary is pinned dark even on a light theme
    assert!(css.contains("  --cx-secondary-default-medium-background: rgb(0, 50, 88);\n"));
    assert!(css.contains("  --cx-brand-default-small-radius: 9999px;\n"));
}

/// A broken config surfaces as an error rather than a partial export
#[test]
fn test_invalid_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(&dir, r#"{ "mode": "sepia" }"#);
    assert!(ThemeConfig::load(&config_path).is_err());
}

/// Light and dark exports differ only where colors follow the ambient mode
#[test]
fn test_light_and_dark_exports_share_geometry() {
    let light = TokenDocument::build(
        &ThemeConfig::with_mode(ThemeMode::Light),
        &ExportOptions::default(),
    )
    .unwrap();
    let dark = TokenDocument::build(
        &ThemeConfig::with_mode(ThemeMode::Dark),
        &ExportOptions::default(),
    )
    .unwrap();

    assert_eq!(light.dimensions, dark.dimensions);
    assert_eq!(light.scales, dark.scales);
    for (l, d) in light.styles.iter().zip(&dark.styles) {
        assert_eq!(l.style.elevation, d.style.elevation);
        assert_eq!(l.style.shape, d.style.shape);
        assert_eq!(l.style.content_color, d.style.content_color);
    }

    let l = light.style("secondary", "pressed", "large").unwrap();
    let d = dark.style("secondary", "pressed", "large").unwrap();
    assert_eq!(l.style.background_color, d.style.background_color);
}
