//! CSS custom-property rendering
//!
//! Every value in a [`TokenDocument`] becomes one `--cx-*` property under
//! `:root`:
//!
//! - `--cx-<variant>-<state>-<size>-<property>` for resolved styles
//! - `--cx-<widget>-<size>-<dimension>` for widget dimensions
//! - `--cx-<scale>-<name>` for raw scales
//! - `--cx-type-<role>-<property>` for text roles

use crate::export::TokenDocument;
use composex_core::dimensions::WidgetDimensions;

const PREFIX: &str = "--cx";

/// Render a document as a stylesheet
pub fn render(document: &TokenDocument) -> String {
    let mut css = String::new();
    css.push_str(&format!(
        "/* ComposeX design tokens ({}, {} colors) */\n",
        document.mode,
        if document.is_light { "light" } else { "dark" }
    ));
    css.push_str(":root {\n");

    for (name, dp) in &document.scales.size {
        declare(&mut css, &["size", name.as_str()], px(*dp));
    }
    for (name, dp) in &document.scales.elevation {
        declare(&mut css, &["elevation", name.as_str()], px(*dp));
    }
    for (name, shape) in &document.scales.shape {
        if let Some(radius) = shape.css_border_radius() {
            declare(&mut css, &["shape", name.as_str()], radius);
        }
    }
    for (name, dp) in &document.scales.spacing {
        declare(&mut css, &["spacing", name.as_str()], px(*dp));
    }
    for (name, sp) in &document.scales.font {
        declare(&mut css, &["font", name.as_str()], px(*sp));
    }

    for entry in &document.styles {
        let base = [entry.variant.as_str(), entry.state.as_str(), entry.size.as_str()];
        let style = &entry.style;
        let property = |name: &'static str| [base[0], base[1], base[2], name];

        declare(&mut css, &property("background"), style.background_color.to_css());
        declare(&mut css, &property("content"), style.content_color.to_css());
        if let Some(border) = style.border_color {
            declare(&mut css, &property("border"), border.to_css());
        }
        declare(&mut css, &property("elevation"), px(style.elevation));
        if let Some(radius) = style.shape.css_border_radius() {
            declare(&mut css, &property("radius"), radius);
        }
        declare(&mut css, &property("spacing"), px(style.spacing));
        declare(&mut css, &property("font-size"), px(style.font_size));
    }

    for (widget, sizes) in &document.dimensions {
        for (size, dims) in sizes {
            for (name, value) in dimension_properties(dims) {
                declare(&mut css, &[widget.as_str(), size.as_str(), name], value);
            }
        }
    }

    for (role, style) in &document.typography {
        declare(&mut css, &["type", role.as_str(), "size"], px(style.font_size));
        declare(
            &mut css,
            &["type", role.as_str(), "weight"],
            style.font_weight.value().to_string(),
        );
        if let Some(family) = &style.font_family {
            declare(&mut css, &["type", role.as_str(), "family"], format!("\"{}\"", family));
        }
    }

    css.push_str("}\n");
    css
}

fn declare(css: &mut String, segments: &[&str], value: String) {
    css.push_str(&format!("  {}-{}: {};\n", PREFIX, segments.join("-"), value));
}

fn px(value: f32) -> String {
    format!("{}px", value)
}

fn dimension_properties(dims: &WidgetDimensions) -> Vec<(&'static str, String)> {
    let lengths = [
        ("height", dims.height),
        ("icon-size", dims.icon_size),
        ("font-size", dims.font_size),
        ("stroke-width", dims.stroke_width),
        ("content-padding", dims.content_padding),
        ("label-gap", dims.label_gap),
        ("border-width", dims.border_width),
    ];
    let factors = [
        ("padding-scale", dims.padding_scale),
        ("vertical-padding-scale", dims.vertical_padding_scale),
        ("elevation-scale", dims.elevation_scale),
        ("inactive-alpha", dims.inactive_alpha),
        ("disabled-alpha", dims.disabled_alpha),
    ];

    lengths
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, px(v))))
        .chain(
            factors
                .into_iter()
                .filter_map(|(name, value)| value.map(|v| (name, v.to_string()))),
        )
        .collect()
}
