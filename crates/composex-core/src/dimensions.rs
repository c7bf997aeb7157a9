//! Per-widget dimension tables
//!
//! Every widget keys its own pixel dimensions off the same [`SizeToken`] the
//! style resolver uses, but the tables are independent of the resolved style
//! and use their own scale factors. The multipliers applied to custom sizes
//! (badge 1.1, text field 1.4, font 0.2 / 0.4, ...) are fixed per widget and
//! do not follow a shared formula.
//!
//! Alpha values here replace a color's alpha outright, unlike the
//! interaction-state opacity in [`crate::style::opacity`], which multiplies.

use crate::color::Color;
use crate::style::ComponentStyle;
use crate::tokens::{SizeToken, SpacingType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Space between a selection control and its label (dp)
pub const LABEL_GAP: f32 = 8.0;

/// Fixed alpha values widgets apply to resolved colors
pub mod alpha {
    /// Unselected chip container
    pub const CHIP_UNSELECTED: f32 = 0.1;
    /// Inactive track of sliders and switches, unselected radio ring
    pub const INACTIVE_TRACK: f32 = 0.3;
    /// Disabled switch track
    pub const SWITCH_DISABLED_TRACK: f32 = 0.5;
    /// Disabled switch thumb while checked
    pub const SWITCH_DISABLED_THUMB_CHECKED: f32 = 0.6;
    /// Disabled switch thumb while unchecked
    pub const SWITCH_DISABLED_THUMB_UNCHECKED: f32 = 0.8;

    /// Alpha of a disabled switch thumb
    pub fn switch_disabled_thumb(checked: bool) -> f32 {
        if checked {
            SWITCH_DISABLED_THUMB_CHECKED
        } else {
            SWITCH_DISABLED_THUMB_UNCHECKED
        }
    }
}

/// Widgets with size-dependent dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetKind {
    /// Filled and outlined buttons
    Button,
    /// Count badge
    Badge,
    /// Checkbox
    Checkbox,
    /// Radio button
    RadioButton,
    /// Filter/selection chip
    Chip,
    /// Increment/decrement counter
    Counter,
    /// Dropdown menu anchor
    Dropdown,
    /// Outlined text field
    TextField,
    /// Circular progress indicator
    CircularProgress,
    /// Linear progress bar
    LinearProgress,
    /// Toggle switch (platform-sized)
    Switch,
    /// Slider (platform-sized)
    Slider,
    /// Elevated card
    Card,
    /// Modal dialog
    Dialog,
    /// Bottom sheet
    BottomSheet,
    /// Snackbar
    Snackbar,
}

/// Concrete dimensions of a widget at one size
///
/// Fields a widget does not define are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetDimensions {
    /// Height, or diameter for round widgets (dp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    /// Icon size (dp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_size: Option<f32>,
    /// Font size (sp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// Indicator stroke width (dp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f32>,
    /// Inner vertical padding (dp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_padding: Option<f32>,
    /// Gap between the control and its label (dp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_gap: Option<f32>,
    /// Factor applied to the resolved spacing to get horizontal padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_scale: Option<f32>,
    /// Factor applied to the horizontal padding to get vertical padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_padding_scale: Option<f32>,
    /// Outline width (dp); outlined buttons, dropdowns and selected chips
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    /// Alpha of the inactive or unselected part
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive_alpha: Option<f32>,
    /// Alpha of the track when disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_alpha: Option<f32>,
    /// Factor applied to the resolved elevation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation_scale: Option<f32>,
}

impl WidgetDimensions {
    fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    fn icon(mut self, icon_size: f32) -> Self {
        self.icon_size = Some(icon_size);
        self
    }

    fn font(mut self, font_size: f32) -> Self {
        self.font_size = Some(font_size);
        self
    }

    fn stroke(mut self, stroke_width: f32) -> Self {
        self.stroke_width = Some(stroke_width);
        self
    }

    fn content_padding(mut self, padding: f32) -> Self {
        self.content_padding = Some(padding);
        self
    }

    fn label_gap(mut self) -> Self {
        self.label_gap = Some(LABEL_GAP);
        self
    }

    fn padding_scale(mut self, scale: f32) -> Self {
        self.padding_scale = Some(scale);
        self
    }

    fn elevation_scale(mut self, scale: f32) -> Self {
        self.elevation_scale = Some(scale);
        self
    }

    fn vertical_padding_scale(mut self, scale: f32) -> Self {
        self.vertical_padding_scale = Some(scale);
        self
    }

    fn border(mut self, width: f32) -> Self {
        self.border_width = Some(width);
        self
    }

    fn inactive_alpha(mut self, alpha: f32) -> Self {
        self.inactive_alpha = Some(alpha);
        self
    }

    fn disabled_alpha(mut self, alpha: f32) -> Self {
        self.disabled_alpha = Some(alpha);
        self
    }

    /// Horizontal padding given the resolved spacing
    pub fn padding(&self, spacing: SpacingType) -> Option<f32> {
        self.padding_scale.map(|scale| spacing.to_dp() * scale)
    }

    /// Vertical padding given the resolved spacing
    pub fn vertical_padding(&self, spacing: SpacingType) -> Option<f32> {
        let padding = self.padding(spacing)?;
        self.vertical_padding_scale.map(|scale| padding * scale)
    }

    /// `color` with the inactive alpha applied, if the widget defines one
    pub fn inactive_color(&self, color: Color) -> Option<Color> {
        self.inactive_alpha.map(|alpha| color.with_alpha(alpha))
    }
}

/// Pick from a four-step table, or scale a custom size
fn step(size: SizeToken, table: [f32; 4], custom_factor: f32) -> f32 {
    match size {
        SizeToken::Small => table[0],
        SizeToken::Medium => table[1],
        SizeToken::Large => table[2],
        SizeToken::ExtraLarge => table[3],
        SizeToken::Custom(dp) => dp * custom_factor,
    }
}

impl WidgetKind {
    /// Every widget kind
    pub const ALL: [WidgetKind; 16] = [
        WidgetKind::Button,
        WidgetKind::Badge,
        WidgetKind::Checkbox,
        WidgetKind::RadioButton,
        WidgetKind::Chip,
        WidgetKind::Counter,
        WidgetKind::Dropdown,
        WidgetKind::TextField,
        WidgetKind::CircularProgress,
        WidgetKind::LinearProgress,
        WidgetKind::Switch,
        WidgetKind::Slider,
        WidgetKind::Card,
        WidgetKind::Dialog,
        WidgetKind::BottomSheet,
        WidgetKind::Snackbar,
    ];

    /// Kebab-case name
    pub fn name(&self) -> &'static str {
        match self {
            WidgetKind::Button => "button",
            WidgetKind::Badge => "badge",
            WidgetKind::Checkbox => "checkbox",
            WidgetKind::RadioButton => "radio-button",
            WidgetKind::Chip => "chip",
            WidgetKind::Counter => "counter",
            WidgetKind::Dropdown => "dropdown",
            WidgetKind::TextField => "text-field",
            WidgetKind::CircularProgress => "circular-progress",
            WidgetKind::LinearProgress => "linear-progress",
            WidgetKind::Switch => "switch",
            WidgetKind::Slider => "slider",
            WidgetKind::Card => "card",
            WidgetKind::Dialog => "dialog",
            WidgetKind::BottomSheet => "bottom-sheet",
            WidgetKind::Snackbar => "snackbar",
        }
    }

    /// Dimensions of this widget at `size`
    pub fn dimensions(&self, size: SizeToken) -> WidgetDimensions {
        let dims = WidgetDimensions::default();
        match self {
            WidgetKind::Button => dims
                .height(step(size, [32.0, 40.0, 48.0, 56.0], 1.0))
                .icon(18.0)
                .padding_scale(1.0)
                .vertical_padding_scale(0.5)
                .border(1.0),
            WidgetKind::Badge => dims
                .height(step(size, [18.0, 22.0, 26.0, 30.0], 1.1))
                .font(step(size, [10.0, 12.0, 14.0, 16.0], 0.4)),
            WidgetKind::Checkbox => dims
                .height(step(size, [20.0, 24.0, 28.0, 32.0], 1.0))
                .label_gap(),
            WidgetKind::RadioButton => dims
                .height(step(size, [20.0, 24.0, 28.0, 32.0], 1.0))
                .label_gap()
                .inactive_alpha(alpha::INACTIVE_TRACK),
            WidgetKind::Chip => dims
                .height(step(size, [24.0, 32.0, 40.0, 48.0], 1.0))
                .icon(16.0)
                .padding_scale(0.5)
                .vertical_padding_scale(0.5)
                .border(2.0)
                .inactive_alpha(alpha::CHIP_UNSELECTED),
            WidgetKind::Counter => dims
                .height(step(size, [32.0, 40.0, 48.0, 56.0], 1.0))
                .icon(step(size, [16.0, 20.0, 24.0, 28.0], 0.5))
                .padding_scale(0.25),
            WidgetKind::Dropdown => dims
                .height(step(size, [40.0, 48.0, 56.0, 64.0], 1.0))
                .font(step(size, [14.0, 16.0, 18.0, 20.0], 0.2))
                .icon(20.0)
                .padding_scale(0.5)
                .vertical_padding_scale(0.5)
                .border(1.0),
            WidgetKind::TextField => dims
                .height(step(size, [56.0, 64.0, 72.0, 80.0], 1.4))
                .font(step(size, [14.0, 16.0, 18.0, 20.0], 0.2))
                .content_padding(step(size, [12.0, 16.0, 20.0, 24.0], 0.3)),
            WidgetKind::CircularProgress => dims
                .height(step(size, [24.0, 32.0, 40.0, 48.0], 1.0))
                .stroke(step(size, [2.0, 3.0, 4.0, 5.0], 0.1)),
            WidgetKind::LinearProgress => dims.height(step(size, [4.0, 6.0, 8.0, 10.0], 0.15)),
            WidgetKind::Switch => dims
                .label_gap()
                .inactive_alpha(alpha::INACTIVE_TRACK)
                .disabled_alpha(alpha::SWITCH_DISABLED_TRACK),
            WidgetKind::Slider => dims.inactive_alpha(alpha::INACTIVE_TRACK),
            WidgetKind::Card => dims.padding_scale(1.0).elevation_scale(1.5),
            WidgetKind::Dialog | WidgetKind::BottomSheet => dims.padding_scale(1.0),
            WidgetKind::Snackbar => dims.padding_scale(0.5),
        }
    }

    /// Dimensions at the size a resolved style was built for
    pub fn dimensions_for(&self, style: &ComponentStyle) -> WidgetDimensions {
        self.dimensions(style.size_token)
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WidgetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        WidgetKind::ALL
            .into_iter()
            .find(|kind| kind.name() == lowered)
            .ok_or_else(|| format!("Unknown widget: {}", s))
    }
}
