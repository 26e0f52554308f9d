//! Theme settings and partial theme updates.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Corner rounding applied to cards, buttons and inputs.
///
/// Serialized as the CSS length token (`"8px"`). `Pill` (`"99px"`) means
/// fully rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BorderRadius {
    /// Square corners
    #[serde(rename = "0px")]
    None,
    /// Barely rounded
    #[serde(rename = "4px")]
    Small,
    /// Default rounding
    #[default]
    #[serde(rename = "8px")]
    Medium,
    /// Soft rounding
    #[serde(rename = "16px")]
    Large,
    /// Very soft rounding
    #[serde(rename = "24px")]
    ExtraLarge,
    /// Fully rounded
    #[serde(rename = "99px")]
    Pill,
}

impl BorderRadius {
    /// All radius tokens in ascending order.
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::ExtraLarge,
        Self::Pill,
    ];

    /// Returns the CSS length token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "0px",
            Self::Small => "4px",
            Self::Medium => "8px",
            Self::Large => "16px",
            Self::ExtraLarge => "24px",
            Self::Pill => "99px",
        }
    }

    /// Radius in pixels.
    #[must_use]
    pub const fn pixels(&self) -> u32 {
        match self {
            Self::None => 0,
            Self::Small => 4,
            Self::Medium => 8,
            Self::Large => 16,
            Self::ExtraLarge => 24,
            Self::Pill => 99,
        }
    }

    /// Snaps an arbitrary pixel value to the closest supported token.
    ///
    /// Anything of 50px or more is treated as a pill.
    #[must_use]
    pub fn nearest(pixels: u32) -> Self {
        if pixels >= 50 {
            return Self::Pill;
        }

        Self::ALL[..5]
            .iter()
            .copied()
            .min_by_key(|r| r.pixels().abs_diff(pixels))
            .unwrap_or_default()
    }
}

impl fmt::Display for BorderRadius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BorderRadius {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim().to_lowercase();
        let token = token.strip_suffix("px").unwrap_or(&token);

        Self::ALL
            .iter()
            .copied()
            .find(|r| r.pixels().to_string() == token)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Invalid border radius '{s}'. Must be one of: 0px, 4px, 8px, 16px, 24px, 99px"
                )
            })
    }
}

/// Visual style family used when rendering sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StylePreset {
    /// Flat, clean default
    #[default]
    Modern,
    /// Material design elevation
    Material,
    /// Apple-style translucency
    Ios,
    /// Soft clay shapes
    Clay,
    /// Extruded soft shadows
    Neumorphic,
    /// Frosted glass
    Glass,
    /// Neo-brutalism, hard borders
    Brutal,
    /// Pastel macaron palette
    Macaron,
}

impl StylePreset {
    /// Every preset, in display order.
    pub const ALL: [Self; 8] = [
        Self::Modern,
        Self::Material,
        Self::Ios,
        Self::Clay,
        Self::Neumorphic,
        Self::Glass,
        Self::Brutal,
        Self::Macaron,
    ];

    /// Returns the lowercase token used in documents.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Material => "material",
            Self::Ios => "ios",
            Self::Clay => "clay",
            Self::Neumorphic => "neumorphic",
            Self::Glass => "glass",
            Self::Brutal => "brutal",
            Self::Macaron => "macaron",
        }
    }
}

impl fmt::Display for StylePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StylePreset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == token)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown style preset '{s}'. Must be one of: modern, material, ios, clay, neumorphic, glass, brutal, macaron"
                )
            })
    }
}

/// Theme settings for a page.
///
/// `primary_color` is carried as the string the user (or an assistant)
/// supplied. Use [`is_hex_color`] at the input boundary if the caller wants
/// to restrict it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Accent color, `#RRGGBB` or `#RGB`
    pub primary_color: String,
    /// Corner rounding token
    pub border_radius: BorderRadius,
    /// Style family
    pub style_preset: StylePreset,
    /// Dark color scheme
    pub dark_mode: bool,
    /// Font family name
    pub font_family: String,
}

/// Default accent color for new pages.
pub const DEFAULT_PRIMARY_COLOR: &str = "#6366f1";

/// Default font family for new pages.
pub const DEFAULT_FONT_FAMILY: &str = "Inter";

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            border_radius: BorderRadius::default(),
            style_preset: StylePreset::default(),
            dark_mode: false,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

impl ThemeConfig {
    /// Merges the fields present in `update`, leaving the rest untouched.
    ///
    /// No validation happens here. Returns the merged theme.
    pub fn set_theme_fields(&mut self, update: ThemeUpdate) -> &Self {
        if let Some(color) = update.primary_color {
            self.primary_color = color;
        }
        if let Some(radius) = update.border_radius {
            self.border_radius = radius;
        }
        if let Some(preset) = update.style_preset {
            self.style_preset = preset;
        }
        if let Some(dark) = update.dark_mode {
            self.dark_mode = dark;
        }
        if let Some(font) = update.font_family {
            self.font_family = font;
        }
        self
    }

    /// Returns a copy of this theme with `update` merged in.
    #[must_use]
    pub fn merged(&self, update: ThemeUpdate) -> Self {
        let mut theme = self.clone();
        theme.set_theme_fields(update);
        theme
    }
}

/// Partial theme: every field is optional and only present fields are applied.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeUpdate {
    /// New accent color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    /// New corner rounding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<BorderRadius>,
    /// New style family
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_preset: Option<StylePreset>,
    /// New color scheme
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
    /// New font family
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl ThemeUpdate {
    /// Returns true when no field is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.primary_color.is_none()
            && self.border_radius.is_none()
            && self.style_preset.is_none()
            && self.dark_mode.is_none()
            && self.font_family.is_none()
    }

    /// Sets the accent color.
    pub fn with_primary_color(mut self, color: impl Into<String>) -> Self {
        self.primary_color = Some(color.into());
        self
    }

    /// Sets the corner rounding.
    pub const fn with_border_radius(mut self, radius: BorderRadius) -> Self {
        self.border_radius = Some(radius);
        self
    }

    /// Sets the style preset.
    pub const fn with_style_preset(mut self, preset: StylePreset) -> Self {
        self.style_preset = Some(preset);
        self
    }

    /// Sets dark mode.
    pub const fn with_dark_mode(mut self, dark: bool) -> Self {
        self.dark_mode = Some(dark);
        self
    }

    /// Sets the font family.
    pub fn with_font_family(mut self, font: impl Into<String>) -> Self {
        self.font_family = Some(font.into());
        self
    }
}

/// Checks for `#RGB` or `#RRGGBB` hex notation.
///
/// # Examples
///
/// ```
/// use pagesmith::models::is_hex_color;
///
/// assert!(is_hex_color("#fff"));
/// assert!(is_hex_color("#6366F1"));
/// assert!(!is_hex_color("6366f1"));
/// assert!(!is_hex_color("#12345"));
/// ```
#[must_use]
pub fn is_hex_color(value: &str) -> bool {
    value.strip_prefix('#').is_some_and(|hex| {
        (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
    })
}
