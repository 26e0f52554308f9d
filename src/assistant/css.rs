//! Offline advisor that reads a theme out of pasted CSS or a description.

use crate::assistant::{AutoConfigSuggestion, ThemeAdvisor};
use crate::models::{BorderRadius, SectionKind, StylePreset};
use anyhow::{Context, Result};
use regex::Regex;

/// Keywords that hint at a style preset, checked in order.
const PRESET_HINTS: &[(StylePreset, &[&str])] = &[
    (StylePreset::Brutal, &["brutal", "brutalist", "brutalism"]),
    (StylePreset::Neumorphic, &["neumorphic", "neumorphism", "soft ui"]),
    (StylePreset::Glass, &["glass", "backdrop-filter", "frosted", "blur("]),
    (StylePreset::Clay, &["clay", "claymorphism"]),
    (StylePreset::Macaron, &["macaron", "pastel"]),
    (StylePreset::Ios, &["ios", "apple", "-apple-system", "cupertino"]),
    (StylePreset::Material, &["material", "elevation", "roboto"]),
    (StylePreset::Modern, &["modern", "minimal", "clean"]),
];

/// Keywords that name a section kind.
const SECTION_HINTS: &[(SectionKind, &[&str])] = &[
    (SectionKind::Header, &["header", "navbar", "nav"]),
    (SectionKind::Hero, &["hero", "banner", "headline"]),
    (SectionKind::Features, &["features", "feature grid"]),
    (SectionKind::Pricing, &["pricing", "plans", "tiers"]),
    (SectionKind::Testimonials, &["testimonials", "reviews"]),
    (SectionKind::Cta, &["call to action", "cta"]),
    (SectionKind::Footer, &["footer"]),
];

/// Infers a suggestion from CSS declarations and plain-language hints.
///
/// - the first hex color becomes the primary color
/// - the first `border-radius` is snapped to the nearest supported token
/// - preset and section keywords are matched case-insensitively
/// - `dark`, `#000`-like backgrounds and `prefers-color-scheme: dark` set dark mode
/// - the first family in a `font-family` declaration becomes the font
pub struct CssThemeAdvisor {
    hex_color: Regex,
    radius: Regex,
    font_family: Regex,
    dark_background: Regex,
    word: Regex,
}

impl CssThemeAdvisor {
    /// Compiles the matchers.
    pub fn new() -> Result<Self> {
        Ok(Self {
            hex_color: Regex::new(r"#(?:[0-9a-fA-F]{6}|[0-9a-fA-F]{3})\b")
                .context("Failed to compile hex color pattern")?,
            radius: Regex::new(r"(?i)border-radius\s*:\s*(\d+)(px|rem|em|%)?")
                .context("Failed to compile border-radius pattern")?,
            font_family: Regex::new(r#"(?i)font-family\s*:\s*['"]?([^,;'"]+)"#)
                .context("Failed to compile font-family pattern")?,
            dark_background: Regex::new(
                r"(?i)background(?:-color)?\s*:\s*#(?:0{3}|0{6}|1[0-9a-f]{5}|0[0-9a-f]{5})\b",
            )
            .context("Failed to compile background pattern")?,
            word: Regex::new(r"[a-z]+").context("Failed to compile word pattern")?,
        })
    }

    /// Builds a suggestion from `input`. Never fails.
    #[must_use]
    pub fn analyze(&self, input: &str) -> AutoConfigSuggestion {
        let lower = input.to_lowercase();

        AutoConfigSuggestion {
            primary_color: self.primary_color(input),
            border_radius: self.border_radius(input),
            style_preset: self.style_preset(&lower),
            dark_mode: self.dark_mode(&lower),
            font_family: self.font_family(input),
            sections: self.sections(&lower),
        }
    }

    fn primary_color(&self, input: &str) -> Option<String> {
        // Skip colors used as plain backgrounds; they are rarely the accent
        self.hex_color
            .find_iter(input)
            .find(|m| {
                let prefix = &input[..m.start()];
                let line_start = prefix.rfind(['\n', ';', '{']).map_or(0, |i| i + 1);
                !prefix[line_start..].trim_start().starts_with("background")
            })
            .or_else(|| self.hex_color.find(input))
            .map(|m| m.as_str().to_lowercase())
    }

    fn border_radius(&self, input: &str) -> Option<BorderRadius> {
        let caps = self.radius.captures(input)?;
        let value: u32 = caps.get(1)?.as_str().parse().ok()?;
        let pixels = match caps.get(2).map(|u| u.as_str().to_lowercase()).as_deref() {
            Some("rem" | "em") => value.saturating_mul(16),
            Some("%") if value >= 50 => 99,
            _ => value,
        };
        Some(BorderRadius::nearest(pixels))
    }

    fn style_preset(&self, lower: &str) -> Option<StylePreset> {
        PRESET_HINTS
            .iter()
            .find(|(_, hints)| hints.iter().any(|h| lower.contains(h)))
            .map(|(preset, _)| *preset)
    }

    fn dark_mode(&self, lower: &str) -> Option<bool> {
        if lower.contains("prefers-color-scheme: dark") || self.dark_background.is_match(lower) {
            return Some(true);
        }

        let words: Vec<&str> = self.word.find_iter(lower).map(|m| m.as_str()).collect();
        if words.iter().any(|w| matches!(*w, "dark" | "night" | "midnight")) {
            Some(true)
        } else if words.iter().any(|w| matches!(*w, "light" | "bright")) {
            Some(false)
        } else {
            None
        }
    }

    fn font_family(&self, input: &str) -> Option<String> {
        let caps = self.font_family.captures(input)?;
        let family = caps.get(1)?.as_str().trim();
        (!family.is_empty()).then(|| family.to_string())
    }

    fn sections(&self, lower: &str) -> Vec<SectionKind> {
        let words: Vec<&str> = self.word.find_iter(lower).map(|m| m.as_str()).collect();
        let mut found: Vec<(usize, SectionKind)> = SECTION_HINTS
            .iter()
            .filter_map(|(kind, hints)| {
                hints
                    .iter()
                    .filter_map(|h| position_of_phrase(&words, h))
                    .min()
                    .map(|pos| (pos, *kind))
            })
            .collect();

        // Mentioned order becomes render order
        found.sort_by_key(|(pos, _)| *pos);
        found.into_iter().map(|(_, kind)| kind).collect()
    }
}

/// Word index at which `phrase` (one or more words) first appears.
fn position_of_phrase(words: &[&str], phrase: &str) -> Option<usize> {
    let needle: Vec<&str> = phrase.split_whitespace().collect();
    if needle.is_empty() || needle.len() > words.len() {
        return None;
    }
    words.windows(needle.len()).position(|w| w == needle.as_slice())
}

impl ThemeAdvisor for CssThemeAdvisor {
    fn suggest(&self, input: &str) -> Result<AutoConfigSuggestion> {
        Ok(self.analyze(input))
    }
}
