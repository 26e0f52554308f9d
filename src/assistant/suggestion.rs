//! Auto-configuration suggestions and parsing of model output.

use crate::models::{BorderRadius, SectionKind, StylePreset, ThemeUpdate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Partial theme plus an optional section list recommended by an advisor.
///
/// Every field is optional. See [`crate::editor::Editor::apply_suggestion`]
/// for how a suggestion is applied.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoConfigSuggestion {
    /// Suggested accent color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    /// Suggested corner rounding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<BorderRadius>,
    /// Suggested style family
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_preset: Option<StylePreset>,
    /// Suggested color scheme
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
    /// Suggested font family
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Recommended sections, top to bottom
    #[serde(
        default,
        rename = "recommendedSections",
        alias = "sections",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub sections: Vec<SectionKind>,
}

impl AutoConfigSuggestion {
    /// Returns true when the suggestion carries nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.theme_update().is_empty() && self.sections.is_empty()
    }

    /// The theme portion as a partial update.
    #[must_use]
    pub fn theme_update(&self) -> ThemeUpdate {
        ThemeUpdate {
            primary_color: self.primary_color.clone(),
            border_radius: self.border_radius,
            style_preset: self.style_preset,
            dark_mode: self.dark_mode,
            font_family: self.font_family.clone(),
        }
    }

    /// Extracts a suggestion from free-form model output.
    ///
    /// The output may wrap the JSON object in Markdown fences or surround it
    /// with prose. Fields are read individually, so one bad value does not
    /// discard the rest: unknown presets, radii and section tokens are
    /// dropped. Output with no JSON object yields an empty suggestion.
    #[must_use]
    pub fn from_model_text(text: &str) -> Self {
        let Some(object) = extract_json_object(text) else {
            debug!("Model output contained no JSON object");
            return Self::default();
        };

        let primary_color = object
            .get("primaryColor")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        let border_radius = match object.get("borderRadius") {
            Some(Value::String(s)) => s.parse().ok(),
            Some(Value::Number(n)) => n
                .as_u64()
                .and_then(|px| u32::try_from(px).ok())
                .map(BorderRadius::nearest),
            _ => None,
        };

        let style_preset = object
            .get("stylePreset")
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok());

        let dark_mode = object.get("darkMode").and_then(Value::as_bool);

        let font_family = object
            .get("fontFamily")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string);

        let sections = object
            .get("recommendedSections")
            .or_else(|| object.get("sections"))
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .filter_map(|s| s.parse().ok())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            primary_color,
            border_radius,
            style_preset,
            dark_mode,
            font_family,
            sections,
        }
    }
}

/// Removes a surrounding Markdown code fence, if present.
///
/// ```
/// use pagesmith::assistant::strip_code_fences;
///
/// assert_eq!(strip_code_fences("```html\n<p>hi</p>\n```"), "<p>hi</p>");
/// assert_eq!(strip_code_fences("plain"), "plain");
/// ```
#[must_use]
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Skip the language tag on the opening line; a one-line fence has none
    let body = rest.split_once('\n').map_or(rest, |(_, body)| body);
    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Finds the outermost `{ ... }` in `text` and parses it as a JSON object.
fn extract_json_object(text: &str) -> Option<serde_json::Map<String, Value>> {
    let body = strip_code_fences(text);
    let start = body.find('{')?;
    let end = body.rfind('}')?;
    if end < start {
        return None;
    }

    match serde_json::from_str(&body[start..=end]).ok()? {
        Value::Object(object) => Some(object),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_json() {
        let text = r##"{"primaryColor": "#10b981", "borderRadius": "16px", "stylePreset": "clay", "darkMode": false, "recommendedSections": ["header", "hero", "pricing"]}"##;
        let suggestion = AutoConfigSuggestion::from_model_text(text);

        assert_eq!(suggestion.primary_color.as_deref(), Some("#10b981"));
        assert_eq!(suggestion.border_radius, Some(BorderRadius::Large));
        assert_eq!(suggestion.style_preset, Some(StylePreset::Clay));
        assert_eq!(suggestion.dark_mode, Some(false));
        assert_eq!(
            suggestion.sections,
            vec![SectionKind::Header, SectionKind::Hero, SectionKind::Pricing]
        );
    }

    #[test]
    fn test_parse_fenced_json_with_prose() {
        let text = "Here is your theme:\n```json\n{\"primaryColor\": \"#000\", \"darkMode\": true}\n```";
        let suggestion = AutoConfigSuggestion::from_model_text(text);
        assert_eq!(suggestion.primary_color.as_deref(), Some("#000"));
        assert_eq!(suggestion.dark_mode, Some(true));
        assert!(suggestion.sections.is_empty());
    }

    #[test]
    fn test_parse_drops_unknown_tokens() {
        let text = r##"{"primaryColor": "#fff", "stylePreset": "vaporwave", "borderRadius": "13px", "recommendedSections": ["hero", "sidebar", "footer"]}"##;
        let suggestion = AutoConfigSuggestion::from_model_text(text);

        assert_eq!(suggestion.style_preset, None);
        assert_eq!(suggestion.border_radius, None);
        assert_eq!(suggestion.sections, vec![SectionKind::Hero, SectionKind::Footer]);
    }

    #[test]
    fn test_parse_numeric_radius_snaps() {
        let suggestion = AutoConfigSuggestion::from_model_text(r#"{"borderRadius": 10}"#);
        assert_eq!(suggestion.border_radius, Some(BorderRadius::Medium));
    }

    #[test]
    fn test_parse_garbage_is_empty() {
        assert!(AutoConfigSuggestion::from_model_text("I cannot help with that.").is_empty());
        assert!(AutoConfigSuggestion::from_model_text("").is_empty());
        assert!(AutoConfigSuggestion::from_model_text("} nope {").is_empty());
        assert!(AutoConfigSuggestion::from_model_text("{not json}").is_empty());
    }

    #[test]
    fn test_serde_field_names() {
        let suggestion = AutoConfigSuggestion {
            primary_color: Some("#123456".to_string()),
            sections: vec![SectionKind::Cta],
            ..AutoConfigSuggestion::default()
        };
        let json = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(json["primaryColor"], "#123456");
        assert_eq!(json["recommendedSections"][0], "cta");
        assert!(json.get("darkMode").is_none());
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```\nbody\n```"), "body");
        assert_eq!(strip_code_fences("  ```tsx\nconst a = 1;\n```  "), "const a = 1;");
        assert_eq!(strip_code_fences("no fences"), "no fences");
        assert_eq!(strip_code_fences("```<main>hi</main>```"), "<main>hi</main>");
    }
}
