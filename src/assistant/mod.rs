//! Assistant collaborators: code generation and auto-configuration.
//!
//! The hosted model behind these traits is outside this crate. What lives
//! here is the contract the editor relies on: failures never propagate as
//! hard errors. A failed code generation yields [`CODE_GENERATION_FAILED`],
//! and a failed auto-configuration yields an empty suggestion, which the
//! editor applies as "no change".

pub mod css;
pub mod suggestion;

pub use css::CssThemeAdvisor;
pub use suggestion::{strip_code_fences, AutoConfigSuggestion};

use crate::models::{Layout, Snapshot, ThemeConfig};
use anyhow::Result;
use tracing::warn;

/// Text returned in place of source code when generation fails.
pub const CODE_GENERATION_FAILED: &str = "// Error generating code. Please try again.";

/// Produces page source code for a configuration.
pub trait CodeGenerator {
    /// Generates source code for `theme` and `layout`, guided by `prompt`.
    fn generate(&self, theme: &ThemeConfig, layout: &Layout, prompt: &str) -> Result<String>;
}

/// Infers a theme (and optionally a layout) from free text or pasted code.
pub trait ThemeAdvisor {
    /// Returns a suggestion for `input`. Any subset of fields may be set.
    fn suggest(&self, input: &str) -> Result<AutoConfigSuggestion>;
}

/// Runs `generator` against `snapshot`.
///
/// Markdown fences around the result are removed. Any failure, including an
/// empty result, is reported as [`CODE_GENERATION_FAILED`].
pub fn generate_source(generator: &dyn CodeGenerator, snapshot: &Snapshot, prompt: &str) -> String {
    match generator.generate(&snapshot.theme, &snapshot.layout, prompt) {
        Ok(code) => {
            let code = strip_code_fences(&code);
            if code.is_empty() {
                warn!("Code generation returned no code");
                CODE_GENERATION_FAILED.to_string()
            } else {
                code.to_string()
            }
        }
        Err(e) => {
            warn!("Code generation failed: {e:#}");
            CODE_GENERATION_FAILED.to_string()
        }
    }
}

/// Asks `advisor` for a suggestion, mapping failure to an empty one.
pub fn request_suggestion(advisor: &dyn ThemeAdvisor, input: &str) -> AutoConfigSuggestion {
    advisor.suggest(input).unwrap_or_else(|e| {
        warn!("Auto-configuration failed: {e:#}");
        AutoConfigSuggestion::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::Editor;
    use crate::models::SectionKind;

    struct FixedGenerator(Result<String, String>);

    impl CodeGenerator for FixedGenerator {
        fn generate(&self, theme: &ThemeConfig, layout: &Layout, prompt: &str) -> Result<String> {
            match &self.0 {
                Ok(code) => Ok(format!(
                    "{code}<!-- {} {} {prompt} -->",
                    theme.primary_color,
                    layout.len()
                )),
                Err(e) => Err(anyhow::anyhow!(e.clone())),
            }
        }
    }

    struct FailingAdvisor;

    impl ThemeAdvisor for FailingAdvisor {
        fn suggest(&self, _input: &str) -> Result<AutoConfigSuggestion> {
            anyhow::bail!("quota exceeded")
        }
    }

    struct ModelTextAdvisor(&'static str);

    impl ThemeAdvisor for ModelTextAdvisor {
        fn suggest(&self, _input: &str) -> Result<AutoConfigSuggestion> {
            Ok(AutoConfigSuggestion::from_model_text(self.0))
        }
    }

    #[test]
    fn test_generate_source_passes_configuration() {
        let generator = FixedGenerator(Ok("<main></main>".to_string()));
        let code = generate_source(&generator, &Snapshot::starter(), "make it pop");
        assert_eq!(code, "<main></main><!-- #6366f1 3 make it pop -->");
    }

    struct RawGenerator(&'static str);

    impl CodeGenerator for RawGenerator {
        fn generate(&self, _theme: &ThemeConfig, _layout: &Layout, _prompt: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_generate_source_keeps_single_line_fenced_code() {
        let generator = RawGenerator("```<main>hi</main>```");
        let code = generate_source(&generator, &Snapshot::starter(), "");
        assert_eq!(code, "<main>hi</main>");
    }

    #[test]
    fn test_generate_source_failure_returns_sentinel() {
        let generator = FixedGenerator(Err("network down".to_string()));
        let code = generate_source(&generator, &Snapshot::starter(), "");
        assert_eq!(code, CODE_GENERATION_FAILED);
    }

    #[test]
    fn test_failed_suggestion_is_noop_for_editor() {
        let mut editor = Editor::new();
        let suggestion = request_suggestion(&FailingAdvisor, "anything");

        assert!(suggestion.is_empty());
        assert!(!editor.apply_suggestion(&suggestion));
        assert_eq!(editor.history().past_len(), 0);
    }

    #[test]
    fn test_model_suggestion_applied_through_editor() {
        let advisor = ModelTextAdvisor(
            "```json\n{\"primaryColor\": \"#e11d48\", \"recommendedSections\": [\"hero\", \"footer\"]}\n```",
        );
        let mut editor = Editor::new();

        let suggestion = request_suggestion(&advisor, "rose themed");
        assert!(editor.apply_suggestion(&suggestion));
        assert_eq!(editor.snapshot().theme.primary_color, "#e11d48");
        assert_eq!(
            editor.snapshot().layout.kinds().collect::<Vec<_>>(),
            vec![SectionKind::Hero, SectionKind::Footer]
        );
    }
}
