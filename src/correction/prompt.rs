//! Prompt construction for correction requests.

use crate::defaults;

/// System persona and task template sent with every correction request.
///
/// The template carries a `{text}` placeholder where the transcript chunk is
/// substituted. The defaults instruct a Japanese editor persona to fix
/// punctuation and typos without summarizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionPrompt {
    persona: String,
    template: String,
}

impl Default for CorrectionPrompt {
    fn default() -> Self {
        Self {
            persona: defaults::CORRECTION_PERSONA.to_string(),
            template: defaults::CORRECTION_TEMPLATE.to_string(),
        }
    }
}

impl CorrectionPrompt {
    pub fn new(persona: &str, template: &str) -> Self {
        Self {
            persona: persona.to_string(),
            template: template.to_string(),
        }
    }

    /// System message content.
    pub fn persona(&self) -> &str {
        &self.persona
    }

    /// Render the user message for one chunk.
    ///
    /// Every occurrence of the placeholder is replaced. A template without
    /// the placeholder renders unchanged, dropping the chunk; callers should
    /// check [`has_placeholder`](Self::has_placeholder) when accepting
    /// user-supplied templates.
    pub fn render(&self, chunk: &str) -> String {
        self.template.replace(defaults::TEMPLATE_PLACEHOLDER, chunk)
    }

    /// Whether the template contains the substitution placeholder.
    pub fn has_placeholder(&self) -> bool {
        self.template.contains(defaults::TEMPLATE_PLACEHOLDER)
    }
}
