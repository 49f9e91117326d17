//! The idiomatic-translation system prompt and its renderer.

use std::borrow::Cow;

use sha2::{Digest, Sha256};
use thiserror::Error;

/// Placeholder token substituted with the target language name.
#[allow(clippy::literal_string_with_formatting_args)]
pub const LANGUAGE_PLACEHOLDER: &str = "{language}";

/// Built-in system prompt asking the model to "{language}ize" text rather than
/// translate it word for word.
#[allow(clippy::literal_string_with_formatting_args)]
pub const TRANSLATION_SYSTEM_PROMPT: &str = "You are an expert in {language}, and English to {language} translation. What's important is not simply 'translating' but to '{language}ize'.\n\
     As in, you don't just translate words 1:1, but instead translate the phrase to {language},keeping the exact meaning of the phrase, but\n\
     stating it as an {language} would, with everything included (common phrases/way of saying things that don't directly translate, grammar, tenses, etc).\n\
     \n\
     {language}ize the following text, returning only exactly the text in the {language} language and nothing more:\n";

/// The built-in template, shared by every caller.
pub static TRANSLATION_TEMPLATE: PromptTemplate = PromptTemplate::translation();

/// Errors raised while rendering a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PromptError {
    /// The template text has no `{language}` slot to fill.
    #[error("prompt template does not contain the {} placeholder", LANGUAGE_PLACEHOLDER)]
    MissingPlaceholder,
}

/// A system prompt template with a single `{language}` substitution slot.
///
/// Templates are immutable once built; rendering never touches the stored
/// text, so a single value can be shared freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    text: Cow<'static, str>,
}

impl PromptTemplate {
    /// The built-in idiomatic-translation template.
    pub const fn translation() -> Self {
        Self {
            text: Cow::Borrowed(TRANSLATION_SYSTEM_PROMPT),
        }
    }

    /// A user-supplied template.
    ///
    /// The text is not checked here; a template without the placeholder
    /// fails when rendered.
    pub fn custom(text: impl Into<String>) -> Self {
        Self {
            text: Cow::Owned(text.into()),
        }
    }

    /// Raw template text, placeholders included.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` if this is the built-in template text.
    pub fn is_builtin(&self) -> bool {
        self.text == TRANSLATION_SYSTEM_PROMPT
    }

    /// Number of `{language}` slots in the template.
    pub fn placeholder_count(&self) -> usize {
        self.text.matches(LANGUAGE_PLACEHOLDER).count()
    }

    /// Renders the template for `language`.
    ///
    /// Every slot is replaced in a single pass over the template text, so a
    /// `language` value that itself contains `{language}` is inserted as-is.
    pub fn render(&self, language: &str) -> Result<String, PromptError> {
        if !self.text.contains(LANGUAGE_PLACEHOLDER) {
            return Err(PromptError::MissingPlaceholder);
        }

        Ok(self.text.replace(LANGUAGE_PLACEHOLDER, language))
    }

    /// SHA-256 of the template text, hex encoded.
    ///
    /// Stable for a given text, so callers can key cached model output on it.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.text.as_bytes());
        hex::encode(hasher.finalize())
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::translation()
    }
}
