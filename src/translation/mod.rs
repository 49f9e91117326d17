mod language;
mod prompt;

pub use language::{
    LanguageError, SUPPORTED_LANGUAGES, language_name, print_languages, resolve_language,
};
pub use prompt::{
    LANGUAGE_PLACEHOLDER, PromptError, PromptTemplate, TRANSLATION_SYSTEM_PROMPT,
    TRANSLATION_TEMPLATE,
};
