//! Language catalogue used to resolve the `{language}` value.
//!
//! The catalogue doubles as an allow-list: by default only known codes and
//! names reach the prompt, which keeps arbitrary text out of the system role.

use thiserror::Error;

use crate::ui::Style;

/// Supported language codes (ISO 639-1) and their English names.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("am", "Amharic"),
    ("ar", "Arabic"),
    ("az", "Azerbaijani"),
    ("be", "Belarusian"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("bs", "Bosnian"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("eu", "Basque"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fil", "Filipino"),
    ("fr", "French"),
    ("ga", "Irish"),
    ("gl", "Galician"),
    ("gu", "Gujarati"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("hy", "Armenian"),
    ("id", "Indonesian"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ka", "Georgian"),
    ("kk", "Kazakh"),
    ("km", "Khmer"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("la", "Latin"),
    ("lo", "Lao"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("mk", "Macedonian"),
    ("ml", "Malayalam"),
    ("mn", "Mongolian"),
    ("mr", "Marathi"),
    ("ms", "Malay"),
    ("mt", "Maltese"),
    ("my", "Myanmar (Burmese)"),
    ("ne", "Nepali"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pa", "Punjabi"),
    ("pl", "Polish"),
    ("ps", "Pashto"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sq", "Albanian"),
    ("sr", "Serbian"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tl", "Tagalog"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("uz", "Uzbek"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese (Simplified)"),
    ("zh-TW", "Chinese (Traditional)"),
];

/// Errors raised while resolving a language.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    /// Neither a known code nor a known name.
    #[error(
        "Invalid language: '{0}'\n\n\
         Use a code (ISO 639-1) such as ja, en, zh, ko, fr, de, es, or a name such as French.\n\
         Run 'langize languages' to see all supported languages."
    )]
    Unsupported(String),

    /// No target language was given anywhere.
    #[error(
        "Missing required configuration: 'to' (target language)\n\n\
         Please provide it via:\n  \
         - CLI option: langize --to <lang>\n  \
         - Config file: ~/.config/langize/config.toml"
    )]
    Missing,
}

/// Prints all supported languages to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported languages (ISO 639-1)"));
    for (code, name) in SUPPORTED_LANGUAGES {
        println!("{}", format_language_row(code, name));
    }
}

// Pad before styling: escape codes would otherwise count toward the width.
fn format_language_row(code: &str, name: &str) -> String {
    format!(
        "  {} {}",
        Style::code(format!("{code:5}")),
        Style::secondary(name)
    )
}

/// Looks up the English name for a language code. Codes are case sensitive.
pub fn language_name(code: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Resolves a code or a name to the canonical English name.
///
/// Codes must match exactly; names are compared ignoring ASCII case.
pub fn resolve_language(input: &str) -> Result<&'static str, LanguageError> {
    let input = input.trim();

    if let Some(name) = language_name(input) {
        return Ok(name);
    }

    SUPPORTED_LANGUAGES
        .iter()
        .find(|(_, name)| name.eq_ignore_ascii_case(input))
        .map(|(_, name)| *name)
        .ok_or_else(|| LanguageError::Unsupported(input.to_string()))
}
