//! Query language detection
//!
//! Best-effort detection over the user query so the prompt can instruct the
//! model to answer in kind. Detection failure is never an error; the default
//! tag is used instead.

use vca_domain::constants::LANGUAGE_DEFAULT;

/// Detect the language of a query, as a short ISO tag
///
/// Returns the two-letter ISO 639-1 code for common languages, the
/// three-letter ISO 639-3 code otherwise, and `"en"` when detection is not
/// applicable (empty or ambiguous input).
pub fn detect_language(text: &str) -> String {
    if text.trim().is_empty() {
        return LANGUAGE_DEFAULT.to_string();
    }

    match whatlang::detect(text) {
        Some(info) => iso_tag(info.lang()).to_string(),
        None => LANGUAGE_DEFAULT.to_string(),
    }
}

/// Map a detected language to its ISO 639-1 code where one is common
fn iso_tag(lang: whatlang::Lang) -> &'static str {
    use whatlang::Lang;
    match lang {
        Lang::Eng => "en",
        Lang::Spa => "es",
        Lang::Fra => "fr",
        Lang::Deu => "de",
        Lang::Ita => "it",
        Lang::Por => "pt",
        Lang::Nld => "nl",
        Lang::Rus => "ru",
        Lang::Ukr => "uk",
        Lang::Pol => "pl",
        Lang::Tur => "tr",
        Lang::Ara => "ar",
        Lang::Hin => "hi",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Cmn => "zh",
        other => other.code(),
    }
}
