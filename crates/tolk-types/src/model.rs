use serde::Deserialize;

use crate::language::Language;

/// Server response for a translate call
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TranslatedText {
    #[serde(rename = "translatedText")]
    pub text: String,
}

/// The editable screen model behind the loaded state.
///
/// `languages` is non-empty, `target_language` is drawn from it, and
/// `source_language` is either drawn from it or the auto-detect entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationModel {
    pub source_language: Language,
    pub target_language: Language,
    pub languages: Vec<Language>,
    pub text: String,
    pub translated_text: String,
}

impl TranslationModel {
    /// Fresh model for a newly fetched catalog: first entry becomes the
    /// target, source starts on auto-detect. `None` for an empty catalog.
    pub fn seeded(languages: Vec<Language>) -> Option<Self> {
        let target_language = languages.first()?.clone();
        Some(Self {
            source_language: Language::auto_detect(),
            target_language,
            languages,
            text: String::new(),
            translated_text: String::new(),
        })
    }

    /// Replace the catalog, keeping the user's text and selections.
    /// `None` for an empty catalog.
    pub fn with_languages(mut self, languages: Vec<Language>) -> Option<Self> {
        if languages.is_empty() {
            return None;
        }
        self.languages = languages;
        Some(self)
    }

    /// Source picker entries: auto-detect first, then the catalog.
    pub fn source_options(&self) -> Vec<Language> {
        let mut options = Vec::with_capacity(self.languages.len() + 1);
        options.push(Language::auto_detect());
        options.extend(self.languages.iter().cloned());
        options
    }
}
