use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tolk_translator::{TranslateApi, TranslateError};
use tolk_types::{DetectedLanguage, Language, TranslatedText};

/// Scripted stand-in for the remote API: queued responses, call counting,
/// optional per-response delay.
#[derive(Default)]
pub struct ScriptedApi {
    languages: Mutex<VecDeque<Result<Vec<Language>, TranslateError>>>,
    translations: Mutex<VecDeque<(Duration, Result<TranslatedText, TranslateError>)>>,
    pub translate_calls: Arc<AtomicUsize>,
}

impl ScriptedApi {
    pub fn with_catalog(languages: Vec<Language>) -> Self {
        let api = Self::default();
        api.queue_languages(Ok(languages));
        api
    }

    pub fn queue_languages(&self, result: Result<Vec<Language>, TranslateError>) {
        self.languages.lock().unwrap().push_back(result);
    }

    pub fn queue_translation(&self, result: Result<TranslatedText, TranslateError>) {
        self.queue_delayed_translation(Duration::ZERO, result);
    }

    pub fn queue_delayed_translation(
        &self,
        delay: Duration,
        result: Result<TranslatedText, TranslateError>,
    ) {
        self.translations.lock().unwrap().push_back((delay, result));
    }
}

#[async_trait]
impl TranslateApi for ScriptedApi {
    async fn fetch_languages(&self) -> Result<Vec<Language>, TranslateError> {
        self.languages
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected fetch_languages call")
    }

    async fn detect_language(&self, _text: &str) -> Result<Vec<DetectedLanguage>, TranslateError> {
        Ok(Vec::new())
    }

    async fn translate_text(
        &self,
        _text: &str,
        _source_code: &str,
        _target_code: &str,
    ) -> Result<TranslatedText, TranslateError> {
        self.translate_calls.fetch_add(1, Ordering::SeqCst);
        let (delay, result) = self
            .translations
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected translate_text call");
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        result
    }
}

pub fn catalog() -> Vec<Language> {
    vec![language("en", "English"), language("es", "Spanish")]
}

pub fn language(code: &str, name: &str) -> Language {
    Language {
        code: code.to_string(),
        name: name.to_string(),
        targets: Vec::new(),
    }
}

pub fn translated(text: &str) -> TranslatedText {
    TranslatedText {
        text: text.to_string(),
    }
}

/// A real reqwest transport error, produced without touching the network.
pub fn transport_error() -> TranslateError {
    let err = reqwest::Client::new()
        .get("http://")
        .build()
        .expect_err("an empty host must not build");
    TranslateError::Network(err)
}
