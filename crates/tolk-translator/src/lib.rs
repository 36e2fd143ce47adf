use tolk_types::{DetectedLanguage, ErrorCause, Language, TranslatedText};

mod libretranslate;

pub use libretranslate::LibreTranslateClient;

/// Remote translation service interface
#[async_trait::async_trait]
pub trait TranslateApi: Send + Sync {
    /// Fetch the supported-language catalog. An empty catalog is valid data.
    async fn fetch_languages(&self) -> Result<Vec<Language>, TranslateError>;

    /// Detect the language of `text`, best candidates first
    async fn detect_language(&self, text: &str) -> Result<Vec<DetectedLanguage>, TranslateError>;

    /// Translate `text` between two language codes
    async fn translate_text(
        &self,
        text: &str,
        source_code: &str,
        target_code: &str,
    ) -> Result<TranslatedText, TranslateError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// Server rejected the request with a `{error}` payload
    #[error("API error: {0}")]
    Api(String),

    /// Transport failure, or an error status with no readable payload
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Success status but the body did not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl From<TranslateError> for ErrorCause {
    fn from(err: TranslateError) -> Self {
        match err {
            TranslateError::Api(message) => ErrorCause::Api(message),
            TranslateError::Network(err) => ErrorCause::Network(err.to_string()),
            TranslateError::Decode(message) => ErrorCause::Decode(message),
        }
    }
}
