use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tolk_types::{DetectedLanguage, Language, TranslatedText};

use crate::{TranslateApi, TranslateError};

/// Client for a LibreTranslate-compatible server
#[derive(Clone)]
pub struct LibreTranslateClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl LibreTranslateClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl TranslateApi for LibreTranslateClient {
    async fn fetch_languages(&self) -> Result<Vec<Language>, TranslateError> {
        let response = self
            .client
            .get(self.endpoint("languages"))
            .send()
            .await?;

        read_json(response).await
    }

    async fn detect_language(&self, text: &str) -> Result<Vec<DetectedLanguage>, TranslateError> {
        let params = [("q", text), ("api_key", &self.api_key)];

        let response = self
            .client
            .post(self.endpoint("detect"))
            .form(&params)
            .send()
            .await?;

        read_json(response).await
    }

    async fn translate_text(
        &self,
        text: &str,
        source_code: &str,
        target_code: &str,
    ) -> Result<TranslatedText, TranslateError> {
        let params = [
            ("q", text),
            ("source", source_code),
            ("target", target_code),
            ("format", "text"),
            ("api_key", &self.api_key),
        ];

        let response = self
            .client
            .post(self.endpoint("translate"))
            .form(&params)
            .send()
            .await?;

        read_json(response).await
    }
}

/// Failure payload the server attaches to error statuses
#[derive(Deserialize)]
struct ErrorPayload {
    error: String,
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, TranslateError> {
    if let Err(status_err) = response.error_for_status_ref() {
        let body = response.text().await.unwrap_or_default();
        return Err(match api_error(&body) {
            Some(message) => TranslateError::Api(message),
            None => TranslateError::Network(status_err),
        });
    }

    let body = response.text().await?;
    decode_json(&body)
}

fn api_error(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorPayload>(body)
        .ok()
        .map(|payload| payload.error)
}

fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, TranslateError> {
    serde_json::from_str(body).map_err(|err| TranslateError::Decode(err.to_string()))
}
