use std::env;

use serde::{Deserialize, Serialize};

/// Settings for the LibreTranslate-compatible endpoint
#[derive(Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the translation server
    pub base_url: String,
    /// Account key sent with detect/translate calls, empty for anonymous use
    pub api_key: String,
}

impl ApiConfig {
    pub fn new() -> Self {
        let base_url = env::var("TRANSLATE_API_URL")
            .unwrap_or_else(|_| "https://libretranslate.com".to_string());
        let api_key = env::var("TRANSLATE_API_KEY").unwrap_or_default();

        Self { base_url, api_key }
    }
}
