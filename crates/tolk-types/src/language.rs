use serde::{Deserialize, Serialize};

/// Sentinel code for the client-side "let the server detect it" entry.
pub const AUTO_DETECT_CODE: &str = "auto_detect";

/// One entry of the server's supported-language catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
    /// Codes this language can be translated into
    #[serde(rename = "targets", default)]
    pub targets: Vec<String>,
}

impl Language {
    /// The auto-detect entry. Never part of the server catalog and only
    /// valid as a source language.
    pub fn auto_detect() -> Self {
        Self {
            code: AUTO_DETECT_CODE.to_string(),
            name: "Auto Detect".to_string(),
            targets: Vec::new(),
        }
    }

    pub fn is_auto_detect(&self) -> bool {
        self.code == AUTO_DETECT_CODE
    }
}

/// One detection candidate, best candidates first per server contract
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetectedLanguage {
    pub confidence: f64,
    #[serde(rename = "language")]
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_entry_without_targets_deserializes() {
        let language: Language = serde_json::from_str(r#"{"code":"en","name":"English"}"#)
            .expect("valid catalog entry");
        assert_eq!(language.code, "en");
        assert_eq!(language.name, "English");
        assert!(language.targets.is_empty());
    }

    #[test]
    fn detection_candidate_uses_language_field() {
        let detected: DetectedLanguage =
            serde_json::from_str(r#"{"confidence":92.5,"language":"es"}"#)
                .expect("valid detection candidate");
        assert_eq!(detected.code, "es");
        assert!((detected.confidence - 92.5).abs() < f64::EPSILON);
    }

    #[test]
    fn auto_detect_is_marked() {
        assert!(Language::auto_detect().is_auto_detect());
        let english = Language {
            code: "en".to_string(),
            name: "English".to_string(),
            targets: vec![],
        };
        assert!(!english.is_auto_detect());
    }
}
