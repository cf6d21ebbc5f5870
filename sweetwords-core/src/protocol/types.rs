//! Shared request/result shapes
//!
//! Every adapter consumes a [`GenerationRequest`] and produces a
//! [`GenerationResult`], whatever the vendor envelope looks like.

use crate::config::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output language of the generated message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Chinese, the primary locale
    #[default]
    Zh,
    /// English, the secondary locale
    En,
}

impl Language {
    /// Short code used in persisted records and on the command line
    pub fn code(&self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
        }
    }

    /// Generic message shown to the user when generation fails
    pub fn failure_message(&self) -> &'static str {
        match self {
            Language::Zh => "生成失败，请检查配置并重试。",
            Language::En => "Generation failed. Please check your configuration and try again.",
        }
    }

    /// Style preselected by the form for this language
    pub fn default_style(&self) -> &'static str {
        match self {
            Language::Zh => "诗意",
            Language::En => "poetic",
        }
    }

    /// Scene preselected by the form for this language
    pub fn default_scene(&self) -> &'static str {
        match self {
            Language::Zh => "想念",
            Language::En => "missing",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zh" => Ok(Language::Zh),
            "en" => Ok(Language::En),
            other => Err(ValidationError::invalid_value("language", "zh or en", other)),
        }
    }
}

/// Split a comma-separated keyword line into trimmed, non-empty entries
pub fn keywords_from_input(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// One user submission, validated at construction and immutable afterwards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    keywords: Vec<String>,
    style: String,
    scene: String,
    name: String,
    min_length: u32,
    max_length: u32,
    language: Language,
}

impl GenerationRequest {
    /// Start building a request
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// Keyword hints in the order the user gave them
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn scene(&self) -> &str {
        &self.scene
    }

    /// Recipient name woven into the message
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min_length(&self) -> u32 {
        self.min_length
    }

    pub fn max_length(&self) -> u32 {
        self.max_length
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

/// Builder for [`GenerationRequest`]
#[derive(Debug, Clone)]
pub struct GenerationRequestBuilder {
    keywords: Vec<String>,
    style: String,
    scene: String,
    name: String,
    min_length: u32,
    max_length: u32,
    language: Language,
}

impl Default for GenerationRequestBuilder {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            style: String::new(),
            scene: String::new(),
            name: String::new(),
            min_length: crate::config::DEFAULT_MIN_LENGTH,
            max_length: crate::config::DEFAULT_MAX_LENGTH,
            language: Language::default(),
        }
    }
}

impl GenerationRequestBuilder {
    /// Set the keyword hints
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Append a single keyword hint
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn scene(mut self, scene: impl Into<String>) -> Self {
        self.scene = scene.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the inclusive length bounds
    pub fn lengths(mut self, min_length: u32, max_length: u32) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Validate and build the request
    pub fn build(self) -> Result<GenerationRequest, ValidationError> {
        let name = required_text("name", self.name)?;
        let style = required_text("style", self.style)?;
        let scene = required_text("scene", self.scene)?;

        ValidationError::check_length_bounds(self.min_length, self.max_length)?;

        Ok(GenerationRequest {
            keywords: self.keywords,
            style,
            scene,
            name,
            min_length: self.min_length,
            max_length: self.max_length,
            language: self.language,
        })
    }
}

fn required_text(field: &str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(trimmed.to_string())
}

/// Normalized output of one adapter invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Generated text, empty on failure
    pub content: String,

    /// Human-readable failure description; present means `content` is unusable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationResult {
    /// A successful generation
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            error: None,
        }
    }

    /// A failed generation with an empty body
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            content: String::new(),
            error: Some(error.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> GenerationRequestBuilder {
        GenerationRequest::builder()
            .name("Alex")
            .style("sweet")
            .scene("morning")
    }

    #[test]
    fn test_keywords_from_input() {
        assert_eq!(
            keywords_from_input(" sun, , smile ,warmth,"),
            vec!["sun", "smile", "warmth"]
        );
        assert!(keywords_from_input("").is_empty());
        assert!(keywords_from_input(" , ").is_empty());
    }

    #[test]
    fn test_builder_trims_and_keeps_keyword_order() {
        let request = base()
            .name("  Alex ")
            .keywords(["rain", "sun"])
            .keyword("tea")
            .lengths(20, 30)
            .language(Language::En)
            .build()
            .unwrap();

        assert_eq!(request.name(), "Alex");
        assert_eq!(request.keywords(), ["rain", "sun", "tea"]);
        assert_eq!(request.max_length(), 30);
        assert_eq!(request.language(), Language::En);
    }

    #[test]
    fn test_builder_rejects_blank_fields() {
        let err = base().name("   ").build().unwrap_err();
        assert_eq!(err.field_path, "name");

        let err = base().scene("").build().unwrap_err();
        assert_eq!(err.field_path, "scene");
    }

    #[test]
    fn test_builder_rejects_inverted_lengths() {
        let err = base().lengths(30, 30).build().unwrap_err();
        assert_eq!(err.field_path, "min_length");

        let err = base().lengths(40, 30).build().unwrap_err();
        assert_eq!(err.field_path, "min_length");

        let err = base().lengths(0, 30).build().unwrap_err();
        assert_eq!(err.field_path, "min_length");
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert_eq!("zh".parse::<Language>().unwrap(), Language::Zh);
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(serde_json::to_string(&Language::Zh).unwrap(), "\"zh\"");
    }

    #[test]
    fn test_result_shape() {
        let ok = GenerationResult::success("hi");
        assert!(ok.is_ok());
        assert_eq!(serde_json::to_string(&ok).unwrap(), r#"{"content":"hi"}"#);

        let failed = GenerationResult::failure("HTTP error! status: 500");
        assert!(!failed.is_ok());
        assert!(failed.content.is_empty());
    }
}
